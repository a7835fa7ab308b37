use roster::store::MemoryPersistence;
use roster::RosterStore;
use tempfile::TempDir;

use super::support::{file_store, grade};

#[test]
fn save_then_fresh_load_round_trips_in_order() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("students.json");

    let mut first = file_store(&path);
    first.create("Cara Diaz", "CD300", 19, grade("B-"));
    first.create("Alice Jones", "AB123", 20, grade("A"));
    first.create("Bob Lee", "XY987", 22, grade("PASS"));
    first.delete("AB123");
    first.create("Dan Wu", "DW404", 64, grade("F"));
    assert!(first.save());

    let mut second = file_store(&path);
    assert!(second.load());
    assert_eq!(second.count(), first.count());
    for (a, b) in first.records().iter().zip(second.records()) {
        assert!(a.same_fields(b), "{} != {}", a, b);
    }
}

#[test]
fn missing_file_loads_empty_successfully() {
    let temp = TempDir::new().unwrap();
    let mut store = file_store(&temp.path().join("never-written.json"));
    assert!(store.load());
    assert_eq!(store.count(), 0);
}

#[test]
fn corrupt_file_loads_empty_with_failure() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("students.json");
    std::fs::write(&path, b"\xff\xfe garbage").unwrap();

    let mut store = file_store(&path);
    store.create("Alice Jones", "AB123", 20, grade("A"));
    assert!(!store.load());
    assert_eq!(store.count(), 0);
}

#[test]
fn save_failure_is_not_fatal() {
    let temp = TempDir::new().unwrap();
    // A directory where the data file should be makes the rename fail
    let path = temp.path().join("students.json");
    std::fs::create_dir_all(path.join("occupied")).unwrap();

    let mut store = file_store(&path);
    store.create("Alice Jones", "AB123", 20, grade("A"));
    assert!(!store.save());
    assert_eq!(store.count(), 1);
    assert!(store.create("Bob Lee", "XY987", 22, grade("B")));
}

#[test]
fn save_overwrites_previous_state_wholesale() {
    let backend = MemoryPersistence::new();
    let mut store = RosterStore::new(Box::new(backend.clone()));
    store.create("Alice Jones", "AB123", 20, grade("A"));
    store.create("Bob Lee", "XY987", 22, grade("B"));
    assert!(store.save());

    store.delete("XY987");
    assert!(store.save());

    let mut reader = RosterStore::new(Box::new(backend));
    assert!(reader.load());
    assert_eq!(reader.count(), 1);
    assert_eq!(reader.records()[0].id(), "AB123");
}

#[test]
fn on_disk_format_is_json_document() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("students.json");
    let mut store = file_store(&path);
    store.create("Bob Lee", "xy987", 22, grade("b+"));
    assert!(store.save());

    let parsed: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(
        parsed,
        serde_json::json!({
            "records": [{"id": "XY987", "name": "Bob Lee", "age": 22, "grade": "B+"}]
        })
    );
}
