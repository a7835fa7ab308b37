use proptest::prelude::*;
use roster::store::{MemoryPersistence, RosterStore};

use super::support::grade;

fn memory_store() -> RosterStore {
    RosterStore::new(Box::new(MemoryPersistence::new()))
}

#[test]
fn roster_scenario_create_search_delete() {
    let mut store = memory_store();
    assert!(store.create("Alice Jones", "AB123", 20, grade("A")));
    assert!(store.create("Bob Lee", "XY987", 22, grade("B+")));
    assert_eq!(store.count(), 2);

    let hits: Vec<&str> = store
        .search_by_name("lee")
        .into_iter()
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(hits, vec!["Bob Lee"]);

    assert!(store.delete("ab123"));
    assert_eq!(store.count(), 1);
    assert!(store.find_by_id("AB123").is_none());
}

#[test]
fn search_examples_for_alice_smith() {
    let mut store = memory_store();
    store.create("Alice Smith", "AS001", 30, grade("C-"));
    for query in ["ali", "SMITH", ""] {
        assert_eq!(store.search_by_name(query).len(), 1, "query {:?}", query);
    }
    assert!(store.search_by_name("bob").is_empty());
}

#[test]
fn delete_unknown_leaves_count() {
    let mut store = memory_store();
    store.create("Alice Smith", "AS001", 30, grade("C"));
    assert!(!store.delete("NOPE1"));
    assert_eq!(store.count(), 1);
}

#[test]
fn update_changes_exactly_mutable_fields() {
    let mut store = memory_store();
    store.create("Alice Smith", "AS001", 30, grade("C"));
    store.create("Bob Lee", "BL002", 40, grade("D"));

    assert!(store.update("as001", "Alicia Smith", 31, grade("FAIL")));
    let record = store.find_by_id("AS001").unwrap();
    assert_eq!(record.id(), "AS001");
    assert_eq!(record.name, "Alicia Smith");
    assert_eq!(record.age, 31);
    assert_eq!(record.grade.as_str(), "FAIL");

    let other = store.find_by_id("BL002").unwrap();
    assert_eq!(other.name, "Bob Lee");
    assert_eq!(other.age, 40);
}

fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z]{2,12}( [A-Za-z]{1,12})?"
}

fn id_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9]{3,10}"
}

fn grade_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-F][+-]?".prop_map(|s| s),
        Just("PASS".to_string()),
        Just("FAIL".to_string()),
    ]
}

proptest! {
    #[test]
    fn create_then_find_any_case_with_whitespace(
        name in name_strategy(),
        id in id_strategy(),
        age in 5u8..=100,
        grade_raw in grade_strategy(),
        lower in any::<bool>(),
    ) {
        let mut store = memory_store();
        prop_assert!(store.create(&name, &id, age, grade(&grade_raw)));

        let probe = if lower { id.to_lowercase() } else { id.to_uppercase() };
        let found = store.find_by_id(&format!("  {}\t", probe));
        prop_assert!(found.is_some());
        let found = found.unwrap();
        prop_assert_eq!(found.id(), id.to_uppercase());
        prop_assert_eq!(&found.name, &name);
        prop_assert_eq!(found.age, age);
        prop_assert_eq!(found.grade.as_str(), grade_raw.as_str());
    }

    #[test]
    fn duplicate_create_is_rejected_in_any_case(
        id in id_strategy(),
        lower in any::<bool>(),
    ) {
        let mut store = memory_store();
        prop_assert!(store.create("First Person", &id, 20, grade("A")));
        let again = if lower { id.to_lowercase() } else { id.to_uppercase() };
        prop_assert!(!store.create("Second Person", &again, 21, grade("B")));
        prop_assert_eq!(store.count(), 1);
    }
}
