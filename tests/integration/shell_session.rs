use roster::config::ShellConfig;
use roster::tooling::shell::{ScriptedPrompter, Shell};
use tempfile::TempDir;

use super::support::file_store;

#[test]
fn session_survives_restart_through_save_on_exit() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("students.json");

    let mut store = file_store(&path);
    assert!(store.load());
    let prompter = ScriptedPrompter::new([
        "1", "Alice Jones", "AB123", "20", "A", //
        "1", "Bob Lee", "XY987", "22", "B+", //
        "3", "ab123", "Alice Smith", "21", "A-", "y", //
        "8", "y",
    ]);
    let mut shell = Shell::new(&mut store, prompter, ShellConfig::default());
    shell.run().unwrap();
    assert!(path.exists());

    let mut reopened = file_store(&path);
    assert!(reopened.load());
    assert_eq!(reopened.count(), 2);
    let alice = reopened.find_by_id("AB123").unwrap();
    assert_eq!(alice.name, "Alice Smith");
    assert_eq!(alice.grade.as_str(), "A-");

    let prompter = ScriptedPrompter::new([
        "5", "1", "smith", //
        "5", "2", "nope99", //
        "4", "xy987", "y", //
        "7", "y", //
        "8", "n",
    ]);
    let mut shell = Shell::new(&mut reopened, prompter, ShellConfig::default());
    shell.run().unwrap();
    let transcript = shell.into_prompter().output();

    assert!(transcript.contains("Found 1 student(s)"));
    assert!(transcript.contains("No student found with ID: NOPE99"));
    assert!(transcript.contains("Student deleted successfully!"));
    // Load discarded the unsaved delete
    assert!(transcript.contains("Total students loaded: 2"));
    assert_eq!(reopened.count(), 2);
}

#[test]
fn confirmations_can_be_disabled() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("students.json");
    let mut store = file_store(&path);

    let config = ShellConfig {
        confirm_destructive: false,
        prompt_save_on_exit: false,
    };
    let prompter = ScriptedPrompter::new([
        "1", "Alice Jones", "AB123", "20", "A", //
        "4", "AB123", //
        "8",
    ]);
    let mut shell = Shell::new(&mut store, prompter, config);
    shell.run().unwrap();

    assert_eq!(store.count(), 0);
    assert!(!path.exists());
}
