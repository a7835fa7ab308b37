use parking_lot::Mutex;
use roster::record::Grade;
use roster::store::{JsonFilePersistence, RosterStore};
use roster::validation::validate_grade;
use std::path::Path;
use tempfile::TempDir;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Run `f` with HOME and the XDG roots pointed into `temp_dir`.
pub fn with_xdg_env<F, R>(temp_dir: &TempDir, f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = ENV_LOCK.lock();
    let keys = ["HOME", "XDG_CONFIG_HOME", "XDG_DATA_HOME"];
    let saved: Vec<Option<String>> = keys.iter().map(|k| std::env::var(k).ok()).collect();

    let home = temp_dir.path().join("home");
    std::fs::create_dir_all(&home).unwrap();
    std::env::set_var("HOME", &home);
    std::env::set_var("XDG_CONFIG_HOME", home.join(".config"));
    std::env::set_var("XDG_DATA_HOME", home.join(".local").join("share"));

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(f));

    for (key, value) in keys.iter().zip(saved) {
        match value {
            Some(v) => std::env::set_var(key, v),
            None => std::env::remove_var(key),
        }
    }

    match result {
        Ok(r) => r,
        Err(panic) => std::panic::resume_unwind(panic),
    }
}

pub fn grade(raw: &str) -> Grade {
    validate_grade(raw).unwrap()
}

/// Store backed by a JSON file at `path`, not yet loaded.
pub fn file_store(path: &Path) -> RosterStore {
    RosterStore::new(Box::new(JsonFilePersistence::new(path)))
}
