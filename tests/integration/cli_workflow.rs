use std::fs;

use roster::tooling::cli::{CliContext, Commands};
use roster::ApiError;
use tempfile::TempDir;

use super::support::with_xdg_env;

fn add(name: &str, id: &str, age: &str, grade: &str) -> Commands {
    Commands::Add {
        name: name.to_string(),
        id: id.to_string(),
        age: age.to_string(),
        grade: grade.to_string(),
    }
}

#[test]
fn default_data_file_lives_under_xdg_data_home() {
    let temp_dir = TempDir::new().unwrap();
    with_xdg_env(&temp_dir, || {
        let workspace_root = temp_dir.path().join("workspace");
        fs::create_dir_all(&workspace_root).unwrap();

        let mut cli = CliContext::new(workspace_root.clone(), None).unwrap();
        cli.execute(&add("Alice Jones", "AB123", "20", "A")).unwrap();

        let data_file = cli.data_file().to_path_buf();
        assert!(data_file.exists());
        assert!(data_file.starts_with(temp_dir.path().join("home").join(".local").join("share")));
        assert!(!workspace_root.join("students.json").exists());
    });
}

#[test]
fn workspace_config_file_redirects_storage() {
    let temp_dir = TempDir::new().unwrap();
    with_xdg_env(&temp_dir, || {
        let workspace_root = temp_dir.path().join("workspace");
        fs::create_dir_all(&workspace_root).unwrap();
        fs::write(
            workspace_root.join("roster.toml"),
            "[storage]\ndata_file = \"class/roster.json\"\n",
        )
        .unwrap();

        let mut cli = CliContext::new(workspace_root.clone(), None).unwrap();
        cli.execute(&add("Bob Lee", "XY987", "22", "B+")).unwrap();
        assert!(workspace_root.join("class").join("roster.json").exists());
    });
}

#[test]
fn one_shot_commands_share_state_across_invocations() {
    let temp_dir = TempDir::new().unwrap();
    with_xdg_env(&temp_dir, || {
        let workspace_root = temp_dir.path().join("workspace");
        fs::create_dir_all(&workspace_root).unwrap();

        {
            let mut cli = CliContext::new(workspace_root.clone(), None).unwrap();
            cli.execute(&add("Alice Jones", "AB123", "20", "A")).unwrap();
            cli.execute(&add("Bob Lee", "XY987", "22", "B+")).unwrap();
        }

        let mut cli = CliContext::new(workspace_root.clone(), None).unwrap();
        assert_eq!(cli.execute(&Commands::Count).unwrap(), "2");

        let output = cli
            .execute(&Commands::Search {
                term: "LEE".to_string(),
                format: "json".to_string(),
            })
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        let hits = parsed.as_array().unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0]["id"], "XY987");

        let output = cli
            .execute(&Commands::List {
                format: "json".to_string(),
            })
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        let ids: Vec<&str> = parsed
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["AB123", "XY987"]);

        let output = cli
            .execute(&Commands::Show {
                id: " xy987 ".to_string(),
                format: "json".to_string(),
            })
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["name"], "Bob Lee");
    });
}

#[test]
fn show_unknown_id_is_not_found() {
    let temp_dir = TempDir::new().unwrap();
    with_xdg_env(&temp_dir, || {
        let workspace_root = temp_dir.path().join("workspace");
        fs::create_dir_all(&workspace_root).unwrap();

        let mut cli = CliContext::new(workspace_root, None).unwrap();
        let err = cli
            .execute(&Commands::Show {
                id: "ZZZ999".to_string(),
                format: "text".to_string(),
            })
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound(ref id) if id == "ZZZ999"));
    });
}

#[test]
fn explicit_config_file_must_exist() {
    let temp_dir = TempDir::new().unwrap();
    with_xdg_env(&temp_dir, || {
        let workspace_root = temp_dir.path().join("workspace");
        fs::create_dir_all(&workspace_root).unwrap();
        let missing = temp_dir.path().join("missing.toml");
        assert!(matches!(
            CliContext::new(workspace_root, Some(missing)),
            Err(ApiError::ConfigError(_))
        ));
    });
}
