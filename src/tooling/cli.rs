//! CLI Tooling
//!
//! Command-line interface for roster operations. With no subcommand the
//! interactive menu shell starts; the one-shot subcommands load the roster,
//! apply a single operation, and save it again when something changed.

use crate::config::{ConfigLoader, RosterConfig};
use crate::error::ApiError;
use crate::logging::LogOverrides;
use crate::store::{JsonFilePersistence, RosterStore};
use crate::tooling::shell::{DialoguerPrompter, Shell};
use crate::validation::{validate_age, validate_grade, validate_id, validate_name, RecordDraft};
use crate::views;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;

/// Roster CLI - console student roster manager
#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(about = "Manage a student roster stored in a flat file")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Workspace root directory
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging to stderr
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Logging flags as overrides for the configured logging section.
    pub fn log_overrides(&self) -> LogOverrides {
        LogOverrides {
            verbose: self.verbose,
            level: self.log_level.clone(),
            format: self.log_format.clone(),
            output: self.log_output.clone(),
            file: self.log_file.clone(),
        }
    }

    /// The subcommand to run, defaulting to the interactive shell.
    pub fn command_or_default(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Shell)
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Start the interactive menu (default)
    Shell,
    /// Add a student
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        id: String,
        #[arg(long)]
        age: String,
        #[arg(long)]
        grade: String,
    },
    /// List all students
    List {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Show one student by ID
    Show {
        id: String,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Replace a student's name, age and grade
    Update {
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        age: String,
        #[arg(long)]
        grade: String,
    },
    /// Delete a student by ID
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        force: bool,
    },
    /// Search students by name (case-insensitive substring)
    Search {
        term: String,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Print the number of students
    Count,
    /// Print the effective configuration as TOML
    Config,
}

/// CLI context holding the loaded configuration and roster
pub struct CliContext {
    store: RosterStore,
    config: RosterConfig,
    workspace_root: PathBuf,
    data_file: PathBuf,
    /// Whether the startup load succeeded; one-shot commands refuse to read
    /// or overwrite a data file that could not be read.
    loaded: bool,
}

impl CliContext {
    /// Create a new CLI context
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = Self::load_config(&workspace_root, config_path.as_deref())?;
        Self::with_config(workspace_root, config)
    }

    /// Load configuration for a workspace, or from an explicit file.
    pub fn load_config(
        workspace_root: &Path,
        config_path: Option<&Path>,
    ) -> Result<RosterConfig, ApiError> {
        Ok(ConfigLoader::load_for(workspace_root, config_path)?)
    }

    /// Open the roster described by an already-loaded configuration.
    pub fn with_config(workspace_root: PathBuf, config: RosterConfig) -> Result<Self, ApiError> {
        let data_file = config.storage.resolve_data_file(&workspace_root)?;
        let mut store = RosterStore::new(Box::new(JsonFilePersistence::new(&data_file)));
        let loaded = store.load();
        info!(
            data_file = %data_file.display(),
            loaded,
            count = store.count(),
            "Opened roster"
        );

        Ok(Self {
            store,
            config,
            workspace_root,
            data_file,
            loaded,
        })
    }

    pub fn store(&self) -> &RosterStore {
        &self.store
    }

    pub fn config(&self) -> &RosterConfig {
        &self.config
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    pub fn workspace_root(&self) -> &Path {
        &self.workspace_root
    }

    /// Execute a CLI command
    pub fn execute(&mut self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Shell => self.handle_shell(),
            Commands::Add {
                name,
                id,
                age,
                grade,
            } => self.handle_add(name, id, age, grade),
            Commands::List { format } => self.handle_list(format),
            Commands::Show { id, format } => self.handle_show(id, format),
            Commands::Update {
                id,
                name,
                age,
                grade,
            } => self.handle_update(id, name, age, grade),
            Commands::Delete { id, force } => self.handle_delete(id, *force),
            Commands::Search { term, format } => self.handle_search(term, format),
            Commands::Count => {
                self.ensure_loaded()?;
                Ok(self.store.count().to_string())
            }
            Commands::Config => toml::to_string_pretty(&self.config)
                .map_err(|e| ApiError::ConfigError(format!("Failed to render config: {}", e))),
        }
    }

    fn handle_shell(&mut self) -> Result<String, ApiError> {
        if !self.loaded {
            println!(
                "{}",
                views::format_failure(&format!(
                    "Could not read {}; starting with an empty roster.",
                    self.data_file.display()
                ))
            );
        }
        let shell_config = self.config.shell.clone();
        let mut shell = Shell::new(&mut self.store, DialoguerPrompter, shell_config);
        shell.run()?;
        Ok(String::new())
    }

    fn ensure_loaded(&self) -> Result<(), ApiError> {
        if !self.loaded {
            return Err(ApiError::LoadFailed(self.data_file.display().to_string()));
        }
        Ok(())
    }

    fn persist(&self) -> Result<(), ApiError> {
        if !self.store.save() {
            return Err(ApiError::SaveFailed(self.data_file.display().to_string()));
        }
        Ok(())
    }

    fn handle_add(
        &mut self,
        name: &str,
        id: &str,
        age: &str,
        grade: &str,
    ) -> Result<String, ApiError> {
        let draft = RecordDraft::validate(name, id, age, grade)?;
        self.ensure_loaded()?;
        if !self
            .store
            .create(&draft.name, &draft.id, draft.age, draft.grade)
        {
            return Err(ApiError::DuplicateId(draft.id));
        }
        self.persist()?;
        let record = self
            .store
            .find_by_id(&draft.id)
            .ok_or_else(|| ApiError::NotFound(draft.id.clone()))?;
        Ok(format!(
            "{}\n{}",
            views::format_success("Student added successfully!"),
            views::format_record_detail(record)
        ))
    }

    fn handle_list(&self, format: &str) -> Result<String, ApiError> {
        self.ensure_loaded()?;
        if format == "json" {
            return views::records_to_json(self.store.records());
        }
        Ok(views::format_roster_table(self.store.records()))
    }

    fn handle_show(&self, id: &str, format: &str) -> Result<String, ApiError> {
        let id = validate_id(id)?;
        self.ensure_loaded()?;
        let record = self
            .store
            .find_by_id(&id)
            .ok_or_else(|| ApiError::NotFound(id.clone()))?;
        if format == "json" {
            return views::record_to_json(record);
        }
        Ok(views::format_record_detail(record))
    }

    fn handle_update(
        &mut self,
        id: &str,
        name: &str,
        age: &str,
        grade: &str,
    ) -> Result<String, ApiError> {
        let id = validate_id(id)?;
        let name = validate_name(name)?;
        let age = validate_age(age)?;
        let grade = validate_grade(grade)?;
        self.ensure_loaded()?;
        if !self.store.update(&id, &name, age, grade) {
            return Err(ApiError::NotFound(id));
        }
        self.persist()?;
        let line = self
            .store
            .find_by_id(&id)
            .map(|r| r.describe())
            .unwrap_or_default();
        Ok(format!(
            "{}\n{}",
            views::format_success("Student updated successfully!"),
            line
        ))
    }

    fn handle_delete(&mut self, id: &str, force: bool) -> Result<String, ApiError> {
        let id = validate_id(id)?;
        self.ensure_loaded()?;
        let current = self
            .store
            .find_by_id(&id)
            .map(|r| r.describe())
            .ok_or_else(|| ApiError::NotFound(id.clone()))?;

        if !force {
            use dialoguer::Confirm;
            let confirmed = Confirm::new()
                .with_prompt(format!("Delete {}?", current))
                .interact()?;
            if !confirmed {
                return Ok("Deletion cancelled.".to_string());
            }
        }

        if !self.store.delete(&id) {
            return Err(ApiError::NotFound(id));
        }
        self.persist()?;
        Ok(views::format_success(&format!("Deleted student {}", id)))
    }

    fn handle_search(&self, term: &str, format: &str) -> Result<String, ApiError> {
        self.ensure_loaded()?;
        let results = self.store.search_by_name(term);
        if format == "json" {
            return views::records_to_json(results);
        }
        Ok(views::format_search_results(&results, term))
    }
}
