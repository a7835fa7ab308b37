//! Interactive menu shell
//!
//! Numbered menu over a [`RosterStore`]. Every field prompt re-asks until the
//! input validates, so nothing malformed reaches the store. Terminal I/O goes
//! through the [`Prompter`] trait; [`DialoguerPrompter`] is the real terminal
//! and [`ScriptedPrompter`] replays canned answers.

use crate::config::ShellConfig;
use crate::error::{ApiError, ValidationError};
use crate::store::RosterStore;
use crate::validation::{
    parse_confirmation, validate_age, validate_grade, validate_id, validate_name,
    validate_search_term,
};
use crate::views;
use std::collections::VecDeque;
use tracing::debug;

/// Validator handed to [`Prompter::input`]; `Err` carries the re-prompt message.
pub type InputCheck<'a> = &'a dyn Fn(&str) -> Result<(), String>;

/// Terminal interaction used by the shell
pub trait Prompter {
    /// Pick one of `items`; returns its index.
    fn select(&mut self, prompt: &str, items: &[&str]) -> Result<usize, ApiError>;

    /// Read a line, re-prompting until `check` accepts it.
    fn input(&mut self, prompt: &str, check: InputCheck<'_>) -> Result<String, ApiError>;

    /// Ask a yes/no question.
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool, ApiError>;

    /// Print a block of output.
    fn show(&mut self, text: &str);
}

/// Prompter backed by `dialoguer` on the controlling terminal
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl Prompter for DialoguerPrompter {
    fn select(&mut self, prompt: &str, items: &[&str]) -> Result<usize, ApiError> {
        use dialoguer::Select;
        Ok(Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact()?)
    }

    fn input(&mut self, prompt: &str, check: InputCheck<'_>) -> Result<String, ApiError> {
        use dialoguer::Input;
        let value: String = Input::new()
            .with_prompt(prompt)
            .validate_with(|raw: &String| check(raw))
            .interact_text()?;
        Ok(value)
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool, ApiError> {
        use dialoguer::Confirm;
        Ok(Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()?)
    }

    fn show(&mut self, text: &str) {
        println!("{}", text);
    }
}

/// Prompter that replays queued answers and records everything shown.
///
/// Select answers are 1-based menu numbers. Rejected inputs are recorded as
/// `Error: ...` lines and the next queued answer is tried, like a user
/// re-typing at the prompt.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    pub transcript: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    fn next_answer(&mut self, prompt: &str) -> Result<String, ApiError> {
        self.answers
            .pop_front()
            .ok_or_else(|| ApiError::Input(format!("no scripted answer for '{}'", prompt)))
    }

    /// Everything shown so far, one block per line.
    pub fn output(&self) -> String {
        self.transcript.join("\n")
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&mut self, prompt: &str, items: &[&str]) -> Result<usize, ApiError> {
        loop {
            let answer = self.next_answer(prompt)?;
            match answer.trim().parse::<usize>() {
                Ok(n) if n >= 1 && n <= items.len() => return Ok(n - 1),
                _ => self.transcript.push(format!(
                    "Error: Please enter a number between 1 and {}.",
                    items.len()
                )),
            }
        }
    }

    fn input(&mut self, prompt: &str, check: InputCheck<'_>) -> Result<String, ApiError> {
        loop {
            let answer = self.next_answer(prompt)?;
            match check(&answer) {
                Ok(()) => return Ok(answer),
                Err(message) => self.transcript.push(format!("Error: {}", message)),
            }
        }
    }

    fn confirm(&mut self, prompt: &str, _default: bool) -> Result<bool, ApiError> {
        loop {
            let answer = self.next_answer(prompt)?;
            match parse_confirmation(&answer) {
                Some(value) => return Ok(value),
                None => self.transcript.push("Error: Please enter Y or N.".to_string()),
            }
        }
    }

    fn show(&mut self, text: &str) {
        self.transcript.push(text.to_string());
    }
}

const MENU: [&str; 8] = [
    "1. Add Student",
    "2. View All Students",
    "3. Update Student",
    "4. Delete Student",
    "5. Search Student",
    "6. Save Data",
    "7. Load Data",
    "8. Exit",
];

/// Interactive session over one store
pub struct Shell<'a, P: Prompter> {
    store: &'a mut RosterStore,
    prompter: P,
    config: ShellConfig,
}

impl<'a, P: Prompter> Shell<'a, P> {
    pub fn new(store: &'a mut RosterStore, prompter: P, config: ShellConfig) -> Self {
        Self {
            store,
            prompter,
            config,
        }
    }

    /// Hand back the prompter, e.g. to inspect a scripted transcript.
    pub fn into_prompter(self) -> P {
        self.prompter
    }

    /// Run the menu loop until the user exits.
    ///
    /// Only input failures (such as a closed terminal) end the loop early.
    pub fn run(&mut self) -> Result<(), ApiError> {
        self.prompter
            .show(&views::format_section_heading("Student Roster"));
        loop {
            let prompt = format!("Main menu ({} students)", self.store.count());
            let choice = self.prompter.select(&prompt, &MENU)?;
            debug!(choice = choice + 1, "Menu selection");
            match choice {
                0 => self.add()?,
                1 => self.view_all(),
                2 => self.update()?,
                3 => self.delete()?,
                4 => self.search()?,
                5 => self.save(),
                6 => self.load()?,
                _ => {
                    self.exit()?;
                    return Ok(());
                }
            }
        }
    }

    fn ask<T>(
        &mut self,
        prompt: &str,
        parse: fn(&str) -> Result<T, ValidationError>,
    ) -> Result<T, ApiError> {
        let raw = self.prompter.input(prompt, &|s: &str| {
            parse(s).map(|_| ()).map_err(|e| e.to_string())
        })?;
        Ok(parse(&raw)?)
    }

    fn confirm_destructive(&mut self, prompt: &str) -> Result<bool, ApiError> {
        if !self.config.confirm_destructive {
            return Ok(true);
        }
        self.prompter.confirm(prompt, false)
    }

    fn add(&mut self) -> Result<(), ApiError> {
        self.prompter.show(&views::format_section_heading("Add New Student"));
        let name = self.ask("Enter student name", validate_name)?;
        let id = self.ask("Enter student ID", validate_id)?;
        let age = self.ask("Enter student age", validate_age)?;
        let grade = self.ask("Enter student grade", validate_grade)?;

        if self.store.create(&name, &id, age, grade) {
            self.prompter
                .show(&views::format_success("Student added successfully!"));
            if let Some(record) = self.store.find_by_id(&id) {
                let detail = views::format_record_detail(record);
                self.prompter.show(&detail);
            }
        } else {
            let err = ApiError::DuplicateId(id);
            self.prompter.show(&views::format_failure(&err.to_string()));
        }
        Ok(())
    }

    fn view_all(&mut self) {
        let listing = views::format_roster_table(self.store.records());
        self.prompter.show(&listing);
    }

    fn update(&mut self) -> Result<(), ApiError> {
        self.prompter.show(&views::format_section_heading("Update Student"));
        let id = self.ask("Enter student ID to update", validate_id)?;
        let current = match self.store.find_by_id(&id) {
            Some(record) => record.describe(),
            None => {
                let err = ApiError::NotFound(id);
                self.prompter.show(&views::format_failure(&err.to_string()));
                return Ok(());
            }
        };
        self.prompter
            .show(&format!("Current student details:\n{}", current));

        let name = self.ask("Enter new name", validate_name)?;
        let age = self.ask("Enter new age", validate_age)?;
        let grade = self.ask("Enter new grade", validate_grade)?;

        if !self.confirm_destructive("Are you sure you want to update this student?")? {
            self.prompter.show("Update cancelled.");
            return Ok(());
        }
        if self.store.update(&id, &name, age, grade) {
            self.prompter
                .show(&views::format_success("Student updated successfully!"));
            if let Some(record) = self.store.find_by_id(&id) {
                let line = record.describe();
                self.prompter.show(&line);
            }
        } else {
            self.prompter
                .show(&views::format_failure("Error updating student!"));
        }
        Ok(())
    }

    fn delete(&mut self) -> Result<(), ApiError> {
        self.prompter.show(&views::format_section_heading("Delete Student"));
        let id = self.ask("Enter student ID to delete", validate_id)?;
        let current = match self.store.find_by_id(&id) {
            Some(record) => record.describe(),
            None => {
                let err = ApiError::NotFound(id);
                self.prompter.show(&views::format_failure(&err.to_string()));
                return Ok(());
            }
        };
        self.prompter
            .show(&format!("Student to be deleted:\n{}", current));

        if !self.confirm_destructive("Are you sure you want to delete this student?")? {
            self.prompter.show("Deletion cancelled.");
            return Ok(());
        }
        if self.store.delete(&id) {
            self.prompter
                .show(&views::format_success("Student deleted successfully!"));
        } else {
            self.prompter
                .show(&views::format_failure("Error deleting student!"));
        }
        Ok(())
    }

    fn search(&mut self) -> Result<(), ApiError> {
        let kind = self
            .prompter
            .select("Search type", &["1. Search by Name", "2. Search by ID"])?;
        if kind == 0 {
            let term = self.ask("Enter name to search", validate_search_term)?;
            let results = self.store.search_by_name(&term);
            let out = views::format_search_results(&results, &term);
            self.prompter.show(&out);
        } else {
            let id = self.ask("Enter ID to search", validate_id)?;
            let out = match self.store.find_by_id(&id) {
                Some(record) => format!(
                    "{}\n{}",
                    views::format_section_heading(&format!("Search result for ID: {}", id)),
                    views::format_record_detail(record)
                ),
                None => views::format_failure(&format!("No student found with ID: {}", id)),
            };
            self.prompter.show(&out);
        }
        Ok(())
    }

    fn save(&mut self) {
        let out = if self.store.save() {
            format!(
                "{}\nTotal students saved: {}",
                views::format_success(&format!(
                    "Data saved successfully to {}",
                    self.store.location()
                )),
                self.store.count()
            )
        } else {
            views::format_failure(&ApiError::SaveFailed(self.store.location()).to_string())
        };
        self.prompter.show(&out);
    }

    fn load(&mut self) -> Result<(), ApiError> {
        if !self.confirm_destructive("This will replace current data. Continue?")? {
            self.prompter.show("Load operation cancelled.");
            return Ok(());
        }
        let out = if self.store.load() {
            format!(
                "{}\nTotal students loaded: {}",
                views::format_success("Data loaded successfully!"),
                self.store.count()
            )
        } else {
            format!(
                "{}\nStarting with an empty roster.",
                views::format_failure(&ApiError::LoadFailed(self.store.location()).to_string())
            )
        };
        self.prompter.show(&out);
        Ok(())
    }

    fn exit(&mut self) -> Result<(), ApiError> {
        if self.config.prompt_save_on_exit
            && self
                .prompter
                .confirm("Do you want to save data before exiting?", true)?
        {
            self.save();
        }
        self.prompter.show("Goodbye!");
        Ok(())
    }
}
