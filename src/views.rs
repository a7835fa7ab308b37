//! Roster Views
//!
//! Human-readable and JSON renderings of records for the CLI and the
//! interactive shell.

use crate::error::{ApiError, StorageError};
use crate::record::Record;
use comfy_table::presets::{UTF8_BORDERS_ONLY, UTF8_FULL};
use comfy_table::Table;
use owo_colors::OwoColorize;

/// Format a section heading with bold/underline.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

pub fn format_success(message: &str) -> String {
    format!("{} {}", "✓".green(), message)
}

pub fn format_failure(message: &str) -> String {
    format!("{} {}", "✗".red(), message)
}

fn record_table<'a>(records: impl IntoIterator<Item = &'a Record>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["#", "ID", "Name", "Age", "Grade"]);
    for (index, record) in records.into_iter().enumerate() {
        table.add_row(vec![
            (index + 1).to_string(),
            record.id().to_string(),
            record.name.clone(),
            record.age.to_string(),
            record.grade.to_string(),
        ]);
    }
    table
}

/// Numbered listing of every record with a total line.
pub fn format_roster_table(records: &[Record]) -> String {
    if records.is_empty() {
        return "No students found in the system.".to_string();
    }
    format!(
        "{}\n\n{}\nTotal students: {}",
        format_section_heading("All Students"),
        record_table(records),
        records.len()
    )
}

/// Search results headed by the uppercased search term.
pub fn format_search_results(results: &[&Record], term: &str) -> String {
    if results.is_empty() {
        return format!("No students found matching: {}", term);
    }
    format!(
        "{}\n\n{}\nFound {} student(s)",
        format_section_heading(&format!("Search results for: {}", term.to_uppercase())),
        record_table(results.iter().copied()),
        results.len()
    )
}

/// Field/value breakdown of a single record.
pub fn format_record_detail(record: &Record) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Field", "Value"]);
    table.add_row(vec!["ID".to_string(), record.id().to_string()]);
    table.add_row(vec!["Name".to_string(), record.name.clone()]);
    table.add_row(vec!["Age".to_string(), record.age.to_string()]);
    table.add_row(vec!["Grade".to_string(), record.grade.to_string()]);
    table.to_string()
}

/// Pretty JSON array of records.
pub fn records_to_json<'a>(
    records: impl IntoIterator<Item = &'a Record>,
) -> Result<String, ApiError> {
    let records: Vec<&Record> = records.into_iter().collect();
    serde_json::to_string_pretty(&records)
        .map_err(|e| ApiError::StorageError(StorageError::Serialize(e.to_string())))
}

/// Pretty JSON object for one record.
pub fn record_to_json(record: &Record) -> Result<String, ApiError> {
    serde_json::to_string_pretty(record)
        .map_err(|e| ApiError::StorageError(StorageError::Serialize(e.to_string())))
}
