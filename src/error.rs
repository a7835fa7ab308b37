//! Error types for the roster system.

use thiserror::Error;

/// Field-shape violations caught before input reaches the store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Name must be at least 2 characters long")]
    NameTooShort,

    #[error("Name can only contain letters and spaces")]
    InvalidNameCharacters,

    #[error("ID cannot be empty")]
    EmptyId,

    #[error("ID must be at least 3 characters long")]
    IdTooShort,

    #[error("ID can only contain letters and numbers")]
    InvalidIdCharacters,

    #[error("Please enter a valid number for age")]
    AgeNotNumeric,

    #[error("Age must be between {min} and {max}, got {value}")]
    AgeOutOfRange { value: u32, min: u8, max: u8 },

    #[error("Grade cannot be empty")]
    EmptyGrade,

    #[error("Grade must be A-F (with optional + or -) or PASS/FAIL, got '{0}'")]
    InvalidGrade(String),

    #[error("Input cannot be empty")]
    EmptyInput,
}

/// Persistence backend errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Corrupt roster data in {location}: {reason}")]
    Corrupt { location: String, reason: String },

    #[error("Serialization error: {0}")]
    Serialize(String),
}

/// Errors surfaced by the command layer
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("Storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("A student with ID '{0}' already exists")]
    DuplicateId(String),

    #[error("Student with ID '{0}' not found")]
    NotFound(String),

    #[error("Failed to save roster to {0}")]
    SaveFailed(String),

    #[error("Failed to load roster from {0}")]
    LoadFailed(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Failed to get user input: {0}")]
    Input(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

impl From<dialoguer::Error> for ApiError {
    fn from(err: dialoguer::Error) -> Self {
        ApiError::Input(err.to_string())
    }
}
