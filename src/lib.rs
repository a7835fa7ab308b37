//! Roster: Console Student Roster Manager
//!
//! Keeps an ordered, in-memory collection of student records with
//! create/read/update/delete and name search, persisted wholesale to a
//! single flat file between runs.

pub mod config;
pub mod error;
pub mod logging;
pub mod record;
pub mod store;
pub mod tooling;
pub mod types;
pub mod validation;
pub mod views;

pub use error::{ApiError, StorageError, ValidationError};
pub use record::{Grade, Record};
pub use store::RosterStore;
