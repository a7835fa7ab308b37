//! Config source composition.

pub mod merge_policy;
pub mod service;
