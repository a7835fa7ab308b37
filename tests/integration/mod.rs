//! Integration tests for the roster store, persistence and tooling

mod cli_workflow;
mod shell_session;
mod store_contract;
mod store_persistence;
mod support;
