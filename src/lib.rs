// nct: Library root
//
// Re-exports the gateway, names, unlock, workflow, config and CLI modules.

pub mod cli;
pub mod config;
pub mod error;
pub mod gateway;
pub mod names;
pub mod unlock;
pub mod workflow;

pub use error::{NctError, Result};
