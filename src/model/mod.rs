//! Data models for prio.
//!
//! This module defines the core data structures:
//!
//! - [`Task`]: A titled unit of work with a free-text status
//! - [`Project`]: A titled, prioritised container of ordered tasks
//! - [`ProjectList`]: The full collection of projects, in display order
//!
//! Every type serializes to the JSON shape stored on disk. Decoding goes
//! through `from_value`, which checks the schema and reports
//! [`PrioError::MalformedRecord`] instead of a raw serde error.

mod project;
mod project_list;
mod task;

pub use project::Project;
pub use project_list::ProjectList;
pub use task::Task;

use crate::error::{PrioError, Result};
use serde::de::DeserializeOwned;

fn decode<T: DeserializeOwned>(value: serde_json::Value, what: &str) -> Result<T> {
    serde_json::from_value(value).map_err(|e| PrioError::MalformedRecord(format!("{what}: {e}")))
}
