//! File-based storage layer for prio.
//!
//! The whole project list lives in a single JSON document whose root is an
//! array of projects.
//!
//! ## File Format
//!
//! ```json
//! [
//!   {
//!     "title": "Launch",
//!     "priority": 2,
//!     "tasks": [
//!       { "title": "Write docs", "status": "in-progress" }
//!     ]
//!   }
//! ]
//! ```
//!
//! ## Components
//!
//! - [`JsonStore`]: load and save a [`ProjectList`](crate::model::ProjectList)

mod json_store;

pub use json_store::{DEFAULT_FILE, JsonStore};
