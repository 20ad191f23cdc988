//! # prio - a tiny interactive task manager for prioritising projects
//!
//! prio keeps an ordered list of projects, each with an integer priority and
//! an ordered list of tasks carrying a free-text status. The list lives in a
//! single JSON file that is loaded on start and written back on exit.
//!
//! ## Quick Start
//!
//! ```bash
//! # Use ./tasks.json
//! prio
//!
//! # Use another file
//! prio ~/work.json
//! ```
//!
//! The program then shows a numbered menu: add a project, list projects,
//! delete a project, or exit. Ctrl-C at any prompt saves and exits.
//!
//! ## Modules
//!
//! - [`app`]: The menu loop and its states
//! - [`cli`]: Command-line arguments and menu action handlers
//! - [`config`]: Optional `.prio.toml` / `.prio.yml` configuration
//! - [`error`]: Error types and result aliases
//! - [`model`]: Data models (Task, Project, ProjectList)
//! - [`prompt`]: Prompting the user and interrupt delivery
//! - [`storage`]: JSON file persistence

/// The interactive menu loop.
pub mod app;

/// Command-line interface definitions using clap, plus menu action handlers.
pub mod cli;

/// Configuration loading.
///
/// Handles `.prio.toml` / `.prio.yml` files and project file resolution.
pub mod config;

/// Error types and result aliases.
///
/// Defines `PrioError` enum and `Result<T>` type alias.
pub mod error;

pub mod logging;

/// Data models for prio.
pub mod model;

pub mod prompt;

/// File-based storage layer.
pub mod storage;
