use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub title: String,
    pub status: String,
}

impl Task {
    pub fn new(title: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            status: status.into(),
        }
    }

    /// Renders as `"<title>, <status>"`.
    pub fn format(&self) -> String {
        self.to_string()
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        super::decode(value, "task")
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.title, self.status)
    }
}
