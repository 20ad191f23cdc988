use super::task::Task;
use crate::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub priority: i64,
    pub tasks: Vec<Task>,
}

impl Project {
    pub fn new(title: impl Into<String>, priority: i64, tasks: Vec<Task>) -> Self {
        Self {
            title: title.into(),
            priority,
            tasks,
        }
    }

    /// Renders the header line `"<title>, p<priority>"` followed by one
    /// indented `"   - "` line per task.
    pub fn format(&self) -> String {
        let mut out = format!("{}, p{}", self.title, self.priority);
        for task in &self.tasks {
            out.push_str("\n   - ");
            out.push_str(&task.format());
        }
        out
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        super::decode(value, "project")
    }
}
