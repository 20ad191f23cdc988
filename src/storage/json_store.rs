use crate::{
    error::{PrioError, Result},
    model::ProjectList,
};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File name used when neither the command line nor a config file names one.
pub const DEFAULT_FILE: &str = "tasks.json";

pub struct JsonStore {
    path: PathBuf,
    pretty: bool,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            pretty: true,
        }
    }

    /// Write single-line JSON instead of indented output.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the project list. A missing file is a first run and yields an
    /// empty list.
    pub fn load(&self) -> Result<ProjectList> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "No project file yet, starting empty");
                return Ok(ProjectList::default());
            }
            Err(e) => return Err(PrioError::persistence(&self.path, e)),
        };

        let value: serde_json::Value = serde_json::from_str(&content)
            .map_err(|e| PrioError::persistence(&self.path, e.into()))?;
        let list = ProjectList::from_value(value)?;

        tracing::info!(path = %self.path.display(), projects = list.len(), "Loaded projects");
        Ok(list)
    }

    /// Overwrite the file with the full project list.
    pub fn save(&self, list: &ProjectList) -> Result<()> {
        tracing::info!(path = %self.path.display(), projects = list.len(), "Saving projects");

        let content = list.to_json(self.pretty)?;
        std::fs::write(&self.path, content).map_err(|e| PrioError::persistence(&self.path, e))
    }
}
