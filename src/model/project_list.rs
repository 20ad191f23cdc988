use super::project::Project;
use crate::error::{PrioError, Result};
use serde::{Deserialize, Serialize};

/// Ordered collection of projects. Serializes as a bare JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectList {
    projects: Vec<Project>,
}

impl ProjectList {
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Project> {
        self.projects.iter()
    }

    /// Project titles in display order, for building a selection menu.
    pub fn titles(&self) -> Vec<String> {
        self.projects.iter().map(|p| p.title.clone()).collect()
    }

    pub fn append(&mut self, project: Project) {
        self.projects.push(project);
    }

    /// Removes and returns the project at `index`, closing the gap.
    pub fn remove_at(&mut self, index: usize) -> Result<Project> {
        if index >= self.projects.len() {
            return Err(PrioError::IndexOutOfRange {
                index,
                len: self.projects.len(),
            });
        }
        Ok(self.projects.remove(index))
    }

    pub fn format(&self) -> String {
        let mut out = String::from("Projects:\n");
        for (index, project) in self.projects.iter().enumerate() {
            out.push_str(&format!("{}. {}\n", index + 1, project.format()));
        }
        out
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        super::decode(value, "project list")
    }

    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

impl<'a> IntoIterator for &'a ProjectList {
    type Item = &'a Project;
    type IntoIter = std::slice::Iter<'a, Project>;

    fn into_iter(self) -> Self::IntoIter {
        self.projects.iter()
    }
}
