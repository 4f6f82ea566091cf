use std::fmt;

use crate::project::{seed_projects, ProjectRecord};

/// Result of [`ProjectStore::remove_by_title`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Removal {
    Removed { title: String, index: usize },
    NotFound { title: String },
}

impl Removal {
    pub fn is_removed(&self) -> bool {
        matches!(self, Self::Removed { .. })
    }
}

impl fmt::Display for Removal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Removed { title, .. } => write!(f, "✓ Project \"{title}\" removed successfully"),
            Self::NotFound { title } => write!(f, "✗ Project \"{title}\" not found"),
        }
    }
}

pub const ADDED_MESSAGE: &str = "✓ Project added successfully";

/// Ordered project list. Store order is display order.
///
/// Titles act as removal keys but are not required to be unique;
/// removal always targets the first match.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectStore {
    projects: Vec<ProjectRecord>,
}

impl ProjectStore {
    pub fn new(projects: Vec<ProjectRecord>) -> Self {
        Self { projects }
    }

    pub fn seeded() -> Self {
        Self::new(seed_projects())
    }

    pub fn append(&mut self, record: ProjectRecord) {
        self.projects.push(record);
    }

    pub fn remove_by_title(&mut self, title: &str) -> Removal {
        match self.projects.iter().position(|p| p.title == title) {
            Some(index) => {
                self.projects.remove(index);
                Removal::Removed {
                    title: title.to_string(),
                    index,
                }
            }
            None => Removal::NotFound {
                title: title.to_string(),
            },
        }
    }

    pub fn projects(&self) -> &[ProjectRecord] {
        &self.projects
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProjectRecord> {
        self.projects.iter()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn titles(&self) -> Vec<&str> {
        self.projects.iter().map(|p| p.title.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a ProjectStore {
    type Item = &'a ProjectRecord;
    type IntoIter = std::slice::Iter<'a, ProjectRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
