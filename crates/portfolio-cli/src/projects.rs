//! Project list loading for CLI commands.

use std::path::Path;

use anyhow::{Context, Result};
use portfolio::{ProjectRecord, ProjectStore};

/// The seed list, or the JSON array in `path` when given.
pub fn load_store(path: Option<&Path>) -> Result<ProjectStore> {
    let Some(path) = path else {
        return Ok(ProjectStore::seeded());
    };
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading projects {}", path.display()))?;
    let projects: Vec<ProjectRecord> = serde_json::from_str(&content)
        .with_context(|| format!("parsing projects {}", path.display()))?;
    log::info!("Loaded {} projects from {}", projects.len(), path.display());
    Ok(ProjectStore::new(projects))
}

pub fn parse_record(json: &str) -> Result<ProjectRecord> {
    serde_json::from_str(json).with_context(|| format!("invalid project record: {json}"))
}
