//! Page configuration lookup.
//!
//! Search order:
//! 1. `--config <file>` if given
//! 2. `portfolio.toml` in the current directory or any parent
//! 3. Built-in defaults

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use portfolio::PageConfig;

pub const CONFIG_FILE_NAME: &str = "portfolio.toml";

pub enum ConfigSource {
    Explicit(PathBuf),
    Discovered(PathBuf),
    Default,
}

fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}

pub fn parse_config(content: &str) -> Result<PageConfig> {
    Ok(toml::from_str(content)?)
}

fn read_config(path: &Path) -> Result<PageConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    parse_config(&content).with_context(|| format!("parsing config {}", path.display()))
}

pub fn load_config(explicit: Option<&Path>) -> Result<(PageConfig, ConfigSource)> {
    if let Some(path) = explicit {
        return Ok((read_config(path)?, ConfigSource::Explicit(path.to_path_buf())));
    }
    let discovered = std::env::current_dir()
        .ok()
        .and_then(|cwd| find_config_file(&cwd));
    match discovered {
        Some(path) => Ok((read_config(&path)?, ConfigSource::Discovered(path))),
        None => Ok((PageConfig::default(), ConfigSource::Default)),
    }
}

impl ConfigSource {
    pub fn describe(&self) -> String {
        match self {
            Self::Explicit(path) => format!("config from {}", path.display()),
            Self::Discovered(path) => format!("config discovered at {}", path.display()),
            Self::Default => "default config".to_string(),
        }
    }
}
