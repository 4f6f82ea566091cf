//! List command - one line per project

use std::path::Path;

use anyhow::Result;
use portfolio::render::card_links;

use crate::projects::load_store;

pub fn run(projects: Option<&Path>) -> Result<()> {
    let store = load_store(projects)?;
    if store.is_empty() {
        println!("No projects");
        return Ok(());
    }
    for (index, project) in store.iter().enumerate() {
        let links: Vec<&str> = card_links(project)
            .iter()
            .map(|link| link.kind.label())
            .collect();
        println!(
            "{index:>2}. {} [{}] {}",
            project.title,
            project.techs.join(", "),
            if links.is_empty() {
                "(no links)".to_string()
            } else {
                links.join(" ")
            }
        );
    }
    Ok(())
}
