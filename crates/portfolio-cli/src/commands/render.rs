//! Render command - prints the project grid after applying mutations

use std::path::Path;

use anyhow::Result;
use clap::ValueEnum;
use portfolio::portfolio_scene::{Document, Element};
use portfolio::{Page, PageConfig};

use crate::projects::{load_store, parse_record};

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum Format {
    #[default]
    Html,
    Json,
}

pub fn run(
    projects: Option<&Path>,
    add: &[String],
    remove: &[String],
    format: Format,
) -> Result<()> {
    let store = load_store(projects)?;
    let config = PageConfig::default();
    let document = Document::new(Element::new("main").child(Element::new("div").id(&config.grid_id)));
    let mut page = Page::new(document, store, config);
    page.initialize();

    // Parse everything first so a bad record leaves no half-applied output.
    let records = add
        .iter()
        .map(|json| parse_record(json))
        .collect::<Result<Vec<_>>>()?;
    for record in records {
        page.add_project(record);
    }
    for title in remove {
        page.remove_project(title);
    }

    let document = page.document();
    let Some(grid) = document.get_element_by_id(&page.config().grid_id) else {
        return Ok(());
    };
    match format {
        Format::Html => println!("{}", document.outer_html(grid)),
        Format::Json => println!(
            "{}",
            serde_json::to_string_pretty(&document.children_markup(grid))?
        ),
    }
    Ok(())
}
