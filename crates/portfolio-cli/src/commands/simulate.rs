//! Simulate command - runs the demo page headlessly on virtual time

use std::path::Path;

use anyhow::{bail, Result};
use portfolio::demo::demo_document;
use portfolio::page::SubmitOutcome;
use portfolio::portfolio_scene::Document;
use portfolio::{Page, PageConfig};

use crate::projects::load_store;

pub struct SimulateOptions<'a> {
    pub projects: Option<&'a Path>,
    pub clicks: &'a [String],
    pub scrolls: &'a [f64],
    pub submit: bool,
    pub ms: u64,
    pub html: bool,
}

pub fn run(config: PageConfig, options: SimulateOptions<'_>) -> Result<()> {
    let store = load_store(options.projects)?;
    let mut page = Page::new(Document::new(demo_document()), store, config);
    page.initialize();

    for href in options.clicks {
        let anchor = page
            .elements()
            .anchors
            .iter()
            .copied()
            .find(|anchor| page.document().attribute(*anchor, "href") == Some(href.as_str()));
        let Some(anchor) = anchor else {
            bail!("no in-page anchor with href {href:?}");
        };
        let outcome = page.click(anchor);
        log::info!(
            "click {href}: {}",
            if outcome.scroll.is_some() {
                "scrolled"
            } else {
                "no target"
            }
        );
    }

    for y in options.scrolls {
        page.scroll_to(*y);
        log::info!("scroll to {y}");
    }

    if options.submit {
        match page.submit_contact_form() {
            SubmitOutcome::NotAttached => log::info!("no contact form"),
            outcome => log::info!("contact form: {outcome:?}"),
        }
    }

    page.advance_by(options.ms);

    if options.html {
        let document = page.document();
        println!("{}", document.outer_html(document.root()));
        return Ok(());
    }
    print_summary(&page);
    Ok(())
}

fn print_summary(page: &Page) {
    let document = page.document();
    let elements = page.elements();

    println!("time:      {}ms", page.now_ms());
    println!("scroll:    {}px", page.scroll_y());
    println!("typing:    {:?}", page.typing_state());
    if let Some(target) = elements.typing_target {
        println!("hero text: {:?}", document.text_content(target));
    }

    let active: Vec<&str> = elements
        .nav_links
        .iter()
        .filter(|link| document.style(**link, "color").is_some())
        .filter_map(|link| document.attribute(*link, "href"))
        .collect();
    println!("active:    {}", if active.is_empty() { "-".to_string() } else { active.join(" ") });

    for section in &elements.sections {
        let id = document.attribute(*section, "id").unwrap_or("?");
        let opacity = document.style(*section, "opacity").unwrap_or("-");
        println!("section {id:<10} opacity {opacity}");
    }
    for (index, title) in page.card_titles().iter().enumerate() {
        let opacity = page
            .cards()
            .get(index)
            .and_then(|card| document.style(*card, "opacity"))
            .unwrap_or("-")
            .to_string();
        println!("card {index}: {title:<24} opacity {opacity}");
    }
}
