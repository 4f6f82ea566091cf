//! Store mutations through the page always leave the grid mirroring the store.

use portfolio::demo::demo_document;
use portfolio::portfolio_scene::Document;
use portfolio::render::{GITHUB_LABEL, LIVE_DEMO_LABEL};
use portfolio::{Page, ProjectRecord, Removal};

fn seeded_page() -> Page {
    let mut page = Page::seeded(Document::new(demo_document()));
    page.initialize();
    page
}

fn assert_grid_matches_store(page: &Page) {
    let titles: Vec<String> = page.store().titles().into_iter().map(String::from).collect();
    assert_eq!(page.cards().len(), page.store().len());
    assert_eq!(page.card_titles(), titles);
}

fn link_labels(page: &Page, card_index: usize) -> Vec<String> {
    let document = page.document();
    let card = page.cards()[card_index];
    document
        .query_descendants(card, |el| el.tag() == "a")
        .into_iter()
        .map(|link| document.text_content(link))
        .collect()
}

#[test]
fn seed_renders_two_cards_in_order() {
    let page = seeded_page();
    assert_eq!(page.card_titles(), ["Bank System", "Security Playground"]);
    assert_eq!(link_labels(&page, 0), [GITHUB_LABEL]);
    assert_eq!(link_labels(&page, 1), [LIVE_DEMO_LABEL]);
}

#[test]
fn removing_security_playground_leaves_bank_system() {
    let mut page = seeded_page();

    let removal = page.remove_project("Security Playground");
    assert!(removal.is_removed());
    assert_eq!(page.card_titles(), ["Bank System"]);

    let removal = page.remove_project("Unknown");
    assert_eq!(
        removal,
        Removal::NotFound {
            title: "Unknown".to_string()
        }
    );
    assert_eq!(page.card_titles(), ["Bank System"]);
}

#[test]
fn unknown_title_keeps_both_cards() {
    let mut page = seeded_page();
    let before = page.document().outer_html(page.document().root());

    assert!(!page.remove_project("Unknown").is_removed());

    assert_eq!(page.card_titles(), ["Bank System", "Security Playground"]);
    assert_eq!(page.document().outer_html(page.document().root()), before);
}

#[test]
fn added_project_renders_last_with_both_links() {
    let mut page = seeded_page();
    page.add_project(
        ProjectRecord::new("ToDo API", "REST service")
            .techs(["Rust", "Axum"])
            .github_link("https://github.com/example/todo")
            .live_link("https://todo.example.com"),
    );

    assert_grid_matches_store(&page);
    assert_eq!(page.card_titles().last().map(String::as_str), Some("ToDo API"));
    assert_eq!(link_labels(&page, 2), [GITHUB_LABEL, LIVE_DEMO_LABEL]);

    let badges: Vec<String> = {
        let document = page.document();
        let card = page.cards()[2];
        document
            .query_descendants(card, |el| el.has_class("tech-tag"))
            .into_iter()
            .map(|badge| document.text_content(badge))
            .collect()
    };
    assert_eq!(badges, ["Rust", "Axum"]);
}

#[test]
fn duplicate_titles_remove_first_match_only() {
    let mut page = seeded_page();
    page.add_project(ProjectRecord::new("Bank System", "second copy"));

    page.remove_project("Bank System");

    assert_eq!(page.card_titles(), ["Security Playground", "Bank System"]);
    assert_eq!(page.store().projects()[1].description, "second copy");
}

#[test]
fn rerender_does_not_accumulate_cards() {
    let mut page = seeded_page();
    let nodes_before = page.document().node_count();

    assert_eq!(page.render(), 2);
    assert_eq!(page.render(), 2);

    assert_eq!(page.cards().len(), 2);
    assert_eq!(page.document().node_count(), nodes_before);
}

#[test]
fn grid_mirrors_store_across_mutation_sequence() {
    let mut page = seeded_page();
    let titles = ["Alpha", "Beta", "Gamma", "Bank System"];

    // Deterministic interleaving of appends and removals, including
    // duplicates and misses.
    for step in 0..40usize {
        let title = titles[(step * 7 + 3) % titles.len()];
        if step % 3 == 2 {
            page.remove_project(title);
        } else {
            page.add_project(ProjectRecord::new(title, format!("step {step}")));
        }
        assert_grid_matches_store(&page);
    }

    loop {
        let Some(title) = page.store().projects().first().map(|p| p.title.clone()) else {
            break;
        };
        page.remove_project(&title);
        assert_grid_matches_store(&page);
    }
    assert!(page.cards().is_empty());
}

#[test]
fn cards_carry_staggered_delay() {
    let page = seeded_page();
    let delays: Vec<Option<String>> = page
        .cards()
        .into_iter()
        .map(|card| page.document().style(card, "animation-delay").map(String::from))
        .collect();
    assert_eq!(delays, [Some("0s".to_string()), Some("0.1s".to_string())]);
}
