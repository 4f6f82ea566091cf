//! Sections and cards start hidden and are revealed once, for good.

use portfolio::behaviors::reveal::IntersectionReport;
use portfolio::demo::demo_document;
use portfolio::portfolio_scene::{Document, NodeId};
use portfolio::Page;

fn demo_page() -> Page {
    let mut page = Page::seeded(Document::new(demo_document()));
    page.initialize();
    page
}

fn section(page: &Page, id: &str) -> NodeId {
    page.document().get_element_by_id(id).unwrap()
}

fn opacity(page: &Page, node: NodeId) -> Option<&str> {
    page.document().style(node, "opacity")
}

#[test]
fn home_is_visible_immediately() {
    let page = demo_page();
    let home = section(&page, "home");
    assert_eq!(opacity(&page, home), Some("1"));
    assert_eq!(page.document().style(home, "transform"), Some("translateY(0)"));
}

#[test]
fn sections_below_the_fold_start_hidden() {
    let page = demo_page();
    for id in ["about", "projects", "contact"] {
        let node = section(&page, id);
        assert_eq!(opacity(&page, node), Some("0"), "{id}");
        assert_eq!(
            page.document().style(node, "transform"),
            Some("translateY(30px)")
        );
        assert_eq!(
            page.document().style(node, "transition"),
            Some("opacity 0.6s ease, transform 0.6s ease")
        );
    }
}

#[test]
fn reported_intersection_reveals_once_and_for_all() {
    let mut page = demo_page();
    let about = section(&page, "about");

    page.report_intersection(about, IntersectionReport::hidden());
    assert_eq!(opacity(&page, about), Some("0"));

    page.report_intersection(about, IntersectionReport::visible(0.05));
    assert_eq!(opacity(&page, about), Some("0"));

    page.report_intersection(about, IntersectionReport::visible(0.1));
    assert_eq!(opacity(&page, about), Some("1"));
    assert!(page.is_revealed(about));

    page.report_intersection(about, IntersectionReport::hidden());
    assert_eq!(opacity(&page, about), Some("1"));
}

#[test]
fn scrolling_reveals_sections_by_geometry() {
    let mut page = demo_page();
    let projects = section(&page, "projects");
    let contact = section(&page, "contact");

    page.scroll_to(1700.0);
    assert_eq!(opacity(&page, projects), Some("1"));
    assert_eq!(opacity(&page, contact), Some("0"));

    page.scroll_to(0.0);
    assert_eq!(opacity(&page, projects), Some("1"));
}

#[test]
fn cards_are_hidden_and_observed_after_delay() {
    let mut page = demo_page();
    let cards = page.cards();
    assert_eq!(cards.len(), 2);
    assert_eq!(opacity(&page, cards[0]), None);

    page.advance_by(99);
    assert_eq!(opacity(&page, cards[0]), None);

    page.advance_by(1);
    for card in &cards {
        assert_eq!(opacity(&page, *card), Some("0"));
    }

    page.report_intersection(cards[1], IntersectionReport::visible(0.5));
    assert_eq!(opacity(&page, cards[1]), Some("1"));
    assert_eq!(opacity(&page, cards[0]), Some("0"));
}

#[test]
fn cards_reported_before_observation_are_ignored() {
    let mut page = demo_page();
    let card = page.cards()[0];
    page.report_intersection(card, IntersectionReport::visible(1.0));
    assert!(!page.is_revealed(card));

    page.advance_by(100);
    assert_eq!(opacity(&page, card), Some("0"));
}
