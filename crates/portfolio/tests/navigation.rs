//! Smooth scroll on in-page anchors and active nav highlighting.

use portfolio::behaviors::smooth_scroll::SMOOTH_TO_TOP;
use portfolio::demo::demo_document;
use portfolio::portfolio_scene::{Document, Element, NodeId};
use portfolio::Page;

fn demo_page() -> Page {
    let mut page = Page::seeded(Document::new(demo_document()));
    page.initialize();
    page
}

fn nav_link(page: &Page, href: &str) -> NodeId {
    page.elements()
        .nav_links
        .iter()
        .copied()
        .find(|link| page.document().attribute(*link, "href") == Some(href))
        .unwrap()
}

fn highlighted(page: &Page) -> Vec<String> {
    page.elements()
        .nav_links
        .iter()
        .filter(|link| page.document().style(**link, "color") == Some("#ffffff"))
        .filter_map(|link| page.document().attribute(*link, "href").map(String::from))
        .collect()
}

#[test]
fn clicking_nav_link_scrolls_to_section() {
    let mut page = demo_page();
    let about = page.document().get_element_by_id("about").unwrap();

    let outcome = page.click(nav_link(&page, "#about"));

    assert!(outcome.default_prevented);
    let scroll = outcome.scroll.unwrap();
    assert_eq!(scroll.target, about);
    assert_eq!(scroll.options, SMOOTH_TO_TOP);
    assert_eq!(page.scroll_y(), 800.0);
    assert_eq!(highlighted(&page), ["#about"]);
}

#[test]
fn anchor_without_target_is_dropped_silently() {
    let mut page = Page::seeded(Document::new(
        Element::new("body")
            .child(Element::new("a").attr("href", "#missing"))
            .child(Element::new("a").attr("href", "#")),
    ));
    page.initialize();

    let anchors = page.document().query_tag("a");
    assert_eq!(anchors.len(), 2);
    for anchor in anchors {
        let outcome = page.click(anchor);
        assert!(outcome.default_prevented);
        assert!(outcome.scroll.is_none());
    }
    assert_eq!(page.scroll_y(), 0.0);
}

#[test]
fn external_links_are_not_intercepted() {
    let mut page = demo_page();
    let card_link = page
        .document()
        .query_descendants(page.cards()[0], |el| el.tag() == "a")[0];

    let outcome = page.click(card_link);
    assert!(!outcome.default_prevented);
    assert!(outcome.scroll.is_none());
}

#[test]
fn highlight_follows_scroll_position() {
    let mut page = demo_page();
    assert!(highlighted(&page).is_empty());

    page.scroll_to(0.0);
    assert_eq!(highlighted(&page), ["#home"]);

    page.scroll_to(599.0);
    assert_eq!(highlighted(&page), ["#home"]);

    page.scroll_to(600.0);
    assert_eq!(highlighted(&page), ["#about"]);

    page.scroll_to(2300.0);
    assert_eq!(highlighted(&page), ["#contact"]);

    page.scroll_to(10.0);
    assert_eq!(highlighted(&page), ["#home"]);
}

#[test]
fn hero_button_scrolls_but_is_not_highlighted() {
    let mut page = demo_page();
    let button = page.document().query_class("btn")[0];

    let outcome = page.click(button);
    assert!(outcome.default_prevented);
    assert_eq!(page.scroll_y(), 1600.0);
    assert_eq!(highlighted(&page), ["#projects"]);
    assert_eq!(page.document().style(button, "color"), None);
}
