//! Client-only contact form acknowledgment and reset.

use portfolio::behaviors::contact::{SUCCESS_BACKGROUND, SUCCESS_TEXT};
use portfolio::demo::demo_document;
use portfolio::page::SubmitOutcome;
use portfolio::portfolio_scene::{Document, Element, NodeId};
use portfolio::{Page, PageConfig, ProjectStore};

fn demo_page() -> Page {
    let mut page = Page::seeded(Document::new(demo_document()));
    page.initialize();
    page
}

fn submit_button(page: &Page) -> NodeId {
    page.document().query_tag("button")[0]
}

fn fill_form(page: &mut Page) -> Vec<NodeId> {
    let document = page.document_mut();
    let mut controls = document.query_tag("input");
    controls.extend(document.query_tag("textarea"));
    for (index, control) in controls.iter().enumerate() {
        document.set_value(*control, format!("value {index}"));
    }
    controls
}

#[test]
fn submit_shows_success_then_resets_after_three_seconds() {
    let mut page = demo_page();
    let controls = fill_form(&mut page);
    let button = submit_button(&page);

    assert_eq!(page.submit_contact_form(), SubmitOutcome::Acknowledged);
    assert_eq!(page.document().text_content(button), SUCCESS_TEXT);
    assert_eq!(
        page.document().style(button, "background"),
        Some(SUCCESS_BACKGROUND)
    );
    assert_eq!(page.document().value(controls[0]), Some("value 0"));

    page.advance_by(2999);
    assert_eq!(page.document().text_content(button), SUCCESS_TEXT);

    page.advance_by(1);
    assert_eq!(page.document().text_content(button), "Send Message");
    assert_eq!(
        page.document().inner_html(button),
        "<span>Send Message</span>"
    );
    assert_eq!(page.document().style(button, "background"), None);
    for control in controls {
        assert_eq!(page.document().value(control), None);
    }
}

#[test]
fn resubmitting_before_reset_keeps_original_button() {
    let mut page = demo_page();
    let button = submit_button(&page);

    assert_eq!(page.submit_contact_form(), SubmitOutcome::Acknowledged);
    page.advance_by(1000);
    assert_eq!(page.submit_contact_form(), SubmitOutcome::AlreadyAcknowledged);

    page.advance_by(2000);
    assert_eq!(page.document().text_content(button), "Send Message");

    // Acknowledges again once reset.
    assert_eq!(page.submit_contact_form(), SubmitOutcome::Acknowledged);
    page.advance_by(3000);
    assert_eq!(page.document().text_content(button), "Send Message");
    assert!(!page.clock().has_pending_timers());
}

#[test]
fn existing_button_background_is_restored() {
    let mut page = demo_page();
    let button = submit_button(&page);
    page.document_mut().set_style(button, "background", "navy");

    page.submit_contact_form();
    page.advance_by(3000);

    assert_eq!(page.document().style(button, "background"), Some("navy"));
}

#[test]
fn page_without_form_does_not_attach() {
    let mut page = Page::seeded(Document::new(Element::new("body")));
    page.initialize();
    assert_eq!(page.submit_contact_form(), SubmitOutcome::NotAttached);
}

#[test]
fn form_without_submit_button_is_left_alone() {
    let mut page = Page::seeded(Document::new(
        Element::new("body").child(Element::new("form").id("contactForm")),
    ));
    page.initialize();
    assert_eq!(page.submit_contact_form(), SubmitOutcome::NoSubmitButton);
    page.advance_by(5000);
    assert!(!page.clock().has_pending_timers());
}

#[test]
fn huge_reset_delay_resets_at_end_of_time() {
    let config = PageConfig {
        form_reset_delay_ms: u64::MAX,
        ..PageConfig::default()
    };
    let mut page = Page::new(Document::new(demo_document()), ProjectStore::seeded(), config);
    page.initialize();
    let button = submit_button(&page);

    page.advance_by(10);
    assert_eq!(page.submit_contact_form(), SubmitOutcome::Acknowledged);
    page.advance_by(u64::MAX);

    assert_eq!(page.document().text_content(button), "Send Message");
    assert_eq!(page.now_ms(), u64::MAX);
}
