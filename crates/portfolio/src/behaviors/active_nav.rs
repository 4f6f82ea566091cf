//! Scroll-position driven navigation highlighting.

/// Id of the current section: the last one, in document order, whose top
/// minus `offset_px` the scroll position has reached.
pub fn current_section<'a>(
    scroll_y: f64,
    sections: impl IntoIterator<Item = (&'a str, f64)>,
    offset_px: f64,
) -> Option<&'a str> {
    sections
        .into_iter()
        .filter(|(_, top)| scroll_y >= top - offset_px)
        .map(|(id, _)| id)
        .last()
}

/// Whether a nav link with `href` is the highlighted one.
pub fn is_active_link(href: Option<&str>, current: Option<&str>) -> bool {
    match (href, current) {
        (Some(href), Some(current)) => href.strip_prefix('#') == Some(current),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECTIONS: [(&str, f64); 4] = [
        ("home", 0.0),
        ("about", 800.0),
        ("projects", 1600.0),
        ("contact", 2400.0),
    ];

    #[test]
    fn picks_last_section_past_threshold() {
        assert_eq!(current_section(0.0, SECTIONS, 200.0), Some("home"));
        assert_eq!(current_section(599.0, SECTIONS, 200.0), Some("home"));
        assert_eq!(current_section(600.0, SECTIONS, 200.0), Some("about"));
        assert_eq!(current_section(5000.0, SECTIONS, 200.0), Some("contact"));
    }

    #[test]
    fn document_order_wins_over_offsets() {
        // An out-of-order section still counts if reached, and the last one
        // reached in document order is current.
        let sections = [("late", 1000.0), ("early", 100.0)];
        assert_eq!(current_section(1000.0, sections, 200.0), Some("early"));
    }

    #[test]
    fn nothing_current_before_first_threshold() {
        let sections = [("about", 800.0)];
        assert_eq!(current_section(0.0, sections, 200.0), None);
    }

    #[test]
    fn link_matches_fragment_exactly() {
        assert!(is_active_link(Some("#about"), Some("about")));
        assert!(!is_active_link(Some("#about-me"), Some("about")));
        assert!(!is_active_link(Some("about"), Some("about")));
        assert!(!is_active_link(Some("#about"), None));
        assert!(!is_active_link(None, Some("about")));
    }
}
