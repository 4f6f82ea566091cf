//! In-page anchor navigation.

/// How the browser should bring the target into view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
}

/// Where the target's box ends up relative to the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollBlock {
    Start,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollIntoView {
    pub behavior: ScrollBehavior,
    pub block: ScrollBlock,
}

pub const SMOOTH_TO_TOP: ScrollIntoView = ScrollIntoView {
    behavior: ScrollBehavior::Smooth,
    block: ScrollBlock::Start,
};

/// Whether the anchor's click is intercepted at all.
pub fn is_in_page_anchor(href: &str) -> bool {
    href.starts_with('#')
}

/// Element id an in-page `href` points at. A bare `#` has no target.
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|fragment| !fragment.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_hash_links_are_intercepted() {
        assert!(is_in_page_anchor("#about"));
        assert!(is_in_page_anchor("#"));
        assert!(!is_in_page_anchor("https://example.com/#about"));
        assert!(!is_in_page_anchor("about.html"));
    }

    #[test]
    fn fragment_target_strips_hash() {
        assert_eq!(fragment_target("#contact"), Some("contact"));
        assert_eq!(fragment_target("#"), None);
        assert_eq!(fragment_target("contact"), None);
    }
}
