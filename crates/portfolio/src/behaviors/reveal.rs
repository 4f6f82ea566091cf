//! One-way scroll reveal of sections and project cards.

use std::collections::BTreeMap;

use portfolio_scene::Layout;

use crate::config::PageConfig;

/// Inline style an observed element starts with.
pub const HIDDEN_STYLE: [(&str, &str); 3] = [
    ("opacity", "0"),
    ("transform", "translateY(30px)"),
    ("transition", "opacity 0.6s ease, transform 0.6s ease"),
];

/// Inline style applied once an element is revealed.
pub const VISIBLE_STYLE: [(&str, &str); 2] = [("opacity", "1"), ("transform", "translateY(0)")];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    /// Pixels cut off the bottom of the viewport before intersecting.
    pub bottom_margin_px: f64,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self::from_config(&PageConfig::default())
    }
}

impl RevealOptions {
    pub fn from_config(config: &PageConfig) -> Self {
        Self {
            threshold: config.reveal_threshold,
            bottom_margin_px: config.reveal_bottom_margin_px,
        }
    }

    /// `rootMargin` in CSS margin order.
    pub fn root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.bottom_margin_px)
    }
}

/// What an intersection observer reports for one element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionReport {
    pub is_intersecting: bool,
    pub ratio: f64,
}

impl IntersectionReport {
    pub fn visible(ratio: f64) -> Self {
        Self {
            is_intersecting: ratio > 0.0,
            ratio,
        }
    }

    pub fn hidden() -> Self {
        Self {
            is_intersecting: false,
            ratio: 0.0,
        }
    }

    /// Computes the report for an element box against the viewport at
    /// `scroll_y`, with the bottom root margin subtracted.
    pub fn from_geometry(
        layout: Layout,
        scroll_y: f64,
        viewport_height: f64,
        options: &RevealOptions,
    ) -> Self {
        let root_top = scroll_y;
        let root_bottom = scroll_y + (viewport_height - options.bottom_margin_px).max(0.0);
        if layout.height <= 0.0 {
            let inside = layout.top >= root_top && layout.top <= root_bottom;
            return Self {
                is_intersecting: inside,
                ratio: if inside { 1.0 } else { 0.0 },
            };
        }
        let overlap = (layout.bottom().min(root_bottom) - layout.top.max(root_top)).max(0.0);
        Self {
            is_intersecting: overlap > 0.0,
            ratio: (overlap / layout.height).min(1.0),
        }
    }
}

/// Per-element revealed flags. Elements must be observed before reports
/// about them count, and a revealed element never goes back.
#[derive(Clone, Debug)]
pub struct RevealTracker<K: Ord> {
    options: RevealOptions,
    revealed: BTreeMap<K, bool>,
}

impl<K: Ord> RevealTracker<K> {
    pub fn new(options: RevealOptions) -> Self {
        Self {
            options,
            revealed: BTreeMap::new(),
        }
    }

    pub fn options(&self) -> &RevealOptions {
        &self.options
    }

    /// Start watching `key`. Returns `false` if it was already observed.
    pub fn observe(&mut self, key: K) -> bool {
        if self.revealed.contains_key(&key) {
            return false;
        }
        self.revealed.insert(key, false);
        true
    }

    pub fn is_observed(&self, key: &K) -> bool {
        self.revealed.contains_key(key)
    }

    pub fn is_revealed(&self, key: &K) -> bool {
        self.revealed.get(key).copied().unwrap_or(false)
    }

    /// Feed one report. Returns `true` exactly once per element: when this
    /// report reveals it.
    pub fn report(&mut self, key: &K, report: IntersectionReport) -> bool {
        let threshold = self.options.threshold;
        let Some(revealed) = self.revealed.get_mut(key) else {
            return false;
        };
        if *revealed || !report.is_intersecting || report.ratio < threshold {
            return false;
        }
        *revealed = true;
        true
    }

    /// Keys currently observed, in key order.
    pub fn observed(&self) -> impl Iterator<Item = &K> {
        self.revealed.keys()
    }

    /// Drops keys for which `keep` returns `false`.
    pub fn retain(&mut self, mut keep: impl FnMut(&K) -> bool) {
        self.revealed.retain(|key, _| keep(key));
    }
}
