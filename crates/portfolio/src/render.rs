//! Project cards.
//!
//! Every render clears the grid and rebuilds all cards; there is no diffing.

use portfolio_scene::{Document, Element, NodeId};

use crate::config::{PageConfig, PROJECT_CARD_CLASS};
use crate::project::ProjectRecord;

pub const GITHUB_LABEL: &str = "GitHub →";
pub const LIVE_DEMO_LABEL: &str = "Live Demo →";
pub const FEATURES_LABEL: &str = "Features:";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkKind {
    GitHub,
    LiveDemo,
}

impl LinkKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::GitHub => GITHUB_LABEL,
            Self::LiveDemo => LIVE_DEMO_LABEL,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardLink<'a> {
    pub kind: LinkKind,
    pub href: &'a str,
}

/// Links shown on a card: GitHub first, then Live Demo.
/// Empty link text counts as absent.
pub fn card_links(record: &ProjectRecord) -> Vec<CardLink<'_>> {
    [
        (LinkKind::GitHub, record.github_link.as_deref()),
        (LinkKind::LiveDemo, record.live_link.as_deref()),
    ]
    .into_iter()
    .filter_map(|(kind, href)| {
        href.filter(|href| !href.is_empty())
            .map(|href| CardLink { kind, href })
    })
    .collect()
}

#[derive(Clone, Debug)]
pub struct Renderer {
    container_id: String,
    stagger_ms: u64,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::from_config(&PageConfig::default())
    }
}

impl Renderer {
    pub fn new(container_id: impl Into<String>, stagger_ms: u64) -> Self {
        Self {
            container_id: container_id.into(),
            stagger_ms,
        }
    }

    pub fn from_config(config: &PageConfig) -> Self {
        Self::new(config.grid_id.clone(), config.card_stagger_ms)
    }

    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    /// Entrance delay of the card at `index`, in milliseconds.
    pub fn stagger_delay_ms(&self, index: usize) -> u64 {
        index as u64 * self.stagger_ms
    }

    pub fn card(&self, index: usize, record: &ProjectRecord) -> Element {
        let delay_secs = self.stagger_delay_ms(index) as f64 / 1000.0;

        let tech_tags = Element::new("div").class("tech-tags").children(
            record
                .techs
                .iter()
                .map(|tech| Element::new("span").class("tech-tag").text(tech.as_str())),
        );

        let links = Element::new("div").class("project-links").children(
            card_links(record).into_iter().map(|link| {
                Element::new("a")
                    .attr("href", link.href)
                    .attr("target", "_blank")
                    .text(link.kind.label())
            }),
        );

        Element::new("div")
            .class(PROJECT_CARD_CLASS)
            .style("animation-delay", format!("{delay_secs}s"))
            .child(Element::new("h3").text(record.title.as_str()))
            .child(Element::new("p").text(record.description.as_str()))
            .child(tech_tags)
            .child(
                Element::new("p")
                    .child(Element::new("strong").text(FEATURES_LABEL))
                    .text(format!(" {}", record.features)),
            )
            .child(links)
    }

    pub fn cards<'a>(&self, projects: impl IntoIterator<Item = &'a ProjectRecord>) -> Vec<Element> {
        projects
            .into_iter()
            .enumerate()
            .map(|(index, record)| self.card(index, record))
            .collect()
    }

    /// Replaces the container's children with one card per project.
    /// Returns the new card ids, or `None` when the container is absent.
    pub fn render<'a>(
        &self,
        projects: impl IntoIterator<Item = &'a ProjectRecord>,
        document: &mut Document,
    ) -> Option<Vec<NodeId>> {
        let container = document.get_element_by_id(&self.container_id)?;
        let cards = self.cards(projects).into_iter().map(Into::into).collect();
        let ids = document.replace_children(container, cards);
        log::debug!("rendered {} project cards", ids.len());
        Some(ids)
    }
}
