//! Headless page: the store, the renderer and every behavior wired to a
//! [`Document`] and a [`VirtualClock`], with event injection for tests and
//! the CLI. The browser frontend does the same wiring against the real DOM.

use portfolio_scene::{Child, Document, NodeId};

use crate::behaviors::active_nav;
use crate::behaviors::contact::{self, ContactAck, SavedButton};
use crate::behaviors::reveal::{
    IntersectionReport, RevealOptions, RevealTracker, HIDDEN_STYLE, VISIBLE_STYLE,
};
use crate::behaviors::smooth_scroll::{self, ScrollIntoView, SMOOTH_TO_TOP};
use crate::behaviors::typing::{TypingEffect, TypingState};
use crate::clock::{TimerId, VirtualClock};
use crate::config::{PageConfig, PROJECT_CARD_CLASS};
use crate::project::ProjectRecord;
use crate::render::Renderer;
use crate::store::{ProjectStore, Removal, ADDED_MESSAGE};

pub const INITIALIZED_MESSAGE: &str = "🚀 Portfolio Initialized";

/// Named elements the behaviors need, resolved once at initialization.
/// Every one of them may be missing; the matching behavior is then skipped.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageElements {
    pub project_grid: Option<NodeId>,
    pub contact_form: Option<NodeId>,
    pub typing_target: Option<NodeId>,
    pub home: Option<NodeId>,
    /// Every `section`, in document order.
    pub sections: Vec<NodeId>,
    /// `section[id]`, in document order.
    pub identified_sections: Vec<NodeId>,
    /// `a` elements inside the nav links container.
    pub nav_links: Vec<NodeId>,
    /// `a[href^="#"]` anywhere on the page.
    pub anchors: Vec<NodeId>,
}

impl PageElements {
    pub fn resolve(document: &Document, config: &PageConfig) -> Self {
        let nav_links = document
            .query_class(&config.nav_links_class)
            .into_iter()
            .flat_map(|container| document.query_descendants(container, |el| el.tag() == "a"))
            .collect();

        Self {
            project_grid: document.get_element_by_id(&config.grid_id),
            contact_form: document.get_element_by_id(&config.contact_form_id),
            typing_target: document.query_class(&config.typing_class).into_iter().next(),
            home: document.get_element_by_id(&config.home_id),
            sections: document.query_tag("section"),
            identified_sections: document
                .query(|el| el.tag() == "section" && el.attribute("id").is_some()),
            nav_links,
            anchors: document.query(|el| {
                el.tag() == "a"
                    && el
                        .attribute("href")
                        .is_some_and(smooth_scroll::is_in_page_anchor)
            }),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageTask {
    StartTyping,
    TypingTick,
    ResetContactForm,
    ObserveCards,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollRequest {
    pub target: NodeId,
    pub options: ScrollIntoView,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ClickOutcome {
    pub default_prevented: bool,
    pub scroll: Option<ScrollRequest>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// No contact form on the page; the browser would submit normally.
    NotAttached,
    Acknowledged,
    /// Submitted again before the reset; default still prevented.
    AlreadyAcknowledged,
    /// Default prevented, but the form has no submit button to update.
    NoSubmitButton,
}

pub struct Page {
    config: PageConfig,
    document: Document,
    store: ProjectStore,
    renderer: Renderer,
    clock: VirtualClock<PageTask>,
    elements: PageElements,
    typing: TypingEffect,
    /// `None` until the contact form behavior attaches.
    contact: Option<ContactAck<Vec<Child>>>,
    contact_button: Option<NodeId>,
    reveal: Option<RevealTracker<NodeId>>,
    smooth_scroll_anchors: Vec<NodeId>,
    active_nav_attached: bool,
    scroll_y: f64,
    initialized: bool,
}

impl Page {
    pub fn new(document: Document, store: ProjectStore, config: PageConfig) -> Self {
        let renderer = Renderer::from_config(&config);
        Self {
            config,
            document,
            store,
            renderer,
            clock: VirtualClock::new(),
            elements: PageElements::default(),
            typing: TypingEffect::new(),
            contact: None,
            contact_button: None,
            reveal: None,
            smooth_scroll_anchors: Vec::new(),
            active_nav_attached: false,
            scroll_y: 0.0,
            initialized: false,
        }
    }

    /// Page with the seed projects and default configuration.
    pub fn seeded(document: Document) -> Self {
        Self::new(document, ProjectStore::seeded(), PageConfig::default())
    }

    /// Page-ready sequence: render, wire behaviors, force `home` visible.
    /// Later calls do nothing.
    pub fn initialize(&mut self) {
        if self.initialized {
            return;
        }
        self.initialized = true;
        log::info!("{INITIALIZED_MESSAGE}");

        self.elements = PageElements::resolve(&self.document, &self.config);
        self.render();

        if self.elements.typing_target.is_some() {
            self.clock
                .set_timeout(self.config.typing_start_delay_ms, PageTask::StartTyping);
        }
        self.init_smooth_scroll();
        self.init_contact_form();
        self.init_scroll_reveal();
        self.active_nav_attached = true;

        if let Some(home) = self.elements.home {
            apply_style(&mut self.document, home, &VISIBLE_STYLE);
        }
    }

    fn init_smooth_scroll(&mut self) {
        self.smooth_scroll_anchors = self.elements.anchors.clone();
        log::debug!(
            "smooth scroll attached to {} anchors",
            self.smooth_scroll_anchors.len()
        );
    }

    fn init_contact_form(&mut self) {
        if self.elements.contact_form.is_some() {
            self.contact = Some(ContactAck::default());
        }
    }

    fn init_scroll_reveal(&mut self) {
        let mut tracker = RevealTracker::new(RevealOptions::from_config(&self.config));
        for section in &self.elements.sections {
            apply_style(&mut self.document, *section, &HIDDEN_STYLE);
            tracker.observe(*section);
        }
        self.reveal = Some(tracker);
        self.clock
            .set_timeout(self.config.card_observe_delay_ms, PageTask::ObserveCards);
        self.refresh_intersections();
    }

    /// Rebuilds every project card. Returns the number of cards rendered.
    pub fn render(&mut self) -> usize {
        let cards = self
            .renderer
            .render(self.store.projects(), &mut self.document)
            .map(|ids| ids.len())
            .unwrap_or(0);
        let document = &self.document;
        if let Some(tracker) = self.reveal.as_mut() {
            tracker.retain(|node| document.contains(*node));
        }
        cards
    }

    pub fn add_project(&mut self, record: ProjectRecord) {
        self.store.append(record);
        self.render();
        log::info!("{ADDED_MESSAGE}");
    }

    pub fn remove_project(&mut self, title: &str) -> Removal {
        let removal = self.store.remove_by_title(title);
        if removal.is_removed() {
            self.render();
        }
        log::info!("{removal}");
        removal
    }

    /// Activates `node` as if clicked.
    pub fn click(&mut self, node: NodeId) -> ClickOutcome {
        if !self.smooth_scroll_anchors.contains(&node) {
            return ClickOutcome::default();
        }
        let target = self
            .document
            .attribute(node, "href")
            .and_then(smooth_scroll::fragment_target)
            .and_then(|fragment| self.document.get_element_by_id(fragment));
        let Some(target) = target else {
            return ClickOutcome {
                default_prevented: true,
                scroll: None,
            };
        };
        if let Some(layout) = self.document.layout(target) {
            self.scroll_to(layout.top);
        }
        ClickOutcome {
            default_prevented: true,
            scroll: Some(ScrollRequest {
                target,
                options: SMOOTH_TO_TOP,
            }),
        }
    }

    pub fn submit_contact_form(&mut self) -> SubmitOutcome {
        let (Some(ack), Some(form)) = (self.contact.as_mut(), self.elements.contact_form) else {
            return SubmitOutcome::NotAttached;
        };
        if ack.is_acknowledged() {
            return SubmitOutcome::AlreadyAcknowledged;
        }
        let button = self
            .document
            .query_descendants(form, |el| {
                el.tag() == "button" && el.attribute("type") == Some("submit")
            })
            .into_iter()
            .next();
        let Some(button) = button else {
            return SubmitOutcome::NoSubmitButton;
        };

        ack.submit(SavedButton {
            content: self.document.children_markup(button),
            background: self.document.style(button, "background").map(str::to_string),
        });
        self.contact_button = Some(button);
        self.document
            .replace_children(button, contact::success_content());
        self.document
            .set_style(button, "background", contact::SUCCESS_BACKGROUND);
        self.clock
            .set_timeout(self.config.form_reset_delay_ms, PageTask::ResetContactForm);
        log::debug!("contact form acknowledged");
        SubmitOutcome::Acknowledged
    }

    pub fn report_intersection(&mut self, node: NodeId, report: IntersectionReport) {
        let Some(tracker) = self.reveal.as_mut() else {
            return;
        };
        if tracker.report(&node, report) {
            apply_style(&mut self.document, node, &VISIBLE_STYLE);
        }
    }

    /// Sets the vertical scroll position and fires the scroll event.
    pub fn scroll_to(&mut self, y: f64) {
        self.scroll_y = y.max(0.0);
        if self.active_nav_attached {
            self.update_active_nav();
        }
        self.refresh_intersections();
    }

    fn update_active_nav(&mut self) {
        let sections: Vec<(String, f64)> = self
            .elements
            .identified_sections
            .iter()
            .filter_map(|section| {
                let id = self.document.attribute(*section, "id")?.to_string();
                let top = self.document.layout(*section).map_or(0.0, |l| l.top);
                Some((id, top))
            })
            .collect();
        let current = active_nav::current_section(
            self.scroll_y,
            sections.iter().map(|(id, top)| (id.as_str(), *top)),
            self.config.active_nav_offset_px,
        )
        .map(str::to_string);

        for link in self.elements.nav_links.clone() {
            self.document.remove_style(link, "color");
            let href = self.document.attribute(link, "href");
            if active_nav::is_active_link(href, current.as_deref()) {
                self.document
                    .set_style(link, "color", self.config.highlight_color.clone());
            }
        }
    }

    /// Feeds geometry-based reports for observed elements that have layout.
    fn refresh_intersections(&mut self) {
        let Some(tracker) = self.reveal.as_ref() else {
            return;
        };
        let options = *tracker.options();
        let reports: Vec<(NodeId, IntersectionReport)> = tracker
            .observed()
            .filter_map(|node| {
                let layout = self.document.layout(*node)?;
                Some((
                    *node,
                    IntersectionReport::from_geometry(
                        layout,
                        self.scroll_y,
                        self.config.viewport_height_px,
                        &options,
                    ),
                ))
            })
            .collect();
        for (node, report) in reports {
            self.report_intersection(node, report);
        }
    }

    /// Advances virtual time, running due timers in order, including timers
    /// scheduled by the tasks themselves.
    pub fn advance_by(&mut self, ms: u64) {
        let target = self.clock.now_ms().saturating_add(ms);
        while let Some((id, task)) = self.clock.fire_next(target) {
            self.run_task(id, task);
        }
        self.clock.advance_to(target);
    }

    fn run_task(&mut self, id: TimerId, task: PageTask) {
        match task {
            PageTask::StartTyping => self.start_typing(),
            PageTask::TypingTick => self.typing_tick(id),
            PageTask::ResetContactForm => self.reset_contact_form(),
            PageTask::ObserveCards => self.observe_cards(),
        }
    }

    fn start_typing(&mut self) {
        let Some(target) = self
            .elements
            .typing_target
            .filter(|target| self.document.contains(*target))
        else {
            return;
        };
        let text = self.document.text_content(target);
        self.document.set_text_content(target, "");
        self.document.set_style(target, "opacity", "1");
        if self.typing.start(&text) {
            self.clock
                .set_interval(self.config.typing_interval_ms, PageTask::TypingTick);
        }
    }

    fn typing_tick(&mut self, timer: TimerId) {
        let Some(frame) = self.typing.tick() else {
            self.clock.clear(timer);
            return;
        };
        if let Some(target) = self.elements.typing_target {
            self.document.set_text_content(target, frame.text);
        }
        if frame.is_last {
            self.clock.clear(timer);
        }
    }

    fn reset_contact_form(&mut self) {
        let Some(saved) = self.contact.as_mut().and_then(ContactAck::reset) else {
            return;
        };
        if let Some(form) = self.elements.contact_form {
            self.document.reset_form(form);
        }
        if let Some(button) = self.contact_button.take() {
            self.document.replace_children(button, saved.content);
            match saved.background {
                Some(background) => self.document.set_style(button, "background", background),
                None => self.document.remove_style(button, "background"),
            }
        }
        log::debug!("contact form reset");
    }

    fn observe_cards(&mut self) {
        let cards = self.document.query_class(PROJECT_CARD_CLASS);
        let Some(tracker) = self.reveal.as_mut() else {
            return;
        };
        for card in &cards {
            tracker.observe(*card);
        }
        for card in cards {
            apply_style(&mut self.document, card, &HIDDEN_STYLE);
        }
        self.refresh_intersections();
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Mutable access for simulating user input (form values, layout).
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn store(&self) -> &ProjectStore {
        &self.store
    }

    pub fn elements(&self) -> &PageElements {
        &self.elements
    }

    pub fn clock(&self) -> &VirtualClock<PageTask> {
        &self.clock
    }

    pub fn now_ms(&self) -> u64 {
        self.clock.now_ms()
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    pub fn typing_state(&self) -> TypingState {
        self.typing.state()
    }

    pub fn is_revealed(&self, node: NodeId) -> bool {
        self.reveal
            .as_ref()
            .is_some_and(|tracker| tracker.is_revealed(&node))
    }

    /// Card elements currently in the grid, in display order.
    pub fn cards(&self) -> Vec<NodeId> {
        self.document
            .get_element_by_id(self.renderer.container_id())
            .map(|grid| self.document.children(grid))
            .unwrap_or_default()
    }

    /// Title text of every rendered card, in display order.
    pub fn card_titles(&self) -> Vec<String> {
        self.cards()
            .into_iter()
            .filter_map(|card| {
                self.document
                    .query_descendants(card, |el| el.tag() == "h3")
                    .first()
                    .map(|title| self.document.text_content(*title))
            })
            .collect()
    }
}

fn apply_style(document: &mut Document, node: NodeId, style: &[(&str, &str)]) {
    for (property, value) in style {
        document.set_style(node, property, *value);
    }
}
