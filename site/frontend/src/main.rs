use std::cell::RefCell;
use std::rc::Rc;

use portfolio::behaviors::reveal::{RevealOptions, VISIBLE_STYLE};
use portfolio::config::PROJECT_CARD_CLASS;
use portfolio::page::INITIALIZED_MESSAGE;
use portfolio::store::ADDED_MESSAGE;
use portfolio::{PageConfig, ProjectRecord, ProjectStore, Removal, Renderer};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{DocumentReadyState, HtmlElement};
use zoon::{Task, Timer, eprintln, println};

mod console_api;
mod contact;
mod dom;
mod navigation;
mod reveal;
mod typing;

use dom::DomElements;
use reveal::ScrollReveal;

fn main() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    if document.ready_state() == DocumentReadyState::Loading {
        let closure = Closure::once(initialize);
        let _ = document
            .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        initialize();
    }
}

/// Project store bound to the grid element it renders into.
pub struct App {
    document: web_sys::Document,
    grid: Option<web_sys::Element>,
    store: RefCell<ProjectStore>,
    renderer: Renderer,
}

impl App {
    fn new(document: web_sys::Document, grid: Option<web_sys::Element>, config: &PageConfig) -> Self {
        Self {
            document,
            grid,
            store: RefCell::new(ProjectStore::seeded()),
            renderer: Renderer::from_config(config),
        }
    }

    fn render(&self) {
        let Some(grid) = &self.grid else {
            return;
        };
        grid.set_inner_html("");
        let cards = self.renderer.cards(self.store.borrow().projects());
        for card in &cards {
            match dom::create_element(&self.document, card) {
                Ok(element) => {
                    if let Err(error) = grid.append_child(&element) {
                        eprintln!("Failed to insert project card: {error:?}");
                    }
                }
                Err(error) => eprintln!("Failed to render project card: {error:?}"),
            }
        }
    }

    pub fn add_project(&self, record: ProjectRecord) -> &'static str {
        self.store.borrow_mut().append(record);
        self.render();
        ADDED_MESSAGE
    }

    pub fn remove_project(&self, title: &str) -> Removal {
        let removal = self.store.borrow_mut().remove_by_title(title);
        if removal.is_removed() {
            self.render();
        }
        removal
    }
}

fn initialize() {
    println!("{INITIALIZED_MESSAGE}");
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let config = PageConfig::default();
    let elements = DomElements::resolve(&document, &config);

    let app = Rc::new(App::new(document.clone(), elements.project_grid.clone(), &config));
    app.render();

    if let Some(target) = elements.typing_target.clone() {
        typing::start(target, &config);
    }
    navigation::init_smooth_scroll(&document, &elements.anchors);
    if let Some(form) = elements.contact_form.clone() {
        contact::attach(form, &config);
    }
    init_scroll_reveal(&document, &elements, &config);
    navigation::init_active_nav(
        &window,
        elements.identified_sections.clone(),
        elements.nav_links.clone(),
        &config,
    );

    if let Some(home) = &elements.home {
        dom::apply_style(home, &VISIBLE_STYLE);
    }

    console_api::expose(&window, app);
}

fn init_scroll_reveal(document: &web_sys::Document, elements: &DomElements, config: &PageConfig) {
    let scroll_reveal = match ScrollReveal::new(RevealOptions::from_config(config)) {
        Ok(scroll_reveal) => Rc::new(scroll_reveal),
        Err(error) => {
            eprintln!("Scroll reveal unavailable: {error:?}");
            return;
        }
    };
    for section in &elements.sections {
        scroll_reveal.observe(section);
    }

    // Cards are observed once the first render has settled into the page.
    let document = document.clone();
    let delay = dom::timer_ms(config.card_observe_delay_ms);
    Task::start(async move {
        Timer::sleep(delay).await;
        let cards: Vec<HtmlElement> =
            dom::query_all(&document, &format!(".{PROJECT_CARD_CLASS}"));
        for card in &cards {
            scroll_reveal.observe(card);
        }
        // The observer lives as long as the page.
        std::mem::forget(scroll_reveal);
    });
}
