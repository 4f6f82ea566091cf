//! Bridge from scene markup and page lookups to the browser DOM.

use portfolio::PageConfig;
use portfolio::behaviors::smooth_scroll;
use portfolio_scene::{Child, Element};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, HtmlFormElement};

/// Named elements the behaviors need, resolved once after the DOM is ready.
pub struct DomElements {
    pub project_grid: Option<web_sys::Element>,
    pub contact_form: Option<HtmlFormElement>,
    pub typing_target: Option<HtmlElement>,
    pub home: Option<HtmlElement>,
    pub sections: Vec<HtmlElement>,
    pub identified_sections: Vec<HtmlElement>,
    pub nav_links: Vec<HtmlElement>,
    pub anchors: Vec<web_sys::Element>,
}

impl DomElements {
    pub fn resolve(document: &web_sys::Document, config: &PageConfig) -> Self {
        Self {
            project_grid: document.get_element_by_id(&config.grid_id),
            contact_form: document
                .get_element_by_id(&config.contact_form_id)
                .and_then(|form| form.dyn_into().ok()),
            typing_target: query_first(document, &format!(".{}", config.typing_class)),
            home: document
                .get_element_by_id(&config.home_id)
                .and_then(|home| home.dyn_into().ok()),
            sections: query_all(document, "section"),
            identified_sections: query_all(document, "section[id]"),
            nav_links: query_all(document, &format!(".{} a", config.nav_links_class)),
            anchors: query_all::<web_sys::Element>(document, "a[href]")
                .into_iter()
                .filter(|anchor| {
                    anchor
                        .get_attribute("href")
                        .is_some_and(|href| smooth_scroll::is_in_page_anchor(&href))
                })
                .collect(),
        }
    }
}

pub fn query_first<T: JsCast>(document: &web_sys::Document, selector: &str) -> Option<T> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into().ok())
}

pub fn query_all<T: JsCast>(document: &web_sys::Document, selector: &str) -> Vec<T> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|index| nodes.get(index))
        .filter_map(|node| node.dyn_into().ok())
        .collect()
}

pub fn apply_style(element: &HtmlElement, style: &[(&str, &str)]) {
    let declaration = element.style();
    for (property, value) in style {
        let _ = declaration.set_property(property, value);
    }
}

/// Browser timers take `u32` milliseconds; longer delays clamp to the maximum.
pub fn timer_ms(ms: u64) -> u32 {
    u32::try_from(ms).unwrap_or(u32::MAX)
}

/// Builds a detached DOM subtree from scene markup.
pub fn create_element(
    document: &web_sys::Document,
    markup: &Element,
) -> Result<web_sys::Element, JsValue> {
    let element = document.create_element(&markup.tag)?;
    for (name, value) in &markup.attributes {
        element.set_attribute(name, value)?;
    }
    if !markup.classes.is_empty() {
        element.set_class_name(&markup.classes.join(" "));
    }
    if let Some(html_element) = element.dyn_ref::<HtmlElement>() {
        let declaration = html_element.style();
        for (property, value) in &markup.style {
            declaration.set_property(property, value)?;
        }
    }
    for child in &markup.children {
        match child {
            Child::Text(text) => {
                element.append_child(&document.create_text_node(text))?;
            }
            Child::Element(child) => {
                element.append_child(&create_element(document, child)?)?;
            }
        }
    }
    Ok(element)
}
