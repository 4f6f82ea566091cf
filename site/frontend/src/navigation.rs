//! Smooth scrolling for in-page anchors and scroll-driven nav highlighting.

use portfolio::PageConfig;
use portfolio::behaviors::active_nav;
use portfolio::behaviors::smooth_scroll::{self, ScrollBehavior, ScrollBlock, ScrollIntoView};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, ScrollIntoViewOptions, ScrollLogicalPosition};

fn scroll_options(intent: ScrollIntoView) -> ScrollIntoViewOptions {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(match intent.behavior {
        ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
    });
    options.set_block(match intent.block {
        ScrollBlock::Start => ScrollLogicalPosition::Start,
    });
    options
}

pub fn init_smooth_scroll(document: &web_sys::Document, anchors: &[web_sys::Element]) {
    for anchor in anchors {
        let document = document.clone();
        let anchor_for_click = anchor.clone();
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            event.prevent_default();
            let href = anchor_for_click.get_attribute("href").unwrap_or_default();
            let Some(target) = smooth_scroll::fragment_target(&href)
                .and_then(|fragment| document.get_element_by_id(fragment))
            else {
                return;
            };
            target.scroll_into_view_with_scroll_into_view_options(&scroll_options(
                smooth_scroll::SMOOTH_TO_TOP,
            ));
        }) as Box<dyn FnMut(_)>);
        let _ = anchor.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

pub fn init_active_nav(
    window: &web_sys::Window,
    sections: Vec<HtmlElement>,
    nav_links: Vec<HtmlElement>,
    config: &PageConfig,
) {
    let offset = config.active_nav_offset_px;
    let highlight_color = config.highlight_color.clone();
    let window_for_scroll = window.clone();
    let closure = Closure::wrap(Box::new(move || {
        let scroll_y = window_for_scroll.scroll_y().unwrap_or(0.0);
        let tops: Vec<(String, f64)> = sections
            .iter()
            .map(|section| (section.id(), f64::from(section.offset_top())))
            .collect();
        let current = active_nav::current_section(
            scroll_y,
            tops.iter().map(|(id, top)| (id.as_str(), *top)),
            offset,
        );
        for link in &nav_links {
            let style = link.style();
            let _ = style.remove_property("color");
            if active_nav::is_active_link(link.get_attribute("href").as_deref(), current) {
                let _ = style.set_property("color", &highlight_color);
            }
        }
    }) as Box<dyn FnMut()>);
    let _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    closure.forget();
}
