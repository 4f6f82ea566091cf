use std::cell::RefCell;
use std::rc::Rc;

use portfolio::PageConfig;
use portfolio::behaviors::contact::{self, ContactAck, SavedButton};
use portfolio_scene::html;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, HtmlFormElement};
use zoon::{Task, Timer};

use crate::dom::timer_ms;

/// Acknowledges submissions locally; nothing leaves the page.
pub fn attach(form: HtmlFormElement, config: &PageConfig) {
    let reset_delay = timer_ms(config.form_reset_delay_ms);
    let state: Rc<RefCell<ContactAck<String>>> = Rc::default();
    let form_for_submit = form.clone();

    let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
        event.prevent_default();
        let Some(button) = form_for_submit
            .query_selector("button[type=\"submit\"]")
            .ok()
            .flatten()
            .and_then(|button| button.dyn_into::<HtmlElement>().ok())
        else {
            return;
        };

        let background = button
            .style()
            .get_property_value("background")
            .ok()
            .filter(|background| !background.is_empty());
        let submitted = state.borrow_mut().submit(SavedButton {
            content: button.inner_html(),
            background,
        });
        if !submitted {
            return;
        }
        button.set_inner_html(&html::render_children(&contact::success_content()));
        let _ = button
            .style()
            .set_property("background", contact::SUCCESS_BACKGROUND);

        let state = state.clone();
        let form = form_for_submit.clone();
        Task::start(async move {
            Timer::sleep(reset_delay).await;
            let Some(saved) = state.borrow_mut().reset() else {
                return;
            };
            form.reset();
            button.set_inner_html(&saved.content);
            let style = button.style();
            let _ = match saved.background {
                Some(background) => style.set_property("background", &background),
                None => style.remove_property("background").map(|_| ()),
            };
        });
    }) as Box<dyn FnMut(_)>);

    let _ = form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref());
    closure.forget();
}
