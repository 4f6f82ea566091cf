use std::cell::{Cell, RefCell};
use std::rc::Rc;

use portfolio::behaviors::reveal::{
    HIDDEN_STYLE, IntersectionReport, RevealOptions, RevealTracker, VISIBLE_STYLE,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::dom;

const KEY_ATTRIBUTE: &str = "data-reveal-key";

/// One intersection observer shared by every section and card.
pub struct ScrollReveal {
    observer: IntersectionObserver,
    tracker: Rc<RefCell<RevealTracker<u32>>>,
    next_key: Cell<u32>,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl ScrollReveal {
    pub fn new(options: RevealOptions) -> Result<Self, JsValue> {
        let tracker = Rc::new(RefCell::new(RevealTracker::new(options)));
        let tracker_for_callback = tracker.clone();
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let target = entry.target();
                    let Some(key) = target
                        .get_attribute(KEY_ATTRIBUTE)
                        .and_then(|key| key.parse::<u32>().ok())
                    else {
                        continue;
                    };
                    let report = IntersectionReport {
                        is_intersecting: entry.is_intersecting(),
                        ratio: entry.intersection_ratio(),
                    };
                    if !tracker_for_callback.borrow_mut().report(&key, report) {
                        continue;
                    }
                    if let Some(element) = target.dyn_ref::<HtmlElement>() {
                        dom::apply_style(element, &VISIBLE_STYLE);
                    }
                    // Revealed for good; no need to keep watching.
                    observer.unobserve(&target);
                }
            },
        ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin());
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

        Ok(Self {
            observer,
            tracker,
            next_key: Cell::new(0),
            _callback: callback,
        })
    }

    /// Hides `element` and starts watching it.
    pub fn observe(&self, element: &HtmlElement) {
        let key = self.next_key.get();
        self.next_key.set(key + 1);
        if element.set_attribute(KEY_ATTRIBUTE, &key.to_string()).is_err() {
            return;
        }
        dom::apply_style(element, &HIDDEN_STYLE);
        self.tracker.borrow_mut().observe(key);
        self.observer.observe(element);
    }
}
