//! `window.addProject(record)` and `window.removeProject(title)` for
//! editing the project list from the browser console.

use std::rc::Rc;

use portfolio::ProjectRecord;
use wasm_bindgen::prelude::*;
use zoon::{eprintln, println};

use crate::App;

pub fn expose(window: &web_sys::Window, app: Rc<App>) {
    let app_for_add = app.clone();
    let add_project = Closure::wrap(Box::new(move |value: JsValue| {
        match serde_wasm_bindgen::from_value::<ProjectRecord>(value) {
            Ok(record) => println!("{}", app_for_add.add_project(record)),
            Err(error) => eprintln!("✗ Invalid project: {error}"),
        }
    }) as Box<dyn Fn(JsValue)>);
    js_sys::Reflect::set(window, &"addProject".into(), add_project.as_ref()).ok();
    add_project.forget();

    let remove_project = Closure::wrap(Box::new(move |title: String| {
        println!("{}", app.remove_project(&title));
    }) as Box<dyn Fn(String)>);
    js_sys::Reflect::set(window, &"removeProject".into(), remove_project.as_ref()).ok();
    remove_project.forget();
}
