//! HTML serialization for [`Element`] markup.

use crate::element::{Child, Element};

const VOID_ELEMENTS: [&str; 8] = ["area", "br", "col", "hr", "img", "input", "link", "meta"];

pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn escape_attribute(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}

/// Inline `style` attribute value, properties in name order.
pub fn style_attribute(element: &Element) -> Option<String> {
    if element.style.is_empty() {
        return None;
    }
    Some(
        element
            .style
            .iter()
            .map(|(property, value)| format!("{property}: {value};"))
            .collect::<Vec<_>>()
            .join(" "),
    )
}

pub fn render_element(element: &Element) -> String {
    let mut out = String::new();
    write_element(element, &mut out);
    out
}

pub fn render_child(child: &Child) -> String {
    match child {
        Child::Text(text) => escape_text(text),
        Child::Element(element) => render_element(element),
    }
}

pub fn render_children(children: &[Child]) -> String {
    children.iter().map(render_child).collect()
}

fn write_element(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&element.tag);
    if let Some(id) = element.get_attr("id") {
        push_attribute(out, "id", id);
    }
    if !element.classes.is_empty() {
        push_attribute(out, "class", &element.classes.join(" "));
    }
    for (name, value) in &element.attributes {
        if name != "id" && name != "class" && name != "style" {
            push_attribute(out, name, value);
        }
    }
    if let Some(style) = style_attribute(element) {
        push_attribute(out, "style", &style);
    }
    out.push('>');

    if VOID_ELEMENTS.contains(&element.tag.as_str()) {
        return;
    }
    for child in &element.children {
        match child {
            Child::Text(text) => out.push_str(&escape_text(text)),
            Child::Element(child) => write_element(child, out),
        }
    }
    out.push_str("</");
    out.push_str(&element.tag);
    out.push('>');
}

fn push_attribute(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape_attribute(value));
    out.push('"');
}
