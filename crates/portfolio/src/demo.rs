//! A complete page document with virtual layout, matching the ids and
//! classes the behaviors look for. Used by the CLI simulator and tests.

use portfolio_scene::Element;

pub const SECTION_HEIGHT: f64 = 800.0;
pub const HERO_TEXT: &str = "Hi, I build things for the web";

fn nav_link(fragment: &str, label: &str) -> Element {
    Element::new("li").child(Element::new("a").attr("href", format!("#{fragment}")).text(label))
}

fn section(id: &str, index: usize) -> Element {
    Element::new("section")
        .id(id)
        .layout(index as f64 * SECTION_HEIGHT, SECTION_HEIGHT)
}

pub fn demo_document() -> Element {
    let nav = Element::new("nav").child(
        Element::new("ul").class("nav-links").children([
            nav_link("home", "Home"),
            nav_link("about", "About"),
            nav_link("projects", "Projects"),
            nav_link("contact", "Contact"),
        ]),
    );

    let home = section("home", 0)
        .child(Element::new("h1").class("typing-effect").text(HERO_TEXT))
        .child(
            Element::new("a")
                .class("btn")
                .attr("href", "#projects")
                .text("View Projects"),
        );

    let about = section("about", 1)
        .child(Element::new("h2").text("About Me"))
        .child(Element::new("p").text("Developer with an interest in systems and security."));

    let projects = section("projects", 2)
        .child(Element::new("h2").text("Projects"))
        .child(Element::new("div").id("projectGrid").class("projects-grid"));

    let contact = section("contact", 3).child(Element::new("h2").text("Contact")).child(
        Element::new("form").id("contactForm").children([
            Element::new("input").attr("type", "text").attr("name", "name"),
            Element::new("input").attr("type", "email").attr("name", "email"),
            Element::new("textarea").attr("name", "message"),
            Element::new("button")
                .attr("type", "submit")
                .child(Element::new("span").text("Send Message")),
        ]),
    );

    Element::new("body")
        .child(nav)
        .child(home)
        .child(about)
        .child(projects)
        .child(contact)
        .child(Element::new("footer").text("© Portfolio"))
}
