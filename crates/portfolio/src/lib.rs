//! Portfolio page core.
//!
//! The project store and card renderer, the page behaviors as DOM-free state
//! machines, and [`page::Page`], which wires all of it to a
//! [`portfolio_scene::Document`] with virtual time.

pub mod behaviors;
pub mod clock;
pub mod config;
pub mod demo;
pub mod page;
pub mod project;
pub mod render;
pub mod store;

pub use config::PageConfig;
pub use page::{Page, PageElements};
pub use project::{seed_projects, ProjectRecord};
pub use render::Renderer;
pub use store::{ProjectStore, Removal};

pub use portfolio_scene;
