//! Platform-independent element tree.
//!
//! [`Element`] is owned markup; [`Document`] is a live tree built from it
//! that the headless page and the CLI mutate. The browser frontend turns the
//! same markup into real DOM nodes.

pub mod document;
pub mod element;
pub mod html;

pub use document::{Document, ElementRef, NodeId};
pub use element::{Child, Element, Layout};
