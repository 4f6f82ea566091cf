//! Page behaviors, free of any DOM: each one is a small state machine or a
//! pure decision the headless page and the browser frontend both drive.

pub mod active_nav;
pub mod contact;
pub mod reveal;
pub mod smooth_scroll;
pub mod typing;
