//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and the comment dialog while reading/writing
//! shared state from Leptos context providers or signals handed in by pages.

pub mod comment_modal;
pub mod nav_bar;
pub mod pagination_nav;
