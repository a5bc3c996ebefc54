//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps every HTTP call the UI makes; wire types come from the shared
//! `reviews` crate.

pub mod api;
