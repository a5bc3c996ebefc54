//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `comment`, `listing`, `profile`) so individual
//! components can depend on small focused models.

pub mod auth;
pub mod comment;
pub mod listing;
pub mod profile;
