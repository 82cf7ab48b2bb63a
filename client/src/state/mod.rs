//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `dashboard`) so pages depend on small
//! focused models provided through Leptos context or owned locally.

pub mod auth;
pub mod dashboard;
