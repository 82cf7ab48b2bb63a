//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (guards, fetches, form state)
//! and delegates rendering details to `components`.

pub mod auth;
pub mod dashboard;
pub mod landing;
