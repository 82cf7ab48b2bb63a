//! Networking modules for the browser-facing REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the server's `/api` routes and `types` defines the shared wire
//! schema, which the server reuses when relaying backend records.

pub mod api;
pub mod types;
