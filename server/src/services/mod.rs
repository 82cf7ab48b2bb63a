//! Service layer: backend access and the canned record queries built on it.

pub mod backend;
pub mod records;
