pub mod auth;
pub mod format;
pub mod status;
