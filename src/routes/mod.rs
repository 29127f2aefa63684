//! HTTP route handlers.
pub mod main;
