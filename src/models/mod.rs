//! Models read from configuration and content files.

#[cfg(feature = "server")]
pub mod config;
pub mod content;
