//! DTO modules that bridge services with templates.

pub mod entity;
pub mod field;
pub mod main;
pub mod settings;
