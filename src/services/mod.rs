pub mod errors;
pub mod formatter;
pub mod main;
pub mod render;
pub mod settings;

pub use errors::{ServiceError, ServiceResult};
