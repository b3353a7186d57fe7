//! Domain types shared by the pagination planner, formatters and the host.

pub mod entity;
pub mod field;
pub mod pager;
pub mod types;
