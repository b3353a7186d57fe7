//! DTOs shaped for entity templates.

use serde::Serialize;

use crate::dto::field::PagedFieldView;

/// A field as shown inside a rendered entity.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "display", rename_all = "snake_case")]
pub enum FieldView {
    /// Field with an easy-read formatter attached.
    Paged(PagedFieldView),
    /// Any other field: every item, in order.
    Plain {
        name: String,
        label: String,
        items: Vec<String>,
    },
}

/// Data required to render an entity in one view mode.
#[derive(Debug, Clone, Serialize)]
pub struct EntityView {
    pub id: i32,
    pub entity_type: String,
    pub bundle: String,
    pub label: String,
    pub langcode: String,
    pub view_mode: String,
    pub fields: Vec<FieldView>,
}

/// Top-level page for a single entity.
#[derive(Debug, Clone, Serialize)]
pub struct EntityPageData {
    pub id: i32,
    pub label: String,
    pub markup: String,
}
