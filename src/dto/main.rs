//! DTOs for the index page.

use serde::Serialize;

/// Link to a rendered entity.
#[derive(Debug, Clone, Serialize)]
pub struct EntityListItem {
    pub id: i32,
    pub label: String,
    pub entity_type: String,
    pub bundle: String,
    pub url: Option<String>,
}

/// A field instance with an easy-read formatter attached.
#[derive(Debug, Clone, Serialize)]
pub struct ConfiguredField {
    pub field: String,
    pub formatter_label: String,
    pub settings_url: String,
    pub summary: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct IndexPageData {
    pub entities: Vec<EntityListItem>,
    pub fields: Vec<ConfiguredField>,
}
