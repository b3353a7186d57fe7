use serde::{Deserialize, Serialize};

use crate::domain::field::{Field, FieldKey};
use crate::domain::types::{EntityId, RevisionId};

/// A renderable content entity with its fields.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Entity {
    pub id: EntityId,
    #[serde(default)]
    pub revision_id: Option<RevisionId>,
    pub entity_type: String,
    pub bundle: String,
    pub label: String,
    #[serde(default = "default_langcode")]
    pub langcode: String,
    /// Canonical URL when the entity type exposes one.
    #[serde(default)]
    pub canonical_url: Option<String>,
    /// Unsaved entities have no stable URL to point at.
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub fields: Vec<Field>,
}

fn default_langcode() -> String {
    "en".to_string()
}

impl Entity {
    /// Settings key of one of this entity's fields.
    pub fn field_key(&self, field: &Field) -> FieldKey {
        FieldKey::new(&self.entity_type, &self.bundle, &field.name)
    }

    /// URL used as the RDFa `resource` of a rendered reference.
    pub fn resource_url(&self) -> Option<&str> {
        if self.is_new {
            return None;
        }
        self.canonical_url.as_deref()
    }
}
