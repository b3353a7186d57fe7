//! Content library: the entities, field settings and translations served by
//! the in-memory repository.

use serde::{Deserialize, Serialize};

use crate::domain::entity::Entity;
use crate::domain::field::{FieldKey, FormatterSettings};
use crate::translation::Catalog;

/// Formatter settings for one field instance.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldSettingsEntry {
    #[serde(flatten)]
    pub key: FieldKey,
    pub settings: FormatterSettings,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContentLibrary {
    /// Current revision of every entity.
    #[serde(default)]
    pub entities: Vec<Entity>,
    /// Older revisions addressable by revision references.
    #[serde(default)]
    pub revisions: Vec<Entity>,
    #[serde(default)]
    pub field_settings: Vec<FieldSettingsEntry>,
    #[serde(default)]
    pub translations: Vec<Catalog>,
}

impl ContentLibrary {
    /// Translation catalog for `langcode`, untranslated when none is defined.
    pub fn catalog(&self, langcode: &str) -> Catalog {
        self.translations
            .iter()
            .find(|catalog| catalog.langcode == langcode)
            .cloned()
            .unwrap_or_else(|| Catalog {
                langcode: langcode.to_string(),
                entries: Vec::new(),
            })
    }

    /// Reads a YAML content library from `path`.
    #[cfg(feature = "server")]
    pub fn load(path: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::new(path, config::FileFormat::Yaml))
            .build()?
            .try_deserialize::<ContentLibrary>()
    }
}
