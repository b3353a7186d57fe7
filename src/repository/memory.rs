//! Repository backed by a [`ContentLibrary`] held in memory.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::entity::Entity;
use crate::domain::field::{FieldKey, FormatterSettings};
use crate::domain::types::{EntityId, RevisionId};
use crate::models::content::ContentLibrary;
use crate::repository::errors::RepositoryResult;
use crate::repository::{EntityReader, FieldSettingsReader, FieldSettingsWriter};

/// Entities are read-only; field settings can be replaced at runtime.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    entities: HashMap<EntityId, Entity>,
    revisions: HashMap<(EntityId, RevisionId), Entity>,
    settings: RwLock<HashMap<FieldKey, FormatterSettings>>,
}

impl InMemoryRepository {
    pub fn new(library: ContentLibrary) -> Self {
        let mut revisions = HashMap::new();
        for entity in library.revisions.into_iter().chain(library.entities.iter().cloned()) {
            if let Some(revision_id) = entity.revision_id {
                revisions.insert((entity.id, revision_id), entity);
            }
        }

        let entities = library
            .entities
            .into_iter()
            .map(|entity| (entity.id, entity))
            .collect();

        let settings = library
            .field_settings
            .into_iter()
            .map(|entry| (entry.key, entry.settings))
            .collect();

        Self {
            entities,
            revisions,
            settings: RwLock::new(settings),
        }
    }
}

impl EntityReader for InMemoryRepository {
    fn load_entity(&self, id: EntityId) -> RepositoryResult<Option<Entity>> {
        Ok(self.entities.get(&id).cloned())
    }

    fn load_revision(
        &self,
        id: EntityId,
        revision_id: RevisionId,
    ) -> RepositoryResult<Option<Entity>> {
        Ok(self.revisions.get(&(id, revision_id)).cloned())
    }

    fn list_entities(&self) -> RepositoryResult<Vec<Entity>> {
        let mut entities: Vec<Entity> = self.entities.values().cloned().collect();
        entities.sort_by_key(|entity| entity.id.get());
        Ok(entities)
    }
}

impl FieldSettingsReader for InMemoryRepository {
    fn get_field_settings(&self, key: &FieldKey) -> RepositoryResult<Option<FormatterSettings>> {
        Ok(self.settings.read()?.get(key).cloned())
    }

    fn list_field_settings(&self) -> RepositoryResult<Vec<(FieldKey, FormatterSettings)>> {
        let mut settings: Vec<(FieldKey, FormatterSettings)> = self
            .settings
            .read()?
            .iter()
            .map(|(key, settings)| (key.clone(), settings.clone()))
            .collect();
        settings.sort_by_key(|(key, _)| key.to_string());
        Ok(settings)
    }
}

impl FieldSettingsWriter for InMemoryRepository {
    fn save_field_settings(
        &self,
        key: &FieldKey,
        settings: &FormatterSettings,
    ) -> RepositoryResult<()> {
        self.settings
            .write()?
            .insert(key.clone(), settings.clone());
        Ok(())
    }
}
