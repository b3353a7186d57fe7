//! Storage collaborators: entity loading and per-field formatter settings.

use crate::{
    domain::{
        entity::Entity,
        field::{FieldKey, FormatterSettings},
        types::{EntityId, RevisionId},
    },
    repository::errors::RepositoryResult,
};

pub mod errors;
pub mod memory;
#[cfg(feature = "test-mocks")]
pub mod mock;

pub use memory::InMemoryRepository;

pub trait EntityReader {
    fn load_entity(&self, id: EntityId) -> RepositoryResult<Option<Entity>>;
    fn load_revision(
        &self,
        id: EntityId,
        revision_id: RevisionId,
    ) -> RepositoryResult<Option<Entity>>;
    fn list_entities(&self) -> RepositoryResult<Vec<Entity>>;
}

pub trait FieldSettingsReader {
    fn get_field_settings(&self, key: &FieldKey) -> RepositoryResult<Option<FormatterSettings>>;
    fn list_field_settings(&self) -> RepositoryResult<Vec<(FieldKey, FormatterSettings)>>;
}

pub trait FieldSettingsWriter {
    fn save_field_settings(
        &self,
        key: &FieldKey,
        settings: &FormatterSettings,
    ) -> RepositoryResult<()>;
}
