//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::entity::Entity;
use crate::domain::field::{FieldKey, FormatterSettings};
use crate::domain::types::{EntityId, RevisionId};
use crate::repository::errors::RepositoryResult;
use crate::repository::{EntityReader, FieldSettingsReader, FieldSettingsWriter};

mock! {
    pub Repository {}

    impl EntityReader for Repository {
        fn load_entity(&self, id: EntityId) -> RepositoryResult<Option<Entity>>;
        fn load_revision(
            &self,
            id: EntityId,
            revision_id: RevisionId,
        ) -> RepositoryResult<Option<Entity>>;
        fn list_entities(&self) -> RepositoryResult<Vec<Entity>>;
    }

    impl FieldSettingsReader for Repository {
        fn get_field_settings(&self, key: &FieldKey) -> RepositoryResult<Option<FormatterSettings>>;
        fn list_field_settings(&self) -> RepositoryResult<Vec<(FieldKey, FormatterSettings)>>;
    }

    impl FieldSettingsWriter for Repository {
        fn save_field_settings(
            &self,
            key: &FieldKey,
            settings: &FormatterSettings,
        ) -> RepositoryResult<()>;
    }
}
