//! Index page listing the content and the configured fields.

use crate::dto::main::{ConfiguredField, EntityListItem, IndexPageData};
use crate::forms::settings::settings_summary;
use crate::repository::{EntityReader, FieldSettingsReader};
use crate::services::ServiceResult;
use crate::translation::Translator;

/// Loads every entity and every field instance with a formatter attached.
pub fn load_index_page<R>(
    repo: &R,
    translator: &dyn Translator,
) -> ServiceResult<IndexPageData>
where
    R: EntityReader + FieldSettingsReader + ?Sized,
{
    let entities = repo
        .list_entities()
        .map_err(|err| {
            log::error!("Failed to list entities: {err}");
            err
        })?
        .into_iter()
        .map(|entity| EntityListItem {
            id: entity.id.get(),
            url: entity.resource_url().map(str::to_string),
            label: entity.label,
            entity_type: entity.entity_type,
            bundle: entity.bundle,
        })
        .collect();

    let mut fields = Vec::new();
    for (key, settings) in repo.list_field_settings()? {
        let config = settings.pager_config()?;
        fields.push(ConfiguredField {
            field: key.to_string(),
            formatter_label: translator.translate(settings.formatter.label()),
            settings_url: key.settings_path(),
            summary: settings_summary(&settings, &config, translator),
        });
    }

    Ok(IndexPageData { entities, fields })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::Entity;
    use crate::domain::field::{FieldKey, FormatterKind, FormatterSettings};
    use crate::domain::types::EntityId;
    use crate::models::content::{ContentLibrary, FieldSettingsEntry};
    use crate::repository::InMemoryRepository;
    use crate::translation::Catalog;

    fn entity(id: i32, label: &str, canonical_url: Option<&str>) -> Entity {
        Entity {
            id: EntityId::new(id).unwrap(),
            revision_id: None,
            entity_type: "node".to_string(),
            bundle: "story".to_string(),
            label: label.to_string(),
            langcode: "en".to_string(),
            canonical_url: canonical_url.map(str::to_string),
            is_new: false,
            fields: Vec::new(),
        }
    }

    #[test]
    fn index_lists_entities_and_configured_fields() {
        let repo = InMemoryRepository::new(ContentLibrary {
            entities: vec![entity(2, "Second", None), entity(1, "First", Some("/node/1"))],
            field_settings: vec![FieldSettingsEntry {
                key: FieldKey::new("node", "story", "body"),
                settings: FormatterSettings::new(FormatterKind::TextEasyReadPager),
            }],
            ..ContentLibrary::default()
        });

        let page = load_index_page(&repo, &Catalog::source_language()).unwrap();

        let labels: Vec<&str> = page.entities.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["First", "Second"]);
        assert_eq!(page.entities[0].url.as_deref(), Some("/node/1"));
        assert_eq!(page.fields.len(), 1);
        assert_eq!(page.fields[0].field, "node.story.body");
        assert_eq!(page.fields[0].settings_url, "/fields/node/story/body/settings");
        assert_eq!(page.fields[0].formatter_label, "Text with Easy Read Pagination");
    }
}
