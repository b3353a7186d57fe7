//! Services behind the field settings form.

use crate::domain::field::FieldKey;
use crate::dto::settings::FieldSettingsPageData;
use crate::forms::settings::{PagerSettingsForm, settings_form, settings_summary};
use crate::repository::{FieldSettingsReader, FieldSettingsWriter};
use crate::services::{ServiceError, ServiceResult};
use crate::translation::Translator;

/// Loads the settings form of a configured field instance.
pub fn load_field_settings<R>(
    repo: &R,
    key: &FieldKey,
    translator: &dyn Translator,
) -> ServiceResult<FieldSettingsPageData>
where
    R: FieldSettingsReader + ?Sized,
{
    let settings = repo
        .get_field_settings(key)
        .map_err(|err| {
            log::error!("Failed to load settings of {key}: {err}");
            err
        })?
        .ok_or(ServiceError::NotFound)?;

    let config = settings.pager_config()?;

    Ok(FieldSettingsPageData {
        field: key.to_string(),
        formatter: settings.formatter,
        formatter_label: translator.translate(settings.formatter.label()),
        action: key.settings_path(),
        elements: settings_form(&settings, &config, translator),
        summary: settings_summary(&settings, &config, translator),
    })
}

/// Validates the submitted form and replaces the stored settings.
///
/// The formatter attached to the field is kept; only its options change.
pub fn save_field_settings<R>(
    repo: &R,
    key: &FieldKey,
    form: PagerSettingsForm,
) -> ServiceResult<()>
where
    R: FieldSettingsReader + FieldSettingsWriter + ?Sized,
{
    let current = repo
        .get_field_settings(key)?
        .ok_or(ServiceError::NotFound)?;

    let settings = form.into_settings(current.formatter).map_err(|err| {
        log::warn!("Rejected settings for {key}: {err}");
        err
    })?;

    repo.save_field_settings(key, &settings).map_err(|err| {
        log::error!("Failed to save settings of {key}: {err}");
        err
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::field::{FormatterKind, FormatterSettings};
    use crate::domain::pager::NotFoundPolicy;
    use crate::models::content::{ContentLibrary, FieldSettingsEntry};
    use crate::repository::InMemoryRepository;
    use crate::translation::{Catalog, CatalogEntry};

    fn body_key() -> FieldKey {
        FieldKey::new("node", "story", "body")
    }

    fn repo() -> InMemoryRepository {
        InMemoryRepository::new(ContentLibrary {
            field_settings: vec![FieldSettingsEntry {
                key: body_key(),
                settings: FormatterSettings::new(FormatterKind::TextEasyReadPager),
            }],
            ..ContentLibrary::default()
        })
    }

    fn form(page_index_name: &str) -> PagerSettingsForm {
        PagerSettingsForm {
            view_mode: None,
            page_index_name: page_index_name.to_string(),
            navigate_previous_next: true,
            navigate_first_last: false,
            navigate_by_numbers: true,
            max_pages_to_show: 3,
            show_page_summary: true,
            split_paragraphs: true,
            not_found_policy: NotFoundPolicy::Empty,
        }
    }

    #[test]
    fn load_describes_the_configured_field() {
        let catalog = Catalog {
            langcode: "de".to_string(),
            entries: vec![CatalogEntry {
                source: "Pagination settings (Max pages: @max)".to_string(),
                translation: "Seiteneinstellungen (max. @max)".to_string(),
            }],
        };

        let page = load_field_settings(&repo(), &body_key(), &catalog).unwrap();

        assert_eq!(page.field, "node.story.body");
        assert_eq!(page.action, "/fields/node/story/body/settings");
        assert_eq!(page.formatter, FormatterKind::TextEasyReadPager);
        assert_eq!(page.summary, vec!["Seiteneinstellungen (max. 5)".to_string()]);
        assert!(!page.elements.is_empty());
    }

    #[test]
    fn load_unconfigured_field_is_not_found() {
        let key = FieldKey::new("node", "story", "tags");

        let result = load_field_settings(&repo(), &key, &Catalog::source_language());

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[test]
    fn save_replaces_options_and_keeps_formatter() {
        let repo = repo();

        save_field_settings(&repo, &body_key(), form("chapter")).unwrap();

        let stored = repo.get_field_settings(&body_key()).unwrap().unwrap();
        assert_eq!(stored.formatter, FormatterKind::TextEasyReadPager);
        assert!(stored.split_paragraphs);
        let config = stored.pager_config().unwrap();
        assert_eq!(config.index_parameter_name.as_str(), "chapter");
        assert_eq!(config.max_pages_to_show, 3);
    }

    #[test]
    fn invalid_form_leaves_settings_untouched() {
        let repo = repo();

        let result = save_field_settings(&repo, &body_key(), form(""));

        assert!(matches!(result, Err(ServiceError::Form(_))));
        let stored = repo.get_field_settings(&body_key()).unwrap().unwrap();
        assert_eq!(stored, FormatterSettings::new(FormatterKind::TextEasyReadPager));
    }
}
