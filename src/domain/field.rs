//! Field instances, their items, and the formatter settings attached to them.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::domain::pager::{PagerConfig, PagerSettings};
use crate::domain::types::{EntityId, RevisionId, TypeConstraintError, ViewMode};

/// Identifies one configured field on a content-type display.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct FieldKey {
    pub entity_type: String,
    pub bundle: String,
    pub field_name: String,
}

impl FieldKey {
    pub fn new(
        entity_type: impl Into<String>,
        bundle: impl Into<String>,
        field_name: impl Into<String>,
    ) -> Self {
        Self {
            entity_type: entity_type.into(),
            bundle: bundle.into(),
            field_name: field_name.into(),
        }
    }

    /// Path segment used by the settings routes.
    pub fn settings_path(&self) -> String {
        format!(
            "/fields/{}/{}/{}/settings",
            self.entity_type, self.bundle, self.field_name
        )
    }
}

impl Display for FieldKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.entity_type, self.bundle, self.field_name)
    }
}

/// Storage type of a field.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Text,
    TextLong,
    TextWithSummary,
    EntityReference,
    EntityReferenceRevisions,
}

/// Text format applied when a text item is rendered.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TextFormat {
    /// Escaped, line breaks preserved.
    PlainText,
    /// Sanitized HTML.
    #[default]
    BasicHtml,
    /// Trusted HTML emitted as is.
    FullHtml,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TextItem {
    pub value: String,
    #[serde(default)]
    pub format: TextFormat,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct EntityReferenceItem {
    pub target_id: EntityId,
    /// Pinned revision, only meaningful for revision references.
    #[serde(default)]
    pub target_revision_id: Option<RevisionId>,
}

/// One value of a multi-value field.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum FieldItem {
    Reference(EntityReferenceItem),
    Text(TextItem),
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default)]
    pub items: Vec<FieldItem>,
}

impl Field {
    pub fn text_items(&self) -> impl Iterator<Item = &TextItem> {
        self.items.iter().filter_map(|item| match item {
            FieldItem::Text(text) => Some(text),
            FieldItem::Reference(_) => None,
        })
    }

    pub fn reference_items(&self) -> impl Iterator<Item = &EntityReferenceItem> {
        self.items.iter().filter_map(|item| match item {
            FieldItem::Reference(reference) => Some(reference),
            FieldItem::Text(_) => None,
        })
    }
}

/// The easy-read formatters, one per content source.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FormatterKind {
    TextEasyReadPager,
    EntityReferenceEasyReadPager,
    EntityReferenceRevisionsEasyReadPager,
}

impl FormatterKind {
    /// Machine name of the formatter.
    pub fn id(self) -> &'static str {
        match self {
            FormatterKind::TextEasyReadPager => "text_easy_read_pager",
            FormatterKind::EntityReferenceEasyReadPager => "entity_reference_easy_read_pager",
            FormatterKind::EntityReferenceRevisionsEasyReadPager => {
                "entity_reference_revisions_easy_read_pager"
            }
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormatterKind::TextEasyReadPager => "Text with Easy Read Pagination",
            FormatterKind::EntityReferenceEasyReadPager => {
                "Rendered Entity with Easy Read Pagination"
            }
            FormatterKind::EntityReferenceRevisionsEasyReadPager => {
                "Rendered entity with Easy Read Pagination"
            }
        }
    }

    /// Field types the formatter can be attached to.
    pub fn field_types(self) -> &'static [FieldType] {
        match self {
            FormatterKind::TextEasyReadPager => &[
                FieldType::Text,
                FieldType::TextLong,
                FieldType::TextWithSummary,
            ],
            FormatterKind::EntityReferenceEasyReadPager => &[FieldType::EntityReference],
            FormatterKind::EntityReferenceRevisionsEasyReadPager => {
                &[FieldType::EntityReferenceRevisions]
            }
        }
    }

    pub fn applies_to(self, field_type: FieldType) -> bool {
        self.field_types().contains(&field_type)
    }

    pub fn renders_entities(self) -> bool {
        !matches!(self, FormatterKind::TextEasyReadPager)
    }
}

/// Settings stored for one field instance: the formatter and its options.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormatterSettings {
    pub formatter: FormatterKind,
    /// View mode for rendered entities; ignored by the text formatter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view_mode: Option<ViewMode>,
    /// Splits text items on blank lines so each paragraph is its own page.
    #[serde(default)]
    pub split_paragraphs: bool,
    #[serde(flatten)]
    pub pager: PagerSettings,
}

impl FormatterSettings {
    pub fn new(formatter: FormatterKind) -> Self {
        Self {
            formatter,
            view_mode: None,
            split_paragraphs: false,
            pager: PagerSettings::default(),
        }
    }

    /// Effective pager configuration for this instance.
    pub fn pager_config(&self) -> Result<PagerConfig, TypeConstraintError> {
        self.pager.resolve()
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode.clone().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatter_kinds_cover_their_field_types() {
        assert!(FormatterKind::TextEasyReadPager.applies_to(FieldType::TextWithSummary));
        assert!(!FormatterKind::TextEasyReadPager.applies_to(FieldType::EntityReference));
        assert!(
            FormatterKind::EntityReferenceRevisionsEasyReadPager
                .applies_to(FieldType::EntityReferenceRevisions)
        );
        assert!(
            !FormatterKind::EntityReferenceEasyReadPager
                .applies_to(FieldType::EntityReferenceRevisions)
        );
    }

    #[test]
    fn field_items_are_told_apart_by_shape() {
        let field: Field = serde_json::from_str(
            r#"{
                "name": "chapters",
                "label": "Chapters",
                "type": "entity_reference",
                "items": [{"target_id": 4}, {"value": "<p>Hi</p>"}]
            }"#,
        )
        .unwrap();

        assert_eq!(field.reference_items().count(), 1);
        assert_eq!(field.text_items().count(), 1);
        assert_eq!(
            field.text_items().next().map(|item| item.format),
            Some(TextFormat::BasicHtml)
        );
    }

    #[test]
    fn formatter_settings_flatten_pager_keys() {
        let settings: FormatterSettings = serde_json::from_str(
            r#"{"formatter": "text_easy_read_pager", "page_index_name": "part", "split_paragraphs": true}"#,
        )
        .unwrap();

        assert_eq!(settings.formatter, FormatterKind::TextEasyReadPager);
        assert!(settings.split_paragraphs);
        assert_eq!(
            settings.pager_config().unwrap().index_parameter_name.as_str(),
            "part"
        );
        assert_eq!(settings.view_mode().as_str(), "default");
    }
}
