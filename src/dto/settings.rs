//! DTOs for the field settings page.

use serde::Serialize;

use crate::domain::field::FormatterKind;
use crate::forms::settings::FormElement;

/// Data required to render the settings form of one field instance.
#[derive(Debug, Clone, Serialize)]
pub struct FieldSettingsPageData {
    /// `entity_type.bundle.field` of the instance.
    pub field: String,
    pub formatter: FormatterKind,
    pub formatter_label: String,
    /// URL the form posts back to.
    pub action: String,
    pub elements: Vec<FormElement>,
    pub summary: Vec<String>,
}
