//! Settings form of the easy-read formatters.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use validator::{Validate, ValidationError};

use crate::domain::field::{FormatterKind, FormatterSettings};
use crate::domain::pager::{DEFAULT_MAX_PAGES_TO_SHOW, NotFoundPolicy, PagerConfig, PagerSettings};
use crate::domain::types::{IndexParameterName, ViewMode};
use crate::forms::FormError;
use crate::translation::Translator;

/// View modes offered to entity formatters.
pub const VIEW_MODES: &[&str] = &["default", "full", "teaser"];

fn default_max_pages() -> i64 {
    DEFAULT_MAX_PAGES_TO_SHOW as i64
}

fn validate_index_parameter(value: &str) -> Result<(), ValidationError> {
    IndexParameterName::new(value)
        .map(|_| ())
        .map_err(|_| ValidationError::new("index_parameter"))
}

#[derive(Debug, Deserialize, Validate)]
/// Submitted settings of one field instance.
///
/// Unchecked checkboxes are absent from the payload and read as `false`.
pub struct PagerSettingsForm {
    #[serde(default)]
    pub view_mode: Option<String>,
    #[validate(length(min = 1, max = 64), custom(function = "validate_index_parameter"))]
    pub page_index_name: String,
    #[serde(default)]
    pub navigate_previous_next: bool,
    #[serde(default)]
    pub navigate_first_last: bool,
    #[serde(default)]
    pub navigate_by_numbers: bool,
    #[serde(default = "default_max_pages")]
    #[validate(range(min = 0, max = 100))]
    pub max_pages_to_show: i64,
    #[serde(default)]
    pub show_page_summary: bool,
    #[serde(default)]
    pub split_paragraphs: bool,
    #[serde(default)]
    pub not_found_policy: NotFoundPolicy,
}

impl PagerSettingsForm {
    /// Validates the form and builds the settings stored for `formatter`.
    pub fn into_settings(
        self,
        formatter: FormatterKind,
    ) -> Result<FormatterSettings, FormError> {
        self.validate()?;

        let page_index_name = IndexParameterName::new(self.page_index_name)
            .map_err(|_| FormError::InvalidIndexParameter)?;

        let view_mode = match self.view_mode.as_deref().map(str::trim) {
            Some(mode) if !mode.is_empty() && formatter.renders_entities() => {
                if !VIEW_MODES.contains(&mode) {
                    return Err(FormError::InvalidViewMode);
                }
                Some(ViewMode::new(mode).map_err(|_| FormError::InvalidViewMode)?)
            }
            _ => None,
        };

        Ok(FormatterSettings {
            formatter,
            view_mode,
            split_paragraphs: self.split_paragraphs
                && formatter == FormatterKind::TextEasyReadPager,
            pager: PagerSettings {
                page_index_name: Some(page_index_name.into()),
                navigate_previous_next: Some(self.navigate_previous_next),
                navigate_first_last: Some(self.navigate_first_last),
                navigate_by_numbers: Some(self.navigate_by_numbers),
                max_pages_to_show: Some(self.max_pages_to_show),
                show_page_summary: Some(self.show_page_summary),
                not_found_policy: Some(self.not_found_policy),
            },
        })
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ElementType {
    Checkbox,
    Textfield,
    Number,
    Select,
}

/// One input of the settings form.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FormElement {
    pub name: &'static str,
    pub element_type: ElementType,
    pub title: String,
    pub description: Option<String>,
    pub default_value: Value,
    pub required: bool,
    pub options: Vec<String>,
    /// Checkbox that must be checked for this element to be shown.
    pub visible_when_checked: Option<&'static str>,
}

impl FormElement {
    fn new(
        name: &'static str,
        element_type: ElementType,
        title: String,
        default_value: Value,
    ) -> Self {
        Self {
            name,
            element_type,
            title,
            description: None,
            default_value,
            required: false,
            options: Vec::new(),
            visible_when_checked: None,
        }
    }

    fn checkbox(name: &'static str, title: String, checked: bool) -> Self {
        Self::new(name, ElementType::Checkbox, title, json!(checked))
    }

    fn describe(mut self, description: String) -> Self {
        self.description = Some(description);
        self
    }
}

/// Describes the settings form of a field instance, prefilled with `settings`.
pub fn settings_form(
    settings: &FormatterSettings,
    config: &PagerConfig,
    t: &dyn Translator,
) -> Vec<FormElement> {
    let mut elements = Vec::new();

    if settings.formatter.renders_entities() {
        let mut view_mode = FormElement::new(
            "view_mode",
            ElementType::Select,
            t.translate("View mode"),
            json!(settings.view_mode().as_str()),
        );
        view_mode.options = VIEW_MODES.iter().map(|mode| mode.to_string()).collect();
        view_mode.required = true;
        elements.push(view_mode);
    } else {
        elements.push(
            FormElement::checkbox(
                "split_paragraphs",
                t.translate("Split text into paragraphs"),
                settings.split_paragraphs,
            )
            .describe(t.translate("Show each paragraph as its own page.")),
        );
    }

    elements.push(
        FormElement::checkbox(
            "show_page_summary",
            t.translate("Display page summary"),
            config.show_page_summary,
        )
        .describe(t.translate("Show a summary like \"Page X of N\".")),
    );

    let mut index_name = FormElement::new(
        "page_index_name",
        ElementType::Textfield,
        t.translate("Index field name"),
        json!(config.index_parameter_name.as_str()),
    );
    index_name.required = true;
    elements.push(index_name);

    elements.push(FormElement::checkbox(
        "navigate_previous_next",
        t.translate("Display Previous & Next"),
        config.show_prev_next,
    ));
    elements.push(FormElement::checkbox(
        "navigate_first_last",
        t.translate("Display First & Last"),
        config.show_first_last,
    ));
    elements.push(FormElement::checkbox(
        "navigate_by_numbers",
        t.translate("Display numeric page navigation"),
        config.show_numbered,
    ));

    let mut max_pages = FormElement::new(
        "max_pages_to_show",
        ElementType::Number,
        t.translate("Maximum number of pages to display"),
        json!(config.max_pages_to_show),
    );
    max_pages.visible_when_checked = Some("navigate_by_numbers");
    elements.push(max_pages);

    let mut not_found = FormElement::new(
        "not_found_policy",
        ElementType::Select,
        t.translate("When the requested page does not exist"),
        json!(config.not_found_policy.as_str()),
    );
    not_found.options = vec![
        NotFoundPolicy::Fail.as_str().to_string(),
        NotFoundPolicy::Empty.as_str().to_string(),
    ];
    elements.push(not_found);

    elements
}

/// Short description of the settings shown next to the field.
pub fn settings_summary(
    settings: &FormatterSettings,
    config: &PagerConfig,
    t: &dyn Translator,
) -> Vec<String> {
    let mut summary = Vec::new();

    if settings.formatter.renders_entities() {
        summary.push(t.format(
            "Rendered as @mode",
            &[("@mode", settings.view_mode().as_str())],
        ));
    }

    let max = config.max_pages_to_show.to_string();
    summary.push(t.format(
        "Pagination settings (Max pages: @max)",
        &[("@max", max.as_str())],
    ));

    summary
}
