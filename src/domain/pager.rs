//! Pager configuration and the merge of instance overrides over defaults.

use serde::{Deserialize, Serialize};

use crate::domain::types::{IndexParameterName, TypeConstraintError};

pub const DEFAULT_INDEX_PARAMETER: &str = "page";
pub const DEFAULT_MAX_PAGES_TO_SHOW: usize = 5;

/// What happens when the requested index does not point at an item.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum NotFoundPolicy {
    /// Surface a "page does not exist" error to the caller.
    #[default]
    Fail,
    /// Render the field without any item and without navigation.
    Empty,
}

impl NotFoundPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            NotFoundPolicy::Fail => "fail",
            NotFoundPolicy::Empty => "empty",
        }
    }
}

/// Effective pager configuration for one field instance.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct PagerConfig {
    pub index_parameter_name: IndexParameterName,
    pub show_prev_next: bool,
    pub show_first_last: bool,
    pub show_numbered: bool,
    /// Upper bound on numbered links; `0` disables the cap.
    pub max_pages_to_show: usize,
    pub show_page_summary: bool,
    pub not_found_policy: NotFoundPolicy,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            index_parameter_name: IndexParameterName::default(),
            show_prev_next: true,
            show_first_last: true,
            show_numbered: true,
            max_pages_to_show: DEFAULT_MAX_PAGES_TO_SHOW,
            show_page_summary: false,
            not_found_policy: NotFoundPolicy::Fail,
        }
    }
}

/// Instance-level overrides as kept by the settings store.
///
/// Every key is optional; missing keys fall back to [`PagerConfig::default`].
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PagerSettings {
    #[serde(
        default,
        alias = "pageIndexName",
        alias = "indexParameterName",
        alias = "index_parameter_name",
        skip_serializing_if = "Option::is_none"
    )]
    pub page_index_name: Option<String>,
    #[serde(
        default,
        alias = "navigatePreviousNext",
        skip_serializing_if = "Option::is_none"
    )]
    pub navigate_previous_next: Option<bool>,
    #[serde(
        default,
        alias = "navigateFirstLast",
        skip_serializing_if = "Option::is_none"
    )]
    pub navigate_first_last: Option<bool>,
    #[serde(
        default,
        alias = "navigateByNumbers",
        skip_serializing_if = "Option::is_none"
    )]
    pub navigate_by_numbers: Option<bool>,
    #[serde(
        default,
        alias = "maxPagesToShow",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_pages_to_show: Option<i64>,
    #[serde(
        default,
        alias = "showPageSummary",
        skip_serializing_if = "Option::is_none"
    )]
    pub show_page_summary: Option<bool>,
    #[serde(
        default,
        alias = "notFoundPolicy",
        skip_serializing_if = "Option::is_none"
    )]
    pub not_found_policy: Option<NotFoundPolicy>,
}

impl PagerSettings {
    /// Merges the stored overrides over the defaults.
    ///
    /// A negative `max_pages_to_show` is clamped to `0`.
    pub fn resolve(&self) -> Result<PagerConfig, TypeConstraintError> {
        let defaults = PagerConfig::default();

        let index_parameter_name = match &self.page_index_name {
            Some(name) => IndexParameterName::new(name.as_str())?,
            None => defaults.index_parameter_name,
        };

        let max_pages_to_show = self
            .max_pages_to_show
            .map(|max| usize::try_from(max.max(0)).unwrap_or(usize::MAX))
            .unwrap_or(defaults.max_pages_to_show);

        Ok(PagerConfig {
            index_parameter_name,
            show_prev_next: self
                .navigate_previous_next
                .unwrap_or(defaults.show_prev_next),
            show_first_last: self.navigate_first_last.unwrap_or(defaults.show_first_last),
            show_numbered: self.navigate_by_numbers.unwrap_or(defaults.show_numbered),
            max_pages_to_show,
            show_page_summary: self
                .show_page_summary
                .unwrap_or(defaults.show_page_summary),
            not_found_policy: self.not_found_policy.unwrap_or(defaults.not_found_policy),
        })
    }
}

impl From<&PagerConfig> for PagerSettings {
    fn from(config: &PagerConfig) -> Self {
        Self {
            page_index_name: Some(config.index_parameter_name.to_string()),
            navigate_previous_next: Some(config.show_prev_next),
            navigate_first_last: Some(config.show_first_last),
            navigate_by_numbers: Some(config.show_numbered),
            max_pages_to_show: Some(i64::try_from(config.max_pages_to_show).unwrap_or(i64::MAX)),
            show_page_summary: Some(config.show_page_summary),
            not_found_policy: Some(config.not_found_policy),
        }
    }
}
