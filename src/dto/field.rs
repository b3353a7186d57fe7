//! View-models handed to the pager templates.

use serde::Serialize;

use crate::domain::field::FormatterKind;
use crate::domain::pager::PagerConfig;
use crate::pagination::LinkKind;

/// One navigation control, translated and with its target URL.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NavLinkView {
    pub kind: LinkKind,
    pub text: String,
    pub href: String,
    pub target_index: usize,
    pub is_current: bool,
    pub aria_label: Option<String>,
    /// `Some("page")` on the current numbered link.
    pub aria_current: Option<&'static str>,
    pub classes: Vec<&'static str>,
}

/// The single item shown for the current index.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SelectedContent {
    pub index: usize,
    /// Sanitized markup, safe to emit unescaped.
    pub markup: String,
    /// RDFa `resource` of a rendered entity.
    pub resource: Option<String>,
}

/// Everything needed to render one paginated field.
#[derive(Debug, Clone, Serialize)]
pub struct PagedFieldView {
    pub field_name: String,
    pub label: String,
    pub formatter: FormatterKind,
    pub resolved_index: Option<usize>,
    pub total_items: usize,
    pub navigation_links: Vec<NavLinkView>,
    pub config: PagerConfig,
    pub selected_content: Option<SelectedContent>,
    /// "Page X of N" when enabled.
    pub summary: Option<String>,
    /// Shown instead of the item when its nested render was aborted.
    pub error: Option<String>,
}
