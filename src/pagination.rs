//! Navigation planning for single-item pagination.
//!
//! [`plan`] turns a total item count, the raw index taken from the request
//! and a [`PagerConfig`] into the validated index plus the ordered list of
//! navigation links. It performs no I/O and never mutates its inputs.

use std::num::IntErrorKind;
use std::ops::Range;

use serde::Serialize;
use thiserror::Error;

use crate::domain::pager::PagerConfig;

/// Errors produced while planning a page.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanError {
    /// The requested index does not point at an existing item.
    #[error("page index {index} is out of range for {total} items")]
    IndexOutOfRange { index: i64, total: usize },
}

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    First,
    Previous,
    Page,
    Next,
    Last,
}

impl LinkKind {
    /// Source string of the visible label, `None` for numbered links.
    pub fn text(self) -> Option<&'static str> {
        match self {
            LinkKind::First => Some("First"),
            LinkKind::Previous => Some("Previous"),
            LinkKind::Page => None,
            LinkKind::Next => Some("Next"),
            LinkKind::Last => Some("Last"),
        }
    }

    /// Source string of the `aria-label`, `None` for numbered links.
    pub fn aria_label(self) -> Option<&'static str> {
        match self {
            LinkKind::First => Some("Go to the first page"),
            LinkKind::Previous => Some("Go to the previous page"),
            LinkKind::Page => None,
            LinkKind::Next => Some("Go to the next page"),
            LinkKind::Last => Some("Go to the last page"),
        }
    }
}

/// Visible label of a link: a word or a 1-based page number.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum LinkLabel {
    Text(&'static str),
    Number(usize),
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct NavLink {
    pub kind: LinkKind,
    pub label: LinkLabel,
    /// 0-based index the link navigates to.
    pub target_index: usize,
    pub is_current: bool,
    pub accessibility_label: Option<&'static str>,
}

impl NavLink {
    fn control(kind: LinkKind, target_index: usize) -> Self {
        Self {
            kind,
            label: LinkLabel::Text(kind.text().unwrap_or_default()),
            target_index,
            is_current: false,
            accessibility_label: kind.aria_label(),
        }
    }

    fn page(index: usize, current: usize) -> Self {
        Self {
            kind: LinkKind::Page,
            label: LinkLabel::Number(index + 1),
            target_index: index,
            is_current: index == current,
            accessibility_label: None,
        }
    }
}

/// Result of planning one field render.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct PagePlan {
    pub total_items: usize,
    /// Index of the item to show, `None` when there is nothing to show.
    pub resolved_index: Option<usize>,
    pub links: Vec<NavLink>,
}

impl PagePlan {
    /// Whether navigation is rendered at all.
    pub fn is_paginated(&self) -> bool {
        self.total_items >= 2
    }
}

/// Parses the raw request value; absent or unparsable input resolves to `0`.
///
/// Integers outside the `i64` range saturate so they stay out of range.
pub fn parse_index(raw: Option<&str>) -> i64 {
    let Some(value) = raw else {
        return 0;
    };

    match value.trim().parse::<i64>() {
        Ok(index) => index,
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => i64::MAX,
            IntErrorKind::NegOverflow => i64::MIN,
            _ => 0,
        },
    }
}

/// Validates a parsed index against the item count.
pub fn resolve_index(index: i64, total_items: usize) -> Result<usize, PlanError> {
    usize::try_from(index)
        .ok()
        .filter(|&index| index < total_items)
        .ok_or(PlanError::IndexOutOfRange {
            index,
            total: total_items,
        })
}

/// Range of indices that get a numbered link.
///
/// With `max_pages == 0` or few enough items every index is listed. Otherwise
/// the window holds `max_pages` consecutive indices around `current`, shifted
/// to stay within bounds.
fn numbered_window(total_items: usize, current: usize, max_pages: usize) -> Range<usize> {
    if max_pages == 0 || total_items <= max_pages {
        return 0..total_items;
    }

    let start = current
        .saturating_sub(max_pages / 2)
        .min(total_items - max_pages);

    start..start + max_pages
}

/// Plans the navigation for `total_items` items.
pub fn plan(
    total_items: usize,
    raw_index: Option<&str>,
    config: &PagerConfig,
) -> Result<PagePlan, PlanError> {
    if total_items < 2 {
        return Ok(PagePlan {
            total_items,
            resolved_index: (total_items == 1).then_some(0),
            links: Vec::new(),
        });
    }

    let current = resolve_index(parse_index(raw_index), total_items)?;
    let last = total_items - 1;

    let mut links = Vec::new();

    if config.show_first_last && current > 0 {
        links.push(NavLink::control(LinkKind::First, 0));
    }

    if config.show_prev_next && current > 0 {
        links.push(NavLink::control(LinkKind::Previous, current.saturating_sub(1)));
    }

    if config.show_numbered {
        links.extend(
            numbered_window(total_items, current, config.max_pages_to_show)
                .map(|index| NavLink::page(index, current)),
        );
    }

    if config.show_prev_next && current < last {
        links.push(NavLink::control(LinkKind::Next, (current + 1).min(last)));
    }

    if config.show_first_last && current < last {
        links.push(NavLink::control(LinkKind::Last, last));
    }

    Ok(PagePlan {
        total_items,
        resolved_index: Some(current),
        links,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(plan: &PagePlan) -> Vec<LinkKind> {
        plan.links.iter().map(|link| link.kind).collect()
    }

    fn labels(plan: &PagePlan) -> Vec<String> {
        plan.links
            .iter()
            .map(|link| match (&link.label, link.is_current) {
                (LinkLabel::Text(text), _) => text.to_string(),
                (LinkLabel::Number(n), true) => format!("[{n}*]"),
                (LinkLabel::Number(n), false) => n.to_string(),
            })
            .collect()
    }

    fn all_configs() -> Vec<PagerConfig> {
        let mut configs = Vec::new();
        for bits in 0..8u8 {
            configs.push(PagerConfig {
                show_prev_next: bits & 1 != 0,
                show_first_last: bits & 2 != 0,
                show_numbered: bits & 4 != 0,
                max_pages_to_show: 0,
                ..PagerConfig::default()
            });
        }
        configs
    }

    #[test]
    fn middle_page_with_defaults() {
        let plan = plan(5, Some("2"), &PagerConfig::default()).unwrap();

        assert_eq!(plan.resolved_index, Some(2));
        assert_eq!(
            labels(&plan),
            vec![
                "First", "Previous", "1", "2", "[3*]", "4", "5", "Next", "Last"
            ]
        );
    }

    #[test]
    fn missing_index_starts_at_first_page() {
        let plan = plan(5, None, &PagerConfig::default()).unwrap();

        assert_eq!(plan.resolved_index, Some(0));
        assert_eq!(
            labels(&plan),
            vec!["[1*]", "2", "3", "4", "5", "Next", "Last"]
        );
    }

    #[test]
    fn index_past_the_end_is_not_found() {
        let result = plan(3, Some("5"), &PagerConfig::default());

        assert_eq!(
            result,
            Err(PlanError::IndexOutOfRange { index: 5, total: 3 })
        );
    }

    #[test]
    fn negative_index_is_not_found() {
        let result = plan(3, Some("-1"), &PagerConfig::default());

        assert_eq!(
            result,
            Err(PlanError::IndexOutOfRange {
                index: -1,
                total: 3
            })
        );
    }

    #[test]
    fn single_item_has_no_links() {
        let plan = plan(1, Some("0"), &PagerConfig::default()).unwrap();

        assert!(plan.links.is_empty());
        assert_eq!(plan.resolved_index, Some(0));
        assert!(!plan.is_paginated());
    }

    #[test]
    fn no_items_means_no_selection() {
        let plan = plan(0, Some("3"), &PagerConfig::default()).unwrap();

        assert!(plan.links.is_empty());
        assert_eq!(plan.resolved_index, None);
    }

    #[test]
    fn last_page_without_numbers() {
        let config = PagerConfig {
            show_numbered: false,
            show_prev_next: true,
            ..PagerConfig::default()
        };

        let plan = plan(4, Some("3"), &config).unwrap();

        assert_eq!(kinds(&plan), vec![LinkKind::First, LinkKind::Previous]);
        assert_eq!(plan.links[0].target_index, 0);
        assert_eq!(plan.links[1].target_index, 2);
    }

    #[test]
    fn fewer_than_two_items_never_get_links() {
        for config in all_configs() {
            for raw in [None, Some("0"), Some("x"), Some("9")] {
                for total in 0..2 {
                    let plan = plan(total, raw, &config).unwrap();
                    assert!(plan.links.is_empty());
                }
            }
        }
    }

    #[test]
    fn link_kinds_follow_enabled_flags() {
        for config in all_configs() {
            for total in 2..6usize {
                for current in 0..total {
                    let raw = current.to_string();
                    let plan = plan(total, Some(&raw), &config).unwrap();

                    let mut expected = Vec::new();
                    if config.show_first_last && current > 0 {
                        expected.push(LinkKind::First);
                    }
                    if config.show_prev_next && current > 0 {
                        expected.push(LinkKind::Previous);
                    }
                    if config.show_numbered {
                        expected.extend(std::iter::repeat_n(LinkKind::Page, total));
                    }
                    if config.show_prev_next && current < total - 1 {
                        expected.push(LinkKind::Next);
                    }
                    if config.show_first_last && current < total - 1 {
                        expected.push(LinkKind::Last);
                    }

                    assert_eq!(kinds(&plan), expected, "total={total} current={current}");
                }
            }
        }
    }

    #[test]
    fn exactly_one_numbered_link_is_current() {
        let config = PagerConfig::default();
        for total in 2..12usize {
            for current in 0..total {
                let raw = current.to_string();
                let plan = plan(total, Some(&raw), &config).unwrap();

                let current_links: Vec<_> =
                    plan.links.iter().filter(|link| link.is_current).collect();
                assert_eq!(current_links.len(), 1);
                assert_eq!(current_links[0].kind, LinkKind::Page);
                assert_eq!(current_links[0].target_index, current);
            }
        }
    }

    #[test]
    fn every_target_stays_in_range() {
        for total in 2..8usize {
            for current in 0..total {
                let raw = current.to_string();
                let plan = plan(total, Some(&raw), &PagerConfig::default()).unwrap();
                assert!(plan.links.iter().all(|link| link.target_index < total));
            }
        }
    }

    #[test]
    fn non_numeric_input_resolves_to_zero() {
        assert_eq!(parse_index(None), 0);
        assert_eq!(parse_index(Some("abc")), 0);
        assert_eq!(parse_index(Some("")), 0);
        assert_eq!(parse_index(Some(" 4 ")), 4);

        let plan = plan(3, Some("two"), &PagerConfig::default()).unwrap();
        assert_eq!(plan.resolved_index, Some(0));
    }

    #[test]
    fn overflowing_index_is_out_of_range() {
        assert_eq!(parse_index(Some("99999999999999999999")), i64::MAX);
        assert_eq!(parse_index(Some("-99999999999999999999")), i64::MIN);

        for raw in ["99999999999999999999", "-99999999999999999999"] {
            let result = plan(3, Some(raw), &PagerConfig::default());
            assert!(
                matches!(result, Err(PlanError::IndexOutOfRange { total: 3, .. })),
                "{raw}"
            );
        }
    }

    #[test]
    fn numbered_links_are_capped_by_max_pages() {
        let config = PagerConfig {
            max_pages_to_show: 3,
            ..PagerConfig::default()
        };

        let plan = plan(10, Some("5"), &config).unwrap();
        let pages: Vec<usize> = plan
            .links
            .iter()
            .filter(|link| link.kind == LinkKind::Page)
            .map(|link| link.target_index)
            .collect();

        assert_eq!(pages, vec![4, 5, 6]);
    }

    #[test]
    fn capped_window_is_shifted_at_the_edges() {
        assert_eq!(numbered_window(10, 0, 4), 0..4);
        assert_eq!(numbered_window(10, 9, 4), 6..10);
        assert_eq!(numbered_window(10, 8, 5), 5..10);
        assert_eq!(numbered_window(4, 2, 0), 0..4);
        assert_eq!(numbered_window(4, 2, 9), 0..4);
    }

    #[test]
    fn current_page_link_has_no_aria_label() {
        let plan = plan(3, Some("1"), &PagerConfig::default()).unwrap();

        for link in &plan.links {
            match link.kind {
                LinkKind::Page => assert!(link.accessibility_label.is_none()),
                _ => assert!(link.accessibility_label.is_some()),
            }
        }
    }
}
