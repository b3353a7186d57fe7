//! Easy-read field formatters.
//!
//! Every formatter shares [`crate::pagination::plan`]; they differ only in
//! how the items are counted and how the selected one is rendered.

use crate::domain::entity::Entity;
use crate::domain::field::{Field, FormatterKind, FormatterSettings, TextFormat, TextItem};
use crate::domain::pager::{NotFoundPolicy, PagerConfig};
use crate::domain::types::ViewMode;
use crate::dto::field::{NavLinkView, PagedFieldView, SelectedContent};
use crate::pagination::{self, LinkLabel, NavLink, PagePlan};
use crate::recursion::{RecursionPolicy, RenderContext};
use crate::repository::EntityReader;
use crate::request::PageRequest;
use crate::services::{ServiceError, ServiceResult};
use crate::translation::Translator;

/// Renders a single entity in a view mode.
///
/// Implementations that render fields call back into [`view_field`] with the
/// context they were given, which is how nesting depth accumulates.
pub trait EntityViewer {
    fn view_entity(
        &self,
        entity: &Entity,
        view_mode: &ViewMode,
        context: RenderContext,
    ) -> ServiceResult<String>;
}

/// Request-scoped collaborators of a field render.
#[derive(Clone, Copy)]
pub struct FormatterEnv<'a> {
    pub request: &'a dyn PageRequest,
    pub translator: &'a dyn Translator,
    pub context: RenderContext,
}

impl<'a> FormatterEnv<'a> {
    pub fn new(
        request: &'a dyn PageRequest,
        translator: &'a dyn Translator,
        context: RenderContext,
    ) -> Self {
        Self {
            request,
            translator,
            context,
        }
    }
}

/// Renders `field` with the formatter named in `settings`.
pub fn view_field<R, V>(
    repo: &R,
    viewer: &V,
    field: &Field,
    settings: &FormatterSettings,
    env: FormatterEnv<'_>,
) -> ServiceResult<PagedFieldView>
where
    R: EntityReader + ?Sized,
    V: EntityViewer + ?Sized,
{
    match settings.formatter {
        FormatterKind::TextEasyReadPager => view_text_field(field, settings, env),
        FormatterKind::EntityReferenceEasyReadPager => {
            view_entity_reference_field(repo, viewer, field, settings, env)
        }
        FormatterKind::EntityReferenceRevisionsEasyReadPager => {
            view_entity_reference_revisions_field(repo, viewer, field, settings, env)
        }
    }
}

/// Paginates the items of a text field, one processed item per page.
pub fn view_text_field(
    field: &Field,
    settings: &FormatterSettings,
    env: FormatterEnv<'_>,
) -> ServiceResult<PagedFieldView> {
    let config = settings.pager_config()?;
    let pages = text_pages(field, settings.split_paragraphs);

    let Some(plan) = plan_field(pages.len(), &config, &env)? else {
        return Ok(empty_view(field, settings.formatter, config, pages.len()));
    };

    let selected = plan
        .resolved_index
        .and_then(|index| pages.get(index).map(|item| (index, item)))
        .map(|(index, item)| SelectedContent {
            index,
            markup: process_text(item),
            resource: None,
        });

    Ok(assemble(field, settings.formatter, config, plan, selected, &env))
}

/// Paginates referenced entities, rendering the current one.
pub fn view_entity_reference_field<R, V>(
    repo: &R,
    viewer: &V,
    field: &Field,
    settings: &FormatterSettings,
    env: FormatterEnv<'_>,
) -> ServiceResult<PagedFieldView>
where
    R: EntityReader + ?Sized,
    V: EntityViewer + ?Sized,
{
    let mut entities = Vec::new();
    for reference in field.reference_items() {
        match repo.load_entity(reference.target_id)? {
            Some(entity) => entities.push(entity),
            None => log::debug!(
                "Skipping missing entity {} referenced by {}",
                reference.target_id,
                field.name
            ),
        }
    }

    view_referenced_entities(viewer, field, settings, &entities, env)
}

/// Like [`view_entity_reference_field`] but loads the pinned revisions.
pub fn view_entity_reference_revisions_field<R, V>(
    repo: &R,
    viewer: &V,
    field: &Field,
    settings: &FormatterSettings,
    env: FormatterEnv<'_>,
) -> ServiceResult<PagedFieldView>
where
    R: EntityReader + ?Sized,
    V: EntityViewer + ?Sized,
{
    let mut entities = Vec::new();
    for reference in field.reference_items() {
        let loaded = match reference.target_revision_id {
            Some(revision_id) => repo.load_revision(reference.target_id, revision_id)?,
            None => repo.load_entity(reference.target_id)?,
        };
        match loaded {
            Some(entity) => entities.push(entity),
            None => log::debug!(
                "Skipping missing revision of entity {} referenced by {}",
                reference.target_id,
                field.name
            ),
        }
    }

    view_referenced_entities(viewer, field, settings, &entities, env)
}

fn view_referenced_entities<V>(
    viewer: &V,
    field: &Field,
    settings: &FormatterSettings,
    entities: &[Entity],
    env: FormatterEnv<'_>,
) -> ServiceResult<PagedFieldView>
where
    V: EntityViewer + ?Sized,
{
    let config = settings.pager_config()?;

    let Some(plan) = plan_field(entities.len(), &config, &env)? else {
        return Ok(empty_view(field, settings.formatter, config, entities.len()));
    };

    let Some((index, entity)) = plan
        .resolved_index
        .and_then(|index| entities.get(index).map(|entity| (index, entity)))
    else {
        return Ok(assemble(field, settings.formatter, config, plan, None, &env));
    };

    let nested = match env.context.nested() {
        Ok(nested) => nested,
        Err(err) => match env.context.policy() {
            RecursionPolicy::Fail => return Err(err.into()),
            RecursionPolicy::Degrade => {
                log::warn!(
                    "Recursive rendering detected for entity {} {}. Rendering aborted.",
                    entity.entity_type,
                    entity.id
                );
                return Ok(assemble(field, settings.formatter, config, plan, None, &env));
            }
        },
    };

    // A strict limit aborts only the branch below this field.
    let markup = match viewer.view_entity(entity, &settings.view_mode(), nested) {
        Ok(markup) => markup,
        Err(ServiceError::RecursionLimitExceeded(err)) => {
            log::error!(
                "Rendering of entity {} {} aborted: {err}",
                entity.entity_type,
                entity.id
            );
            let mut view = assemble(field, settings.formatter, config, plan, None, &env);
            view.error = Some(
                env.translator
                    .translate("Recursive rendering detected. Rendering aborted."),
            );
            return Ok(view);
        }
        Err(err) => return Err(err),
    };
    let selected = SelectedContent {
        index,
        markup,
        resource: entity.resource_url().map(str::to_string),
    };

    Ok(assemble(
        field,
        settings.formatter,
        config,
        plan,
        Some(selected),
        &env,
    ))
}

/// Plans the field, applying the configured not-found policy.
fn plan_field(
    total_items: usize,
    config: &PagerConfig,
    env: &FormatterEnv<'_>,
) -> ServiceResult<Option<PagePlan>> {
    let raw_index = env
        .request
        .query_param(config.index_parameter_name.as_str());

    match pagination::plan(total_items, raw_index, config) {
        Ok(plan) => Ok(Some(plan)),
        Err(err) => match config.not_found_policy {
            NotFoundPolicy::Fail => Err(ServiceError::from(err)),
            NotFoundPolicy::Empty => {
                log::debug!("Rendering empty field: {err}");
                Ok(None)
            }
        },
    }
}

fn link_view(link: &NavLink, config: &PagerConfig, env: &FormatterEnv<'_>) -> NavLinkView {
    let text = match link.label {
        LinkLabel::Text(text) => env.translator.translate(text),
        LinkLabel::Number(number) => number.to_string(),
    };

    NavLinkView {
        kind: link.kind,
        text,
        href: env
            .request
            .url_with_param(config.index_parameter_name.as_str(), link.target_index),
        target_index: link.target_index,
        is_current: link.is_current,
        aria_label: link
            .accessibility_label
            .map(|label| env.translator.translate(label)),
        aria_current: link.is_current.then_some("page"),
        classes: if link.is_current {
            vec!["active"]
        } else {
            Vec::new()
        },
    }
}

fn assemble(
    field: &Field,
    formatter: FormatterKind,
    config: PagerConfig,
    plan: PagePlan,
    selected: Option<SelectedContent>,
    env: &FormatterEnv<'_>,
) -> PagedFieldView {
    let navigation_links = plan
        .links
        .iter()
        .map(|link| link_view(link, &config, env))
        .collect();

    let summary = match plan.resolved_index {
        Some(index) if config.show_page_summary && plan.is_paginated() => {
            let current = (index + 1).to_string();
            let total = plan.total_items.to_string();
            Some(env.translator.format(
                "Page @current of @total",
                &[("@current", current.as_str()), ("@total", total.as_str())],
            ))
        }
        _ => None,
    };

    PagedFieldView {
        field_name: field.name.clone(),
        label: field.label.clone(),
        formatter,
        resolved_index: plan.resolved_index,
        total_items: plan.total_items,
        navigation_links,
        config,
        selected_content: selected,
        summary,
        error: None,
    }
}

fn empty_view(
    field: &Field,
    formatter: FormatterKind,
    config: PagerConfig,
    total_items: usize,
) -> PagedFieldView {
    PagedFieldView {
        field_name: field.name.clone(),
        label: field.label.clone(),
        formatter,
        resolved_index: None,
        total_items,
        navigation_links: Vec::new(),
        config,
        selected_content: None,
        summary: None,
        error: None,
    }
}

/// Pages of a text field: its items, or their paragraphs when splitting.
fn text_pages(field: &Field, split: bool) -> Vec<TextItem> {
    if !split {
        return field.text_items().cloned().collect();
    }

    field
        .text_items()
        .flat_map(|item| {
            split_paragraphs(&item.value)
                .into_iter()
                .map(|value| TextItem {
                    value,
                    format: item.format,
                })
        })
        .collect()
}

/// Splits on blank lines, dropping empty paragraphs.
fn split_paragraphs(text: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                paragraphs.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        paragraphs.push(current.join("\n"));
    }

    paragraphs
}

/// Renders a text item according to its format.
pub fn process_text(item: &TextItem) -> String {
    match item.format {
        TextFormat::PlainText => item
            .value
            .lines()
            .map(ammonia::clean_text)
            .collect::<Vec<_>>()
            .join("<br>\n"),
        TextFormat::BasicHtml => ammonia::clean(&item.value),
        TextFormat::FullHtml => item.value.clone(),
    }
}
