//! Entity rendering: applies the configured formatter to every field.

use crate::domain::entity::Entity;
use crate::domain::field::{Field, FieldItem};
use crate::domain::types::{EntityId, ViewMode};
use crate::dto::entity::{EntityPageData, EntityView, FieldView};
use crate::recursion::RenderContext;
use crate::repository::{EntityReader, FieldSettingsReader};
use crate::services::formatter::{self, EntityViewer, FormatterEnv};
use crate::services::{ServiceError, ServiceResult};

/// Builds the view of `entity`, paginating fields with an easy-read formatter.
pub fn render_entity<R, V>(
    repo: &R,
    viewer: &V,
    entity: &Entity,
    view_mode: &ViewMode,
    env: FormatterEnv<'_>,
) -> ServiceResult<EntityView>
where
    R: EntityReader + FieldSettingsReader + ?Sized,
    V: EntityViewer + ?Sized,
{
    let mut fields = Vec::with_capacity(entity.fields.len());

    for field in &entity.fields {
        let key = entity.field_key(field);
        let view = match repo.get_field_settings(&key)? {
            Some(settings) if settings.formatter.applies_to(field.field_type) => {
                FieldView::Paged(formatter::view_field(repo, viewer, field, &settings, env)?)
            }
            Some(settings) => {
                log::warn!(
                    "Formatter {} cannot display field {key}, falling back to plain output",
                    settings.formatter.id()
                );
                plain_field(repo, field)?
            }
            None => plain_field(repo, field)?,
        };
        fields.push(view);
    }

    Ok(EntityView {
        id: entity.id.get(),
        entity_type: entity.entity_type.clone(),
        bundle: entity.bundle.clone(),
        label: entity.label.clone(),
        langcode: entity.langcode.clone(),
        view_mode: view_mode.to_string(),
        fields,
    })
}

/// Every item of a field without pagination; references show their label.
fn plain_field<R>(repo: &R, field: &Field) -> ServiceResult<FieldView>
where
    R: EntityReader + ?Sized,
{
    let mut items = Vec::with_capacity(field.items.len());
    for item in &field.items {
        match item {
            FieldItem::Text(text) => items.push(formatter::process_text(text)),
            FieldItem::Reference(reference) => {
                if let Some(target) = repo.load_entity(reference.target_id)? {
                    items.push(ammonia::clean_text(&target.label));
                }
            }
        }
    }

    Ok(FieldView::Plain {
        name: field.name.clone(),
        label: field.label.clone(),
        items,
    })
}

/// Loads an entity and renders it as a top-level page.
pub fn render_entity_page<R, V>(
    repo: &R,
    viewer: &V,
    id: EntityId,
    view_mode: &ViewMode,
    context: RenderContext,
) -> ServiceResult<EntityPageData>
where
    R: EntityReader + ?Sized,
    V: EntityViewer + ?Sized,
{
    let entity = repo.load_entity(id)?.ok_or(ServiceError::NotFound)?;

    let markup = viewer
        .view_entity(&entity, view_mode, context)
        .map_err(|err| {
            log::error!("Failed to render entity {id}: {err}");
            err
        })?;

    Ok(EntityPageData {
        id: entity.id.get(),
        label: entity.label,
        markup,
    })
}
