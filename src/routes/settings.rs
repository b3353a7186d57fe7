//! Routes editing the formatter settings of a field instance.

use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::domain::field::FieldKey;
use crate::forms::settings::PagerSettingsForm;
use crate::repository::InMemoryRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::{ServiceError, settings as settings_service};
use crate::translation::Catalog;

#[get("/fields/{entity_type}/{bundle}/{field_name}/settings")]
/// Show the settings form of one field instance.
pub async fn show_field_settings(
    path: web::Path<(String, String, String)>,
    repo: web::Data<InMemoryRepository>,
    catalog: web::Data<Catalog>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let (entity_type, bundle, field_name) = path.into_inner();
    let key = FieldKey::new(entity_type, bundle, field_name);

    match settings_service::load_field_settings(repo.get_ref(), &key, catalog.get_ref()) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "settings");
            context.insert("settings", &data);
            render_template(&tera, "settings/field.html", &context)
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error(format!("Field {key} has no easy-read formatter.")).send();
            redirect("/")
        }
        Err(err) => {
            log::error!("Failed to load settings of {key}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/fields/{entity_type}/{bundle}/{field_name}/settings")]
/// Save the posted settings of one field instance.
pub async fn save_field_settings(
    path: web::Path<(String, String, String)>,
    repo: web::Data<InMemoryRepository>,
    body: web::Bytes,
) -> impl Responder {
    let (entity_type, bundle, field_name) = path.into_inner();
    let key = FieldKey::new(entity_type, bundle, field_name);
    let settings_path = key.settings_path();

    let form: PagerSettingsForm = match serde_html_form::from_bytes(&body) {
        Ok(form) => form,
        Err(err) => {
            log::warn!("Malformed settings form for {key}: {err}");
            FlashMessage::error("Invalid form data.").send();
            return redirect(&settings_path);
        }
    };

    match settings_service::save_field_settings(repo.get_ref(), &key, form) {
        Ok(()) => {
            FlashMessage::success("Settings saved.").send();
            redirect(&settings_path)
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error(format!("Field {key} has no easy-read formatter.")).send();
            redirect("/")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect(&settings_path)
        }
        Err(err) => {
            log::error!("Failed to save settings of {key}: {err}");
            FlashMessage::error("Failed to save settings.").send();
            redirect(&settings_path)
        }
    }
}
