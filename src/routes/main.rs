use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::repository::InMemoryRepository;
use crate::routes::{base_context, render_template};
use crate::services::main as main_service;
use crate::translation::Catalog;

#[get("/")]
/// Lists the content and the fields that carry an easy-read formatter.
pub async fn show_index(
    repo: web::Data<InMemoryRepository>,
    catalog: web::Data<Catalog>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match main_service::load_index_page(repo.get_ref(), catalog.get_ref()) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "index");
            context.insert("entities", &data.entities);
            context.insert("fields", &data.fields);
            render_template(&tera, "main/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to load index page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
