//! Easy-read pagination for multi-item fields.
//!
//! The `data` feature exposes the pager planner, the field formatters and the
//! in-memory content repository. The `server` feature adds an Actix-web host
//! that renders content pages and the field settings forms.

#[cfg(feature = "server")]
use actix_files::Files;
#[cfg(feature = "server")]
use actix_web::cookie::Key;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};
#[cfg(feature = "server")]
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
#[cfg(feature = "server")]
use tera::Tera;

#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::models::content::ContentLibrary;
#[cfg(feature = "server")]
use crate::repository::InMemoryRepository;
#[cfg(feature = "server")]
use crate::routes::content::show_node;
#[cfg(feature = "server")]
use crate::routes::main::show_index;
#[cfg(feature = "server")]
use crate::routes::settings::{save_field_settings, show_field_settings};

pub mod domain;
pub mod dto;
pub mod error_conversions;
pub mod forms;
pub mod models;
pub mod pagination;
pub mod recursion;
pub mod repository;
pub mod request;
#[cfg(feature = "server")]
pub mod routes;
pub mod services;
pub mod translation;

/// Shortest secret accepted for signing flash message cookies.
#[cfg(feature = "server")]
pub const MIN_SECRET_LEN: usize = 64;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let library = ContentLibrary::load(&server_config.content_file).map_err(|e| {
        std::io::Error::other(format!(
            "Failed to load content from {}: {e}",
            server_config.content_file
        ))
    })?;

    let catalog = library.catalog(&server_config.locale);
    let repo = web::Data::new(InMemoryRepository::new(library));

    if server_config.secret.len() < MIN_SECRET_LEN {
        return Err(std::io::Error::other(format!(
            "Secret must be at least {MIN_SECRET_LEN} bytes long"
        )));
    }
    let secret_key = Key::from(server_config.secret.as_bytes());

    let message_store = CookieMessageStore::builder(secret_key).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);

    log::info!(
        "Serving content from {} on {}:{}",
        server_config.content_file,
        server_config.address,
        server_config.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(message_framework.clone())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", "./assets"))
            .service(show_index)
            .service(show_node)
            .service(show_field_settings)
            .service(save_field_settings)
            .app_data(web::Data::new(tera.clone()))
            .app_data(repo.clone())
            .app_data(web::Data::new(catalog.clone()))
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
