//! Rendered content pages.

use actix_web::{HttpRequest, HttpResponse, Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::{Context, Tera};

use crate::domain::entity::Entity;
use crate::domain::types::{EntityId, ViewMode};
use crate::models::config::ServerConfig;
use crate::recursion::RenderContext;
use crate::repository::InMemoryRepository;
use crate::request::CurrentRequest;
use crate::routes::{base_context, render_template};
use crate::services::formatter::{EntityViewer, FormatterEnv};
use crate::services::render as render_service;
use crate::services::{ServiceError, ServiceResult};
use crate::translation::Catalog;

/// Renders entities through the `entity/view.html` template.
///
/// Referenced entities come back through [`EntityViewer::view_entity`], so
/// nested output is produced by the same template.
pub struct TemplateEntityViewer<'a> {
    pub tera: &'a Tera,
    pub repo: &'a InMemoryRepository,
    pub request: &'a CurrentRequest,
    pub translator: &'a Catalog,
}

impl EntityViewer for TemplateEntityViewer<'_> {
    fn view_entity(
        &self,
        entity: &Entity,
        view_mode: &ViewMode,
        context: RenderContext,
    ) -> ServiceResult<String> {
        let env = FormatterEnv::new(self.request, self.translator, context);
        let view = render_service::render_entity(self.repo, self, entity, view_mode, env)?;

        let mut template_context = Context::new();
        template_context.insert("entity", &view);
        self.tera
            .render("entity/view.html", &template_context)
            .map_err(|err| ServiceError::Render(err.to_string()))
    }
}

#[get("/node/{id}")]
/// Shows one entity with its easy-read fields paginated from the query string.
pub async fn show_node(
    id: web::Path<i32>,
    req: HttpRequest,
    repo: web::Data<InMemoryRepository>,
    catalog: web::Data<Catalog>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let Ok(id) = EntityId::new(id.into_inner()) else {
        return HttpResponse::NotFound().finish();
    };

    let request = CurrentRequest::parse(req.path(), req.query_string());
    let viewer = TemplateEntityViewer {
        tera: tera.get_ref(),
        repo: repo.get_ref(),
        request: &request,
        translator: catalog.get_ref(),
    };

    match render_service::render_entity_page(
        repo.get_ref(),
        &viewer,
        id,
        &ViewMode::full(),
        RenderContext::top_level(server_config.recursion_policy),
    ) {
        Ok(page) => {
            let mut context = base_context(&flash_messages, "node");
            context.insert("page", &page);
            render_template(&tera, "node/index.html", &context)
        }
        Err(ServiceError::NotFound) | Err(ServiceError::IndexOutOfRange(_)) => {
            HttpResponse::NotFound().finish()
        }
        Err(err) => {
            log::error!("Failed to render node {id}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
