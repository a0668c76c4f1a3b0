//! HTTP handlers for the lead API and the form page.

use actix_web::{HttpResponse, web};
use tera::{Context, Tera};

use crate::dto::api::MessageResponse;

pub mod api;
pub mod main;

/// Largest request body the API accepts. The export endpoint receives the
/// caller's whole cached list in one request.
pub const API_PAYLOAD_LIMIT: usize = 64 * 1024 * 1024;

/// Registers the `/api` scope and the index page.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(web::PayloadConfig::new(API_PAYLOAD_LIMIT))
            .service(api::create_lead)
            .service(api::list_leads)
            .service(api::delete_leads)
            .service(api::export_leads),
    )
    .service(main::show_index);
}

/// `500` with a fixed, user-safe message body.
pub fn internal_error(message: &str) -> HttpResponse {
    HttpResponse::InternalServerError().json(MessageResponse::new(message))
}

pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => {
            log::error!("Failed to render template '{template}': {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
