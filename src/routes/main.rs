use actix_web::{Responder, get, web};
use serde::Serialize;
use tera::{Context, Tera};

use crate::component::notification::DISMISS_AFTER;
use crate::domain::lead::LeadField;
use crate::routes::render_template;

#[derive(Serialize)]
struct FieldView {
    name: &'static str,
    label: &'static str,
    input_type: &'static str,
}

#[get("/")]
/// Render the lead entry form.
pub async fn show_index(tera: web::Data<Tera>) -> impl Responder {
    let fields = LeadField::ALL
        .iter()
        .map(|field| FieldView {
            name: field.key(),
            label: field.label(),
            input_type: field.input_type(),
        })
        .collect::<Vec<_>>();

    let mut context = Context::new();
    context.insert("fields", &fields);
    context.insert("dismiss_after_ms", &(DISMISS_AFTER.as_millis() as u64));

    render_template(&tera, "index.html", &context)
}
