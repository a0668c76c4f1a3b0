use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{HttpResponse, Responder, delete, get, post, web};

use crate::domain::lead::{Lead, NewLead};
use crate::dto::api::{
    DELETE_ERROR, DELETED, EXPORT_ERROR, FETCH_ERROR, MessageResponse, SAVE_ERROR,
};
use crate::export::{EXPORT_FILE_NAME, XLSX_CONTENT_TYPE};
use crate::repository::RecordStore;
use crate::routes::internal_error;
use crate::services::leads as leads_service;

#[post("/leads")]
/// Create a lead from a JSON payload with the five business fields.
pub async fn create_lead(store: web::Data<dyn RecordStore>, body: web::Bytes) -> impl Responder {
    // A body that does not parse is reported like any other save failure.
    let new_lead = match serde_json::from_slice::<NewLead>(&body) {
        Ok(new_lead) => new_lead,
        Err(err) => {
            log::error!("Error saving lead: {err}");
            return internal_error(SAVE_ERROR);
        }
    };

    match leads_service::create_lead(store.get_ref(), &new_lead) {
        Ok(lead) => HttpResponse::Created().json(lead),
        Err(_) => internal_error(SAVE_ERROR),
    }
}

#[get("/leads")]
/// List every lead, newest first.
pub async fn list_leads(store: web::Data<dyn RecordStore>) -> impl Responder {
    match leads_service::list_leads(store.get_ref()) {
        Ok(leads) => HttpResponse::Ok().json(leads),
        Err(_) => internal_error(FETCH_ERROR),
    }
}

#[delete("/leads")]
/// Delete every lead.
pub async fn delete_leads(store: web::Data<dyn RecordStore>) -> impl Responder {
    match leads_service::clear_leads(store.get_ref()) {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new(DELETED)),
        Err(_) => internal_error(DELETE_ERROR),
    }
}

#[post("/leads/export")]
/// Build `leads.xlsx` from the snapshot posted by the caller.
pub async fn export_leads(body: web::Bytes) -> impl Responder {
    let leads = match serde_json::from_slice::<Vec<Lead>>(&body) {
        Ok(leads) => leads,
        Err(err) => {
            log::error!("Error exporting leads: {err}");
            return internal_error(EXPORT_ERROR);
        }
    };

    match leads_service::export_leads(&leads) {
        Ok(bytes) => HttpResponse::Ok()
            .content_type(XLSX_CONTENT_TYPE)
            .insert_header(ContentDisposition {
                disposition: DispositionType::Attachment,
                parameters: vec![DispositionParam::Filename(EXPORT_FILE_NAME.to_string())],
            })
            .body(bytes),
        Err(_) => internal_error(EXPORT_ERROR),
    }
}
