use actix_web::http::header;
use actix_web::{web, HttpResponse, Responder};
use uuid::Uuid;

use crate::indictment::model::{Indictment, StoredIndictment};
use crate::indictment::store::StoreError;
use crate::render::{self, ExportFormat};
use crate::{AppState, ErrorResponse};

fn store_error_response(e: StoreError) -> HttpResponse {
    match &e {
        StoreError::NotFound(_) => {
            HttpResponse::NotFound().json(ErrorResponse::not_found(&e.to_string()))
        }
        _ => {
            log::error!("Indictment store failure: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse::internal_error(&e.to_string()))
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/indictments",
    tag = "Indictments",
    responses(
        (status = 200, description = "Saved indictments, newest first", body = Vec<StoredIndictment>),
        (status = 500, description = "Row store failure", body = ErrorResponse)
    )
)]
pub async fn list_indictments(state: web::Data<AppState>) -> impl Responder {
    match state.store.list().await {
        Ok(rows) => {
            log::debug!("Listed {} indictments", rows.len());
            HttpResponse::Ok().json(rows)
        }
        Err(e) => store_error_response(e),
    }
}

#[utoipa::path(
    post,
    path = "/api/indictments",
    tag = "Indictments",
    request_body = Indictment,
    responses(
        (status = 201, description = "Indictment saved", body = StoredIndictment),
        (status = 400, description = "Malformed record", body = ErrorResponse),
        (status = 500, description = "Row store failure", body = ErrorResponse)
    )
)]
pub async fn create_indictment(
    state: web::Data<AppState>,
    item: web::Json<Indictment>,
) -> impl Responder {
    match state.store.insert(&item).await {
        Ok(row) => {
            log::info!("Indictment {} saved: {}", row.id, row.indictment.title());
            HttpResponse::Created().json(row)
        }
        Err(e) => store_error_response(e),
    }
}

#[utoipa::path(
    put,
    path = "/api/indictments/{id}",
    tag = "Indictments",
    params(
        ("id" = Uuid, Path, description = "Indictment ID")
    ),
    request_body = Indictment,
    responses(
        (status = 200, description = "Indictment updated", body = StoredIndictment),
        (status = 400, description = "Malformed record or id", body = ErrorResponse),
        (status = 404, description = "Indictment not found", body = ErrorResponse)
    )
)]
pub async fn update_indictment(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    item: web::Json<Indictment>,
) -> impl Responder {
    let id = path.into_inner();
    match state.store.update(id, &item).await {
        Ok(row) => {
            log::info!("Indictment {} updated", id);
            HttpResponse::Ok().json(row)
        }
        Err(e) => store_error_response(e),
    }
}

#[utoipa::path(
    delete,
    path = "/api/indictments/{id}",
    tag = "Indictments",
    params(
        ("id" = Uuid, Path, description = "Indictment ID")
    ),
    responses(
        (status = 204, description = "Indictment deleted"),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "Indictment not found", body = ErrorResponse)
    )
)]
pub async fn delete_indictment(state: web::Data<AppState>, path: web::Path<Uuid>) -> impl Responder {
    let id = path.into_inner();
    match state.store.delete(id).await {
        Ok(()) => {
            log::info!("Indictment {} deleted", id);
            HttpResponse::NoContent().finish()
        }
        Err(e) => store_error_response(e),
    }
}

#[utoipa::path(
    post,
    path = "/api/indictments/export/{format}",
    tag = "Indictments",
    params(
        ("format" = String, Path, description = "Output format: `txt` or `docx`")
    ),
    request_body = Indictment,
    responses(
        (status = 200, description = "Rendered document as an attachment"),
        (status = 400, description = "Malformed record or unknown format", body = ErrorResponse),
        (status = 500, description = "Packaging failure", body = ErrorResponse)
    )
)]
pub async fn export_indictment(
    path: web::Path<String>,
    item: web::Json<Indictment>,
) -> impl Responder {
    let requested = path.into_inner();
    let Some(format) = ExportFormat::from_extension(&requested) else {
        return HttpResponse::BadRequest().json(ErrorResponse::bad_request(&format!(
            "Unsupported export format '{}', expected 'txt' or 'docx'",
            requested
        )));
    };

    match render::export(&item, format).await {
        Ok(document) => {
            log::info!(
                "Exported {} ({} bytes)",
                document.filename,
                document.bytes.len()
            );
            HttpResponse::Ok()
                .content_type(document.media_type)
                .insert_header((
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", document.filename),
                ))
                .body(document.bytes)
        }
        Err(e) => {
            log::error!("Failed to render indictment document: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse::internal_error(&e.to_string()))
        }
    }
}

fn json_error_handler(
    err: actix_web::error::JsonPayloadError,
    _req: &actix_web::HttpRequest,
) -> actix_web::Error {
    let response = HttpResponse::BadRequest().json(ErrorResponse::bad_request(&err.to_string()));
    actix_web::error::InternalError::from_response(err, response).into()
}

fn path_error_handler(
    err: actix_web::error::PathError,
    _req: &actix_web::HttpRequest,
) -> actix_web::Error {
    let response = HttpResponse::BadRequest().json(ErrorResponse::bad_request(&format!(
        "Invalid path parameter: {}",
        err
    )));
    actix_web::error::InternalError::from_response(err, response).into()
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .service(
            web::resource("/indictments")
                .route(web::get().to(list_indictments))
                .route(web::post().to(create_indictment)),
        )
        .service(
            web::resource("/indictments/export/{format}")
                .route(web::post().to(export_indictment)),
        )
        .service(
            web::resource("/indictments/{id}")
                .route(web::put().to(update_indictment))
                .route(web::delete().to(delete_indictment)),
        );
}
