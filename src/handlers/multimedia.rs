// src/handlers/multimedia.rs
// DOCUMENTATION: HTTP handlers for multimedia operations
// PURPOSE: List, fetch, create, partially update and delete attachments

use crate::db::MultimediaStore;
use crate::errors::AlbumError;
use crate::handlers::json_body;
use crate::models::fields::parse_id;
use crate::models::{ListQuery, ListResponse, MultimediaPayload};
use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

/// GET /multimedia
pub async fn list_multimedia(
    store: web::Data<dyn MultimediaStore>,
    query: web::Query<ListQuery>,
) -> Result<impl Responder, AlbumError> {
    let pagination = query.pagination();
    let total = store.count().await?;
    let results = store.list(pagination).await?;
    Ok(HttpResponse::Ok().json(ListResponse::new(total, pagination, results)))
}

/// GET /multimedia/{idMultimedia}
pub async fn get_multimedia(
    store: web::Data<dyn MultimediaStore>,
    path: web::Path<String>,
) -> Result<impl Responder, AlbumError> {
    let id_multimedia = parse_id(&path)?;
    let entry = store.get(id_multimedia).await?;
    Ok(HttpResponse::Ok().json(json!({ "success": true, "result": entry })))
}

/// POST /multimedia
pub async fn create_multimedia(
    store: web::Data<dyn MultimediaStore>,
    body: web::Bytes,
) -> Result<impl Responder, AlbumError> {
    let req: MultimediaPayload = json_body(&body)?;
    let entry = req.validate()?;
    let id_multimedia = store.create(&entry).await?;
    Ok(HttpResponse::Created().json(json!({ "success": true, "idMultimedia": id_multimedia })))
}

/// PUT /multimedia/{idMultimedia}
/// Partial update: omitted fields keep their stored value
pub async fn update_multimedia(
    store: web::Data<dyn MultimediaStore>,
    path: web::Path<String>,
    body: web::Bytes,
) -> Result<impl Responder, AlbumError> {
    let id_multimedia = parse_id(&path)?;
    let req: MultimediaPayload = json_body(&body)?;
    let changes = req.validate_changes()?;
    store.update(id_multimedia, &changes).await?;
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Multimedia entry updated successfully"
    })))
}

/// DELETE /multimedia/{idMultimedia}
pub async fn delete_multimedia(
    store: web::Data<dyn MultimediaStore>,
    path: web::Path<String>,
) -> Result<impl Responder, AlbumError> {
    let id_multimedia = parse_id(&path)?;
    store.delete(id_multimedia).await?;
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Multimedia entry deleted successfully"
    })))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/multimedia")
            .route("", web::get().to(list_multimedia))
            .route("", web::post().to(create_multimedia))
            .route("/{idMultimedia}", web::get().to(get_multimedia))
            .route("/{idMultimedia}", web::put().to(update_multimedia))
            .route("/{idMultimedia}", web::delete().to(delete_multimedia)),
    );
}
