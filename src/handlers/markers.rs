// src/handlers/markers.rs
// DOCUMENTATION: HTTP handlers for marker operations
// PURPOSE: Fetch, create, replace and delete single markers

use crate::db::MarkerStore;
use crate::errors::AlbumError;
use crate::handlers::json_body;
use crate::models::fields::parse_id;
use crate::models::MarkerPayload;
use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

/// GET /markers/{idMarker}
pub async fn get_marker(
    store: web::Data<dyn MarkerStore>,
    path: web::Path<String>,
) -> Result<impl Responder, AlbumError> {
    let id_marker = parse_id(&path)?;
    let marker = store.get(id_marker).await?;
    Ok(HttpResponse::Ok().json(json!({ "success": true, "result": marker })))
}

/// POST /markers
pub async fn create_marker(
    store: web::Data<dyn MarkerStore>,
    body: web::Bytes,
) -> Result<impl Responder, AlbumError> {
    let req: MarkerPayload = json_body(&body)?;
    let marker = req.validate()?;
    let id_marker = store.create(&marker).await?;
    Ok(HttpResponse::Created().json(json!({ "success": true, "idMarker": id_marker })))
}

/// PUT /markers/{idMarker}
pub async fn update_marker(
    store: web::Data<dyn MarkerStore>,
    path: web::Path<String>,
    body: web::Bytes,
) -> Result<impl Responder, AlbumError> {
    let id_marker = parse_id(&path)?;
    let req: MarkerPayload = json_body(&body)?;
    let marker = req.validate()?;
    store.replace(id_marker, &marker).await?;
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Marker updated successfully"
    })))
}

/// DELETE /markers/{idMarker}
pub async fn delete_marker(
    store: web::Data<dyn MarkerStore>,
    path: web::Path<String>,
) -> Result<impl Responder, AlbumError> {
    let id_marker = parse_id(&path)?;
    store.delete(id_marker).await?;
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Marker deleted successfully"
    })))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/markers")
            .route("", web::post().to(create_marker))
            .route("/{idMarker}", web::get().to(get_marker))
            .route("/{idMarker}", web::put().to(update_marker))
            .route("/{idMarker}", web::delete().to(delete_marker)),
    );
}
