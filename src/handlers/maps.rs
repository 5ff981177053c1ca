// src/handlers/maps.rs
// DOCUMENTATION: HTTP handlers for map operations
// PURPOSE: Parse requests, validate, call the map store, shape the JSON envelope

use crate::db::MapStore;
use crate::errors::AlbumError;
use crate::handlers::json_body;
use crate::models::fields::parse_id;
use crate::models::{ListQuery, ListResponse, MapPayload};
use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

/// GET /maps
/// Paginated list of every map
pub async fn list_maps(
    store: web::Data<dyn MapStore>,
    query: web::Query<ListQuery>,
) -> Result<impl Responder, AlbumError> {
    let pagination = query.pagination();
    let total = store.count().await?;
    let results = store.list(pagination).await?;
    Ok(HttpResponse::Ok().json(ListResponse::new(total, pagination, results)))
}

/// GET /maps/{idMap}
pub async fn get_map(
    store: web::Data<dyn MapStore>,
    path: web::Path<String>,
) -> Result<impl Responder, AlbumError> {
    let id_map = parse_id(&path)?;
    let map = store.get(id_map).await?;
    Ok(HttpResponse::Ok().json(json!({ "success": true, "result": map })))
}

/// POST /maps
pub async fn create_map(
    store: web::Data<dyn MapStore>,
    body: web::Bytes,
) -> Result<impl Responder, AlbumError> {
    let req: MapPayload = json_body(&body)?;
    let map = req.validate()?;
    let id_map = store.create(&map).await?;
    Ok(HttpResponse::Created().json(json!({ "success": true, "idMap": id_map })))
}

/// PUT /maps/{idMap}
/// Wholesale replacement, every field is required
pub async fn update_map(
    store: web::Data<dyn MapStore>,
    path: web::Path<String>,
    body: web::Bytes,
) -> Result<impl Responder, AlbumError> {
    let id_map = parse_id(&path)?;
    let req: MapPayload = json_body(&body)?;
    let map = req.validate()?;
    store.replace(id_map, &map).await?;
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Map updated successfully"
    })))
}

/// DELETE /maps/{idMap}
pub async fn delete_map(
    store: web::Data<dyn MapStore>,
    path: web::Path<String>,
) -> Result<impl Responder, AlbumError> {
    let id_map = parse_id(&path)?;
    store.delete(id_map).await?;
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Map deleted successfully"
    })))
}

/// Configuration for map routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/maps")
            .route("", web::get().to(list_maps))
            .route("", web::post().to(create_map))
            .route("/{idMap}", web::get().to(get_map))
            .route("/{idMap}", web::put().to(update_map))
            .route("/{idMap}", web::delete().to(delete_map)),
    );
}

#[cfg(test)]
mod tests {
    use crate::db::Stores;
    use actix_web::{http::StatusCode, test};
    use serde_json::{json, Value};

    fn trip() -> Value {
        json!({
            "name": "Weekend in Zaragoza",
            "description": "Tapas and towers",
            "privacy": "private",
            "idUser": 7
        })
    }

    #[actix_web::test]
    async fn test_create_then_get_round_trip() {
        let stores = Stores::memory();
        let app = init_app!(stores);

        let req = test::TestRequest::post().uri("/maps").set_json(trip()).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        let id = body["idMap"].as_i64().unwrap();
        assert!(id >= 1);

        let req = test::TestRequest::get().uri(&format!("/maps/{}", id)).to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(
            body["result"],
            json!({
                "idMap": id,
                "name": "Weekend in Zaragoza",
                "description": "Tapas and towers",
                "privacy": "private",
                "idUser": 7
            })
        );
    }

    #[actix_web::test]
    async fn test_get_missing_map_is_404() {
        let stores = Stores::memory();
        let app = init_app!(stores);

        let req = test::TestRequest::get().uri("/maps/99").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "success": false, "message": "Map not found" }));
    }

    #[actix_web::test]
    async fn test_invalid_payload_is_400() {
        let stores = Stores::memory();
        let app = init_app!(stores);

        let req = test::TestRequest::post()
            .uri("/maps")
            .set_json(json!({ "name": "Trip" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Missing required fields: name, privacy, idUser");

        assert_eq!(stores.maps.count().await.unwrap(), 0);
    }

    #[actix_web::test]
    async fn test_malformed_json_is_400() {
        let stores = Stores::memory();
        let app = init_app!(stores);

        let req = test::TestRequest::post()
            .uri("/maps")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"name\": ")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert!(body["message"].as_str().unwrap().starts_with("Invalid JSON body"));
    }

    #[actix_web::test]
    async fn test_empty_body_is_missing_fields() {
        let stores = Stores::memory();
        let app = init_app!(stores);

        let req = test::TestRequest::post().uri("/maps").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({ "success": false, "message": "Missing required fields: name, privacy, idUser" })
        );
    }

    #[actix_web::test]
    async fn test_update_replaces_whole_row() {
        let stores = Stores::memory();
        let app = init_app!(stores);

        let req = test::TestRequest::post().uri("/maps").set_json(trip()).to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let id = body["idMap"].as_i64().unwrap();

        let req = test::TestRequest::put()
            .uri(&format!("/maps/{}", id))
            .set_json(json!({ "name": "Renamed trip", "privacy": "public", "idUser": 8 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let map = stores.maps.get(id).await.unwrap();
        assert_eq!(map.name, "Renamed trip");
        assert_eq!(map.description, None);
        assert_eq!(map.privacy, "public");
        assert_eq!(map.id_user, 8);
    }

    #[actix_web::test]
    async fn test_update_missing_map_is_404() {
        let stores = Stores::memory();
        let app = init_app!(stores);

        let req = test::TestRequest::put().uri("/maps/5").set_json(trip()).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_delete_map() {
        let stores = Stores::memory();
        let app = init_app!(stores);

        let req = test::TestRequest::post().uri("/maps").set_json(trip()).to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let id = body["idMap"].as_i64().unwrap();

        let req = test::TestRequest::delete().uri(&format!("/maps/{}", id)).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::delete().uri(&format!("/maps/{}", id)).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_bad_id_is_400() {
        let stores = Stores::memory();
        let app = init_app!(stores);

        let req = test::TestRequest::get().uri("/maps/abc").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Invalid ID format. ID must be a number.");
    }

    #[actix_web::test]
    async fn test_list_pagination_defaults() {
        let stores = Stores::memory();
        let app = init_app!(stores);

        for _ in 0..3 {
            let req = test::TestRequest::post().uri("/maps").set_json(trip()).to_request();
            test::call_service(&app, req).await;
        }

        let req = test::TestRequest::get().uri("/maps?page=abc").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(
            body["info"],
            json!({ "total": 3, "page": 1, "limit": 10, "totalPages": 1 })
        );
        assert_eq!(body["results"].as_array().unwrap().len(), 3);
    }
}
