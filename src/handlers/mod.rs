// src/handlers/mod.rs
// DOCUMENTATION: Handlers module organization
// PURPOSE: Re-export handler components and compose the router

/// Test app wired to the given `Stores`, shared by the handler test modules
#[cfg(test)]
macro_rules! init_app {
    ($stores:expr) => {
        actix_web::test::init_service(
            actix_web::App::new().configure(|cfg| crate::handlers::routes(cfg, &$stores)),
        )
        .await
    };
}

pub mod health;
pub mod maps;
pub mod markers;
pub mod multimedia;

pub use health::config as health_config;
pub use maps::config as maps_config;
pub use markers::config as markers_config;
pub use multimedia::config as multimedia_config;

use crate::db::Stores;
use crate::errors::AlbumError;
use actix_web::web;
use serde::de::DeserializeOwned;

/// Register the stores and every route
/// DOCUMENTATION: Shared by main.rs and the handler tests so both see the same app
pub fn routes(cfg: &mut web::ServiceConfig, stores: &Stores) {
    cfg.app_data(web::Data::from(stores.maps.clone()))
        .app_data(web::Data::from(stores.markers.clone()))
        .app_data(web::Data::from(stores.multimedia.clone()))
        // Query parse failures use the same envelope as validation errors
        .app_data(web::QueryConfig::default().error_handler(|err, _req| {
            AlbumError::Validation(format!("Invalid query string: {}", err)).into()
        }))
        .configure(health_config)
        .configure(maps_config)
        .configure(markers_config)
        .configure(multimedia_config);
}

/// Decode a request body into a payload.
/// A missing or blank body is an empty payload, so it fails field validation
/// with the usual "Missing required fields" message instead of a parse error.
pub(crate) fn json_body<T>(body: &web::Bytes) -> Result<T, AlbumError>
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body)
        .map_err(|e| AlbumError::Validation(format!("Invalid JSON body: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MapPayload;

    #[test]
    fn test_blank_body_is_empty_payload() {
        let payload: MapPayload = json_body(&web::Bytes::from_static(b"  \n")).unwrap();
        assert_eq!(
            payload.validate().unwrap_err().to_string(),
            "Missing required fields: name, privacy, idUser"
        );
    }

    #[test]
    fn test_malformed_body_is_validation_error() {
        let err = json_body::<MapPayload>(&web::Bytes::from_static(b"{\"name\": ")).unwrap_err();
        match err {
            AlbumError::Validation(message) => assert!(message.starts_with("Invalid JSON body")),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
