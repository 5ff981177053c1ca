// src/db/mod.rs
// DOCUMENTATION: Storage seam between handlers and the database
// PURPOSE: One trait per resource, implemented by the Postgres repositories and the in-memory store

pub mod map_repository;
pub mod marker_repository;
pub mod memory;
pub mod multimedia_repository;

pub use map_repository::*;
pub use marker_repository::*;
pub use memory::*;
pub use multimedia_repository::*;

use crate::errors::AlbumError;
use crate::models::{
    Map, Marker, Multimedia, MultimediaChanges, NewMap, NewMarker, NewMultimedia, Pagination,
};
use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

/// Persistence for maps
/// Lookups and mutations report a missing row as AlbumError::NotFound
#[async_trait]
pub trait MapStore: Send + Sync + 'static {
    async fn count(&self) -> Result<i64, AlbumError>;
    async fn list(&self, page: Pagination) -> Result<Vec<Map>, AlbumError>;
    async fn get(&self, id_map: i64) -> Result<Map, AlbumError>;
    async fn create(&self, map: &NewMap) -> Result<i64, AlbumError>;
    /// Replace every column of an existing row
    async fn replace(&self, id_map: i64, map: &NewMap) -> Result<(), AlbumError>;
    async fn delete(&self, id_map: i64) -> Result<(), AlbumError>;
}

/// Persistence for markers
#[async_trait]
pub trait MarkerStore: Send + Sync + 'static {
    async fn get(&self, id_marker: i64) -> Result<Marker, AlbumError>;
    async fn create(&self, marker: &NewMarker) -> Result<i64, AlbumError>;
    async fn replace(&self, id_marker: i64, marker: &NewMarker) -> Result<(), AlbumError>;
    async fn delete(&self, id_marker: i64) -> Result<(), AlbumError>;
}

/// Persistence for multimedia entries
#[async_trait]
pub trait MultimediaStore: Send + Sync + 'static {
    async fn count(&self) -> Result<i64, AlbumError>;
    async fn list(&self, page: Pagination) -> Result<Vec<Multimedia>, AlbumError>;
    async fn get(&self, id_multimedia: i64) -> Result<Multimedia, AlbumError>;
    async fn create(&self, entry: &NewMultimedia) -> Result<i64, AlbumError>;
    /// Overwrite only the supplied fields
    async fn update(
        &self,
        id_multimedia: i64,
        changes: &MultimediaChanges,
    ) -> Result<(), AlbumError>;
    async fn delete(&self, id_multimedia: i64) -> Result<(), AlbumError>;
}

/// The three stores handed to the HTTP layer
#[derive(Clone)]
pub struct Stores {
    pub maps: Arc<dyn MapStore>,
    pub markers: Arc<dyn MarkerStore>,
    pub multimedia: Arc<dyn MultimediaStore>,
}

impl Stores {
    pub fn postgres(pool: PgPool) -> Self {
        Stores {
            maps: Arc::new(MapRepository::new(pool.clone())),
            markers: Arc::new(MarkerRepository::new(pool.clone())),
            multimedia: Arc::new(MultimediaRepository::new(pool)),
        }
    }

    pub fn memory() -> Self {
        let store = Arc::new(MemoryStorage::new());
        Stores {
            maps: store.clone(),
            markers: store.clone(),
            multimedia: store,
        }
    }
}
