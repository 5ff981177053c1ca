// src/db/memory.rs
// DOCUMENTATION: In-process storage for tests and STORAGE=memory runs
// PURPOSE: Same contract as the Postgres repositories, backed by ordered maps

use crate::db::{MapStore, MarkerStore, MultimediaStore};
use crate::errors::AlbumError;
use crate::models::{
    Map, Marker, Multimedia, MultimediaChanges, NewMap, NewMarker, NewMultimedia, Pagination,
};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// One table: rows keyed by id plus the next id to hand out
#[derive(Debug)]
struct Table<T> {
    rows: BTreeMap<i64, T>,
    next_id: i64,
}

impl<T: Clone> Table<T> {
    fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }

    fn insert(&mut self, build: impl FnOnce(i64) -> T) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        self.rows.insert(id, build(id));
        id
    }

    fn page(&self, page: Pagination) -> Vec<T> {
        let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(page.limit).unwrap_or(usize::MAX);
        self.rows.values().skip(offset).take(limit).cloned().collect()
    }

    fn count(&self) -> i64 {
        self.rows.len() as i64
    }
}

#[derive(Debug)]
struct Tables {
    maps: Table<Map>,
    markers: Table<Marker>,
    multimedia: Table<Multimedia>,
}

/// Thread-safe in-memory store
/// DOCUMENTATION: Ids start at 1 and are never reused, like a serial column
#[derive(Debug)]
pub struct MemoryStorage {
    tables: RwLock<Tables>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(Tables {
                maps: Table::new(),
                markers: Table::new(),
                multimedia: Table::new(),
            }),
        }
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MapStore for MemoryStorage {
    async fn count(&self) -> Result<i64, AlbumError> {
        Ok(self.tables.read().await.maps.count())
    }

    async fn list(&self, page: Pagination) -> Result<Vec<Map>, AlbumError> {
        Ok(self.tables.read().await.maps.page(page))
    }

    async fn get(&self, id_map: i64) -> Result<Map, AlbumError> {
        self.tables
            .read()
            .await
            .maps
            .rows
            .get(&id_map)
            .cloned()
            .ok_or_else(|| AlbumError::not_found("Map"))
    }

    async fn create(&self, map: &NewMap) -> Result<i64, AlbumError> {
        let mut tables = self.tables.write().await;
        Ok(tables.maps.insert(|id| map.clone().into_map(id)))
    }

    async fn replace(&self, id_map: i64, map: &NewMap) -> Result<(), AlbumError> {
        let mut tables = self.tables.write().await;
        let row = tables
            .maps
            .rows
            .get_mut(&id_map)
            .ok_or_else(|| AlbumError::not_found("Map"))?;
        *row = map.clone().into_map(id_map);
        Ok(())
    }

    async fn delete(&self, id_map: i64) -> Result<(), AlbumError> {
        let mut tables = self.tables.write().await;
        tables
            .maps
            .rows
            .remove(&id_map)
            .map(|_| ())
            .ok_or_else(|| AlbumError::not_found("Map"))
    }
}

#[async_trait]
impl MarkerStore for MemoryStorage {
    async fn get(&self, id_marker: i64) -> Result<Marker, AlbumError> {
        self.tables
            .read()
            .await
            .markers
            .rows
            .get(&id_marker)
            .cloned()
            .ok_or_else(|| AlbumError::not_found("Marker"))
    }

    async fn create(&self, marker: &NewMarker) -> Result<i64, AlbumError> {
        let mut tables = self.tables.write().await;
        Ok(tables.markers.insert(|id| marker.clone().into_marker(id)))
    }

    async fn replace(&self, id_marker: i64, marker: &NewMarker) -> Result<(), AlbumError> {
        let mut tables = self.tables.write().await;
        let row = tables
            .markers
            .rows
            .get_mut(&id_marker)
            .ok_or_else(|| AlbumError::not_found("Marker"))?;
        *row = marker.clone().into_marker(id_marker);
        Ok(())
    }

    async fn delete(&self, id_marker: i64) -> Result<(), AlbumError> {
        let mut tables = self.tables.write().await;
        tables
            .markers
            .rows
            .remove(&id_marker)
            .map(|_| ())
            .ok_or_else(|| AlbumError::not_found("Marker"))
    }
}

#[async_trait]
impl MultimediaStore for MemoryStorage {
    async fn count(&self) -> Result<i64, AlbumError> {
        Ok(self.tables.read().await.multimedia.count())
    }

    async fn list(&self, page: Pagination) -> Result<Vec<Multimedia>, AlbumError> {
        Ok(self.tables.read().await.multimedia.page(page))
    }

    async fn get(&self, id_multimedia: i64) -> Result<Multimedia, AlbumError> {
        self.tables
            .read()
            .await
            .multimedia
            .rows
            .get(&id_multimedia)
            .cloned()
            .ok_or_else(|| AlbumError::not_found("Multimedia entry"))
    }

    async fn create(&self, entry: &NewMultimedia) -> Result<i64, AlbumError> {
        let mut tables = self.tables.write().await;
        Ok(tables.multimedia.insert(|id| Multimedia {
            id_multimedia: id,
            media_type: entry.media_type.as_str().to_string(),
            id_marker: entry.id_marker,
        }))
    }

    async fn update(
        &self,
        id_multimedia: i64,
        changes: &MultimediaChanges,
    ) -> Result<(), AlbumError> {
        let mut tables = self.tables.write().await;
        let row = tables
            .multimedia
            .rows
            .get_mut(&id_multimedia)
            .ok_or_else(|| AlbumError::not_found("Multimedia entry"))?;
        changes.apply(row);
        Ok(())
    }

    async fn delete(&self, id_multimedia: i64) -> Result<(), AlbumError> {
        let mut tables = self.tables.write().await;
        tables
            .multimedia
            .rows
            .remove(&id_multimedia)
            .map(|_| ())
            .ok_or_else(|| AlbumError::not_found("Multimedia entry"))
    }
}
