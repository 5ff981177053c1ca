// src/db/map_repository.rs
// DOCUMENTATION: Map database operations
// PURPOSE: CRUD over the `maps` table

use crate::db::MapStore;
use crate::errors::AlbumError;
use crate::models::{Map, NewMap, Pagination};
use async_trait::async_trait;
use sqlx::PgPool;

const NOT_FOUND: &str = "Map";

pub struct MapRepository {
    pool: PgPool,
}

impl MapRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MapStore for MapRepository {
    async fn count(&self) -> Result<i64, AlbumError> {
        let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM maps")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                log::error!("Count query error: {}", e);
                AlbumError::from(e)
            })?;

        Ok(total)
    }

    async fn list(&self, page: Pagination) -> Result<Vec<Map>, AlbumError> {
        let maps = sqlx::query_as::<_, Map>(
            r#"
            SELECT "idMap", name, description, privacy, "idUser"
            FROM maps
            ORDER BY "idMap"
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.limit)
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            log::error!("Failed to list maps: {}", e);
            AlbumError::from(e)
        })?;

        Ok(maps)
    }

    /// Retrieve a map by id, public or private alike
    async fn get(&self, id_map: i64) -> Result<Map, AlbumError> {
        sqlx::query_as::<_, Map>(
            r#"
            SELECT "idMap", name, description, privacy, "idUser"
            FROM maps
            WHERE "idMap" = $1
            "#,
        )
        .bind(id_map)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            log::error!("Database error fetching map {}: {}", id_map, e);
            AlbumError::from(e)
        })?
        .ok_or_else(|| AlbumError::not_found(NOT_FOUND))
    }

    async fn create(&self, map: &NewMap) -> Result<i64, AlbumError> {
        let (id_map,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO maps (name, description, privacy, "idUser")
            VALUES ($1, $2, $3, $4)
            RETURNING "idMap"
            "#,
        )
        .bind(&map.name)
        .bind(&map.description)
        .bind(map.privacy.as_str())
        .bind(map.id_user)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            log::error!("Failed to create map: {}", e);
            AlbumError::from(e)
        })?;

        log::info!("Created map with id: {}", id_map);
        Ok(id_map)
    }

    async fn replace(&self, id_map: i64, map: &NewMap) -> Result<(), AlbumError> {
        let rows = sqlx::query(
            r#"
            UPDATE maps
            SET name = $1,
                description = $2,
                privacy = $3,
                "idUser" = $4
            WHERE "idMap" = $5
            "#,
        )
        .bind(&map.name)
        .bind(&map.description)
        .bind(map.privacy.as_str())
        .bind(map.id_user)
        .bind(id_map)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            log::error!("Update failed for map {}: {}", id_map, e);
            AlbumError::from(e)
        })?
        .rows_affected();

        if rows == 0 {
            log::warn!("Update of missing map: {}", id_map);
            return Err(AlbumError::not_found(NOT_FOUND));
        }

        log::info!("Updated map: {}", id_map);
        Ok(())
    }

    async fn delete(&self, id_map: i64) -> Result<(), AlbumError> {
        let rows = sqlx::query(r#"DELETE FROM maps WHERE "idMap" = $1"#)
            .bind(id_map)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                log::error!("Delete failed for map {}: {}", id_map, e);
                AlbumError::from(e)
            })?
            .rows_affected();

        if rows == 0 {
            log::warn!("Delete of missing map: {}", id_map);
            return Err(AlbumError::not_found(NOT_FOUND));
        }

        log::info!("Deleted map: {}", id_map);
        Ok(())
    }
}
