// src/db/marker_repository.rs
// DOCUMENTATION: Marker database operations
// PURPOSE: CRUD over the `markers` table

use crate::db::MarkerStore;
use crate::errors::AlbumError;
use crate::models::{Marker, NewMarker};
use async_trait::async_trait;
use sqlx::PgPool;

const NOT_FOUND: &str = "Marker";

pub struct MarkerRepository {
    pool: PgPool,
}

impl MarkerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MarkerStore for MarkerRepository {
    async fn get(&self, id_marker: i64) -> Result<Marker, AlbumError> {
        sqlx::query_as::<_, Marker>(
            r#"
            SELECT "idMarker", title, description, latitude, longitude, "idMap"
            FROM markers
            WHERE "idMarker" = $1
            "#,
        )
        .bind(id_marker)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            log::error!("Database error fetching marker {}: {}", id_marker, e);
            AlbumError::from(e)
        })?
        .ok_or_else(|| AlbumError::not_found(NOT_FOUND))
    }

    async fn create(&self, marker: &NewMarker) -> Result<i64, AlbumError> {
        let (id_marker,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO markers (title, description, latitude, longitude, "idMap")
            VALUES ($1, $2, $3, $4, $5)
            RETURNING "idMarker"
            "#,
        )
        .bind(&marker.title)
        .bind(&marker.description)
        .bind(marker.latitude)
        .bind(marker.longitude)
        .bind(marker.id_map)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            log::error!("Failed to create marker: {}", e);
            AlbumError::from(e)
        })?;

        log::info!("Created marker with id: {}", id_marker);
        Ok(id_marker)
    }

    async fn replace(&self, id_marker: i64, marker: &NewMarker) -> Result<(), AlbumError> {
        let rows = sqlx::query(
            r#"
            UPDATE markers
            SET title = $1,
                description = $2,
                latitude = $3,
                longitude = $4,
                "idMap" = $5
            WHERE "idMarker" = $6
            "#,
        )
        .bind(&marker.title)
        .bind(&marker.description)
        .bind(marker.latitude)
        .bind(marker.longitude)
        .bind(marker.id_map)
        .bind(id_marker)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            log::error!("Update failed for marker {}: {}", id_marker, e);
            AlbumError::from(e)
        })?
        .rows_affected();

        if rows == 0 {
            log::warn!("Update of missing marker: {}", id_marker);
            return Err(AlbumError::not_found(NOT_FOUND));
        }

        log::info!("Updated marker: {}", id_marker);
        Ok(())
    }

    async fn delete(&self, id_marker: i64) -> Result<(), AlbumError> {
        let rows = sqlx::query(r#"DELETE FROM markers WHERE "idMarker" = $1"#)
            .bind(id_marker)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                log::error!("Delete failed for marker {}: {}", id_marker, e);
                AlbumError::from(e)
            })?
            .rows_affected();

        if rows == 0 {
            log::warn!("Delete of missing marker: {}", id_marker);
            return Err(AlbumError::not_found(NOT_FOUND));
        }

        log::info!("Deleted marker: {}", id_marker);
        Ok(())
    }
}
