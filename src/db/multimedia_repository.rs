// src/db/multimedia_repository.rs
// DOCUMENTATION: Multimedia database operations
// PURPOSE: CRUD over the `multimedia` table, with partial updates

use crate::db::MultimediaStore;
use crate::errors::AlbumError;
use crate::models::{Multimedia, MultimediaChanges, NewMultimedia, Pagination};
use async_trait::async_trait;
use sqlx::PgPool;

const NOT_FOUND: &str = "Multimedia entry";

pub struct MultimediaRepository {
    pool: PgPool,
}

impl MultimediaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MultimediaStore for MultimediaRepository {
    async fn count(&self) -> Result<i64, AlbumError> {
        let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM multimedia")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                log::error!("Count query error: {}", e);
                AlbumError::from(e)
            })?;

        Ok(total)
    }

    async fn list(&self, page: Pagination) -> Result<Vec<Multimedia>, AlbumError> {
        let entries = sqlx::query_as::<_, Multimedia>(
            r#"
            SELECT "idMultimedia", type, "idMarker"
            FROM multimedia
            ORDER BY "idMultimedia"
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.limit)
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            log::error!("Failed to list multimedia: {}", e);
            AlbumError::from(e)
        })?;

        Ok(entries)
    }

    async fn get(&self, id_multimedia: i64) -> Result<Multimedia, AlbumError> {
        sqlx::query_as::<_, Multimedia>(
            r#"
            SELECT "idMultimedia", type, "idMarker"
            FROM multimedia
            WHERE "idMultimedia" = $1
            "#,
        )
        .bind(id_multimedia)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            log::error!("Database error fetching multimedia {}: {}", id_multimedia, e);
            AlbumError::from(e)
        })?
        .ok_or_else(|| AlbumError::not_found(NOT_FOUND))
    }

    async fn create(&self, entry: &NewMultimedia) -> Result<i64, AlbumError> {
        let (id_multimedia,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO multimedia (type, "idMarker")
            VALUES ($1, $2)
            RETURNING "idMultimedia"
            "#,
        )
        .bind(entry.media_type.as_str())
        .bind(entry.id_marker)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            log::error!("Failed to create multimedia: {}", e);
            AlbumError::from(e)
        })?;

        log::info!("Created multimedia with id: {}", id_multimedia);
        Ok(id_multimedia)
    }

    /// Partial update - only provided fields are modified
    async fn update(
        &self,
        id_multimedia: i64,
        changes: &MultimediaChanges,
    ) -> Result<(), AlbumError> {
        let rows = sqlx::query(
            r#"
            UPDATE multimedia
            SET type = COALESCE($1, type),
                "idMarker" = COALESCE($2, "idMarker")
            WHERE "idMultimedia" = $3
            "#,
        )
        .bind(changes.media_type.map(|t| t.as_str()))
        .bind(changes.id_marker)
        .bind(id_multimedia)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            log::error!("Update failed for multimedia {}: {}", id_multimedia, e);
            AlbumError::from(e)
        })?
        .rows_affected();

        if rows == 0 {
            log::warn!("Update of missing multimedia: {}", id_multimedia);
            return Err(AlbumError::not_found(NOT_FOUND));
        }

        log::info!("Updated multimedia: {}", id_multimedia);
        Ok(())
    }

    async fn delete(&self, id_multimedia: i64) -> Result<(), AlbumError> {
        let rows = sqlx::query(r#"DELETE FROM multimedia WHERE "idMultimedia" = $1"#)
            .bind(id_multimedia)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                log::error!("Delete failed for multimedia {}: {}", id_multimedia, e);
                AlbumError::from(e)
            })?
            .rows_affected();

        if rows == 0 {
            log::warn!("Delete of missing multimedia: {}", id_multimedia);
            return Err(AlbumError::not_found(NOT_FOUND));
        }

        log::info!("Deleted multimedia: {}", id_multimedia);
        Ok(())
    }
}
