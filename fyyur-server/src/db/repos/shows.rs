//! Show repository

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use super::DbError;
use crate::models::ShowForm;

/// Show record from database
#[derive(Debug, Clone, FromRow)]
pub struct Show {
    pub id: i32,
    pub start_time: DateTime<Utc>,
    pub artist_id: i32,
    pub venue_id: i32,
    pub date_listed: DateTime<Utc>,
}

/// Show with artist and venue display fields for the listing page
#[derive(Debug, Clone, FromRow)]
pub struct ShowListing {
    pub id: i32,
    pub venue_id: i32,
    pub venue_name: String,
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}

/// Show repository
pub struct ShowRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ShowRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All shows, earliest first, joined to artist and venue.
    pub async fn list(&self) -> Result<Vec<ShowListing>, DbError> {
        let shows: Vec<ShowListing> = sqlx::query_as(
            r#"
            SELECT
                s.id,
                v.id AS venue_id,
                v.name AS venue_name,
                a.id AS artist_id,
                a.name AS artist_name,
                a.image_link AS artist_image_link,
                s.start_time
            FROM shows s
            JOIN artists a ON a.id = s.artist_id
            JOIN venues v ON v.id = s.venue_id
            ORDER BY s.start_time ASC, s.id ASC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(shows)
    }

    /// Insert a show inside a transaction.
    ///
    /// A dangling artist or venue id fails on the foreign key and the
    /// transaction rolls back with nothing written.
    pub async fn create(&self, form: &ShowForm) -> Result<Show, DbError> {
        let mut tx = self.pool.begin().await?;

        let show: Show = sqlx::query_as(
            r#"
            INSERT INTO shows (start_time, artist_id, venue_id)
            VALUES ($1, $2, $3)
            RETURNING id, start_time, artist_id, venue_id, date_listed
            "#,
        )
        .bind(form.start_time)
        .bind(form.artist_id)
        .bind(form.venue_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(DbError::from_write)?;

        tx.commit().await?;
        Ok(show)
    }
}
