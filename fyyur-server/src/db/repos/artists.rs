//! Artist repository
//!
//! Mirrors the venue repository; listings are flat rather than grouped.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use super::common::{partition_shows, search_pattern, Deleted, Listing, Scheduled, SearchResults};
use super::DbError;
use crate::models::ArtistForm;

/// Artist record from database
#[derive(Debug, Clone, FromRow)]
pub struct Artist {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub date_listed: DateTime<Utc>,
}

/// A show by an artist, with the hosting venue's display fields
#[derive(Debug, Clone, FromRow)]
pub struct ArtistShow {
    pub venue_id: i32,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}

impl Scheduled for ArtistShow {
    fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }
}

/// Artist page data
#[derive(Debug, Clone)]
pub struct ArtistDetail {
    pub artist: Artist,
    pub past_shows: Vec<ArtistShow>,
    pub upcoming_shows: Vec<ArtistShow>,
}

impl ArtistDetail {
    pub fn past_shows_count(&self) -> usize {
        self.past_shows.len()
    }

    pub fn upcoming_shows_count(&self) -> usize {
        self.upcoming_shows.len()
    }
}

/// Artist repository
pub struct ArtistRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ArtistRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Every artist by name, with shows starting after `now`.
    pub async fn list(&self, now: DateTime<Utc>) -> Result<Vec<Listing>, DbError> {
        let artists: Vec<Listing> = sqlx::query_as(
            r#"
            SELECT
                a.id,
                a.name,
                COUNT(s.id) FILTER (WHERE s.start_time > $1) AS num_upcoming_shows
            FROM artists a
            LEFT JOIN shows s ON s.artist_id = a.id
            GROUP BY a.id
            ORDER BY a.name, a.id
            "#,
        )
        .bind(now)
        .fetch_all(self.pool)
        .await?;

        Ok(artists)
    }

    /// Get a single artist by id.
    pub async fn get(&self, id: i32) -> Result<Artist, DbError> {
        let artist: Artist = sqlx::query_as("SELECT * FROM artists WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::not_found("artist", id))?;

        Ok(artist)
    }

    /// Artist with shows split into past (before `now`) and upcoming.
    pub async fn detail(&self, id: i32, now: DateTime<Utc>) -> Result<ArtistDetail, DbError> {
        let artist = self.get(id).await?;

        let shows: Vec<ArtistShow> = sqlx::query_as(
            r#"
            SELECT
                v.id AS venue_id,
                v.name AS venue_name,
                v.image_link AS venue_image_link,
                s.start_time
            FROM shows s
            JOIN venues v ON v.id = s.venue_id
            WHERE s.artist_id = $1
            ORDER BY s.start_time
            "#,
        )
        .bind(id)
        .fetch_all(self.pool)
        .await?;

        let (past_shows, upcoming_shows) = partition_shows(shows, now);

        Ok(ArtistDetail {
            artist,
            past_shows,
            upcoming_shows,
        })
    }

    /// Case-insensitive substring search on artist name.
    pub async fn search(&self, term: &str, now: DateTime<Utc>) -> Result<SearchResults, DbError> {
        let data: Vec<Listing> = sqlx::query_as(
            r#"
            SELECT
                a.id,
                a.name,
                COUNT(s.id) FILTER (WHERE s.start_time > $2) AS num_upcoming_shows
            FROM artists a
            LEFT JOIN shows s ON s.artist_id = a.id
            WHERE a.name ILIKE $1 ESCAPE '\'
            GROUP BY a.id
            ORDER BY a.name, a.id
            "#,
        )
        .bind(search_pattern(term))
        .bind(now)
        .fetch_all(self.pool)
        .await?;

        Ok(SearchResults::new(data))
    }

    /// Insert an artist inside a transaction.
    pub async fn create(&self, form: &ArtistForm) -> Result<Artist, DbError> {
        let mut tx = self.pool.begin().await?;

        let artist: Artist = sqlx::query_as(
            r#"
            INSERT INTO artists (
                name, city, state, phone, genres, image_link,
                facebook_link, website_link, seeking_venue, seeking_description
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(&form.name)
        .bind(&form.city)
        .bind(&form.state)
        .bind(form.phone.as_deref())
        .bind(form.genres.as_slice())
        .bind(form.image_link.as_deref())
        .bind(form.facebook_link.as_deref())
        .bind(form.website_link.as_deref())
        .bind(form.seeking_venue)
        .bind(form.seeking_description.as_deref())
        .fetch_one(&mut *tx)
        .await
        .map_err(DbError::from_write)?;

        tx.commit().await?;
        Ok(artist)
    }

    /// Replace every editable field of an artist. `date_listed` is untouched.
    pub async fn update(&self, id: i32, form: &ArtistForm) -> Result<Artist, DbError> {
        let mut tx = self.pool.begin().await?;

        let artist: Artist = sqlx::query_as(
            r#"
            UPDATE artists SET
                name = $2,
                city = $3,
                state = $4,
                phone = $5,
                genres = $6,
                image_link = $7,
                facebook_link = $8,
                website_link = $9,
                seeking_venue = $10,
                seeking_description = $11
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&form.name)
        .bind(&form.city)
        .bind(&form.state)
        .bind(form.phone.as_deref())
        .bind(form.genres.as_slice())
        .bind(form.image_link.as_deref())
        .bind(form.facebook_link.as_deref())
        .bind(form.website_link.as_deref())
        .bind(form.seeking_venue)
        .bind(form.seeking_description.as_deref())
        .fetch_optional(&mut *tx)
        .await
        .map_err(DbError::from_write)?
        .ok_or_else(|| DbError::not_found("artist", id))?;

        tx.commit().await?;
        Ok(artist)
    }

    /// Delete an artist and all of their shows (atomic).
    pub async fn delete(&self, id: i32) -> Result<Deleted, DbError> {
        let mut tx = self.pool.begin().await?;

        let (name,): (String,) = sqlx::query_as("SELECT name FROM artists WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| DbError::not_found("artist", id))?;

        let shows_removed = sqlx::query("DELETE FROM shows WHERE artist_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        sqlx::query("DELETE FROM artists WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::info!(artist_id = id, shows_removed, "artist deleted");

        Ok(Deleted {
            name,
            shows_removed,
        })
    }
}
