//! Venue repository
//!
//! Handles venue CRUD plus the derived reads behind the listing pages:
//! - list_areas: venues grouped by (city, state) with upcoming show counts
//! - detail: past/upcoming shows joined to their artists
//! - delete: shows first, then the venue, in one transaction

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use super::common::{partition_shows, search_pattern, Deleted, Listing, Scheduled, SearchResults};
use super::DbError;
use crate::models::VenueForm;

/// Venue record from database
#[derive(Debug, Clone, FromRow)]
pub struct Venue {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub genres: Vec<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub date_listed: DateTime<Utc>,
}

/// Venues sharing a city and state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Area {
    pub city: String,
    pub state: String,
    pub venues: Vec<Listing>,
}

/// Listing row tagged with its area, before grouping
#[derive(Debug, Clone, FromRow)]
pub(crate) struct AreaRow {
    pub city: String,
    pub state: String,
    #[sqlx(flatten)]
    pub listing: Listing,
}

/// A show at a venue, with the performing artist's display fields
#[derive(Debug, Clone, FromRow)]
pub struct VenueShow {
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}

impl Scheduled for VenueShow {
    fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }
}

/// Venue page data
#[derive(Debug, Clone)]
pub struct VenueDetail {
    pub venue: Venue,
    pub past_shows: Vec<VenueShow>,
    pub upcoming_shows: Vec<VenueShow>,
}

impl VenueDetail {
    pub fn past_shows_count(&self) -> usize {
        self.past_shows.len()
    }

    pub fn upcoming_shows_count(&self) -> usize {
        self.upcoming_shows.len()
    }
}

/// Group listing rows by (city, state).
///
/// Every row lands in exactly one group keyed by its own fields; groups
/// come out sorted by state then city, venues keep their input order.
pub(crate) fn group_into_areas(rows: Vec<AreaRow>) -> Vec<Area> {
    let mut areas: BTreeMap<(String, String), Vec<Listing>> = BTreeMap::new();
    for row in rows {
        areas
            .entry((row.state, row.city))
            .or_default()
            .push(row.listing);
    }

    areas
        .into_iter()
        .map(|((state, city), venues)| Area {
            city,
            state,
            venues,
        })
        .collect()
}

/// Venue repository
pub struct VenueRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> VenueRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All venues grouped by area, each with shows starting after `now`.
    pub async fn list_areas(&self, now: DateTime<Utc>) -> Result<Vec<Area>, DbError> {
        let rows: Vec<AreaRow> = sqlx::query_as(
            r#"
            SELECT
                v.id,
                v.name,
                v.city,
                v.state,
                COUNT(s.id) FILTER (WHERE s.start_time > $1) AS num_upcoming_shows
            FROM venues v
            LEFT JOIN shows s ON s.venue_id = v.id
            GROUP BY v.id
            ORDER BY v.name, v.id
            "#,
        )
        .bind(now)
        .fetch_all(self.pool)
        .await?;

        Ok(group_into_areas(rows))
    }

    /// Get a single venue by id.
    pub async fn get(&self, id: i32) -> Result<Venue, DbError> {
        let venue: Venue = sqlx::query_as("SELECT * FROM venues WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::not_found("venue", id))?;

        Ok(venue)
    }

    /// Venue with its shows split into past (before `now`) and upcoming.
    pub async fn detail(&self, id: i32, now: DateTime<Utc>) -> Result<VenueDetail, DbError> {
        let venue = self.get(id).await?;

        let shows: Vec<VenueShow> = sqlx::query_as(
            r#"
            SELECT
                a.id AS artist_id,
                a.name AS artist_name,
                a.image_link AS artist_image_link,
                s.start_time
            FROM shows s
            JOIN artists a ON a.id = s.artist_id
            WHERE s.venue_id = $1
            ORDER BY s.start_time
            "#,
        )
        .bind(id)
        .fetch_all(self.pool)
        .await?;

        let (past_shows, upcoming_shows) = partition_shows(shows, now);

        Ok(VenueDetail {
            venue,
            past_shows,
            upcoming_shows,
        })
    }

    /// Case-insensitive substring search on venue name.
    pub async fn search(&self, term: &str, now: DateTime<Utc>) -> Result<SearchResults, DbError> {
        let data: Vec<Listing> = sqlx::query_as(
            r#"
            SELECT
                v.id,
                v.name,
                COUNT(s.id) FILTER (WHERE s.start_time > $2) AS num_upcoming_shows
            FROM venues v
            LEFT JOIN shows s ON s.venue_id = v.id
            WHERE v.name ILIKE $1 ESCAPE '\'
            GROUP BY v.id
            ORDER BY v.name, v.id
            "#,
        )
        .bind(search_pattern(term))
        .bind(now)
        .fetch_all(self.pool)
        .await?;

        Ok(SearchResults::new(data))
    }

    /// Insert a venue inside a transaction.
    pub async fn create(&self, form: &VenueForm) -> Result<Venue, DbError> {
        let mut tx = self.pool.begin().await?;

        let venue: Venue = sqlx::query_as(
            r#"
            INSERT INTO venues (
                name, city, state, address, phone, image_link, genres,
                facebook_link, website_link, seeking_talent, seeking_description
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(&form.name)
        .bind(&form.city)
        .bind(&form.state)
        .bind(&form.address)
        .bind(form.phone.as_deref())
        .bind(form.image_link.as_deref())
        .bind(form.genres.as_slice())
        .bind(form.facebook_link.as_deref())
        .bind(form.website_link.as_deref())
        .bind(form.seeking_talent)
        .bind(form.seeking_description.as_deref())
        .fetch_one(&mut *tx)
        .await
        .map_err(DbError::from_write)?;

        tx.commit().await?;
        Ok(venue)
    }

    /// Replace every editable field of a venue. `date_listed` is untouched.
    pub async fn update(&self, id: i32, form: &VenueForm) -> Result<Venue, DbError> {
        let mut tx = self.pool.begin().await?;

        let venue: Venue = sqlx::query_as(
            r#"
            UPDATE venues SET
                name = $2,
                city = $3,
                state = $4,
                address = $5,
                phone = $6,
                image_link = $7,
                genres = $8,
                facebook_link = $9,
                website_link = $10,
                seeking_talent = $11,
                seeking_description = $12
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&form.name)
        .bind(&form.city)
        .bind(&form.state)
        .bind(&form.address)
        .bind(form.phone.as_deref())
        .bind(form.image_link.as_deref())
        .bind(form.genres.as_slice())
        .bind(form.facebook_link.as_deref())
        .bind(form.website_link.as_deref())
        .bind(form.seeking_talent)
        .bind(form.seeking_description.as_deref())
        .fetch_optional(&mut *tx)
        .await
        .map_err(DbError::from_write)?
        .ok_or_else(|| DbError::not_found("venue", id))?;

        tx.commit().await?;
        Ok(venue)
    }

    /// Delete a venue and all of its shows (atomic).
    pub async fn delete(&self, id: i32) -> Result<Deleted, DbError> {
        let mut tx = self.pool.begin().await?;

        let (name,): (String,) = sqlx::query_as("SELECT name FROM venues WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| DbError::not_found("venue", id))?;

        let shows_removed = sqlx::query("DELETE FROM shows WHERE venue_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        sqlx::query("DELETE FROM venues WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::info!(venue_id = id, shows_removed, "venue deleted");

        Ok(Deleted {
            name,
            shows_removed,
        })
    }
}
