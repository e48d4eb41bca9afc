//! Schema bootstrap for the artists, venues and shows tables
//!
//! Every statement is idempotent, so this runs on each server start.

use sqlx::PgPool;

use crate::Result;

/// Create tables and indexes if they do not exist yet.
pub async fn run(pool: &PgPool) -> Result<()> {
    tracing::info!("Running schema migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS artists (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            city TEXT NOT NULL,
            state TEXT NOT NULL,
            phone TEXT,
            genres TEXT[] NOT NULL DEFAULT '{}',
            image_link TEXT,
            facebook_link TEXT,
            website_link TEXT,
            seeking_venue BOOLEAN NOT NULL DEFAULT FALSE,
            seeking_description TEXT,
            date_listed TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS venues (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            city TEXT NOT NULL,
            state TEXT NOT NULL,
            address TEXT NOT NULL,
            phone TEXT,
            genres TEXT[] NOT NULL DEFAULT '{}',
            image_link TEXT,
            facebook_link TEXT,
            website_link TEXT,
            seeking_talent BOOLEAN NOT NULL DEFAULT FALSE,
            seeking_description TEXT,
            date_listed TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    // No ON DELETE CASCADE: parents delete their shows explicitly
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS shows (
            id SERIAL PRIMARY KEY,
            start_time TIMESTAMPTZ NOT NULL,
            artist_id INTEGER NOT NULL REFERENCES artists(id),
            venue_id INTEGER NOT NULL REFERENCES venues(id),
            date_listed TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    create_indexes(pool).await?;

    tracing::info!("Schema migrations complete");
    Ok(())
}

async fn create_indexes(pool: &PgPool) -> Result<()> {
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_shows_venue ON shows(venue_id)")
        .execute(pool)
        .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_shows_artist ON shows(artist_id)")
        .execute(pool)
        .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_shows_start_time ON shows(start_time)")
        .execute(pool)
        .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_venues_area ON venues(city, state)")
        .execute(pool)
        .await?;

    Ok(())
}
