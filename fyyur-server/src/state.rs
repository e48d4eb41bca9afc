//! Per-request handle on the Fyyur database

use sqlx::PgPool;
use std::sync::Arc;

use crate::db::repos::{ArtistRepo, ShowRepo, VenueRepo};

/// Handed to every handler through axum's `State`.
///
/// Holds only the pool; all other state lives in Postgres.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    pool: PgPool,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        Self {
            inner: Arc::new(AppStateInner { pool }),
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    pub fn venues(&self) -> VenueRepo<'_> {
        VenueRepo::new(self.pool())
    }

    pub fn artists(&self) -> ArtistRepo<'_> {
        ArtistRepo::new(self.pool())
    }

    pub fn shows(&self) -> ShowRepo<'_> {
        ShowRepo::new(self.pool())
    }
}
