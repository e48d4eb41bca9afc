//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Uses JOINs for show counts and display fields (no N+1)
//! - Lets foreign keys reject dangling references (no check-then-insert)
//! - Uses transactions for writes; a dropped transaction rolls back

pub mod common;
pub mod venues;
pub mod artists;
pub mod shows;

pub use common::{partition_shows, search_pattern, Deleted, Listing, Scheduled, SearchResults};
pub use venues::{Area, Venue, VenueDetail, VenueRepo, VenueShow};
pub use artists::{Artist, ArtistDetail, ArtistRepo, ArtistShow};
pub use shows::{Show, ShowListing, ShowRepo};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("invalid reference: {constraint}")]
    InvalidReference { constraint: String },
}

impl DbError {
    pub(crate) fn not_found(resource: &'static str, id: i32) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    /// Map foreign key violations to `InvalidReference`, everything else to `Sqlx`.
    pub(crate) fn from_write(err: sqlx::Error) -> Self {
        if let Some(db_err) = err.as_database_error() {
            if db_err.is_foreign_key_violation() {
                return Self::InvalidReference {
                    constraint: db_err.constraint().unwrap_or("foreign key").to_owned(),
                };
            }
        }
        Self::Sqlx(err)
    }
}
