//! Shapes and helpers shared by the venue and artist repositories

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A venue or artist with its upcoming show count, for listings and search
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Listing {
    pub id: i32,
    pub name: String,
    pub num_upcoming_shows: i64,
}

/// Search response: total count plus the matching rows
#[derive(Debug, Clone)]
pub struct SearchResults {
    pub count: usize,
    pub data: Vec<Listing>,
}

impl SearchResults {
    pub fn new(data: Vec<Listing>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }
}

/// Outcome of deleting a venue or artist together with its shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deleted {
    pub name: String,
    pub shows_removed: u64,
}

/// Anything with a start time that can be split into past and upcoming.
pub trait Scheduled {
    fn start_time(&self) -> DateTime<Utc>;
}

/// Split shows into `(past, upcoming)` relative to `now`.
///
/// A show starting exactly at `now` is upcoming. Order is preserved.
pub fn partition_shows<T: Scheduled>(shows: Vec<T>, now: DateTime<Utc>) -> (Vec<T>, Vec<T>) {
    shows.into_iter().partition(|show| show.start_time() < now)
}

/// Build an ILIKE pattern matching `term` literally anywhere in a value.
///
/// Use with `ESCAPE '\'`.
pub fn search_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.trim().chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
