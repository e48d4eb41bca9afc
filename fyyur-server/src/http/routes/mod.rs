//! Route handlers organized by resource

pub mod artists;
pub mod home;
pub mod shows;
pub mod venues;

use serde::Deserialize;

/// Search box submission
#[derive(Debug, Default, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search_term: String,
}
