//! fyyur-server: venue, artist and show listings over HTTP
//!
//! Server-rendered pages backed by PostgreSQL. Request handlers parse form
//! submissions, call the repositories in [`db`], and render HTML.

pub mod db;
pub mod error;
pub mod http;
pub mod models;
pub mod render;
pub mod state;

pub use error::{Error, Result};
pub use state::AppState;
