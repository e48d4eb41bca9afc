//! Home page and fallback

use axum::response::Response;
use axum::routing::get;
use axum::Router;

use crate::http::error::PageError;
use crate::http::flash::PendingFlash;
use crate::render;
use crate::state::AppState;

/// GET / - landing page, showing any pending flash
async fn index(pending: PendingFlash) -> Response {
    let html = render::home(&pending.messages());
    pending.page(html)
}

/// Unmatched routes
pub async fn not_found() -> PageError {
    PageError::NotFound {
        resource: "page",
        id: String::new(),
    }
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(index))
}
