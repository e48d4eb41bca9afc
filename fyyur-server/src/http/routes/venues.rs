//! Venue endpoints

use axum::extract::State;
use axum::response::Response;
use axum::routing::{get, post};
use axum::{Form, Router};
use chrono::Utc;

use crate::db::repos::DbError;
use crate::http::error::PageError;
use crate::http::extractors::EntityId;
use crate::http::flash::{redirect_with, Flash, PendingFlash};
use crate::models::{FormFields, VenueForm};
use crate::render;
use crate::state::AppState;

use super::SearchForm;

/// GET /venues - venues grouped by city and state
async fn list_venues(
    State(state): State<AppState>,
    pending: PendingFlash,
) -> Result<Response, PageError> {
    let areas = state.venues().list_areas(Utc::now()).await?;
    let html = render::venues::areas(&areas, &pending.messages());
    Ok(pending.page(html))
}

/// POST /venues/search
async fn search_venues(
    State(state): State<AppState>,
    pending: PendingFlash,
    Form(form): Form<SearchForm>,
) -> Result<Response, PageError> {
    let results = state.venues().search(&form.search_term, Utc::now()).await?;
    let html = render::search_results("venues", &form.search_term, &results, &pending.messages());
    Ok(pending.page(html))
}

/// GET /venues/{id}
async fn show_venue(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    pending: PendingFlash,
) -> Result<Response, PageError> {
    let detail = state.venues().detail(id, Utc::now()).await?;
    let html = render::venues::detail(&detail, &pending.messages());
    Ok(pending.page(html))
}

/// GET /venues/create
async fn create_venue_form(pending: PendingFlash) -> Response {
    let html = render::forms::venue_form(None, &pending.messages());
    pending.page(html)
}

/// POST /venues/create - flash the outcome on the home page
async fn create_venue(
    State(state): State<AppState>,
    pending: PendingFlash,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Response {
    let fields = FormFields::new(pairs);
    let name = fields.first("name").unwrap_or_default().trim().to_owned();

    let outcome = match VenueForm::parse(&fields) {
        Ok(form) => state.venues().create(&form).await.map_err(|e| e.to_string()),
        Err(e) => Err(e.to_string()),
    };

    let flash = match outcome {
        Ok(venue) => {
            tracing::info!(venue_id = venue.id, "venue listed");
            Flash::info(format!("Venue {} was successfully listed!", venue.name))
        }
        Err(reason) => {
            tracing::warn!("venue create failed: {}", reason);
            Flash::error(format!("An error occurred. Venue {} could not be listed.", name))
        }
    };

    let html = render::home(&pending.with(flash));
    pending.page(html)
}

/// GET /venues/{id}/edit - form pre-filled with the stored venue
async fn edit_venue_form(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    pending: PendingFlash,
) -> Result<Response, PageError> {
    let venue = state.venues().get(id).await?;
    let html = render::forms::venue_form(Some(&venue), &pending.messages());
    Ok(pending.page(html))
}

/// POST /venues/{id}/edit - replace every field
async fn edit_venue(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response, PageError> {
    let fields = FormFields::new(pairs);
    let edit_url = format!("/venues/{}/edit", id);

    let form = match VenueForm::parse(&fields) {
        Ok(form) => form,
        Err(e) => {
            tracing::warn!(venue_id = id, "venue edit rejected: {}", e);
            return Ok(redirect_with(
                &edit_url,
                Flash::error(format!("An error occurred. Venue could not be updated: {}.", e)),
            ));
        }
    };

    match state.venues().update(id, &form).await {
        Ok(venue) => Ok(redirect_with(
            &format!("/venues/{}", id),
            Flash::info(format!("Venue {} was successfully updated!", venue.name)),
        )),
        Err(e @ DbError::NotFound { .. }) => Err(e.into()),
        Err(e) => {
            tracing::warn!(venue_id = id, "venue edit failed: {}", e);
            Ok(redirect_with(
                &edit_url,
                Flash::error(format!("An error occurred. Venue {} could not be updated.", form.name)),
            ))
        }
    }
}

/// POST|DELETE /venues/{id} - remove the venue and its shows
async fn delete_venue(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Response, PageError> {
    match state.venues().delete(id).await {
        Ok(deleted) => Ok(redirect_with(
            "/",
            Flash::info(format!(
                "Venue {} was successfully deleted, along with {} show(s).",
                deleted.name, deleted.shows_removed
            )),
        )),
        Err(e @ DbError::NotFound { .. }) => Err(e.into()),
        Err(e) => {
            tracing::warn!(venue_id = id, "venue delete failed: {}", e);
            Ok(redirect_with(
                &format!("/venues/{}", id),
                Flash::error("An error occurred. Venue could not be deleted."),
            ))
        }
    }
}

/// Venue routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/venues", get(list_venues))
        .route("/venues/search", post(search_venues))
        .route("/venues/create", get(create_venue_form).post(create_venue))
        .route(
            "/venues/{id}",
            get(show_venue).post(delete_venue).delete(delete_venue),
        )
        .route("/venues/{id}/edit", get(edit_venue_form).post(edit_venue))
}
