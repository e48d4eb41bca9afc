//! Artist endpoints

use axum::extract::State;
use axum::response::Response;
use axum::routing::{get, post};
use axum::{Form, Router};
use chrono::Utc;

use crate::db::repos::DbError;
use crate::http::error::PageError;
use crate::http::extractors::EntityId;
use crate::http::flash::{redirect_with, Flash, PendingFlash};
use crate::models::{ArtistForm, FormFields};
use crate::render;
use crate::state::AppState;

use super::SearchForm;

/// GET /artists
async fn list_artists(
    State(state): State<AppState>,
    pending: PendingFlash,
) -> Result<Response, PageError> {
    let artists = state.artists().list(Utc::now()).await?;
    let html = render::artists::list(&artists, &pending.messages());
    Ok(pending.page(html))
}

/// POST /artists/search
async fn search_artists(
    State(state): State<AppState>,
    pending: PendingFlash,
    Form(form): Form<SearchForm>,
) -> Result<Response, PageError> {
    let results = state.artists().search(&form.search_term, Utc::now()).await?;
    let html = render::search_results("artists", &form.search_term, &results, &pending.messages());
    Ok(pending.page(html))
}

/// GET /artists/{id}
async fn show_artist(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    pending: PendingFlash,
) -> Result<Response, PageError> {
    let detail = state.artists().detail(id, Utc::now()).await?;
    let html = render::artists::detail(&detail, &pending.messages());
    Ok(pending.page(html))
}

/// GET /artists/create
async fn create_artist_form(pending: PendingFlash) -> Response {
    let html = render::forms::artist_form(None, &pending.messages());
    pending.page(html)
}

/// POST /artists/create
async fn create_artist(
    State(state): State<AppState>,
    pending: PendingFlash,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Response {
    let fields = FormFields::new(pairs);
    let name = fields.first("name").unwrap_or_default().trim().to_owned();

    let outcome = match ArtistForm::parse(&fields) {
        Ok(form) => state.artists().create(&form).await.map_err(|e| e.to_string()),
        Err(e) => Err(e.to_string()),
    };

    let flash = match outcome {
        Ok(artist) => {
            tracing::info!(artist_id = artist.id, "artist listed");
            Flash::info(format!("Artist {} was successfully listed!", artist.name))
        }
        Err(reason) => {
            tracing::warn!("artist create failed: {}", reason);
            Flash::error(format!("An error occurred. Artist {} could not be listed.", name))
        }
    };

    let html = render::home(&pending.with(flash));
    pending.page(html)
}

/// GET /artists/{id}/edit
async fn edit_artist_form(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    pending: PendingFlash,
) -> Result<Response, PageError> {
    let artist = state.artists().get(id).await?;
    let html = render::forms::artist_form(Some(&artist), &pending.messages());
    Ok(pending.page(html))
}

/// POST /artists/{id}/edit
async fn edit_artist(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response, PageError> {
    let fields = FormFields::new(pairs);
    let edit_url = format!("/artists/{}/edit", id);

    let form = match ArtistForm::parse(&fields) {
        Ok(form) => form,
        Err(e) => {
            tracing::warn!(artist_id = id, "artist edit rejected: {}", e);
            return Ok(redirect_with(
                &edit_url,
                Flash::error(format!("An error occurred. Artist could not be updated: {}.", e)),
            ));
        }
    };

    match state.artists().update(id, &form).await {
        Ok(artist) => Ok(redirect_with(
            &format!("/artists/{}", id),
            Flash::info(format!("Artist {} was successfully updated!", artist.name)),
        )),
        Err(e @ DbError::NotFound { .. }) => Err(e.into()),
        Err(e) => {
            tracing::warn!(artist_id = id, "artist edit failed: {}", e);
            Ok(redirect_with(
                &edit_url,
                Flash::error(format!("An error occurred. Artist {} could not be updated.", form.name)),
            ))
        }
    }
}

/// POST|DELETE /artists/{id}
async fn delete_artist(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Response, PageError> {
    match state.artists().delete(id).await {
        Ok(deleted) => Ok(redirect_with(
            "/",
            Flash::info(format!(
                "Artist {} was successfully deleted, along with {} show(s).",
                deleted.name, deleted.shows_removed
            )),
        )),
        Err(e @ DbError::NotFound { .. }) => Err(e.into()),
        Err(e) => {
            tracing::warn!(artist_id = id, "artist delete failed: {}", e);
            Ok(redirect_with(
                &format!("/artists/{}", id),
                Flash::error("An error occurred. Artist could not be deleted."),
            ))
        }
    }
}

/// Artist routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/artists", get(list_artists))
        .route("/artists/search", post(search_artists))
        .route("/artists/create", get(create_artist_form).post(create_artist))
        .route(
            "/artists/{id}",
            get(show_artist).post(delete_artist).delete(delete_artist),
        )
        .route("/artists/{id}/edit", get(edit_artist_form).post(edit_artist))
}
