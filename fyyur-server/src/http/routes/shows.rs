//! Show endpoints

use axum::extract::State;
use axum::response::Response;
use axum::routing::get;
use axum::{Form, Router};

use crate::db::repos::DbError;
use crate::http::error::PageError;
use crate::http::flash::{Flash, PendingFlash};
use crate::models::{FormFields, ShowForm};
use crate::render;
use crate::state::AppState;

/// GET /shows - every show, earliest first
async fn list_shows(
    State(state): State<AppState>,
    pending: PendingFlash,
) -> Result<Response, PageError> {
    let shows = state.shows().list().await?;
    let html = render::shows::list(&shows, &pending.messages());
    Ok(pending.page(html))
}

/// GET /shows/create
async fn create_show_form(pending: PendingFlash) -> Response {
    let html = render::forms::show_form(&pending.messages());
    pending.page(html)
}

/// POST /shows/create
///
/// Missing ids fail validation; ids with no matching row fail on the
/// foreign key and the insert is rolled back. Both flash the same error.
async fn create_show(
    State(state): State<AppState>,
    pending: PendingFlash,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Response {
    let fields = FormFields::new(pairs);

    let outcome = match ShowForm::parse(&fields) {
        Ok(form) => state.shows().create(&form).await.map_err(|e| match e {
            DbError::InvalidReference { constraint } => {
                format!("unknown artist or venue ({})", constraint)
            }
            other => other.to_string(),
        }),
        Err(e) => Err(e.to_string()),
    };

    let flash = match outcome {
        Ok(show) => {
            tracing::info!(show_id = show.id, "show listed");
            Flash::info("Show was successfully listed!")
        }
        Err(reason) => {
            tracing::warn!("show create failed: {}", reason);
            Flash::error("An error occurred. Show could not be listed.")
        }
    };

    let html = render::home(&pending.with(flash));
    pending.page(html)
}

/// Show routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/shows", get(list_shows))
        .route("/shows/create", get(create_show_form).post(create_show))
}
