//! Custom Axum extractors

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use super::error::PageError;

/// Extract a numeric row id from the `{id}` path segment.
///
/// Anything that is not a positive integer can never match a row, so it is
/// rejected as not found rather than as a bad request.
pub struct EntityId(pub i32);

impl<S> FromRequestParts<S> for EntityId
where
    S: Send + Sync,
{
    type Rejection = PageError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|e| PageError::NotFound {
                resource: "page",
                id: e.body_text(),
            })?;

        match raw.parse::<i32>() {
            Ok(id) if id > 0 => Ok(Self(id)),
            _ => Err(PageError::NotFound {
                resource: "page",
                id: raw,
            }),
        }
    }
}
