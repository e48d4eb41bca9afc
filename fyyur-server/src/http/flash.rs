//! Flash messages
//!
//! A flash raised while rendering a page is shown inline. A flash that has
//! to survive a redirect travels in the `fyyur_flash` cookie; the next page
//! that renders consumes it and clears the cookie.

use axum::extract::FromRequestParts;
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::request::Parts;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};

pub const FLASH_COOKIE: &str = "fyyur_flash";

const CLEAR_COOKIE: &str = "fyyur_flash=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax";

/// Flash severity, used as the alert style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Error,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Error => "error",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "info" => Some(Self::Info),
            "error" => Some(Self::Error),
            _ => None,
        }
    }
}

/// One-shot user-facing status message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub level: Level,
    pub message: String,
}

impl Flash {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: Level::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            message: message.into(),
        }
    }

    /// Cookie-safe encoding: `level:message`, percent-encoded.
    pub fn encode(&self) -> String {
        urlencoding::encode(&format!("{}:{}", self.level.as_str(), self.message)).into_owned()
    }

    pub fn decode(raw: &str) -> Option<Self> {
        let decoded = urlencoding::decode(raw).ok()?;
        let (level, message) = decoded.split_once(':')?;
        Some(Self {
            level: Level::parse(level)?,
            message: message.to_owned(),
        })
    }
}

/// Flash left by the previous response, if any.
///
/// Extracting never fails; a malformed cookie is treated as present but
/// empty so it still gets cleared.
#[derive(Debug, Default)]
pub struct PendingFlash {
    flash: Option<Flash>,
    cookie_present: bool,
}

impl PendingFlash {
    /// Messages to show on the page being rendered.
    pub fn messages(&self) -> Vec<Flash> {
        self.flash.iter().cloned().collect()
    }

    /// Pending messages followed by `extra`.
    pub fn with(&self, extra: Flash) -> Vec<Flash> {
        let mut messages = self.messages();
        messages.push(extra);
        messages
    }

    /// Turn a rendered page into a response, clearing the cookie if it was sent.
    pub fn respond(self, status: StatusCode, html: String) -> Response {
        let mut response = (status, Html(html)).into_response();
        if self.cookie_present {
            response
                .headers_mut()
                .append(SET_COOKIE, HeaderValue::from_static(CLEAR_COOKIE));
        }
        response
    }

    /// 200 OK page.
    pub fn page(self, html: String) -> Response {
        self.respond(StatusCode::OK, html)
    }
}

impl<S> FromRequestParts<S> for PendingFlash
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|header| header.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == FLASH_COOKIE)
            .map(|(_, value)| value.to_owned());

        Ok(match raw {
            Some(raw) => Self {
                flash: Flash::decode(&raw),
                cookie_present: true,
            },
            None => Self::default(),
        })
    }
}

/// 303 redirect carrying a flash for the next page.
pub fn redirect_with(to: &str, flash: Flash) -> Response {
    let mut response = Redirect::to(to).into_response();
    let cookie = format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax",
        FLASH_COOKIE,
        flash.encode()
    );
    match HeaderValue::from_str(&cookie) {
        Ok(value) => {
            response.headers_mut().append(SET_COOKIE, value);
        }
        Err(e) => tracing::warn!("dropping unencodable flash: {}", e),
    }
    response
}
