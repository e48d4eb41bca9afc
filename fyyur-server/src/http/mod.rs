//! HTTP layer
//!
//! Axum server with:
//! - Server-rendered HTML pages
//! - Flash messages carried across redirects in a cookie
//! - Request tracing, timeouts and a 500 page for panics
//! - Graceful shutdown

pub mod error;
pub mod extractors;
pub mod flash;
pub mod routes;
pub mod server;

pub use error::PageError;
pub use server::{build_router, run_server, ServerConfig};
