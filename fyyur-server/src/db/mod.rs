//! Database layer - connection pool, schema and repositories
//!
//! # Design Principles
//!
//! - The pool is passed explicitly; repositories borrow it per call
//! - Listings use JOINs for show counts (no N+1)
//! - Foreign keys are enforced by the database, not checked up front
//! - Multi-step writes run in one transaction

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::{create_pool, create_pool_with_options};
pub use repos::*;
