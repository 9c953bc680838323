//! HTTP API for AdScope.
//!
//! Thin Axum handlers over the repositories and tasks; every response
//! uses the `{ "success": ..., "data": ... }` envelope, and errors map
//! through [`error::ApiError`].

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
