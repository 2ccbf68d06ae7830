//! # HTTP Resource API
//!
//! Thin axum adapter exposing the post store over HTTP: list, fetch,
//! create, update, delete. Each request performs a single store operation;
//! there is no state beyond the store handle.

pub mod errors;
pub mod routes;
pub mod server;

pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use routes::{health_routes, post_routes, AppState};
pub use server::{HttpServer, ServerHandle};
