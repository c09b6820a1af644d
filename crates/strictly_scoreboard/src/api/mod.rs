//! REST API.
//!
//! Axum router over [`MatchService`]: create a match, score points, look a
//! match up and browse completed matches.

mod error;
mod extract;
mod handlers;
mod views;

pub use error::{ApiError, ErrorDetail, ErrorResponse};
pub use extract::{ApiForm, ApiJson, ApiQuery};
pub use views::{CreateMatchRequest, ListMatchesParams, MatchView, SideView};

use crate::service::MatchService;
use axum::{
    Router,
    extract::Request,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tracing::info;

/// Shared handler state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Match operations.
    pub service: MatchService,
}

impl AppState {
    /// Wraps a service.
    pub fn new(service: MatchService) -> Self {
        Self { service }
    }
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/matches",
            get(handlers::list_matches).post(handlers::create_match),
        )
        .route("/matches/{id}", get(handlers::get_match))
        .route("/matches/{id}/points", post(handlers::add_point))
        .layer(ServiceBuilder::new().map_request(|req: Request| {
            info!(method = %req.method(), uri = %req.uri(), "Incoming HTTP request");
            req
        }))
        .with_state(state)
}
