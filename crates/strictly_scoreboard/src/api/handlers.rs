//! Route handlers.

use super::AppState;
use super::error::ApiError;
use super::extract::{ApiForm, ApiJson, ApiQuery};
use super::views::{CreateMatchRequest, ListMatchesParams, MatchView};
use crate::service::CompletedPage;
use crate::validation;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::{Value, json};
use std::collections::HashMap;
use strictly_tennis::MatchId;
use tracing::{debug, instrument};

fn parse_id(raw: &str) -> Result<MatchId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::NotFound(format!("Match not found: {}", raw)))
}

/// `GET /`
pub async fn index(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "matches": state.service.store().len(),
    }))
}

/// `POST /matches`
#[instrument(skip_all)]
pub async fn create_match(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateMatchRequest>,
) -> Result<(StatusCode, Json<MatchView>), ApiError> {
    debug!(player_one = %request.player_one, player_two = %request.player_two, "Create match");
    let tennis_match = state
        .service
        .create_match(&request.player_one, &request.player_two)?;
    Ok((StatusCode::CREATED, Json(MatchView::from(&tennis_match))))
}

/// `GET /matches/{id}`
#[instrument(skip_all)]
pub async fn get_match(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MatchView>, ApiError> {
    debug!(match_id = %id, "Get match");
    let tennis_match = state.service.get_match(parse_id(&id)?).await?;
    Ok(Json(MatchView::from(&tennis_match)))
}

/// `POST /matches/{id}/points`
#[instrument(skip_all)]
pub async fn add_point(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiForm(form): ApiForm<HashMap<String, String>>,
) -> Result<Json<MatchView>, ApiError> {
    debug!(match_id = %id, "Add point");
    let id = parse_id(&id)?;
    let player_number = validation::player_number(&form)
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let tennis_match = state.service.add_point(id, player_number).await?;
    Ok(Json(MatchView::from(&tennis_match)))
}

/// `GET /matches`
#[instrument(skip_all)]
pub async fn list_matches(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ListMatchesParams>,
) -> Json<CompletedPage> {
    debug!(?params, "List completed matches");
    let page = params.page.unwrap_or(validation::MIN_PAGE);
    Json(
        state
            .service
            .completed_matches(page, params.filter_by_player_name.as_deref())
            .await,
    )
}
