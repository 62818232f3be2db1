//! JSON API: the same data the pages render, for programmatic use.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Serialize;

use notes_catalog::query::{self, Podium};
use notes_catalog::Episode;

use crate::error::{ApiError, AppError};
use crate::newsletter::{self, SubscribeRequest};
use crate::pages::ListingParams;
use crate::state::AppState;

pub async fn list_episodes(
    State(state): State<AppState>,
    Query(params): Query<ListingParams>,
) -> Json<Vec<Episode>> {
    let selected = params.selected_tags();
    let results = query::filter(state.catalog.episodes(), params.query(), &selected);
    Json(results.into_iter().cloned().collect())
}

pub async fn get_episode(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Episode>, ApiError> {
    state
        .catalog
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or(ApiError(AppError::EpisodeNotFound))
}

/// The three ranking partitions of the popular page.
#[derive(Debug, Serialize)]
pub struct PopularResponse {
    pub top: Option<Episode>,
    pub runner_ups: Vec<Episode>,
    pub rest: Vec<Episode>,
}

pub async fn popular(State(state): State<AppState>) -> Json<PopularResponse> {
    let podium = Podium::from_episodes(state.catalog.episodes());
    Json(PopularResponse {
        top: podium.top.cloned(),
        runner_ups: podium.runner_ups.into_iter().cloned().collect(),
        rest: podium.rest.into_iter().cloned().collect(),
    })
}

pub async fn tags(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(
        state
            .catalog
            .all_tags()
            .into_iter()
            .map(str::to_string)
            .collect(),
    )
}

pub async fn subscribe(
    State(state): State<AppState>,
    Json(req): Json<SubscribeRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let email = newsletter::subscribe(&state, &req.email)
        .await
        .map_err(ApiError::from)?;
    Ok(Json(serde_json::json!({
        "status": "subscribed",
        "email": email,
    })))
}
