//! HTML page handlers: home, episode listing, episode detail, about,
//! popular, plus the newsletter form target and the catch-all 404.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Form;
use serde::Deserialize;

use notes_catalog::query::{self, Podium};

use crate::error::AppError;
use crate::newsletter::{self, SubscribeRequest};
use crate::render;
use crate::state::AppState;

/// `?q=` free-text query and `?tags=` comma-separated tag selection, both
/// optional.  Shared by the listing page and the episodes API.
#[derive(Debug, Deserialize, Default)]
pub struct ListingParams {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub tags: Option<String>,
}

impl ListingParams {
    pub fn query(&self) -> &str {
        self.q.as_deref().unwrap_or("")
    }

    pub fn selected_tags(&self) -> Vec<String> {
        self.tags
            .as_deref()
            .unwrap_or("")
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    }
}

pub async fn home(State(state): State<AppState>) -> Html<String> {
    Html(render::home_page(&state.catalog))
}

pub async fn episodes(
    State(state): State<AppState>,
    Query(params): Query<ListingParams>,
) -> Html<String> {
    let selected = params.selected_tags();
    let results = query::filter(state.catalog.episodes(), params.query(), &selected);
    Html(render::episodes_page(
        &state.catalog,
        params.query(),
        &selected,
        &results,
    ))
}

pub async fn episode_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    match state.catalog.get(&id) {
        Some(ep) => Html(render::episode_page(ep)).into_response(),
        None => AppError::EpisodeNotFound.into_response(),
    }
}

pub async fn about() -> Html<String> {
    Html(render::about_page())
}

pub async fn popular(State(state): State<AppState>) -> Html<String> {
    let podium = Podium::from_episodes(state.catalog.episodes());
    Html(render::popular_page(&podium))
}

pub async fn subscribe(
    State(state): State<AppState>,
    Form(req): Form<SubscribeRequest>,
) -> Result<Html<String>, AppError> {
    let email = newsletter::subscribe(&state, &req.email).await?;
    Ok(Html(render::newsletter_confirmed_page(&email)))
}

/// Fallback for routes outside the page set.
pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Html(render::not_found_page(
            "Page Not Found",
            "The page you're looking for doesn't exist.",
        )),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_tags_parsing() {
        let params = ListingParams {
            q: None,
            tags: Some("Startups, Culture,,  ,Art".to_string()),
        };
        assert_eq!(params.selected_tags(), ["Startups", "Culture", "Art"]);

        let params = ListingParams::default();
        assert!(params.selected_tags().is_empty());
        assert_eq!(params.query(), "");
    }
}
