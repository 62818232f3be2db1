use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::api;
use crate::pages;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    // The API is CORS-open; the pages are same-origin only.
    let api = Router::new()
        .route("/episodes", get(api::list_episodes))
        .route("/episodes/:id", get(api::get_episode))
        .route("/popular", get(api::popular))
        .route("/tags", get(api::tags))
        .route("/newsletter", post(api::subscribe))
        .layer(CorsLayer::permissive());

    Router::new()
        .route("/", get(pages::home))
        .route("/episodes", get(pages::episodes))
        .route("/episode/:id", get(pages::episode_detail))
        .route("/about", get(pages::about))
        .route("/popular", get(pages::popular))
        .route("/newsletter", post(pages::subscribe))
        .nest("/api", api)
        .fallback(pages::not_found)
        .with_state(state)
}
