pub mod render;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use chrono::Utc;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tracing::debug;

use crate::board::{Board, Filter, Thresholds};
use crate::feed::{load_predictions, FeedError, FeedSource, FEED_ERROR_MESSAGE};
use render::PageContent;

#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn FeedSource>,
    pub thresholds: Thresholds,
    /// Page auto-refresh; `None` leaves the page static.
    pub refresh: Option<Duration>,
}

#[derive(Debug, Default, Deserialize)]
struct BoardQuery {
    filter: Option<Filter>,
}

/// Build the Axum router for the dashboard.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/api/board", get(board_handler))
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(state))
}

/// Fetch the feed and build the view-model with `filter` applied.
pub async fn load_board(
    source: &dyn FeedSource,
    thresholds: &Thresholds,
    filter: Filter,
) -> Result<Board, FeedError> {
    let feed = load_predictions(source).await?;
    let mut board = Board::from_feed(&feed, thresholds);
    board.apply_filter(filter);
    debug!(
        "{} of {} cards visible (filter: {})",
        board.visible_cards().count(),
        board.cards.len(),
        filter
    );
    Ok(board)
}

/// Load the feed and render the full page. Feed failures are contained in
/// the page itself.
pub async fn render_board_page(
    source: &dyn FeedSource,
    thresholds: &Thresholds,
    filter: Filter,
    refresh: Option<Duration>,
) -> String {
    match load_board(source, thresholds, filter).await {
        Ok(board) => render::render_page(PageContent::Loaded(&board), filter, refresh, Utc::now()),
        Err(_) => render::render_page(PageContent::Failed, filter, refresh, Utc::now()),
    }
}

/// GET /?filter=all|high|over|under
async fn index_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<BoardQuery>,
) -> impl IntoResponse {
    let filter = query.filter.unwrap_or_default();
    Html(render_board_page(state.source.as_ref(), &state.thresholds, filter, state.refresh).await)
}

/// GET /api/board?filter=all|high|over|under
async fn board_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<BoardQuery>,
) -> Result<impl IntoResponse, (StatusCode, Json<serde_json::Value>)> {
    let filter = query.filter.unwrap_or_default();
    load_board(state.source.as_ref(), &state.thresholds, filter)
        .await
        .map(Json)
        .map_err(|_| {
            (
                StatusCode::BAD_GATEWAY,
                Json(serde_json::json!({ "error": FEED_ERROR_MESSAGE })),
            )
        })
}
