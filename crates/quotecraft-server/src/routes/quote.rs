//! Quote Routes - Random quote with provider fallback

use axum::{extract::State, response::IntoResponse, routing::get, Json, Router};
use quotecraft::{Quote, GET_QUOTE_PATH};

use crate::AppState;

/// Header naming the source that produced the quote
pub const QUOTE_ORIGIN_HEADER: &str = "x-quote-origin";

/// Fetch a random quote
///
/// Always succeeds: when every provider fails, a local quote is served.
#[utoipa::path(
    get,
    path = "/api/get-quote",
    responses(
        (status = 200, description = "A quote", body = Quote)
    ),
    tag = "Quote"
)]
pub async fn get_quote(State(state): State<AppState>) -> impl IntoResponse {
    let fetched = state.quote_service.random_quote().await;

    tracing::info!("📜 Quote served from {}", fetched.origin);

    (
        [(QUOTE_ORIGIN_HEADER, fetched.origin.to_string())],
        Json::<Quote>(fetched.quote),
    )
}

pub fn router() -> Router<AppState> {
    Router::new().route(GET_QUOTE_PATH, get(get_quote))
}
