use crate::{
    api::{error::ApiError, ws},
    models::{CreatedResponse, NewTransaction},
    service,
    state::AppState,
    validation::{validate_currency, validate_limit, validate_page},
};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

// GET /transactions query parameters
#[derive(Deserialize)]
pub struct ListQuery {
    page: String,
    limit: String,
}

// GET /transactions/rate query parameters
#[derive(Deserialize)]
pub struct RateQuery {
    #[serde(rename = "currencyFrom")]
    currency_from: String,
    #[serde(rename = "type")]
    kind: String,
}

// Create router with all routes
pub fn create_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/transactions", post(create_transaction).get(get_transactions))
        .route("/transactions/rate", get(get_rate))
        .route("/events", get(ws::events_handler))
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

// POST /transactions handler
async fn create_transaction(
    State(state): State<Arc<AppState>>,
    Json(body): Json<NewTransaction>,
) -> Result<Response, ApiError> {
    info!(
        "Recording {} transaction: {} {} -> {}",
        body.kind, body.amount1, body.currency_from, body.currency_to
    );

    let id = service::insert_transaction(&state, body).await?;

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })).into_response())
}

// GET /transactions handler
async fn get_transactions(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListQuery>,
) -> Result<Response, ApiError> {
    let page = validate_page(&params.page)?;
    let limit = validate_limit(&params.limit)?;

    let result = service::get_transactions(&state, page, limit).await?;

    Ok(Json(result).into_response())
}

// GET /transactions/rate handler
async fn get_rate(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RateQuery>,
) -> Result<Response, ApiError> {
    validate_currency("currencyFrom", &params.currency_from)?;
    validate_currency("type", &params.kind)?;

    let transaction = service::find_latest_rate(&state, &params.currency_from, &params.kind).await?;

    Ok(Json(transaction).into_response())
}
