// =============================================================================
// REST API Endpoints - Axum 0.7
// =============================================================================
//
//   GET  /health                   liveness + store size
//   GET  /signals/latest?limit=N   most recent signals first (default N = 20)
//   POST /signals/generate         run the engine once
//                                    200 + signal when one is produced
//                                    204 (empty body) when none is
//   POST /signals/start_scheduler  acknowledgement only; scheduling is external
//
// CORS is configured permissively for local development.
// =============================================================================

use std::sync::Arc;

use axum::{
    extract::{Json, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, info};

use crate::app_state::AppState;

// =============================================================================
// Router construction
// =============================================================================

/// Build the full REST API router with CORS middleware and shared state.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/signals/latest", get(latest_signals))
        .route("/signals/generate", post(generate_signal))
        .route("/signals/start_scheduler", post(start_scheduler))
        .layer(cors)
        .with_state(state)
}

// =============================================================================
// Health
// =============================================================================

async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.health())
}

// =============================================================================
// Signal history
// =============================================================================

#[derive(Deserialize)]
struct LatestQuery {
    limit: Option<usize>,
}

async fn latest_signals(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LatestQuery>,
) -> impl IntoResponse {
    let limit = query
        .limit
        .unwrap_or(state.runtime_config.latest_default_limit);
    Json(state.store.latest(limit))
}

// =============================================================================
// Generation
// =============================================================================

async fn generate_signal(State(state): State<Arc<AppState>>) -> Response {
    match state.generate_and_record() {
        Some(record) => {
            info!(
                id = %record.id,
                symbol = %record.symbol,
                side = %record.side,
                confidence = record.confidence,
                "signal generated"
            );
            Json(record).into_response()
        }
        None => {
            debug!("no signal at this time");
            StatusCode::NO_CONTENT.into_response()
        }
    }
}

// =============================================================================
// Scheduler hook
// =============================================================================

#[derive(Serialize)]
struct SchedulerResponse {
    status: &'static str,
    note: &'static str,
}

async fn start_scheduler() -> impl IntoResponse {
    Json(SchedulerResponse {
        status: "ok",
        note: "Run a scheduler externally to call /signals/generate periodically.",
    })
}

// =============================================================================
// Tests
// =============================================================================
