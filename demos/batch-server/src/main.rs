//! HTTP front for the micro-batching scheduler.
//!
//! Exposes the three routes the scheduler is typically deployed behind:
//!
//! - `POST /health` - liveness probe
//! - `POST /predict_one` - single-item inference, bypassing the batcher
//! - `POST /predict_batch` - batched inference through the scheduler
//!
//! ```bash
//! # Defaults: port 8000, batches of up to 8
//! batch-server
//!
//! # Custom configuration
//! ROBATA_PORT=9000 ROBATA_MAX_BATCH_SIZE=16 batch-server
//! ```

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::post,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use robata::{BatchConfig, BatchInference, Processor};

mod model;
use model::DummyInference;

struct AppState {
    /// Direct handle to the model for the unbatched path
    model: DummyInference,
    batcher: BatchInference<String, String>,
}

#[derive(Deserialize)]
struct PredictRequest {
    data: String,
}

#[derive(Serialize)]
struct PredictResponse {
    result: String,
}

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("batch_server=info,robata=info,tower_http=info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();

    let config = BatchConfig::from_env();
    let port = std::env::var("ROBATA_PORT")
        .ok()
        .and_then(|v| v.parse::<u16>().ok())
        .unwrap_or(8000);

    info!(
        port,
        max_batch_size = config.max_batch_size,
        queue_capacity = ?config.queue_capacity,
        "starting batch server"
    );

    let model = DummyInference::new();
    let state = Arc::new(AppState {
        model: model.clone(),
        batcher: BatchInference::new(model, config),
    });

    let app = Router::new()
        .route("/health", post(health))
        .route("/predict_one", post(predict_one))
        .route("/predict_batch", post(predict_batch))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("bind server address");

    info!("listening on http://{addr}");

    axum::serve(listener, app).await.expect("serve");
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// Runs the model directly on a batch of one, skipping the scheduler.
async fn predict_one(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PredictRequest>,
) -> Result<Json<PredictResponse>, (StatusCode, String)> {
    let mut results = state
        .model
        .process(vec![request.data])
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    match results.pop() {
        Some(result) => Ok(Json(PredictResponse { result })),
        None => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            "model returned no output".to_string(),
        )),
    }
}

/// Submits to the scheduler and suspends until the batch containing this
/// request completes.
async fn predict_batch(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PredictRequest>,
) -> Result<Json<PredictResponse>, (StatusCode, String)> {
    let result = state
        .batcher
        .submit(request.data)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Json(PredictResponse { result }))
}
