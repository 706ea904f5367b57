//! HTTP host for the receiver
//!
//! A push gateway POSTs each message's data to `/messages`; the receiver runs
//! inside the request. Report failures still answer 200.

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info_span, Instrument};
use uuid::Uuid;

use crate::message::PushMessage;
use crate::receiver::{handle_message, DeliveryReporter, ReceiveOutcome};

pub struct AppState {
    pub reporter: Arc<dyn DeliveryReporter>,
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn receive_message(
    State(state): State<Arc<AppState>>,
    Json(message): Json<PushMessage>,
) -> Json<ReceiveOutcome> {
    let span = info_span!("push_message", id = %Uuid::new_v4());
    let outcome = handle_message(state.reporter.as_ref(), &message)
        .instrument(span)
        .await;
    Json(outcome)
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/messages", post(receive_message))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
