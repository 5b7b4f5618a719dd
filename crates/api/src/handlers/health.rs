//! Liveness endpoint

use axum::{extract::State, response::Json};
use chrono::Utc;
use serde::Serialize;

use mrv_engine::round_to;

use crate::state::AppState;

/// Response body for GET /health
#[derive(Debug, Serialize)]
pub struct HealthResponse {
	pub status: &'static str,
	pub version: String,
	pub uptime_seconds: f64,
	pub processing_node_id: String,
	pub timestamp: String,
}

/// GET /health. No authentication; load balancers poll this.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
	Json(HealthResponse {
		status: "healthy",
		version: state.model.version.clone(),
		uptime_seconds: round_to(state.counters.uptime_seconds(), 2),
		processing_node_id: state.model.processing_node_id.clone(),
		timestamp: Utc::now().to_rfc3339(),
	})
}
