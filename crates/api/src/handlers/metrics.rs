//! Service metrics endpoint

use axum::{extract::State, response::Json};
use chrono::Utc;
use serde::Serialize;
use tracing::warn;

use mrv_engine::round_to;

use crate::state::AppState;

/// Response body for GET /metrics
#[derive(Debug, Serialize)]
pub struct MetricsResponse {
	pub total_verifications: u64,
	pub successful_verifications: u64,
	pub failed_verifications: u64,
	pub success_rate: f64,
	pub average_processing_time_seconds: f64,
	pub uptime_seconds: f64,
	pub model_version: String,
	pub processing_node_id: String,
	pub queue_length: u32,
	pub last_updated: String,
}

/// GET /metrics (bearer auth enforced by route middleware)
pub async fn metrics(State(state): State<AppState>) -> Json<MetricsResponse> {
	let snapshot = state.counters.snapshot();

	// The queue depth is advisory; a broken engine should not take the
	// metrics endpoint down with it.
	let queue_length = match state.engine.queue_length().await {
		Ok(depth) => depth,
		Err(e) => {
			warn!("Queue length unavailable: {e}");
			0
		},
	};

	Json(MetricsResponse {
		total_verifications: snapshot.total_verifications,
		successful_verifications: snapshot.successful_verifications,
		failed_verifications: snapshot.failed_verifications,
		success_rate: round_to(snapshot.success_rate, 4),
		average_processing_time_seconds: round_to(snapshot.average_processing_time_seconds, 2),
		uptime_seconds: round_to(snapshot.uptime_seconds, 2),
		model_version: state.model.version.clone(),
		processing_node_id: state.model.processing_node_id.clone(),
		queue_length,
		last_updated: Utc::now().to_rfc3339(),
	})
}
