//! Single-project verification endpoint

use std::time::Instant;

use axum::{
	extract::{rejection::JsonRejection, State},
	response::{IntoResponse, Json, Response},
};
use chrono::Utc;
use tracing::{error, info};
use uuid::Uuid;

use mrv_engine::round_to;
use mrv_types::{VerificationRequest, VerificationResponse};

use crate::handlers::common::{bad_request, internal_error};
use crate::state::AppState;

/// POST /api/mrv/verify
///
/// Counter discipline: `total_verifications` is bumped only after the body
/// passes validation, so malformed requests never show up in the metrics.
pub async fn verify(
	State(state): State<AppState>,
	payload: Result<Json<VerificationRequest>, JsonRejection>,
) -> Response {
	let Ok(Json(request)) = payload else {
		return bad_request("No project data provided");
	};

	let validated = match request.validate() {
		Ok(validated) => validated,
		Err(e) => return bad_request(e.to_string()),
	};

	info!(
		"Starting AI verification for project: {}",
		validated.project_id
	);
	state.counters.record_started();

	let started = Instant::now();
	state.latency.verify_delay().await;

	let analysis = match state.engine.analyze(validated.project_type, validated.area_hectares).await
	{
		Ok(analysis) => analysis,
		Err(e) => {
			state.counters.record_failure();
			error!("AI verification failed: {e}");
			return internal_error(format!("AI verification failed: {e}"), e.kind());
		},
	};
	let confidence_score = match state.engine.confidence_score().await {
		Ok(score) => score,
		Err(e) => {
			state.counters.record_failure();
			error!("AI verification failed: {e}");
			return internal_error(format!("AI verification failed: {e}"), e.kind());
		},
	};

	let elapsed = started.elapsed();
	state.counters.record_success(elapsed);

	let now = Utc::now();
	let unix_seconds = now.timestamp();
	let mrv_id = format!(
		"mrv-{}-{}",
		unix_seconds,
		&Uuid::new_v4().to_string()[..8]
	);
	let report_url = format!(
		"{}/{}/mrv-report-{}.pdf",
		state.model.report_base_url, validated.project_id, unix_seconds
	);

	info!(
		"AI verification completed for project: {}, confidence: {:.4}",
		validated.project_id, confidence_score
	);

	Json(VerificationResponse {
		success: true,
		mrv_id,
		confidence_score,
		estimated_co2_tons: analysis.carbon_sequestration.estimated_annual_co2_tons,
		verified_area_hectares: validated.area_hectares,
		report_url,
		analysis_result: analysis,
		processing_time_seconds: round_to(elapsed.as_secs_f64(), 2),
		model_version: state.model.version.clone(),
		processing_node_id: state.model.processing_node_id.clone(),
		timestamp: now.to_rfc3339(),
	})
	.into_response()
}
