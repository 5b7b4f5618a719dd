//! Batch verification endpoint

use std::time::Instant;

use axum::{
	extract::{rejection::JsonRejection, State},
	response::{IntoResponse, Json, Response},
};
use chrono::Utc;
use tracing::info;

use mrv_engine::round_to;
use mrv_types::{
	BatchItemResult, BatchVerificationRequest, BatchVerificationResponse, VerificationRequest,
};

use crate::handlers::common::bad_request;
use crate::state::AppState;

/// POST /api/mrv/batch-verify
///
/// The envelope (presence, size limit) is validated up front; individual
/// projects are validated one by one so a single bad item produces a failed
/// entry instead of aborting the whole batch.
pub async fn batch_verify(
	State(state): State<AppState>,
	payload: Result<Json<BatchVerificationRequest>, JsonRejection>,
) -> Response {
	let Ok(Json(batch)) = payload else {
		return bad_request("No projects data provided");
	};

	let projects = match batch.validate() {
		Ok(projects) => projects.to_vec(),
		Err(e) => return bad_request(e.to_string()),
	};

	info!("Starting batch verification of {} projects", projects.len());

	let mut results = Vec::with_capacity(projects.len());
	for project in &projects {
		results.push(process_item(&state, project).await);
	}
	state.counters.record_batch_started(projects.len() as u64);

	let successful = results.iter().filter(|r| r.is_success()).count();
	let failed = results.len() - successful;

	Json(BatchVerificationResponse {
		success: true,
		total_processed: results.len(),
		successful,
		failed,
		batch_results: results,
		timestamp: Utc::now().to_rfc3339(),
	})
	.into_response()
}

/// Verify one batch item, isolating its failure into the result entry
async fn process_item(state: &AppState, project: &VerificationRequest) -> BatchItemResult {
	let validated = match project.validate() {
		Ok(validated) => validated,
		Err(e) => {
			state.counters.record_failure();
			return BatchItemResult::Failed {
				project_id: project
					.project_id
					.clone()
					.unwrap_or_else(|| "unknown".to_string()),
				success: false,
				error: e.to_string(),
			};
		},
	};

	let started = Instant::now();
	state.latency.batch_item_delay().await;

	let analysis = match state.engine.analyze(validated.project_type, validated.area_hectares).await
	{
		Ok(analysis) => analysis,
		Err(e) => {
			state.counters.record_failure();
			return BatchItemResult::Failed {
				project_id: validated.project_id.to_string(),
				success: false,
				error: e.to_string(),
			};
		},
	};
	let confidence_score = match state.engine.confidence_score().await {
		Ok(score) => score,
		Err(e) => {
			state.counters.record_failure();
			return BatchItemResult::Failed {
				project_id: validated.project_id.to_string(),
				success: false,
				error: e.to_string(),
			};
		},
	};

	let elapsed = started.elapsed();
	state.counters.record_success(elapsed);

	BatchItemResult::Verified {
		project_id: validated.project_id.to_string(),
		success: true,
		confidence_score,
		estimated_co2_tons: analysis.carbon_sequestration.estimated_annual_co2_tons,
		processing_time_seconds: round_to(elapsed.as_secs_f64(), 2),
	}
}
