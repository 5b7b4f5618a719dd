//! Verification response models

use serde::{Deserialize, Serialize};

use crate::analysis::AnalysisResult;

/// Successful response body for POST /api/mrv/verify
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationResponse {
	pub success: bool,
	pub mrv_id: String,
	pub confidence_score: f64,
	pub estimated_co2_tons: f64,
	pub verified_area_hectares: f64,
	pub report_url: String,
	pub analysis_result: AnalysisResult,
	pub processing_time_seconds: f64,
	pub model_version: String,
	pub processing_node_id: String,
	pub timestamp: String,
}

/// Per-project outcome inside a batch response.
///
/// Failures are isolated per item; a failed entry carries the error message
/// instead of analysis figures.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BatchItemResult {
	Verified {
		project_id: String,
		success: bool,
		confidence_score: f64,
		estimated_co2_tons: f64,
		processing_time_seconds: f64,
	},
	Failed {
		project_id: String,
		success: bool,
		error: String,
	},
}

impl BatchItemResult {
	pub fn is_success(&self) -> bool {
		matches!(self, BatchItemResult::Verified { .. })
	}
}

/// Response body for POST /api/mrv/batch-verify
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchVerificationResponse {
	pub success: bool,
	pub batch_results: Vec<BatchItemResult>,
	pub total_processed: usize,
	pub successful: usize,
	pub failed: usize,
	pub timestamp: String,
}
