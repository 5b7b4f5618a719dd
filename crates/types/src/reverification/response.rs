//! Re-verification response models

use serde::{Deserialize, Serialize};

use super::ComplianceFlag;

/// What the degradation simulation produced, before the handler wraps it in
/// the full HTTP response
#[derive(Debug, Clone, PartialEq)]
pub struct ReverificationOutcome {
	pub current_ndvi: f64,
	pub current_co2_tons: f64,
	pub current_area_hectares: f64,
	pub ndvi_change_percent: f64,
	pub co2_change_percent: f64,
	pub area_change_percent: f64,
	pub compliance_flag: ComplianceFlag,
	pub confidence_score: f64,
}

/// Per-factor confidence sub-scores attached to a compliance report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfidenceFactors {
	pub data_quality: f64,
	pub temporal_consistency: f64,
	pub spatial_accuracy: f64,
	pub model_certainty: f64,
}

/// Randomized metadata fields the engine draws for a compliance report.
///
/// The handler combines these with static configuration (model version,
/// node id) to build the full [`AnalysisMetadata`].
#[derive(Debug, Clone)]
pub struct MetadataDraws {
	/// ISO dates within the last 90 days, most recent first
	pub image_dates: Vec<String>,
	pub cloud_coverage_percent: f64,
	pub data_quality: f64,
	pub temporal_consistency: f64,
	pub spatial_accuracy: f64,
}

/// Provenance block attached to a re-verification response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisMetadata {
	pub model_version: String,
	pub satellite_data_sources: Vec<String>,
	pub image_dates: Vec<String>,
	pub cloud_coverage_percent: f64,
	pub resolution_meters: u32,
	pub algorithms_used: Vec<String>,
	pub quality_checks_passed: bool,
	pub processing_node_id: String,
	pub confidence_factors: ConfidenceFactors,
}

/// Successful response body for POST /api/mrv/reverify
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReverificationResponse {
	pub success: bool,
	pub project_id: String,
	pub current_ndvi: f64,
	pub current_co2_tons: f64,
	pub current_area_hectares: f64,
	pub ai_confidence_score: f64,
	pub compliance_flag: ComplianceFlag,
	pub ndvi_change_percent: f64,
	pub co2_change_percent: f64,
	pub area_change_percent: f64,
	pub analysis_report_url: String,
	pub analysis_metadata: AnalysisMetadata,
	pub satellite_images_used: Vec<String>,
	pub processing_time_seconds: f64,
	pub model_version: String,
	pub timestamp: String,
}
