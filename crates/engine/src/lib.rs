//! MRV Analysis Engine
//!
//! The `AnalysisEngine` trait is the seam where a real inference pipeline
//! will eventually plug in. The only implementation today is
//! [`SyntheticAnalysisEngine`], which produces table-driven randomized
//! results standing in for satellite-imagery analysis.

pub mod degradation;
pub mod latency;
pub mod synthetic;

pub use latency::LatencySimulator;
pub use synthetic::SyntheticAnalysisEngine;

use async_trait::async_trait;
use thiserror::Error;

use mrv_types::{
	AnalysisResult, BaselineMetrics, MetadataDraws, ProjectType, ReverificationOutcome,
	ReverificationType,
};

pub type EngineResult<T> = Result<T, EngineError>;

/// Errors surfaced by analysis engines.
///
/// The synthetic engine has essentially no failure modes beyond malformed
/// numeric input and a poisoned random source; a real model will extend this.
#[derive(Error, Debug)]
pub enum EngineError {
	#[error("invalid analysis input: {reason}")]
	InvalidInput { reason: String },

	#[error("random source unavailable")]
	RngUnavailable,
}

impl EngineError {
	/// Stable error category name reported in failure responses
	pub fn kind(&self) -> &'static str {
		match self {
			EngineError::InvalidInput { .. } => "InvalidInput",
			EngineError::RngUnavailable => "RngUnavailable",
		}
	}
}

/// Capability contract for project analysis.
///
/// Implementations must be safe to share across concurrent requests.
#[async_trait]
pub trait AnalysisEngine: Send + Sync + std::fmt::Debug {
	/// Produce a full analysis for one project
	async fn analyze(
		&self,
		project_type: ProjectType,
		area_hectares: f64,
	) -> EngineResult<AnalysisResult>;

	/// Overall confidence score for a verification, in [0.7, 0.95]
	async fn confidence_score(&self) -> EngineResult<f64>;

	/// Run the degradation simulation against baseline metrics
	async fn simulate_reverification(
		&self,
		baselines: BaselineMetrics,
		kind: ReverificationType,
	) -> EngineResult<ReverificationOutcome>;

	/// Randomized metadata fields for a compliance report
	async fn reverification_metadata(&self) -> EngineResult<MetadataDraws>;

	/// Mocked pending-work depth reported by the metrics endpoint
	async fn queue_length(&self) -> EngineResult<u32>;

	/// Get human-readable name for this engine
	fn name(&self) -> &str;
}

/// Round to `places` decimal places, matching how response values are
/// presented on the wire
pub fn round_to(value: f64, places: u32) -> f64 {
	let factor = 10f64.powi(places as i32);
	(value * factor).round() / factor
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn round_to_matches_presentation_precision() {
		assert_eq!(round_to(0.123456, 4), 0.1235);
		assert_eq!(round_to(153.4567, 2), 153.46);
		assert_eq!(round_to(19.95, 1), 20.0);
		assert_eq!(round_to(-3.14159, 2), -3.14);
	}
}
