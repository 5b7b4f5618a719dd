//! Re-verification (compliance monitoring) models

pub mod request;
pub mod response;

pub use request::{BaselineMetrics, ReverificationRequest, ValidatedReverification};
pub use response::{
	AnalysisMetadata, ConfidenceFactors, MetadataDraws, ReverificationOutcome,
	ReverificationResponse,
};

use serde::{Deserialize, Serialize};

/// Why a re-verification was requested.
///
/// The variant drives how aggressive the simulated degradation is.
/// Unrecognized values behave like a scheduled check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReverificationType {
	ThresholdBreach,
	AlertTriggered,
	Manual,
	#[default]
	#[serde(other)]
	Scheduled,
}

/// Categorical severity label derived from the largest simulated percent
/// change across monitored metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComplianceFlag {
	Compliant,
	MinorDegradation,
	SignificantDegradation,
	CriticalDegradation,
}

impl ComplianceFlag {
	/// Fixed thresholds on the max absolute percent change:
	/// >25 critical, >15 significant, >5 minor, else compliant
	pub fn from_max_change(max_change_percent: f64) -> Self {
		if max_change_percent > 25.0 {
			ComplianceFlag::CriticalDegradation
		} else if max_change_percent > 15.0 {
			ComplianceFlag::SignificantDegradation
		} else if max_change_percent > 5.0 {
			ComplianceFlag::MinorDegradation
		} else {
			ComplianceFlag::Compliant
		}
	}

	/// Wire representation of the flag
	pub fn as_str(&self) -> &'static str {
		match self {
			ComplianceFlag::Compliant => "COMPLIANT",
			ComplianceFlag::MinorDegradation => "MINOR_DEGRADATION",
			ComplianceFlag::SignificantDegradation => "SIGNIFICANT_DEGRADATION",
			ComplianceFlag::CriticalDegradation => "CRITICAL_DEGRADATION",
		}
	}
}

impl std::fmt::Display for ComplianceFlag {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn compliance_flag_boundaries() {
		assert_eq!(ComplianceFlag::from_max_change(0.0), ComplianceFlag::Compliant);
		assert_eq!(ComplianceFlag::from_max_change(5.0), ComplianceFlag::Compliant);
		assert_eq!(
			ComplianceFlag::from_max_change(5.01),
			ComplianceFlag::MinorDegradation
		);
		assert_eq!(
			ComplianceFlag::from_max_change(15.0),
			ComplianceFlag::MinorDegradation
		);
		assert_eq!(
			ComplianceFlag::from_max_change(15.01),
			ComplianceFlag::SignificantDegradation
		);
		assert_eq!(
			ComplianceFlag::from_max_change(25.0),
			ComplianceFlag::SignificantDegradation
		);
		assert_eq!(
			ComplianceFlag::from_max_change(25.01),
			ComplianceFlag::CriticalDegradation
		);
	}

	#[test]
	fn reverification_type_wire_format() {
		let parsed: ReverificationType = serde_json::from_str("\"THRESHOLD_BREACH\"").unwrap();
		assert_eq!(parsed, ReverificationType::ThresholdBreach);

		// Unknown values fall back to a scheduled check
		let parsed: ReverificationType = serde_json::from_str("\"AD_HOC\"").unwrap();
		assert_eq!(parsed, ReverificationType::Scheduled);

		let json = serde_json::to_string(&ComplianceFlag::CriticalDegradation).unwrap();
		assert_eq!(json, "\"CRITICAL_DEGRADATION\"");
	}
}
