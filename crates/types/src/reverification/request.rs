//! Re-verification request model

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ReverificationType;
use crate::projects::errors::{ValidationError, ValidationResult};
use crate::projects::ProjectType;

/// Default baseline NDVI when the caller does not supply one
pub const DEFAULT_BASELINE_NDVI: f64 = 0.8;
/// Default baseline annual CO2 in tons
pub const DEFAULT_BASELINE_CO2_TONS: f64 = 100.0;
/// Default baseline project area in hectares
pub const DEFAULT_BASELINE_AREA_HECTARES: f64 = 10.0;

/// Baseline measurements the degradation simulation starts from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaselineMetrics {
	pub ndvi: f64,
	pub co2_tons: f64,
	pub area_hectares: f64,
}

/// API request body for POST /api/mrv/reverify
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReverificationRequest {
	pub project_id: Option<String>,
	pub coordinates: Option<Value>,
	pub project_type: Option<ProjectType>,
	pub baseline_ndvi: Option<f64>,
	pub baseline_co2_tons: Option<f64>,
	pub baseline_area_hectares: Option<f64>,
	pub reverification_type: Option<ReverificationType>,
}

/// Presence-checked view of a re-verification request, with defaults applied
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedReverification<'a> {
	pub project_id: &'a str,
	pub baselines: BaselineMetrics,
	pub reverification_type: ReverificationType,
}

impl ReverificationRequest {
	/// Same required-field contract as single verification
	pub fn validate(&self) -> ValidationResult<ValidatedReverification<'_>> {
		let project_id =
			self.project_id
				.as_deref()
				.ok_or(ValidationError::MissingRequiredField {
					field: "project_id",
				})?;
		if self.coordinates.is_none() {
			return Err(ValidationError::MissingRequiredField {
				field: "coordinates",
			});
		}
		if self.project_type.is_none() {
			return Err(ValidationError::MissingRequiredField {
				field: "project_type",
			});
		}

		Ok(ValidatedReverification {
			project_id,
			baselines: self.baselines(),
			reverification_type: self.reverification_type_or_default(),
		})
	}

	/// Baselines with defaults applied
	pub fn baselines(&self) -> BaselineMetrics {
		BaselineMetrics {
			ndvi: self.baseline_ndvi.unwrap_or(DEFAULT_BASELINE_NDVI),
			co2_tons: self.baseline_co2_tons.unwrap_or(DEFAULT_BASELINE_CO2_TONS),
			area_hectares: self
				.baseline_area_hectares
				.unwrap_or(DEFAULT_BASELINE_AREA_HECTARES),
		}
	}

	pub fn reverification_type_or_default(&self) -> ReverificationType {
		self.reverification_type.unwrap_or_default()
	}
}
