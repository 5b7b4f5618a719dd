//! Verification request models and validation

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::{ValidationError, ValidationResult};
use super::ProjectType;

/// Default project area when the caller does not supply one
pub const DEFAULT_AREA_HECTARES: f64 = 10.0;

/// Maximum number of projects accepted by the batch endpoint
pub const MAX_BATCH_SIZE: usize = 10;

/// Free-form supplementary data attached to a verification request.
///
/// Only `project_area_hectares` is interpreted; everything else is carried
/// opaquely so callers can round-trip their own annotations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdditionalData {
	pub project_area_hectares: Option<f64>,
	#[serde(flatten)]
	pub extra: serde_json::Map<String, Value>,
}

/// API request body for POST /api/mrv/verify.
///
/// All fields are optional at the serde level so that presence checks can
/// produce a structured error naming the first missing field, rather than a
/// deserializer rejection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VerificationRequest {
	pub project_id: Option<String>,
	/// Opaque geographic payload; shape is not validated
	pub coordinates: Option<Value>,
	pub project_type: Option<ProjectType>,
	pub additional_data: Option<AdditionalData>,
}

/// Presence-checked view of a verification request, with defaults applied
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedVerification<'a> {
	pub project_id: &'a str,
	pub project_type: ProjectType,
	pub area_hectares: f64,
}

impl VerificationRequest {
	/// Check the three required fields, reporting the first one missing.
	pub fn validate(&self) -> ValidationResult<ValidatedVerification<'_>> {
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
		let project_type = self
			.project_type
			.ok_or(ValidationError::MissingRequiredField {
				field: "project_type",
			})?;

		Ok(ValidatedVerification {
			project_id,
			project_type,
			area_hectares: self.area_hectares(),
		})
	}

	/// Area in hectares, defaulting when absent
	pub fn area_hectares(&self) -> f64 {
		self.additional_data
			.as_ref()
			.and_then(|d| d.project_area_hectares)
			.unwrap_or(DEFAULT_AREA_HECTARES)
	}
}

/// API request body for POST /api/mrv/batch-verify
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchVerificationRequest {
	pub projects: Option<Vec<VerificationRequest>>,
}

impl BatchVerificationRequest {
	/// Validate the batch envelope (size limits) without touching items.
	///
	/// Individual items are validated one by one during processing so a bad
	/// item does not abort the batch.
	pub fn validate(&self) -> ValidationResult<&[VerificationRequest]> {
		let projects = self
			.projects
			.as_deref()
			.ok_or(ValidationError::MissingProjects)?;
		if projects.is_empty() {
			return Err(ValidationError::EmptyBatch);
		}
		if projects.len() > MAX_BATCH_SIZE {
			return Err(ValidationError::BatchTooLarge {
				max: MAX_BATCH_SIZE,
			});
		}
		Ok(projects)
	}
}
