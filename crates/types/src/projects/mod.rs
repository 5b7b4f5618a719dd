//! Project verification models
//!
//! Request and response shapes for single and batch verification, plus the
//! closed project-type enumeration that drives the synthetic analysis tables.

pub mod errors;
pub mod request;
pub mod response;

pub use errors::{ValidationError, ValidationResult};
pub use request::{
	AdditionalData, BatchVerificationRequest, ValidatedVerification, VerificationRequest,
};
pub use response::{BatchItemResult, BatchVerificationResponse, VerificationResponse};

use serde::{Deserialize, Serialize};

/// Supported restoration project types.
///
/// The wire form is snake_case. Unrecognized values deserialize to
/// [`ProjectType::Unknown`], which takes fixed fallback values in the
/// analysis tables instead of failing the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectType {
	MangroveRestoration,
	SeagrassConservation,
	SaltMarshRestoration,
	CoastalWetlandProtection,
	BlueCarbonAfforestation,
	#[serde(other)]
	Unknown,
}

impl ProjectType {
	/// All concrete types, in the order they are advertised by model-info.
	pub const ALL: [ProjectType; 5] = [
		ProjectType::MangroveRestoration,
		ProjectType::SeagrassConservation,
		ProjectType::SaltMarshRestoration,
		ProjectType::CoastalWetlandProtection,
		ProjectType::BlueCarbonAfforestation,
	];

	/// snake_case name as it appears on the wire
	pub fn as_str(&self) -> &'static str {
		match self {
			ProjectType::MangroveRestoration => "mangrove_restoration",
			ProjectType::SeagrassConservation => "seagrass_conservation",
			ProjectType::SaltMarshRestoration => "salt_marsh_restoration",
			ProjectType::CoastalWetlandProtection => "coastal_wetland_protection",
			ProjectType::BlueCarbonAfforestation => "blue_carbon_afforestation",
			ProjectType::Unknown => "unknown",
		}
	}
}

impl std::fmt::Display for ProjectType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}
