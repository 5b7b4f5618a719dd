//! Synthetic analysis result models
//!
//! Nested value objects produced fresh per request by the analysis engine.
//! Nothing here is ever persisted.

use serde::{Deserialize, Serialize};

/// Categorical vegetation health derived from vegetation density
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthAssessment {
	Excellent,
	Good,
	Fair,
	Poor,
}

impl HealthAssessment {
	/// Fixed thresholds: >0.8 excellent, >0.7 good, >0.5 fair, else poor
	pub fn from_density(density: f64) -> Self {
		if density > 0.8 {
			HealthAssessment::Excellent
		} else if density > 0.7 {
			HealthAssessment::Good
		} else if density > 0.5 {
			HealthAssessment::Fair
		} else {
			HealthAssessment::Poor
		}
	}
}

/// Vegetation coverage section of an analysis result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VegetationCoverage {
	pub total_area_hectares: f64,
	pub vegetation_density: f64,
	pub species_identified: Vec<String>,
	pub health_assessment: HealthAssessment,
}

/// Interval around the annual CO2 estimate (±20%)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfidenceInterval {
	pub lower_bound: f64,
	pub upper_bound: f64,
}

/// Carbon sequestration section of an analysis result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarbonSequestration {
	pub estimated_annual_co2_tons: f64,
	pub sequestration_rate_per_hectare: f64,
	pub confidence_interval: ConfidenceInterval,
}

/// Soil composition fractions, in percent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoilComposition {
	pub organic_matter: f64,
	pub clay: f64,
	pub silt: f64,
	pub sand: f64,
}

/// Environmental factors section of an analysis result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentalFactors {
	pub water_quality_index: f64,
	pub soil_composition: SoilComposition,
	pub biodiversity_score: f64,
	pub threat_assessment: Vec<String>,
}

/// Area and vegetation deltas detected between image dates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeDetection {
	pub area_change_percent: f64,
	pub vegetation_change_percent: f64,
}

/// Satellite imagery summary section of an analysis result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SatelliteAnalysis {
	/// ISO dates, ascending
	pub image_dates: Vec<String>,
	pub resolution_meters: u32,
	pub cloud_coverage_percent: f64,
	pub change_detection: ChangeDetection,
}

/// Full analysis payload returned by the engine for a single project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
	pub vegetation_coverage: VegetationCoverage,
	pub carbon_sequestration: CarbonSequestration,
	pub environmental_factors: EnvironmentalFactors,
	pub satellite_analysis: SatelliteAnalysis,
	pub recommendations: Vec<String>,
	pub limitations: Vec<String>,
}
