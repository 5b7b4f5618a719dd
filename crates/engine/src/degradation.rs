//! Degradation simulation for re-verification
//!
//! Drawing the degradation fractions is separated from applying them so the
//! threshold behavior can be tested with fixed inputs.

use rand::Rng;

use mrv_types::{BaselineMetrics, ComplianceFlag, ReverificationOutcome, ReverificationType};

use crate::round_to;

/// Minimum NDVI a simulated project can degrade to
const MIN_NDVI: f64 = 0.1;
/// Minimum annual CO2 tons a simulated project can degrade to
const MIN_CO2_TONS: f64 = 10.0;
/// Minimum area in hectares a simulated project can degrade to
const MIN_AREA_HECTARES: f64 = 1.0;

/// Fractional decline per monitored metric, in [0, 1)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DegradationFractions {
	pub ndvi: f64,
	pub co2: f64,
	pub area: f64,
}

/// Draw degradation fractions conditioned on why the re-verification ran.
///
/// Every scenario starts from baseline noise; breach and alert scenarios add
/// progressively larger extra draws, and manual checks add a large draw with
/// 30% probability.
pub fn draw_degradation<R: Rng + ?Sized>(
	rng: &mut R,
	kind: ReverificationType,
) -> DegradationFractions {
	let mut fractions = DegradationFractions {
		ndvi: rng.random_range(0.0..0.10),
		co2: rng.random_range(0.0..0.08),
		area: rng.random_range(0.0..0.05),
	};

	match kind {
		ReverificationType::ThresholdBreach => {
			fractions.ndvi += rng.random_range(0.0..0.15);
			fractions.co2 += rng.random_range(0.0..0.12);
			fractions.area += rng.random_range(0.0..0.08);
		},
		ReverificationType::AlertTriggered => {
			fractions.ndvi += rng.random_range(0.0..0.08);
			fractions.co2 += rng.random_range(0.0..0.06);
			fractions.area += rng.random_range(0.0..0.04);
		},
		ReverificationType::Manual => {
			if rng.random::<f64>() > 0.7 {
				fractions.ndvi += rng.random_range(0.0..0.12);
				fractions.co2 += rng.random_range(0.0..0.10);
				fractions.area += rng.random_range(0.0..0.06);
			}
		},
		ReverificationType::Scheduled => {},
	}

	fractions
}

/// Apply degradation fractions to the baselines and derive the compliance
/// outcome. Deterministic given its inputs.
pub fn apply_degradation(
	baselines: BaselineMetrics,
	fractions: &DegradationFractions,
) -> ReverificationOutcome {
	let current_ndvi = (baselines.ndvi * (1.0 - fractions.ndvi)).max(MIN_NDVI);
	let current_co2_tons = (baselines.co2_tons * (1.0 - fractions.co2)).max(MIN_CO2_TONS);
	let current_area_hectares =
		(baselines.area_hectares * (1.0 - fractions.area)).max(MIN_AREA_HECTARES);

	let ndvi_change_percent = (current_ndvi - baselines.ndvi) / baselines.ndvi * 100.0;
	let co2_change_percent = (current_co2_tons - baselines.co2_tons) / baselines.co2_tons * 100.0;
	let area_change_percent =
		(current_area_hectares - baselines.area_hectares) / baselines.area_hectares * 100.0;

	let max_change = ndvi_change_percent
		.abs()
		.max(co2_change_percent.abs())
		.max(area_change_percent.abs());

	ReverificationOutcome {
		current_ndvi: round_to(current_ndvi, 4),
		current_co2_tons: round_to(current_co2_tons, 2),
		current_area_hectares: round_to(current_area_hectares, 2),
		ndvi_change_percent: round_to(ndvi_change_percent, 2),
		co2_change_percent: round_to(co2_change_percent, 2),
		area_change_percent: round_to(area_change_percent, 2),
		compliance_flag: ComplianceFlag::from_max_change(max_change),
		confidence_score: round_to((0.95 - max_change / 100.0).max(0.5), 4),
	}
}
