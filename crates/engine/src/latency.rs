//! Simulated processing latency
//!
//! The original pipeline this service stands in for spends seconds per
//! request on imagery analysis. The simulator reproduces that pacing with
//! async sleeps so handlers stay suspendable, and can be switched off
//! entirely for test suites.

use std::time::Duration;

use rand::Rng;
use tracing::trace;

use mrv_config::{LatencyRange, SimulationSettings};

/// Injectable artificial-delay source shared across handlers
#[derive(Debug, Clone)]
pub struct LatencySimulator {
	enabled: bool,
	verify: LatencyRange,
	batch_item: LatencyRange,
	reverify: LatencyRange,
}

impl LatencySimulator {
	pub fn from_settings(simulation: &SimulationSettings) -> Self {
		Self {
			enabled: simulation.latency_enabled,
			verify: simulation.verify_latency,
			batch_item: simulation.batch_item_latency,
			reverify: simulation.reverify_latency,
		}
	}

	/// Simulator that never sleeps, for tests
	pub fn disabled() -> Self {
		Self {
			enabled: false,
			verify: LatencyRange {
				min_seconds: 0.0,
				max_seconds: 0.0,
			},
			batch_item: LatencyRange {
				min_seconds: 0.0,
				max_seconds: 0.0,
			},
			reverify: LatencyRange {
				min_seconds: 0.0,
				max_seconds: 0.0,
			},
		}
	}

	/// Delay for a single-project verification
	pub async fn verify_delay(&self) {
		self.delay(self.verify).await;
	}

	/// Delay for one item inside a batch
	pub async fn batch_item_delay(&self) {
		self.delay(self.batch_item).await;
	}

	/// Delay for a re-verification (heavier simulated processing)
	pub async fn reverify_delay(&self) {
		self.delay(self.reverify).await;
	}

	async fn delay(&self, range: LatencyRange) {
		if !self.enabled || range.max_seconds <= 0.0 {
			return;
		}
		let seconds = rand::rng().random_range(range.min_seconds..=range.max_seconds);
		trace!(seconds, "simulating processing latency");
		tokio::time::sleep(Duration::from_secs_f64(seconds)).await;
	}
}
