//! Process-local service counters
//!
//! One `ServiceCounters` instance is created at startup and shared across
//! handlers through application state. Increments use atomics so concurrent
//! requests cannot lose updates. Nothing is persisted; a restart resets
//! everything.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Mutable request counters plus the process start timestamp
#[derive(Debug)]
pub struct ServiceCounters {
	total_verifications: AtomicU64,
	successful_verifications: AtomicU64,
	failed_verifications: AtomicU64,
	/// Accumulated successful processing time, in microseconds
	total_processing_micros: AtomicU64,
	started_at: DateTime<Utc>,
}

impl ServiceCounters {
	pub fn new() -> Self {
		Self {
			total_verifications: AtomicU64::new(0),
			successful_verifications: AtomicU64::new(0),
			failed_verifications: AtomicU64::new(0),
			total_processing_micros: AtomicU64::new(0),
			started_at: Utc::now(),
		}
	}

	/// A verification request passed validation and entered processing
	pub fn record_started(&self) {
		self.total_verifications.fetch_add(1, Ordering::Relaxed);
	}

	/// A batch of `count` items entered processing
	pub fn record_batch_started(&self, count: u64) {
		self.total_verifications.fetch_add(count, Ordering::Relaxed);
	}

	/// A verification completed successfully in `elapsed`
	pub fn record_success(&self, elapsed: Duration) {
		self.successful_verifications.fetch_add(1, Ordering::Relaxed);
		self.total_processing_micros
			.fetch_add(elapsed.as_micros() as u64, Ordering::Relaxed);
	}

	/// A verification failed after entering processing
	pub fn record_failure(&self) {
		self.failed_verifications.fetch_add(1, Ordering::Relaxed);
	}

	pub fn started_at(&self) -> DateTime<Utc> {
		self.started_at
	}

	/// Seconds since process start
	pub fn uptime_seconds(&self) -> f64 {
		let uptime = Utc::now().signed_duration_since(self.started_at);
		uptime.num_milliseconds() as f64 / 1000.0
	}

	/// Consistent point-in-time view for the metrics endpoint
	pub fn snapshot(&self) -> CountersSnapshot {
		let total = self.total_verifications.load(Ordering::Relaxed);
		let successful = self.successful_verifications.load(Ordering::Relaxed);
		let failed = self.failed_verifications.load(Ordering::Relaxed);
		let total_micros = self.total_processing_micros.load(Ordering::Relaxed);

		let success_rate = if total > 0 {
			successful as f64 / total as f64
		} else {
			0.0
		};
		let average_processing_time_seconds = if successful > 0 {
			(total_micros as f64 / 1_000_000.0) / successful as f64
		} else {
			0.0
		};

		CountersSnapshot {
			total_verifications: total,
			successful_verifications: successful,
			failed_verifications: failed,
			success_rate,
			average_processing_time_seconds,
			uptime_seconds: self.uptime_seconds(),
		}
	}
}

impl Default for ServiceCounters {
	fn default() -> Self {
		Self::new()
	}
}

/// Read-only view of the counters with derived rates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountersSnapshot {
	pub total_verifications: u64,
	pub successful_verifications: u64,
	pub failed_verifications: u64,
	pub success_rate: f64,
	pub average_processing_time_seconds: f64,
	pub uptime_seconds: f64,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn snapshot_is_zero_safe() {
		let counters = ServiceCounters::new();
		let snapshot = counters.snapshot();
		assert_eq!(snapshot.total_verifications, 0);
		assert_eq!(snapshot.success_rate, 0.0);
		assert_eq!(snapshot.average_processing_time_seconds, 0.0);
	}

	#[test]
	fn success_rate_and_average_follow_counts() {
		let counters = ServiceCounters::new();
		counters.record_started();
		counters.record_started();
		counters.record_started();
		counters.record_success(Duration::from_secs(2));
		counters.record_success(Duration::from_secs(4));
		counters.record_failure();

		let snapshot = counters.snapshot();
		assert_eq!(snapshot.total_verifications, 3);
		assert_eq!(snapshot.successful_verifications, 2);
		assert_eq!(snapshot.failed_verifications, 1);
		assert!((snapshot.success_rate - 2.0 / 3.0).abs() < 1e-9);
		assert!((snapshot.average_processing_time_seconds - 3.0).abs() < 1e-9);
	}

	#[test]
	fn batch_counts_all_items_toward_total() {
		let counters = ServiceCounters::new();
		counters.record_batch_started(5);
		counters.record_success(Duration::from_secs(1));
		counters.record_failure();
		let snapshot = counters.snapshot();
		assert_eq!(snapshot.total_verifications, 5);
	}
}
