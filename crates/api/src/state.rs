use std::sync::Arc;

use mrv_engine::{AnalysisEngine, LatencySimulator};
use mrv_types::{Authenticator, ServiceCounters};

/// Static model identity reported in responses
#[derive(Debug, Clone)]
pub struct ModelContext {
	pub version: String,
	pub processing_node_id: String,
	/// Base URL for synthesized report links
	pub report_base_url: String,
}

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
	pub engine: Arc<dyn AnalysisEngine>,
	pub authenticator: Arc<dyn Authenticator>,
	pub counters: Arc<ServiceCounters>,
	pub latency: Arc<LatencySimulator>,
	pub model: Arc<ModelContext>,
}
