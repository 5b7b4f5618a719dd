//! BlueCarbon MRV Service Library
//!
//! HTTP verification service for blue-carbon restoration projects. Exposes
//! single, batch, and compliance re-verification endpoints backed by a
//! pluggable analysis engine; the default engine produces synthetic
//! satellite-analysis results until a real model is integrated.

// Core domain types - the most commonly used types
pub use mrv_types::{
	chrono,
	// External dependencies for convenience
	serde_json,
	// Analysis models
	AnalysisResult,
	AuthRequest,
	// Auth traits
	Authenticator,
	BaselineMetrics,
	BatchVerificationRequest,
	BatchVerificationResponse,
	ComplianceFlag,
	CountersSnapshot,
	// Primary domain entities
	ProjectType,
	ReverificationRequest,
	ReverificationResponse,
	ReverificationType,
	SecretString,
	ServiceCounters,
	// Error types
	ValidationError,
	VerificationRequest,
	VerificationResponse,
};

// Engine layer
pub use mrv_engine::{AnalysisEngine, EngineError, LatencySimulator, SyntheticAnalysisEngine};

// API layer
pub use mrv_api::{create_router, AppState, ModelContext};
// Re-export auth implementations for convenience
pub use mrv_api::auth::{BearerTokenAuthenticator, NoAuthenticator};

// Config
pub use mrv_config::{
	load_config, log_service_info, log_service_shutdown, log_startup_complete, Settings,
};

// Module aliases for direct access to each layer
pub mod models {
	pub use mrv_types::*;
}

pub mod config {
	pub use mrv_config::*;
}

pub mod engine {
	pub use mrv_engine::*;
}

pub mod api {
	pub use mrv_api::*;
}

use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

/// Builder pattern for configuring the MRV service
#[derive(Default)]
pub struct MrvServiceBuilder {
	settings: Option<Settings>,
	engine: Option<Arc<dyn AnalysisEngine>>,
	authenticator: Option<Arc<dyn Authenticator>>,
}

impl MrvServiceBuilder {
	/// Create a new builder with the default synthetic engine and bearer auth
	pub fn new() -> Self {
		Self::default()
	}

	/// Set custom settings
	pub fn with_settings(mut self, settings: Settings) -> Self {
		self.settings = Some(settings);
		self
	}

	/// Plug in a different analysis engine (e.g. a real inference backend)
	pub fn with_engine(mut self, engine: Arc<dyn AnalysisEngine>) -> Self {
		self.engine = Some(engine);
		self
	}

	/// Set custom authenticator
	pub fn with_authenticator(mut self, authenticator: Arc<dyn Authenticator>) -> Self {
		self.authenticator = Some(authenticator);
		self
	}

	/// Get the current settings
	pub fn settings(&self) -> Option<&Settings> {
		self.settings.as_ref()
	}

	/// Initialize tracing with configuration-based settings
	fn init_tracing_from_settings(
		&self,
		settings: &Settings,
	) -> Result<(), Box<dyn std::error::Error>> {
		use mrv_config::LogFormat;

		// Create env filter using config level or environment variable
		let log_level = &settings.logging.level;
		let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
			.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

		// Initialize tracing with the configuration
		match settings.logging.format {
			LogFormat::Json => {
				let subscriber = tracing_subscriber::fmt().json().with_env_filter(env_filter);

				if settings.logging.structured {
					subscriber.with_target(true).with_thread_ids(true).init();
				} else {
					subscriber.init();
				}
			},
			LogFormat::Pretty => {
				let subscriber = tracing_subscriber::fmt()
					.pretty()
					.with_env_filter(env_filter);

				if settings.logging.structured {
					subscriber.with_target(true).with_thread_ids(true).init();
				} else {
					subscriber.init();
				}
			},
			LogFormat::Compact => {
				let subscriber = tracing_subscriber::fmt()
					.compact()
					.with_env_filter(env_filter);

				if settings.logging.structured {
					subscriber.with_target(true).with_thread_ids(true).init();
				} else {
					subscriber.init();
				}
			},
		}

		info!(
			"Logging configuration applied: level={}, format={:?}, structured={}",
			settings.logging.level, settings.logging.format, settings.logging.structured
		);

		Ok(())
	}

	/// Assemble application state and return the configured router with it
	pub async fn start(self) -> Result<(axum::Router, AppState), Box<dyn std::error::Error>> {
		let settings = self.settings.clone().unwrap_or_default();

		let engine = self.engine.unwrap_or_else(|| {
			Arc::new(SyntheticAnalysisEngine::from_settings(&settings.simulation))
		});
		let authenticator = self.authenticator.unwrap_or_else(|| {
			Arc::new(BearerTokenAuthenticator::new(settings.service_key_secure()))
		});

		info!(
			"Using engine '{}' with authenticator '{}'",
			engine.name(),
			authenticator.name()
		);

		// Create application state
		let app_state = AppState {
			engine,
			authenticator,
			counters: Arc::new(ServiceCounters::new()),
			latency: Arc::new(LatencySimulator::from_settings(&settings.simulation)),
			model: Arc::new(ModelContext {
				version: settings.model.version.clone(),
				processing_node_id: settings.model.processing_node_id.clone(),
				report_base_url: settings.model.report_base_url.clone(),
			}),
		};

		// Create router with state
		let router = create_router(app_state.clone());

		Ok((router, app_state))
	}

	/// Start the complete server with all defaults and setup
	/// This method handles everything needed to run the server, including:
	/// - Loading .env file
	/// - Loading configuration with defaults
	/// - Initializing tracing
	/// - Binding and serving the application
	pub async fn start_server(mut self) -> Result<(), Box<dyn std::error::Error>> {
		// Load .env file if it exists
		dotenvy::dotenv().ok();

		// Use provided settings or load from config with defaults
		let using_provided_settings = self.settings.is_some();
		let settings = if let Some(settings) = self.settings.take() {
			settings
		} else {
			load_config().unwrap_or_default()
		};

		// Initialize tracing with configuration-based settings
		self.init_tracing_from_settings(&settings)?;

		// Log comprehensive service startup information
		log_service_info(&settings);

		info!(
			"Using configuration: loaded from {}",
			if using_provided_settings {
				"provided settings"
			} else {
				"config file or defaults"
			}
		);

		// Parse bind address
		let bind_addr = settings.bind_address();
		let addr: SocketAddr = bind_addr
			.parse()
			.map_err(|e| format!("Invalid bind address '{}': {}", bind_addr, e))?;

		// Ensure we have proper configuration in the builder
		self.settings = Some(settings);

		// Create the router using the builder pattern
		let (app, _) = self.start().await?;

		// Start the server
		let listener = tokio::net::TcpListener::bind(addr).await?;

		// Log startup completion with comprehensive information
		log_startup_complete(&bind_addr);
		info!("API endpoints available:");
		info!("  GET  /health");
		info!("  GET  /metrics");
		info!("  POST /api/mrv/verify");
		info!("  POST /api/mrv/batch-verify");
		info!("  POST /api/mrv/reverify");
		info!("  GET  /api/mrv/model-info");

		axum::serve(listener, app).await?;

		log_service_shutdown();

		Ok(())
	}
}
