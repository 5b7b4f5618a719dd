//! Configuration settings structures

use crate::{configurable_value::ConfigurableValue, ConfigurableValueError};
use mrv_types::SecretString;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Fallback shared secret used when AI_SERVICE_KEY is not set.
/// Matches the development default callers are wired up with.
pub const DEFAULT_SERVICE_KEY: &str = "dev-key-12345";

/// Main application settings
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Settings {
	pub server: ServerSettings,
	pub auth: AuthSettings,
	pub model: ModelSettings,
	pub simulation: SimulationSettings,
	pub environment: EnvironmentSettings,
	pub logging: LoggingSettings,
}

/// Server configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ServerSettings {
	pub host: String,
	pub port: u16,
}

/// Authentication configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct AuthSettings {
	/// Shared secret checked against `Authorization: Bearer <token>`.
	///
	/// Example configurations:
	/// - Environment variable: `{"type": "env", "value": "AI_SERVICE_KEY"}`
	/// - Plain value: `{"type": "plain", "value": "your-secret-here"}`
	pub service_key: ConfigurableValue,
}

/// Model identity reported in responses
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ModelSettings {
	pub version: String,
	pub processing_node_id: String,
	/// Base URL used when synthesizing report links
	pub report_base_url: String,
}

/// Inclusive latency range in whole seconds
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct LatencyRange {
	pub min_seconds: f64,
	pub max_seconds: f64,
}

/// Controls for the synthetic engine and its simulated processing latency
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct SimulationSettings {
	/// Disable to make handlers return immediately (test suites)
	pub latency_enabled: bool,
	/// Fixed RNG seed for deterministic output; None draws from the OS
	pub seed: Option<u64>,
	pub verify_latency: LatencyRange,
	pub batch_item_latency: LatencyRange,
	pub reverify_latency: LatencyRange,
}

/// Environment-specific settings
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct EnvironmentSettings {
	pub profile: EnvironmentProfile,
	pub debug: bool,
}

/// Environment profiles
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum EnvironmentProfile {
	Development,
	Staging,
	Production,
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingSettings {
	pub level: String,
	pub format: LogFormat,
	pub structured: bool,
}

/// Log format options
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	Json,
	Pretty,
	Compact,
}

impl Default for ServerSettings {
	fn default() -> Self {
		Self {
			host: "0.0.0.0".to_string(),
			port: 5000,
		}
	}
}

impl Default for AuthSettings {
	fn default() -> Self {
		Self {
			service_key: ConfigurableValue::from_env("AI_SERVICE_KEY"),
		}
	}
}

impl Default for ModelSettings {
	fn default() -> Self {
		Self {
			version: "placeholder-v1.0.0".to_string(),
			processing_node_id: "node-1".to_string(),
			report_base_url: "https://ai-reports.bluecarbon.com".to_string(),
		}
	}
}

impl Default for SimulationSettings {
	fn default() -> Self {
		Self {
			latency_enabled: true,
			seed: None,
			verify_latency: LatencyRange {
				min_seconds: 2.0,
				max_seconds: 10.0,
			},
			batch_item_latency: LatencyRange {
				min_seconds: 1.0,
				max_seconds: 3.0,
			},
			reverify_latency: LatencyRange {
				min_seconds: 5.0,
				max_seconds: 15.0,
			},
		}
	}
}

impl Default for EnvironmentSettings {
	fn default() -> Self {
		Self {
			profile: EnvironmentProfile::Development,
			debug: false,
		}
	}
}

impl Default for LoggingSettings {
	fn default() -> Self {
		Self {
			level: "info".to_string(),
			format: LogFormat::Pretty,
			structured: false,
		}
	}
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			server: ServerSettings::default(),
			auth: AuthSettings::default(),
			model: ModelSettings::default(),
			simulation: SimulationSettings::default(),
			environment: EnvironmentSettings::default(),
			logging: LoggingSettings::default(),
		}
	}
}

impl Settings {
	/// Get server bind address
	pub fn bind_address(&self) -> String {
		format!("{}:{}", self.server.host, self.server.port)
	}

	/// Check if running in production
	pub fn is_production(&self) -> bool {
		self.environment.profile == EnvironmentProfile::Production
	}

	/// Check if debug mode is enabled
	pub fn is_debug(&self) -> bool {
		self.environment.debug && !self.is_production()
	}

	/// Resolve the shared service key.
	///
	/// Missing configuration falls back to the development default so the
	/// service stays usable out of the box, with a warning in the log.
	pub fn service_key_secure(&self) -> SecretString {
		match self.auth.service_key.resolve_for_secret() {
			Ok(secret) => secret,
			Err(ConfigurableValueError::EnvironmentVariableNotFound(name)) => {
				warn!(
					"Service key {} not set, falling back to the development default",
					name
				);
				SecretString::from(DEFAULT_SERVICE_KEY)
			},
		}
	}
}
