//! Configuration loading utilities

use crate::Settings;
use config::{Config, ConfigError, File};
use std::env;

/// Load configuration from the optional config file, then apply the
/// well-known environment overrides the deployment scripts set.
pub fn load_config() -> Result<Settings, ConfigError> {
	let s = Config::builder()
		.add_source(File::with_name("config/config").required(false))
		.build()?;

	let mut settings: Settings = s.try_deserialize()?;
	apply_env_overrides(&mut settings);
	Ok(settings)
}

/// Environment variables the deployment scripts set: MODEL_VERSION,
/// PROCESSING_NODE_ID, PORT, MRV_DEBUG. (The service key is handled
/// separately through `ConfigurableValue`.)
fn apply_env_overrides(settings: &mut Settings) {
	if let Ok(version) = env::var("MODEL_VERSION") {
		settings.model.version = version;
	}
	if let Ok(node_id) = env::var("PROCESSING_NODE_ID") {
		settings.model.processing_node_id = node_id;
	}
	if let Ok(port) = env::var("PORT") {
		match port.parse::<u16>() {
			Ok(port) => settings.server.port = port,
			Err(_) => tracing::warn!("Ignoring invalid PORT value: {}", port),
		}
	}
	if let Ok(debug) = env::var("MRV_DEBUG") {
		settings.environment.debug = matches!(debug.as_str(), "1" | "true" | "yes");
	}
}
