//! Service startup logging for the BlueCarbon MRV service
//!
//! Logs service identity, environment details, and system information when
//! the process comes up.

use std::env;
use tracing::info;

use crate::Settings;

/// Logs comprehensive service information at startup
pub fn log_service_info(settings: &Settings) {
	let service_name = "bluecarbon-mrv";
	let service_version = env!("CARGO_PKG_VERSION");

	info!("=== BlueCarbon MRV Service Starting ===");
	info!("🚀 Service: {} v{}", service_name, service_version);
	info!("🧠 Model version: {}", settings.model.version);
	info!("🛰️ Processing node: {}", settings.model.processing_node_id);

	info!("💻 Platform: {}", env::consts::OS);
	info!("🏗️ Architecture: {}", env::consts::ARCH);

	if let Ok(cwd) = env::current_dir() {
		info!("📁 Working Directory: {}", cwd.display());
	}

	if let Ok(rust_log) = env::var("RUST_LOG") {
		info!("🔧 Log Level: {}", rust_log);
	}

	info!(
		"🔑 Service key source: {}",
		settings.auth.service_key.description()
	);
	if !settings.simulation.latency_enabled {
		info!("⏱️ Latency simulation disabled");
	}

	info!(
		"🕒 Started at: {}",
		chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
	);
}

/// Logs service shutdown information
pub fn log_service_shutdown() {
	info!("🛑 BlueCarbon MRV Service Shutting Down");
	info!(
		"🕒 Shutdown at: {}",
		chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
	);
}

/// Logs additional startup completion information
pub fn log_startup_complete(bind_address: &str) {
	info!("✅ BlueCarbon MRV Service Started Successfully");
	info!("🌐 Server listening on: {}", bind_address);
	info!("📡 Ready to receive AI verification requests");
}
