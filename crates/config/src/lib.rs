//! MRV Configuration
//!
//! Configuration management and startup utilities for the BlueCarbon MRV
//! verification service.

pub mod configurable_value;
pub mod loader;
pub mod settings;
pub mod startup_logger;

pub use configurable_value::{ConfigurableValue, ConfigurableValueError, ValueType};
pub use loader::load_config;
pub use settings::{
	AuthSettings, EnvironmentProfile, EnvironmentSettings, LatencyRange, LogFormat,
	LoggingSettings, ModelSettings, ServerSettings, Settings, SimulationSettings,
};
pub use startup_logger::{log_service_info, log_service_shutdown, log_startup_complete};
