//! Configurable value types that can load from environment variables or plain values

use mrv_types::SecretString;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A configurable value that can be loaded from an environment variable or
/// used as plain text
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ConfigurableValue {
	/// Type of value: "env" for environment variable, "plain" for direct value
	#[serde(rename = "type")]
	pub value_type: ValueType,
	/// The value: either environment variable name or the actual value
	pub value: String,
}

/// Type of configurable value
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
	/// Load value from environment variable (name specified in `value` field)
	Env,
	/// Use the value directly from the `value` field
	Plain,
}

impl ConfigurableValue {
	/// Create a new environment variable reference
	pub fn from_env(env_var_name: &str) -> Self {
		Self {
			value_type: ValueType::Env,
			value: env_var_name.to_string(),
		}
	}

	/// Create a new plain value
	pub fn from_plain(plain_value: &str) -> Self {
		Self {
			value_type: ValueType::Plain,
			value: plain_value.to_string(),
		}
	}

	/// Resolve the actual value based on the type.
	///
	/// For `Env` type, reads from environment variable.
	/// For `Plain` type, returns the value directly.
	pub fn resolve(&self) -> Result<String, ConfigurableValueError> {
		match self.value_type {
			ValueType::Env => std::env::var(&self.value).map_err(|_| {
				ConfigurableValueError::EnvironmentVariableNotFound(self.value.clone())
			}),
			ValueType::Plain => Ok(self.value.clone()),
		}
	}

	/// Resolve the value wrapped in a [`SecretString`] for secure handling
	pub fn resolve_for_secret(&self) -> Result<SecretString, ConfigurableValueError> {
		let resolved_value = self.resolve()?;
		Ok(SecretString::from(resolved_value))
	}

	/// Whether this configuration carries the secret inline
	pub fn is_insecure_default(&self) -> bool {
		matches!(self.value_type, ValueType::Plain)
	}

	/// Get a description of this configurable value for logging
	pub fn description(&self) -> String {
		match self.value_type {
			ValueType::Env => format!("environment variable '{}'", self.value),
			ValueType::Plain => "configured plain value".to_string(),
		}
	}
}

/// Errors that can occur when resolving configurable values
#[derive(Debug, thiserror::Error)]
pub enum ConfigurableValueError {
	#[error("Environment variable '{0}' not found")]
	EnvironmentVariableNotFound(String),
}

// Custom Display implementation to avoid showing sensitive data in logs
impl fmt::Display for ConfigurableValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.value_type {
			ValueType::Env => write!(f, "env:{}", self.value),
			ValueType::Plain => write!(f, "plain:[REDACTED]"),
		}
	}
}

/// Helper conversion from strings in config: `env:NAME` references an
/// environment variable, anything else is a plain value
impl From<&str> for ConfigurableValue {
	fn from(value: &str) -> Self {
		if let Some(env_var) = value.strip_prefix("env:") {
			Self::from_env(env_var)
		} else {
			Self::from_plain(value)
		}
	}
}

impl From<String> for ConfigurableValue {
	fn from(value: String) -> Self {
		ConfigurableValue::from(value.as_str())
	}
}
