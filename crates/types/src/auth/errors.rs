//! Error types for authentication

use thiserror::Error;

/// Errors surfaced by authenticator implementations
#[derive(Error, Debug)]
pub enum AuthError {
	#[error("Authentication service unavailable: {0}")]
	ServiceUnavailable(String),

	#[error("Invalid authentication configuration: {0}")]
	InvalidConfiguration(String),
}
