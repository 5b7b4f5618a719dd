//! Core authentication trait

use async_trait::async_trait;
use std::collections::HashMap;

use super::errors::AuthError;

/// Authentication outcome for a single request
#[derive(Debug, Clone)]
pub enum AuthenticationResult {
	/// Request carries a valid credential
	Authorized,
	/// Request is rejected, with a reason for the log
	Unauthorized(String),
	/// Authentication intentionally skipped (e.g. a no-op test authenticator)
	Bypassed,
}

/// Authentication request context extracted from an HTTP request
#[derive(Debug, Clone)]
pub struct AuthRequest {
	/// Lowercased header names to values
	pub headers: HashMap<String, String>,
	/// Request path
	pub path: String,
	/// HTTP method
	pub method: String,
}

impl AuthRequest {
	pub fn new(method: String, path: String) -> Self {
		Self {
			headers: HashMap::new(),
			path,
			method,
		}
	}

	/// Add a header (name is lowercased)
	pub fn with_header(mut self, name: &str, value: String) -> Self {
		self.headers.insert(name.to_lowercase(), value);
		self
	}

	/// Bearer token from the Authorization header, if present and well-formed
	pub fn bearer_token(&self) -> Option<&str> {
		self.headers
			.get("authorization")?
			.strip_prefix("Bearer ")
			.filter(|token| !token.is_empty())
	}
}

/// Core authentication trait for custom auth implementations
#[async_trait]
pub trait Authenticator: Send + Sync + std::fmt::Debug {
	/// Authenticate a request
	async fn authenticate(&self, request: &AuthRequest) -> AuthenticationResult;

	/// Health check for auth service
	async fn health_check(&self) -> Result<bool, AuthError> {
		Ok(true)
	}

	/// Get human-readable name for this authenticator
	fn name(&self) -> &str;
}
