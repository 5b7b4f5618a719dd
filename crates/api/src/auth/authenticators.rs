//! Authenticator implementations

use async_trait::async_trait;
use tracing::debug;

use mrv_types::{AuthRequest, AuthenticationResult, Authenticator, SecretString};

/// No-op authenticator that allows all requests
#[derive(Debug, Default)]
pub struct NoAuthenticator;

#[async_trait]
impl Authenticator for NoAuthenticator {
	async fn authenticate(&self, _request: &AuthRequest) -> AuthenticationResult {
		debug!("NoAuthenticator: bypassing authentication");
		AuthenticationResult::Bypassed
	}

	fn name(&self) -> &str {
		"NoAuthenticator"
	}
}

/// Shared-secret bearer authenticator.
///
/// Compares `Authorization: Bearer <token>` against one configured service
/// key. There is no per-client identity, expiry, or rotation.
#[derive(Debug)]
pub struct BearerTokenAuthenticator {
	service_key: SecretString,
}

impl BearerTokenAuthenticator {
	pub fn new(service_key: SecretString) -> Self {
		Self { service_key }
	}
}

#[async_trait]
impl Authenticator for BearerTokenAuthenticator {
	async fn authenticate(&self, request: &AuthRequest) -> AuthenticationResult {
		match request.bearer_token() {
			Some(token) if self.service_key.matches(token) => {
				debug!("Bearer token accepted for {} {}", request.method, request.path);
				AuthenticationResult::Authorized
			},
			Some(_) => AuthenticationResult::Unauthorized("Invalid bearer token".to_string()),
			None => {
				AuthenticationResult::Unauthorized("Missing or malformed bearer token".to_string())
			},
		}
	}

	fn name(&self) -> &str {
		"BearerTokenAuthenticator"
	}
}
