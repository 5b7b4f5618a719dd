//! Authentication middleware using the auth traits

use axum::{
	extract::{Request, State},
	http::{HeaderMap, StatusCode},
	middleware::Next,
	response::{IntoResponse, Response},
	Json,
};
use serde_json::json;
use tracing::warn;

use mrv_types::{AuthRequest, AuthenticationResult};

use crate::state::AppState;

/// Route-level middleware guarding the protected endpoints.
///
/// Rejections return the bare `{"error": "Unauthorized"}` body; service
/// counters are never touched here.
pub async fn require_auth(
	State(state): State<AppState>,
	request: Request,
	next: Next,
) -> Response {
	let auth_request = AuthRequest {
		headers: headers_to_map(request.headers()),
		path: request.uri().path().to_string(),
		method: request.method().to_string(),
	};

	match state.authenticator.authenticate(&auth_request).await {
		AuthenticationResult::Authorized | AuthenticationResult::Bypassed => {
			next.run(request).await
		},
		AuthenticationResult::Unauthorized(reason) => {
			warn!(
				"Authentication failed for {} {}: {}",
				auth_request.method, auth_request.path, reason
			);
			(StatusCode::UNAUTHORIZED, Json(json!({ "error": "Unauthorized" }))).into_response()
		},
	}
}

/// Helper function to convert HeaderMap to HashMap<String, String>
fn headers_to_map(headers: &HeaderMap) -> std::collections::HashMap<String, String> {
	let mut map = std::collections::HashMap::new();

	for (name, value) in headers.iter() {
		if let Ok(value_str) = value.to_str() {
			map.insert(name.as_str().to_lowercase(), value_str.to_string());
		}
	}

	map
}
