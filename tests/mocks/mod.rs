//! Shared fixtures for API tests

use std::sync::Arc;

use axum::{
	body::Body,
	http::Request,
	response::Response,
	Router,
};
use serde_json::Value;
use tower::ServiceExt;

use bluecarbon_mrv::{
	AppState, BearerTokenAuthenticator, LatencySimulator, ModelContext, SecretString,
	ServiceCounters, SyntheticAnalysisEngine,
};

#[allow(dead_code)]
pub const TEST_SERVICE_KEY: &str = "test-key-12345";

/// Application state wired for tests: seeded engine, latency simulation off
#[allow(dead_code)]
pub fn test_state() -> AppState {
	test_state_seeded(7)
}

#[allow(dead_code)]
pub fn test_state_seeded(seed: u64) -> AppState {
	AppState {
		engine: Arc::new(SyntheticAnalysisEngine::seeded(seed)),
		authenticator: Arc::new(BearerTokenAuthenticator::new(SecretString::from(
			TEST_SERVICE_KEY,
		))),
		counters: Arc::new(ServiceCounters::new()),
		latency: Arc::new(LatencySimulator::disabled()),
		model: Arc::new(ModelContext {
			version: "test-v1.0.0".to_string(),
			processing_node_id: "test-node".to_string(),
			report_base_url: "https://ai-reports.bluecarbon.com".to_string(),
		}),
	}
}

#[allow(dead_code)]
pub fn test_router(state: AppState) -> Router {
	bluecarbon_mrv::create_router(state)
}

#[allow(dead_code)]
pub async fn get(router: Router, uri: &str) -> Response {
	router
		.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
		.await
		.unwrap()
}

#[allow(dead_code)]
pub async fn get_with_auth(router: Router, uri: &str, token: &str) -> Response {
	router
		.oneshot(
			Request::builder()
				.uri(uri)
				.header("Authorization", format!("Bearer {}", token))
				.body(Body::empty())
				.unwrap(),
		)
		.await
		.unwrap()
}

#[allow(dead_code)]
pub async fn post_json(router: Router, uri: &str, token: &str, body: &Value) -> Response {
	router
		.oneshot(
			Request::builder()
				.method("POST")
				.uri(uri)
				.header("Authorization", format!("Bearer {}", token))
				.header("content-type", "application/json")
				.body(Body::from(body.to_string()))
				.unwrap(),
		)
		.await
		.unwrap()
}

#[allow(dead_code)]
pub async fn post_empty(router: Router, uri: &str, token: &str) -> Response {
	router
		.oneshot(
			Request::builder()
				.method("POST")
				.uri(uri)
				.header("Authorization", format!("Bearer {}", token))
				.body(Body::empty())
				.unwrap(),
		)
		.await
		.unwrap()
}

#[allow(dead_code)]
pub async fn body_json(response: Response) -> Value {
	let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
		.await
		.unwrap();
	serde_json::from_slice(&bytes).unwrap()
}
