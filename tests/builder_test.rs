//! Builder assembly tests

mod mocks;

use std::sync::Arc;

use axum::http::StatusCode;
use bluecarbon_mrv::{MrvServiceBuilder, NoAuthenticator, Settings, SyntheticAnalysisEngine};

#[tokio::test]
async fn builder_starts_with_defaults() {
	let mut settings = Settings::default();
	settings.simulation.latency_enabled = false;

	let (router, state) = MrvServiceBuilder::new()
		.with_settings(settings)
		.start()
		.await
		.expect("builder should start");

	assert_eq!(state.engine.name(), "SyntheticAnalysisEngine");
	assert_eq!(state.model.version, "placeholder-v1.0.0");
	assert_eq!(state.model.processing_node_id, "node-1");

	// The returned router serves the public routes
	let response = mocks::get(router, "/health").await;
	assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn builder_accepts_custom_components() {
	let mut settings = Settings::default();
	settings.simulation.latency_enabled = false;
	settings.model.version = "custom-v2".to_string();

	let (router, state) = MrvServiceBuilder::new()
		.with_settings(settings)
		.with_engine(Arc::new(SyntheticAnalysisEngine::seeded(99)))
		.with_authenticator(Arc::new(NoAuthenticator))
		.start()
		.await
		.expect("builder should start");

	assert_eq!(state.model.version, "custom-v2");

	// NoAuthenticator bypasses the bearer check on protected routes
	let response = mocks::get(router, "/metrics").await;
	assert_eq!(response.status(), StatusCode::OK);
	let body = mocks::body_json(response).await;
	assert_eq!(body["model_version"], "custom-v2");
}
