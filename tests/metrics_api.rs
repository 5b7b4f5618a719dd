//! Metrics endpoint tests

mod mocks;

use axum::http::StatusCode;
use mocks::{body_json, get, get_with_auth, post_json, test_router, test_state, TEST_SERVICE_KEY};
use serde_json::json;

#[tokio::test]
async fn metrics_requires_bearer_token() {
	let router = test_router(test_state());

	let response = get(router.clone(), "/metrics").await;
	assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
	assert_eq!(body_json(response).await["error"], "Unauthorized");

	let response = get_with_auth(router, "/metrics", "not-the-key").await;
	assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn metrics_starts_from_zero() {
	let response = get_with_auth(test_router(test_state()), "/metrics", TEST_SERVICE_KEY).await;
	assert_eq!(response.status(), StatusCode::OK);

	let body = body_json(response).await;
	assert_eq!(body["total_verifications"], 0);
	assert_eq!(body["successful_verifications"], 0);
	assert_eq!(body["failed_verifications"], 0);
	assert_eq!(body["success_rate"], 0.0);
	assert_eq!(body["average_processing_time_seconds"], 0.0);
	assert_eq!(body["model_version"], "test-v1.0.0");
	assert_eq!(body["processing_node_id"], "test-node");

	let queue = body["queue_length"].as_u64().unwrap();
	assert!(queue <= 5);
}

#[tokio::test]
async fn metrics_reflect_verification_traffic() {
	let state = test_state();
	let router = test_router(state.clone());

	let ok_body = json!({
		"project_id": "proj-100",
		"coordinates": [1.0, 2.0],
		"project_type": "salt_marsh_restoration"
	});
	let response = post_json(router.clone(), "/api/mrv/verify", TEST_SERVICE_KEY, &ok_body).await;
	assert_eq!(response.status(), StatusCode::OK);

	// Batch with one valid and one invalid item
	let response = post_json(
		router.clone(),
		"/api/mrv/batch-verify",
		TEST_SERVICE_KEY,
		&json!({"projects": [ok_body, {"project_id": "broken"}]}),
	)
	.await;
	assert_eq!(response.status(), StatusCode::OK);

	let response = get_with_auth(router, "/metrics", TEST_SERVICE_KEY).await;
	let body = body_json(response).await;
	assert_eq!(body["total_verifications"], 3);
	assert_eq!(body["successful_verifications"], 2);
	assert_eq!(body["failed_verifications"], 1);

	let success_rate = body["success_rate"].as_f64().unwrap();
	assert!((success_rate - 0.6667).abs() < 1e-9);
	assert!(body["average_processing_time_seconds"].as_f64().unwrap() >= 0.0);
}
