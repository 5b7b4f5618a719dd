//! Single verification endpoint tests

mod mocks;

use axum::http::StatusCode;
use mocks::{body_json, post_empty, post_json, test_router, test_state, TEST_SERVICE_KEY};
use serde_json::json;

fn verify_body() -> serde_json::Value {
	json!({
		"project_id": "proj-001",
		"coordinates": {"lat": -2.17, "lng": 102.65},
		"project_type": "mangrove_restoration",
		"additional_data": {"project_area_hectares": 25.0}
	})
}

#[tokio::test]
async fn verify_returns_full_analysis() {
	let state = test_state();
	let response = post_json(
		test_router(state.clone()),
		"/api/mrv/verify",
		TEST_SERVICE_KEY,
		&verify_body(),
	)
	.await;
	assert_eq!(response.status(), StatusCode::OK);

	let body = body_json(response).await;
	assert_eq!(body["success"], true);
	assert!(body["mrv_id"].as_str().unwrap().starts_with("mrv-"));
	assert_eq!(body["verified_area_hectares"], 25.0);
	assert_eq!(body["model_version"], "test-v1.0.0");
	assert_eq!(body["processing_node_id"], "test-node");

	let confidence = body["confidence_score"].as_f64().unwrap();
	assert!((0.7..0.95).contains(&confidence));

	let report_url = body["report_url"].as_str().unwrap();
	assert!(report_url.starts_with("https://ai-reports.bluecarbon.com/proj-001/mrv-report-"));
	assert!(report_url.ends_with(".pdf"));

	// Analysis figures stay internally consistent
	let analysis = &body["analysis_result"];
	let estimated = analysis["carbon_sequestration"]["estimated_annual_co2_tons"]
		.as_f64()
		.unwrap();
	assert_eq!(body["estimated_co2_tons"], estimated);
	let lower = analysis["carbon_sequestration"]["confidence_interval"]["lower_bound"]
		.as_f64()
		.unwrap();
	let upper = analysis["carbon_sequestration"]["confidence_interval"]["upper_bound"]
		.as_f64()
		.unwrap();
	assert!(lower <= estimated && estimated <= upper);

	let density = analysis["vegetation_coverage"]["vegetation_density"]
		.as_f64()
		.unwrap();
	assert!((0.7..=0.9).contains(&density));
	assert_eq!(analysis["vegetation_coverage"]["total_area_hectares"], 25.0);
	assert_eq!(analysis["satellite_analysis"]["resolution_meters"], 10);

	// Counters record the request
	let snapshot = state.counters.snapshot();
	assert_eq!(snapshot.total_verifications, 1);
	assert_eq!(snapshot.successful_verifications, 1);
	assert_eq!(snapshot.failed_verifications, 0);
}

#[tokio::test]
async fn verify_requires_bearer_token() {
	let state = test_state();
	let response = post_json(
		test_router(state.clone()),
		"/api/mrv/verify",
		"wrong-key",
		&verify_body(),
	)
	.await;
	assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

	let body = body_json(response).await;
	assert_eq!(body["error"], "Unauthorized");

	// Rejected requests never reach the counters
	assert_eq!(state.counters.snapshot().total_verifications, 0);
}

#[tokio::test]
async fn verify_rejects_missing_body() {
	let response = post_empty(
		test_router(test_state()),
		"/api/mrv/verify",
		TEST_SERVICE_KEY,
	)
	.await;
	assert_eq!(response.status(), StatusCode::BAD_REQUEST);

	let body = body_json(response).await;
	assert_eq!(body["success"], false);
	assert_eq!(body["message"], "No project data provided");
}

#[tokio::test]
async fn verify_names_first_missing_field() {
	let state = test_state();
	let response = post_json(
		test_router(state.clone()),
		"/api/mrv/verify",
		TEST_SERVICE_KEY,
		&json!({"project_id": "proj-001"}),
	)
	.await;
	assert_eq!(response.status(), StatusCode::BAD_REQUEST);

	let body = body_json(response).await;
	assert_eq!(body["message"], "Missing required field: coordinates");

	// Validation failures do not count as verifications
	assert_eq!(state.counters.snapshot().total_verifications, 0);
}

#[tokio::test]
async fn verify_falls_back_on_unknown_project_type() {
	let response = post_json(
		test_router(test_state()),
		"/api/mrv/verify",
		TEST_SERVICE_KEY,
		&json!({
			"project_id": "proj-002",
			"coordinates": [1.0, 2.0],
			"project_type": "kelp_forest"
		}),
	)
	.await;
	assert_eq!(response.status(), StatusCode::OK);

	let body = body_json(response).await;
	// Unknown types use the fallback density and the default area
	assert_eq!(body["verified_area_hectares"], 10.0);
	assert_eq!(
		body["analysis_result"]["vegetation_coverage"]["vegetation_density"],
		0.7
	);
}
