//! Compliance re-verification endpoint tests

mod mocks;

use axum::http::StatusCode;
use mocks::{body_json, post_json, test_router, test_state, TEST_SERVICE_KEY};
use serde_json::json;

const COMPLIANCE_FLAGS: [&str; 4] = [
	"COMPLIANT",
	"MINOR_DEGRADATION",
	"SIGNIFICANT_DEGRADATION",
	"CRITICAL_DEGRADATION",
];

#[tokio::test]
async fn reverify_reports_against_baselines() {
	let state = test_state();
	let response = post_json(
		test_router(state.clone()),
		"/api/mrv/reverify",
		TEST_SERVICE_KEY,
		&json!({
			"project_id": "proj-007",
			"coordinates": [1.0, 2.0],
			"project_type": "mangrove_restoration",
			"baseline_ndvi": 0.85,
			"baseline_co2_tons": 150.0,
			"baseline_area_hectares": 20.0,
			"reverification_type": "THRESHOLD_BREACH"
		}),
	)
	.await;
	assert_eq!(response.status(), StatusCode::OK);

	let body = body_json(response).await;
	assert_eq!(body["success"], true);
	assert_eq!(body["project_id"], "proj-007");

	// Simulated degradation only moves metrics downward from the baseline
	let current_ndvi = body["current_ndvi"].as_f64().unwrap();
	assert!(current_ndvi > 0.0 && current_ndvi <= 0.85);
	assert!(body["current_co2_tons"].as_f64().unwrap() <= 150.0);
	assert!(body["current_area_hectares"].as_f64().unwrap() <= 20.0);
	assert!(body["ndvi_change_percent"].as_f64().unwrap() <= 0.0);

	let flag = body["compliance_flag"].as_str().unwrap();
	assert!(COMPLIANCE_FLAGS.contains(&flag));

	let confidence = body["ai_confidence_score"].as_f64().unwrap();
	assert!((0.5..=0.95).contains(&confidence));

	assert!(body["analysis_report_url"]
		.as_str()
		.unwrap()
		.contains("/proj-007/compliance-report-"));

	let metadata = &body["analysis_metadata"];
	assert_eq!(metadata["model_version"], "test-v1.0.0");
	assert_eq!(metadata["processing_node_id"], "test-node");
	assert_eq!(metadata["quality_checks_passed"], true);
	assert_eq!(metadata["resolution_meters"], 10);
	assert_eq!(
		metadata["satellite_data_sources"],
		json!(["Sentinel-2", "Landsat-8"])
	);
	let dates = metadata["image_dates"].as_array().unwrap();
	assert!((2..=4).contains(&dates.len()));
	let factors = &metadata["confidence_factors"];
	for key in ["data_quality", "temporal_consistency", "spatial_accuracy"] {
		let value = factors[key].as_f64().unwrap();
		assert!((0.8..=1.0).contains(&value));
	}

	let images = body["satellite_images_used"].as_array().unwrap();
	assert_eq!(images.len(), 2);
	assert!(images[0]
		.as_str()
		.unwrap()
		.contains("mock-satellite.com/images/proj-007/"));

	let snapshot = state.counters.snapshot();
	assert_eq!(snapshot.total_verifications, 1);
	assert_eq!(snapshot.successful_verifications, 1);
}

#[tokio::test]
async fn reverify_defaults_baselines_and_type() {
	let response = post_json(
		test_router(test_state()),
		"/api/mrv/reverify",
		TEST_SERVICE_KEY,
		&json!({
			"project_id": "proj-008",
			"coordinates": [1.0, 2.0],
			"project_type": "seagrass_conservation"
		}),
	)
	.await;
	assert_eq!(response.status(), StatusCode::OK);

	let body = body_json(response).await;
	// Defaults: NDVI 0.8, 100 tons, 10 hectares
	assert!(body["current_ndvi"].as_f64().unwrap() <= 0.8);
	assert!(body["current_co2_tons"].as_f64().unwrap() <= 100.0);
	assert!(body["current_area_hectares"].as_f64().unwrap() <= 10.0);
}

#[tokio::test]
async fn reverify_accepts_unrecognized_type_as_scheduled() {
	let response = post_json(
		test_router(test_state()),
		"/api/mrv/reverify",
		TEST_SERVICE_KEY,
		&json!({
			"project_id": "proj-009",
			"coordinates": [1.0, 2.0],
			"project_type": "mangrove_restoration",
			"reverification_type": "SOMETHING_ELSE"
		}),
	)
	.await;
	assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn reverify_validates_required_fields() {
	let response = post_json(
		test_router(test_state()),
		"/api/mrv/reverify",
		TEST_SERVICE_KEY,
		&json!({"coordinates": [1.0, 2.0]}),
	)
	.await;
	assert_eq!(response.status(), StatusCode::BAD_REQUEST);
	assert_eq!(
		body_json(response).await["message"],
		"Missing required field: project_id"
	);
}

#[tokio::test]
async fn reverify_requires_bearer_token() {
	let response = post_json(
		test_router(test_state()),
		"/api/mrv/reverify",
		"bad-token",
		&json!({
			"project_id": "proj-010",
			"coordinates": [1.0, 2.0],
			"project_type": "mangrove_restoration"
		}),
	)
	.await;
	assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
