//! Public endpoint tests: health, model-info, and the 404 fallback

mod mocks;

use axum::http::StatusCode;
use mocks::{body_json, get, test_router, test_state};

#[tokio::test]
async fn health_is_public_and_reports_identity() {
	let response = get(test_router(test_state()), "/health").await;
	assert_eq!(response.status(), StatusCode::OK);

	let body = body_json(response).await;
	assert_eq!(body["status"], "healthy");
	assert_eq!(body["version"], "test-v1.0.0");
	assert_eq!(body["processing_node_id"], "test-node");
	assert!(body["uptime_seconds"].as_f64().unwrap() >= 0.0);
	assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn model_info_is_public() {
	let response = get(test_router(test_state()), "/api/mrv/model-info").await;
	assert_eq!(response.status(), StatusCode::OK);

	let body = body_json(response).await;
	assert_eq!(body["model_name"], "BlueCarbon MRV Analyzer");
	assert_eq!(body["model_type"], "Placeholder/Mock");
	assert_eq!(body["model_version"], "test-v1.0.0");

	let types: Vec<&str> = body["supported_project_types"]
		.as_array()
		.unwrap()
		.iter()
		.map(|v| v.as_str().unwrap())
		.collect();
	assert_eq!(
		types,
		vec![
			"mangrove_restoration",
			"seagrass_conservation",
			"salt_marsh_restoration",
			"coastal_wetland_protection",
			"blue_carbon_afforestation"
		]
	);
	assert_eq!(body["capabilities"].as_array().unwrap().len(), 7);
	assert_eq!(body["limitations"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn unknown_route_lists_available_endpoints() {
	let response = get(test_router(test_state()), "/api/mrv/nope").await;
	assert_eq!(response.status(), StatusCode::NOT_FOUND);

	let body = body_json(response).await;
	assert_eq!(body["success"], false);
	assert_eq!(body["message"], "Endpoint not found");
	let endpoints = body["available_endpoints"].as_array().unwrap();
	assert_eq!(endpoints.len(), 6);
	assert!(endpoints.contains(&serde_json::json!("POST /api/mrv/verify")));
}

#[tokio::test]
async fn security_headers_are_applied() {
	let response = get(test_router(test_state()), "/health").await;
	assert_eq!(
		response.headers().get("x-content-type-options").unwrap(),
		"nosniff"
	);
	assert_eq!(response.headers().get("x-frame-options").unwrap(), "DENY");
	assert!(response.headers().get("x-request-id").is_some());
}
