use axum::{
	http::StatusCode,
	middleware::from_fn_with_state,
	response::{IntoResponse, Json},
	routing::{get, post},
	Router,
};
use serde_json::json;
use tower::ServiceBuilder;
use tower_http::{
	compression::CompressionLayer,
	cors::CorsLayer,
	limit::RequestBodyLimitLayer,
	request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
	trace::TraceLayer,
};
use tracing::Level;

use crate::auth::middleware::require_auth;
use crate::handlers::{batch_verify, health, metrics, model_info, reverify, verify};
use crate::security::add_security_headers;
use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
	// Layers prepared first so they're in scope for the whole assembly
	let cors = CorsLayer::permissive();
	let body_limit = RequestBodyLimitLayer::new(1024 * 1024);
	let trace = TraceLayer::new_for_http()
		.make_span_with(|req: &axum::http::Request<_>| {
			let req_id = req
				.headers()
				.get("x-request-id")
				.and_then(|v| v.to_str().ok())
				.unwrap_or("-");
			tracing::info_span!(
				"http_request",
				method = %req.method(),
				uri = %req.uri(),
				req_id
			)
		})
		.on_request(tower_http::trace::DefaultOnRequest::new().level(Level::INFO))
		.on_response(
			tower_http::trace::DefaultOnResponse::new()
				.level(Level::INFO)
				.latency_unit(tower_http::LatencyUnit::Millis),
		);
	let req_id = ServiceBuilder::new()
		.layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
		.layer(PropagateRequestIdLayer::x_request_id());

	// Health and model-info stay open; everything else requires a key
	let public = Router::new()
		.route("/health", get(health))
		.route("/api/mrv/model-info", get(model_info));

	let protected = Router::new()
		.route("/metrics", get(metrics))
		.route("/api/mrv/verify", post(verify))
		.route("/api/mrv/batch-verify", post(batch_verify))
		.route("/api/mrv/reverify", post(reverify))
		.route_layer(from_fn_with_state(state.clone(), require_auth));

	let router = public
		.merge(protected)
		.fallback(not_found)
		.with_state(state);

	// Apply common layers
	let router = router
		.layer(cors)
		.layer(CompressionLayer::new())
		.layer(trace)
		.layer(req_id)
		.layer(body_limit);

	add_security_headers(router)
}

/// Catch-all 404 listing the routes this service serves
async fn not_found() -> impl IntoResponse {
	(
		StatusCode::NOT_FOUND,
		Json(json!({
			"success": false,
			"message": "Endpoint not found",
			"available_endpoints": [
				"GET /health",
				"GET /metrics",
				"POST /api/mrv/verify",
				"POST /api/mrv/batch-verify",
				"POST /api/mrv/reverify",
				"GET /api/mrv/model-info"
			]
		})),
	)
}
