//! Shared error response shape for the MRV endpoints

use axum::{
	http::StatusCode,
	response::{IntoResponse, Json, Response},
};
use chrono::Utc;
use serde::Serialize;

/// Error body returned by every failing MRV endpoint
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
	pub success: bool,
	pub message: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub error_type: Option<String>,
	pub timestamp: String,
}

impl ErrorResponse {
	fn new(message: impl Into<String>, error_type: Option<String>) -> Self {
		Self {
			success: false,
			message: message.into(),
			error_type,
			timestamp: Utc::now().to_rfc3339(),
		}
	}
}

/// 400 response with a validation message
pub fn bad_request(message: impl Into<String>) -> Response {
	(
		StatusCode::BAD_REQUEST,
		Json(ErrorResponse::new(message, None)),
	)
		.into_response()
}

/// 500 response carrying the failure category alongside the message
pub fn internal_error(message: impl Into<String>, error_type: impl Into<String>) -> Response {
	(
		StatusCode::INTERNAL_SERVER_ERROR,
		Json(ErrorResponse::new(message, Some(error_type.into()))),
	)
		.into_response()
}
