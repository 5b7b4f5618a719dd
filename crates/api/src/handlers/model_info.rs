//! Model capability disclosure endpoint

use axum::{extract::State, response::Json};
use chrono::Utc;
use serde::Serialize;

use mrv_types::ProjectType;

use crate::state::AppState;

const MODEL_NAME: &str = "BlueCarbon MRV Analyzer";
const MODEL_TYPE: &str = "Placeholder/Mock";

const CAPABILITIES: [&str; 7] = [
	"Satellite imagery analysis",
	"Vegetation coverage assessment",
	"Carbon sequestration estimation",
	"Species identification",
	"Environmental factor analysis",
	"Change detection",
	"Threat assessment",
];

const LIMITATIONS: [&str; 5] = [
	"Mock/placeholder implementation",
	"Requires real AI model integration",
	"Ground-truth validation recommended",
	"Seasonal variations not captured",
	"Resolution limited to satellite imagery",
];

/// Response body for GET /api/mrv/model-info
#[derive(Debug, Serialize)]
pub struct ModelInfoResponse {
	pub model_name: &'static str,
	pub model_version: String,
	pub model_type: &'static str,
	pub supported_project_types: Vec<&'static str>,
	pub capabilities: Vec<&'static str>,
	pub limitations: Vec<&'static str>,
	pub processing_node_id: String,
	pub last_updated: String,
}

/// GET /api/mrv/model-info. Unauthenticated so integrators can discover
/// capabilities before obtaining a key.
pub async fn model_info(State(state): State<AppState>) -> Json<ModelInfoResponse> {
	Json(ModelInfoResponse {
		model_name: MODEL_NAME,
		model_version: state.model.version.clone(),
		model_type: MODEL_TYPE,
		supported_project_types: ProjectType::ALL.iter().map(|t| t.as_str()).collect(),
		capabilities: CAPABILITIES.to_vec(),
		limitations: LIMITATIONS.to_vec(),
		processing_node_id: state.model.processing_node_id.clone(),
		last_updated: Utc::now().to_rfc3339(),
	})
}
