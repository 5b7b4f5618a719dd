//! Error types for request validation

use thiserror::Error;

pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validation errors for verification and re-verification requests
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
	#[error("Missing required field: {field}")]
	MissingRequiredField { field: &'static str },

	#[error("No project data provided")]
	EmptyBody,

	#[error("No projects data provided")]
	MissingProjects,

	#[error("Projects must be a non-empty array")]
	EmptyBatch,

	#[error("Batch size cannot exceed {max} projects")]
	BatchTooLarge { max: usize },
}
