//! MRV Types
//!
//! Shared models and traits for the BlueCarbon MRV verification service.
//! This crate contains all domain models organized by business entity.

pub mod analysis;
pub mod auth;
pub mod metrics;
pub mod models;
pub mod projects;
pub mod reverification;

// Re-export chrono and serde_json for convenience
pub use chrono;
pub use serde_json;

// Re-export commonly used types for convenience
pub use projects::{
	AdditionalData, BatchItemResult, BatchVerificationRequest, BatchVerificationResponse,
	ProjectType, ValidatedVerification, ValidationError, ValidationResult, VerificationRequest,
	VerificationResponse,
};

pub use analysis::{
	AnalysisResult, CarbonSequestration, ChangeDetection, ConfidenceInterval,
	EnvironmentalFactors, HealthAssessment, SatelliteAnalysis, SoilComposition,
	VegetationCoverage,
};

pub use reverification::{
	AnalysisMetadata, BaselineMetrics, ComplianceFlag, ConfidenceFactors, MetadataDraws,
	ReverificationOutcome, ReverificationRequest, ReverificationResponse, ReverificationType,
	ValidatedReverification,
};

pub use auth::{AuthError, AuthRequest, AuthenticationResult, Authenticator};

pub use metrics::{CountersSnapshot, ServiceCounters};

pub use models::SecretString;
