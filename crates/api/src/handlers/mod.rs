//! HTTP handlers for the MRV endpoints

pub mod batch;
pub mod common;
pub mod health;
pub mod metrics;
pub mod model_info;
pub mod reverify;
pub mod verify;

pub use batch::batch_verify;
pub use health::health;
pub use metrics::metrics;
pub use model_info::model_info;
pub use reverify::reverify;
pub use verify::verify;
