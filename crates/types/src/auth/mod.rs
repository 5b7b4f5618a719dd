//! Authentication traits and request context
//!
//! The trait seam lets the shared-secret bearer check be swapped for a real
//! identity layer without touching the HTTP handlers.

pub mod errors;
pub mod traits;

pub use errors::AuthError;
pub use traits::{AuthRequest, AuthenticationResult, Authenticator};
