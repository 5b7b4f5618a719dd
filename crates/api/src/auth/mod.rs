//! Authentication middleware and authenticator implementations

pub mod authenticators;
pub mod middleware;

pub use authenticators::{BearerTokenAuthenticator, NoAuthenticator};
pub use middleware::require_auth;
