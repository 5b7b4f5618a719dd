//! Secure string handling for the shared service key
//!
//! `SecretString` zeroizes its contents on drop so the bearer secret does
//! not linger in freed memory, and redacts itself in Debug/Display output.

use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A string wrapper for sensitive values like the AI service key
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretString {
	inner: String,
}

impl SecretString {
	/// Create a new `SecretString` from a `String`
	pub fn new(secret: String) -> Self {
		Self { inner: secret }
	}

	/// Expose the secret value.
	///
	/// Use sparingly; prefer comparing through [`SecretString::matches`].
	pub fn expose_secret(&self) -> &str {
		&self.inner
	}

	/// Compare the secret against a candidate token
	pub fn matches(&self, candidate: &str) -> bool {
		self.inner == candidate
	}

	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}
}

impl fmt::Debug for SecretString {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SecretString")
			.field("inner", &"[REDACTED]")
			.finish()
	}
}

impl fmt::Display for SecretString {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "[REDACTED]")
	}
}

impl From<String> for SecretString {
	fn from(secret: String) -> Self {
		Self::new(secret)
	}
}

impl From<&str> for SecretString {
	fn from(secret: &str) -> Self {
		Self::new(secret.to_string())
	}
}
