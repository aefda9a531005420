//! Error types for candidate fetching and edit-session bootstrap

use thiserror::Error;

/// Errors raised while fetching candidate lists or loading records
/// from the remote collection endpoint.
#[derive(Debug, Error)]
pub enum FetchError {
	#[error("HTTP error: {0}")]
	Http(#[from] reqwest::Error),

	#[error("Decode error: {0}")]
	Decode(#[from] serde_json::Error),

	#[error("Unexpected status code: {0}")]
	Status(u16),
}

impl FetchError {
	/// Returns true if the error is a timeout error
	pub fn is_timeout(&self) -> bool {
		match self {
			FetchError::Http(e) => e.is_timeout(),
			_ => false,
		}
	}

	/// Returns true if the error is a connection error
	pub fn is_connect(&self) -> bool {
		match self {
			FetchError::Http(e) => e.is_connect(),
			_ => false,
		}
	}
}

pub type FetchResult<T> = Result<T, FetchError>;

/// Errors surfaced by the edit view itself. Load failures for the record
/// being edited are reported through this type before being logged; the
/// outer framework owns any user-facing recovery.
#[derive(Debug, Error)]
pub enum EditorError {
	#[error("Record load failed: {0}")]
	Load(#[from] FetchError),
}
