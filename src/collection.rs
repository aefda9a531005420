//! Candidate collections and the remote sources that fill them

use async_trait::async_trait;

use crate::error::{FetchError, FetchResult};
use crate::model::{Announcement, ReferenceEntry};

/// An immutable snapshot of entries. Each filter pass wraps its result in a
/// fresh `Collection` rather than mutating an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection<T> {
	entries: Vec<T>,
}

impl<T> Collection<T> {
	pub fn new(entries: Vec<T>) -> Self {
		Self { entries }
	}

	pub fn entries(&self) -> &[T] {
		&self.entries
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, T> {
		self.entries.iter()
	}
}

impl<T> Default for Collection<T> {
	fn default() -> Self {
		Self {
			entries: Vec::new(),
		}
	}
}

impl<T> FromIterator<T> for Collection<T> {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		Self::new(iter.into_iter().collect())
	}
}

/// Source of pickable candidate records, projected to identifier and name.
///
/// The picker fetches the complete list once per field instance and filters
/// it locally; a term-aware server-side query would slot in behind this
/// trait without touching the picker.
#[async_trait]
pub trait CandidateSource: Send + Sync {
	type Entry: ReferenceEntry;

	async fn fetch(&self) -> FetchResult<Vec<Self::Entry>>;
}

/// Loads one full record by identifier, the analogue of the outer
/// framework's model loader.
#[async_trait]
pub trait ModelLoader: Send + Sync {
	async fn load(&self, id: &str) -> FetchResult<Announcement>;
}

/// Reqwest-backed [`CandidateSource`] querying the announcement collection
/// endpoint with a field projection restricted to `_id` and `name`.
#[derive(Debug, Clone)]
pub struct HttpCandidateSource {
	client: reqwest::Client,
	base_url: String,
}

impl HttpCandidateSource {
	/// Creates a source against the given API base URL.
	///
	/// # Examples
	///
	/// ```
	/// use announce_editor::HttpCandidateSource;
	///
	/// let source = HttpCandidateSource::new("https://example.com");
	/// assert_eq!(source.collection_url(), "https://example.com/db/announcements");
	/// ```
	pub fn new(base_url: impl Into<String>) -> Self {
		Self {
			client: reqwest::Client::new(),
			base_url: base_url.into(),
		}
	}

	/// Replaces the HTTP client, keeping any caller-configured timeouts or
	/// middleware.
	pub fn with_client(mut self, client: reqwest::Client) -> Self {
		self.client = client;
		self
	}

	/// The collection resource URL, without the projection query.
	pub fn collection_url(&self) -> String {
		format!("{}/db/announcements", self.base_url.trim_end_matches('/'))
	}
}

#[async_trait]
impl CandidateSource for HttpCandidateSource {
	type Entry = crate::model::AnnouncementSummary;

	async fn fetch(&self) -> FetchResult<Vec<Self::Entry>> {
		let response = self
			.client
			.get(self.collection_url())
			.query(&[("project[]", "_id"), ("project[]", "name")])
			.send()
			.await?;

		let status = response.status();
		if !status.is_success() {
			return Err(FetchError::Status(status.as_u16()));
		}

		let body = response.bytes().await?;
		Ok(serde_json::from_slice(&body)?)
	}
}

/// Reqwest-backed [`ModelLoader`] retrieving one announcement by id.
#[derive(Debug, Clone)]
pub struct HttpModelLoader {
	client: reqwest::Client,
	base_url: String,
}

impl HttpModelLoader {
	pub fn new(base_url: impl Into<String>) -> Self {
		Self {
			client: reqwest::Client::new(),
			base_url: base_url.into(),
		}
	}

	pub fn with_client(mut self, client: reqwest::Client) -> Self {
		self.client = client;
		self
	}

	fn record_url(&self, id: &str) -> String {
		format!("{}/db/announcements/{id}", self.base_url.trim_end_matches('/'))
	}
}

#[async_trait]
impl ModelLoader for HttpModelLoader {
	async fn load(&self, id: &str) -> FetchResult<Announcement> {
		let response = self.client.get(self.record_url(id)).send().await?;

		let status = response.status();
		if !status.is_success() {
			return Err(FetchError::Status(status.as_u16()));
		}

		let body = response.bytes().await?;
		Ok(serde_json::from_slice(&body)?)
	}
}
