//! Reference picker node: fetch once, filter locally on every keystroke

use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::Value;
use tokio_util::sync::CancellationToken;

use crate::collection::{CandidateSource, Collection};
use crate::model::ReferenceEntry;
use crate::node::{ResultEntry, SchemaNode, SearchPanel, SearchRefresh, ValueInput, format_reference};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoadState {
	Loading,
	Ready,
	Failed,
}

struct PickerInner {
	load: LoadState,
	snapshot: Collection<ResultEntry>,
	last_term: Option<String>,
	panel: SearchPanel,
}

/// Inline-search node that lets the user pick one related record.
///
/// On creation it issues a single fetch of all candidates (identifier and
/// name only) and thereafter filters that immutable snapshot locally on
/// every keystroke. Requires a tokio runtime: the fetch runs on a spawned
/// task that is cancelled when the node is dropped.
pub struct ReferencePickerNode {
	inner: Arc<RwLock<PickerInner>>,
	refresh: SearchRefresh,
	cancel: CancellationToken,
}

impl ReferencePickerNode {
	/// Creates the node and starts the one-shot candidate fetch. The panel
	/// shows `Searching` until the fetch resolves to `Results` or `Failed`.
	pub fn new<S>(source: Arc<S>, refresh: SearchRefresh) -> Self
	where
		S: CandidateSource + 'static,
	{
		let inner = Arc::new(RwLock::new(PickerInner {
			load: LoadState::Loading,
			snapshot: Collection::default(),
			last_term: None,
			panel: SearchPanel::Searching,
		}));
		let cancel = CancellationToken::new();

		let task_inner = Arc::clone(&inner);
		let task_refresh = Arc::clone(&refresh);
		let token = cancel.clone();
		tokio::spawn(async move {
			tokio::select! {
				_ = token.cancelled() => {}
				fetched = source.fetch() => {
					let panel = {
						let mut state = task_inner.write();
						match fetched {
							Ok(entries) => {
								state.load = LoadState::Ready;
								state.snapshot = entries
									.iter()
									.map(|entry| ResultEntry {
										id: entry.reference_id().to_string(),
										name: entry.display_name().to_string(),
									})
									.collect();
								let term = state.last_term.clone().unwrap_or_default();
								state.panel =
									SearchPanel::Results(filter_entries(&state.snapshot, &term));
							}
							Err(err) => {
								tracing::warn!(error = %err, "candidate fetch failed");
								state.load = LoadState::Failed;
								state.panel = SearchPanel::Failed(format!("Search failed: {err}"));
							}
						}
						state.panel.clone()
					};
					task_refresh(&panel);
				}
			}
		});

		Self {
			inner,
			refresh,
			cancel,
		}
	}

	/// Filter pass, invoked on every key-up. A term equal to the previously
	/// processed one is a no-op; otherwise the result set is recomputed from
	/// the full snapshot and the refresh callback invoked.
	pub fn search(&self, term: &str) {
		let panel = {
			let mut state = self.inner.write();
			if state.last_term.as_deref() == Some(term) {
				return;
			}
			state.last_term = Some(term.to_string());

			match state.load {
				LoadState::Loading => {
					state.panel = SearchPanel::NotReady;
				}
				LoadState::Failed => {}
				LoadState::Ready => {
					let results = filter_entries(&state.snapshot, term);
					tracing::debug!(term, matches = results.len(), "filtered candidate snapshot");
					state.panel = SearchPanel::Results(results);
				}
			}
			state.panel.clone()
		};
		(self.refresh)(&panel);
	}

	/// Current contents of the results-display region.
	pub fn search_panel(&self) -> SearchPanel {
		self.inner.read().panel.clone()
	}

	/// True once the candidate snapshot has arrived.
	pub fn is_ready(&self) -> bool {
		self.inner.read().load == LoadState::Ready
	}

	/// The most recently processed filter term, if any.
	pub fn last_term(&self) -> Option<String> {
		self.inner.read().last_term.clone()
	}
}

impl Drop for ReferencePickerNode {
	fn drop(&mut self) {
		// Stops the in-flight fetch task instead of letting it fire
		// against discarded state.
		self.cancel.cancel();
	}
}

impl SchemaNode for ReferencePickerNode {
	fn value_class(&self) -> &'static str {
		"announcement-reference"
	}

	fn build_value_for_editing(&self, input: &mut ValueInput, current: Option<&Value>) {
		input.text.clear();
		input.placeholder = current.and_then(format_reference);
		input.focused = true;
	}

	fn on_key_up(&self, input: &ValueInput) {
		self.search(&input.text);
	}
}

/// Case-insensitive substring filter over the snapshot, order preserved.
/// Always returns a fresh collection.
fn filter_entries(snapshot: &Collection<ResultEntry>, term: &str) -> Collection<ResultEntry> {
	let needle = term.to_lowercase();
	snapshot
		.iter()
		.filter(|entry| entry.name.to_lowercase().contains(&needle))
		.cloned()
		.collect()
}
