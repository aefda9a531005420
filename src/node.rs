//! Integration contract between schema-tree nodes and the outer editor
//!
//! The tree-editor framework owns rendering; nodes expose plain state the
//! framework reads back after each refresh: an editable input region, a
//! results-display region, and a refresh callback the node invokes whenever
//! the results region changes.

use std::sync::Arc;

use serde_json::Value;

/// One entry in the results-display region: identifier plus display name,
/// the only fields the candidate projection carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultEntry {
	pub id: String,
	pub name: String,
}

/// The results-display region of a picker node.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchPanel {
	/// Candidate fetch is in flight.
	#[default]
	Searching,
	/// A filter term arrived before the candidate snapshot; nothing to
	/// match against yet.
	NotReady,
	/// Current filter results, a fresh subset of the candidate snapshot.
	Results(crate::collection::Collection<ResultEntry>),
	/// The candidate fetch failed; the message is user-visible.
	Failed(String),
}

/// Framework-supplied hook invoked after every results-region change.
pub type SearchRefresh = Arc<dyn Fn(&SearchPanel) + Send + Sync>;

/// The editable input region populated by `build_value_for_editing`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueInput {
	pub text: String,
	pub placeholder: Option<String>,
	pub focused: bool,
}

impl ValueInput {
	pub fn new() -> Self {
		Self::default()
	}
}

/// A pluggable schema-tree node renderer. The framework instantiates one per
/// rendered node (through the [`crate::registry::NodeRegistry`]) and drives
/// it through these hooks.
pub trait SchemaNode: Send + Sync {
	/// CSS-class-like tag the framework attaches to the rendered node.
	fn value_class(&self) -> &'static str;

	/// Populates the editable input from the node's current value and grabs
	/// keyboard focus.
	fn build_value_for_editing(&self, input: &mut ValueInput, current: Option<&Value>);

	/// Key-up hook; wired by the framework to the input rendered above.
	fn on_key_up(&self, input: &ValueInput);
}

/// Formats a stored reference value for display as the input placeholder.
/// Accepts either the bare name string or the `{_id, name}` object form the
/// collection endpoint returns.
pub fn format_reference(value: &Value) -> Option<String> {
	match value {
		Value::String(s) => Some(s.clone()),
		Value::Object(map) => map
			.get("name")
			.and_then(Value::as_str)
			.map(str::to_string),
		_ => None,
	}
}
