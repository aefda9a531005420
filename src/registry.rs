//! Node-renderer registry: schema value-type label -> node factory
//!
//! The tree-editor framework resolves a node's schema value-type label here
//! when it builds the form, instantiating the registered renderer with the
//! context it supplies at render time.

use std::collections::HashMap;
use std::sync::Arc;

use crate::node::{SchemaNode, SearchRefresh};

/// Render-time context the framework hands to a node factory.
#[derive(Clone)]
pub struct NodeContext {
	/// Hook the framework listens on to redraw the results region.
	pub refresh: SearchRefresh,
}

impl NodeContext {
	pub fn new(refresh: SearchRefresh) -> Self {
		Self { refresh }
	}
}

/// Constructor for one node renderer.
pub type NodeFactory = Arc<dyn Fn(NodeContext) -> Box<dyn SchemaNode> + Send + Sync>;

/// Registry mapping a schema value-type label to the renderer built for
/// nodes of that type. Built once when the edit session is configured,
/// read-only afterwards.
#[derive(Clone, Default)]
pub struct NodeRegistry {
	factories: HashMap<String, NodeFactory>,
}

impl NodeRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers `factory` for nodes whose schema value type is `label`.
	/// A later registration for the same label replaces the earlier one.
	pub fn register(&mut self, label: impl Into<String>, factory: NodeFactory) {
		self.factories.insert(label.into(), factory);
	}

	/// Looks up the factory for a value-type label.
	pub fn resolve(&self, label: &str) -> Option<&NodeFactory> {
		self.factories.get(label)
	}

	/// Instantiates the renderer registered for `label`, if any.
	pub fn build(&self, label: &str, ctx: NodeContext) -> Option<Box<dyn SchemaNode>> {
		self.resolve(label).map(|factory| factory(ctx))
	}

	/// Registered value-type labels, for diagnostics.
	pub fn labels(&self) -> impl Iterator<Item = &str> {
		self.factories.keys().map(String::as_str)
	}
}

/// Configuration the edit view hands to the tree-editor framework.
#[derive(Clone, Default)]
pub struct EditorOptions {
	pub nodes: NodeRegistry,
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::node::{ValueInput, SearchPanel};
	use serde_json::Value;

	struct StubNode;

	impl SchemaNode for StubNode {
		fn value_class(&self) -> &'static str {
			"stub"
		}

		fn build_value_for_editing(&self, _input: &mut ValueInput, _current: Option<&Value>) {}

		fn on_key_up(&self, _input: &ValueInput) {}
	}

	fn noop_refresh() -> SearchRefresh {
		Arc::new(|_: &SearchPanel| {})
	}

	#[test]
	fn test_resolve_registered_label() {
		let mut registry = NodeRegistry::new();
		registry.register(
			"stub",
			Arc::new(|_ctx: NodeContext| Box::new(StubNode) as Box<dyn SchemaNode>),
		);

		let node = registry
			.build("stub", NodeContext::new(noop_refresh()))
			.unwrap();
		assert_eq!(node.value_class(), "stub");
	}

	#[test]
	fn test_unknown_label_resolves_to_none() {
		let registry = NodeRegistry::new();
		assert!(registry.resolve("missing").is_none());
		assert!(registry
			.build("missing", NodeContext::new(noop_refresh()))
			.is_none());
	}

	#[test]
	fn test_later_registration_replaces_earlier() {
		let mut registry = NodeRegistry::new();
		registry.register(
			"stub",
			Arc::new(|_ctx: NodeContext| Box::new(StubNode) as Box<dyn SchemaNode>),
		);
		registry.register(
			"stub",
			Arc::new(|_ctx: NodeContext| Box::new(StubNode) as Box<dyn SchemaNode>),
		);

		assert_eq!(registry.labels().count(), 1);
	}
}
