//! Admin editing screen for Announcement records
//!
//! This crate wires an announcement record to a generic edit-view framework
//! and provides the inline-search picker used inside the schema-driven tree
//! editor:
//! - `AnnouncementEditView` bootstraps the edit session: date defaults for
//!   brand-new records, background load of existing ones, and the node
//!   registration consumed by the tree editor
//! - `ReferencePickerNode` fetches the candidate list once per field
//!   instance and filters it locally on every keystroke
//! - `NodeRegistry` resolves schema value-type labels to node renderers
//! - `CandidateSource` / `ModelLoader` are the seams to the remote
//!   collection endpoint, with reqwest-backed implementations

pub mod collection;
pub mod edit_view;
pub mod error;
pub mod model;
pub mod node;
pub mod picker;
pub mod registry;
pub mod schema;

pub use collection::{
	CandidateSource, Collection, HttpCandidateSource, HttpModelLoader, ModelLoader,
};
pub use edit_view::AnnouncementEditView;
pub use error::{EditorError, FetchError, FetchResult};
pub use model::{Announcement, AnnouncementSummary, ReferenceEntry};
pub use node::{ResultEntry, SchemaNode, SearchPanel, SearchRefresh, ValueInput, format_reference};
pub use picker::ReferencePickerNode;
pub use registry::{EditorOptions, NodeContext, NodeFactory, NodeRegistry};
pub use schema::{ANNOUNCEMENT_SCHEMA, ANNOUNCEMENT_VALUE_TYPE};
