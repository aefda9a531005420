//! Edit-session bootstrap for one announcement record

use std::sync::Arc;

use chrono::Utc;
use parking_lot::RwLock;
use serde_json::Value;

use crate::collection::{CandidateSource, ModelLoader};
use crate::error::EditorError;
use crate::model::Announcement;
use crate::node::SchemaNode;
use crate::picker::ReferencePickerNode;
use crate::registry::{EditorOptions, NodeContext, NodeRegistry};
use crate::schema::{ANNOUNCEMENT_SCHEMA, ANNOUNCEMENT_VALUE_TYPE};

/// Configures an editing session for one announcement: supplies the schema,
/// derives default date fields for brand-new records, requests the
/// asynchronous load of existing ones, and registers the reference picker
/// for `"announcement"`-typed schema nodes.
///
/// Saving, validation and redirects are owned by the outer edit-view
/// framework; this type only prepares the session.
pub struct AnnouncementEditView {
	resource: Arc<RwLock<Announcement>>,
	options: EditorOptions,
}

impl AnnouncementEditView {
	/// Opens an edit session, either for a brand-new record (`resource_id`
	/// is `None`) or for an existing one loaded in the background.
	///
	/// Requires a tokio runtime when `resource_id` is given: the load runs
	/// on a spawned task, fire and forget, with failures logged.
	pub fn new<L, S>(loader: Arc<L>, source: Arc<S>, resource_id: Option<String>) -> Self
	where
		L: ModelLoader + 'static,
		S: CandidateSource + 'static,
	{
		let record = match resource_id {
			Some(id) => Announcement::with_id(id),
			None => Announcement::new(),
		};
		Self::for_record(loader, source, record)
	}

	/// Opens an edit session for a prepared in-memory record.
	pub fn for_record<L, S>(loader: Arc<L>, source: Arc<S>, mut record: Announcement) -> Self
	where
		L: ModelLoader + 'static,
		S: CandidateSource + 'static,
	{
		// Date defaults are derived only for brand-new records; existing
		// ones keep whatever the asynchronous load delivers.
		if record.id.is_none() {
			record.ensure_date_defaults(Utc::now());
		}

		let record_id = record.id.clone();
		let resource = Arc::new(RwLock::new(record));

		if let Some(id) = record_id {
			let resource = Arc::clone(&resource);
			tokio::spawn(async move {
				match loader.load(&id).await {
					Ok(loaded) => {
						*resource.write() = loaded;
					}
					Err(err) => {
						let err = EditorError::from(err);
						tracing::warn!(error = %err, id = %id, "announcement load failed");
					}
				}
			});
		}

		let mut nodes = NodeRegistry::new();
		nodes.register(
			ANNOUNCEMENT_VALUE_TYPE,
			Arc::new(move |ctx: NodeContext| {
				Box::new(ReferencePickerNode::new(Arc::clone(&source), ctx.refresh))
					as Box<dyn SchemaNode>
			}),
		);

		Self {
			resource,
			options: EditorOptions { nodes },
		}
	}

	/// Snapshot of the record under edit.
	pub fn resource(&self) -> Announcement {
		self.resource.read().clone()
	}

	/// Shared handle to the record, as handed to the form machinery.
	pub fn resource_handle(&self) -> Arc<RwLock<Announcement>> {
		Arc::clone(&self.resource)
	}

	/// Tree-editor configuration, including the picker registration.
	pub fn options(&self) -> &EditorOptions {
		&self.options
	}

	pub fn schema(&self) -> &'static Value {
		&ANNOUNCEMENT_SCHEMA
	}

	pub fn redirect_path_on_success(&self) -> &'static str {
		"/editor/announcement"
	}

	pub fn file_path(&self) -> &'static str {
		"announcement"
	}

	pub fn resource_name(&self) -> &'static str {
		"Announcement"
	}
}
