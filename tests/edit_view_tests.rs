//! Edit-session bootstrap tests

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use serde_json::json;

use announce_editor::{
	ANNOUNCEMENT_VALUE_TYPE, Announcement, AnnouncementEditView, AnnouncementSummary,
	CandidateSource, FetchError, FetchResult, ModelLoader, NodeContext, SchemaNode, SearchPanel,
	SearchRefresh, ValueInput,
};

struct EmptySource;

#[async_trait]
impl CandidateSource for EmptySource {
	type Entry = AnnouncementSummary;

	async fn fetch(&self) -> FetchResult<Vec<AnnouncementSummary>> {
		Ok(Vec::new())
	}
}

/// Loader that returns a fully populated record for any id.
struct FixtureLoader;

#[async_trait]
impl ModelLoader for FixtureLoader {
	async fn load(&self, id: &str) -> FetchResult<Announcement> {
		Ok(Announcement {
			id: Some(id.to_string()),
			name: Some("Season opening".to_string()),
			start_date: Some(Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap()),
			end_date: Some(Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap()),
		})
	}
}

struct FailingLoader;

#[async_trait]
impl ModelLoader for FailingLoader {
	async fn load(&self, _id: &str) -> FetchResult<Announcement> {
		Err(FetchError::Status(404))
	}
}

fn noop_refresh() -> SearchRefresh {
	Arc::new(|_: &SearchPanel| {})
}

async fn wait_until(what: &str, mut cond: impl FnMut() -> bool) {
	for _ in 0..400 {
		if cond() {
			return;
		}
		tokio::time::sleep(Duration::from_millis(5)).await;
	}
	panic!("timed out waiting for: {what}");
}

#[tokio::test]
async fn test_background_load_fills_existing_record() {
	let view = AnnouncementEditView::new(
		Arc::new(FixtureLoader),
		Arc::new(EmptySource),
		Some("66a1".to_string()),
	);

	// Construction returns before the load resolves.
	wait_until("record loaded", || view.resource().name.is_some()).await;

	let record = view.resource();
	assert_eq!(record.id.as_deref(), Some("66a1"));
	assert_eq!(record.name.as_deref(), Some("Season opening"));
	assert_eq!(
		record.start_date,
		Some(Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap())
	);
}

#[tokio::test]
async fn test_failed_load_keeps_stub_record() {
	let view = AnnouncementEditView::new(
		Arc::new(FailingLoader),
		Arc::new(EmptySource),
		Some("gone".to_string()),
	);

	tokio::time::sleep(Duration::from_millis(50)).await;

	let record = view.resource();
	assert_eq!(record.id.as_deref(), Some("gone"));
	assert!(record.name.is_none());
	assert!(record.start_date.is_none());
}

#[tokio::test]
async fn test_registered_factory_builds_working_picker() {
	let view = AnnouncementEditView::new(Arc::new(FixtureLoader), Arc::new(EmptySource), None);

	let node = view
		.options()
		.nodes
		.build(ANNOUNCEMENT_VALUE_TYPE, NodeContext::new(noop_refresh()))
		.expect("picker registered for announcement nodes");
	assert_eq!(node.value_class(), "announcement-reference");

	let mut input = ValueInput::new();
	node.build_value_for_editing(&mut input, Some(&json!("Winter Sale")));
	assert_eq!(input.placeholder.as_deref(), Some("Winter Sale"));
	assert!(input.focused);
}

#[tokio::test]
async fn test_shared_handle_sees_form_mutations() {
	let view = AnnouncementEditView::new(Arc::new(FixtureLoader), Arc::new(EmptySource), None);

	view.resource_handle().write().name = Some("Edited".to_string());
	assert_eq!(view.resource().name.as_deref(), Some("Edited"));
}
