//! Announcement record model and the reference-entry projection seam

use chrono::{DateTime, Months, Utc};
use serde::{Deserialize, Serialize};

/// The entity being edited.
///
/// Dates are serialized as ISO-8601 strings (chrono's RFC 3339 form) under
/// the camelCase keys the collection endpoint uses.
///
/// # Examples
///
/// ```
/// use announce_editor::Announcement;
///
/// let record = Announcement::with_id("66a1");
/// assert_eq!(record.id.as_deref(), Some("66a1"));
/// assert!(record.start_date.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
	#[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
	pub id: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub start_date: Option<DateTime<Utc>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub end_date: Option<DateTime<Utc>>,
}

impl Announcement {
	/// Creates an empty in-memory record for a brand-new announcement.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a stub record carrying only the identifier of an existing
	/// announcement; the remaining fields arrive with the asynchronous load.
	pub fn with_id(id: impl Into<String>) -> Self {
		Self {
			id: Some(id.into()),
			..Self::default()
		}
	}

	/// Fills in missing date fields: `start_date` defaults to `now`,
	/// `end_date` to `start_date` plus one calendar month (end-of-month
	/// clamped). Fields that already hold a value are left untouched.
	pub fn ensure_date_defaults(&mut self, now: DateTime<Utc>) {
		let start = *self.start_date.get_or_insert(now);
		if self.end_date.is_none() {
			self.end_date = start.checked_add_months(Months::new(1));
		}
	}
}

/// Lightweight projection (identifier + name only) used by the picker's
/// candidate list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnouncementSummary {
	#[serde(rename = "_id")]
	pub id: String,
	pub name: String,
}

/// A record that can appear as a pickable reference: exposes the stored
/// identifier and the label shown while searching.
pub trait ReferenceEntry: Clone + Send + Sync + 'static {
	fn reference_id(&self) -> &str;
	fn display_name(&self) -> &str;
}

impl ReferenceEntry for AnnouncementSummary {
	fn reference_id(&self) -> &str {
		&self.id
	}

	fn display_name(&self) -> &str {
		&self.name
	}
}
