//! JSON schema for the announcement record

use once_cell::sync::Lazy;
use serde_json::{Value, json};

/// Schema value-type label the reference picker is registered under.
pub const ANNOUNCEMENT_VALUE_TYPE: &str = "announcement";

/// Schema driving the tree editor for one announcement record. The
/// `previous` property carries the [`ANNOUNCEMENT_VALUE_TYPE`] format label,
/// which the node registry resolves to the reference picker.
pub static ANNOUNCEMENT_SCHEMA: Lazy<Value> = Lazy::new(|| {
	json!({
		"type": "object",
		"title": "Announcement",
		"properties": {
			"name": {
				"type": "string",
				"title": "Name"
			},
			"description": {
				"type": "string",
				"title": "Description"
			},
			"startDate": {
				"type": "string",
				"format": "date-time",
				"title": "Start Date"
			},
			"endDate": {
				"type": "string",
				"format": "date-time",
				"title": "End Date"
			},
			"previous": {
				"type": "string",
				"format": ANNOUNCEMENT_VALUE_TYPE,
				"title": "Previous Announcement",
				"description": "Link to the announcement this one supersedes"
			}
		},
		"required": ["name", "startDate"]
	})
});
