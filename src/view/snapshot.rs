use serde::Serialize;

use super::state::SortKey;
use crate::model::{Record, RecordId};

/// Read model of a [`TabularView`](super::TabularView) at one point in time.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewSnapshot<'a> {
	pub visible: Vec<&'a Record>,
	pub total_matches: usize,
	pub page: usize,
	pub page_count: usize,
	pub page_size: usize,
	pub selected: Vec<RecordId>,
	pub sort: Option<SortKey>,
}

impl ViewSnapshot<'_> {
	#[must_use]
	pub fn visible_ids(&self) -> Vec<RecordId> {
		self.visible.iter().map(|record| record.id).collect()
	}

	#[must_use]
	pub fn is_selected(&self, id: RecordId) -> bool {
		self.selected.contains(&id)
	}

	#[must_use]
	pub fn selected_count(&self) -> usize {
		self.selected.len()
	}

	/// Zero-based position of the first visible row within all matches.
	#[must_use]
	pub fn offset(&self) -> usize {
		self.page * self.page_size
	}
}
