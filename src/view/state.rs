use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::model::{Field, FieldValue, RecordId, Status};

/// Page size used until a caller picks another one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
	#[default]
	#[serde(alias = "ascending")]
	Asc,
	#[serde(alias = "descending")]
	Desc,
}

impl SortDirection {
	#[must_use]
	pub fn reversed(self) -> Self {
		match self {
			SortDirection::Asc => SortDirection::Desc,
			SortDirection::Desc => SortDirection::Asc,
		}
	}

	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			SortDirection::Asc => "asc",
			SortDirection::Desc => "desc",
		}
	}
}

impl fmt::Display for SortDirection {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for SortDirection {
	type Err = String;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value.trim().to_ascii_lowercase().as_str() {
			"asc" | "ascending" => Ok(SortDirection::Asc),
			"desc" | "descending" => Ok(SortDirection::Desc),
			_ => Err(format!("unknown sort direction '{value}' (expected asc or desc)")),
		}
	}
}

/// Active sort: which field, which way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SortKey {
	pub field: Field,
	pub direction: SortDirection,
}

impl SortKey {
	#[must_use]
	pub fn new(field: Field, direction: SortDirection) -> Self {
		Self { field, direction }
	}
}

/// Per-column constraint applied on top of search and status filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColumnFilter {
	/// Case-insensitive substring of the raw value.
	Contains(String),
	/// Inclusive numeric bounds; an absent bound is unbounded.
	Range { min: Option<u64>, max: Option<u64> },
}

impl ColumnFilter {
	#[must_use]
	pub fn contains(text: impl Into<String>) -> Self {
		ColumnFilter::Contains(text.into())
	}

	#[must_use]
	pub fn range(min: Option<u64>, max: Option<u64>) -> Self {
		ColumnFilter::Range { min, max }
	}

	/// A filter that accepts every value.
	#[must_use]
	pub fn is_noop(&self) -> bool {
		match self {
			ColumnFilter::Contains(text) => text.is_empty(),
			ColumnFilter::Range { min, max } => min.is_none() && max.is_none(),
		}
	}

	pub(crate) fn matches(&self, value: FieldValue<'_>) -> bool {
		match self {
			ColumnFilter::Contains(needle) => {
				let needle = needle.to_lowercase();
				value
					.search_text()
					.is_some_and(|haystack| haystack.contains(&needle))
			}
			ColumnFilter::Range { min, max } => match value {
				FieldValue::Number(number) => {
					min.is_none_or(|min| number >= min) && max.is_none_or(|max| number <= max)
				}
				_ => false,
			},
		}
	}
}

/// Query and selection parameters applied to a collection.
///
/// Never persisted; the visible page is re-derived from this and the
/// collection on every read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
	pub(super) search_text: String,
	pub(super) status_filter: BTreeSet<Status>,
	pub(super) column_filters: BTreeMap<Field, ColumnFilter>,
	pub(super) sort: Option<SortKey>,
	pub(super) page: usize,
	pub(super) page_size: usize,
	pub(super) selected: IndexSet<RecordId>,
}

impl Default for ViewState {
	fn default() -> Self {
		Self {
			search_text: String::new(),
			status_filter: BTreeSet::new(),
			column_filters: BTreeMap::new(),
			sort: None,
			page: 0,
			page_size: DEFAULT_PAGE_SIZE,
			selected: IndexSet::new(),
		}
	}
}

impl ViewState {
	#[must_use]
	pub fn search_text(&self) -> &str {
		&self.search_text
	}

	#[must_use]
	pub fn status_filter(&self) -> &BTreeSet<Status> {
		&self.status_filter
	}

	#[must_use]
	pub fn column_filters(&self) -> &BTreeMap<Field, ColumnFilter> {
		&self.column_filters
	}

	#[must_use]
	pub fn sort(&self) -> Option<SortKey> {
		self.sort
	}

	#[must_use]
	pub fn page(&self) -> usize {
		self.page
	}

	#[must_use]
	pub fn page_size(&self) -> usize {
		self.page_size
	}

	/// Selected identifiers in the order they were selected.
	#[must_use]
	pub fn selected(&self) -> &IndexSet<RecordId> {
		&self.selected
	}
}
