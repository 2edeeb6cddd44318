//! The tabular view engine.
//!
//! [`TabularView`] owns a [`Collection`] and a [`ViewState`] and derives the
//! visible page from them on every read:
//!
//! ```text
//! visible = paginate(sort(filter(collection)), page, page_size)
//! ```
//!
//! Every operation either applies fully or returns an error and leaves the
//! view untouched.

mod page;
mod query;
mod snapshot;
mod state;

use log::{debug, warn};

pub use page::{PageWindow, page_count};
pub use snapshot::ViewSnapshot;
pub use state::{ColumnFilter, DEFAULT_PAGE_SIZE, SortDirection, SortKey, ViewState};

use crate::columns::ColumnSet;
use crate::error::{FieldViolation, ViewError};
use crate::model::{Collection, Field, Record, RecordDraft, RecordId, Status};

#[derive(Debug, Clone)]
pub struct TabularView {
	collection: Collection,
	columns: ColumnSet,
	state: ViewState,
}

impl TabularView {
	/// View over `collection` using the default employee columns.
	#[must_use]
	pub fn new(collection: Collection) -> Self {
		Self::with_columns(collection, ColumnSet::default())
	}

	#[must_use]
	pub fn with_columns(collection: Collection, columns: ColumnSet) -> Self {
		Self {
			collection,
			columns,
			state: ViewState::default(),
		}
	}

	#[must_use]
	pub fn collection(&self) -> &Collection {
		&self.collection
	}

	#[must_use]
	pub fn columns(&self) -> &ColumnSet {
		&self.columns
	}

	#[must_use]
	pub fn state(&self) -> &ViewState {
		&self.state
	}

	#[must_use]
	pub fn record(&self, id: RecordId) -> Option<&Record> {
		self.collection.get(id)
	}

	pub fn set_search_text(&mut self, text: impl Into<String>) {
		self.state.search_text = text.into();
		self.state.page = 0;
		debug!("search text set to {:?}", self.state.search_text);
	}

	/// Replace the allowed statuses; an empty set disables the filter.
	pub fn set_status_filter<I>(&mut self, statuses: I)
	where
		I: IntoIterator<Item = Status>,
	{
		self.state.status_filter = statuses.into_iter().collect();
		self.state.page = 0;
		debug!("status filter set to {:?}", self.state.status_filter);
	}

	/// Constrain a single column. A filter that accepts everything removes
	/// the column's constraint instead.
	pub fn set_column_filter(&mut self, field: Field, filter: ColumnFilter) -> Result<(), ViewError> {
		if self.columns.get(field).is_none() {
			warn!("rejected column filter on hidden field {field}");
			return Err(ViewError::invalid_field(field.key(), "not a column of this view"));
		}
		if matches!(filter, ColumnFilter::Range { .. }) && !field.is_numeric() {
			warn!("rejected range filter on text field {field}");
			return Err(ViewError::invalid_field(field.key(), "range filters need a numeric column"));
		}

		if filter.is_noop() {
			self.state.column_filters.remove(&field);
		} else {
			self.state.column_filters.insert(field, filter);
		}
		self.state.page = 0;
		Ok(())
	}

	pub fn clear_column_filters(&mut self) {
		self.state.column_filters.clear();
		self.state.page = 0;
	}

	/// Sort by the field named `field`.
	///
	/// Without an explicit direction, sorting again by the current field flips
	/// the direction; a new field starts ascending.
	pub fn set_sort(&mut self, field: &str, direction: Option<SortDirection>) -> Result<SortKey, ViewError> {
		let Some(parsed) = Field::parse(field) else {
			warn!("rejected sort on unknown field {field:?}");
			return Err(ViewError::invalid_field(field, "unknown field"));
		};
		self.set_sort_field(parsed, direction)
	}

	pub fn set_sort_field(&mut self, field: Field, direction: Option<SortDirection>) -> Result<SortKey, ViewError> {
		if !self.columns.is_sortable(field) {
			warn!("rejected sort on unsortable field {field}");
			return Err(ViewError::invalid_field(field.key(), "column is not sortable"));
		}

		let direction = direction.unwrap_or_else(|| match self.state.sort {
			Some(current) if current.field == field => current.direction.reversed(),
			_ => SortDirection::Asc,
		});
		let key = SortKey::new(field, direction);
		self.state.sort = Some(key);
		self.reconcile();
		debug!("sorting by {field} {direction}");
		Ok(key)
	}

	/// Return to base (insertion) order.
	pub fn clear_sort(&mut self) {
		self.state.sort = None;
	}

	/// Move to page `page`, clamped into the available range.
	pub fn set_page(&mut self, page: usize) {
		self.state.page = page.min(self.page_count() - 1);
	}

	pub fn next_page(&mut self) {
		self.set_page(self.state.page.saturating_add(1));
	}

	pub fn previous_page(&mut self) {
		self.set_page(self.state.page.saturating_sub(1));
	}

	pub fn set_page_size(&mut self, page_size: usize) -> Result<(), ViewError> {
		if page_size == 0 {
			warn!("rejected page size 0");
			return Err(ViewError::Validation(vec![FieldViolation::new(
				"pageSize",
				"must be a positive integer",
			)]));
		}
		self.state.page_size = page_size;
		self.state.page = 0;
		Ok(())
	}

	/// Flip the selection of `id`; unknown ids are ignored.
	pub fn toggle_select(&mut self, id: RecordId) {
		if !self.collection.contains(id) {
			return;
		}
		if !self.state.selected.shift_remove(&id) {
			self.state.selected.insert(id);
		}
	}

	/// Add every existing id in `ids` to the selection.
	pub fn select_all<I>(&mut self, ids: I)
	where
		I: IntoIterator<Item = RecordId>,
	{
		for id in ids {
			if self.collection.contains(id) {
				self.state.selected.insert(id);
			}
		}
	}

	/// Select the visible page, or deselect it when it is already fully
	/// selected.
	pub fn select_page(&mut self) {
		let visible = self.snapshot().visible_ids();
		if !visible.is_empty() && visible.iter().all(|id| self.state.selected.contains(id)) {
			for id in &visible {
				self.state.selected.shift_remove(id);
			}
		} else {
			self.select_all(visible);
		}
	}

	pub fn clear_selection(&mut self) {
		self.state.selected.clear();
	}

	/// Validate and append a new record, returning its identifier.
	pub fn add_record(&mut self, draft: RecordDraft) -> Result<RecordId, ViewError> {
		let id = self.collection.add(draft).inspect_err(|err| warn!("add rejected: {err}"))?;
		self.reconcile();
		debug!("added record {id}");
		Ok(id)
	}

	/// Merge `patch` into the record with `id`.
	pub fn update_record(&mut self, id: RecordId, patch: RecordDraft) -> Result<(), ViewError> {
		self.collection
			.update(id, &patch)
			.inspect_err(|err| warn!("update of {id} rejected: {err}"))?;
		self.reconcile();
		debug!("updated record {id}");
		Ok(())
	}

	/// Remove the record with `id` if it exists.
	pub fn remove_record(&mut self, id: RecordId) -> Option<Record> {
		let removed = self.collection.remove(id);
		if removed.is_some() {
			self.state.selected.shift_remove(&id);
			self.reconcile();
			debug!("removed record {id}");
		}
		removed
	}

	/// Remove every selected record, returning how many were removed.
	pub fn remove_selected(&mut self) -> usize {
		let ids: Vec<RecordId> = self.state.selected.iter().copied().collect();
		ids.into_iter()
			.filter(|id| self.remove_record(*id).is_some())
			.count()
	}

	/// Full filtered and sorted result, ignoring pagination.
	#[must_use]
	pub fn matches(&self) -> Vec<&Record> {
		let records = self.collection.records();
		self.derive().into_iter().map(|index| &records[index]).collect()
	}

	#[must_use]
	pub fn match_count(&self) -> usize {
		query::filter_indices(self.collection.records(), &self.columns, &self.state).len()
	}

	#[must_use]
	pub fn page_count(&self) -> usize {
		page_count(self.match_count(), self.state.page_size)
	}

	/// Derive the visible page and summary counts.
	#[must_use]
	pub fn snapshot(&self) -> ViewSnapshot<'_> {
		let matches = self.matches();
		let window = PageWindow::new(matches.len(), self.state.page, self.state.page_size);
		let visible = matches[window.range()].to_vec();
		let selected = self
			.state
			.selected
			.iter()
			.copied()
			.filter(|id| self.collection.contains(*id))
			.collect();

		ViewSnapshot {
			visible,
			total_matches: matches.len(),
			page: window.page,
			page_count: window.page_count,
			page_size: self.state.page_size,
			selected,
			sort: self.state.sort,
		}
	}

	fn derive(&self) -> Vec<usize> {
		let records = self.collection.records();
		let mut indices = query::filter_indices(records, &self.columns, &self.state);
		if let Some(key) = self.state.sort {
			query::sort_indices(records, &mut indices, key);
		}
		indices
	}

	/// Re-establish the state invariants after the collection changed:
	/// selection only names existing records and the page is in range.
	fn reconcile(&mut self) {
		let collection = &self.collection;
		self.state.selected.retain(|id| collection.contains(*id));
		self.state.page = self.state.page.min(self.page_count() - 1);
	}
}

#[cfg(test)]
mod tests;
