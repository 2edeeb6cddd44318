use std::cmp::Ordering;

use super::state::{SortDirection, SortKey, ViewState};
use crate::columns::ColumnSet;
use crate::model::{FieldValue, Record};

/// Indices into `records` that pass every filter, in base order.
pub(super) fn filter_indices(records: &[Record], columns: &ColumnSet, state: &ViewState) -> Vec<usize> {
	let needle = state.search_text.to_lowercase();
	records
		.iter()
		.enumerate()
		.filter(|(_, record)| matches_status(record, state))
		.filter(|(_, record)| needle.is_empty() || matches_search(record, columns, &needle))
		.filter(|(_, record)| matches_columns(record, state))
		.map(|(index, _)| index)
		.collect()
}

fn matches_status(record: &Record, state: &ViewState) -> bool {
	state.status_filter.is_empty() || state.status_filter.contains(&record.status)
}

fn matches_search(record: &Record, columns: &ColumnSet, needle: &str) -> bool {
	columns.searchable_fields().any(|field| {
		field
			.value(record)
			.search_text()
			.is_some_and(|haystack| haystack.contains(needle))
	})
}

fn matches_columns(record: &Record, state: &ViewState) -> bool {
	state
		.column_filters
		.iter()
		.all(|(field, filter)| filter.matches(field.value(record)))
}

/// Stable in-place sort of `indices` by `key`.
///
/// Descending order reverses the comparator rather than the output, so equal
/// keys keep their base order in both directions.
pub(super) fn sort_indices(records: &[Record], indices: &mut [usize], key: SortKey) {
	indices.sort_by(|&a, &b| {
		let ordering = compare_values(key.field.value(&records[a]), key.field.value(&records[b]));
		match key.direction {
			SortDirection::Asc => ordering,
			SortDirection::Desc => ordering.reverse(),
		}
	});
}

fn compare_values(a: FieldValue<'_>, b: FieldValue<'_>) -> Ordering {
	match (a, b) {
		(FieldValue::Number(a), FieldValue::Number(b)) => a.cmp(&b),
		(FieldValue::Text(a), FieldValue::Text(b)) => compare_text(a, b),
		(FieldValue::Missing, FieldValue::Missing) => Ordering::Equal,
		(FieldValue::Missing, _) => Ordering::Less,
		(_, FieldValue::Missing) => Ordering::Greater,
		(FieldValue::Number(_), FieldValue::Text(_)) => Ordering::Less,
		(FieldValue::Text(_), FieldValue::Number(_)) => Ordering::Greater,
	}
}

/// Case-insensitive comparison by scalar value, falling back to exact order
/// so that distinct strings never compare equal.
pub(crate) fn compare_text(a: &str, b: &str) -> Ordering {
	let folded_a = a.chars().flat_map(char::to_lowercase);
	let folded_b = b.chars().flat_map(char::to_lowercase);
	folded_a.cmp(folded_b).then_with(|| a.cmp(b))
}
