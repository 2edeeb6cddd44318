//! Delimited-text rendering of a filtered result set.

use crate::columns::{ColumnSet, format};
use crate::model::Record;
use crate::view::TabularView;

/// How records are written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportOptions {
	pub delimiter: char,
	/// Write a header line of column labels.
	pub header: bool,
	/// Use column formatters instead of raw values.
	pub formatted: bool,
}

impl Default for ExportOptions {
	fn default() -> Self {
		Self {
			delimiter: ',',
			header: true,
			formatted: false,
		}
	}
}

/// Every record matching the view's filters in its current sort order,
/// regardless of which page is visible.
#[must_use]
pub fn export_matches(view: &TabularView, options: ExportOptions) -> String {
	to_delimited(view.columns(), view.matches(), options)
}

#[must_use]
pub fn to_delimited<'a, I>(columns: &ColumnSet, records: I, options: ExportOptions) -> String
where
	I: IntoIterator<Item = &'a Record>,
{
	let mut lines = Vec::new();
	if options.header {
		lines.push(join(columns.labels().map(str::to_string), options.delimiter));
	}
	for record in records {
		let cells = columns.iter().map(|column| {
			if options.formatted {
				column.render(record)
			} else {
				format::raw(column.field, record)
			}
		});
		lines.push(join(cells, options.delimiter));
	}
	let mut out = lines.join("\n");
	out.push('\n');
	out
}

fn join(cells: impl Iterator<Item = String>, delimiter: char) -> String {
	cells
		.map(|cell| quote(&cell, delimiter))
		.collect::<Vec<_>>()
		.join(&delimiter.to_string())
}

/// Quote a cell when it contains the delimiter, a quote or a line break.
fn quote(cell: &str, delimiter: char) -> String {
	let needs_quotes = cell
		.chars()
		.any(|ch| ch == delimiter || ch == '"' || ch == '\n' || ch == '\r');
	if needs_quotes {
		format!("\"{}\"", cell.replace('"', "\"\""))
	} else {
		cell.to_string()
	}
}
