use anyhow::Result;
use serde_json::json;
use tabview::{ColumnSet, ExportOptions, Record, ViewOutcome, ViewSnapshot, to_delimited};
use unicode_width::UnicodeWidthStr;

use super::OutputFormat;

/// Render one derived page in the chosen format.
pub(crate) fn format_snapshot(
	format: OutputFormat,
	columns: &ColumnSet,
	snapshot: &ViewSnapshot<'_>,
) -> Result<String> {
	Ok(match format {
		OutputFormat::Plain => {
			let mut out = format_table(columns, &snapshot.visible);
			out.push_str(&format!(
				"page {}/{} · {} matches · {} selected\n",
				snapshot.page + 1,
				snapshot.page_count,
				snapshot.total_matches,
				snapshot.selected_count()
			));
			out
		}
		OutputFormat::Json => serde_json::to_string_pretty(snapshot)? + "\n",
		OutputFormat::Csv => to_delimited(
			columns,
			snapshot.visible.iter().copied(),
			ExportOptions::default(),
		),
	})
}

/// Render a full match list in the chosen format.
pub(crate) fn format_records(
	format: OutputFormat,
	columns: &ColumnSet,
	records: &[&Record],
) -> Result<String> {
	Ok(match format {
		OutputFormat::Plain => format_table(columns, records),
		OutputFormat::Json => serde_json::to_string_pretty(records)? + "\n",
		OutputFormat::Csv => to_delimited(columns, records.iter().copied(), ExportOptions::default()),
	})
}

/// Render the result of an interactive session.
pub(crate) fn format_outcome(
	format: OutputFormat,
	columns: &ColumnSet,
	outcome: &ViewOutcome,
) -> Result<String> {
	match format {
		OutputFormat::Json => {
			let payload = json!({
				"accepted": outcome.accepted,
				"query": outcome.query,
				"selected": outcome.selected,
			});
			Ok(serde_json::to_string_pretty(&payload)? + "\n")
		}
		_ if !outcome.accepted => Ok(format!("Cancelled (query: '{}')\n", outcome.query)),
		_ if outcome.selected.is_empty() => Ok("No selection\n".to_string()),
		_ => {
			let records: Vec<&Record> = outcome.selected.iter().collect();
			format_records(format, columns, &records)
		}
	}
}

/// Align cells into columns padded to their display width.
pub(crate) fn format_table(columns: &ColumnSet, records: &[&Record]) -> String {
	let header: Vec<String> = columns.labels().map(str::to_string).collect();
	let rows: Vec<Vec<String>> = records
		.iter()
		.map(|record| columns.iter().map(|column| column.render(record)).collect())
		.collect();

	let mut widths: Vec<usize> = header.iter().map(|cell| cell.width()).collect();
	for row in &rows {
		for (width, cell) in widths.iter_mut().zip(row) {
			*width = (*width).max(cell.width());
		}
	}

	let mut out = String::new();
	for row in std::iter::once(&header).chain(rows.iter()) {
		let line = row
			.iter()
			.zip(&widths)
			.map(|(cell, width)| pad(cell, *width))
			.collect::<Vec<_>>()
			.join("  ");
		out.push_str(line.trim_end());
		out.push('\n');
	}
	out
}

fn pad(cell: &str, width: usize) -> String {
	let fill = width.saturating_sub(cell.width());
	format!("{cell}{}", " ".repeat(fill))
}
