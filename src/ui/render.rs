use ratatui::{
	Frame,
	layout::{Alignment, Constraint, Layout, Margin, Rect},
	text::{Line, Span},
	widgets::{Cell, Clear, Paragraph, Row, Table},
};
use unicode_width::UnicodeWidthStr;

use super::App;
use crate::view::{SortDirection, ViewSnapshot};

const MARKER_WIDTH: u16 = 3;
const MAX_COLUMN_WIDTH: usize = 28;

impl App {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});
		let [input_area, table_area, footer_area] = Layout::vertical([
			Constraint::Length(1),
			Constraint::Min(1),
			Constraint::Length(1),
		])
		.areas(area);

		self.render_input(frame, input_area);
		self.render_table(frame, table_area);
		self.render_footer(frame, footer_area);
	}

	fn render_input(&self, frame: &mut Frame, area: Rect) {
		let title = self.title.as_deref().unwrap_or("Search");
		let line = Line::from(vec![
			Span::styled(format!("{title} > "), self.theme.prompt_style()),
			Span::raw(self.query.as_str()),
		]);
		frame.render_widget(Paragraph::new(line), area);
	}

	fn render_table(&mut self, frame: &mut Frame, area: Rect) {
		let snapshot = self.view.snapshot();
		let columns = self.view.columns();

		let header_cells = std::iter::once(Cell::from("")).chain(columns.iter().map(|column| {
			let indicator = match snapshot.sort {
				Some(key) if key.field == column.field => match key.direction {
					SortDirection::Asc => " ▲",
					SortDirection::Desc => " ▼",
				},
				_ => "",
			};
			Cell::from(format!("{}{indicator}", column.label))
		}));
		let header = Row::new(header_cells).style(self.theme.header_style());

		let rows: Vec<Row> = snapshot
			.visible
			.iter()
			.map(|record| {
				let marker = if snapshot.is_selected(record.id) { "[x]" } else { "[ ]" };
				let cells = std::iter::once(Cell::from(marker))
					.chain(columns.iter().map(|column| Cell::from(column.render(record))));
				let row = Row::new(cells);
				if snapshot.is_selected(record.id) {
					row.style(self.theme.selected_style())
				} else {
					row
				}
			})
			.collect();

		let widths = column_widths(self, &snapshot);
		let table = Table::new(rows, widths)
			.header(header)
			.column_spacing(1)
			.row_highlight_style(self.theme.row_highlight_style());
		let empty = snapshot.visible.is_empty();
		frame.render_stateful_widget(table, area, &mut self.table_state);

		const HEADER_HEIGHT: u16 = 1;
		if empty && area.height > HEADER_HEIGHT {
			let message_area = Rect {
				y: area.y + HEADER_HEIGHT,
				height: area.height - HEADER_HEIGHT,
				..area
			};
			let message = Paragraph::new("No results")
				.alignment(Alignment::Center)
				.style(self.theme.empty_style());
			frame.render_widget(Clear, message_area);
			frame.render_widget(message, message_area);
		}
	}

	fn render_footer(&self, frame: &mut Frame, area: Rect) {
		let text = match &self.message {
			Some(message) => message.clone(),
			None => footer_text(&self.view.snapshot(), self.status_filter.map(|s| s.as_str())),
		};
		frame.render_widget(Paragraph::new(text).style(self.theme.footer_style()), area);
	}
}

/// Size each column to its widest cell on the current page.
fn column_widths(app: &App, snapshot: &ViewSnapshot<'_>) -> Vec<Constraint> {
	let mut widths = vec![Constraint::Length(MARKER_WIDTH)];
	for column in app.view.columns().iter() {
		let header = column.label.width() + 2;
		let widest = snapshot
			.visible
			.iter()
			.map(|record| column.render(record).width())
			.max()
			.unwrap_or(0);
		let width = header.max(widest).min(MAX_COLUMN_WIDTH);
		widths.push(Constraint::Length(u16::try_from(width).unwrap_or(u16::MAX)));
	}
	widths
}

pub(crate) fn footer_text(snapshot: &ViewSnapshot<'_>, status: Option<&str>) -> String {
	let mut text = format!(
		"Page {}/{} · {} matches · {} selected",
		snapshot.page + 1,
		snapshot.page_count,
		snapshot.total_matches,
		snapshot.selected_count()
	);
	if let Some(key) = snapshot.sort {
		text.push_str(&format!(" · sort {} {}", key.field, key.direction));
	}
	if let Some(status) = status {
		text.push_str(&format!(" · status {status}"));
	}
	text
}
