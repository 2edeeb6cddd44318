//! Terminal table surface over a [`TabularView`].
//!
//! The [`App`] keeps only presentation state (cursor row, prompt text); every
//! frame is redrawn from [`TabularView::snapshot`].

mod actions;
mod render;
mod runtime;
mod theme;

use ratatui::widgets::TableState;
use serde::Serialize;

pub use runtime::run;
pub use theme::Theme;

use crate::model::{Record, RecordId, Status};
use crate::view::TabularView;

/// Result of an interactive session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewOutcome {
	pub accepted: bool,
	pub query: String,
	pub selected: Vec<Record>,
}

pub struct App {
	pub(crate) view: TabularView,
	pub(crate) table_state: TableState,
	pub(crate) query: String,
	pub(crate) title: Option<String>,
	pub(crate) theme: Theme,
	pub(crate) status_filter: Option<Status>,
	pub(crate) message: Option<String>,
}

impl App {
	#[must_use]
	pub fn new(view: TabularView) -> Self {
		let query = view.state().search_text().to_string();
		let status_filter = match view.state().status_filter().len() {
			1 => view.state().status_filter().first().copied(),
			_ => None,
		};
		let mut app = Self {
			view,
			table_state: TableState::default(),
			query,
			title: None,
			theme: Theme::default(),
			status_filter,
			message: None,
		};
		app.ensure_cursor();
		app
	}

	#[must_use]
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = Some(title.into());
		self
	}

	#[must_use]
	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = theme;
		self
	}

	#[must_use]
	pub fn view(&self) -> &TabularView {
		&self.view
	}

	#[must_use]
	pub fn into_view(self) -> TabularView {
		self.view
	}

	/// Identifier of the record under the cursor.
	#[must_use]
	pub fn cursor_id(&self) -> Option<RecordId> {
		let index = self.table_state.selected()?;
		self.view.snapshot().visible.get(index).map(|record| record.id)
	}

	/// Keep the cursor on a visible row after the page contents changed.
	pub(crate) fn ensure_cursor(&mut self) {
		let len = self.view.snapshot().visible.len();
		match self.table_state.selected() {
			_ if len == 0 => self.table_state.select(None),
			None => self.table_state.select(Some(0)),
			Some(selected) if selected >= len => self.table_state.select(Some(len - 1)),
			Some(_) => {}
		}
	}

	pub(crate) fn outcome(&self, accepted: bool) -> ViewOutcome {
		let snapshot = self.view.snapshot();
		let mut selected: Vec<Record> = snapshot
			.selected
			.iter()
			.filter_map(|id| self.view.record(*id).cloned())
			.collect();
		if accepted
			&& selected.is_empty()
			&& let Some(record) = self.cursor_id().and_then(|id| self.view.record(id))
		{
			selected.push(record.clone());
		}
		ViewOutcome {
			accepted,
			query: self.query.clone(),
			selected: if accepted { selected } else { Vec::new() },
		}
	}
}

#[cfg(test)]
mod tests;
