use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{App, ViewOutcome};
use crate::model::{Field, Status};
use crate::view::SortDirection;

impl App {
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Option<ViewOutcome> {
		self.message = None;
		let control = key.modifiers.contains(KeyModifiers::CONTROL);

		match key.code {
			KeyCode::Esc => return Some(self.outcome(false)),
			KeyCode::Enter => return Some(self.outcome(true)),
			KeyCode::Up => self.move_cursor_up(),
			KeyCode::Down => self.move_cursor_down(),
			KeyCode::Left | KeyCode::PageUp => self.change_page(false),
			KeyCode::Right | KeyCode::PageDown => self.change_page(true),
			KeyCode::Tab => self.toggle_cursor_selection(),
			KeyCode::Delete => self.remove_cursor_record(),
			KeyCode::Backspace => {
				if self.query.pop().is_some() {
					self.apply_query();
				}
			}
			KeyCode::Char(ch) if control => match ch {
				'a' => self.view.select_page(),
				'x' => self.view.clear_selection(),
				's' => self.cycle_sort_field(),
				'r' => self.reverse_sort(),
				'f' => self.cycle_status_filter(),
				'd' => self.remove_cursor_record(),
				'c' => return Some(self.outcome(false)),
				_ => {}
			},
			KeyCode::Char(ch) => {
				self.query.push(ch);
				self.apply_query();
			}
			_ => {}
		}

		self.ensure_cursor();
		None
	}

	fn apply_query(&mut self) {
		self.view.set_search_text(self.query.clone());
		self.table_state.select(Some(0));
	}

	fn move_cursor_up(&mut self) {
		if let Some(selected) = self.table_state.selected()
			&& selected > 0
		{
			self.table_state.select(Some(selected - 1));
		}
	}

	fn move_cursor_down(&mut self) {
		if let Some(selected) = self.table_state.selected() {
			let len = self.view.snapshot().visible.len();
			if selected + 1 < len {
				self.table_state.select(Some(selected + 1));
			}
		}
	}

	fn change_page(&mut self, forward: bool) {
		let before = self.view.state().page();
		if forward {
			self.view.next_page();
		} else {
			self.view.previous_page();
		}
		if self.view.state().page() != before {
			self.table_state.select(Some(0));
		}
	}

	fn toggle_cursor_selection(&mut self) {
		if let Some(id) = self.cursor_id() {
			self.view.toggle_select(id);
		}
	}

	fn remove_cursor_record(&mut self) {
		if let Some(id) = self.cursor_id()
			&& let Some(record) = self.view.remove_record(id)
		{
			self.message = Some(format!("Removed {}", record.name));
		}
	}

	/// Step to the next sortable column; after the last one the sort is cleared.
	fn cycle_sort_field(&mut self) {
		let fields: Vec<Field> = self.view.columns().sortable_fields().collect();
		let next = match self.view.state().sort() {
			None => fields.first().copied(),
			Some(current) => fields
				.iter()
				.position(|field| *field == current.field)
				.and_then(|position| fields.get(position + 1).copied()),
		};
		match next {
			Some(field) => {
				if let Err(err) = self.view.set_sort_field(field, Some(SortDirection::Asc)) {
					self.message = Some(err.to_string());
				}
			}
			None => self.view.clear_sort(),
		}
	}

	fn reverse_sort(&mut self) {
		if let Some(current) = self.view.state().sort()
			&& let Err(err) = self.view.set_sort_field(current.field, None)
		{
			self.message = Some(err.to_string());
		}
	}

	/// All statuses, then each single status in turn.
	fn cycle_status_filter(&mut self) {
		self.status_filter = match self.status_filter {
			None => Some(Status::Active),
			Some(status) => status.next(),
		};
		self.view.set_status_filter(self.status_filter);
		self.table_state.select(Some(0));
	}
}
