use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy)]
pub struct Theme {
	pub header: Style,
	pub row_highlight: Style,
	pub prompt: Style,
	pub empty: Style,
	pub selected: Style,
	pub footer: Style,
}

impl Default for Theme {
	fn default() -> Self {
		Self {
			header: Style::new()
				.fg(Color::Black)
				.bg(Color::Cyan)
				.add_modifier(Modifier::BOLD),
			row_highlight: Style::new().bg(Color::DarkGray),
			prompt: Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD),
			empty: Style::new().fg(Color::DarkGray),
			selected: Style::new().fg(Color::Yellow),
			footer: Style::new().fg(Color::Gray),
		}
	}
}

impl Theme {
	#[must_use]
	pub fn header_style(&self) -> Style {
		self.header
	}

	#[must_use]
	pub fn row_highlight_style(&self) -> Style {
		self.row_highlight
	}

	#[must_use]
	pub fn prompt_style(&self) -> Style {
		self.prompt
	}

	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty
	}

	#[must_use]
	pub fn selected_style(&self) -> Style {
		self.selected
	}

	#[must_use]
	pub fn footer_style(&self) -> Style {
		self.footer
	}
}
