use std::path::PathBuf;

use log::LevelFilter;
use tabview::{ColumnPreset, ColumnSet, SortKey, Status};

mod errors;
mod parse;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use parse::{
	parse_direction, parse_level, parse_preset, parse_sort_field, parse_statuses,
};
pub(crate) use sources::{ConfigSources, SettingSource};

/// Prompt title used when no `[ui] title` is configured.
pub(crate) const DEFAULT_TITLE: &str = "Employees";

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub data_path: Option<PathBuf>,
	pub query: String,
	pub statuses: Vec<Status>,
	pub sort: Option<SortKey>,
	pub page_size: usize,
	pub page: usize,
	pub title: String,
	pub preset: ColumnPreset,
	pub headers: Option<Vec<String>>,
	pub log_level: LevelFilter,
	pub log_file: Option<PathBuf>,
}

impl ResolvedConfig {
	/// Columns of the chosen preset with any header overrides applied.
	pub fn columns(&self) -> ColumnSet {
		let columns = ColumnSet::from_preset(self.preset);
		match &self.headers {
			Some(headers) => columns.with_labels(headers),
			None => columns,
		}
	}

	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}

#[cfg(test)]
impl Default for ResolvedConfig {
	fn default() -> Self {
		Self {
			data_path: None,
			query: String::new(),
			statuses: Vec::new(),
			sort: None,
			page_size: tabview::view::DEFAULT_PAGE_SIZE,
			page: 0,
			title: DEFAULT_TITLE.to_string(),
			preset: ColumnPreset::Default,
			headers: None,
			log_level: LevelFilter::Warn,
			log_file: None,
		}
	}
}
