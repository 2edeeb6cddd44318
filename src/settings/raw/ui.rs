use std::path::PathBuf;

use anyhow::Result;
use log::LevelFilter;
use serde::Deserialize;
use tabview::ColumnPreset;

use super::super::resolved::{ConfigSources, DEFAULT_TITLE, parse_level, parse_preset};
use super::super::util::sanitize_headers;
use crate::cli::CliArgs;

/// UI related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) title: Option<String>,
	pub(super) preset: Option<String>,
	pub(super) headers: Option<Vec<String>>,
}

pub(super) struct UiResolution {
	pub(super) title: String,
	pub(super) preset: ColumnPreset,
	pub(super) headers: Option<Vec<String>>,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(title) = cli.title.clone() {
			self.title = Some(title);
		}
		if let Some(preset) = cli.ui_preset {
			self.preset = Some(preset.as_str().to_string());
		}
		if let Some(headers) = &cli.headers {
			self.headers = Some(headers.clone());
		}
	}

	pub(super) fn resolve(self, sources: &ConfigSources) -> Result<UiResolution> {
		let preset = match self.preset.as_deref() {
			Some(value) => parse_preset("ui.preset", value, sources.source_for("ui.preset"))?,
			None => ColumnPreset::Default,
		};

		let headers = self
			.headers
			.map(sanitize_headers)
			.filter(|headers| !headers.is_empty());

		let title = self
			.title
			.filter(|title| !title.trim().is_empty())
			.unwrap_or_else(|| DEFAULT_TITLE.to_string());

		Ok(UiResolution {
			title,
			preset,
			headers,
		})
	}
}

/// Logger settings prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LogSection {
	pub(super) level: Option<String>,
	pub(super) file: Option<PathBuf>,
}

pub(super) struct LogResolution {
	pub(super) level: LevelFilter,
	pub(super) file: Option<PathBuf>,
}

impl LogSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(level) = cli.log_level.clone() {
			self.level = Some(level);
		}
		if let Some(file) = cli.log_file.clone() {
			self.file = Some(file);
		}
	}

	pub(super) fn resolve(self, sources: &ConfigSources) -> Result<LogResolution> {
		let level = match self.level.as_deref() {
			Some(value) => parse_level("log.level", value, sources.source_for("log.level"))?,
			None => LevelFilter::Warn,
		};
		Ok(LogResolution {
			level,
			file: self.file,
		})
	}
}
