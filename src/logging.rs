//! Logger setup for the binary.
//!
//! The terminal UI owns the screen while it runs, so interactive sessions log
//! to a file; batch runs log to stderr.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::LevelFilter;
use simplelog::{ColorChoice, Config, ConfigBuilder, TermLogger, TerminalMode, WriteLogger};

use crate::app_dirs;

const LOG_FILE_NAME: &str = "tabview.log";

/// Where log records are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
	Stderr,
	File(PathBuf),
}

/// Default log file inside the data directory.
pub fn default_log_file() -> Result<PathBuf> {
	Ok(app_dirs::get_data_dir()?.join(LOG_FILE_NAME))
}

/// Install the global logger. Passing [`LevelFilter::Off`] installs nothing.
pub fn initialize(level: LevelFilter, target: &LogTarget) -> Result<()> {
	if level == LevelFilter::Off {
		return Ok(());
	}

	match target {
		LogTarget::Stderr => {
			TermLogger::init(level, config(), TerminalMode::Stderr, ColorChoice::Auto)
				.context("failed to install terminal logger")?;
		}
		LogTarget::File(path) => {
			let file = open_log_file(path)?;
			WriteLogger::init(level, config(), file).context("failed to install file logger")?;
		}
	}
	Ok(())
}

fn config() -> Config {
	ConfigBuilder::new()
		.set_target_level(LevelFilter::Error)
		.set_thread_level(LevelFilter::Off)
		.build()
}

fn open_log_file(path: &Path) -> Result<File> {
	if let Some(parent) = path.parent()
		&& !parent.as_os_str().is_empty()
	{
		fs::create_dir_all(parent)
			.with_context(|| format!("failed to create log directory {}", parent.display()))?;
	}
	File::create(path).with_context(|| format!("failed to open log file {}", path.display()))
}
