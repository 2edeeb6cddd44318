use std::fmt::Write;

use anyhow::Result;
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use tabview::{app_dirs, logging};

/// Version banner listing where configuration is read and logs are written.
pub(super) fn long_version() -> &'static str {
	let mut details = format!("tabview {}\n", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details, "config file: {}", describe(app_dirs::config_file()));
	let _ = writeln!(details, "log file: {}", describe(logging::default_log_file()));

	Box::leak(details.into_boxed_str())
}

fn describe(path: Result<std::path::PathBuf>) -> String {
	match path {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	}
}

pub(super) fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Blue.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Blue.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Magenta.on_default())
		.error(AnsiColor::Red.on_default().effects(Effects::BOLD))
		.valid(AnsiColor::Green.on_default())
		.invalid(AnsiColor::Yellow.on_default())
}
