use anyhow::{Context, Result};
use config::Config;

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::build_config;
use crate::cli::CliArgs;

/// Load configuration by combining CLI arguments, config files and environment
/// variables.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let layered = build_config(cli)?;
	resolve_layers(layered, cli)
}

/// Deserialize already layered sources, then let CLI flags win.
fn resolve_layers(layered: Config, cli: &CliArgs) -> Result<ResolvedConfig> {
	let mut raw: RawConfig = layered
		.try_deserialize()
		.context("failed to deserialize configuration")?;
	raw.apply_cli_overrides(cli);
	raw.resolve(cli)
}

#[cfg(test)]
mod tests {
	use clap::Parser;
	use config::{File, FileFormat};
	use tabview::{ColumnPreset, Field, SortDirection, Status};

	use super::*;

	fn layered(toml: &str) -> Config {
		Config::builder()
			.add_source(File::from_str(toml, FileFormat::Toml))
			.build()
			.unwrap()
	}

	#[test]
	fn file_values_resolve_to_typed_settings() {
		let cli = CliArgs::parse_from(["tabview"]);
		let config = resolve_layers(
			layered(
				r#"
				[view]
				statuses = ["resigned"]
				sort = "joinDate"
				page_size = 4

				[ui]
				preset = "korean"
				title = "직원"
				"#,
			),
			&cli,
		);
		// joinDate has no sortable column in the korean preset
		let err = config.unwrap_err().to_string();
		assert!(err.contains("configuration key `view.sort`"));

		let config = resolve_layers(
			layered(
				r#"
				[view]
				statuses = ["resigned"]
				sort = "department"
				direction = "descending"
				page_size = 4

				[ui]
				preset = "korean"
				title = "직원"
				"#,
			),
			&cli,
		)
		.unwrap();
		assert_eq!(config.statuses, vec![Status::Resigned]);
		let sort = config.sort.unwrap();
		assert_eq!((sort.field, sort.direction), (Field::Department, SortDirection::Desc));
		assert_eq!(config.page_size, 4);
		assert_eq!(config.preset, ColumnPreset::Korean);
		assert_eq!(config.title, "직원");
	}

	#[test]
	fn cli_flags_beat_file_values() {
		let cli = CliArgs::parse_from(["tabview", "--page-size", "3", "-q", "kim"]);
		let config = resolve_layers(
			layered("[view]\npage_size = 20\nquery = \"lee\"\n"),
			&cli,
		)
		.unwrap();
		assert_eq!(config.page_size, 3);
		assert_eq!(config.query, "kim");
	}

	#[test]
	fn mistyped_values_fail_to_deserialize() {
		let cli = CliArgs::parse_from(["tabview"]);
		let err = resolve_layers(layered("[view]\npage_size = \"many\"\n"), &cli).unwrap_err();
		assert!(err.to_string().contains("failed to deserialize configuration"));
	}
}
