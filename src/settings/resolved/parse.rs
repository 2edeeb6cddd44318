use std::str::FromStr;

use log::LevelFilter;
use tabview::{ColumnPreset, Field, SortDirection, Status};

use super::{ConfigError, SettingSource};

const LEVEL_NAMES: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

pub(crate) fn parse_statuses(
	key: &'static str,
	values: Vec<String>,
	origin: SettingSource,
) -> Result<Vec<Status>, ConfigError> {
	values
		.into_iter()
		.map(|value| {
			Status::from_str(&value).map_err(|err| {
				ConfigError::invalid(key, value.clone(), origin.clone(), err.to_string())
			})
		})
		.collect()
}

pub(crate) fn parse_sort_field(
	key: &'static str,
	value: &str,
	origin: SettingSource,
) -> Result<Field, ConfigError> {
	Field::parse(value)
		.ok_or_else(|| ConfigError::invalid(key, value, origin, "unknown field"))
}

pub(crate) fn parse_direction(
	key: &'static str,
	value: &str,
	origin: SettingSource,
) -> Result<SortDirection, ConfigError> {
	SortDirection::from_str(value)
		.map_err(|_| ConfigError::not_one_of(key, value, origin, &["asc", "desc"]))
}

pub(crate) fn parse_preset(
	key: &'static str,
	value: &str,
	origin: SettingSource,
) -> Result<ColumnPreset, ConfigError> {
	ColumnPreset::from_str(value)
		.map_err(|_| ConfigError::not_one_of(key, value, origin, &["default", "korean"]))
}

pub(crate) fn parse_level(
	key: &'static str,
	value: &str,
	origin: SettingSource,
) -> Result<LevelFilter, ConfigError> {
	LevelFilter::from_str(value.trim())
		.map_err(|_| ConfigError::not_one_of(key, value, origin, &LEVEL_NAMES))
}
