use anyhow::{Error, Result};
use serde::Deserialize;
use std::env;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod ui;
mod view;

use ui::{LogSection, UiSection};
use view::{DataSection, ViewSection};

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
    data: DataSection,
    view: ViewSection,
    ui: UiSection,
    log: LogSection,
}

impl RawConfig {
    /// Apply CLI overrides on top of the raw configuration values.
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        self.data.apply_cli_overrides(cli);
        self.view.apply_cli_overrides(cli);
        self.ui.apply_cli_overrides(cli);
        self.log.apply_cli_overrides(cli);
    }

    /// Convert the raw configuration into a [`ResolvedConfig`], validating and
    /// filling defaults where required.
    pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
        let sources = self.sources(cli);

        let view = self.view.resolve(&sources)?;
        let ui = self.ui.resolve(&sources)?;
        let log = self.log.resolve(&sources)?;

        let config = ResolvedConfig {
            data_path: self.data.path,
            query: view.query,
            statuses: view.statuses,
            sort: view.sort,
            page_size: view.page_size,
            page: view.page,
            title: ui.title,
            preset: ui.preset,
            headers: ui.headers,
            log_level: log.level,
            log_file: log.file,
        };

        config.validate(&sources).map_err(Error::new)?;

        Ok(config)
    }

    fn sources(&self, cli: &CliArgs) -> ConfigSources {
        let mut sources = ConfigSources::default();
        sources.record(
            "view.statuses",
            detect_source(
                cli.statuses.is_some(),
                self.view.statuses.is_some(),
                "TABVIEW__VIEW__STATUSES",
                "--status",
                "view.statuses",
            ),
        );
        sources.record(
            "view.sort",
            detect_source(
                cli.sort.is_some(),
                self.view.sort.is_some(),
                "TABVIEW__VIEW__SORT",
                "--sort",
                "view.sort",
            ),
        );
        sources.record(
            "view.direction",
            detect_source(
                cli.direction.is_some(),
                self.view.direction.is_some(),
                "TABVIEW__VIEW__DIRECTION",
                "--direction",
                "view.direction",
            ),
        );
        sources.record(
            "view.page_size",
            detect_source(
                cli.page_size.is_some(),
                self.view.page_size.is_some(),
                "TABVIEW__VIEW__PAGE_SIZE",
                "--page-size",
                "view.page_size",
            ),
        );
        sources.record(
            "ui.preset",
            detect_source(
                cli.ui_preset.is_some(),
                self.ui.preset.is_some(),
                "TABVIEW__UI__PRESET",
                "--ui-preset",
                "ui.preset",
            ),
        );
        sources.record(
            "log.level",
            detect_source(
                cli.log_level.is_some(),
                self.log.level.is_some(),
                "TABVIEW__LOG__LEVEL",
                "--log-level",
                "log.level",
            ),
        );
        sources
    }
}

fn detect_source(
    cli_present: bool,
    value_present: bool,
    env_var: &'static str,
    cli_flag: &'static str,
    key: &'static str,
) -> Option<SettingSource> {
    if !value_present {
        return None;
    }

    if cli_present {
        return Some(SettingSource::CliFlag(cli_flag));
    }

    if env::var_os(env_var).is_some() {
        return Some(SettingSource::Environment(env_var));
    }

    Some(SettingSource::ConfigKey(key))
}
