use std::path::PathBuf;

use anyhow::Result;
use serde::Deserialize;
use tabview::view::DEFAULT_PAGE_SIZE;
use tabview::{SortDirection, SortKey, Status};

use super::super::resolved::{ConfigSources, parse_direction, parse_sort_field, parse_statuses};
use super::super::util::sanitize_names;
use crate::cli::CliArgs;

/// Where records are loaded from.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct DataSection {
    pub(super) path: Option<PathBuf>,
}

impl DataSection {
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(path) = cli.data.clone() {
            self.path = Some(path);
        }
    }
}

/// Initial view state prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct ViewSection {
    pub(super) query: Option<String>,
    pub(super) statuses: Option<Vec<String>>,
    pub(super) sort: Option<String>,
    pub(super) direction: Option<String>,
    pub(super) page_size: Option<usize>,
    pub(super) page: Option<usize>,
}

pub(super) struct ViewResolution {
    pub(super) query: String,
    pub(super) statuses: Vec<Status>,
    pub(super) sort: Option<SortKey>,
    pub(super) page_size: usize,
    pub(super) page: usize,
}

impl ViewSection {
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(query) = cli.query.clone() {
            self.query = Some(query);
        }
        if let Some(statuses) = &cli.statuses {
            self.statuses = Some(statuses.clone());
        }
        if let Some(sort) = cli.sort.clone() {
            self.sort = Some(sort);
        }
        if let Some(direction) = cli.direction {
            self.direction = Some(direction.as_str().to_string());
        }
        if let Some(size) = cli.page_size {
            self.page_size = Some(size);
        }
        if let Some(page) = cli.page {
            self.page = Some(page);
        }
    }

    pub(super) fn resolve(self, sources: &ConfigSources) -> Result<ViewResolution> {
        let statuses = match self.statuses {
            Some(values) => parse_statuses(
                "view.statuses",
                sanitize_names(values),
                sources.source_for("view.statuses"),
            )?,
            None => Vec::new(),
        };

        let direction = match self.direction.as_deref() {
            Some(value) => {
                parse_direction("view.direction", value, sources.source_for("view.direction"))?
            }
            None => SortDirection::Asc,
        };

        let sort = match self.sort.as_deref().map(str::trim) {
            Some(value) if !value.is_empty() => {
                let field = parse_sort_field("view.sort", value, sources.source_for("view.sort"))?;
                Some(SortKey::new(field, direction))
            }
            _ => None,
        };

        Ok(ViewResolution {
            query: self.query.unwrap_or_default(),
            statuses,
            sort,
            page_size: self.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
            page: self.page.unwrap_or_default(),
        })
    }
}
