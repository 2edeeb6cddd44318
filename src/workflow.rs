use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::{LevelFilter, info};
use tabview::logging::{self, LogTarget};
use tabview::model::sample;
use tabview::{App, Collection, Record, RecordDraft, TabularView, ViewError, ViewOutcome};

use crate::cli::{OutputFormat, format_outcome, format_records, format_snapshot};
use crate::settings::ResolvedConfig;

/// Coordinates building the view from configuration and running it.
pub(crate) struct ViewWorkflow {
    view: TabularView,
    title: String,
}

impl ViewWorkflow {
    pub(crate) fn from_config(config: &ResolvedConfig) -> Result<Self> {
        let records = match &config.data_path {
            Some(path) => load_records(path)?,
            None => sample::employees(),
        };
        let collection = Collection::new(records).context("invalid record data")?;
        let mut view = TabularView::with_columns(collection, config.columns());

        view.set_search_text(config.query.clone());
        view.set_status_filter(config.statuses.iter().copied());
        if let Some(sort) = config.sort {
            view.set_sort_field(sort.field, Some(sort.direction))?;
        }
        view.set_page_size(config.page_size)?;
        view.set_page(config.page);

        info!(
            "loaded {} records, {} match the initial view",
            view.collection().len(),
            view.match_count()
        );

        Ok(Self {
            view,
            title: config.title.clone(),
        })
    }

    pub(crate) fn view(&self) -> &TabularView {
        &self.view
    }

    /// Print the derived page, or every match when `all` is set.
    pub(crate) fn render_batch(&self, format: OutputFormat, all: bool) -> Result<String> {
        if all {
            let matches = self.view.matches();
            format_records(format, self.view.columns(), &matches)
        } else {
            format_snapshot(format, self.view.columns(), &self.view.snapshot())
        }
    }

    /// Run the terminal UI and render its outcome.
    pub(crate) fn run_interactive(self, format: OutputFormat) -> Result<String> {
        let columns = self.view.columns().clone();
        let mut app = App::new(self.view).with_title(self.title);
        let outcome: ViewOutcome = app.run()?;
        format_outcome(format, &columns, &outcome)
    }
}

/// Pick the log destination for the chosen mode and install the logger.
pub(crate) fn init_logging(config: &ResolvedConfig, batch: bool) -> Result<()> {
    if config.log_level == LevelFilter::Off {
        return Ok(());
    }
    let target = match (&config.log_file, batch) {
        (Some(path), _) => LogTarget::File(path.clone()),
        (None, true) => LogTarget::Stderr,
        (None, false) => LogTarget::File(logging::default_log_file()?),
    };
    logging::initialize(config.log_level, &target)
}

/// Read a JSON array of records, checking each one like an added record.
pub(crate) fn load_records(path: &Path) -> Result<Vec<Record>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read data file {}", path.display()))?;
    let records: Vec<Record> = serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse records in {}", path.display()))?;

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            RecordDraft::from(&record)
                .validate(record.id)
                .map_err(ViewError::Validation)
                .with_context(|| format!("record {index} (id {}) is invalid", record.id))
        })
        .collect()
}
