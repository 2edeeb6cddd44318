use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::{DirectionArg, OutputFormat, UiPresetArg};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `tabview` binary.
#[derive(Parser, Debug)]
#[command(
    name = "tabview",
    version,
    long_version = long_version(),
    about = "Search, filter, sort and page through tabular records",
    color = ColorChoice::Auto,
    styles = cli_styles()
)]
pub(crate) struct CliArgs {
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "TABVIEW_CONFIG",
        action = ArgAction::Append,
        help = "Additional configuration file to merge (default: none)"
    )]
    pub(crate) config: Vec<PathBuf>,
    #[arg(
        short = 'n',
        long = "no-config",
        help = "Skip loading default configuration files (default: disabled)"
    )]
    pub(crate) no_config: bool,
    #[arg(
        short = 'd',
        long,
        value_name = "FILE",
        help = "JSON file holding an array of records (default: built-in sample)"
    )]
    pub(crate) data: Option<PathBuf>,
    #[arg(
        short = 't',
        long,
        value_name = "TITLE",
        help = "Set the search prompt title (default: Employees)"
    )]
    pub(crate) title: Option<String>,
    #[arg(
        short = 'q',
        long,
        value_name = "QUERY",
        help = "Provide an initial search query (default: empty)"
    )]
    pub(crate) query: Option<String>,
    #[arg(
        short = 's',
        long = "status",
        value_delimiter = ',',
        value_name = "STATUS",
        help = "Comma-separated statuses to show: active, vacation, resigned (default: all)"
    )]
    pub(crate) statuses: Option<Vec<String>>,
    #[arg(
        long,
        value_name = "FIELD",
        help = "Sort by a column: name, role, department, age, salary, status (default: base order)"
    )]
    pub(crate) sort: Option<String>,
    #[arg(
        long,
        value_enum,
        help = "Sort direction used with --sort (default: asc)"
    )]
    pub(crate) direction: Option<DirectionArg>,
    #[arg(
        short = 'P',
        long = "page-size",
        value_name = "NUM",
        help = "Rows per page (default: 10)"
    )]
    pub(crate) page_size: Option<usize>,
    #[arg(
        long,
        value_name = "NUM",
        help = "Zero-based page to open (default: 0)"
    )]
    pub(crate) page: Option<usize>,
    #[arg(
        short = 'u',
        long = "ui-preset",
        value_enum,
        help = "Choose a preset for column labels and formatting (default: default)"
    )]
    pub(crate) ui_preset: Option<UiPresetArg>,
    #[arg(
        long = "headers",
        value_delimiter = ',',
        value_name = "HEADER",
        help = "Comma-separated column headers, in column order (default: preset value)"
    )]
    pub(crate) headers: Option<Vec<String>>,
    #[arg(
        short = 'b',
        long,
        help = "Print the derived page without starting the terminal UI (default: disabled)"
    )]
    pub(crate) batch: bool,
    #[arg(
        short = 'a',
        long,
        requires = "batch",
        help = "In batch mode print every match instead of one page (default: disabled)"
    )]
    pub(crate) all: bool,
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        help = "Log verbosity: off, error, warn, info, debug, trace (default: warn)"
    )]
    pub(crate) log_level: Option<String>,
    #[arg(
        long = "log-file",
        value_name = "FILE",
        help = "Write logs to this file (default: data directory for the UI, stderr in batch mode)"
    )]
    pub(crate) log_file: Option<PathBuf>,
    #[arg(
        short = 'p',
        long = "print-config",
        help = "Print the resolved configuration before running (default: disabled)"
    )]
    pub(crate) print_config: bool,
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t = OutputFormat::Plain,
        help = "Choose how to print the result"
    )]
    pub(crate) output: OutputFormat,
}
