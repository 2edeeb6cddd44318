mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli};
use settings::ResolvedConfig;
use workflow::{ViewWorkflow, init_logging};

fn main() -> Result<()> {
	let cli = parse_cli();
	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	init_logging(&resolved, cli.batch)?;

	run_view(cli.output, cli.batch, cli.all, &resolved)
}

/// Execute the view workflow and print output in the chosen format.
fn run_view(format: OutputFormat, batch: bool, all: bool, settings: &ResolvedConfig) -> Result<()> {
	let workflow = ViewWorkflow::from_config(settings)?;
	let output = if batch {
		workflow.render_batch(format, all)?
	} else {
		workflow.run_interactive(format)?
	};
	print!("{output}");
	Ok(())
}
