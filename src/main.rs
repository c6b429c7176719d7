mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use settings::ResolvedConfig;
use workflow::{PickerWorkflow, Script};

fn main() -> Result<()> {
	let cli = parse_cli();
	tabpick::logging::initialize(cli.verbose);

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	let script = Script::from_cli(&cli)?;
	run_picker(cli.output, resolved, script)
}

/// Replay the scripted session and print the outcome in the chosen format.
fn run_picker(format: OutputFormat, settings: ResolvedConfig, script: Script) -> Result<()> {
	let workflow = PickerWorkflow::from_config(settings, script)?;
	let outcome = workflow.run()?;

	match format {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}
