mod cli;
mod settings;
mod workflow;

use anyhow::Result;

fn main() -> Result<()> {
	let cli = cli::parse_cli();
	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
		return Ok(());
	}

	workflow::run(resolved)
}
