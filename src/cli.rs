//! Command line surface.

use std::path::PathBuf;

use clap::Parser;

/// Terminal browser for a pass-compatible secret store.
#[derive(Debug, Parser)]
#[command(name = "passage", version, about)]
pub(crate) struct CliArgs {
	/// Initial filter applied to the listing on startup.
	#[arg(value_name = "QUERY")]
	pub(crate) query: Option<String>,

	/// Root of the secret store. Overrides PASSWORD_STORE_DIR and the
	/// config file.
	#[arg(long, value_name = "DIR")]
	pub(crate) store_dir: Option<PathBuf>,

	/// Print the resolved configuration and exit.
	#[arg(long)]
	pub(crate) print_config: bool,
}

/// Parse command line arguments into the strongly typed [`CliArgs`].
pub(crate) fn parse_cli() -> CliArgs {
	CliArgs::parse()
}

#[cfg(test)]
mod tests {
	use clap::CommandFactory;

	use super::*;

	#[test]
	fn cli_definition_is_consistent() {
		CliArgs::command().debug_assert();
	}

	#[test]
	fn query_and_store_dir_parse() {
		let cli = CliArgs::parse_from(["passage", "mail", "--store-dir", "/tmp/store"]);
		assert_eq!(cli.query.as_deref(), Some("mail"));
		assert_eq!(cli.store_dir.as_deref(), Some(std::path::Path::new("/tmp/store")));
		assert!(!cli.print_config);
	}
}
