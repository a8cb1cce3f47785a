//! Layered configuration.
//!
//! Precedence, lowest to highest: built-in defaults, `passage.toml` in the
//! user config directory, `PASSAGE_*` environment variables (plus the
//! `pass` convention `PASSWORD_STORE_DIR`), command line arguments.

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow, ensure};
use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::Deserialize;

use crate::cli::CliArgs;

/// Configuration exactly as written by the user, before resolution.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawConfig {
	store_dir: Option<PathBuf>,
	query: Option<String>,
}

/// Validated configuration the workflow runs with.
#[derive(Debug)]
pub(crate) struct ResolvedConfig {
	pub(crate) store_dir: PathBuf,
	pub(crate) query: String,
}

impl ResolvedConfig {
	pub(crate) fn print_summary(&self) {
		println!("store directory: {}", self.store_dir.display());
		println!("initial query: {:?}", self.query);
	}
}

/// Load configuration by combining CLI arguments, the config file and
/// environment variables.
pub(crate) fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let mut builder = Config::builder();
	if let Some(path) = config_file_path() {
		builder = builder.add_source(File::from(path).required(false));
	}
	builder = builder.add_source(Environment::with_prefix("PASSAGE"));

	let raw: RawConfig = builder
		.build()
		.context("failed to load configuration")?
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	resolve(raw, cli)
}

fn resolve(raw: RawConfig, cli: &CliArgs) -> Result<ResolvedConfig> {
	let store_dir = cli
		.store_dir
		.clone()
		.or_else(env_store_dir)
		.or(raw.store_dir)
		.unwrap_or_else(passage_core::default_store_dir);
	ensure!(
		store_dir.is_dir(),
		"secret store directory {} does not exist",
		store_dir.display()
	);

	let query = cli.query.clone().or(raw.query).unwrap_or_default();
	Ok(ResolvedConfig { store_dir, query })
}

fn env_store_dir() -> Option<PathBuf> {
	std::env::var_os("PASSWORD_STORE_DIR")
		.filter(|value| !value.is_empty())
		.map(PathBuf::from)
}

fn config_file_path() -> Option<PathBuf> {
	ProjectDirs::from("", "", "passage").map(|dirs| dirs.config_dir().join("passage.toml"))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn cli(store_dir: Option<PathBuf>, query: Option<&str>) -> CliArgs {
		CliArgs {
			query: query.map(ToString::to_string),
			store_dir,
			print_config: false,
		}
	}

	#[test]
	fn cli_store_dir_wins_over_the_config_file() {
		let from_cli = tempfile::tempdir().unwrap();
		let from_file = tempfile::tempdir().unwrap();
		let raw = RawConfig {
			store_dir: Some(from_file.path().to_path_buf()),
			query: None,
		};
		let resolved = resolve(raw, &cli(Some(from_cli.path().to_path_buf()), None)).unwrap();
		assert_eq!(resolved.store_dir, from_cli.path());
	}

	#[test]
	fn config_file_store_dir_applies_without_overrides() {
		let dir = tempfile::tempdir().unwrap();
		let raw = RawConfig {
			store_dir: Some(dir.path().to_path_buf()),
			query: Some("mail".to_string()),
		};
		let resolved = resolve(raw, &cli(None, None)).unwrap();
		assert_eq!(resolved.store_dir, dir.path());
		assert_eq!(resolved.query, "mail");
	}

	#[test]
	fn cli_query_wins_over_the_config_file() {
		let dir = tempfile::tempdir().unwrap();
		let raw = RawConfig {
			store_dir: Some(dir.path().to_path_buf()),
			query: Some("mail".to_string()),
		};
		let resolved = resolve(raw, &cli(None, Some("work"))).unwrap();
		assert_eq!(resolved.query, "work");
	}

	#[test]
	fn a_missing_store_directory_is_rejected() {
		let dir = tempfile::tempdir().unwrap();
		let missing = dir.path().join("nope");
		let err = resolve(RawConfig::default(), &cli(Some(missing), None)).unwrap_err();
		assert!(err.to_string().contains("does not exist"));
	}
}
