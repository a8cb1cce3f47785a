//! Wires the store handle to the interactive browser.

use anyhow::Result;
use passage_core::PasswordStore;

use crate::settings::ResolvedConfig;

/// Construct the store handle once and run the UI to completion.
pub(crate) fn run(settings: ResolvedConfig) -> Result<()> {
	let store = PasswordStore::new(settings.store_dir);
	passage_tui::run(store, &settings.query)
}
