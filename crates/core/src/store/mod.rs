//! Secret store enumeration and search.
//!
//! A store is a directory tree in the `pass` layout: one GPG-encrypted file
//! per secret, directories as namespaces. Entries are named by their path
//! relative to the store root, slash-joined, with the `.gpg` suffix
//! stripped. The listing is recomputed on every search so external changes
//! (a sync, a `pass insert` in another terminal) show up on the next edit.

mod commands;

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

pub use commands::run_shell_command;

/// Storage extension marking a file as a secret entry.
const SECRET_EXTENSION: &str = "gpg";

/// Store operations the terminal front-end depends on.
///
/// The interactive state machine takes an explicit store handle instead of
/// reaching for a global, so tests can drive it with an in-memory double.
pub trait SecretStore {
	/// Entry names containing `term` as a substring, lexicographically
	/// sorted. An empty term matches every entry.
	fn search(&self, term: &str) -> Vec<String>;
	/// Decrypted contents of one entry, as printed by `pass`.
	fn show_password(&self, entry: &str) -> String;
	/// Current one-time code for one entry, as printed by `pass otp`.
	fn show_otp(&self, entry: &str) -> String;
	/// Pull the store's git remote; returns the command's merged output.
	fn git_pull(&self) -> String;
	/// Push to the store's git remote; returns the command's merged output.
	fn git_push(&self) -> String;
}

/// Handle to a `pass` store rooted at a directory on disk.
#[derive(Debug, Clone)]
pub struct PasswordStore {
	root: PathBuf,
}

impl PasswordStore {
	/// Create a handle rooted at `root`. The directory is not validated
	/// here; configuration resolution checks existence up front.
	pub fn new(root: impl Into<PathBuf>) -> Self {
		Self { root: root.into() }
	}

	/// Root directory of the store.
	pub fn root(&self) -> &Path {
		&self.root
	}
}

impl SecretStore for PasswordStore {
	fn search(&self, term: &str) -> Vec<String> {
		let mut listing = Vec::new();
		// A store is usually a git repository; gitignore rules and hidden
		// paths must not hide entries from the listing.
		let walker = WalkBuilder::new(&self.root)
			.standard_filters(false)
			.follow_links(false)
			.build();
		for entry in walker.flatten() {
			if !entry.file_type().is_some_and(|kind| kind.is_file()) {
				continue;
			}
			let path = entry.path();
			if path.extension().and_then(|ext| ext.to_str()) != Some(SECRET_EXTENSION) {
				continue;
			}
			let Ok(relative) = path.strip_prefix(&self.root) else {
				continue;
			};
			let name = entry_name(relative);
			if name.contains(term) {
				listing.push(name);
			}
		}
		listing.sort();
		listing
	}

	fn show_password(&self, entry: &str) -> String {
		run_shell_command(&format!("pass {entry}"))
	}

	fn show_otp(&self, entry: &str) -> String {
		run_shell_command(&format!("pass otp {entry}"))
	}

	fn git_pull(&self) -> String {
		run_shell_command("pass git pull")
	}

	fn git_push(&self) -> String {
		run_shell_command("pass git push")
	}
}

/// Slash-joined entry name for a store-relative path, suffix stripped.
fn entry_name(relative: &Path) -> String {
	relative
		.with_extension("")
		.components()
		.map(|component| component.as_os_str().to_string_lossy().into_owned())
		.collect::<Vec<_>>()
		.join("/")
}

/// Default store root: `~/.password-store`, the `pass` convention.
pub fn default_store_dir() -> PathBuf {
	directories::UserDirs::new()
		.map(|dirs| dirs.home_dir().join(".password-store"))
		.unwrap_or_else(|| PathBuf::from(".password-store"))
}
