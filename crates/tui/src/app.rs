//! Aggregate state for the terminal application.

use passage_core::SecretStore;
use ratatui::widgets::ListState;

use crate::clipboard;
use crate::state::{PasswordList, Prompt, PromptSequence, SearchInput};

/// Input routing mode. Exactly one mode is active at a time and it decides
/// which component owns the next keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
	/// Navigating the password listing and firing actions.
	Browsing,
	/// Editing the filter term in the search bar.
	Filtering,
	/// Answering an active prompt sequence in the console.
	Prompting,
}

/// Which synchronization legs the user confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SyncPlan {
	pub(crate) pull: bool,
	pub(crate) push: bool,
}

/// State shared across the terminal UI: the store handle, the three
/// interaction components, the console text, and the current mode.
pub struct App<S> {
	pub(crate) store: S,
	pub(crate) mode: Mode,
	pub(crate) search_input: SearchInput,
	pub(crate) passwords: PasswordList,
	pub(crate) prompts: PromptSequence<SyncPlan>,
	/// Free-form output pane fed by external command output.
	pub(crate) console: String,
	/// Scroll continuity for the listing pane.
	pub(crate) list_state: ListState,
	/// Clipboard sink, swappable so tests can record copies.
	copy: Box<dyn FnMut(&str)>,
}

impl<S: SecretStore> App<S> {
	/// Construct the app with an initial filter term already applied.
	pub fn new(store: S, initial_query: impl Into<String>) -> Self {
		let search_input = SearchInput::new(initial_query);
		let mut passwords = PasswordList::new();
		passwords.set_listing(store.search(search_input.value()));
		Self {
			store,
			mode: Mode::Browsing,
			search_input,
			passwords,
			prompts: PromptSequence::new(),
			console: String::new(),
			list_state: ListState::default(),
			copy: Box::new(clipboard::copy),
		}
	}

	/// Re-run the search with the current filter term, keeping the
	/// previously focused entry focused when it survives the re-filter.
	pub(crate) fn refilter(&mut self) {
		let previous = self.passwords.focused_entry().unwrap_or("").to_string();
		let listing = self.store.search(self.search_input.value());
		self.passwords.set_listing(listing);
		self.passwords.restore_focus_to(&previous);
	}

	/// Reset the filter to empty and the listing to the full store.
	pub(crate) fn clear_search(&mut self) {
		self.search_input.clear();
		self.passwords.set_listing(self.store.search(""));
	}

	/// Reveal the focused entry (or its OTP code) in the console,
	/// optionally copying the first output line to the clipboard. A no-op
	/// when the listing is empty.
	pub(crate) fn reveal_focused(&mut self, otp: bool, clip: bool) {
		let Ok(entry) = self.passwords.focused_entry() else {
			return;
		};
		let entry = entry.to_string();
		let output = if otp {
			self.store.show_otp(&entry)
		} else {
			self.store.show_password(&entry)
		};
		self.console = if clip {
			self.copy_first_line(&entry, otp, &output)
		} else {
			output
		};
		self.mode = Mode::Browsing;
	}

	/// Copy the first line of `output` to the clipboard and build the
	/// console message. When the first line is empty nothing is copied and
	/// only the remaining lines are shown.
	fn copy_first_line(&mut self, entry: &str, otp: bool, output: &str) -> String {
		let mut lines = output.lines();
		let secret = lines.next().unwrap_or("");
		let rest = lines.collect::<Vec<_>>().join("\n");
		if secret.is_empty() {
			return rest;
		}
		(self.copy)(secret);
		let otp_msg = if otp { "OTP code for " } else { "" };
		format!("Copied {otp_msg}{entry} to clipboard.\n{rest}")
	}

	/// Open the sync confirmation prompts and hand the keyboard to them.
	pub(crate) fn start_sync_prompts(&mut self) {
		self.prompts.start(
			vec![
				confirm_prompt("pull from remote? [y/n]"),
				confirm_prompt("push to remote? [y/n]"),
			],
			|completed| SyncPlan {
				pull: answer_is_yes(completed[0].response()),
				push: answer_is_yes(completed[1].response()),
			},
		);
		self.mode = Mode::Prompting;
	}

	/// Run the confirmed sync legs and show their merged output.
	pub(crate) fn run_sync(&mut self, plan: SyncPlan) {
		let mut sections = Vec::new();
		if plan.pull {
			sections.push(self.store.git_pull());
		}
		if plan.push {
			sections.push(self.store.git_push());
		}
		self.console = if sections.is_empty() {
			"sync skipped.".to_string()
		} else {
			sections.join("\n")
		};
	}

	/// Replace the clipboard sink. Used by tests to observe copies.
	#[cfg(test)]
	pub(crate) fn set_copy_fn(&mut self, copy: impl FnMut(&str) + 'static) {
		self.copy = Box::new(copy);
	}
}

fn confirm_prompt(label: &str) -> Prompt {
	Prompt::new(label)
		.with_transform(normalize_answer)
		.with_validator(validate_answer)
}

fn normalize_answer(response: String) -> String {
	response.trim().to_ascii_lowercase()
}

fn validate_answer(response: &str) -> Result<(), String> {
	match response {
		"y" | "yes" | "n" | "no" => Ok(()),
		other => Err(format!("expected y or n, not {other:?}")),
	}
}

fn answer_is_yes(response: &str) -> bool {
	matches!(response, "y" | "yes")
}
