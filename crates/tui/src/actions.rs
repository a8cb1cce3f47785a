//! Keyboard dispatch for each interaction mode.
//!
//! One explicit `match` per mode. A key that matches no arm is a defined
//! no-op: in Filtering it first gets offered to the search editor and only
//! reaches the fallthrough arms when the editor reports it unhandled.

use passage_core::SecretStore;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Mode};
use crate::state::PromptSignal;

impl<S: SecretStore> App<S> {
	/// Process one key event; returns `true` when the app should exit.
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> bool {
		match self.mode {
			Mode::Browsing => self.handle_browsing_key(key),
			Mode::Filtering => self.handle_filtering_key(key),
			Mode::Prompting => {
				self.handle_prompting_key(key);
				false
			}
		}
	}

	fn handle_browsing_key(&mut self, key: KeyEvent) -> bool {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		match key.code {
			KeyCode::Char('q') => return true,
			KeyCode::Char('j') | KeyCode::Down if !ctrl => self.passwords.move_focus(1),
			KeyCode::Char('k') | KeyCode::Up if !ctrl => self.passwords.move_focus(-1),
			KeyCode::Char('i') if !ctrl => self.mode = Mode::Filtering,
			KeyCode::Enter if !ctrl => self.reveal_focused(false, false),
			KeyCode::Char('y') if ctrl => self.reveal_focused(false, true),
			KeyCode::Char('o') if ctrl => self.reveal_focused(true, true),
			KeyCode::Char('s') if ctrl => self.start_sync_prompts(),
			KeyCode::Char('x') if ctrl => self.clear_search(),
			_ => {}
		}
		false
	}

	fn handle_filtering_key(&mut self, key: KeyEvent) -> bool {
		if self.search_input.input(key) {
			// Every handled edit re-derives the listing from the new term.
			self.refilter();
			return false;
		}
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		match key.code {
			KeyCode::Esc => self.mode = Mode::Browsing,
			KeyCode::Char('q') if ctrl => return true,
			KeyCode::Char('x') if ctrl => self.clear_search(),
			_ => {}
		}
		false
	}

	fn handle_prompting_key(&mut self, key: KeyEvent) {
		if key.code == KeyCode::Esc {
			self.prompts.cancel();
			self.mode = Mode::Browsing;
			return;
		}
		match self.prompts.feed(key) {
			PromptSignal::Pending => {}
			PromptSignal::Invalid(message) => self.console = message,
			PromptSignal::Completed(plan) => {
				self.run_sync(plan);
				self.mode = Mode::Browsing;
			}
		}
	}
}
