//! Single-line text editor backing the search bar.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A mutable text value plus a cursor offset into it.
///
/// The cursor is measured in characters and always stays within
/// `[0, value.chars().count()]`; the kill operations keep it valid by
/// construction. [`SearchInput::input`] reports whether a key event was
/// handled so the owner knows when to re-derive the listing and when to
/// let the key fall through to the mode controller.
#[derive(Debug, Default)]
pub struct SearchInput {
	value: String,
	cursor: usize,
}

impl SearchInput {
	/// Construct an editor holding `initial`, cursor at the end.
	pub fn new(initial: impl Into<String>) -> Self {
		let value = initial.into();
		let cursor = value.chars().count();
		Self { value, cursor }
	}

	/// Current text value.
	pub fn value(&self) -> &str {
		&self.value
	}

	/// Cursor offset in characters.
	pub fn cursor(&self) -> usize {
		self.cursor
	}

	/// Reset to an empty value with the cursor at the start.
	pub fn clear(&mut self) {
		self.value.clear();
		self.cursor = 0;
	}

	/// Apply a key event; returns `true` if the editor handled it.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		if key.modifiers.contains(KeyModifiers::ALT) {
			return false;
		}
		match key.code {
			KeyCode::Char('a') if ctrl => self.move_to_start(),
			KeyCode::Char('e') if ctrl => self.move_to_end(),
			KeyCode::Char('k') if ctrl => self.kill_to_end(),
			KeyCode::Char('u') if ctrl => self.kill_to_start(),
			KeyCode::Char(ch) if !ctrl => self.insert(ch),
			KeyCode::Backspace => self.delete_backward(),
			KeyCode::Delete => self.delete_forward(),
			KeyCode::Left => self.move_left(),
			KeyCode::Right => self.move_right(),
			KeyCode::Home => self.move_to_start(),
			KeyCode::End => self.move_to_end(),
			_ => return false,
		}
		true
	}

	/// Move the cursor to the start of the value.
	pub fn move_to_start(&mut self) {
		self.cursor = 0;
	}

	/// Move the cursor past the last character.
	pub fn move_to_end(&mut self) {
		self.cursor = self.value.chars().count();
	}

	/// Discard everything at and after the cursor.
	pub fn kill_to_end(&mut self) {
		let at = self.byte_offset(self.cursor);
		self.value.truncate(at);
	}

	/// Discard everything before the cursor and rewind it to the start.
	pub fn kill_to_start(&mut self) {
		let at = self.byte_offset(self.cursor);
		self.value.drain(..at);
		self.cursor = 0;
	}

	/// Insert a character at the cursor and advance past it.
	pub fn insert(&mut self, ch: char) {
		let at = self.byte_offset(self.cursor);
		self.value.insert(at, ch);
		self.cursor += 1;
	}

	/// Remove the character before the cursor, if any.
	pub fn delete_backward(&mut self) {
		if self.cursor == 0 {
			return;
		}
		self.cursor -= 1;
		let at = self.byte_offset(self.cursor);
		self.value.remove(at);
	}

	/// Remove the character at the cursor, if any.
	pub fn delete_forward(&mut self) {
		let at = self.byte_offset(self.cursor);
		if at < self.value.len() {
			self.value.remove(at);
		}
	}

	/// Step the cursor one character left, stopping at the start.
	pub fn move_left(&mut self) {
		self.cursor = self.cursor.saturating_sub(1);
	}

	/// Step the cursor one character right, stopping at the end.
	pub fn move_right(&mut self) {
		if self.cursor < self.value.chars().count() {
			self.cursor += 1;
		}
	}

	/// Byte index of the `cursor`-th character.
	fn byte_offset(&self, cursor: usize) -> usize {
		self.value
			.char_indices()
			.nth(cursor)
			.map(|(index, _)| index)
			.unwrap_or(self.value.len())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn plain(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	fn ctrl(ch: char) -> KeyEvent {
		KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
	}

	fn editor_at(value: &str, cursor: usize) -> SearchInput {
		let mut input = SearchInput::new(value);
		input.move_to_start();
		for _ in 0..cursor {
			input.move_right();
		}
		input
	}

	#[test]
	fn point_editing_shortcut_scenario() {
		let mut input = editor_at("foobar", 3);

		assert!(input.input(ctrl('a')));
		assert_eq!(input.cursor(), 0);

		assert!(input.input(ctrl('e')));
		assert_eq!(input.cursor(), 6);

		let mut input = editor_at("foobar", 3);
		assert!(input.input(ctrl('k')));
		assert_eq!(input.value(), "foo");
		assert_eq!(input.cursor(), 3, "kill-to-end leaves the cursor in place");

		let mut input = editor_at("foobar", 3);
		assert!(input.input(ctrl('u')));
		assert_eq!(input.value(), "bar");
		assert_eq!(input.cursor(), 0);
	}

	#[test]
	fn kill_to_end_then_move_to_end_lands_on_the_shorter_value() {
		let mut input = editor_at("foobar", 3);
		input.kill_to_end();
		input.move_to_end();
		assert_eq!(input.cursor(), input.value().chars().count());
	}

	#[test]
	fn characters_insert_at_the_cursor() {
		let mut input = editor_at("fbar", 1);
		assert!(input.input(plain(KeyCode::Char('o'))));
		assert!(input.input(plain(KeyCode::Char('o'))));
		assert_eq!(input.value(), "foobar");
		assert_eq!(input.cursor(), 3);
	}

	#[test]
	fn backspace_and_delete_respect_the_cursor() {
		let mut input = editor_at("foobar", 3);
		assert!(input.input(plain(KeyCode::Backspace)));
		assert_eq!(input.value(), "fobar");
		assert_eq!(input.cursor(), 2);

		assert!(input.input(plain(KeyCode::Delete)));
		assert_eq!(input.value(), "foar");
		assert_eq!(input.cursor(), 2);
	}

	#[test]
	fn backspace_at_the_start_is_a_no_op() {
		let mut input = editor_at("ab", 0);
		assert!(input.input(plain(KeyCode::Backspace)));
		assert_eq!(input.value(), "ab");
		assert_eq!(input.cursor(), 0);
	}

	#[test]
	fn multibyte_text_keeps_the_cursor_on_char_boundaries() {
		let mut input = SearchInput::new("émail");
		input.move_to_start();
		input.move_right();
		input.insert('x');
		assert_eq!(input.value(), "éxmail");
		input.delete_backward();
		input.delete_backward();
		assert_eq!(input.value(), "mail");
		assert_eq!(input.cursor(), 0);
	}

	#[test]
	fn unmatched_keys_are_reported_unhandled() {
		let mut input = SearchInput::new("foo");
		assert!(!input.input(plain(KeyCode::Esc)));
		assert!(!input.input(plain(KeyCode::Enter)));
		assert!(!input.input(ctrl('q')));
		assert_eq!(input.value(), "foo", "unhandled keys must not edit");
	}

	#[test]
	fn clear_resets_value_and_cursor() {
		let mut input = SearchInput::new("foobar");
		input.clear();
		assert_eq!(input.value(), "");
		assert_eq!(input.cursor(), 0);
	}
}
