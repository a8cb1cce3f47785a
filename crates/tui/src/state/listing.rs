//! Navigable listing of secret entries.

use thiserror::Error;

/// An action needed a focused entry but the listing is empty.
///
/// Recoverable by every caller: action dispatch treats it as "nothing to
/// act on" and skips the action silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("password listing is empty")]
pub struct EmptyListing;

/// Ordered listing of entry names plus the focused index.
///
/// The listing is replaced wholesale on every filter change, never mutated
/// in place. After any mutation the focus stays within
/// `[0, max(0, len - 1)]`; an empty listing pins it at `0`, a defined
/// "no selection" state that [`PasswordList::focused_entry`] surfaces as
/// [`EmptyListing`].
#[derive(Debug, Default)]
pub struct PasswordList {
	listing: Vec<String>,
	focus: usize,
}

impl PasswordList {
	/// Construct an empty listing.
	pub fn new() -> Self {
		Self::default()
	}

	/// Entries currently shown, in order.
	pub fn listing(&self) -> &[String] {
		&self.listing
	}

	/// Number of entries currently shown.
	pub fn len(&self) -> usize {
		self.listing.len()
	}

	/// Whether the listing holds no entries.
	pub fn is_empty(&self) -> bool {
		self.listing.is_empty()
	}

	/// Index of the focused row.
	pub fn focus(&self) -> usize {
		self.focus
	}

	/// Replace the listing wholesale, clamping the focus into range.
	///
	/// Replacement alone does not remember the previous selection; callers
	/// pair this with [`PasswordList::restore_focus_to`].
	pub fn set_listing(&mut self, listing: Vec<String>) {
		self.listing = listing;
		self.focus = self.focus.min(self.max_focus());
	}

	/// Move the focus by `delta`, saturating at both ends.
	pub fn move_focus(&mut self, delta: isize) {
		self.focus = self.focus.saturating_add_signed(delta).min(self.max_focus());
	}

	/// The focused entry, or [`EmptyListing`] when there is none.
	pub fn focused_entry(&self) -> Result<&str, EmptyListing> {
		self.listing
			.get(self.focus)
			.map(String::as_str)
			.ok_or(EmptyListing)
	}

	/// Focus `entry` if it is still in the listing, else the last row.
	///
	/// Keeps the previous selection highlighted across a re-filter when it
	/// survives, and snaps to the end of the new listing when it does not,
	/// so the focus never jumps back to the top on every keystroke.
	pub fn restore_focus_to(&mut self, entry: &str) {
		self.focus = self
			.listing
			.iter()
			.position(|candidate| candidate == entry)
			.unwrap_or_else(|| self.max_focus());
	}

	/// Rows in order, each paired with its "is focused" flag. Styling is
	/// the renderer's job.
	pub fn rows(&self) -> impl Iterator<Item = (&str, bool)> {
		self.listing
			.iter()
			.enumerate()
			.map(|(index, entry)| (entry.as_str(), index == self.focus))
	}

	fn max_focus(&self) -> usize {
		self.listing.len().saturating_sub(1)
	}
}
