//! Best-effort clipboard access.

use arboard::Clipboard;

/// Copy `text` to the system clipboard, ignoring failures.
///
/// Headless sessions and missing display servers simply lose the copy; the
/// console message is the user's only confirmation either way.
pub(crate) fn copy(text: &str) {
	if let Ok(mut clipboard) = Clipboard::new() {
		let _ = clipboard.set_text(text.to_owned());
	}
}
