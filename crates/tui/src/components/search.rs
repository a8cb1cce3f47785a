//! Search bar rendering.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use super::pane_block;
use crate::state::SearchInput;

/// Render the filter input, placing the terminal cursor at the editor's
/// cursor offset while the search bar owns the keyboard.
pub(crate) fn render_search(frame: &mut Frame, area: Rect, input: &SearchInput, active: bool) {
	let block = pane_block(" search ");
	let inner = block.inner(area);
	frame.render_widget(Paragraph::new(input.value()).block(block), area);

	if active && inner.width > 0 {
		let before_cursor: String = input.value().chars().take(input.cursor()).collect();
		let offset = before_cursor.width().min(inner.width.saturating_sub(1) as usize) as u16;
		frame.set_cursor_position(Position::new(inner.x + offset, inner.y));
	}
}
