//! Password listing rendering.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{List, ListItem, ListState};

use super::pane_block;
use crate::state::PasswordList;

pub(crate) const FOCUS_SYMBOL: &str = "▶ ";

/// Render the listing, bolding the focused row. The persistent
/// [`ListState`] keeps the scroll offset stable across frames.
pub(crate) fn render_passwords(
	frame: &mut Frame,
	area: Rect,
	passwords: &PasswordList,
	state: &mut ListState,
) {
	let items: Vec<ListItem> = passwords
		.rows()
		.map(|(entry, focused)| {
			let style = if focused {
				Style::default().add_modifier(Modifier::BOLD)
			} else {
				Style::default()
			};
			ListItem::new(entry.to_string()).style(style)
		})
		.collect();

	state.select((!passwords.is_empty()).then_some(passwords.focus()));

	let list = List::new(items)
		.block(pane_block(" passwords "))
		.highlight_symbol(FOCUS_SYMBOL);
	frame.render_stateful_widget(list, area, state);
}
