//! UI building blocks for the three panes.

mod console;
mod passwords;
mod search;

pub(crate) use console::render_console;
pub(crate) use passwords::render_passwords;
pub(crate) use search::render_search;

use ratatui::style::Style;
use ratatui::widgets::{Block, Borders};

/// Rounded bordered block shared by all three panes.
pub(crate) fn pane_block(title: &str) -> Block<'_> {
	Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(Style::default())
		.title(title)
}
