//! Console pane rendering.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::{Paragraph, Wrap};

use super::pane_block;

/// Render the console: command output, and the active prompt line beneath
/// it while a sequence is collecting answers.
pub(crate) fn render_console(
	frame: &mut Frame,
	area: Rect,
	output: &str,
	prompt_line: Option<String>,
) {
	let mut text = output.to_string();
	if let Some(prompt) = prompt_line {
		if !text.is_empty() {
			text.push('\n');
		}
		text.push_str(&prompt);
	}
	let paragraph = Paragraph::new(text)
		.block(pane_block(" console "))
		.wrap(Wrap { trim: false });
	frame.render_widget(paragraph, area);
}
