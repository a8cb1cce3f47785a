//! Frame layout: search bar on top, passwords left, console right.

use passage_core::SecretStore;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};

use crate::app::{App, Mode};
use crate::components::{render_console, render_passwords, render_search};

impl<S: SecretStore> App<S> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let rows = Layout::default()
			.direction(Direction::Vertical)
			.constraints([Constraint::Length(3), Constraint::Min(1)])
			.split(frame.area());

		render_search(
			frame,
			rows[0],
			&self.search_input,
			self.mode == Mode::Filtering,
		);

		let panes = Layout::default()
			.direction(Direction::Horizontal)
			.constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
			.split(rows[1]);

		render_passwords(frame, panes[0], &self.passwords, &mut self.list_state);

		let prompt_line = self.prompts.active_prompt().map(ToString::to_string);
		render_console(frame, panes[1], &self.console, prompt_line);
	}
}
