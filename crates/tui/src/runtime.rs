//! Application runtime and event loop.

use std::time::Duration;

use anyhow::Result;
use passage_core::SecretStore;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, Event, KeyEventKind};

use crate::App;

/// Construct an [`App`] for the provided store and run it to completion.
pub fn run<S: SecretStore>(store: S, initial_query: &str) -> Result<()> {
	let mut app = App::new(store, initial_query);
	app.run()
}

impl<S: SecretStore> App<S> {
	/// Pump the terminal event loop until the user quits.
	///
	/// One key event is fully processed, including any synchronous external
	/// command it triggers, before the next frame is drawn and the next
	/// event is read. A slow `pass` invocation simply delays the next
	/// keystroke.
	pub fn run(&mut self) -> Result<()> {
		let mut terminal = ratatui::init();
		let result = self.event_loop(&mut terminal);
		ratatui::restore();
		result
	}

	fn event_loop(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
		loop {
			terminal.draw(|frame| self.draw(frame))?;

			if !event::poll(Duration::from_millis(50))? {
				continue;
			}
			match event::read()? {
				Event::Key(key) if key.kind == KeyEventKind::Press => {
					if self.handle_key(key) {
						return Ok(());
					}
				}
				_ => {}
			}
		}
	}
}
