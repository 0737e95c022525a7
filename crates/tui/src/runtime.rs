//! Application runtime and event loop.

use std::time::Duration;

use anyhow::{Context, Result};
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, Event, KeyEventKind};

use crate::{App, BrowseOutcome};

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Run `app` in the terminal until the user exits.
pub fn run(mut app: App<'_>) -> Result<BrowseOutcome> {
	app.run()
}

impl App<'_> {
	/// Pump the terminal event loop until the user exits with a result.
	pub fn run(&mut self) -> Result<BrowseOutcome> {
		let mut terminal = ratatui::init();
		let result = self.event_loop(&mut terminal);
		ratatui::restore();
		result
	}

	fn event_loop(&mut self, terminal: &mut DefaultTerminal) -> Result<BrowseOutcome> {
		terminal.clear().context("failed to clear the terminal")?;
		loop {
			terminal
				.draw(|frame| self.draw(frame))
				.context("failed to draw the browser")?;

			if !event::poll(POLL_INTERVAL).context("failed to poll terminal events")? {
				continue;
			}
			match event::read().context("failed to read a terminal event")? {
				Event::Key(key) if key.kind == KeyEventKind::Press => {
					if let Some(outcome) = self.handle_key(key)? {
						log::info!(
							"browser closed with {} filters and query {:?}",
							outcome.filters.count(),
							outcome.query
						);
						return Ok(outcome);
					}
				}
				_ => {}
			}
		}
	}
}
