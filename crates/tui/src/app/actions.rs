use anyhow::Result;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use sectora_core::FilterUpdate;

use super::{App, Focus};
use crate::BrowseOutcome;

fn is_text_input(key: &KeyEvent) -> bool {
	matches!(key.code, KeyCode::Char(_) | KeyCode::Backspace)
		&& !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

impl<'a> App<'a> {
	/// Process a keyboard event and return the outcome if the user exits.
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Result<Option<BrowseOutcome>> {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		if ctrl && key.code == KeyCode::Char('c') {
			return Ok(Some(self.outcome(false)));
		}

		if self.detail.is_some() {
			if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
				self.detail = None;
			}
			return Ok(None);
		}

		match key.code {
			KeyCode::Esc if self.suggestions.is_visible() => self.suggestions.close(),
			KeyCode::Esc => return Ok(Some(self.outcome(true))),
			KeyCode::Tab => self.set_focus(self.focus.next(self.sidebar_visible)),
			KeyCode::BackTab => self.set_focus(self.focus.previous(self.sidebar_visible)),
			KeyCode::Char('x') if ctrl => {
				self.apply(FilterUpdate::ClearFilters);
			}
			_ => match self.focus {
				Focus::Search => self.handle_search_key(key),
				Focus::Facets => self.handle_facet_key(key),
				Focus::Results => self.handle_results_key(key),
			},
		}
		Ok(None)
	}

	fn handle_search_key(&mut self, key: KeyEvent) {
		match key.code {
			KeyCode::Up if self.suggestions.is_visible() => self.suggestions.move_up(),
			KeyCode::Down if self.suggestions.is_visible() => self.suggestions.move_down(),
			KeyCode::Up => self.results.move_up(),
			KeyCode::Down => self.results.move_down(),
			KeyCode::Enter => {
				if !self.accept_suggestion() {
					self.set_focus(Focus::Results);
				}
			}
			_ => {
				if self.search_input.input(key) {
					self.query_edited();
				}
			}
		}
	}

	fn handle_facet_key(&mut self, key: KeyEvent) {
		match key.code {
			KeyCode::Up => self.facets.move_up(),
			KeyCode::Down => self.facets.move_down(),
			KeyCode::Enter | KeyCode::Char(' ') => self.toggle_current_facet(),
			_ if is_text_input(&key) => self.type_into_search(key),
			_ => {}
		}
	}

	fn handle_results_key(&mut self, key: KeyEvent) {
		match key.code {
			KeyCode::Up => self.results.move_up(),
			KeyCode::Down => self.results.move_down(),
			KeyCode::Enter => self.open_detail(),
			KeyCode::Char(' ') => {}
			_ if is_text_input(&key) => self.type_into_search(key),
			_ => {}
		}
	}

	/// Typing from another pane jumps back to the search input.
	fn type_into_search(&mut self, key: KeyEvent) {
		self.set_focus(Focus::Search);
		if self.search_input.input(key) {
			self.query_edited();
		}
	}
}
