//! Single-line search input backed by `tui-textarea`.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;
use tui_textarea::{CursorMove, TextArea};

/// The search box. Newlines are never inserted; Enter is left to the caller.
pub struct QueryInput<'a> {
	textarea: TextArea<'a>,
}

impl<'a> QueryInput<'a> {
	#[must_use]
	pub fn new(initial: impl Into<String>) -> Self {
		let mut input = Self {
			textarea: Self::blank(),
		};
		input.set_text(initial);
		input
	}

	fn blank() -> TextArea<'a> {
		let mut textarea = TextArea::default();
		textarea.set_cursor_line_style(Style::default());
		textarea.set_placeholder_text("Type to search industries, features or companies");
		textarea
	}

	/// Current contents of the input.
	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or_default()
	}

	/// Replace the contents and move the cursor to the end.
	pub fn set_text(&mut self, text: impl Into<String>) {
		let text: String = text.into();
		let line = text.lines().next().unwrap_or_default().to_string();
		let block = self.textarea.block().cloned();
		let mut textarea = TextArea::new(vec![line]);
		textarea.set_cursor_line_style(Style::default());
		textarea.set_placeholder_text(self.textarea.placeholder_text().to_string());
		if let Some(block) = block {
			textarea.set_block(block);
		}
		textarea.move_cursor(CursorMove::End);
		self.textarea = textarea;
	}

	/// Feed a key to the textarea, returning whether the text changed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		let is_newline = matches!(key.code, KeyCode::Enter)
			|| (key.modifiers.contains(KeyModifiers::CONTROL)
				&& matches!(key.code, KeyCode::Char('m' | 'j')));
		if is_newline {
			return false;
		}
		let before = self.text().to_string();
		self.textarea.input(key);
		self.text() != before
	}

	pub fn set_block(&mut self, block: Block<'a>) {
		self.textarea.set_block(block);
	}

	/// Show the cursor only while the input holds focus.
	pub fn set_focused(&mut self, focused: bool) {
		let style = if focused {
			Style::default().add_modifier(Modifier::REVERSED)
		} else {
			Style::default()
		};
		self.textarea.set_cursor_style(style);
	}

	/// The widget to render.
	#[must_use]
	pub fn widget(&self) -> &TextArea<'a> {
		&self.textarea
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn key(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	#[test]
	fn typing_updates_the_text() {
		let mut input = QueryInput::new("");
		assert!(input.input(key(KeyCode::Char('f'))));
		assert!(input.input(key(KeyCode::Char('i'))));
		assert_eq!(input.text(), "fi");
		assert!(input.input(key(KeyCode::Backspace)));
		assert_eq!(input.text(), "f");
	}

	#[test]
	fn enter_never_inserts_a_line() {
		let mut input = QueryInput::new("bank");
		assert!(!input.input(key(KeyCode::Enter)));
		assert!(!input.input(KeyEvent::new(KeyCode::Char('j'), KeyModifiers::CONTROL)));
		assert_eq!(input.text(), "bank");
	}

	#[test]
	fn set_text_places_the_cursor_at_the_end() {
		let mut input = QueryInput::new("farm");
		input.set_text("Farm Management");
		input.input(key(KeyCode::Char('s')));
		assert_eq!(input.text(), "Farm Managements");
	}

	#[test]
	fn cursor_movement_reports_no_change() {
		let mut input = QueryInput::new("bank");
		assert!(!input.input(key(KeyCode::Left)));
	}
}
