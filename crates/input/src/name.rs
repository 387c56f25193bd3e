//! Player name prompt.
//!
//! While the prompt is open every key edits the name instead of steering
//! the game.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Longest name the prompt accepts, in chars
pub const MAX_NAME_LEN: usize = 20;

/// State of the prompt after a key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameEntry {
    Editing,
    /// Confirmed name, trimmed; empty means anonymous
    Done(String),
    Cancelled,
}

/// Text typed into the name prompt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameInput {
    text: String,
}

impl NameInput {
    /// Open the prompt with `current` already typed
    pub fn new(current: &str) -> Self {
        Self {
            text: current.trim().chars().take(MAX_NAME_LEN).collect(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> NameEntry {
        if key.kind == KeyEventKind::Release {
            return NameEntry::Editing;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Enter => NameEntry::Done(self.text.trim().to_string()),
            KeyCode::Esc => NameEntry::Cancelled,
            KeyCode::Char('c') if ctrl => NameEntry::Cancelled,
            KeyCode::Backspace => {
                self.text.pop();
                NameEntry::Editing
            }
            KeyCode::Char(ch) if !ctrl && !ch.is_control() => {
                if self.text.chars().count() < MAX_NAME_LEN {
                    self.text.push(ch);
                }
                NameEntry::Editing
            }
            _ => NameEntry::Editing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(input: &mut NameInput, text: &str) {
        for ch in text.chars() {
            assert_eq!(input.handle_key(KeyEvent::from(KeyCode::Char(ch))), NameEntry::Editing);
        }
    }

    #[test]
    fn test_type_and_confirm() {
        let mut input = NameInput::default();
        type_text(&mut input, "Adx");
        input.handle_key(KeyEvent::from(KeyCode::Backspace));
        type_text(&mut input, "a ");
        assert_eq!(input.text(), "Ada ");
        assert_eq!(
            input.handle_key(KeyEvent::from(KeyCode::Enter)),
            NameEntry::Done("Ada".to_string())
        );
    }

    #[test]
    fn test_game_keys_are_text_while_editing() {
        let mut input = NameInput::new("");
        type_text(&mut input, "qn p");
        assert_eq!(input.text(), "qn p");
    }

    #[test]
    fn test_cancel_and_length_cap() {
        let mut input = NameInput::new(&"x".repeat(30));
        assert_eq!(input.text().len(), MAX_NAME_LEN);
        type_text(&mut input, "y");
        assert_eq!(input.text().len(), MAX_NAME_LEN);
        assert_eq!(input.handle_key(KeyEvent::from(KeyCode::Esc)), NameEntry::Cancelled);
        assert_eq!(
            input.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            NameEntry::Cancelled
        );
    }
}
