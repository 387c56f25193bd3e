//! Key mapping from terminal events to game commands.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::cursor::Direction;

/// What a key press asks the game to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    /// Add the letter under the cursor to the selection
    Pick,
    Submit,
    ClearSelection,
    NewGame,
    /// Open the player name prompt
    EditName,
    Quit,
}

/// Map keyboard input to a command.
///
/// Key releases are ignored on terminals that report them.
pub fn handle_key_event(key: KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if should_quit(key) {
        return Some(Command::Quit);
    }
    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('a') => Some(Command::Move(Direction::Left)),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('d') => Some(Command::Move(Direction::Right)),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('w') => Some(Command::Move(Direction::Up)),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') => Some(Command::Move(Direction::Down)),

        // Word building
        KeyCode::Char(' ') => Some(Command::Pick),
        KeyCode::Enter => Some(Command::Submit),
        KeyCode::Esc | KeyCode::Backspace => Some(Command::ClearSelection),

        KeyCode::Char('n') | KeyCode::Char('N') => Some(Command::NewGame),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(Command::EditName),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
