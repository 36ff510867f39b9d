//! Key mapping from terminal events to animation commands.
//!
//! Letter keys are case-insensitive. Arrow keys arrive already decoded by
//! crossterm, so platform escape sequences never reach this table.

use crate::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a keyboard event to a command. Releases and unknown keys map to `None`.
pub fn handle_key_event(key: KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    // Raw mode swallows SIGINT, so Ctrl+C arrives as a key.
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Command::Quit);
    }

    match key.code {
        KeyCode::Up => Some(Command::Faster),
        KeyCode::Down => Some(Command::Slower),
        KeyCode::Right => Some(Command::NextPattern),
        KeyCode::Left => Some(Command::PrevPattern),
        KeyCode::Char(c) => command_for_char(c),
        _ => None,
    }
}

/// Map a single typed character to a command.
pub fn command_for_char(c: char) -> Option<Command> {
    match c.to_ascii_lowercase() {
        // Speed
        'w' => Some(Command::Faster),
        's' => Some(Command::Slower),

        // Pattern
        'd' => Some(Command::NextPattern),
        'a' => Some(Command::PrevPattern),
        'r' => Some(Command::RandomPattern),

        // Range
        '+' | '=' => Some(Command::WidenRange),
        '-' | '_' => Some(Command::NarrowRange),

        // General
        ' ' => Some(Command::TogglePause),
        'i' => Some(Command::ToggleStats),
        'h' | '?' => Some(Command::Help),
        'q' => Some(Command::Quit),

        _ => None,
    }
}
