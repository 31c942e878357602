#[cfg(test)]
#[path = "command_test.rs"]
mod tests;

use tui_textarea::Input;
use tui_textarea::Key;

use super::Focus;
use super::Mode;
use super::UiState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    MoveUp,
    MoveDown,
    Confirm,
    Cancel,
    FocusSide,
    Quit,
}

impl Command {
    /// Resolves a key press against the current state.
    ///
    /// Returns `None` for keys that carry no command in that state, which are
    /// then treated as text input for the edit buffer.
    pub fn resolve(input: &Input, state: &UiState) -> Option<Command> {
        if input.alt {
            return None;
        }

        match input {
            Input {
                key: Key::Char('c'),
                ctrl: true,
                ..
            } => return Some(Command::Quit),
            Input {
                key: Key::Char('q'),
                ctrl: false,
                ..
            } => return Some(Command::Quit),
            _ => {}
        }

        if input.ctrl {
            return None;
        }

        match (state.focus(), state.mode()) {
            (Focus::Side, _) => match input.key {
                Key::Up | Key::Char('k') => return Some(Command::MoveUp),
                Key::Down | Key::Char('j') => return Some(Command::MoveDown),
                Key::Enter => return Some(Command::Confirm),
                _ => return None,
            },
            (Focus::Main, Mode::View) => match input.key {
                Key::Enter => return Some(Command::Confirm),
                Key::Char('s') => return Some(Command::FocusSide),
                _ => return None,
            },
            (Focus::Main, Mode::Edit) => match input.key {
                Key::Esc => return Some(Command::Cancel),
                _ => return None,
            },
        }
    }
}
