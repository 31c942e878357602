#[cfg(test)]
#[path = "ui_state_test.rs"]
mod tests;

use strum_macros::Display;

use super::Command;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display)]
pub enum Focus {
    #[default]
    Side,
    Main,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display)]
pub enum Mode {
    #[default]
    View,
    Edit,
}

/// Side effect the shell has to carry out after a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiEffect {
    /// Load the selected entry into the edit buffer and focus it.
    BeginEdit,
    /// Copy the edit buffer back into the selected entry.
    Commit,
}

/// Panel focus and main panel mode.
///
/// `Mode::Edit` is only ever reached together with `Focus::Main`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    focus: Focus,
    mode: Mode,
}

impl UiState {
    pub fn focus(&self) -> Focus {
        return self.focus;
    }

    pub fn mode(&self) -> Mode {
        return self.mode;
    }

    pub fn is_editing(&self) -> bool {
        return self.mode == Mode::Edit;
    }

    pub fn apply(&mut self, command: Command) -> Option<UiEffect> {
        match (self.focus, self.mode, command) {
            (Focus::Side, _, Command::Confirm) => {
                self.focus = Focus::Main;
                self.mode = Mode::Edit;
                return Some(UiEffect::BeginEdit);
            }
            (Focus::Main, Mode::View, Command::Confirm) => {
                self.mode = Mode::Edit;
                return Some(UiEffect::BeginEdit);
            }
            (Focus::Main, Mode::Edit, Command::Cancel) => {
                self.mode = Mode::View;
                return Some(UiEffect::Commit);
            }
            (Focus::Main, Mode::View, Command::FocusSide) => {
                self.focus = Focus::Side;
                return None;
            }
            _ => return None,
        }
    }
}
