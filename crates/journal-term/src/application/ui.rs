#[cfg(test)]
#[path = "ui_test.rs"]
mod tests;

use std::io;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableBracketedPaste;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::Backend;
use ratatui::Terminal;

use crate::domain::services::events::EventsService;
use crate::domain::services::AppState;
use crate::domain::services::AppStateProps;

/// Restores the terminal from inside a panic hook. Errors are ignored, the
/// process is going down anyway.
pub fn destruct_terminal_for_panic() {
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableBracketedPaste,
        cursor::Show
    );
}

/// Draws one frame. A failed frame is logged and skipped.
pub fn draw<B: Backend>(terminal: &mut Terminal<B>, app_state: &AppState) {
    if let Err(err) = terminal.draw(|frame| app_state.render(frame)) {
        tracing::error!(error = ?err, "failed to draw frame");
    }
}

/// Runs the session until a quit key is pressed.
///
/// Events are handled one at a time: each is routed, applied to the state
/// and rendered before the next one is read.
pub async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state_props: AppStateProps,
) -> Result<()> {
    let mut app_state = AppState::new(app_state_props);
    let mut events = EventsService::new();

    loop {
        draw(terminal, &app_state);

        let event = events.next().await?;
        if app_state.handle_event(event)? {
            break;
        }
    }

    return Ok(());
}
