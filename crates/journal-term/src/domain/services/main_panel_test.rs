use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;
use tui_textarea::Key;

use super::*;
use crate::configuration::Theme;
use crate::domain::models::Command;

fn char_input(c: char) -> Input {
    return Input {
        key: Key::Char(c),
        ..Default::default()
    };
}

fn row(buffer: &Buffer, y: u16) -> String {
    return (0..buffer.area.width)
        .map(|x| return buffer[(x, y)].symbol().to_string())
        .collect();
}

fn draw(panel: &MainPanel, content: Option<&str>, state: &UiState) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(24, 5)).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            panel.render(frame, area, content, state, &UiConfig::default());
        })
        .unwrap();

    return terminal.backend().buffer().clone();
}

#[test]
fn it_round_trips_unchanged_content() {
    for content in ["", "one line", "two\nlines", "trailing newline\n", "\n\n", "tabs\tand\r\ncrlf"] {
        let mut panel = MainPanel::default();
        panel.begin_edit(content);
        assert_eq!(panel.end_edit(), content);
    }
}

#[test]
fn it_appends_typed_text_at_the_end() {
    let mut panel = MainPanel::default();
    panel.begin_edit("first\nsecond");

    assert!(panel.buffer_mut().input(char_input('!')));
    assert_eq!(panel.end_edit(), "first\nsecond!");
}

#[test]
fn it_ignores_input_without_focus() {
    let mut panel = MainPanel::default();
    panel.begin_edit("text");
    panel.end_edit();

    assert!(!panel.buffer().is_focused());
    assert!(!panel.buffer_mut().input(char_input('x')));
    assert!(!panel.buffer_mut().paste("pasted"));
    assert_eq!(panel.buffer().text(), "text");
}

#[test]
fn it_pastes_with_normalized_line_breaks() {
    let mut panel = MainPanel::default();
    panel.begin_edit("");

    assert!(panel.buffer_mut().paste("a\r\nb\rc"));
    assert_eq!(panel.end_edit(), "a\nb\nc");
}

#[test]
fn it_renders_stored_content_in_view_mode() {
    let panel = MainPanel::default();
    let buffer = draw(&panel, Some("Uni-Kurse evaluieren"), &UiState::default());

    assert_eq!(row(&buffer, 1), "│Uni-Kurse evaluieren  │");
    assert_eq!(buffer[(0, 0)].fg, Theme::default().border);
}

#[test]
fn it_renders_a_placeholder_without_entries() {
    let panel = MainPanel::default();
    let buffer = draw(&panel, None, &UiState::default());

    assert_eq!(row(&buffer, 1), "│this is where the     │");
}

#[test]
fn it_renders_the_live_buffer_while_editing() {
    let mut state = UiState::default();
    state.apply(Command::Confirm);

    let mut panel = MainPanel::default();
    panel.begin_edit("draft");
    panel.buffer_mut().input(char_input('s'));

    let buffer = draw(&panel, Some("stored"), &state);
    assert!(row(&buffer, 1).starts_with("│drafts"));
    assert_eq!(buffer[(0, 0)].fg, Theme::default().border_focus);
}
