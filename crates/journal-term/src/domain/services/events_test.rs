use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventState;
use crossterm::event::KeyModifiers;

use super::*;

fn key_event(code: KeyCode, modifiers: KeyModifiers, kind: KeyEventKind) -> CrosstermEvent {
    return CrosstermEvent::Key(KeyEvent {
        code,
        modifiers,
        kind,
        state: KeyEventState::NONE,
    });
}

fn press(code: KeyCode) -> CrosstermEvent {
    return key_event(code, KeyModifiers::NONE, KeyEventKind::Press);
}

#[test]
fn it_maps_key_presses_to_inputs() {
    match EventsService::handle_crossterm(press(KeyCode::Char('j'))) {
        Some(Event::KeyboardCharInput(input)) => {
            assert_eq!(input.key, Key::Char('j'));
            assert!(!input.ctrl);
        }
        other => panic!("unexpected event: {other:?}"),
    }

    match EventsService::handle_crossterm(press(KeyCode::Esc)) {
        Some(Event::KeyboardCharInput(input)) => assert_eq!(input.key, Key::Esc),
        other => panic!("unexpected event: {other:?}"),
    }
}

#[test]
fn it_carries_modifiers() {
    let event = key_event(
        KeyCode::Char('K'),
        KeyModifiers::SHIFT | KeyModifiers::ALT,
        KeyEventKind::Press,
    );

    match EventsService::handle_crossterm(event) {
        Some(Event::KeyboardCharInput(input)) => {
            assert_eq!(input.key, Key::Char('K'));
            assert!(input.shift);
            assert!(input.alt);
            assert!(!input.ctrl);
        }
        other => panic!("unexpected event: {other:?}"),
    }
}

#[test]
fn it_maps_ctrl_c_to_interrupt() {
    let event = key_event(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyEventKind::Press);
    assert!(matches!(
        EventsService::handle_crossterm(event),
        Some(Event::KeyboardCTRLC)
    ));
}

#[test]
fn it_drops_key_releases_and_unknown_keys() {
    let release = key_event(KeyCode::Char('q'), KeyModifiers::NONE, KeyEventKind::Release);
    assert!(EventsService::handle_crossterm(release).is_none());
    assert!(EventsService::handle_crossterm(press(KeyCode::Insert)).is_none());
    assert!(EventsService::handle_crossterm(CrosstermEvent::FocusGained).is_none());
}

#[test]
fn it_maps_paste_and_resize() {
    assert!(matches!(
        EventsService::handle_crossterm(CrosstermEvent::Paste("text".to_string())),
        Some(Event::KeyboardPaste(text)) if text == "text"
    ));
    assert!(matches!(
        EventsService::handle_crossterm(CrosstermEvent::Resize(80, 24)),
        Some(Event::UIResize(80, 24))
    ));
}
