use tui_textarea::Input;

#[derive(Debug)]
pub enum Event {
    KeyboardCharInput(Input),
    KeyboardCTRLC,
    KeyboardPaste(String),
    UIResize(u16, u16),
}
