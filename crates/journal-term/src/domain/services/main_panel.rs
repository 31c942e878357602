#[cfg(test)]
#[path = "main_panel_test.rs"]
mod tests;

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Wrap;
use ratatui::Frame;
use tui_textarea::CursorMove;
use tui_textarea::Input;
use tui_textarea::TextArea;

use crate::configuration::UiConfig;
use crate::domain::models::Focus;
use crate::domain::models::UiState;

const PLACEHOLDER: &str = "this is where the entry content is shown";

/// Transient text buffer used while the main panel is in edit mode.
///
/// Input is ignored unless the buffer has focus.
pub struct EditBuffer<'a> {
    textarea: TextArea<'a>,
    focused: bool,
}

impl<'a> Default for EditBuffer<'a> {
    fn default() -> EditBuffer<'a> {
        return EditBuffer {
            textarea: TextArea::default(),
            focused: false,
        };
    }
}

impl<'a> EditBuffer<'a> {
    /// Replaces the buffer with `content`, cursor at the end of the text.
    pub fn load(&mut self, content: &str) {
        let lines = content
            .split('\n')
            .map(|line| return line.to_string())
            .collect::<Vec<String>>();

        let mut textarea = TextArea::new(lines);
        textarea.set_cursor_line_style(Style::default());
        textarea.move_cursor(CursorMove::Bottom);
        textarea.move_cursor(CursorMove::End);
        self.textarea = textarea;
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    pub fn is_focused(&self) -> bool {
        return self.focused;
    }

    pub fn text(&self) -> String {
        return self.textarea.lines().join("\n");
    }

    /// Returns whether the text changed.
    pub fn input(&mut self, input: Input) -> bool {
        if !self.focused {
            return false;
        }

        return self.textarea.input(input);
    }

    pub fn paste(&mut self, text: &str) -> bool {
        if !self.focused {
            return false;
        }

        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        return self.textarea.insert_str(normalized);
    }
}

/// Shows the selected entry, or the edit buffer while editing.
#[derive(Default)]
pub struct MainPanel<'a> {
    buffer: EditBuffer<'a>,
}

impl<'a> MainPanel<'a> {
    pub fn buffer(&self) -> &EditBuffer<'a> {
        return &self.buffer;
    }

    pub fn buffer_mut(&mut self) -> &mut EditBuffer<'a> {
        return &mut self.buffer;
    }

    pub fn begin_edit(&mut self, content: &str) {
        self.buffer.load(content);
        self.buffer.focus();
    }

    /// Leaves edit mode and hands back the text to commit.
    pub fn end_edit(&mut self) -> String {
        self.buffer.blur();
        return self.buffer.text();
    }

    /// `content` is the stored text of the selected entry, `None` when there
    /// are no entries.
    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        content: Option<&str>,
        state: &UiState,
        config: &UiConfig,
    ) {
        let theme = &config.theme;
        let mut border_style = Style::default().fg(theme.border);
        if state.focus() == Focus::Main {
            border_style = border_style.fg(theme.border_focus);
        }
        let block = Block::bordered().border_style(border_style);

        if state.is_editing() {
            let inner = block.inner(area);
            frame.render_widget(block, area);
            frame.render_widget(&self.buffer.textarea, inner);
            return;
        }

        let paragraph = Paragraph::new(content.unwrap_or(PLACEHOLDER))
            .wrap(Wrap { trim: false })
            .block(block);
        frame.render_widget(paragraph, area);
    }
}
