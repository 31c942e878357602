#[cfg(test)]
#[path = "side_panel_test.rs"]
mod tests;

use std::ops::Range;

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Text;
use ratatui::widgets::Block;
use ratatui::widgets::Paragraph;

use super::EntryDelegate;
use super::EntryItem;
use super::ItemDelegate;
use super::PanelLayout;
use crate::configuration::UiConfig;

/// Cursor based single column list of entries.
pub struct SidePanel<D: ItemDelegate<Item = EntryItem> = EntryDelegate> {
    items: Vec<EntryItem>,
    cursor: usize,
    delegate: D,
    skipped: usize,
}

impl SidePanel<EntryDelegate> {
    pub fn new(items: Vec<EntryItem>) -> SidePanel<EntryDelegate> {
        return SidePanel::with_delegate(items, EntryDelegate);
    }
}

impl<D: ItemDelegate<Item = EntryItem>> SidePanel<D> {
    pub fn with_delegate(items: Vec<EntryItem>, delegate: D) -> SidePanel<D> {
        return SidePanel {
            items,
            cursor: 0,
            delegate,
            skipped: 0,
        };
    }

    /// Number of files left out at load time, shown in the bottom border.
    pub fn set_skipped(&mut self, skipped: usize) {
        self.skipped = skipped;
    }

    pub fn cursor(&self) -> usize {
        return self.cursor;
    }

    pub fn len(&self) -> usize {
        return self.items.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.items.is_empty();
    }

    /// Name of the entry under the cursor.
    pub fn selected(&self) -> Option<&str> {
        return self.items.get(self.cursor).map(|e| return e.name.as_str());
    }

    pub fn move_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.items.len() {
            self.cursor += 1;
        }
    }

    /// Items on the page holding the cursor, for a list area of `height` rows.
    pub fn visible_range(&self, height: u16) -> Range<usize> {
        let spacing = self.delegate.spacing() as usize;
        let row = self.delegate.height() as usize + spacing;
        let per_page = ((height as usize + spacing) / row.max(1)).max(1);

        let start = (self.cursor / per_page) * per_page;
        let end = (start + per_page).min(self.items.len());
        return start..end;
    }

    pub fn render(&self, area: Rect, focused: bool, config: &UiConfig) -> Paragraph<'_> {
        let theme = &config.theme;
        let mut border_style = Style::default().fg(theme.border);
        if focused {
            border_style = border_style.fg(theme.border_focus);
        }

        let mut block = Block::bordered().border_style(border_style);
        if self.skipped > 0 {
            block = block.title_bottom(Line::from(format!(" {} skipped ", self.skipped)));
        }

        let (_, inner_height) = PanelLayout::inner_size(area);
        let range = self.visible_range(inner_height);
        let first = range.start;

        let mut text = Text::default();
        for (index, item) in self.items[range].iter().enumerate() {
            let index = first + index;
            if index > first {
                for _ in 0..self.delegate.spacing() {
                    text.lines.push(Line::default());
                }
            }

            let rendered = self
                .delegate
                .render(index, item, index == self.cursor, theme);
            text.lines.extend(rendered.lines);
        }

        return Paragraph::new(text).block(block);
    }
}
