use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::text::Text;

use crate::configuration::Theme;
use crate::domain::models::Entry;

/// Draws the rows of a list, one item at a time.
pub trait ItemDelegate {
    type Item;

    /// Lines taken by a single item.
    fn height(&self) -> u16;
    /// Blank lines between two items.
    fn spacing(&self) -> u16;
    fn render<'a>(
        &self,
        index: usize,
        item: &'a Self::Item,
        selected: bool,
        theme: &Theme,
    ) -> Text<'a>;
}

/// What the side panel knows about an entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntryItem {
    pub name: String,
    pub title: String,
}

impl From<&Entry> for EntryItem {
    fn from(entry: &Entry) -> EntryItem {
        return EntryItem {
            name: entry.name.clone(),
            title: entry.title.clone(),
        };
    }
}

/// One line per entry, the selected one prefixed with the theme marker and
/// the others padded to the same column.
#[derive(Clone, Copy, Debug, Default)]
pub struct EntryDelegate;

impl ItemDelegate for EntryDelegate {
    type Item = EntryItem;

    fn height(&self) -> u16 {
        return 1;
    }

    fn spacing(&self) -> u16 {
        return 0;
    }

    fn render<'a>(
        &self,
        _index: usize,
        item: &'a EntryItem,
        selected: bool,
        theme: &Theme,
    ) -> Text<'a> {
        if selected {
            return Text::from(Line::from(vec![
                Span::styled(theme.marker, Style::default().fg(theme.selected)),
                Span::styled(item.title.as_str(), Style::default().fg(theme.selected)),
            ]));
        }

        let padding = " ".repeat(theme.marker.chars().count());
        return Text::from(Line::from(vec![
            Span::raw(padding),
            Span::raw(item.title.as_str()),
        ]));
    }
}
