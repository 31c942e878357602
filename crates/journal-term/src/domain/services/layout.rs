#[cfg(test)]
#[path = "layout_test.rs"]
mod tests;

use ratatui::layout::Rect;

use crate::configuration::LayoutConfig;

/// Cells taken by a `Block::bordered()` on each axis.
pub const BORDER_ALLOWANCE: u16 = 2;

/// Outer areas of the two panels, borders included.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelLayout {
    pub side: Rect,
    pub main: Rect,
}

impl PanelLayout {
    /// Splits `area` by percentage of its width. Both panels get the full
    /// height; widths are rounded down.
    pub fn compute(area: Rect, layout: &LayoutConfig) -> PanelLayout {
        let percent = layout.side_panel_percent.min(100) as u32;
        let width = area.width as u32;
        let side_width = (width * percent / 100) as u16;
        let main_width = (width * (100 - percent) / 100) as u16;

        return PanelLayout {
            side: Rect::new(area.x, area.y, side_width, area.height),
            main: Rect::new(area.x + side_width, area.y, main_width, area.height),
        };
    }

    /// Width and height left for content inside a bordered panel.
    pub fn inner_size(rect: Rect) -> (u16, u16) {
        return (
            rect.width.saturating_sub(BORDER_ALLOWANCE),
            rect.height.saturating_sub(BORDER_ALLOWANCE),
        );
    }
}
