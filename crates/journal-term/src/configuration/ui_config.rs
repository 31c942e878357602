use anyhow::bail;
use anyhow::Result;
use ratatui::style::Color;

use super::Config;
use super::ConfigKey;

/// Colors and glyphs used when painting the panels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub border: Color,
    pub border_focus: Color,
    pub selected: Color,
    pub marker: &'static str,
}

impl Default for Theme {
    fn default() -> Theme {
        return Theme {
            border: Color::Indexed(240),
            border_focus: Color::Indexed(12),
            selected: Color::Indexed(170),
            marker: "> ",
        };
    }
}

/// Share of the terminal given to each panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Side panel width in percent of the terminal width, `1..=99`.
    pub side_panel_percent: u16,
}

impl Default for LayoutConfig {
    fn default() -> LayoutConfig {
        return LayoutConfig {
            side_panel_percent: 18,
        };
    }
}

/// Render settings, built once at startup and passed to every render call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiConfig {
    pub theme: Theme,
    pub layout: LayoutConfig,
}

impl UiConfig {
    pub fn with_side_panel_percent(percent: u16) -> Result<UiConfig> {
        if !(1..=99).contains(&percent) {
            bail!("side-panel-percent must be between 1 and 99, got {percent}");
        }

        return Ok(UiConfig {
            layout: LayoutConfig {
                side_panel_percent: percent,
            },
            ..Default::default()
        });
    }

    pub fn from_config() -> Result<UiConfig> {
        let raw = Config::get(ConfigKey::SidePanelPercent);
        let percent = match raw.parse::<u16>() {
            Ok(percent) => percent,
            Err(_) => bail!("side-panel-percent must be a whole number, got '{raw}'"),
        };

        return UiConfig::with_side_panel_percent(percent);
    }
}
