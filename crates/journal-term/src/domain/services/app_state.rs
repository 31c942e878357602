use anyhow::Result;
use ratatui::Frame;
use tui_textarea::Input;

use super::EntryItem;
use super::MainPanel;
use super::PanelLayout;
use super::SidePanel;
use crate::configuration::UiConfig;
use crate::domain::models::Command;
use crate::domain::models::Entry;
use crate::domain::models::EntryStoreBox;
use crate::domain::models::Event;
use crate::domain::models::Focus;
use crate::domain::models::LoadWarning;
use crate::domain::models::UiEffect;
use crate::domain::models::UiState;

#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

pub struct AppStateProps {
    /// An already loaded store.
    pub store: EntryStoreBox,
    pub ui_config: UiConfig,
    pub warnings: Vec<LoadWarning>,
}

/// Top level model: owns the store, both panels and the focus/mode state,
/// and routes every input event.
pub struct AppState<'a> {
    pub main_panel: MainPanel<'a>,
    pub side_panel: SidePanel,
    pub store: EntryStoreBox,
    pub ui: UiState,
    pub ui_config: UiConfig,
    pub warnings: Vec<LoadWarning>,
}

impl<'a> AppState<'a> {
    pub fn new(props: AppStateProps) -> AppState<'a> {
        let items = props
            .store
            .list()
            .iter()
            .map(EntryItem::from)
            .collect::<Vec<_>>();

        let mut side_panel = SidePanel::new(items);
        side_panel.set_skipped(props.warnings.len());

        return AppState {
            main_panel: MainPanel::default(),
            side_panel,
            store: props.store,
            ui: UiState::default(),
            ui_config: props.ui_config,
            warnings: props.warnings,
        };
    }

    pub fn selected_entry(&self) -> Option<&Entry> {
        return self
            .side_panel
            .selected()
            .and_then(|name| return self.store.get(name));
    }

    /// Processes one event. Returns true when the session should end.
    pub fn handle_event(&mut self, event: Event) -> Result<bool> {
        match event {
            Event::KeyboardCTRLC => {
                tracing::debug!(editing = self.ui.is_editing(), "quit");
                return Ok(true);
            }
            Event::KeyboardCharInput(input) => {
                return self.handle_input(input);
            }
            Event::KeyboardPaste(text) => {
                self.main_panel.buffer_mut().paste(&text);
            }
            Event::UIResize(width, height) => {
                tracing::debug!(width, height, "resize");
            }
        }

        return Ok(false);
    }

    fn handle_input(&mut self, input: Input) -> Result<bool> {
        match Command::resolve(&input, &self.ui) {
            Some(Command::Quit) => {
                tracing::debug!(editing = self.ui.is_editing(), "quit");
                return Ok(true);
            }
            Some(Command::MoveUp) => self.side_panel.move_up(),
            Some(Command::MoveDown) => self.side_panel.move_down(),
            Some(command) => self.apply(command)?,
            None => {
                self.main_panel.buffer_mut().input(input);
            }
        }

        return Ok(false);
    }

    fn apply(&mut self, command: Command) -> Result<()> {
        // Nothing to edit in an empty collection.
        let Some(name) = self.side_panel.selected().map(|e| return e.to_string()) else {
            return Ok(());
        };

        let effect = self.ui.apply(command);
        tracing::debug!(
            ?command,
            focus = %self.ui.focus(),
            mode = %self.ui.mode(),
            "transition"
        );

        match effect {
            Some(UiEffect::BeginEdit) => {
                let content = self
                    .store
                    .get(&name)
                    .map(|e| return e.content.clone())
                    .unwrap_or_default();
                self.main_panel.begin_edit(&content);
            }
            Some(UiEffect::Commit) => {
                let text = self.main_panel.end_edit();
                tracing::info!(entry = name, bytes = text.len(), "commit");
                self.store.commit(&name, &text)?;
            }
            None => {}
        }

        return Ok(());
    }

    pub fn render(&self, frame: &mut Frame) {
        let layout = PanelLayout::compute(frame.area(), &self.ui_config.layout);
        let side_focused = self.ui.focus() == Focus::Side;

        frame.render_widget(
            self.side_panel
                .render(layout.side, side_focused, &self.ui_config),
            layout.side,
        );

        let content = self.selected_entry().map(|e| return e.content.as_str());
        self.main_panel
            .render(frame, layout.main, content, &self.ui, &self.ui_config);
    }
}
