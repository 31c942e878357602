use ratatui::backend::TestBackend;

use super::*;
use crate::configuration::UiConfig;
use crate::infrastructure::stores::static_store::StaticStore;

#[test]
fn it_draws_both_panels() {
    let app_state = AppState::new(AppStateProps {
        store: Box::<StaticStore>::default(),
        ui_config: UiConfig::with_side_panel_percent(25).unwrap(),
        warnings: vec![],
    });
    let mut terminal = Terminal::new(TestBackend::new(80, 6)).unwrap();

    draw(&mut terminal, &app_state);

    let buffer = terminal.backend().buffer();
    let first_row = (0..buffer.area.width)
        .map(|x| return buffer[(x, 1)].symbol().to_string())
        .collect::<String>();
    insta::assert_snapshot!(
        first_row,
        @"│> Journal         ││Heute: Journal-Ansicht fertigstellen                      │"
    );
}
