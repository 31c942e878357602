use super::*;

fn layout(percent: u16) -> LayoutConfig {
    return LayoutConfig {
        side_panel_percent: percent,
    };
}

#[test]
fn it_splits_by_percentage() {
    let res = PanelLayout::compute(Rect::new(0, 0, 100, 40), &layout(18));
    assert_eq!(res.side, Rect::new(0, 0, 18, 40));
    assert_eq!(res.main, Rect::new(18, 0, 82, 40));

    let res = PanelLayout::compute(Rect::new(0, 0, 80, 24), &layout(25));
    assert_eq!(res.side, Rect::new(0, 0, 20, 24));
    assert_eq!(res.main, Rect::new(20, 0, 60, 24));
}

#[test]
fn it_rounds_widths_down() {
    let res = PanelLayout::compute(Rect::new(0, 0, 101, 10), &layout(18));
    assert_eq!(res.side.width, 18);
    assert_eq!(res.main.width, 82);
    assert!(res.side.width + res.main.width <= 101);
}

#[test]
fn it_offsets_from_the_area_origin() {
    let res = PanelLayout::compute(Rect::new(3, 2, 50, 10), &layout(20));
    assert_eq!(res.side, Rect::new(3, 2, 10, 10));
    assert_eq!(res.main, Rect::new(13, 2, 40, 10));
}

#[test]
fn it_subtracts_the_border_allowance() {
    assert_eq!(PanelLayout::inner_size(Rect::new(0, 0, 18, 40)), (16, 38));
    assert_eq!(PanelLayout::inner_size(Rect::new(0, 0, 1, 1)), (0, 0));
}

#[test]
fn it_matches_the_area_inside_a_bordered_block() {
    let area = Rect::new(2, 3, 18, 40);
    let inner = ratatui::widgets::Block::bordered().inner(area);
    assert_eq!(PanelLayout::inner_size(area), (inner.width, inner.height));
}
