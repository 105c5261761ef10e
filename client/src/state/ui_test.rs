use super::*;

#[test]
fn default_state_is_drawing_with_default_pen() {
    let ui = UiState::default();
    assert_eq!(ui.stage, Stage::Drawing);
    assert_eq!(ui.pen_width, PEN_WIDTH_DEFAULT);
    assert_eq!(ui.pen_color, "#000000");
    assert!(ui.preview_url.is_none());
    assert!(ui.notice.is_none());
    assert!(!ui.clear_flashed);
    assert_eq!(ui.save_indicator, SaveIndicator::Idle);
}

#[test]
fn save_indicator_default_is_idle() {
    assert_eq!(SaveIndicator::default(), SaveIndicator::Idle);
}

#[test]
fn default_pen_color_parses_as_black() {
    let ui = UiState::default();
    assert_eq!(ink::color::Rgb::parse_hex(&ui.pen_color), Some(ink::color::Rgb::BLACK));
}
