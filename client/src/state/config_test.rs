use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_shows_color_picker_and_auto_closes() {
    let config = WidgetConfig::default();
    assert!(config.color_picker);
    assert!(config.auto_close_on_confirm);
    assert_eq!(config.fallback_host_url, "https://t.me");
}

#[test]
fn empty_query_keeps_defaults() {
    assert_eq!(WidgetConfig::from_query(""), WidgetConfig::default());
    assert_eq!(WidgetConfig::from_query("?"), WidgetConfig::default());
}

// =============================================================
// Overrides
// =============================================================

#[test]
fn color_picker_can_be_disabled() {
    let config = WidgetConfig::from_query("?color_picker=0");
    assert!(!config.color_picker);
    assert!(config.auto_close_on_confirm);
}

#[test]
fn auto_close_can_be_disabled() {
    let config = WidgetConfig::from_query("?auto_close=off");
    assert!(!config.auto_close_on_confirm);
}

#[test]
fn fallback_url_is_overridable() {
    let config = WidgetConfig::from_query("?fallback_url=https://t.me/example_bot");
    assert_eq!(config.fallback_host_url, "https://t.me/example_bot");
}

#[test]
fn multiple_overrides_combine() {
    let config = WidgetConfig::from_query("color_picker=false&auto_close=1");
    assert!(!config.color_picker);
    assert!(config.auto_close_on_confirm);
}

// =============================================================
// Robustness
// =============================================================

#[test]
fn unknown_keys_are_ignored() {
    let config = WidgetConfig::from_query("?tgWebAppData=abc&color_picker=0");
    assert!(!config.color_picker);
}

#[test]
fn garbage_values_keep_defaults() {
    let config = WidgetConfig::from_query("?color_picker=maybe&auto_close=");
    assert_eq!(config, WidgetConfig::default());
}

#[test]
fn pairs_without_equals_are_skipped() {
    let config = WidgetConfig::from_query("?standalone&color_picker=0");
    assert!(!config.color_picker);
}

#[test]
fn empty_fallback_url_keeps_the_default() {
    let config = WidgetConfig::from_query("?fallback_url=");
    assert_eq!(config.fallback_host_url, "https://t.me");
}
