//! Host theme application.
//!
//! Maps the bridge's theme palette onto CSS custom properties of the
//! `<html>` element, with the stylesheet's defaults as fallbacks.
//! Re-applied on every host theme-change notification; applying the
//! same palette twice is harmless.

use wasm_bindgen::JsCast;

use crate::bridge::ThemeParams;

/// Apply `theme` to the document element, best effort.
pub fn apply(theme: &ThemeParams) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        log::warn!("document element unavailable; theme not applied");
        return;
    };
    let Ok(html) = root.dyn_into::<web_sys::HtmlElement>() else {
        return;
    };

    let style = html.style();
    let vars = [
        ("--tg-theme-bg-color", theme.bg_color.as_deref(), "#ffffff"),
        ("--tg-theme-text-color", theme.text_color.as_deref(), "#000000"),
        ("--tg-theme-hint-color", theme.hint_color.as_deref(), "#999999"),
        ("--tg-theme-link-color", theme.link_color.as_deref(), "#2481cc"),
        ("--tg-theme-button-color", theme.button_color.as_deref(), "#2481cc"),
        (
            "--tg-theme-button-text-color",
            theme.button_text_color.as_deref(),
            "#ffffff",
        ),
    ];
    for (name, value, fallback) in vars {
        if let Err(err) = style.set_property(name, value.unwrap_or(fallback)) {
            log::warn!("failed to set {name}: {err:?}");
        }
    }
}
