//! Widget configuration.
//!
//! The deployed variants of this widget differ only in their labels,
//! whether the color picker is shown, and whether a confirmed host
//! delivery closes the session. All three collapse into one struct,
//! overridable per deployment through the page URL query string:
//! `?color_picker=0&auto_close=1&fallback_url=https://t.me/…`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// UI strings, injectable per deployment. English defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub title: &'static str,
    pub hint: &'static str,
    pub pen_size: &'static str,
    pub pen_color: &'static str,
    pub clear: &'static str,
    pub cleared: &'static str,
    pub save: &'static str,
    pub saving: &'static str,
    pub saved: &'static str,
    pub redraw: &'static str,
    pub confirm: &'static str,
    pub main_button: &'static str,
    pub empty_notice: &'static str,
    pub export_failed: &'static str,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            title: "Sign below",
            hint: "Draw your signature in the box",
            pen_size: "Pen size",
            pen_color: "Color",
            clear: "Clear",
            cleared: "Cleared!",
            save: "Save signature",
            saving: "Saving…",
            saved: "Saved!",
            redraw: "Redraw",
            confirm: "Confirm",
            main_button: "Save Signature",
            empty_notice: "Please draw your signature first",
            export_failed: "Could not save the signature, please try again",
        }
    }
}

/// Per-deployment widget configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    pub labels: Labels,
    /// Render the pen color selector.
    pub color_picker: bool,
    /// Close the host session after a successful host delivery.
    pub auto_close_on_confirm: bool,
    /// Where the close-fallback chain navigates as a last resort.
    pub fallback_host_url: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            labels: Labels::default(),
            color_picker: true,
            auto_close_on_confirm: true,
            fallback_host_url: "https://t.me".to_owned(),
        }
    }
}

impl WidgetConfig {
    /// Parse overrides from a URL query string (`?k=v&…`). Unknown keys
    /// and unparsable values keep their defaults.
    #[must_use]
    pub fn from_query(query: &str) -> Self {
        let mut config = Self::default();
        for pair in query.trim_start_matches('?').split('&') {
            let Some((key, value)) = pair.split_once('=') else {
                continue;
            };
            match key {
                "color_picker" => {
                    if let Some(flag) = parse_flag(value) {
                        config.color_picker = flag;
                    }
                }
                "auto_close" => {
                    if let Some(flag) = parse_flag(value) {
                        config.auto_close_on_confirm = flag;
                    }
                }
                "fallback_url" => {
                    if !value.is_empty() {
                        config.fallback_host_url = value.to_owned();
                    }
                }
                _ => {}
            }
        }
        config
    }

    /// Read the configuration from the current page URL.
    #[must_use]
    pub fn from_location() -> Self {
        let Some(search) = web_sys::window().and_then(|w| w.location().search().ok()) else {
            log::warn!("page location unavailable; using default configuration");
            return Self::default();
        };
        Self::from_query(&search)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
