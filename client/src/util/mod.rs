//! Shared helpers: keymap, timers, download, theme, viewport.

pub mod download;
pub mod keymap;
pub mod theme;
pub mod timers;
pub mod viewport;

/// Current wall-clock time in epoch milliseconds via the JS `Date.now()`
/// API.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn now_ms() -> i64 {
    js_sys::Date::now() as i64
}
