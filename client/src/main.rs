//! Signature pad Mini App client.
//!
//! ARCHITECTURE
//! ============
//! The `ink` crate owns all drawing state and pixel work; this crate maps
//! DOM events into engine calls, blits the engine's buffer to a canvas,
//! and adapts delivery between the host bridge and the local-download
//! fallback.
//!
//! | Module | Role |
//! |--------|------|
//! | [`app`] | Root component: config, bridge detection, host chrome |
//! | [`components`] | Pad host, controls, preview panel, notice banner |
//! | [`render`] | Canvas sizing and pixel blit (the only 2D-context user) |
//! | [`state`] | Widget configuration and reactive UI state |
//! | [`util`] | Keymap, timers, download, theme, viewport helpers |
//! | [`bridge`] | Host bridge capability, Telegram binding, delivery |

mod app;
mod bridge;
mod components;
mod render;
mod state;
mod util;

use app::App;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("signature pad client starting");
    leptos::mount::mount_to_body(App);
}
