//! Delivery adapter: host channel with local-download fallback, and the
//! close-fallback chain run after a confirmed host delivery.

#[cfg(test)]
#[path = "delivery_test.rs"]
mod delivery_test;

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

use ink::export::Capture;
use ink::payload::DeliveryPayload;

use super::HostBridge;

/// Delay before hiding the primary button and retrying the host close.
const CLOSE_RETRY_MS: u32 = 300;

/// Delay before attempting a generic window close.
const WINDOW_CLOSE_MS: u32 = 700;

/// Delay before navigating to the fallback host URL.
const NAVIGATE_MS: u32 = 1200;

/// Where a confirmed capture ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// The payload was accepted by the host's data channel.
    SentToHost,
    /// The capture was handed to the local file-save path.
    SavedLocally,
}

/// Dispatch a confirmed capture.
///
/// With a bridge present the payload goes to the host's outbound data
/// channel; a channel failure falls back to `save_locally` — the channel
/// itself is never retried. Without a bridge the capture always goes to
/// `save_locally`.
pub fn deliver<F>(bridge: Option<&Rc<dyn HostBridge>>, capture: &Capture, save_locally: F) -> DeliveryOutcome
where
    F: FnOnce(&Capture),
{
    if let Some(bridge) = bridge {
        let payload = DeliveryPayload::new(capture, bridge.user().as_ref());
        match bridge.send_data(&payload.to_json()) {
            Ok(()) => return DeliveryOutcome::SentToHost,
            Err(err) => log::error!("{err}; falling back to local download"),
        }
    }
    save_locally(capture);
    DeliveryOutcome::SavedLocally
}

/// Best-effort close of the host session.
///
/// The first close is attempted immediately; each fallback runs on its
/// own staggered timer, independent of the others. The whole chain lives
/// in one handle — re-running it supersedes any pending fallbacks.
#[derive(Clone, Default)]
pub struct CloseChain {
    timers: Rc<RefCell<Vec<Timeout>>>,
}

impl CloseChain {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) the close sequence against `bridge`.
    pub fn run(&self, bridge: &Rc<dyn HostBridge>, fallback_url: &str) {
        let mut timers = self.timers.borrow_mut();
        timers.clear();

        bridge.close();

        let retry_bridge = Rc::clone(bridge);
        timers.push(Timeout::new(CLOSE_RETRY_MS, move || {
            retry_bridge.hide_main_button();
            retry_bridge.close();
        }));

        timers.push(Timeout::new(WINDOW_CLOSE_MS, || {
            if let Some(window) = web_sys::window() {
                let _ = window.close();
            }
        }));

        let url = fallback_url.to_owned();
        timers.push(Timeout::new(NAVIGATE_MS, move || {
            let Some(window) = web_sys::window() else {
                return;
            };
            if let Err(err) = window.location().set_href(&url) {
                log::error!("fallback navigation failed: {err:?}");
            }
        }));
    }
}
