//! Host bridge capability.
//!
//! The messaging platform's embedding API is modeled as an injected
//! *optional* capability: components read a [`BridgeHandle`] from context
//! and treat `None` as the fully supported standalone mode. Everything
//! the widget needs from the host is enumerated on [`HostBridge`], so a
//! recording stub can stand in for the platform during tests.

pub mod delivery;
pub mod telegram;

use std::fmt;
use std::rc::Rc;

use ink::payload::HostUser;

/// Failure reported by the host's outbound data channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendError(pub String);

impl fmt::Display for SendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "host data channel rejected the payload: {}", self.0)
    }
}

/// Host change notifications the widget subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeEvent {
    /// The host viewport was resized or expanded.
    ViewportChanged,
    /// The host theme palette changed.
    ThemeChanged,
}

/// Theme palette supplied by the host, all fields best-effort.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeParams {
    pub bg_color: Option<String>,
    pub text_color: Option<String>,
    pub hint_color: Option<String>,
    pub link_color: Option<String>,
    pub button_color: Option<String>,
    pub button_text_color: Option<String>,
}

/// The capability set the widget uses from its embedding host.
pub trait HostBridge {
    /// Tell the host the page is ready to be shown.
    fn ready(&self);
    /// Ask the host to expand the viewport to full height.
    fn expand(&self);
    /// Current host theme palette.
    fn theme_params(&self) -> ThemeParams;
    /// Best-effort identity of the viewing user.
    fn user(&self) -> Option<HostUser>;
    /// Show the host's primary action button with `label`.
    fn show_main_button(&self, label: &str);
    /// Hide the host's primary action button.
    fn hide_main_button(&self);
    /// Register the primary button click handler.
    fn on_main_button(&self, callback: Box<dyn Fn()>);
    /// Register the secondary/back button click handler.
    fn on_back_button(&self, callback: Box<dyn Fn()>);
    /// Show a modal alert.
    fn alert(&self, message: &str);
    /// Hand one message to the host's outbound data channel.
    ///
    /// # Errors
    ///
    /// Returns [`SendError`] when the channel throws or is missing.
    fn send_data(&self, json: &str) -> Result<(), SendError>;
    /// Ask the host to close this session.
    fn close(&self);
    /// Subscribe to a host change notification.
    fn on_event(&self, event: BridgeEvent, callback: Box<dyn Fn()>);
}

/// Shared, optional handle to the detected host bridge.
///
/// Provided via context so any component can ask "is a host present"
/// without a scattered runtime guard.
#[derive(Clone)]
pub struct BridgeHandle(pub Option<Rc<dyn HostBridge>>);

impl BridgeHandle {
    /// Detect the host bridge on the current page.
    #[must_use]
    pub fn detect() -> Self {
        match telegram::TelegramBridge::detect() {
            Some(bridge) => {
                log::info!("host bridge detected");
                Self(Some(Rc::new(bridge)))
            }
            None => {
                log::info!("no host bridge; running standalone");
                Self(None)
            }
        }
    }
}
