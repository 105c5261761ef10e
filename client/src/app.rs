//! Root component: configuration, bridge detection, host chrome.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs once per page load. Detects the optional host bridge, applies
//! host chrome (ready/expand/theme), and provides configuration, bridge,
//! and UI state to the component tree via context.

use std::rc::Rc;

use leptos::prelude::*;

use crate::bridge::{BridgeEvent, BridgeHandle};
use crate::components::pad_host::PadHost;
use crate::state::config::WidgetConfig;
use crate::state::ui::UiState;
use crate::util::theme;

#[component]
pub fn App() -> impl IntoView {
    let config = Rc::new(WidgetConfig::from_location());
    let bridge = BridgeHandle::detect();

    let ui = RwSignal::new(UiState::default());

    if let Some(host) = &bridge.0 {
        host.ready();
        host.expand();
        theme::apply(&host.theme_params());
        if let Some(user) = host.user() {
            let who = user
                .display_name
                .or(user.username)
                .unwrap_or_else(|| "unknown".to_owned());
            log::info!("host user present: {who}");
        }
        let theme_host = Rc::clone(host);
        host.on_event(
            BridgeEvent::ThemeChanged,
            Box::new(move || theme::apply(&theme_host.theme_params())),
        );
    }

    let title = config.labels.title;
    let hint = config.labels.hint;

    provide_context(ui);
    provide_context(Rc::clone(&config));
    provide_context(StoredValue::new_local(bridge));

    view! {
        <main class="pad">
            <h1 class="pad__title">{title}</h1>
            <p class="controls__label">{hint}</p>
            <PadHost/>
        </main>
    }
}
