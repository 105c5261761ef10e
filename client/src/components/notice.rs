//! Inline blocking notice, used when no host alert is available.

use leptos::prelude::*;

use crate::state::ui::UiState;

/// Banner shown while a notice is set; the pad host auto-dismisses it.
#[component]
pub fn NoticeBanner() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <Show when=move || ui.get().notice.is_some()>
            <div class="notice" role="alert">
                {move || ui.get().notice.unwrap_or_default()}
            </div>
        </Show>
    }
}
