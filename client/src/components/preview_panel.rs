//! Capture preview with redraw/confirm actions.

use std::rc::Rc;

use leptos::prelude::*;

use ink::flow::Stage;

use crate::state::config::WidgetConfig;
use crate::state::ui::UiState;

/// Panel revealed while a capture awaits confirmation.
#[component]
pub fn PreviewPanel(
    on_redraw: Callback<()>,
    on_confirm: Callback<()>,
    panel_ref: NodeRef<leptos::html::Div>,
) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let config = expect_context::<Rc<WidgetConfig>>();
    let labels = config.labels;

    view! {
        <Show when=move || ui.get().stage == Stage::Previewing>
            <div class="preview" node_ref=panel_ref>
                <img
                    class="preview__image"
                    alt="Signature preview"
                    src=move || ui.get().preview_url.unwrap_or_default()
                />
                <div class="preview__actions">
                    <button class="btn" on:click=move |_| on_redraw.run(())>
                        {labels.redraw}
                    </button>
                    <button class="btn" on:click=move |_| on_confirm.run(())>
                        {labels.confirm}
                    </button>
                </div>
            </div>
        </Show>
    }
}
