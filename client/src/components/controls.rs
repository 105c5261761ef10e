//! Pen and action controls: width slider, color picker, clear and save.

use std::rc::Rc;

use leptos::prelude::*;

use ink::consts::{PEN_WIDTH_MAX, PEN_WIDTH_MIN};
use ink::flow::Stage;

use crate::state::config::WidgetConfig;
use crate::state::ui::{SaveIndicator, UiState};

/// Control row under the drawing surface.
///
/// Every control is a plain binding from input to a state mutation; the
/// actual mutations live with the engine owner (`PadHost`) and arrive
/// here as callbacks.
#[component]
pub fn Controls(
    on_clear: Callback<()>,
    on_save: Callback<()>,
    on_pen_width: Callback<f64>,
    on_pen_color: Callback<String>,
) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let config = expect_context::<Rc<WidgetConfig>>();
    let labels = config.labels;
    let color_picker = config.color_picker;

    let width_label = move || format!("{:.0}", ui.get().pen_width);
    let clear_label = move || {
        if ui.get().clear_flashed {
            labels.cleared
        } else {
            labels.clear
        }
    };
    let save_label = move || match ui.get().save_indicator {
        SaveIndicator::Idle => labels.save,
        SaveIndicator::Saving => labels.saving,
        SaveIndicator::Saved => labels.saved,
    };
    let is_previewing = move || ui.get().stage == Stage::Previewing;

    view! {
        <div class="controls">
            <span class="controls__label">{labels.pen_size}</span>
            <input
                type="range"
                min=PEN_WIDTH_MIN
                max=PEN_WIDTH_MAX
                step="1"
                prop:value=move || ui.get().pen_width.to_string()
                on:input=move |ev| {
                    if let Ok(width) = event_target_value(&ev).parse::<f64>() {
                        on_pen_width.run(width);
                    }
                }
            />
            <span class="controls__label">{width_label}</span>

            <Show when=move || color_picker>
                <span class="controls__label">{labels.pen_color}</span>
                <input
                    type="color"
                    prop:value=move || ui.get().pen_color.clone()
                    on:input=move |ev| on_pen_color.run(event_target_value(&ev))
                />
            </Show>

            <button class="btn" disabled=is_previewing on:click=move |_| on_clear.run(())>
                {clear_label}
            </button>
            <button
                class="btn"
                class=("btn--saving", move || ui.get().save_indicator == SaveIndicator::Saving)
                disabled=is_previewing
                on:click=move |_| on_save.run(())
            >
                {save_label}
            </button>
        </div>
    }
}
