//! Bridge component between reactive state and the imperative engine.
//!
//! ARCHITECTURE
//! ============
//! This host owns the `ink::pad::PadCore` instance. It maps pointer,
//! keyboard, resize, and host-bridge events into engine calls, blits the
//! engine's buffer to the canvas after every mutation, and routes
//! capture confirmation through the delivery adapter. All timers run
//! through single-handle [`Debounce`] tasks so no purpose ever has two
//! timers in flight.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use ink::color::Rgb;
use ink::export::Capture;
use ink::flow::Stage;
use ink::geom::Point;
use ink::pad::{CaptureError, PadCore};

use crate::bridge::delivery::{self, CloseChain, DeliveryOutcome};
use crate::bridge::{BridgeEvent, BridgeHandle};
use crate::components::controls::Controls;
use crate::components::notice::NoticeBanner;
use crate::components::preview_panel::PreviewPanel;
use crate::render;
use crate::state::config::WidgetConfig;
use crate::state::ui::{SaveIndicator, UiState};
use crate::util::keymap::{self, Command};
use crate::util::timers::Debounce;
use crate::util::viewport::sync_surface;
use crate::util::{download, now_ms};

/// Resize events settle for this long before the surface is resized.
const RESIZE_DEBOUNCE_MS: u32 = 100;

/// Orientation and host-viewport changes settle longer; layout needs a
/// moment to converge.
const ORIENTATION_DEBOUNCE_MS: u32 = 250;

/// How long the clear control shows its confirmation label.
const CLEAR_FLASH_MS: u32 = 1000;

/// How long the save control shows its success label.
const SAVE_FLASH_MS: u32 = 2000;

/// How long the inline empty-capture notice stays up.
const NOTICE_DISMISS_MS: u32 = 3000;

type PadStore = StoredValue<Option<PadCore>, LocalStorage>;
type BridgeStore = StoredValue<BridgeHandle, LocalStorage>;
type TimerStore = StoredValue<PadTimers, LocalStorage>;

/// One handle per timer purpose.
#[derive(Default)]
struct PadTimers {
    resize: Debounce,
    clear_flash: Debounce,
    save_flash: Debounce,
    notice: Debounce,
    close_chain: CloseChain,
}

/// Canvas host component.
///
/// On mount this creates the engine sized to the canvas element, wires
/// the host bridge buttons, and starts listening for window resize,
/// orientation, and keyboard events.
#[component]
pub fn PadHost() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let config = expect_context::<Rc<WidgetConfig>>();
    let bridge = expect_context::<BridgeStore>();

    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let preview_ref = NodeRef::<leptos::html::Div>::new();
    let pad: PadStore = StoredValue::new_local(None);
    let timers: TimerStore = StoredValue::new_local(PadTimers::default());

    let labels = config.labels;
    let auto_close = config.auto_close_on_confirm;
    let fallback_url = config.fallback_host_url.clone();

    // --- Actions ---

    let clear_cb = Callback::new(move |_| {
        pad.update_value(|slot| {
            if let Some(engine) = slot.as_mut() {
                engine.clear();
            }
        });
        blit_now(pad, canvas_ref);
        ui.update(|u| u.clear_flashed = true);
        timers.with_value(|t| {
            t.clear_flash.schedule(CLEAR_FLASH_MS, move || {
                ui.update(|u| u.clear_flashed = false);
            });
        });
    });

    let save_cb = Callback::new(move |_| {
        ui.update(|u| u.save_indicator = SaveIndicator::Saving);

        let mut result: Option<Result<String, CaptureError>> = None;
        pad.update_value(|slot| {
            if let Some(engine) = slot.as_mut() {
                result = Some(engine.request_capture(now_ms()).map(Capture::to_data_url));
            }
        });

        match result {
            Some(Ok(data_url)) => {
                ui.update(|u| {
                    u.stage = Stage::Previewing;
                    u.preview_url = Some(data_url);
                    u.save_indicator = SaveIndicator::Saved;
                });
                timers.with_value(|t| {
                    t.save_flash.schedule(SAVE_FLASH_MS, move || {
                        ui.update(|u| u.save_indicator = SaveIndicator::Idle);
                    });
                });
                // Scroll once the preview panel exists in the DOM.
                Timeout::new(0, move || {
                    if let Some(panel) = preview_ref.get_untracked() {
                        panel.scroll_into_view();
                    }
                })
                .forget();
            }
            Some(Err(CaptureError::EmptySurface)) => {
                ui.update(|u| u.save_indicator = SaveIndicator::Idle);
                show_notice(bridge, timers, ui, labels.empty_notice);
            }
            Some(Err(err)) => {
                log::error!("capture failed: {err}");
                ui.update(|u| u.save_indicator = SaveIndicator::Idle);
                show_notice(bridge, timers, ui, labels.export_failed);
            }
            None => {
                log::error!("save requested before the pad engine mounted");
                ui.update(|u| u.save_indicator = SaveIndicator::Idle);
            }
        }
    });

    let redraw_cb = Callback::new(move |_| {
        pad.update_value(|slot| {
            if let Some(engine) = slot.as_mut() {
                engine.redraw();
            }
        });
        ui.update(|u| {
            u.stage = Stage::Drawing;
            u.preview_url = None;
        });
    });

    let confirm_cb = {
        let fallback_url = fallback_url.clone();
        Callback::new(move |_| {
            let mut pending: Option<Capture> = None;
            pad.update_value(|slot| {
                if let Some(engine) = slot.as_mut() {
                    pending = engine.confirm();
                }
            });
            let Some(capture) = pending else {
                log::warn!("confirm without a pending capture");
                return;
            };

            let host = bridge.with_value(|b| b.0.clone());
            let outcome = delivery::deliver(host.as_ref(), &capture, |c| {
                if let Err(err) = download::save_capture(c) {
                    log::error!("local download failed: {err:?}");
                }
            });

            if outcome == DeliveryOutcome::SentToHost && auto_close {
                if let Some(host) = host {
                    let fallback_url = fallback_url.clone();
                    timers.with_value(|t| t.close_chain.run(&host, &fallback_url));
                }
                return;
            }

            // Reset toward the next signature.
            pad.update_value(|slot| {
                if let Some(engine) = slot.as_mut() {
                    engine.clear();
                }
            });
            blit_now(pad, canvas_ref);
            ui.update(|u| {
                u.stage = Stage::Drawing;
                u.preview_url = None;
            });
        })
    };

    let pen_width_cb = Callback::new(move |width: f64| {
        pad.update_value(|slot| {
            if let Some(engine) = slot.as_mut() {
                engine.set_pen_width(width);
                let applied = engine.pen().width;
                ui.update(|u| u.pen_width = applied);
            }
        });
    });

    let pen_color_cb = Callback::new(move |value: String| {
        let Some(color) = Rgb::parse_hex(&value) else {
            log::warn!("ignoring unparsable pen color {value:?}");
            return;
        };
        pad.update_value(|slot| {
            if let Some(engine) = slot.as_mut() {
                engine.set_pen_color(color);
            }
        });
        ui.update(|u| u.pen_color = color.to_hex());
    });

    // --- Engine mount and host chrome ---

    {
        let config = Rc::clone(&config);
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if pad.with_value(Option::is_some) {
                return;
            }

            let dpr = web_sys::window()
                .map_or(1.0, |w| w.device_pixel_ratio())
                .max(1.0);
            let width = f64::from(canvas.client_width()).max(1.0);
            let height = f64::from(canvas.client_height()).max(1.0);
            let engine = PadCore::new(width, height, dpr);
            if let Err(err) = render::apply_canvas_size(&canvas, engine.surface()) {
                log::error!("initial canvas sizing failed: {err:?}");
            }
            if let Err(err) = render::blit(&canvas, engine.surface()) {
                log::error!("initial blit failed: {err:?}");
            }
            pad.set_value(Some(engine));
            log::info!("pad engine mounted ({width}x{height} @ {dpr}x)");

            bridge.with_value(|b| {
                let Some(host) = &b.0 else {
                    return;
                };
                host.show_main_button(config.labels.main_button);
                host.on_main_button(Box::new(move || save_cb.run(())));
                host.on_back_button(Box::new(move || {
                    bridge.with_value(|b| {
                        if let Some(host) = &b.0 {
                            host.close();
                        }
                    });
                }));
                host.on_event(
                    BridgeEvent::ViewportChanged,
                    Box::new(move || {
                        timers.with_value(|t| {
                            t.resize.schedule(ORIENTATION_DEBOUNCE_MS, move || {
                                apply_resize(pad, canvas_ref);
                            });
                        });
                    }),
                );
            });
        });
    }

    // --- Window listeners ---

    let resize_handle = window_event_listener(leptos::ev::resize, move |_| {
        timers.with_value(|t| {
            t.resize.schedule(RESIZE_DEBOUNCE_MS, move || {
                apply_resize(pad, canvas_ref);
            });
        });
    });
    on_cleanup(move || resize_handle.remove());

    let orientation_handle = window_event_listener(leptos::ev::orientationchange, move |_| {
        timers.with_value(|t| {
            t.resize.schedule(ORIENTATION_DEBOUNCE_MS, move || {
                apply_resize(pad, canvas_ref);
            });
        });
    });
    on_cleanup(move || orientation_handle.remove());

    let keydown_handle = window_event_listener(leptos::ev::keydown, move |ev| {
        let key = ev.key();
        if keymap::should_prevent_default(&key, ev.ctrl_key(), ev.meta_key()) {
            ev.prevent_default();
        }
        match keymap::command_for_key(&key, ev.ctrl_key(), ev.meta_key()) {
            Some(Command::Clear) => clear_cb.run(()),
            Some(Command::Save) => save_cb.run(()),
            None => {}
        }
    });
    on_cleanup(move || keydown_handle.remove());

    // --- Pointer input ---

    let on_pointer_down = move |ev: leptos::ev::PointerEvent| {
        ev.prevent_default();
        if !ev.is_primary() {
            return;
        }
        if let Some(canvas) = canvas_ref.get_untracked() {
            let _ = canvas.set_pointer_capture(ev.pointer_id());
        }
        pad.update_value(|slot| {
            if let Some(engine) = slot.as_mut() {
                engine.pointer_down(Point::new(f64::from(ev.offset_x()), f64::from(ev.offset_y())));
            }
        });
    };

    let on_pointer_move = move |ev: leptos::ev::PointerEvent| {
        ev.prevent_default();
        if !ev.is_primary() {
            return;
        }
        let mut changed = false;
        pad.update_value(|slot| {
            if let Some(engine) = slot.as_mut() {
                changed =
                    engine.pointer_move(Point::new(f64::from(ev.offset_x()), f64::from(ev.offset_y())));
            }
        });
        if changed {
            blit_now(pad, canvas_ref);
        }
    };

    let on_pointer_up = move |ev: leptos::ev::PointerEvent| {
        ev.prevent_default();
        if !ev.is_primary() {
            return;
        }
        if let Some(canvas) = canvas_ref.get_untracked() {
            let _ = canvas.release_pointer_capture(ev.pointer_id());
        }
        pad.update_value(|slot| {
            if let Some(engine) = slot.as_mut() {
                engine.pointer_up();
            }
        });
    };

    let on_pointer_cancel = move |ev: leptos::ev::PointerEvent| {
        ev.prevent_default();
        pad.update_value(|slot| {
            if let Some(engine) = slot.as_mut() {
                engine.pointer_up();
            }
        });
    };

    view! {
        <canvas
            class="pad__canvas"
            node_ref=canvas_ref
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up
            on:pointercancel=on_pointer_cancel
        ></canvas>
        <Controls
            on_clear=clear_cb
            on_save=save_cb
            on_pen_width=pen_width_cb
            on_pen_color=pen_color_cb
        />
        <NoticeBanner/>
        <PreviewPanel on_redraw=redraw_cb on_confirm=confirm_cb panel_ref=preview_ref/>
    }
}

// =============================================================
// Helpers
// =============================================================

/// Blocking notice: host alert when embedded, auto-dismissed banner
/// otherwise.
fn show_notice(bridge: BridgeStore, timers: TimerStore, ui: RwSignal<UiState>, message: &'static str) {
    let host = bridge.with_value(|b| b.0.clone());
    if let Some(host) = host {
        host.alert(message);
        return;
    }
    ui.update(|u| u.notice = Some(message.to_owned()));
    timers.with_value(|t| {
        t.notice.schedule(NOTICE_DISMISS_MS, move || {
            ui.update(|u| u.notice = None);
        });
    });
}

/// Copy the engine buffer to the canvas, logging failures.
fn blit_now(pad: PadStore, canvas_ref: NodeRef<leptos::html::Canvas>) {
    let Some(canvas) = canvas_ref.get_untracked() else {
        log::warn!("drawing canvas missing; blit skipped");
        return;
    };
    pad.with_value(|slot| {
        if let Some(engine) = slot.as_ref() {
            if let Err(err) = render::blit(&canvas, engine.surface()) {
                log::error!("canvas blit failed: {err:?}");
            }
        }
    });
}

/// Re-measure the canvas and resize the engine surface; reallocation
/// wipes drawn content, which is the documented resize behavior.
fn apply_resize(pad: PadStore, canvas_ref: NodeRef<leptos::html::Canvas>) {
    let Some(canvas) = canvas_ref.get_untracked() else {
        log::warn!("drawing canvas missing during resize");
        return;
    };
    pad.update_value(|slot| {
        let Some(engine) = slot.as_mut() else {
            return;
        };
        if sync_surface(engine, &canvas) {
            if let Err(err) = render::apply_canvas_size(&canvas, engine.surface()) {
                log::error!("canvas resize failed: {err:?}");
            }
            if let Err(err) = render::blit(&canvas, engine.surface()) {
                log::error!("canvas blit failed: {err:?}");
            }
        }
    });
}
