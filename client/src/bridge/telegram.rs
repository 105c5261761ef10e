//! Telegram `window.Telegram.WebApp` binding for [`HostBridge`].
//!
//! The host object is bound through `wasm_bindgen` extern types; absence
//! of the global (plain browser, tests) makes [`TelegramBridge::detect`]
//! return `None` rather than failing. Callback closures handed to the
//! host must outlive their registration, so they are retained for the
//! life of the bridge.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;

use ink::payload::HostUser;

use super::{BridgeEvent, HostBridge, SendError, ThemeParams};

#[wasm_bindgen]
extern "C" {
    /// The host's `window.Telegram.WebApp` object.
    type WebApp;

    #[wasm_bindgen(method)]
    fn ready(this: &WebApp);

    #[wasm_bindgen(method)]
    fn expand(this: &WebApp);

    #[wasm_bindgen(method, catch, js_name = sendData)]
    fn send_data(this: &WebApp, data: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch)]
    fn close(this: &WebApp) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = showAlert)]
    fn show_alert(this: &WebApp, message: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(method, js_name = onEvent)]
    fn on_event(this: &WebApp, event: &str, callback: &js_sys::Function);

    #[wasm_bindgen(method, getter, js_name = MainButton)]
    fn main_button(this: &WebApp) -> MainButton;

    #[wasm_bindgen(method, getter, js_name = BackButton)]
    fn back_button(this: &WebApp) -> BackButton;

    #[wasm_bindgen(method, getter, js_name = themeParams)]
    fn theme_params(this: &WebApp) -> JsValue;

    #[wasm_bindgen(method, getter, js_name = initDataUnsafe)]
    fn init_data_unsafe(this: &WebApp) -> JsValue;

    /// The host's primary action button.
    type MainButton;

    #[wasm_bindgen(method, js_name = setText)]
    fn set_text(this: &MainButton, text: &str);

    #[wasm_bindgen(method)]
    fn show(this: &MainButton);

    #[wasm_bindgen(method)]
    fn hide(this: &MainButton);

    #[wasm_bindgen(method, js_name = onClick)]
    fn on_click(this: &MainButton, callback: &js_sys::Function);

    /// The host's secondary/back button.
    type BackButton;

    #[wasm_bindgen(method)]
    fn show(this: &BackButton);

    #[wasm_bindgen(method, js_name = onClick)]
    fn on_click(this: &BackButton, callback: &js_sys::Function);
}

/// Production [`HostBridge`] over the Telegram Mini App object.
pub struct TelegramBridge {
    app: WebApp,
    retained: RefCell<Vec<Closure<dyn Fn()>>>,
}

impl TelegramBridge {
    /// Bind to `window.Telegram.WebApp` if the page is embedded.
    #[must_use]
    pub fn detect() -> Option<Self> {
        let window = web_sys::window()?;
        let telegram = js_sys::Reflect::get(&window, &JsValue::from_str("Telegram")).ok()?;
        if telegram.is_undefined() || telegram.is_null() {
            return None;
        }
        let app = js_sys::Reflect::get(&telegram, &JsValue::from_str("WebApp")).ok()?;
        if app.is_undefined() || app.is_null() {
            return None;
        }
        Some(Self {
            app: app.unchecked_into(),
            retained: RefCell::new(Vec::new()),
        })
    }

    /// Wrap a Rust callback for the host and keep it alive.
    fn retain(&self, callback: Box<dyn Fn()>) -> js_sys::Function {
        let closure = Closure::wrap(callback);
        let function = closure.as_ref().unchecked_ref::<js_sys::Function>().clone();
        self.retained.borrow_mut().push(closure);
        function
    }
}

impl HostBridge for TelegramBridge {
    fn ready(&self) {
        self.app.ready();
    }

    fn expand(&self) {
        self.app.expand();
    }

    fn theme_params(&self) -> ThemeParams {
        let raw = self.app.theme_params();
        ThemeParams {
            bg_color: string_field(&raw, "bg_color"),
            text_color: string_field(&raw, "text_color"),
            hint_color: string_field(&raw, "hint_color"),
            link_color: string_field(&raw, "link_color"),
            button_color: string_field(&raw, "button_color"),
            button_text_color: string_field(&raw, "button_text_color"),
        }
    }

    fn user(&self) -> Option<HostUser> {
        let raw = js_sys::Reflect::get(&self.app.init_data_unsafe(), &JsValue::from_str("user")).ok()?;
        if raw.is_undefined() || raw.is_null() {
            return None;
        }
        Some(HostUser {
            id: number_field(&raw, "id"),
            username: string_field(&raw, "username"),
            display_name: string_field(&raw, "first_name"),
        })
    }

    fn show_main_button(&self, label: &str) {
        let button = self.app.main_button();
        button.set_text(label);
        button.show();
    }

    fn hide_main_button(&self) {
        self.app.main_button().hide();
    }

    fn on_main_button(&self, callback: Box<dyn Fn()>) {
        let function = self.retain(callback);
        self.app.main_button().on_click(&function);
    }

    fn on_back_button(&self, callback: Box<dyn Fn()>) {
        let function = self.retain(callback);
        self.app.back_button().on_click(&function);
    }

    fn alert(&self, message: &str) {
        if self.app.show_alert(message).is_err() {
            log::warn!("host alert unavailable: {message}");
        }
    }

    fn send_data(&self, json: &str) -> Result<(), SendError> {
        self.app
            .send_data(json)
            .map_err(|err| SendError(format!("{err:?}")))
    }

    fn close(&self) {
        if let Err(err) = self.app.close() {
            log::warn!("host close call failed: {err:?}");
        }
    }

    fn on_event(&self, event: BridgeEvent, callback: Box<dyn Fn()>) {
        let name = match event {
            BridgeEvent::ViewportChanged => "viewportChanged",
            BridgeEvent::ThemeChanged => "themeChanged",
        };
        let function = self.retain(callback);
        self.app.on_event(name, &function);
    }
}

fn string_field(object: &JsValue, key: &str) -> Option<String> {
    js_sys::Reflect::get(object, &JsValue::from_str(key))
        .ok()
        .and_then(|value| value.as_string())
        .filter(|value| !value.is_empty())
}

#[allow(clippy::cast_possible_truncation)]
fn number_field(object: &JsValue, key: &str) -> Option<i64> {
    js_sys::Reflect::get(object, &JsValue::from_str(key))
        .ok()
        .and_then(|value| value.as_f64())
        .map(|value| value as i64)
}
