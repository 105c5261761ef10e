//! Local-file fallback: hands the capture PNG to the browser's save
//! path through a temporary object URL and a synthetic anchor click.

use js_sys::{Array, Uint8Array};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use ink::export::Capture;

/// Trigger a client-side download of the capture, named
/// `signature_<epoch-ms>.png`.
///
/// # Errors
///
/// Propagates DOM failures (`Blob`/URL creation, node insertion) for the
/// caller to log; the widget stays usable either way.
pub fn save_capture(capture: &Capture) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document unavailable"))?;

    let bytes = Uint8Array::from(capture.png());
    let parts = Array::new();
    parts.push(&bytes.buffer());
    let options = BlobPropertyBag::new();
    options.set_type("image/png");
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")?
        .dyn_into()
        .map_err(|_| JsValue::from_str("unexpected element type for <a>"))?;
    anchor.set_href(&url);
    anchor.set_download(&capture.filename());

    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document body unavailable"))?;
    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;
    Url::revoke_object_url(&url)?;
    Ok(())
}
