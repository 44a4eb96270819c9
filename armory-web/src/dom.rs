use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Storage, Window};

use armory_core::Rect;

/// The global `window`, if running in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// First element matching `selector`, or `None` when nothing matches or the
/// selector is invalid.
#[must_use]
pub fn query(selector: &str) -> Option<Element> {
    document().and_then(|doc| doc.query_selector(selector).ok().flatten())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Viewport-relative bounding box of an element.
#[must_use]
pub fn client_rect(element: &Element) -> Rect {
    let rect = element.get_bounding_client_rect();
    Rect::new(rect.x(), rect.y(), rect.width(), rect.height())
}

/// The visible viewport as a rectangle anchored at the origin.
#[must_use]
pub fn viewport_rect() -> Rect {
    let Some(win) = window() else {
        return Rect::default();
    };
    let width = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Rect::new(0.0, 0.0, width, height)
}

/// Access the browser `localStorage` handle.
///
/// # Errors
/// Returns an error if the browser window cannot be accessed or `localStorage` is unavailable.
pub fn local_storage() -> Result<Storage, JsValue> {
    window()
        .ok_or_else(|| JsValue::from_str("window unavailable"))?
        .local_storage()?
        .ok_or_else(|| JsValue::from_str("localStorage unavailable"))
}
