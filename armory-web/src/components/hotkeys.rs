//! Document-level keyboard shortcuts.

use yew::prelude::*;

/// Emit `on_escape` whenever Escape is pressed while `enabled`.
#[hook]
pub fn use_escape_key(enabled: bool, on_escape: Callback<()>) {
    use_effect_with((enabled, on_escape), move |(enabled, on_escape)| {
        #[cfg(target_arch = "wasm32")]
        let listener = (*enabled)
            .then(|| {
                use wasm_bindgen::JsCast;
                use wasm_bindgen::closure::Closure;

                let doc = crate::dom::document()?;
                let on_escape = on_escape.clone();
                let handler = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(
                    move |e: web_sys::KeyboardEvent| {
                        if e.key() == "Escape" {
                            on_escape.emit(());
                        }
                    },
                );
                doc.add_event_listener_with_callback("keydown", handler.as_ref().unchecked_ref())
                    .ok()?;
                Some((doc, handler))
            })
            .flatten();
        #[cfg(not(target_arch = "wasm32"))]
        let _ = (enabled, on_escape);

        move || {
            #[cfg(target_arch = "wasm32")]
            if let Some((doc, handler)) = listener {
                use wasm_bindgen::JsCast;
                if let Err(err) = doc.remove_event_listener_with_callback(
                    "keydown",
                    handler.as_ref().unchecked_ref(),
                ) {
                    log::debug!(
                        "Failed to remove Escape listener: {}",
                        crate::dom::js_error_message(&err)
                    );
                }
            }
        }
    });
}
