//! Viewport width tracking for the phone-sized popup presentation.

use yew::prelude::*;

/// Media query matching viewports at or below `breakpoint_px` wide.
#[must_use]
pub fn narrow_query(breakpoint_px: u32) -> String {
    format!("(max-width: {breakpoint_px}px)")
}

#[cfg(target_arch = "wasm32")]
fn matches_now(query: &str) -> bool {
    crate::dom::window()
        .and_then(|win| win.match_media(query).ok().flatten())
        .is_some_and(|list| list.matches())
}

#[cfg(not(target_arch = "wasm32"))]
const fn matches_now(_query: &str) -> bool {
    false
}

/// `true` while the viewport is at or below `breakpoint_px`; re-renders the
/// caller whenever that flips.
#[hook]
pub fn use_narrow_viewport(breakpoint_px: u32) -> bool {
    let query = narrow_query(breakpoint_px);
    let narrow = {
        let query = query.clone();
        use_state(move || matches_now(&query))
    };

    {
        let narrow = narrow.clone();
        use_effect_with(query, move |query| {
            #[cfg(target_arch = "wasm32")]
            let listener = {
                use wasm_bindgen::JsCast;
                use wasm_bindgen::closure::Closure;

                let list = crate::dom::window()
                    .and_then(|win| win.match_media(query).ok().flatten());
                list.map(|list| {
                    let on_change = {
                        let list = list.clone();
                        Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
                            narrow.set(list.matches());
                        })
                    };
                    if let Err(err) = list.add_event_listener_with_callback(
                        "change",
                        on_change.as_ref().unchecked_ref(),
                    ) {
                        log::warn!(
                            "Viewport listener failed: {}",
                            crate::dom::js_error_message(&err)
                        );
                    }
                    (list, on_change)
                })
            };
            #[cfg(not(target_arch = "wasm32"))]
            let _ = (query, narrow);

            move || {
                #[cfg(target_arch = "wasm32")]
                if let Some((list, on_change)) = listener {
                    use wasm_bindgen::JsCast;
                    let _ = list.remove_event_listener_with_callback(
                        "change",
                        on_change.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    *narrow
}
