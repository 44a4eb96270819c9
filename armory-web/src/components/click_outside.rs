use web_sys::Element;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub on_click_outside: Callback<()>,
    /// Presses inside this element are not treated as outside clicks.
    #[prop_or_default]
    pub ignore: Option<Element>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Wraps its children and reports presses that land anywhere else.
#[function_component(ClickOutside)]
pub fn click_outside(props: &Props) -> Html {
    let container = use_node_ref();

    {
        let container = container.clone();
        use_effect_with(
            (props.on_click_outside.clone(), props.ignore.clone()),
            move |(on_click_outside, ignore)| {
                #[cfg(target_arch = "wasm32")]
                let listener = {
                    use wasm_bindgen::JsCast;
                    use wasm_bindgen::closure::Closure;

                    let on_click_outside = on_click_outside.clone();
                    let ignore = ignore.clone();
                    let handler = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(
                        move |e: web_sys::MouseEvent| {
                            let Some(target) =
                                e.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok())
                            else {
                                return;
                            };
                            let inside = |el: Option<&Element>| {
                                el.is_some_and(|el| el.contains(Some(&target)))
                            };
                            if !inside(container.cast::<Element>().as_ref())
                                && !inside(ignore.as_ref())
                            {
                                on_click_outside.emit(());
                            }
                        },
                    );
                    crate::dom::document().and_then(|doc| {
                        doc.add_event_listener_with_callback(
                            "mousedown",
                            handler.as_ref().unchecked_ref(),
                        )
                        .ok()?;
                        Some((doc, handler))
                    })
                };
                #[cfg(not(target_arch = "wasm32"))]
                let _ = (container, on_click_outside, ignore);

                move || {
                    #[cfg(target_arch = "wasm32")]
                    if let Some((doc, handler)) = listener {
                        use wasm_bindgen::JsCast;
                        let _ = doc.remove_event_listener_with_callback(
                            "mousedown",
                            handler.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
        );
    }

    html! {
        <div ref={container} class={props.class.clone()}>
            { for props.children.iter() }
        </div>
    }
}
