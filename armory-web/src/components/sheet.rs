//! Bottom sheet used in place of the floating popup on narrow viewports.

use crate::i18n::t;
use yew::prelude::*;

/// Downward drag distance that dismisses the sheet.
pub const SWIPE_DISMISS_PX: i32 = 80;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub header: Html,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub sheet_class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[must_use]
pub const fn is_dismiss_swipe(start_y: i32, end_y: i32) -> bool {
    end_y - start_y >= SWIPE_DISMISS_PX
}

fn first_touch_y(touches: &web_sys::TouchList) -> Option<i32> {
    touches.get(0).map(|touch| touch.client_y())
}

#[function_component(Sheet)]
pub fn sheet(props: &Props) -> Html {
    let drag_start = use_mut_ref(|| None::<i32>);

    let on_touch_start = {
        let drag_start = drag_start.clone();
        Callback::from(move |e: TouchEvent| {
            *drag_start.borrow_mut() = first_touch_y(&e.touches());
        })
    };
    let on_touch_end = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: TouchEvent| {
            let start = drag_start.borrow_mut().take();
            if let (Some(start), Some(end)) = (start, first_touch_y(&e.changed_touches()))
                && is_dismiss_swipe(start, end)
            {
                on_close.emit(());
            }
        })
    };
    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class={classes!("sheet", props.sheet_class.clone())} role="dialog" aria-modal="true">
            <button
                type="button"
                class="sheet-close"
                aria-label={t("popup.close")}
                onclick={on_close_click}
            >
                {"×"}
            </button>
            <div class="sheet-header" ontouchstart={on_touch_start} ontouchend={on_touch_end}>
                { props.header.clone() }
            </div>
            <div class="sheet-contents">
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn only_long_downward_drags_dismiss() {
        assert!(is_dismiss_swipe(100, 180));
        assert!(!is_dismiss_swipe(100, 179));
        assert!(!is_dismiss_swipe(300, 100));
    }

    #[test]
    fn renders_header_and_close_button() {
        let props = Props {
            header: html! { <h1>{"Gjallarhorn"}</h1> },
            on_close: Callback::noop(),
            sheet_class: classes!("is-Exotic"),
            children: Children::default(),
        };
        let html = block_on(LocalServerRenderer::<Sheet>::with_props(props).render());
        assert!(html.contains("sheet is-Exotic"));
        assert!(html.contains("Gjallarhorn"));
        assert!(html.contains("aria-label=\"Close\""));
    }
}
