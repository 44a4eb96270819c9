use armory_core::ItemRef;
use yew::prelude::*;

use crate::i18n::t;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub item: ItemRef,
    pub expanded: bool,
    pub on_toggle_expanded: Callback<()>,
}

#[function_component(ItemPopupHeader)]
pub fn item_popup_header(props: &Props) -> Html {
    let item = &props.item;
    let on_toggle = {
        let cb = props.on_toggle_expanded.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let toggle_label = if props.expanded {
        t("popup.details.hide")
    } else {
        t("popup.details.show")
    };

    html! {
        <div class={classes!("item-popup-header", item.tier.css_class())}>
            <div class="item-title-container">
                <h1 class="item-title">{ item.name.clone() }</h1>
                <button
                    type="button"
                    class="info"
                    title={toggle_label.clone()}
                    aria-label={toggle_label}
                    aria-expanded={props.expanded.to_string()}
                    onclick={on_toggle}
                >
                    { if props.expanded { "▲" } else { "▼" } }
                </button>
            </div>
            <div class="item-subtitle">
                <span class="item-type">{ item.type_name.clone() }</span>
            </div>
        </div>
    }
}
