use armory_core::{ExtraInfo, ItemRef};
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use crate::app::use_app_services;
use crate::paths::item_image;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub item: ItemRef,
    #[prop_or_default]
    pub extra_info: ExtraInfo,
}

/// Inventory tile. Clicking asks the popup to show (or toggle) this item,
/// anchored to the tile.
#[function_component(ItemTile)]
pub fn item_tile(props: &Props) -> Html {
    let services = use_app_services();
    let item = &props.item;

    let onclick = {
        let item = item.clone();
        let extra_info = props.extra_info.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(services) = services.as_ref() else {
                return;
            };
            let Some(anchor) = e
                .current_target()
                .and_then(|target| target.dyn_into::<Element>().ok())
            else {
                return;
            };
            services
                .bus
                .show_item(item.clone(), anchor, extra_info.clone());
        })
    };

    html! {
        <button
            type="button"
            class={classes!("item", item.tier.css_class(), item.masterwork.then_some("masterwork"))}
            title={format!("{}\n{}", item.name, item.type_name)}
            data-item-id={item.id.clone()}
            {onclick}
        >
            if let Some(icon) = item.icon.as_deref() {
                <img class="item-img" src={item_image(icon)} alt={item.name.clone()} />
            } else {
                <span class="item-name">{ item.name.clone() }</span>
            }
        </button>
    }
}
