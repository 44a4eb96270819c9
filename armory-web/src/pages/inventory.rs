use std::rc::Rc;

use armory_core::ItemRef;
use yew::prelude::*;

use crate::app::services::load_inventory;
use crate::components::item_tile::ItemTile;
use crate::i18n::t;

#[derive(Properties, PartialEq, Default)]
pub struct InventoryPageProps {
    /// Items to show; the bundled inventory when absent
    #[prop_or_default]
    pub items: Option<Rc<Vec<ItemRef>>>,
}

#[function_component(InventoryPage)]
pub fn inventory_page(props: &InventoryPageProps) -> Html {
    let bundled = use_memo((), |_| load_inventory());
    let items: &[ItemRef] = props.items.as_deref().map_or(bundled.as_slice(), Vec::as_slice);

    html! {
        <section class="inventory">
            <h2>{ t("inventory.heading") }</h2>
            if items.is_empty() {
                <p class="empty">{ t("inventory.empty") }</p>
            } else {
                <div class="item-grid">
                    { for items.iter().map(|item| html! {
                        <ItemTile key={item.id.clone()} item={item.clone()} />
                    }) }
                </div>
            }
        </section>
    }
}
