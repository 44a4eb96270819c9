use std::rc::Rc;

use armory_core::{ExtraInfo, Item, ItemRef, PopupTab, Tier, items_from_json};
use armory_web::components::item_popup::{ItemPopup, Props as ItemPopupProps};
use armory_web::components::nav_bar::NavBar;
use armory_web::pages::inventory::{InventoryPage, InventoryPageProps};
use armory_web::pages::not_found::NotFound;
use armory_web::pages::progress::ProgressPage;
use armory_web::pages::vendor::{VendorPage, VendorPageProps};
use futures::executor::block_on;
use yew::{Callback, LocalServerRenderer, NodeRef};

fn popup_props(item: Item, tab: PopupTab, expanded: bool, narrow: bool) -> ItemPopupProps {
    ItemPopupProps {
        item: ItemRef::new(item),
        anchor: None,
        extra_info: ExtraInfo::default(),
        tab,
        expanded,
        narrow,
        surface_ref: NodeRef::default(),
        on_close: Callback::noop(),
        on_tab_changed: Callback::noop(),
        on_toggle_expanded: Callback::noop(),
    }
}

#[test]
fn inventory_page_renders_a_tile_per_item() {
    let items = items_from_json(
        r#"[{"id":"1","hash":1,"name":"Ace of Spades","type_name":"Hand Cannon","tier":"Exotic"},
            {"id":"2","hash":2,"name":"Fatebringer","type_name":"Hand Cannon","tier":"Legendary"}]"#,
    )
    .expect("inventory json");
    let props = InventoryPageProps {
        items: Some(Rc::new(items)),
    };
    let html = block_on(LocalServerRenderer::<InventoryPage>::with_props(props).render());
    assert!(html.contains("data-item-id=\"1\""));
    assert!(html.contains("data-item-id=\"2\""));
    assert!(html.contains("item is-Exotic"));
}

#[test]
fn inventory_page_reports_empty_inventory() {
    let props = InventoryPageProps {
        items: Some(Rc::new(Vec::new())),
    };
    let html = block_on(LocalServerRenderer::<InventoryPage>::with_props(props).render());
    assert!(html.contains("No items loaded."));
}

#[test]
fn bundled_inventory_renders_by_default() {
    let html = block_on(LocalServerRenderer::<InventoryPage>::new().render());
    assert!(html.contains("item-grid"));
    assert!(html.contains("Gjallarhorn"));
}

#[test]
fn progress_page_lists_milestone_rewards() {
    let html = block_on(LocalServerRenderer::<ProgressPage>::new().render());
    assert_eq!(html.matches("milestone-reward-activity").count(), 3);
    assert!(html.contains("Powerful Gear"));
}

#[test]
fn vendor_and_not_found_pages_render() {
    let html = block_on(
        LocalServerRenderer::<VendorPage>::with_props(VendorPageProps { id: 350 }).render(),
    );
    assert!(html.contains("Vendor 350"));
    let html = block_on(LocalServerRenderer::<NotFound>::new().render());
    assert!(html.contains("Nothing here."));
}

#[test]
fn nav_bar_renders_links_outside_router() {
    let html = block_on(LocalServerRenderer::<NavBar>::new().render());
    assert!(html.contains("Inventory"));
    assert!(html.contains("Progress"));
}

#[test]
fn reviewable_item_popup_offers_reviews_tab() {
    let item = Item {
        name: "Fatebringer".into(),
        tier: Tier::Legendary,
        reviewable: true,
        review_score: Some(4.8),
        review_count: 321,
        ..Item::default()
    };
    let props = popup_props(item, PopupTab::Reviews, false, false);
    let html = block_on(LocalServerRenderer::<ItemPopup>::with_props(props).render());
    assert!(html.contains("move-popup-tabs"));
    assert!(html.contains("321 reviews"));
}

#[test]
fn expanded_popup_shows_item_details() {
    let item = Item {
        name: "A Spark of Hope".into(),
        description: Some("Speak with the Speaker.".into()),
        expiration: Some("in 3 days".into()),
        ..Item::default()
    };
    let props = popup_props(item, PopupTab::Overview, true, true);
    let html = block_on(LocalServerRenderer::<ItemPopup>::with_props(props).render());
    assert!(html.contains("sheet"));
    assert!(html.contains("item-details-body"));
    assert!(html.contains("Expires in 3 days"));
}
