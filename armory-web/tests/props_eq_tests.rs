use std::rc::Rc;

use armory_core::{ExtraInfo, Item, ItemRef, RewardCategory, RewardEntry};
use armory_web::components::item_tile::Props as ItemTileProps;
use armory_web::components::progress::reward_activity::Props as RewardActivityProps;

#[test]
fn item_props_use_pointer_equality() {
    let item = ItemRef::new(Item::default());
    let twin = ItemRef::new(Item::default());

    let a = ItemTileProps {
        item: item.clone(),
        extra_info: ExtraInfo::default(),
    };
    let b = ItemTileProps {
        item,
        extra_info: ExtraInfo::default(),
    };
    let c = ItemTileProps {
        item: twin,
        extra_info: ExtraInfo::default(),
    };
    assert!(a == b);
    assert!(a != c);
}

#[test]
fn reward_props_compare_category_by_pointer() {
    let entry = RewardEntry {
        reward_entry_hash: 1,
        earned: true,
        redeemed: false,
    };
    let category = Rc::new(RewardCategory::default());
    let a = RewardActivityProps {
        entry,
        category: Rc::clone(&category),
    };
    let b = RewardActivityProps {
        entry,
        category: Rc::new(RewardCategory::default()),
    };
    assert!(a == a.clone());
    assert!(a != b);
}
