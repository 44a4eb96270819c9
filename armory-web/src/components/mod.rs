pub mod click_outside;
pub mod hotkeys;
pub mod item_popup;
pub mod item_tile;
pub mod nav_bar;
pub mod progress;
pub mod sheet;
