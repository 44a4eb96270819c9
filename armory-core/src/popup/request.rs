use serde::{Deserialize, Serialize};

use crate::item::ItemRef;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Collectible {
    pub source_string: String,
}

/// Display data that rides along with a popup request.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExtraInfo {
    /// Item to compare stats against
    pub compare_item: Option<ItemRef>,
    pub collectible: Option<Collectible>,
    pub owned: bool,
    pub acquired: bool,
}

/// Ask the popup to show `item` anchored to `anchor`, or close it when
/// `item` is `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct PopupRequest<E> {
    pub item: Option<ItemRef>,
    pub anchor: Option<E>,
    pub extra_info: ExtraInfo,
}

impl<E> PopupRequest<E> {
    #[must_use]
    pub fn show(item: ItemRef, anchor: E) -> Self {
        Self {
            item: Some(item),
            anchor: Some(anchor),
            extra_info: ExtraInfo::default(),
        }
    }

    #[must_use]
    pub fn hide() -> Self {
        Self {
            item: None,
            anchor: None,
            extra_info: ExtraInfo::default(),
        }
    }

    /// Requests without both an item and an anchor close the popup.
    #[must_use]
    pub const fn is_hide(&self) -> bool {
        self.item.is_none() || self.anchor.is_none()
    }

    #[must_use]
    pub fn with_extra_info(mut self, extra_info: ExtraInfo) -> Self {
        self.extra_info = extra_info;
        self
    }
}
