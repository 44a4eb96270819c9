use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::item::Item;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PopupTab {
    #[default]
    Overview,
    Reviews,
}

impl PopupTab {
    pub const ALL: [Self; 2] = [Self::Overview, Self::Reviews];

    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Overview => "popup.tabs.overview",
            Self::Reviews => "popup.tabs.reviews",
        }
    }

    #[must_use]
    pub const fn available_for(self, item: &Item) -> bool {
        match self {
            Self::Overview => true,
            Self::Reviews => item.reviewable,
        }
    }
}

/// Tabs the popup body should offer for `item`, in display order.
#[must_use]
pub fn available_tabs(item: &Item) -> SmallVec<[PopupTab; 2]> {
    PopupTab::ALL
        .into_iter()
        .filter(|tab| tab.available_for(item))
        .collect()
}
