use std::rc::Rc;

use armory_core::{PopupBus, PopupConfig, RewardCategory, RewardEntry, TransitionService};
use armory_core::{ItemRef, items_from_json};
use serde::Deserialize;
use web_sys::Element;
use yew::prelude::*;

use crate::settings::LocalSettings;

/// App-wide handles shared through context.
#[derive(Clone)]
pub struct AppServices {
    pub bus: PopupBus<Element>,
    pub transitions: Rc<TransitionService>,
    pub settings: Rc<LocalSettings>,
    pub config: Rc<PopupConfig>,
}

impl PartialEq for AppServices {
    fn eq(&self, other: &Self) -> bool {
        self.bus == other.bus
            && Rc::ptr_eq(&self.transitions, &other.transitions)
            && Rc::ptr_eq(&self.settings, &other.settings)
            && Rc::ptr_eq(&self.config, &other.config)
    }
}

impl AppServices {
    #[must_use]
    pub fn new(config: PopupConfig, settings: LocalSettings) -> Self {
        Self {
            bus: PopupBus::new(),
            transitions: Rc::new(TransitionService::new()),
            settings: Rc::new(settings),
            config: Rc::new(config),
        }
    }

    /// Services backed by the bundled popup config and saved settings.
    #[must_use]
    pub fn load() -> Self {
        Self::new(load_popup_config(), LocalSettings::load())
    }
}

#[must_use]
pub fn load_popup_config() -> PopupConfig {
    PopupConfig::from_json_or_default(include_str!("../../static/assets/data/popup.json"))
}

/// Items bundled with the app. A malformed listing yields no items.
#[must_use]
pub fn load_inventory() -> Vec<ItemRef> {
    items_from_json(include_str!("../../static/assets/data/inventory.json")).unwrap_or_else(|err| {
        log::error!("Failed to parse inventory: {err}");
        Vec::new()
    })
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MilestoneData {
    #[serde(default)]
    pub category: RewardCategory,
    #[serde(default)]
    pub entries: Vec<RewardEntry>,
}

#[must_use]
pub fn load_milestones() -> MilestoneData {
    serde_json::from_str(include_str!("../../static/assets/data/milestones.json")).unwrap_or_else(
        |err| {
            log::error!("Failed to parse milestones: {err}");
            MilestoneData::default()
        },
    )
}

#[hook]
pub fn use_app_services() -> Option<AppServices> {
    use_context::<AppServices>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_data_parses() {
        let config = load_popup_config();
        assert_eq!(config.boundary_selector.as_deref(), Some("#content"));
        assert_eq!(config.narrow_breakpoint_px, 540);
        assert!(!load_inventory().is_empty());
        let milestones = load_milestones();
        assert_eq!(milestones.entries.len(), 3);
        assert!(milestones.category.definition(&milestones.entries[0]).is_some());
    }

    #[test]
    fn services_compare_by_identity() {
        let a = AppServices::new(PopupConfig::default(), LocalSettings::default());
        let b = AppServices::new(PopupConfig::default(), LocalSettings::default());
        assert!(a == a.clone());
        assert!(a != b);
    }
}
