use std::collections::BTreeMap;

use armory_core::{ExtraInfo, Item, Objective, Perk, QuestReward};

use crate::i18n;
use crate::paths::item_image;
use crate::router::Route;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MasterworkLine {
    pub icon: Option<String>,
    pub name: String,
    pub description: String,
    pub progress: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObjectiveLine {
    pub hash: u32,
    pub description: String,
    pub progress: String,
    pub complete: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlavorLine {
    pub icon: Option<String>,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RewardLine {
    pub item_hash: u32,
    pub icon: Option<String>,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollectibleLine {
    pub source: String,
    pub owned: bool,
    pub acquired: bool,
}

/// Everything the expanded details section shows, resolved to display text.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ItemDetailsViewModel {
    pub description: Option<String>,
    pub expiration: Option<String>,
    pub emblem_banner: Option<String>,
    pub masterwork: Option<MasterworkLine>,
    pub classified: bool,
    pub missing_sockets: bool,
    pub perks: Vec<Perk>,
    pub objectives: Vec<ObjectiveLine>,
    pub flavor: Option<FlavorLine>,
    pub preview_vendor: Option<(Route, String)>,
    pub rewards: Vec<RewardLine>,
    pub collectible: Option<CollectibleLine>,
    /// "Comparing with ..." notice when a different item is being compared
    pub compare_with: Option<String>,
}

pub fn build_details_view_model(item: &Item, extra_info: &ExtraInfo) -> ItemDetailsViewModel {
    ItemDetailsViewModel {
        description: item.description.clone().filter(|d| !d.is_empty()),
        expiration: item.expiration.as_deref().map(|time| {
            let mut args = BTreeMap::new();
            args.insert("time", time);
            i18n::tr("popup.expires", Some(&args))
        }),
        emblem_banner: item
            .is_emblem()
            .then(|| item.secondary_icon.as_deref().map(item_image))
            .flatten(),
        masterwork: masterwork_line(item),
        classified: item.classified,
        missing_sockets: item.missing_sockets,
        perks: item.perks.clone(),
        objectives: item.objectives.iter().map(objective_line).collect(),
        flavor: item.flavor_objective.as_ref().map(|flavor| FlavorLine {
            icon: flavor.icon.as_deref().map(item_image),
            text: format!("{} // {}", flavor.progress, flavor.description),
        }),
        preview_vendor: item.preview_vendor.filter(|id| *id != 0).map(|id| {
            let mut args = BTreeMap::new();
            args.insert("type", item.type_name.as_str());
            (Route::Vendor { id }, i18n::tr("popup.preview_vendor", Some(&args)))
        }),
        rewards: item.quest_rewards.iter().map(reward_line).collect(),
        collectible: extra_info.collectible.as_ref().map(|c| CollectibleLine {
            source: c.source_string.clone(),
            owned: extra_info.owned,
            acquired: extra_info.acquired,
        }),
        compare_with: extra_info
            .compare_item
            .as_ref()
            .filter(|other| other.id != item.id)
            .map(|other| {
                let mut args = BTreeMap::new();
                args.insert("name", other.name.as_str());
                i18n::tr("popup.compare", Some(&args))
            }),
    }
}

/// Shown only for items with a named masterwork that is either complete or
/// has progress to report.
fn masterwork_line(item: &Item) -> Option<MasterworkLine> {
    let info = item.masterwork_info.as_ref()?;
    let name = info.type_name.clone()?;
    let progress = info.progress.unwrap_or(0);
    if !item.masterwork && progress == 0 {
        return None;
    }
    Some(MasterworkLine {
        icon: info.type_icon.as_deref().map(item_image),
        name,
        description: info.type_desc.clone().unwrap_or_default(),
        progress: i18n::fmt_number(progress.into()),
    })
}

fn objective_line(objective: &Objective) -> ObjectiveLine {
    ObjectiveLine {
        hash: objective.hash,
        description: objective.description.clone(),
        progress: format!(
            "{}/{}",
            i18n::fmt_number(objective.progress.into()),
            i18n::fmt_number(objective.completion_value.into())
        ),
        complete: objective.complete(),
    }
}

fn reward_line(reward: &QuestReward) -> RewardLine {
    let label = if reward.quantity > 1 {
        format!("{} x{}", reward.name, i18n::fmt_number(reward.quantity.into()))
    } else {
        reward.name.clone()
    };
    RewardLine {
        item_hash: reward.item_hash,
        icon: reward.icon.as_deref().map(item_image),
        label,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use armory_core::{Collectible, FlavorObjective, MasterworkInfo};

    fn masterworked(masterwork: bool, progress: Option<u32>) -> Item {
        Item {
            masterwork,
            masterwork_info: Some(MasterworkInfo {
                type_name: Some("Kills".into()),
                type_icon: None,
                type_desc: Some("Enemies defeated".into()),
                progress,
            }),
            ..Item::default()
        }
    }

    #[test]
    fn masterwork_needs_completion_or_progress() {
        let extra = ExtraInfo::default();
        assert!(build_details_view_model(&masterworked(false, None), &extra).masterwork.is_none());
        let untouched = masterworked(false, Some(0));
        assert!(build_details_view_model(&untouched, &extra).masterwork.is_none());

        let line = build_details_view_model(&masterworked(false, Some(12840)), &extra)
            .masterwork
            .expect("progress shows masterwork");
        assert_eq!(line.progress, "12,840");

        let line = build_details_view_model(&masterworked(true, None), &extra)
            .masterwork
            .expect("masterworked item shows masterwork");
        assert_eq!(line.progress, "0");
    }

    #[test]
    fn emblem_banner_only_for_emblems() {
        let mut item = Item {
            kind: "Emblems".into(),
            secondary_icon: Some("/banner.jpg".into()),
            ..Item::default()
        };
        let extra = ExtraInfo::default();
        assert_eq!(
            build_details_view_model(&item, &extra).emblem_banner.as_deref(),
            Some("https://www.bungie.net/banner.jpg")
        );
        item.kind = "Weapon".into();
        assert!(build_details_view_model(&item, &extra).emblem_banner.is_none());
    }

    #[test]
    fn preview_vendor_zero_is_ignored() {
        let mut item = Item {
            type_name: "Engram".into(),
            preview_vendor: Some(0),
            ..Item::default()
        };
        let extra = ExtraInfo::default();
        assert!(build_details_view_model(&item, &extra).preview_vendor.is_none());
        item.preview_vendor = Some(42);
        let (route, label) = build_details_view_model(&item, &extra)
            .preview_vendor
            .expect("vendor link");
        assert_eq!(route, Route::Vendor { id: 42 });
        assert_eq!(label, "Preview Engram contents");
    }

    #[test]
    fn collectible_carries_ownership_flags() {
        let extra = ExtraInfo {
            collectible: Some(Collectible {
                source_string: "Source: Raid".into(),
            }),
            owned: true,
            acquired: false,
            compare_item: None,
        };
        let vm = build_details_view_model(&Item::default(), &extra);
        let line = vm.collectible.expect("collectible");
        assert_eq!(line.source, "Source: Raid");
        assert!(line.owned);
        assert!(!line.acquired);
    }

    #[test]
    fn objectives_and_flavor_format_progress() {
        let item = Item {
            objectives: vec![Objective {
                hash: 1,
                description: "Kills".into(),
                progress: 1500,
                completion_value: 2000,
            }],
            flavor_objective: Some(FlavorObjective {
                description: "Sectors".into(),
                icon: None,
                progress: 12,
            }),
            quest_rewards: vec![QuestReward {
                item_hash: 9,
                name: "Glimmer".into(),
                icon: None,
                quantity: 5000,
            }],
            ..Item::default()
        };
        let vm = build_details_view_model(&item, &ExtraInfo::default());
        assert_eq!(vm.objectives[0].progress, "1,500/2,000");
        assert!(!vm.objectives[0].complete);
        assert_eq!(vm.flavor.map(|f| f.text).as_deref(), Some("12 // Sectors"));
        assert_eq!(vm.rewards[0].label, "Glimmer x5,000");
    }
}
