//! Item records supplied by the inventory loader.
//!
//! Items arrive fully computed; the popup only reads them.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tier {
    #[default]
    Basic,
    Common,
    Rare,
    Legendary,
    Exotic,
}

impl Tier {
    /// Class name used by the popup frame and arrow (`is-Legendary`).
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Basic => "is-Basic",
            Self::Common => "is-Common",
            Self::Rare => "is-Rare",
            Self::Legendary => "is-Legendary",
            Self::Exotic => "is-Exotic",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DisplayProperties {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Perk {
    pub hash: u32,
    pub display: DisplayProperties,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Objective {
    pub hash: u32,
    pub description: String,
    #[serde(default)]
    pub progress: u32,
    pub completion_value: u32,
}

impl Objective {
    #[must_use]
    pub const fn complete(&self) -> bool {
        self.progress >= self.completion_value
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlavorObjective {
    pub description: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub progress: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MasterworkInfo {
    #[serde(default)]
    pub type_name: Option<String>,
    #[serde(default)]
    pub type_icon: Option<String>,
    #[serde(default)]
    pub type_desc: Option<String>,
    #[serde(default)]
    pub progress: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestReward {
    pub item_hash: u32,
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

const fn default_quantity() -> u32 {
    1
}

/// A single inventory item as produced by the inventory loader.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub hash: u32,
    pub name: String,
    pub type_name: String,
    /// Bucket kind, e.g. `Emblems`, `Weapon`, `Quests`.
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub tier: Tier,
    /// Whether community reviews exist for this item
    #[serde(default)]
    pub reviewable: bool,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub secondary_icon: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub classified: bool,
    #[serde(default)]
    pub missing_sockets: bool,
    #[serde(default)]
    pub masterwork: bool,
    #[serde(default)]
    pub masterwork_info: Option<MasterworkInfo>,
    #[serde(default)]
    pub perks: Vec<Perk>,
    #[serde(default)]
    pub objectives: Vec<Objective>,
    #[serde(default)]
    pub flavor_objective: Option<FlavorObjective>,
    #[serde(default)]
    pub preview_vendor: Option<u32>,
    #[serde(default)]
    pub quest_rewards: Vec<QuestReward>,
    /// Human readable expiration notice, already formatted by the loader.
    #[serde(default)]
    pub expiration: Option<String>,
    #[serde(default)]
    pub review_score: Option<f32>,
    #[serde(default)]
    pub review_count: u32,
}

impl Item {
    #[must_use]
    pub fn is_emblem(&self) -> bool {
        self.kind == "Emblems" || self.kind == "Emblem"
    }

    #[must_use]
    pub fn into_ref(self) -> ItemRef {
        ItemRef::new(self)
    }
}

/// Shared handle to an [`Item`].
///
/// Two refs are equal only when they point at the same allocation, which is
/// how "the same item was clicked again" is detected.
#[derive(Clone)]
pub struct ItemRef(Rc<Item>);

impl ItemRef {
    #[must_use]
    pub fn new(item: Item) -> Self {
        Self(Rc::new(item))
    }

    #[must_use]
    pub fn same(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for ItemRef {
    fn eq(&self, other: &Self) -> bool {
        self.same(other)
    }
}

impl Deref for ItemRef {
    type Target = Item;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Debug for ItemRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ItemRef").field(&self.0.id).finish()
    }
}

impl From<Item> for ItemRef {
    fn from(item: Item) -> Self {
        Self::new(item)
    }
}

/// Parse an inventory listing from JSON.
///
/// # Errors
///
/// Returns an error if the JSON does not describe a list of items.
pub fn items_from_json(json: &str) -> Result<Vec<ItemRef>, serde_json::Error> {
    let items: Vec<Item> = serde_json::from_str(json)?;
    Ok(items.into_iter().map(ItemRef::new).collect())
}
