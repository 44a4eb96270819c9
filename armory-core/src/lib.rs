//! Armory Core
//!
//! Platform-agnostic logic behind the Armory inventory front-end: the single
//! item popup controller, its request bus, navigation hooks, settings and the
//! placement algorithm. Nothing here touches the DOM.

pub mod config;
pub mod error;
pub mod item;
pub mod navigation;
pub mod placement;
pub mod popup;
pub mod reward;
pub mod settings;

pub use config::PopupConfig;
pub use error::PopupError;
pub use item::{
    DisplayProperties, FlavorObjective, Item, ItemRef, MasterworkInfo, Objective, Perk,
    QuestReward, Tier, items_from_json,
};
pub use navigation::{HookId, HookRegistration, TransitionHook, TransitionHooks, TransitionService};
pub use placement::{
    Offset, Placement, PlacementOutcome, PlacementPolicy, PositionEngine, PositionHandle,
    PositionOptions, RecordingEngine, Rect, Size, compute_placement,
};
pub use popup::{
    Collectible, ControllerState, ExtraInfo, MountedPopup, PendingClose, PopupBus, PopupController,
    PopupHost, PopupRequest, PopupTab, PopupView, SharedController, Subscription, available_tabs,
};
pub use reward::{RewardCategory, RewardDefinition, RewardEntry, RewardStatus};
pub use settings::{MemorySettings, Setting, Settings, SettingsStore};
