//! The application-wide item popup.

pub mod bus;
pub mod controller;
pub mod host;
pub mod request;
pub mod tab;

pub use bus::{PopupBus, Subscription};
pub use controller::{ControllerState, PendingClose, PopupController, PopupView};
pub use host::{MountedPopup, PopupHost, SharedController};
pub use request::{Collectible, ExtraInfo, PopupRequest};
pub use tab::{PopupTab, available_tabs};
