pub mod inventory;
pub mod not_found;
pub mod progress;
pub mod vendor;
