pub mod reward_activity;

pub use reward_activity::RewardActivity;
