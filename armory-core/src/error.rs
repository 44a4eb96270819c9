use thiserror::Error;

#[derive(Debug, Error)]
pub enum PopupError {
    #[error("popup requests already have an active subscriber")]
    AlreadySubscribed,
    #[error("popup controller is borrowed elsewhere")]
    ControllerBusy,
    #[error("invalid popup configuration: {0}")]
    Config(#[from] serde_json::Error),
}
