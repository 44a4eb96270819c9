use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::PopupError;
use crate::placement::PlacementPolicy;

/// Popup placement and presentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopupConfig {
    /// CSS selector of the element the popup must stay inside
    #[serde(default)]
    pub boundary_selector: Option<String>,
    #[serde(flatten)]
    pub policy: PlacementPolicy,
    #[serde(default = "default_arrow_selector")]
    pub arrow_selector: String,
    /// Viewports at or below this width use the sheet presentation
    #[serde(default = "default_narrow_breakpoint")]
    pub narrow_breakpoint_px: u32,
}

fn default_arrow_selector() -> String {
    ".arrow".to_string()
}

const fn default_narrow_breakpoint() -> u32 {
    540
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            boundary_selector: None,
            policy: PlacementPolicy::default(),
            arrow_selector: default_arrow_selector(),
            narrow_breakpoint_px: default_narrow_breakpoint(),
        }
    }
}

impl PopupConfig {
    /// Parse a config document.
    ///
    /// # Errors
    ///
    /// Returns [`PopupError::Config`] when the JSON is malformed.
    pub fn from_json(json: &str) -> Result<Self, PopupError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a config document, falling back to defaults on error.
    #[must_use]
    pub fn from_json_or_default(json: &str) -> Self {
        Self::from_json(json).unwrap_or_else(|err| {
            warn!("Falling back to default popup config: {err}");
            Self::default()
        })
    }

    #[must_use]
    pub fn with_boundary_selector(mut self, selector: impl Into<String>) -> Self {
        self.boundary_selector = Some(selector.into());
        self
    }
}
