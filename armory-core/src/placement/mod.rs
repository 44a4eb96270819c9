//! Popup placement: geometry types, placement policy and the engine seam.
//!
//! [`compute_placement`] is the pure layout algorithm. Platforms measure
//! elements, call it, and apply the result through their own
//! [`PositionEngine`] implementation.

mod compute;
pub mod recording;

pub use compute::{PlacementOutcome, compute_placement};
pub use recording::{EngineLog, PlacementRecord, RecordingEngine, RecordingHandle};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    Top,
    Bottom,
    Left,
    Right,
}

impl Placement {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    /// Top and bottom placements stack the popup vertically against the anchor.
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    #[must_use]
    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Pixel offset applied after the base placement is chosen.
///
/// `skid` slides the popup along the anchor edge; `distance` pushes it away
/// from the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Offset {
    #[serde(default)]
    pub skid: f64,
    #[serde(default)]
    pub distance: f64,
}

impl Default for Offset {
    fn default() -> Self {
        Self {
            skid: 0.0,
            distance: 5.0,
        }
    }
}

/// Geometry rules for placing the popup next to its anchor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementPolicy {
    #[serde(default = "default_placement")]
    pub placement: Placement,
    /// Placements tried in order when the preferred one does not fit
    #[serde(default = "default_side_order")]
    pub flip_order: Vec<Placement>,
    /// Boundary edges clamped in order; later edges win
    #[serde(default = "default_side_order")]
    pub overflow_priority: Vec<Placement>,
    #[serde(default)]
    pub offset: Offset,
}

const fn default_placement() -> Placement {
    Placement::Right
}

fn default_side_order() -> Vec<Placement> {
    vec![
        Placement::Bottom,
        Placement::Top,
        Placement::Right,
        Placement::Left,
    ]
}

impl Default for PlacementPolicy {
    fn default() -> Self {
        Self {
            placement: default_placement(),
            flip_order: default_side_order(),
            overflow_priority: default_side_order(),
            offset: Offset::default(),
        }
    }
}

/// Options handed to a [`PositionEngine`] for one placement.
///
/// Built fresh for every `place` call; engines never see a shared,
/// mutated options object.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionOptions<E> {
    pub policy: PlacementPolicy,
    /// Element the popup must stay inside for both flip and overflow checks
    pub boundary: Option<E>,
    pub arrow_selector: String,
    /// Whether the engine should follow scroll/resize on its own
    pub events_enabled: bool,
}

impl<E> PositionOptions<E> {
    #[must_use]
    pub fn new(policy: PlacementPolicy, arrow_selector: impl Into<String>) -> Self {
        Self {
            policy,
            boundary: None,
            arrow_selector: arrow_selector.into(),
            events_enabled: false,
        }
    }

    #[must_use]
    pub fn with_boundary(mut self, boundary: Option<E>) -> Self {
        self.boundary = boundary;
        self
    }
}

/// Creates live placements binding a popup surface to an anchor.
pub trait PositionEngine {
    type Element: Clone;
    type Handle: PositionHandle;

    /// Bind `surface` to `anchor` and compute an initial placement.
    fn place(
        &mut self,
        anchor: &Self::Element,
        surface: &Self::Element,
        options: PositionOptions<Self::Element>,
    ) -> Self::Handle;

    /// Look up the boundary element for a selector, if it is mounted.
    fn resolve_boundary(&self, selector: &str) -> Option<Self::Element>;
}

/// A live placement owned by the popup controller.
pub trait PositionHandle {
    /// Ask for a fresh placement. Engines may defer the work to the next frame.
    fn recompute(&mut self);

    /// Tear the placement down and cancel any pending recompute.
    fn destroy(self);
}
