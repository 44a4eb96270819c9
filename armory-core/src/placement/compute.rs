use smallvec::SmallVec;

use super::{Offset, Placement, PlacementPolicy, Rect, Size};

/// Final coordinates for a popup surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementOutcome {
    pub placement: Placement,
    pub x: f64,
    pub y: f64,
    /// Arrow offset along the anchor edge, measured from the popup's top
    /// (left/right placements) or left (top/bottom placements) edge.
    pub arrow: f64,
}

/// Place `popup` next to `anchor` inside `boundary`.
///
/// The preferred placement is kept when the popup fits on its main axis;
/// otherwise the flip order is walked and the first placement that fits is
/// used. The result is then clamped to the boundary edges in overflow
/// priority order, and the arrow is aimed at the anchor center.
#[must_use]
pub fn compute_placement(
    anchor: Rect,
    popup: Size,
    boundary: Rect,
    policy: &PlacementPolicy,
    arrow_len: f64,
) -> PlacementOutcome {
    let placement = choose_placement(anchor, popup, boundary, policy);
    let (mut x, mut y) = base_position(anchor, popup, placement, policy.offset);

    for edge in &policy.overflow_priority {
        match edge {
            Placement::Bottom if y + popup.height > boundary.bottom() => {
                y = boundary.bottom() - popup.height;
            }
            Placement::Top if y < boundary.y => y = boundary.y,
            Placement::Right if x + popup.width > boundary.right() => {
                x = boundary.right() - popup.width;
            }
            Placement::Left if x < boundary.x => x = boundary.x,
            _ => {}
        }
    }

    let arrow = arrow_offset(anchor, popup, placement, x, y, arrow_len);
    PlacementOutcome {
        placement,
        x,
        y,
        arrow,
    }
}

fn choose_placement(
    anchor: Rect,
    popup: Size,
    boundary: Rect,
    policy: &PlacementPolicy,
) -> Placement {
    let mut candidates: SmallVec<[Placement; 5]> = SmallVec::new();
    candidates.push(policy.placement);
    for side in &policy.flip_order {
        if !candidates.contains(side) {
            candidates.push(*side);
        }
    }

    candidates
        .into_iter()
        .find(|candidate| {
            let (x, y) = base_position(anchor, popup, *candidate, policy.offset);
            fits_main_axis(x, y, popup, boundary, *candidate)
        })
        .unwrap_or(policy.placement)
}

fn base_position(anchor: Rect, popup: Size, placement: Placement, offset: Offset) -> (f64, f64) {
    let centered_x = anchor.center_x() - popup.width / 2.0 + offset.skid;
    let centered_y = anchor.center_y() - popup.height / 2.0 + offset.skid;
    match placement {
        Placement::Right => (anchor.right() + offset.distance, centered_y),
        Placement::Left => (anchor.x - popup.width - offset.distance, centered_y),
        Placement::Bottom => (centered_x, anchor.bottom() + offset.distance),
        Placement::Top => (centered_x, anchor.y - popup.height - offset.distance),
    }
}

fn fits_main_axis(x: f64, y: f64, popup: Size, boundary: Rect, placement: Placement) -> bool {
    match placement {
        Placement::Right => x + popup.width <= boundary.right(),
        Placement::Left => x >= boundary.x,
        Placement::Bottom => y + popup.height <= boundary.bottom(),
        Placement::Top => y >= boundary.y,
    }
}

fn arrow_offset(anchor: Rect, popup: Size, placement: Placement, x: f64, y: f64, len: f64) -> f64 {
    let (target, start, span) = if placement.is_vertical() {
        (anchor.center_x(), x, popup.width)
    } else {
        (anchor.center_y(), y, popup.height)
    };
    let max = (span - len).max(0.0);
    (target - start - len / 2.0).clamp(0.0, max)
}
