//! Pointer <-> score coordinate mapping for the quadrant surface.
//!
//! # Responsibility
//! - Map a pointer inside the quadrant's bounding rect to impact/effort.
//! - Map impact/effort back to a marker placement for rendering.
//!
//! # Invariants
//! - Effort grows left to right; impact grows bottom to top.
//! - Forward mapping never yields scores outside `0..=100`.
//! - Degenerate frames (zero, negative or non-finite size) map to `None`.
//!
//! Round trip: `map_pointer(position_to_point(p, rect), rect) == Some(p)`
//! for every non-degenerate `rect`, up to ±1 of rounding.

use crate::model::idea::{Position, SCORE_MAX};

/// Percent offset applied to both axes so a marker is centered on its point.
pub const MARKER_ANCHOR_PERCENT: f64 = -50.0;

const PERCENT: f64 = SCORE_MAX as f64;

/// Pointer position in the same coordinate space as `Rect`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Bounding rect of the quadrant container, as measured at event time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Whether this rect can be used as a divisor.
    pub fn is_measurable(&self) -> bool {
        self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
            && self.left.is_finite()
            && self.top.is_finite()
    }
}

/// Where a marker is drawn, in percent of the container size.
///
/// `translate_*_percent` are relative to the marker's own size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerPlacement {
    pub left_percent: f64,
    pub top_percent: f64,
    pub translate_x_percent: f64,
    pub translate_y_percent: f64,
}

/// Maps a pointer position to impact/effort scores.
///
/// Returns `None` for degenerate frames; callers skip that update.
pub fn map_pointer(point: Point, rect: Rect) -> Option<Position> {
    if !rect.is_measurable() || !point.x.is_finite() || !point.y.is_finite() {
        return None;
    }

    let x_norm = (point.x - rect.left) / rect.width;
    let y_norm = (point.y - rect.top) / rect.height;

    Some(Position {
        impact: percent_to_score((1.0 - y_norm) * PERCENT),
        effort: percent_to_score(x_norm * PERCENT),
    })
}

/// Marker placement for a position, independent of container size.
pub fn marker_placement(position: Position) -> MarkerPlacement {
    MarkerPlacement {
        left_percent: f64::from(position.effort),
        top_percent: PERCENT - f64::from(position.impact),
        translate_x_percent: MARKER_ANCHOR_PERCENT,
        translate_y_percent: MARKER_ANCHOR_PERCENT,
    }
}

/// Concrete point for a position inside `rect` (the marker's anchor point).
pub fn position_to_point(position: Position, rect: Rect) -> Point {
    let placement = marker_placement(position);
    Point {
        x: rect.left + rect.width * placement.left_percent / PERCENT,
        y: rect.top + rect.height * placement.top_percent / PERCENT,
    }
}

fn percent_to_score(value: f64) -> u8 {
    // `value` is finite here; the clamp keeps the cast lossless.
    value.round().clamp(0.0, PERCENT) as u8
}

#[cfg(test)]
mod tests {
    use super::{map_pointer, marker_placement, Point, Rect};
    use crate::model::idea::Position;

    #[test]
    fn center_maps_to_midpoint() {
        let rect = Rect::new(10.0, 20.0, 400.0, 300.0);
        let position = map_pointer(Point::new(210.0, 170.0), rect).unwrap();
        assert_eq!(
            position,
            Position {
                impact: 50,
                effort: 50
            }
        );
    }

    #[test]
    fn degenerate_frames_are_skipped() {
        let point = Point::new(5.0, 5.0);
        assert_eq!(map_pointer(point, Rect::new(0.0, 0.0, 0.0, 100.0)), None);
        assert_eq!(map_pointer(point, Rect::new(0.0, 0.0, 100.0, 0.0)), None);
        assert_eq!(map_pointer(point, Rect::new(0.0, 0.0, -1.0, 100.0)), None);
        assert_eq!(
            map_pointer(point, Rect::new(0.0, 0.0, f64::NAN, 100.0)),
            None
        );
        assert_eq!(
            map_pointer(Point::new(f64::INFINITY, 0.0), Rect::new(0.0, 0.0, 1.0, 1.0)),
            None
        );
    }

    #[test]
    fn placement_inverts_vertical_axis() {
        let placement = marker_placement(Position {
            impact: 80,
            effort: 30,
        });
        assert_eq!(placement.left_percent, 30.0);
        assert_eq!(placement.top_percent, 20.0);
        assert_eq!(placement.translate_x_percent, -50.0);
        assert_eq!(placement.translate_y_percent, -50.0);
    }
}
