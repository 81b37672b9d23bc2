//! Quadrant view projection.
//!
//! # Responsibility
//! - Derive marker placement and color for every idea.
//! - Classify every marker into one of the four regions.
//! - Derive the hover tooltip card and the four region labels.
//!
//! # Invariants
//! - Output is a pure function of the snapshot plus hover/drag ids.
//! - Color depends only on the idea's index in the snapshot.

use crate::model::idea::{Idea, IdeaId, Position};
use crate::quadrant::geometry::{marker_placement, MarkerPlacement};
use std::sync::Arc;

/// Score at which an axis counts as "high".
pub const HIGH_SCORE_THRESHOLD: u8 = 50;

/// Vertical gap between a tooltip card and its marker, in pixels.
pub const TOOLTIP_GAP_PX: f64 = 10.0;

/// Fixed marker palette, cycled by idea index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerColor {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
    Pink,
    Indigo,
    Orange,
}

pub const MARKER_PALETTE: [MarkerColor; 8] = [
    MarkerColor::Red,
    MarkerColor::Blue,
    MarkerColor::Green,
    MarkerColor::Yellow,
    MarkerColor::Purple,
    MarkerColor::Pink,
    MarkerColor::Indigo,
    MarkerColor::Orange,
];

impl MarkerColor {
    /// Stable name used by the UI shell's theme lookup.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Purple => "purple",
            Self::Pink => "pink",
            Self::Indigo => "indigo",
            Self::Orange => "orange",
        }
    }

    /// RGB hex for shells without a theme.
    pub fn hex(self) -> &'static str {
        match self {
            Self::Red => "#ef4444",
            Self::Blue => "#3b82f6",
            Self::Green => "#22c55e",
            Self::Yellow => "#eab308",
            Self::Purple => "#a855f7",
            Self::Pink => "#ec4899",
            Self::Indigo => "#6366f1",
            Self::Orange => "#f97316",
        }
    }
}

pub fn color_for_index(index: usize) -> MarkerColor {
    MARKER_PALETTE[index % MARKER_PALETTE.len()]
}

/// One of the four impact/effort regions. Not stored on ideas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuadrantRegion {
    HighImpactLowEffort,
    HighImpactHighEffort,
    LowImpactLowEffort,
    LowImpactHighEffort,
}

/// Regions in reading order: top-left, top-right, bottom-left, bottom-right.
pub const QUADRANT_REGIONS: [QuadrantRegion; 4] = [
    QuadrantRegion::HighImpactLowEffort,
    QuadrantRegion::HighImpactHighEffort,
    QuadrantRegion::LowImpactLowEffort,
    QuadrantRegion::LowImpactHighEffort,
];

impl QuadrantRegion {
    /// Region containing `position`.
    pub fn of(position: Position) -> Self {
        let high_impact = position.impact >= HIGH_SCORE_THRESHOLD;
        let high_effort = position.effort >= HIGH_SCORE_THRESHOLD;
        match (high_impact, high_effort) {
            (true, false) => Self::HighImpactLowEffort,
            (true, true) => Self::HighImpactHighEffort,
            (false, false) => Self::LowImpactLowEffort,
            (false, true) => Self::LowImpactHighEffort,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::HighImpactLowEffort => "High Impact, Low Effort",
            Self::HighImpactHighEffort => "High Impact, High Effort",
            Self::LowImpactLowEffort => "Low Impact, Low Effort",
            Self::LowImpactHighEffort => "Low Impact, High Effort",
        }
    }

    /// High impact renders at the top.
    pub fn is_top(self) -> bool {
        matches!(self, Self::HighImpactLowEffort | Self::HighImpactHighEffort)
    }

    /// Low effort renders at the left.
    pub fn is_left(self) -> bool {
        matches!(self, Self::HighImpactLowEffort | Self::LowImpactLowEffort)
    }
}

/// Draggable marker for one idea.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadrantMarker {
    pub idea_id: IdeaId,
    pub title: String,
    pub color: MarkerColor,
    pub placement: MarkerPlacement,
    /// Region the marker currently sits in.
    pub region: QuadrantRegion,
    pub is_dragging: bool,
}

/// Detail card shown above the hovered marker.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipCard {
    pub idea_id: IdeaId,
    pub title: String,
    pub description: String,
    pub votes: i64,
    /// Anchored at the marker point, lifted by its own height plus a gap.
    pub placement: MarkerPlacement,
    pub offset_y_px: f64,
}

/// Full quadrant render model.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadrantView {
    pub regions: [QuadrantRegion; 4],
    pub markers: Vec<QuadrantMarker>,
    pub tooltip: Option<TooltipCard>,
}

/// Colors keyed by idea, in snapshot order.
pub fn assign_colors(ideas: &[Arc<Idea>]) -> Vec<(IdeaId, MarkerColor)> {
    ideas
        .iter()
        .enumerate()
        .map(|(index, idea)| (idea.id, color_for_index(index)))
        .collect()
}

/// Renders the quadrant from the current snapshot and local view state.
pub fn render_quadrant(
    ideas: &[Arc<Idea>],
    hovered: Option<IdeaId>,
    dragging: Option<IdeaId>,
) -> QuadrantView {
    let markers = ideas
        .iter()
        .zip(assign_colors(ideas))
        .map(|(idea, (_, color))| QuadrantMarker {
            idea_id: idea.id,
            title: idea.title.clone(),
            color,
            placement: marker_placement(idea.position()),
            region: QuadrantRegion::of(idea.position()),
            is_dragging: dragging == Some(idea.id),
        })
        .collect();

    let tooltip = hovered
        .and_then(|id| ideas.iter().find(|idea| idea.id == id))
        .map(|idea| tooltip_card(idea));

    QuadrantView {
        regions: QUADRANT_REGIONS,
        markers,
        tooltip,
    }
}

fn tooltip_card(idea: &Idea) -> TooltipCard {
    let mut placement = marker_placement(idea.position());
    placement.translate_y_percent = -100.0;
    TooltipCard {
        idea_id: idea.id,
        title: idea.title.clone(),
        description: idea.description.clone(),
        votes: idea.votes,
        placement,
        offset_y_px: -TOOLTIP_GAP_PX,
    }
}
