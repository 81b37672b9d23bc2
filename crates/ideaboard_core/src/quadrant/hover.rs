//! Hovered-marker tracking for the quadrant tooltip.
//!
//! Purely presentational; independent of the drag session.

use crate::model::idea::IdeaId;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoverState {
    hovered: Option<IdeaId>,
}

impl HoverState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer entered the marker of `idea_id`.
    pub fn enter(&mut self, idea_id: IdeaId) {
        self.hovered = Some(idea_id);
    }

    /// Pointer left a marker.
    pub fn leave(&mut self) {
        self.hovered = None;
    }

    pub fn hovered(&self) -> Option<IdeaId> {
        self.hovered
    }
}
