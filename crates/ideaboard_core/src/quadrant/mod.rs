//! Quadrant interaction state.
//!
//! # Responsibility
//! - Map pointer coordinates to impact/effort scores (`geometry`).
//! - Run the marker drag session (`drag`) and hover tracking (`hover`).
//!
//! # Invariants
//! - A `QuadrantSession` exists only while the quadrant view is mounted.
//!   Dropping it ends any drag and releases document listeners.

pub mod drag;
pub mod geometry;
pub mod hover;

use drag::{DragController, PointerListenerHost};
use hover::HoverState;

/// Local state of one mounted quadrant view.
pub struct QuadrantSession<H: PointerListenerHost> {
    pub drag: DragController<H>,
    pub hover: HoverState,
}

impl<H: PointerListenerHost> QuadrantSession<H> {
    /// Mounts a fresh session with no drag and no hover.
    pub fn mount(host: H) -> Self {
        Self {
            drag: DragController::new(host),
            hover: HoverState::new(),
        }
    }

    /// Tears the session down, ending any active drag.
    pub fn unmount(mut self) {
        self.drag.unmount();
    }
}
