//! Drag session state machine for quadrant markers.
//!
//! # Responsibility
//! - Track which idea, if any, is being dragged.
//! - Route pointer moves through the coordinate mapper into the store.
//! - Hold document-wide pointer listeners only while a drag is active.
//!
//! # Invariants
//! - At most one idea is dragged at a time.
//! - Listeners are held iff the state is `Dragging`; the registration lives
//!   inside that state, so leaving it (pointer-up, unmount, drop) releases
//!   them.
//! - Moves are applied synchronously in arrival order.

use crate::model::idea::{IdeaId, IdeaPatch, Position};
use crate::quadrant::geometry::{map_pointer, Point, Rect};
use crate::repo::idea_repo::IdeaRepository;
use crate::service::idea_service::IdeaService;
use log::debug;

/// Attaches document-wide pointer-move/pointer-up listeners.
///
/// The returned registration must detach the listeners when dropped.
pub trait PointerListenerHost {
    type Registration;

    fn attach(&self) -> Self::Registration;
}

/// Drag state. `Dragging` owns the listener registration.
#[derive(Debug)]
pub enum DragState<G> {
    Idle,
    Dragging { idea_id: IdeaId, listeners: G },
}

/// Outcome of one pointer-move event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// No session active; the event was not routed.
    Ignored,
    /// The container had no measurable size; the frame was skipped.
    SkippedFrame,
    /// The dragged idea was repositioned.
    Moved(Position),
}

/// Drag controller bound to one mounted quadrant view.
pub struct DragController<H: PointerListenerHost> {
    host: H,
    state: DragState<H::Registration>,
}

impl<H: PointerListenerHost> DragController<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            state: DragState::Idle,
        }
    }

    /// Idea currently being dragged.
    pub fn dragging(&self) -> Option<IdeaId> {
        match &self.state {
            DragState::Idle => None,
            DragState::Dragging { idea_id, .. } => Some(*idea_id),
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging().is_some()
    }

    /// `Idle --pointer-down(M)--> Dragging(M)`.
    ///
    /// Returns `false` when a session is already running; the running
    /// session is kept.
    pub fn pointer_down(&mut self, idea_id: IdeaId) -> bool {
        if let Some(current) = self.dragging() {
            debug!(
                "event=drag_start module=quadrant status=skipped reason=already_dragging idea_id={idea_id} current={current}"
            );
            return false;
        }

        let listeners = self.host.attach();
        self.state = DragState::Dragging { idea_id, listeners };
        debug!("event=drag_start module=quadrant status=ok idea_id={idea_id}");
        true
    }

    /// `Dragging(M) --pointer-move--> Dragging(M)`.
    ///
    /// `rect` is the container's bounding rect measured for this event.
    pub fn pointer_move<R: IdeaRepository>(
        &mut self,
        point: Point,
        rect: Rect,
        service: &mut IdeaService<R>,
    ) -> MoveOutcome {
        let Some(idea_id) = self.dragging() else {
            return MoveOutcome::Ignored;
        };
        let Some(position) = map_pointer(point, rect) else {
            return MoveOutcome::SkippedFrame;
        };

        service.update_idea(idea_id, &IdeaPatch::reposition(position));
        MoveOutcome::Moved(position)
    }

    /// `Dragging(M) --pointer-up--> Idle`. Returns the released idea.
    pub fn pointer_up(&mut self) -> Option<IdeaId> {
        self.release("pointer_up")
    }

    /// `Dragging(M) --unmount--> Idle`.
    pub fn unmount(&mut self) -> Option<IdeaId> {
        self.release("unmount")
    }

    fn release(&mut self, reason: &str) -> Option<IdeaId> {
        // Dropping the previous state drops its registration.
        match std::mem::replace(&mut self.state, DragState::Idle) {
            DragState::Idle => None,
            DragState::Dragging { idea_id, .. } => {
                debug!("event=drag_end module=quadrant status=ok reason={reason} idea_id={idea_id}");
                Some(idea_id)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DragController, PointerListenerHost};
    use std::cell::Cell;
    use std::rc::Rc;
    use uuid::Uuid;

    #[derive(Clone, Default)]
    struct CountingHost {
        live: Rc<Cell<i32>>,
    }

    struct CountingRegistration {
        live: Rc<Cell<i32>>,
    }

    impl Drop for CountingRegistration {
        fn drop(&mut self) {
            self.live.set(self.live.get() - 1);
        }
    }

    impl PointerListenerHost for CountingHost {
        type Registration = CountingRegistration;

        fn attach(&self) -> CountingRegistration {
            self.live.set(self.live.get() + 1);
            CountingRegistration {
                live: Rc::clone(&self.live),
            }
        }
    }

    #[test]
    fn second_pointer_down_keeps_first_session() {
        let host = CountingHost::default();
        let mut drag = DragController::new(host.clone());
        let first = Uuid::new_v4();

        assert!(drag.pointer_down(first));
        assert!(!drag.pointer_down(Uuid::new_v4()));
        assert_eq!(drag.dragging(), Some(first));
        assert_eq!(host.live.get(), 1);
    }

    #[test]
    fn dropping_controller_releases_listeners() {
        let host = CountingHost::default();
        {
            let mut drag = DragController::new(host.clone());
            drag.pointer_down(Uuid::new_v4());
            assert_eq!(host.live.get(), 1);
        }
        assert_eq!(host.live.get(), 0);
    }
}
