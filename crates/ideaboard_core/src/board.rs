//! Top-level board state.
//!
//! # Responsibility
//! - Own the idea store, the active tab, the add-idea modal and the mounted
//!   quadrant session.
//! - Route UI events to the store and the quadrant state machines.
//!
//! # Invariants
//! - The quadrant session is mounted iff the active tab is `Quadrant`.
//! - Switching away from the quadrant ends any drag and clears hover.
//! - Pointer/hover events while the quadrant is unmounted are ignored.

use crate::export::csv::{ideas_to_csv, write_csv_file, ExportError};
use crate::form::{FormError, IdeaDraft, IdeaModal};
use crate::model::idea::{Idea, IdeaId};
use crate::quadrant::drag::{MoveOutcome, PointerListenerHost};
use crate::quadrant::geometry::{Point, Rect};
use crate::quadrant::QuadrantSession;
use crate::repo::idea_repo::{IdeaRepository, IdeaSnapshot, InMemoryIdeaRepository};
use crate::service::idea_service::IdeaService;
use crate::view::list_view::{render_list, ListCard, VoteDirection};
use crate::view::quadrant_view::{render_quadrant, QuadrantView};
use log::debug;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Board tabs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BoardTab {
    #[default]
    Quadrant,
    List,
}

impl BoardTab {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Quadrant => "quadrant",
            Self::List => "list",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "quadrant" => Some(Self::Quadrant),
            "list" => Some(Self::List),
            _ => None,
        }
    }
}

/// Application state behind the board UI.
pub struct IdeaBoard<R: IdeaRepository, H: PointerListenerHost + Clone> {
    service: IdeaService<R>,
    host: H,
    tab: BoardTab,
    quadrant: Option<QuadrantSession<H>>,
    modal: IdeaModal,
}

impl<H: PointerListenerHost + Clone> IdeaBoard<InMemoryIdeaRepository, H> {
    /// Empty board backed by process memory.
    pub fn in_memory(host: H) -> Self {
        Self::new(InMemoryIdeaRepository::new(), host)
    }
}

impl<R: IdeaRepository, H: PointerListenerHost + Clone> IdeaBoard<R, H> {
    /// Creates a board on the quadrant tab.
    pub fn new(repo: R, host: H) -> Self {
        let quadrant = Some(QuadrantSession::mount(host.clone()));
        Self {
            service: IdeaService::new(repo),
            host,
            tab: BoardTab::Quadrant,
            quadrant,
            modal: IdeaModal::default(),
        }
    }

    /// Current collection in insertion order.
    pub fn ideas(&self) -> IdeaSnapshot {
        self.service.list_ideas()
    }

    pub fn get_idea(&self, id: IdeaId) -> Option<Arc<Idea>> {
        self.service.get_idea(id)
    }

    pub fn tab(&self) -> BoardTab {
        self.tab
    }

    /// Switches tabs, mounting or unmounting the quadrant session.
    pub fn select_tab(&mut self, tab: BoardTab) {
        if self.tab == tab {
            return;
        }
        self.tab = tab;
        match tab {
            BoardTab::Quadrant => {
                self.quadrant = Some(QuadrantSession::mount(self.host.clone()));
            }
            BoardTab::List => {
                if let Some(session) = self.quadrant.take() {
                    session.unmount();
                }
            }
        }
        debug!("event=tab_select module=board status=ok tab={}", tab.as_str());
    }

    pub fn modal(&self) -> &IdeaModal {
        &self.modal
    }

    /// Mutable access for controlled form field updates.
    pub fn modal_mut(&mut self) -> &mut IdeaModal {
        &mut self.modal
    }

    pub fn open_modal(&mut self) {
        self.modal.open();
    }

    pub fn close_modal(&mut self) {
        self.modal.close();
    }

    /// Submits the add-idea modal and stores the new idea.
    pub fn submit_modal(&mut self) -> Result<Arc<Idea>, FormError> {
        let draft = self.modal.submit()?;
        Ok(self.create_idea(draft))
    }

    /// Stores an already validated draft.
    pub fn create_idea(&mut self, draft: IdeaDraft) -> Arc<Idea> {
        self.service.create_idea(
            draft.title,
            draft.description,
            i64::from(draft.impact),
            i64::from(draft.effort),
            &draft.tags,
        )
    }

    pub fn vote_idea(&mut self, id: IdeaId, delta: i64) {
        self.service.vote_idea(id, delta);
    }

    pub fn vote(&mut self, id: IdeaId, direction: VoteDirection) {
        self.vote_idea(id, direction.delta());
    }

    /// Starts dragging the marker of `id`.
    ///
    /// Returns `false` when the quadrant is unmounted, the idea is unknown,
    /// or another drag is running.
    pub fn pointer_down(&mut self, id: IdeaId) -> bool {
        if self.service.get_idea(id).is_none() {
            return false;
        }
        match self.quadrant.as_mut() {
            Some(session) => session.drag.pointer_down(id),
            None => false,
        }
    }

    pub fn pointer_move(&mut self, point: Point, rect: Rect) -> MoveOutcome {
        match self.quadrant.as_mut() {
            Some(session) => session.drag.pointer_move(point, rect, &mut self.service),
            None => MoveOutcome::Ignored,
        }
    }

    pub fn pointer_up(&mut self) -> Option<IdeaId> {
        self.quadrant
            .as_mut()
            .and_then(|session| session.drag.pointer_up())
    }

    pub fn hover_enter(&mut self, id: IdeaId) {
        if let Some(session) = self.quadrant.as_mut() {
            session.hover.enter(id);
        }
    }

    pub fn hover_leave(&mut self) {
        if let Some(session) = self.quadrant.as_mut() {
            session.hover.leave();
        }
    }

    pub fn dragging(&self) -> Option<IdeaId> {
        self.quadrant
            .as_ref()
            .and_then(|session| session.drag.dragging())
    }

    pub fn hovered(&self) -> Option<IdeaId> {
        self.quadrant
            .as_ref()
            .and_then(|session| session.hover.hovered())
    }

    /// Quadrant render model; `None` while the list tab is active.
    pub fn quadrant_view(&self) -> Option<QuadrantView> {
        self.quadrant.as_ref().map(|session| {
            render_quadrant(
                &self.ideas(),
                session.hover.hovered(),
                session.drag.dragging(),
            )
        })
    }

    pub fn list_view(&self) -> Vec<ListCard> {
        render_list(&self.ideas())
    }

    pub fn export_csv(&self) -> String {
        ideas_to_csv(&self.ideas())
    }

    /// Writes `ideas.csv` into `dir`.
    pub fn export_csv_file(&self, dir: &Path) -> Result<PathBuf, ExportError> {
        write_csv_file(&self.ideas(), dir)
    }
}
