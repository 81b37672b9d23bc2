//! Core domain logic for the idea board.
//! This crate is the single source of truth for board invariants; UI shells
//! render its projections and forward input events to it.

pub mod board;
pub mod export;
pub mod form;
pub mod logging;
pub mod model;
pub mod quadrant;
pub mod repo;
pub mod service;
pub mod view;

pub use board::{BoardTab, IdeaBoard};
pub use export::csv::{
    csv_row, ideas_to_csv, write_csv_file, ExportError, CSV_HEADER, EXPORT_FILE_NAME,
    EXPORT_MIME_TYPE,
};
pub use form::{FormError, IdeaDraft, IdeaForm, IdeaModal, DEFAULT_SCORE};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::idea::{
    clamp_score, parse_tag_input, Idea, IdeaId, IdeaPatch, Position, Score, SCORE_MAX, SCORE_MIN,
};
pub use quadrant::drag::{DragController, DragState, MoveOutcome, PointerListenerHost};
pub use quadrant::geometry::{
    map_pointer, marker_placement, position_to_point, MarkerPlacement, Point, Rect,
};
pub use quadrant::hover::HoverState;
pub use quadrant::QuadrantSession;
pub use repo::idea_repo::{IdeaRepository, IdeaSnapshot, InMemoryIdeaRepository};
pub use service::idea_service::IdeaService;
pub use view::list_view::{render_list, ListCard, VoteDirection};
pub use view::quadrant_view::{
    assign_colors, render_quadrant, MarkerColor, QuadrantMarker, QuadrantRegion, QuadrantView,
    TooltipCard, MARKER_PALETTE,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
