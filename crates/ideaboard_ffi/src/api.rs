//! FFI use-case API for the Flutter board shell.
//!
//! # Responsibility
//! - Expose the process-wide board to Dart via FRB as sync calls.
//! - Translate core projections into flat, string-keyed DTOs.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Ids cross the boundary as strings; malformed ids behave like unknown ids.
//! - `listeners_active` in every snapshot tells the shell whether document
//!   pointer listeners must currently be attached.

use ideaboard_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    BoardTab, IdeaBoard, IdeaForm, IdeaId, InMemoryIdeaRepository, MarkerPlacement, MoveOutcome,
    Point, PointerListenerHost, Rect, EXPORT_FILE_NAME, EXPORT_MIME_TYPE,
};
use log::warn;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};
use uuid::Uuid;

const EXPORT_DIR_ENV: &str = "IDEABOARD_EXPORT_DIR";

static BOARD: OnceLock<Mutex<ShellBoard>> = OnceLock::new();
static HOST: OnceLock<ShellListenerHost> = OnceLock::new();
static EXPORT_DIR: OnceLock<PathBuf> = OnceLock::new();

type ShellBoard = IdeaBoard<InMemoryIdeaRepository, ShellListenerHost>;

/// Listener host backed by a live-registration counter the shell polls.
#[derive(Clone, Default)]
struct ShellListenerHost {
    live: Arc<AtomicUsize>,
}

struct ShellListenerRegistration {
    live: Arc<AtomicUsize>,
}

impl PointerListenerHost for ShellListenerHost {
    type Registration = ShellListenerRegistration;

    fn attach(&self) -> ShellListenerRegistration {
        self.live.fetch_add(1, Ordering::SeqCst);
        ShellListenerRegistration {
            live: Arc::clone(&self.live),
        }
    }
}

impl Drop for ShellListenerRegistration {
    fn drop(&mut self) {
        self.live.fetch_sub(1, Ordering::SeqCst);
    }
}

impl ShellListenerHost {
    fn is_active(&self) -> bool {
        self.live.load(Ordering::SeqCst) > 0
    }
}

struct BoardHandle {
    board: MutexGuard<'static, ShellBoard>,
    host: ShellListenerHost,
}

fn listener_host() -> &'static ShellListenerHost {
    HOST.get_or_init(ShellListenerHost::default)
}

fn board() -> BoardHandle {
    let host = listener_host().clone();
    let lock = BOARD.get_or_init(|| Mutex::new(IdeaBoard::in_memory(host.clone())));
    // Every board mutation is a single whole-value swap, so a poisoned board is still consistent.
    let board = lock.lock().unwrap_or_else(PoisonError::into_inner);
    BoardHandle { board, host }
}

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Idempotent for the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One idea as seen by the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdeaItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub impact: u8,
    pub effort: u8,
    pub votes: i64,
    pub tags: Vec<String>,
}

/// Marker or tooltip placement in percent of the quadrant container.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementItem {
    pub left_percent: f64,
    pub top_percent: f64,
    pub translate_x_percent: f64,
    pub translate_y_percent: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarkerItem {
    pub idea_id: String,
    pub title: String,
    /// Palette name (`red|blue|...`).
    pub color: String,
    pub color_hex: String,
    pub placement: PlacementItem,
    /// Label of the region the marker sits in.
    pub region: String,
    pub is_dragging: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TooltipItem {
    pub idea_id: String,
    pub title: String,
    pub description: String,
    pub votes: i64,
    pub placement: PlacementItem,
    pub offset_y_px: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionItem {
    pub label: String,
    pub is_top: bool,
    pub is_left: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListCardItem {
    pub idea_id: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub tags: Vec<String>,
    pub votes: i64,
}

/// Full render state returned after every call that changes the board.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardSnapshot {
    /// `quadrant|list`.
    pub active_tab: String,
    pub ideas: Vec<IdeaItem>,
    /// Empty while the list tab is active.
    pub regions: Vec<RegionItem>,
    pub markers: Vec<MarkerItem>,
    pub tooltip: Option<TooltipItem>,
    pub list_cards: Vec<ListCardItem>,
    pub dragging_id: Option<String>,
    pub listeners_active: bool,
    pub modal_open: bool,
}

/// Generic action response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    pub ok: bool,
    pub idea_id: Option<String>,
    pub message: String,
}

impl ActionResponse {
    fn success(message: impl Into<String>, idea_id: Option<String>) -> Self {
        Self {
            ok: true,
            idea_id,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            idea_id: None,
            message: message.into(),
        }
    }
}

/// CSV export payload for the shell's download mechanism.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub file_name: String,
    pub mime_type: String,
    pub content: String,
}

/// Returns the current render state.
#[flutter_rust_bridge::frb(sync)]
pub fn board_snapshot() -> BoardSnapshot {
    let handle = board();
    snapshot_of(&handle)
}

/// Creates an idea from the add-idea dialog fields.
///
/// # FFI contract
/// - Title and description must be non-blank.
/// - `tags_text` is comma-separated; entries are trimmed.
/// - A rejected call leaves the dialog and its fields as they were.
/// - Closes the dialog on success.
#[flutter_rust_bridge::frb(sync)]
pub fn create_idea(
    title: String,
    description: String,
    impact: i64,
    effort: i64,
    tags_text: String,
) -> ActionResponse {
    let mut form = IdeaForm::new();
    form.title = title;
    form.description = description;
    form.set_impact(impact);
    form.set_effort(effort);
    form.tags_text = tags_text;

    let draft = match form.submit() {
        Ok(draft) => draft,
        Err(err) => return ActionResponse::failure(format!("create_idea failed: {err}")),
    };

    let mut handle = board();
    let idea = handle.board.create_idea(draft);
    handle.board.close_modal();
    ActionResponse::success("Idea created.", Some(idea.id.to_string()))
}

/// Adds `delta` to an idea's votes. Unknown ids are ignored.
#[flutter_rust_bridge::frb(sync)]
pub fn vote_idea(idea_id: String, delta: i64) -> BoardSnapshot {
    let mut handle = board();
    if let Some(id) = parse_idea_id(&idea_id) {
        handle.board.vote_idea(id, delta);
    }
    snapshot_of(&handle)
}

/// Switches between `quadrant` and `list`.
#[flutter_rust_bridge::frb(sync)]
pub fn select_tab(tab: String) -> BoardSnapshot {
    let mut handle = board();
    match BoardTab::parse(&tab) {
        Some(tab) => handle.board.select_tab(tab),
        None => warn!("event=tab_select module=ffi status=skipped reason=unknown_tab"),
    }
    snapshot_of(&handle)
}

#[flutter_rust_bridge::frb(sync)]
pub fn open_add_idea() -> BoardSnapshot {
    let mut handle = board();
    handle.board.open_modal();
    snapshot_of(&handle)
}

#[flutter_rust_bridge::frb(sync)]
pub fn close_add_idea() -> BoardSnapshot {
    let mut handle = board();
    handle.board.close_modal();
    snapshot_of(&handle)
}

/// Pointer pressed on a marker.
#[flutter_rust_bridge::frb(sync)]
pub fn pointer_down(idea_id: String) -> BoardSnapshot {
    let mut handle = board();
    if let Some(id) = parse_idea_id(&idea_id) {
        handle.board.pointer_down(id);
    }
    snapshot_of(&handle)
}

/// Document pointer move with the container's bounding rect at event time.
#[flutter_rust_bridge::frb(sync)]
pub fn pointer_move(
    x: f64,
    y: f64,
    rect_left: f64,
    rect_top: f64,
    rect_width: f64,
    rect_height: f64,
) -> BoardSnapshot {
    let mut handle = board();
    let outcome = handle.board.pointer_move(
        Point::new(x, y),
        Rect::new(rect_left, rect_top, rect_width, rect_height),
    );
    if outcome == MoveOutcome::SkippedFrame {
        warn!("event=pointer_move module=ffi status=skipped reason=unmeasured_container");
    }
    snapshot_of(&handle)
}

/// Document pointer release, anywhere.
#[flutter_rust_bridge::frb(sync)]
pub fn pointer_up() -> BoardSnapshot {
    let mut handle = board();
    handle.board.pointer_up();
    snapshot_of(&handle)
}

#[flutter_rust_bridge::frb(sync)]
pub fn hover_enter(idea_id: String) -> BoardSnapshot {
    let mut handle = board();
    if let Some(id) = parse_idea_id(&idea_id) {
        handle.board.hover_enter(id);
    }
    snapshot_of(&handle)
}

#[flutter_rust_bridge::frb(sync)]
pub fn hover_leave() -> BoardSnapshot {
    let mut handle = board();
    handle.board.hover_leave();
    snapshot_of(&handle)
}

/// Returns the CSV export for a client-side download.
#[flutter_rust_bridge::frb(sync)]
pub fn export_csv() -> CsvExport {
    let handle = board();
    CsvExport {
        file_name: EXPORT_FILE_NAME.to_string(),
        mime_type: EXPORT_MIME_TYPE.to_string(),
        content: handle.board.export_csv(),
    }
}

/// Writes `ideas.csv` to `dir`, or to the configured export directory.
///
/// # FFI contract
/// - `dir = None` (or blank) uses `IDEABOARD_EXPORT_DIR`, then the temp dir.
/// - Never panics; the message carries the written path or the failure.
#[flutter_rust_bridge::frb(sync)]
pub fn export_csv_file(dir: Option<String>) -> ActionResponse {
    let target = dir
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(resolve_export_dir);

    let handle = board();
    match handle.board.export_csv_file(&target) {
        Ok(path) => ActionResponse::success(path.display().to_string(), None),
        Err(err) => ActionResponse::failure(format!("export_csv_file failed: {err}")),
    }
}

fn resolve_export_dir() -> PathBuf {
    EXPORT_DIR
        .get_or_init(|| {
            if let Ok(raw) = std::env::var(EXPORT_DIR_ENV) {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir()
        })
        .clone()
}

fn parse_idea_id(raw: &str) -> Option<IdeaId> {
    Uuid::parse_str(raw.trim()).ok()
}

fn snapshot_of(handle: &BoardHandle) -> BoardSnapshot {
    let board = &handle.board;
    let quadrant = board.quadrant_view();

    let ideas = board
        .ideas()
        .iter()
        .map(|idea| IdeaItem {
            id: idea.id.to_string(),
            title: idea.title.clone(),
            description: idea.description.clone(),
            impact: idea.impact,
            effort: idea.effort,
            votes: idea.votes,
            tags: idea.tags.clone(),
        })
        .collect();

    let (regions, markers, tooltip) = match quadrant {
        Some(view) => (
            view.regions
                .iter()
                .map(|region| RegionItem {
                    label: region.label().to_string(),
                    is_top: region.is_top(),
                    is_left: region.is_left(),
                })
                .collect(),
            view.markers
                .into_iter()
                .map(|marker| MarkerItem {
                    idea_id: marker.idea_id.to_string(),
                    title: marker.title,
                    color: marker.color.as_str().to_string(),
                    color_hex: marker.color.hex().to_string(),
                    placement: placement_item(marker.placement),
                    region: marker.region.label().to_string(),
                    is_dragging: marker.is_dragging,
                })
                .collect(),
            view.tooltip.map(|card| TooltipItem {
                idea_id: card.idea_id.to_string(),
                title: card.title,
                description: card.description,
                votes: card.votes,
                placement: placement_item(card.placement),
                offset_y_px: card.offset_y_px,
            }),
        ),
        None => (Vec::new(), Vec::new(), None),
    };

    let list_cards = board
        .list_view()
        .into_iter()
        .map(|card| ListCardItem {
            idea_id: card.idea_id.to_string(),
            title: card.title,
            subtitle: card.subtitle,
            description: card.description,
            tags: card.tags,
            votes: card.votes,
        })
        .collect();

    BoardSnapshot {
        active_tab: board.tab().as_str().to_string(),
        ideas,
        regions,
        markers,
        tooltip,
        list_cards,
        dragging_id: board.dragging().map(|id| id.to_string()),
        listeners_active: handle.host.is_active(),
        modal_open: board.modal().is_open(),
    }
}

fn placement_item(placement: MarkerPlacement) -> PlacementItem {
    PlacementItem {
        left_percent: placement.left_percent,
        top_percent: placement.top_percent,
        translate_x_percent: placement.translate_x_percent,
        translate_y_percent: placement.translate_y_percent,
    }
}
