use ideaboard_core::{
    BoardTab, FormError, IdeaBoard, InMemoryIdeaRepository, MarkerColor, MoveOutcome, Point,
    PointerListenerHost, QuadrantRegion, Rect, VoteDirection,
};
use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Default)]
struct LiveCountHost {
    live: Rc<Cell<u32>>,
}

struct LiveCountRegistration {
    live: Rc<Cell<u32>>,
}

impl Drop for LiveCountRegistration {
    fn drop(&mut self) {
        self.live.set(self.live.get() - 1);
    }
}

impl PointerListenerHost for LiveCountHost {
    type Registration = LiveCountRegistration;

    fn attach(&self) -> LiveCountRegistration {
        self.live.set(self.live.get() + 1);
        LiveCountRegistration {
            live: Rc::clone(&self.live),
        }
    }
}

type TestBoard = IdeaBoard<InMemoryIdeaRepository, LiveCountHost>;

const RECT: Rect = Rect {
    left: 0.0,
    top: 0.0,
    width: 200.0,
    height: 100.0,
};

fn add_idea(board: &mut TestBoard, title: &str, tags_text: &str) -> uuid::Uuid {
    board.open_modal();
    let modal = board.modal_mut();
    modal.form.title = title.to_string();
    modal.form.description = format!("{title} description");
    modal.form.tags_text = tags_text.to_string();
    board.submit_modal().expect("valid form").id
}

#[test]
fn modal_submit_creates_idea_and_closes() {
    let mut board = TestBoard::in_memory(LiveCountHost::default());
    let id = add_idea(&mut board, "Dark mode", " a, b ,c");

    assert!(!board.modal().is_open());
    let idea = board.get_idea(id).unwrap();
    assert_eq!(idea.tags, vec!["a", "b", "c"]);
    assert_eq!((idea.impact, idea.effort), (50, 50));
    assert_eq!(idea.votes, 0);
}

#[test]
fn modal_rejects_missing_fields_and_stays_open() {
    let mut board = TestBoard::in_memory(LiveCountHost::default());
    board.open_modal();
    board.modal_mut().form.title = "only title".to_string();

    let err = board.submit_modal().unwrap_err();
    assert_eq!(err, FormError::MissingDescription);
    assert!(board.modal().is_open());
    assert!(board.ideas().is_empty());
}

#[test]
fn drag_through_the_board_updates_the_quadrant_view() {
    let host = LiveCountHost::default();
    let mut board = TestBoard::in_memory(host.clone());
    let id = add_idea(&mut board, "Dark mode", "");

    assert!(board.pointer_down(id));
    assert_eq!(host.live.get(), 1);
    assert_eq!(
        board.pointer_move(Point::new(200.0, 100.0), RECT),
        MoveOutcome::Moved(ideaboard_core::Position {
            impact: 0,
            effort: 100
        })
    );

    let view = board.quadrant_view().unwrap();
    assert!(view.markers[0].is_dragging);
    assert_eq!(view.markers[0].region, QuadrantRegion::LowImpactHighEffort);
    assert_eq!(view.markers[0].placement.left_percent, 100.0);
    assert_eq!(view.markers[0].placement.top_percent, 100.0);

    assert_eq!(board.pointer_up(), Some(id));
    assert_eq!(host.live.get(), 0);
    assert!(!board.quadrant_view().unwrap().markers[0].is_dragging);
}

#[test]
fn pointer_down_on_unknown_idea_does_not_start_a_session() {
    let host = LiveCountHost::default();
    let mut board = TestBoard::in_memory(host.clone());

    assert!(!board.pointer_down(uuid::Uuid::new_v4()));
    assert_eq!(host.live.get(), 0);
}

#[test]
fn switching_to_list_ends_drag_and_hover() {
    let host = LiveCountHost::default();
    let mut board = TestBoard::in_memory(host.clone());
    let id = add_idea(&mut board, "Dark mode", "");

    board.hover_enter(id);
    board.pointer_down(id);
    board.select_tab(BoardTab::List);

    assert_eq!(host.live.get(), 0);
    assert_eq!(board.dragging(), None);
    assert_eq!(board.hovered(), None);
    assert!(board.quadrant_view().is_none());
    assert_eq!(
        board.pointer_move(Point::new(0.0, 0.0), RECT),
        MoveOutcome::Ignored
    );

    board.select_tab(BoardTab::Quadrant);
    let view = board.quadrant_view().unwrap();
    assert!(view.tooltip.is_none());
    assert!(!view.markers[0].is_dragging);
}

#[test]
fn dropping_the_board_mid_drag_releases_listeners() {
    let host = LiveCountHost::default();
    {
        let mut board = TestBoard::in_memory(host.clone());
        let id = add_idea(&mut board, "Dark mode", "");
        board.pointer_down(id);
        assert_eq!(host.live.get(), 1);
    }
    assert_eq!(host.live.get(), 0);
}

#[test]
fn hover_drives_tooltip_card() {
    let mut board = TestBoard::in_memory(LiveCountHost::default());
    let id = add_idea(&mut board, "Dark mode", "");
    board.vote(id, VoteDirection::Up);

    board.hover_enter(id);
    let tooltip = board.quadrant_view().unwrap().tooltip.unwrap();
    assert_eq!(tooltip.title, "Dark mode");
    assert_eq!(tooltip.votes, 1);
    assert_eq!(tooltip.placement.translate_y_percent, -100.0);
    assert_eq!(tooltip.offset_y_px, -10.0);

    board.hover_leave();
    assert!(board.quadrant_view().unwrap().tooltip.is_none());
}

#[test]
fn hover_and_drag_may_target_different_ideas() {
    let mut board = TestBoard::in_memory(LiveCountHost::default());
    let a = add_idea(&mut board, "A", "");
    let b = add_idea(&mut board, "B", "");

    board.pointer_down(a);
    board.hover_enter(b);

    assert_eq!(board.dragging(), Some(a));
    assert_eq!(board.hovered(), Some(b));
}

#[test]
fn marker_colors_cycle_by_index() {
    let mut board = TestBoard::in_memory(LiveCountHost::default());
    for idx in 0..10 {
        add_idea(&mut board, &format!("idea {idx}"), "");
    }

    let view = board.quadrant_view().unwrap();
    assert_eq!(view.markers.len(), 10);
    assert_eq!(view.markers[0].color, MarkerColor::Red);
    assert_eq!(view.markers[1].color, MarkerColor::Blue);
    assert_eq!(view.markers[8].color, MarkerColor::Red);
    assert_eq!(view.markers[9].color, MarkerColor::Blue);
    assert_eq!(view.regions[0], QuadrantRegion::HighImpactLowEffort);
}

#[test]
fn list_view_votes_flow_back_into_cards() {
    let mut board = TestBoard::in_memory(LiveCountHost::default());
    let id = add_idea(&mut board, "Dark mode", "ui, theme");
    board.select_tab(BoardTab::List);

    board.vote(id, VoteDirection::Down);
    board.vote(id, VoteDirection::Down);

    let cards = board.list_view();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].votes, -2);
    assert_eq!(cards[0].subtitle, "Impact: 50, Effort: 50");
    assert_eq!(cards[0].tags, vec!["ui", "theme"]);
}

#[test]
fn export_is_available_from_either_tab() {
    let mut board = TestBoard::in_memory(LiveCountHost::default());
    add_idea(&mut board, "Dark mode", "");
    let from_quadrant = board.export_csv();

    board.select_tab(BoardTab::List);
    assert_eq!(board.export_csv(), from_quadrant);
    assert_eq!(from_quadrant.lines().count(), 2);
}

#[test]
fn tab_names_parse_case_insensitively() {
    assert_eq!(BoardTab::parse(" List "), Some(BoardTab::List));
    assert_eq!(BoardTab::parse("quadrant"), Some(BoardTab::Quadrant));
    assert_eq!(BoardTab::parse("grid"), None);
    assert_eq!(BoardTab::default(), BoardTab::Quadrant);
}

#[test]
fn markers_report_the_region_they_sit_in() {
    let mut board = TestBoard::in_memory(LiveCountHost::default());
    let id = add_idea(&mut board, "Dark mode", "");
    assert_eq!(
        board.quadrant_view().unwrap().markers[0].region,
        QuadrantRegion::HighImpactHighEffort
    );

    board.pointer_down(id);
    // Left edge, just above the vertical midline: impact 51, effort 0.
    board.pointer_move(Point::new(0.0, 49.0), RECT);
    board.pointer_up();
    assert_eq!(
        board.quadrant_view().unwrap().markers[0].region,
        QuadrantRegion::HighImpactLowEffort
    );

    board.pointer_down(id);
    board.pointer_move(Point::new(0.0, 51.0), RECT);
    board.pointer_up();
    assert_eq!(
        board.quadrant_view().unwrap().markers[0].region,
        QuadrantRegion::LowImpactLowEffort
    );
}
