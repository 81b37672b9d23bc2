//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `ideaboard_core` linkage.
//! - Print a deterministic-shaped demo export for quick sanity checks.

use ideaboard_core::{ideas_to_csv, parse_tag_input, IdeaService, InMemoryIdeaRepository};

fn main() {
    println!("ideaboard_core ping={}", ideaboard_core::ping());
    println!("ideaboard_core version={}", ideaboard_core::core_version());

    let mut service = IdeaService::new(InMemoryIdeaRepository::new());
    let quick_win = service.create_idea(
        "Keyboard shortcuts",
        "Add shortcuts for common actions",
        80,
        20,
        &parse_tag_input("ux, power users"),
    );
    service.create_idea(
        "Offline mode",
        "Work without a connection",
        60,
        90,
        &parse_tag_input("infra"),
    );
    service.vote_idea(quick_win.id, 1);

    println!("{}", ideas_to_csv(&service.list_ideas()));
}
