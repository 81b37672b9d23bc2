//! Domain model for the idea board.
//!
//! # Responsibility
//! - Define the canonical idea record shared by quadrant and list views.
//!
//! # Invariants
//! - Every idea is identified by a stable `IdeaId`.
//! - Ideas are never deleted; there is no removal path.

pub mod idea;
