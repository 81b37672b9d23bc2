//! Render projections for the board's two tabs.
//!
//! # Responsibility
//! - Turn an idea snapshot into quadrant and list render models.
//!
//! # Invariants
//! - Views own no domain state; everything is recomputed per render.

pub mod list_view;
pub mod quadrant_view;
