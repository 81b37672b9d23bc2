//! Repository layer abstractions and storage implementations.
//!
//! # Responsibility
//! - Define the storage contract the idea service depends on.
//! - Keep collection bookkeeping out of use-case orchestration.
//!
//! # Invariants
//! - Storage is process memory only; nothing is persisted across sessions.

pub mod idea_repo;
