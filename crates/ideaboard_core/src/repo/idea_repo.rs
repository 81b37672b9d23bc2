//! Idea repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Hold the ordered idea collection for the lifetime of the process.
//! - Apply mutations as whole-value replacements.
//!
//! # Invariants
//! - Insertion order is the iteration order.
//! - A mutation never edits an existing `Idea` value; it swaps in a new
//!   `Arc<Idea>` and publishes a new snapshot.
//! - Unknown ids are reported as `false`, never as errors.

use crate::model::idea::{Idea, IdeaId};
use std::sync::Arc;

/// Shared, immutable view of the collection at one point in time.
///
/// Two snapshots are the same collection state iff `Arc::ptr_eq` holds.
pub type IdeaSnapshot = Arc<[Arc<Idea>]>;

/// Repository interface for idea storage.
pub trait IdeaRepository {
    /// Appends one idea to the end of the collection.
    fn insert_idea(&mut self, idea: Idea) -> Arc<Idea>;
    /// Replaces the idea with `id` by `f(current)`. Returns whether it existed.
    fn replace_idea(&mut self, id: IdeaId, f: &dyn Fn(&Idea) -> Idea) -> bool;
    fn get_idea(&self, id: IdeaId) -> Option<Arc<Idea>>;
    fn snapshot(&self) -> IdeaSnapshot;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Process-memory idea repository. Nothing outlives the process.
#[derive(Debug, Clone)]
pub struct InMemoryIdeaRepository {
    ideas: IdeaSnapshot,
}

impl InMemoryIdeaRepository {
    pub fn new() -> Self {
        Self {
            ideas: Arc::from(Vec::new()),
        }
    }

    fn position_of(&self, id: IdeaId) -> Option<usize> {
        self.ideas.iter().position(|idea| idea.id == id)
    }
}

impl Default for InMemoryIdeaRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl IdeaRepository for InMemoryIdeaRepository {
    fn insert_idea(&mut self, idea: Idea) -> Arc<Idea> {
        let idea = Arc::new(idea);
        let mut next = self.ideas.to_vec();
        next.push(Arc::clone(&idea));
        self.ideas = Arc::from(next);
        idea
    }

    fn replace_idea(&mut self, id: IdeaId, f: &dyn Fn(&Idea) -> Idea) -> bool {
        let Some(index) = self.position_of(id) else {
            return false;
        };

        let mut next = self.ideas.to_vec();
        let replacement = f(next[index].as_ref());
        debug_assert_eq!(replacement.id, id, "replacement must keep idea identity");
        next[index] = Arc::new(replacement);
        self.ideas = Arc::from(next);
        true
    }

    fn get_idea(&self, id: IdeaId) -> Option<Arc<Idea>> {
        self.ideas.iter().find(|idea| idea.id == id).cloned()
    }

    fn snapshot(&self) -> IdeaSnapshot {
        Arc::clone(&self.ideas)
    }

    fn len(&self) -> usize {
        self.ideas.len()
    }
}

#[cfg(test)]
mod tests {
    use super::{IdeaRepository, InMemoryIdeaRepository};
    use crate::model::idea::Idea;
    use std::sync::Arc;

    #[test]
    fn replace_publishes_new_snapshot_and_keeps_untouched_identity() {
        let mut repo = InMemoryIdeaRepository::new();
        let first = repo.insert_idea(Idea::new("a", "d", 1, 1, &[]));
        let second = repo.insert_idea(Idea::new("b", "d", 2, 2, &[]));
        let before = repo.snapshot();

        assert!(repo.replace_idea(first.id, &|idea| idea.voted(1)));
        let after = repo.snapshot();

        assert!(!Arc::ptr_eq(&before, &after));
        assert_eq!(before[0].votes, 0);
        assert_eq!(after[0].votes, 1);
        assert!(!Arc::ptr_eq(&before[0], &after[0]));
        assert!(Arc::ptr_eq(&before[1], &after[1]));
        assert!(Arc::ptr_eq(&second, &after[1]));
    }

    #[test]
    fn replace_unknown_id_leaves_snapshot_untouched() {
        let mut repo = InMemoryIdeaRepository::new();
        repo.insert_idea(Idea::new("a", "d", 1, 1, &[]));
        let before = repo.snapshot();

        assert!(!repo.replace_idea(uuid::Uuid::new_v4(), &|idea| idea.voted(1)));
        assert!(Arc::ptr_eq(&before, &repo.snapshot()));
    }
}
