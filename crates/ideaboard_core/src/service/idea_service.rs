//! Idea use-case service.
//!
//! # Responsibility
//! - Provide create/update/vote entry points for board callers.
//! - Delegate storage to repository implementations.
//!
//! # Invariants
//! - Mutations on unknown ids are silent no-ops (logged, never returned).
//! - Log lines carry ids and counts only, never idea text.

use crate::model::idea::{Idea, IdeaId, IdeaPatch};
use crate::repo::idea_repo::{IdeaRepository, IdeaSnapshot};
use log::debug;
use std::sync::Arc;

/// Use-case service wrapper for idea store operations.
pub struct IdeaService<R: IdeaRepository> {
    repo: R,
}

impl<R: IdeaRepository> IdeaService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates one idea and appends it to the collection.
    ///
    /// # Contract
    /// - Assigns a fresh stable ID and zero votes.
    /// - Clamps scores and trims tags.
    /// - Title/description presence is the form's concern; not re-checked.
    pub fn create_idea(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        impact: i64,
        effort: i64,
        tags: &[String],
    ) -> Arc<Idea> {
        let idea = self
            .repo
            .insert_idea(Idea::new(title, description, impact, effort, tags));
        debug!(
            "event=idea_create module=service status=ok idea_id={} tag_count={} total={}",
            idea.id,
            idea.tags.len(),
            self.repo.len()
        );
        idea
    }

    /// Replaces the matching idea with a patched copy.
    ///
    /// No-op when `id` is unknown.
    pub fn update_idea(&mut self, id: IdeaId, patch: &IdeaPatch) {
        if self.repo.replace_idea(id, &|idea| idea.patched(patch)) {
            debug!("event=idea_update module=service status=ok idea_id={id}");
        } else {
            debug!("event=idea_update module=service status=skipped reason=not_found idea_id={id}");
        }
    }

    /// Adds `delta` to the matching idea's vote count.
    ///
    /// No-op when `id` is unknown.
    pub fn vote_idea(&mut self, id: IdeaId, delta: i64) {
        if self.repo.replace_idea(id, &|idea| idea.voted(delta)) {
            debug!("event=idea_vote module=service status=ok idea_id={id} delta={delta}");
        } else {
            debug!("event=idea_vote module=service status=skipped reason=not_found idea_id={id}");
        }
    }

    /// Gets one idea by stable ID.
    pub fn get_idea(&self, id: IdeaId) -> Option<Arc<Idea>> {
        self.repo.get_idea(id)
    }

    /// Current collection in insertion order.
    pub fn list_ideas(&self) -> IdeaSnapshot {
        self.repo.snapshot()
    }

    pub fn len(&self) -> usize {
        self.repo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repo.is_empty()
    }
}
