//! List view projection with vote controls.

use crate::model::idea::{Idea, IdeaId};
use std::sync::Arc;

/// Vote button on a list card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteDirection {
    Up,
    Down,
}

impl VoteDirection {
    pub fn delta(self) -> i64 {
        match self {
            Self::Up => 1,
            Self::Down => -1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Up => "Upvote",
            Self::Down => "Downvote",
        }
    }
}

/// One card in the list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListCard {
    pub idea_id: IdeaId,
    pub title: String,
    /// `Impact: {impact}, Effort: {effort}`.
    pub subtitle: String,
    pub description: String,
    pub tags: Vec<String>,
    pub votes: i64,
}

/// Renders every idea in insertion order.
pub fn render_list(ideas: &[Arc<Idea>]) -> Vec<ListCard> {
    ideas.iter().map(|idea| list_card(idea)).collect()
}

fn list_card(idea: &Idea) -> ListCard {
    ListCard {
        idea_id: idea.id,
        title: idea.title.clone(),
        subtitle: format!("Impact: {}, Effort: {}", idea.impact, idea.effort),
        description: idea.description.clone(),
        tags: idea.tags.clone(),
        votes: idea.votes,
    }
}
