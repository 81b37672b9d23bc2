//! Idea domain model.
//!
//! # Responsibility
//! - Define the canonical idea record rendered by quadrant and list views.
//! - Own score clamping and tag normalization rules.
//!
//! # Invariants
//! - `id` is stable and never reused for another idea.
//! - `impact` and `effort` are always within `0..=100`.
//! - `votes` is unbounded in sign.
//! - Every tag is whitespace-trimmed and non-empty.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for one idea.
///
/// Random v4 ids keep rapid successive creation collision-free.
pub type IdeaId = Uuid;

/// Impact or effort score in percent.
pub type Score = u8;

/// Lower bound for impact/effort scores.
pub const SCORE_MIN: Score = 0;
/// Upper bound for impact/effort scores.
pub const SCORE_MAX: Score = 100;

/// Separator used by the tag input field.
pub const TAG_INPUT_SEPARATOR: char = ',';

/// Canonical idea record.
///
/// Deserialized values pass through the same clamping and tag trimming as
/// `Idea::new`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "IdeaRecord")]
pub struct Idea {
    /// Assigned at creation time.
    pub id: IdeaId,
    pub title: String,
    pub description: String,
    /// Vertical quadrant axis; higher renders closer to the top.
    pub impact: Score,
    /// Horizontal quadrant axis; higher renders closer to the right.
    pub effort: Score,
    pub votes: i64,
    pub tags: Vec<String>,
}

impl Idea {
    /// Creates a new idea with a generated stable ID and zero votes.
    ///
    /// # Invariants
    /// - Scores are clamped into `0..=100`.
    /// - Tags are trimmed and blank entries dropped.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        impact: i64,
        effort: i64,
        tags: &[String],
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            impact: clamp_score(impact),
            effort: clamp_score(effort),
            votes: 0,
            tags: normalize_tags(tags),
        }
    }

    /// Returns a new value with `patch` applied; `self` is left untouched.
    pub fn patched(&self, patch: &IdeaPatch) -> Self {
        Self {
            id: self.id,
            title: patch.title.clone().unwrap_or_else(|| self.title.clone()),
            description: patch
                .description
                .clone()
                .unwrap_or_else(|| self.description.clone()),
            impact: patch.impact.map(clamp_score).unwrap_or(self.impact),
            effort: patch.effort.map(clamp_score).unwrap_or(self.effort),
            votes: self.votes,
            tags: patch
                .tags
                .as_deref()
                .map(normalize_tags)
                .unwrap_or_else(|| self.tags.clone()),
        }
    }

    /// Returns a new value with `delta` added to the vote count.
    pub fn voted(&self, delta: i64) -> Self {
        Self {
            votes: self.votes.saturating_add(delta),
            ..self.clone()
        }
    }

    /// Current quadrant position of this idea.
    pub fn position(&self) -> Position {
        Position {
            impact: self.impact,
            effort: self.effort,
        }
    }
}

/// Unchecked wire shape of `Idea`.
#[derive(Deserialize)]
struct IdeaRecord {
    id: IdeaId,
    title: String,
    description: String,
    impact: i64,
    effort: i64,
    votes: i64,
    #[serde(default)]
    tags: Vec<String>,
}

impl From<IdeaRecord> for Idea {
    fn from(record: IdeaRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            description: record.description,
            impact: clamp_score(record.impact),
            effort: clamp_score(record.effort),
            votes: record.votes,
            tags: normalize_tags(&record.tags),
        }
    }
}

/// Partial field replacement applied by `IdeaService::update_idea`.
///
/// `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdeaPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub impact: Option<i64>,
    pub effort: Option<i64>,
    pub tags: Option<Vec<String>>,
}

impl IdeaPatch {
    /// Patch that only moves an idea inside the quadrant.
    pub fn reposition(position: Position) -> Self {
        Self {
            impact: Some(i64::from(position.impact)),
            effort: Some(i64::from(position.effort)),
            ..Self::default()
        }
    }
}

/// Impact/effort pair in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub impact: Score,
    pub effort: Score,
}

/// Clamps an arbitrary integer into the `0..=100` score range.
pub fn clamp_score(value: i64) -> Score {
    // Lossless: the clamped value always fits into `u8`.
    value.clamp(i64::from(SCORE_MIN), i64::from(SCORE_MAX)) as Score
}

/// Normalizes one tag value; blank input yields `None`.
pub fn normalize_tag(tag: &str) -> Option<String> {
    let trimmed = tag.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Trims every tag and drops blank entries, preserving input order.
pub fn normalize_tags(tags: &[String]) -> Vec<String> {
    tags.iter().filter_map(|tag| normalize_tag(tag)).collect()
}

/// Splits comma-separated tag input into normalized tags.
pub fn parse_tag_input(raw: &str) -> Vec<String> {
    raw.split(TAG_INPUT_SEPARATOR)
        .filter_map(normalize_tag)
        .collect()
}
