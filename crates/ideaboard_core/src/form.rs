//! Add-idea form and modal state.
//!
//! # Responsibility
//! - Hold controlled field values for the add-idea dialog.
//! - Enforce required title/description on submit.
//! - Reset to defaults after submit or dismissal.
//!
//! # Invariants
//! - Slider values stay within `0..=100`.
//! - A rejected submit leaves every field untouched.

use crate::model::idea::{clamp_score, parse_tag_input, Score};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Initial slider value for impact and effort.
pub const DEFAULT_SCORE: Score = 50;

/// Submit-time validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    MissingTitle,
    MissingDescription,
}

impl Display for FormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingTitle => write!(f, "title is required"),
            Self::MissingDescription => write!(f, "description is required"),
        }
    }
}

impl Error for FormError {}

/// Validated form output, ready for `IdeaService::create_idea`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdeaDraft {
    pub title: String,
    pub description: String,
    pub impact: Score,
    pub effort: Score,
    pub tags: Vec<String>,
}

/// Controlled add-idea form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdeaForm {
    pub title: String,
    pub description: String,
    impact: Score,
    effort: Score,
    /// Raw comma-separated tag input.
    pub tags_text: String,
}

impl Default for IdeaForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            impact: DEFAULT_SCORE,
            effort: DEFAULT_SCORE,
            tags_text: String::new(),
        }
    }
}

impl IdeaForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn impact(&self) -> Score {
        self.impact
    }

    pub fn effort(&self) -> Score {
        self.effort
    }

    pub fn set_impact(&mut self, value: i64) {
        self.impact = clamp_score(value);
    }

    pub fn set_effort(&mut self, value: i64) {
        self.effort = clamp_score(value);
    }

    /// Validates fields, returns the draft and resets the form.
    pub fn submit(&mut self) -> Result<IdeaDraft, FormError> {
        if self.title.trim().is_empty() {
            return Err(FormError::MissingTitle);
        }
        if self.description.trim().is_empty() {
            return Err(FormError::MissingDescription);
        }

        let submitted = std::mem::take(self);
        Ok(IdeaDraft {
            title: submitted.title,
            description: submitted.description,
            impact: submitted.impact,
            effort: submitted.effort,
            tags: parse_tag_input(&submitted.tags_text),
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Add-idea dialog: open flag plus its form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdeaModal {
    is_open: bool,
    pub form: IdeaForm,
}

impl IdeaModal {
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn open(&mut self) {
        self.is_open = true;
    }

    /// Dismisses the dialog and discards unsaved input.
    pub fn close(&mut self) {
        self.is_open = false;
        self.form.reset();
    }

    /// Submits the form; closes the dialog on success.
    pub fn submit(&mut self) -> Result<IdeaDraft, FormError> {
        let draft = self.form.submit()?;
        self.is_open = false;
        Ok(draft)
    }
}
