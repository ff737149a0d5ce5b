//! Content model for deck building.
//!
//! These types mirror the wire shapes the upstream structuring step emits:
//! bullet-point sections as `{"title": ..., "points": [...]}` and
//! multiple-choice records as `{"Question": ..., "Subpoints": [...],
//! "Options": [...]}`. They are immutable inputs to the layout core, which
//! only ever computes wrapped or split views of them.

use serde::{Deserialize, Serialize};

/// One unit of content to place on a page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Item {
    /// A plain bullet point.
    Point(String),
    /// A question with its options.
    Question(Question),
}

impl Item {
    /// Whether the item carries no renderable text.
    pub fn is_blank(&self) -> bool {
        match self {
            Item::Point(text) => text.trim().is_empty(),
            Item::Question(question) => question.text.trim().is_empty(),
        }
    }
}

/// A multiple-choice question record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Full question text.
    #[serde(rename = "Question")]
    pub text: String,

    /// Numbered statements the question refers to, in order.
    #[serde(rename = "Subpoints", default)]
    pub subpoints: Vec<String>,

    /// Answer options in presentation order.
    #[serde(rename = "Options", default)]
    pub options: Vec<String>,
}

impl Question {
    /// Create a question with no subpoints or options.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            subpoints: Vec::new(),
            options: Vec::new(),
        }
    }

    /// Set the subpoints.
    pub fn with_subpoints(mut self, subpoints: Vec<String>) -> Self {
        self.subpoints = subpoints;
        self
    }

    /// Set the options.
    pub fn with_options(mut self, options: Vec<String>) -> Self {
        self.options = options;
        self
    }
}

/// A titled group of bullet points, as extracted from one source image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    /// Section title, when the source carried one.
    #[serde(default)]
    pub title: Option<String>,

    /// Bullet points in reading order.
    #[serde(default)]
    pub points: Vec<String>,
}

impl Section {
    /// Create a section from its points.
    pub fn new(title: Option<String>, points: Vec<String>) -> Self {
        Self { title, points }
    }

    /// Whether the section has no non-blank points.
    pub fn is_empty(&self) -> bool {
        self.points.iter().all(|p| p.trim().is_empty())
    }
}
