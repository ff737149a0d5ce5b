//! Deck output model.
//!
//! A [`Deck`] is the fully laid-out result handed to a downstream renderer:
//! slides holding positioned, styled text boxes. Box positions, fonts and
//! colors are resolved here; drawing them is the renderer's job.

pub mod builder;
pub mod nav;

use chrono::{DateTime, Local};

use crate::geometry::Rect;
use crate::style::{Color, Role, TextStyle};

// Re-export main types
pub use builder::{DeckBuilder, DeckMetadata};
pub use nav::{NavBar, NavSegment, NAV_HEIGHT};

/// Slide width in points (14 inches).
pub const SLIDE_WIDTH: f32 = 1008.0;

/// Slide height in points (7.5 inches).
pub const SLIDE_HEIGHT: f32 = 540.0;

/// A positioned, styled run of wrapped text lines.
#[derive(Debug, Clone)]
pub struct TextBox {
    /// Semantic role the box plays on the slide.
    pub role: Role,
    /// Position and extent in slide space.
    pub rect: Rect,
    /// Wrapped lines in order.
    pub lines: Vec<String>,
    /// Resolved style.
    pub style: TextStyle,
}

/// One rendered slide.
#[derive(Debug, Clone)]
pub struct Slide {
    /// 1-based slide number.
    pub number: usize,
    /// Background fill.
    pub background: Color,
    /// Navigation bar across the top.
    pub nav: NavBar,
    /// Optional main title box.
    pub title: Option<TextBox>,
    /// Content boxes in reading order.
    pub boxes: Vec<TextBox>,
}

/// A complete laid-out deck.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Deck metadata (title, topic, presenter).
    pub metadata: DeckMetadata,
    /// When the deck model was built.
    pub created: DateTime<Local>,
    /// Slides in order.
    pub slides: Vec<Slide>,
}

impl Deck {
    /// Whether no slide was produced.
    ///
    /// Empty input content is reported this way rather than as an error; the
    /// caller decides whether an empty deck is worth surfacing to a user.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Timestamped filename stem for the rendered output.
    ///
    /// # Examples
    ///
    /// ```
    /// use deck_forge::deck::DeckBuilder;
    ///
    /// let deck = DeckBuilder::new().build_points(&[]).unwrap();
    /// assert!(deck.suggested_filename().starts_with("deck_"));
    /// ```
    pub fn suggested_filename(&self) -> String {
        format!("deck_{}", self.created.format("%Y%m%d_%H%M%S"))
    }
}
