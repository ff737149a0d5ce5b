//! # Deck Forge
//!
//! Slide deck layout engine: wrap, paginate, and style structured lesson
//! content into renderable deck models.
//!
//! ## Core Features
//!
//! ### Layout
//! - **Word Wrapping**: greedy fixed-width wrapping by whitespace tokens
//! - **Height Estimation**: cheap line-count approximation for placement
//! - **Fit Splitting**: height-bounded fitted/overflow text splitting
//! - **Pagination**: fixed-capacity pages, whole-item placement, optional
//!   splitting of items taller than a full page
//!
//! ### Deck Building
//! - **Fluent Builder**: metadata, theme, and layout config chained onto
//!   [`deck::DeckBuilder`]
//! - **Slide Recipes**: flowing bullet-point slides, one-slide-per-question
//!   MCQ slides, three-segment navigation bar
//! - **Themes**: immutable role-to-style maps; visual variants swap themes,
//!   never layout logic
//!
//! ### Ingestion
//! - **Payload Cleanup**: code-fence stripping and embedded-array recovery
//!   from structuring-call responses
//! - **Typed Records**: serde decoding into sections and question records
//! - **Bounded Retry**: explicit attempt budget with a terminal error
//!
//! ## Architecture
//! - Pure, synchronous layout core: no I/O, no locks, no global state
//! - The deck model is the boundary: rendering it to an actual slide file is
//!   a downstream concern
//!
//! ## Quick Start
//!
//! ```
//! use deck_forge::deck::{DeckBuilder, DeckMetadata};
//! use deck_forge::elements::Section;
//! use deck_forge::style::Theme;
//!
//! let sections = vec![Section::new(
//!     Some("Ratio".to_string()),
//!     vec![
//!         "A ratio compares two quantities of the same unit.".to_string(),
//!         "Multiplying both terms by the same number changes nothing.".to_string(),
//!     ],
//! )];
//!
//! let deck = DeckBuilder::new()
//!     .metadata(DeckMetadata::new().title("Academy").topic("Ratio"))
//!     .theme(Theme::academy())
//!     .build_points(&sections)
//!     .unwrap();
//!
//! assert!(!deck.is_empty());
//! ```

#![warn(missing_docs)]

// Error handling
pub mod error;

// Layout core
pub mod config;
pub mod geometry;
pub mod layout;

// Content model
pub mod elements;

// Styling
pub mod style;

// Deck building
pub mod deck;

// Structured payload ingestion
pub mod ingest;

// Re-exports
pub use config::LayoutConfig;
pub use deck::{Deck, DeckBuilder, DeckMetadata, Slide, TextBox};
pub use elements::{Item, Question, Section};
pub use error::{Error, Result};
pub use layout::{paginate, split_to_fit, wrap_text, Page};
pub use style::{Role, TextStyle, Theme};

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        // VERSION is populated from CARGO_PKG_VERSION at compile time
        assert!(VERSION.starts_with("0."));
    }

    #[test]
    fn test_name() {
        assert_eq!(NAME, "deck_forge");
    }
}
