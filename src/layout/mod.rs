//! Text fitting and pagination.
//!
//! This module holds the layout core:
//! - greedy word wrapping into fixed-width lines
//! - cheap height estimation for placement decisions
//! - height-bounded splitting of a text into fitted/overflow halves
//! - the paginator that distributes items across fixed-capacity pages

pub mod measure;
pub mod paginator;
pub mod wrap;

// Re-export main types
pub use measure::{estimate_height, estimate_text_height, split_to_fit};
pub use paginator::{item_height, paginate, Page, PlacedItem};
pub use wrap::{wrap_text, WrappedText};
