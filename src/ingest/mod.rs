//! Ingestion of structured content from the upstream structuring step.
//!
//! Covers the data-handling half of the collaboration: cleaning the raw
//! response, decoding it into typed records, and bounding the retries around
//! the external call. The call itself — prompts, transport, authentication —
//! is the caller's, behind the [`Structurer`] trait.

pub mod payload;
pub mod retry;

// Re-export main types
pub use payload::{clean_json_payload, parse_questions, parse_sections};
pub use retry::{fetch_questions, fetch_sections, run_with_retries, RetryPolicy, Structurer};
