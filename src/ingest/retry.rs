//! Bounded retry around the external structuring call.
//!
//! The structuring collaborator (an OCR/vision model behind a network call)
//! fails transiently and returns malformed payloads often enough that every
//! call site wants the same loop: try, log, try again, give up loudly. The
//! loop lives here with an explicit attempt budget and a terminal error; an
//! empty-but-valid structured result is success, not failure.

use crate::elements::{Question, Section};
use crate::error::{Error, Result};

use super::payload::{parse_questions, parse_sections};

/// The external call that reshapes extracted text into a structured payload.
///
/// Implementations wrap whatever network client performs the call; this crate
/// only consumes its raw text response.
pub trait Structurer {
    /// Structure `text`, returning the collaborator's raw response.
    fn structure(&mut self, text: &str) -> Result<String>;
}

/// Attempt budget for a structuring call.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Maximum number of attempts before the terminal failure. Never
    /// interpreted as fewer than one.
    pub max_attempts: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self { max_attempts: 3 }
    }
}

impl RetryPolicy {
    /// Create a policy with the given attempt budget.
    pub fn new(max_attempts: u32) -> Self {
        Self { max_attempts }
    }
}

/// Run `op` until it succeeds or the policy's attempts are exhausted.
///
/// Each failure is logged with its attempt number; the terminal error carries
/// the attempt count and the last failure message.
pub fn run_with_retries<T>(
    policy: RetryPolicy,
    what: &str,
    mut op: impl FnMut() -> Result<T>,
) -> Result<T> {
    let attempts = policy.max_attempts.max(1);
    let mut last_error = String::new();
    for attempt in 1..=attempts {
        match op() {
            Ok(value) => return Ok(value),
            Err(err) => {
                log::warn!("{} attempt {}/{} failed: {}", what, attempt, attempts, err);
                last_error = err.to_string();
            }
        }
    }
    Err(Error::RetriesExhausted {
        attempts,
        last_error,
    })
}

/// Fetch bullet-point sections for `text`, retrying per `policy`.
pub fn fetch_sections<S: Structurer>(
    structurer: &mut S,
    text: &str,
    policy: RetryPolicy,
) -> Result<Vec<Section>> {
    run_with_retries(policy, "section structuring", || {
        let raw = structurer.structure(text)?;
        parse_sections(&raw)
    })
}

/// Fetch question records for `text`, retrying per `policy`.
pub fn fetch_questions<S: Structurer>(
    structurer: &mut S,
    text: &str,
    policy: RetryPolicy,
) -> Result<Vec<Question>> {
    run_with_retries(policy, "question structuring", || {
        let raw = structurer.structure(text)?;
        parse_questions(&raw)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Structurer that fails a fixed number of times, then answers.
    struct Flaky {
        failures_left: u32,
        answer: String,
        calls: u32,
    }

    impl Flaky {
        fn new(failures: u32, answer: &str) -> Self {
            Self {
                failures_left: failures,
                answer: answer.to_string(),
                calls: 0,
            }
        }
    }

    impl Structurer for Flaky {
        fn structure(&mut self, _text: &str) -> Result<String> {
            self.calls += 1;
            if self.failures_left > 0 {
                self.failures_left -= 1;
                return Err(Error::InvalidPayload("transient".to_string()));
            }
            Ok(self.answer.clone())
        }
    }

    #[test]
    fn test_succeeds_first_try() {
        let mut structurer = Flaky::new(0, r#"[{"points": ["a"]}]"#);
        let sections = fetch_sections(&mut structurer, "text", RetryPolicy::default()).unwrap();
        assert_eq!(sections.len(), 1);
        assert_eq!(structurer.calls, 1);
    }

    #[test]
    fn test_recovers_within_budget() {
        let mut structurer = Flaky::new(2, r#"[{"points": ["a"]}]"#);
        let sections = fetch_sections(&mut structurer, "text", RetryPolicy::new(3)).unwrap();
        assert_eq!(sections.len(), 1);
        assert_eq!(structurer.calls, 3);
    }

    #[test]
    fn test_exhaustion_is_terminal() {
        let mut structurer = Flaky::new(10, "[]");
        let err = fetch_sections(&mut structurer, "text", RetryPolicy::new(3)).unwrap_err();
        assert!(matches!(
            err,
            Error::RetriesExhausted { attempts: 3, .. }
        ));
        assert_eq!(structurer.calls, 3);
    }

    #[test]
    fn test_malformed_payload_consumes_attempts() {
        let mut structurer = Flaky::new(0, "not json at all");
        let err = fetch_questions(&mut structurer, "text", RetryPolicy::new(2)).unwrap_err();
        assert!(matches!(err, Error::RetriesExhausted { attempts: 2, .. }));
        assert_eq!(structurer.calls, 2);
    }

    #[test]
    fn test_empty_result_is_success() {
        let mut structurer = Flaky::new(0, "[]");
        let sections = fetch_sections(&mut structurer, "text", RetryPolicy::default()).unwrap();
        assert!(sections.is_empty());
    }

    #[test]
    fn test_zero_attempt_policy_still_tries_once() {
        let mut structurer = Flaky::new(0, "[]");
        let result = fetch_sections(&mut structurer, "text", RetryPolicy::new(0));
        assert!(result.is_ok());
        assert_eq!(structurer.calls, 1);
    }
}
