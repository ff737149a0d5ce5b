//! Height estimation and height-bounded text splitting.

use crate::config::LayoutConfig;

use super::wrap::wrap_text;

/// Estimated height of `line_count` lines at `line_height`.
pub fn estimate_height(line_count: usize, line_height: f32) -> f32 {
    line_count as f32 * line_height
}

/// Estimated height of a raw, not-yet-wrapped string.
///
/// The line count is approximated as `floor(chars / chars_per_line) + 1`
/// rather than re-wrapping. The approximation is deliberately cheap and can
/// disagree with [`wrap_text`] near line boundaries; placement decisions
/// tolerate the difference.
///
/// # Examples
///
/// ```
/// use deck_forge::config::LayoutConfig;
/// use deck_forge::layout::estimate_text_height;
///
/// let config = LayoutConfig::new().with_chars_per_line(50).with_line_height(1.0);
/// let text = "x".repeat(120);
/// assert_eq!(estimate_text_height(&text, &config), 3.0);
/// ```
pub fn estimate_text_height(text: &str, config: &LayoutConfig) -> f32 {
    let lines = text.chars().count() / config.chars_per_line + 1;
    estimate_height(lines, config.line_height)
}

/// Split `text` into a part that fits within `available_height` and the
/// overflow that does not.
///
/// The text is wrapped with the configured per-line budget, then lines are
/// accumulated in order while the running height stays within
/// `available_height`. The first line that would exceed the budget, and every
/// line after it, lands in the overflow. Both halves are space-joined and
/// trimmed; no content is dropped.
pub fn split_to_fit(text: &str, available_height: f32, config: &LayoutConfig) -> (String, String) {
    let mut fitted = String::new();
    let mut overflow = String::new();
    let mut used_height = 0.0f32;

    for line in wrap_text(text, config.chars_per_line) {
        if overflow.is_empty() && used_height + config.line_height <= available_height {
            if !fitted.is_empty() {
                fitted.push(' ');
            }
            fitted.push_str(&line);
            used_height += config.line_height;
        } else {
            if !overflow.is_empty() {
                overflow.push(' ');
            }
            overflow.push_str(&line);
        }
    }

    (fitted, overflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> LayoutConfig {
        LayoutConfig::new()
            .with_chars_per_line(10)
            .with_line_height(1.0)
    }

    #[test]
    fn test_estimate_height() {
        assert_eq!(estimate_height(3, 28.0), 84.0);
        assert_eq!(estimate_height(0, 28.0), 0.0);
    }

    #[test]
    fn test_estimate_text_height_approximation() {
        let config = LayoutConfig::new()
            .with_chars_per_line(50)
            .with_line_height(1.0);
        // 120 chars at 50 per line -> floor(120/50) + 1 = 3 lines.
        assert_eq!(estimate_text_height(&"x".repeat(120), &config), 3.0);
        // The approximation always charges at least one line, even for "".
        assert_eq!(estimate_text_height("", &config), 1.0);
    }

    #[test]
    fn test_estimator_may_disagree_with_wrapper() {
        // 10 single-char tokens wrap to one 19-char budget line, but the
        // estimator sees 19 chars -> floor(19/10) + 1 = 2 lines. Tolerated.
        let config = LayoutConfig::new()
            .with_chars_per_line(19)
            .with_line_height(1.0);
        let text = "a b c d e f g h i j";
        assert_eq!(wrap_text(text, config.chars_per_line).len(), 1);
        assert_eq!(estimate_text_height(text, &config), 2.0);
    }

    #[test]
    fn test_split_everything_fits() {
        let (fitted, overflow) = split_to_fit("alpha beta gamma", 5.0, &config());
        assert_eq!(fitted, "alpha beta gamma");
        assert!(overflow.is_empty());
    }

    #[test]
    fn test_split_nothing_fits() {
        let (fitted, overflow) = split_to_fit("alpha beta gamma", 0.5, &config());
        assert!(fitted.is_empty());
        assert_eq!(overflow, "alpha beta gamma");
    }

    #[test]
    fn test_split_boundary() {
        // Two wrapped lines, room for exactly one.
        let (fitted, overflow) = split_to_fit("alpha beta gamma", 1.0, &config());
        assert_eq!(fitted, "alpha beta");
        assert_eq!(overflow, "gamma");
    }

    #[test]
    fn test_split_preserves_all_content() {
        let text = "one two three four five six seven eight nine ten";
        for budget in [0.0, 1.0, 2.0, 3.0, 100.0] {
            let (fitted, overflow) = split_to_fit(text, budget, &config());
            let rejoined = if overflow.is_empty() {
                fitted.clone()
            } else if fitted.is_empty() {
                overflow.clone()
            } else {
                format!("{} {}", fitted, overflow)
            };
            let normalized: Vec<&str> = rejoined.split_whitespace().collect();
            let expected: Vec<&str> = text.split_whitespace().collect();
            assert_eq!(normalized, expected, "budget {}", budget);
        }
    }

    #[test]
    fn test_split_empty_input() {
        let (fitted, overflow) = split_to_fit("", 10.0, &config());
        assert!(fitted.is_empty());
        assert!(overflow.is_empty());
    }
}
