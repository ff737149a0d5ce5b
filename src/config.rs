//! Layout configuration.
//!
//! All pagination constants live here as one immutable value passed into the
//! paginator and deck builder, never as module-level state. Defaults reproduce
//! the measurements the layout heuristics were tuned against: a 14×7.5 inch
//! slide with a 5 inch content box, 50 characters per wrapped line, and a
//! 28 pt line height.

use crate::error::{Error, Result};

/// Configuration for text wrapping and pagination.
///
/// # Examples
///
/// ```
/// use deck_forge::config::LayoutConfig;
///
/// let config = LayoutConfig::new()
///     .with_chars_per_line(60)
///     .with_box_capacity(300.0);
/// assert_eq!(config.chars_per_line, 60);
/// ```
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Approximate character budget per wrapped line.
    pub chars_per_line: usize,

    /// Vertical extent of one line, in points.
    pub line_height: f32,

    /// Vertical capacity of one page's content box, in points.
    pub box_capacity: f32,

    /// Extra vertical spacing charged per placed item, in points.
    pub item_padding: f32,

    /// Spacing between consecutive options of a question, in points.
    pub option_gap: f32,

    /// Split items taller than a full empty page across pages.
    ///
    /// Off by default: an oversized item is placed whole on its own page and
    /// the page overflows silently. When enabled, only items exceeding the
    /// full box capacity are split; items that merely fail to fit the
    /// remainder of a partially used page still move whole to the next page.
    pub split_oversized: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self {
            chars_per_line: 50,
            line_height: 28.0,
            box_capacity: 360.0, // 5 inches
            item_padding: 14.4,  // 0.2 inches
            option_gap: 10.0,
            split_oversized: false,
        }
    }

    /// Set the per-line character budget.
    pub fn with_chars_per_line(mut self, chars: usize) -> Self {
        self.chars_per_line = chars;
        self
    }

    /// Set the line height in points.
    pub fn with_line_height(mut self, height: f32) -> Self {
        self.line_height = height;
        self
    }

    /// Set the per-page content capacity in points.
    pub fn with_box_capacity(mut self, capacity: f32) -> Self {
        self.box_capacity = capacity;
        self
    }

    /// Set the per-item padding in points.
    pub fn with_item_padding(mut self, padding: f32) -> Self {
        self.item_padding = padding;
        self
    }

    /// Set the spacing between question options in points.
    pub fn with_option_gap(mut self, gap: f32) -> Self {
        self.option_gap = gap;
        self
    }

    /// Enable splitting of items taller than a full page.
    pub fn with_split_oversized(mut self, enable: bool) -> Self {
        self.split_oversized = enable;
        self
    }

    /// Check the configuration for values the layout math cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.chars_per_line == 0 {
            return Err(Error::InvalidConfig(
                "chars_per_line must be at least 1".to_string(),
            ));
        }
        if self.line_height <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "line_height must be positive, got {}",
                self.line_height
            )));
        }
        if self.box_capacity <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "box_capacity must be positive, got {}",
                self.box_capacity
            )));
        }
        if self.item_padding < 0.0 || self.option_gap < 0.0 {
            return Err(Error::InvalidConfig(
                "padding values must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LayoutConfig::default();
        assert_eq!(config.chars_per_line, 50);
        assert_eq!(config.line_height, 28.0);
        assert_eq!(config.box_capacity, 360.0);
        assert!(!config.split_oversized);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_methods() {
        let config = LayoutConfig::new()
            .with_chars_per_line(40)
            .with_line_height(20.0)
            .with_box_capacity(200.0)
            .with_item_padding(5.0)
            .with_option_gap(4.0)
            .with_split_oversized(true);

        assert_eq!(config.chars_per_line, 40);
        assert_eq!(config.line_height, 20.0);
        assert_eq!(config.box_capacity, 200.0);
        assert_eq!(config.item_padding, 5.0);
        assert_eq!(config.option_gap, 4.0);
        assert!(config.split_oversized);
    }

    #[test]
    fn test_validate_rejects_zero_char_budget() {
        let config = LayoutConfig::new().with_chars_per_line(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_nonpositive_heights() {
        assert!(LayoutConfig::new().with_line_height(0.0).validate().is_err());
        assert!(LayoutConfig::new()
            .with_box_capacity(-1.0)
            .validate()
            .is_err());
        assert!(LayoutConfig::new()
            .with_item_padding(-0.1)
            .validate()
            .is_err());
    }
}
