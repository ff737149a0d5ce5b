//! Style configuration for deck rendering.
//!
//! A [`Theme`] maps every semantic role on a slide (navigation segments,
//! question text, options, bullet points, ...) to an immutable [`TextStyle`].
//! The theme is passed into the deck builder as a value; there is no
//! module-level styling state. Visual variants of the same deck differ only
//! in their theme, never in layout logic.

/// RGB color representation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel (0.0 - 1.0)
    pub r: f32,
    /// Green channel (0.0 - 1.0)
    pub g: f32,
    /// Blue channel (0.0 - 1.0)
    pub b: f32,
}

impl Color {
    /// Create a new color from channel values in `0.0..=1.0`.
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create a color from 8-bit channel values.
    ///
    /// # Examples
    ///
    /// ```
    /// use deck_forge::style::Color;
    ///
    /// let red = Color::from_rgb8(252, 5, 5);
    /// assert!(red.r > 0.98);
    /// ```
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Create a black color.
    pub fn black() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Create a white color.
    pub fn white() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }
}

/// Horizontal text alignment inside a box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Alignment {
    /// Align to the left edge
    #[default]
    Left,
    /// Center horizontally
    Center,
    /// Align to the right edge
    Right,
}

/// Semantic role of a text box on a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Left navigation segment (deck title)
    NavTitle,
    /// Middle navigation segment (topic)
    NavTopic,
    /// Right navigation segment (presenter credit)
    NavPresenter,
    /// Main title of a points slide
    SlideTitle,
    /// Question number badge
    QuestionNumber,
    /// Question text
    Question,
    /// One answer option
    OptionText,
    /// Revealed answer text
    Answer,
    /// One bullet point
    Point,
}

/// Style attributes for one semantic role.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// Font name
    pub font_name: String,
    /// Font size in points
    pub font_size: f32,
    /// Whether the text is bold
    pub bold: bool,
    /// Text color
    pub color: Color,
    /// Background fill behind the box, if any
    pub fill: Option<Color>,
    /// Horizontal alignment
    pub alignment: Alignment,
}

impl TextStyle {
    /// Create a plain style in the given font and size.
    pub fn new(font_name: impl Into<String>, font_size: f32) -> Self {
        Self {
            font_name: font_name.into(),
            font_size,
            bold: false,
            color: Color::white(),
            fill: None,
            alignment: Alignment::Left,
        }
    }

    /// Set bold weight.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Set the text color.
    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set a background fill.
    pub fn fill(mut self, fill: Color) -> Self {
        self.fill = Some(fill);
        self
    }

    /// Set the alignment.
    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Copy of this style at a different size.
    pub fn at_size(&self, font_size: f32) -> Self {
        Self {
            font_size,
            ..self.clone()
        }
    }
}

/// A complete role-to-style mapping plus deck-level attributes.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Slide background color.
    pub background: Color,
    /// Glyph prefixed to each bullet point.
    pub bullet: String,
    nav_title: TextStyle,
    nav_topic: TextStyle,
    nav_presenter: TextStyle,
    slide_title: TextStyle,
    question_number: TextStyle,
    question: TextStyle,
    option: TextStyle,
    answer: TextStyle,
    point: TextStyle,
}

impl Theme {
    /// The classic academy look: black slides, red/yellow navigation bar,
    /// yellow question text, white options.
    pub fn academy() -> Self {
        let red = Color::from_rgb8(252, 5, 5);
        let yellow = Color::from_rgb8(255, 255, 0);
        Self {
            background: Color::black(),
            bullet: "\u{27a4}".to_string(),
            nav_title: TextStyle::new("Calibri", 16.0).bold().fill(red),
            nav_topic: TextStyle::new("Calibri", 16.0)
                .bold()
                .color(Color::black())
                .fill(yellow)
                .align(Alignment::Center),
            nav_presenter: TextStyle::new("Calibri", 16.0).bold().fill(red),
            slide_title: TextStyle::new("Calibri", 32.0)
                .bold()
                .align(Alignment::Center),
            question_number: TextStyle::new("Calibri", 30.0)
                .bold()
                .fill(Color::from_rgb8(255, 0, 0))
                .align(Alignment::Right),
            question: TextStyle::new("Calibri", 36.0).bold().color(yellow),
            option: TextStyle::new("Calibri", 18.0),
            answer: TextStyle::new("Calibri", 22.0).color(Color::from_rgb8(0, 255, 0)),
            point: TextStyle::new("Mangal", 28.0).color(yellow),
        }
    }

    /// Devanagari-first lecture variant: same palette, Mangal throughout,
    /// larger navigation text.
    pub fn lecture() -> Self {
        let mut theme = Self::academy();
        for style in [
            &mut theme.nav_title,
            &mut theme.nav_topic,
            &mut theme.nav_presenter,
            &mut theme.slide_title,
            &mut theme.question,
            &mut theme.option,
            &mut theme.answer,
        ] {
            style.font_name = "Mangal".to_string();
        }
        theme.nav_title.font_size = 20.0;
        theme.nav_topic.font_size = 20.0;
        theme.nav_presenter.font_size = 20.0;
        theme
    }

    /// Style for a semantic role.
    pub fn style(&self, role: Role) -> &TextStyle {
        match role {
            Role::NavTitle => &self.nav_title,
            Role::NavTopic => &self.nav_topic,
            Role::NavPresenter => &self.nav_presenter,
            Role::SlideTitle => &self.slide_title,
            Role::QuestionNumber => &self.question_number,
            Role::Question => &self.question,
            Role::OptionText => &self.option,
            Role::Answer => &self.answer,
            Role::Point => &self.point,
        }
    }

    /// Replace the style for one role.
    pub fn with_style(mut self, role: Role, style: TextStyle) -> Self {
        match role {
            Role::NavTitle => self.nav_title = style,
            Role::NavTopic => self.nav_topic = style,
            Role::NavPresenter => self.nav_presenter = style,
            Role::SlideTitle => self.slide_title = style,
            Role::QuestionNumber => self.question_number = style,
            Role::Question => self.question = style,
            Role::OptionText => self.option = style,
            Role::Answer => self.answer = style,
            Role::Point => self.point = style,
        }
        self
    }

    /// Set the bullet glyph.
    pub fn with_bullet(mut self, bullet: impl Into<String>) -> Self {
        self.bullet = bullet.into();
        self
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::academy()
    }
}

/// Font size stepped down by text length.
///
/// Long question texts render at smaller sizes so they stay inside their box:
/// under 50 characters uses `max_size`, then 30/24/20 pt tiers, and anything
/// of 300 characters or more uses `min_size`. Tier values are clamped into
/// `min_size..=max_size`.
pub fn scaled_size(text: &str, max_size: f32, min_size: f32) -> f32 {
    let length = text.chars().count();
    let size = match length {
        0..=49 => max_size,
        50..=99 => 30.0,
        100..=199 => 24.0,
        200..=299 => 20.0,
        _ => min_size,
    };
    size.max(min_size).min(max_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_rgb8() {
        let white = Color::from_rgb8(255, 255, 255);
        assert_eq!(white, Color::white());
        let black = Color::from_rgb8(0, 0, 0);
        assert_eq!(black, Color::black());
    }

    #[test]
    fn test_style_builder() {
        let style = TextStyle::new("Calibri", 18.0)
            .bold()
            .color(Color::black())
            .fill(Color::white())
            .align(Alignment::Right);
        assert!(style.bold);
        assert_eq!(style.alignment, Alignment::Right);
        assert_eq!(style.fill, Some(Color::white()));
    }

    #[test]
    fn test_at_size_keeps_other_attributes() {
        let style = TextStyle::new("Calibri", 36.0).bold();
        let smaller = style.at_size(20.0);
        assert_eq!(smaller.font_size, 20.0);
        assert!(smaller.bold);
        assert_eq!(smaller.font_name, "Calibri");
    }

    #[test]
    fn test_theme_role_lookup() {
        let theme = Theme::academy();
        assert_eq!(theme.style(Role::Question).font_size, 36.0);
        assert_eq!(theme.style(Role::OptionText).font_size, 18.0);
        assert!(theme.style(Role::NavTitle).bold);
    }

    #[test]
    fn test_theme_override() {
        let theme =
            Theme::academy().with_style(Role::OptionText, TextStyle::new("Helvetica", 14.0));
        assert_eq!(theme.style(Role::OptionText).font_name, "Helvetica");
        assert_eq!(theme.style(Role::OptionText).font_size, 14.0);
    }

    #[test]
    fn test_lecture_theme_fonts() {
        let theme = Theme::lecture();
        assert_eq!(theme.style(Role::Question).font_name, "Mangal");
        assert_eq!(theme.style(Role::NavTitle).font_size, 20.0);
        // The number badge keeps the academy font.
        assert_eq!(theme.style(Role::QuestionNumber).font_name, "Calibri");
    }

    #[test]
    fn test_scaled_size_tiers() {
        assert_eq!(scaled_size(&"x".repeat(10), 36.0, 16.0), 36.0);
        assert_eq!(scaled_size(&"x".repeat(60), 36.0, 16.0), 30.0);
        assert_eq!(scaled_size(&"x".repeat(150), 36.0, 16.0), 24.0);
        assert_eq!(scaled_size(&"x".repeat(250), 36.0, 16.0), 20.0);
        assert_eq!(scaled_size(&"x".repeat(400), 36.0, 16.0), 16.0);
    }

    #[test]
    fn test_scaled_size_clamps_to_bounds() {
        // A 60-char text would use the 30 pt tier, clamped down to max 24.
        assert_eq!(scaled_size(&"x".repeat(60), 24.0, 12.0), 24.0);
    }
}
