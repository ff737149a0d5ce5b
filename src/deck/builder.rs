//! High-level deck builder with fluent API.
//!
//! Wires the paginator, theme, and slide geometry together: bullet-point
//! sections flow across as many slides as their height demands, while each
//! question gets a slide of its own.

use chrono::Local;

use crate::config::LayoutConfig;
use crate::elements::{Item, Question, Section};
use crate::error::Result;
use crate::geometry::{inches, Rect};
use crate::layout::{paginate, WrappedText};
use crate::style::{scaled_size, Role, Theme};

use super::nav::NavBar;
use super::{Deck, Slide, TextBox, SLIDE_HEIGHT};

/// Smallest font size the length-scaled question text may reach.
const QUESTION_MIN_FONT: f32 = 16.0;

/// Deck-level metadata shown in the navigation bar.
///
/// # Example
///
/// ```
/// use deck_forge::deck::DeckMetadata;
///
/// let meta = DeckMetadata::new()
///     .title("NEXT LEVEL ACADEMY")
///     .topic("Daily Current Affairs")
///     .presenter("R K Gupta");
/// assert_eq!(meta.topic, "Daily Current Affairs");
/// ```
#[derive(Debug, Clone, Default)]
pub struct DeckMetadata {
    /// Deck title (left navigation segment).
    pub title: String,
    /// Topic line (middle navigation segment).
    pub topic: String,
    /// Presenter name (right navigation segment, credited as "BY: ...").
    pub presenter: String,
}

impl DeckMetadata {
    /// Create empty metadata.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the deck title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the topic line.
    pub fn topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = topic.into();
        self
    }

    /// Set the presenter name.
    pub fn presenter(mut self, presenter: impl Into<String>) -> Self {
        self.presenter = presenter.into();
        self
    }
}

/// Builds laid-out decks from structured content.
///
/// # Example
///
/// ```
/// use deck_forge::deck::{DeckBuilder, DeckMetadata};
/// use deck_forge::elements::Section;
///
/// let sections = vec![Section::new(
///     Some("Ratio".to_string()),
///     vec!["A ratio compares two quantities of the same unit.".to_string()],
/// )];
/// let deck = DeckBuilder::new()
///     .metadata(DeckMetadata::new().title("Academy").topic("Ratio"))
///     .build_points(&sections)
///     .unwrap();
/// assert_eq!(deck.slides.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct DeckBuilder {
    metadata: DeckMetadata,
    theme: Theme,
    config: LayoutConfig,
}

impl DeckBuilder {
    /// Create a builder with default metadata, theme, and layout config.
    pub fn new() -> Self {
        Self {
            metadata: DeckMetadata::default(),
            theme: Theme::default(),
            config: LayoutConfig::default(),
        }
    }

    /// Set the deck metadata.
    pub fn metadata(mut self, metadata: DeckMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Set the theme.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Set the layout configuration.
    pub fn config(mut self, config: LayoutConfig) -> Self {
        self.config = config;
        self
    }

    /// Build a bullet-point deck.
    ///
    /// Points of each section flow across slides via the paginator; every
    /// produced slide repeats the section title. Sections without any
    /// non-blank point are skipped. Content that produces no slides yields an
    /// empty deck, not an error.
    pub fn build_points(&self, sections: &[Section]) -> Result<Deck> {
        self.config.validate()?;

        let mut slides = Vec::new();
        for section in sections {
            if section.is_empty() {
                log::warn!("skipping section {:?}: no points", section.title);
                continue;
            }

            let items: Vec<Item> = section
                .points
                .iter()
                .filter(|point| !point.trim().is_empty())
                .map(|point| Item::Point(format!("{} {}", self.theme.bullet, point.trim())))
                .collect();

            for page in paginate(&items, &self.config) {
                let mut slide = self.new_slide(slides.len() + 1);
                if let Some(title) = &section.title {
                    slide.title = Some(TextBox {
                        role: Role::SlideTitle,
                        rect: Rect::new(inches(1.0), inches(0.75), inches(12.0), inches(0.8)),
                        lines: vec![title.clone()],
                        style: self.theme.style(Role::SlideTitle).clone(),
                    });
                }

                let mut cursor = inches(1.75);
                for placed in page.items() {
                    let Item::Point(text) = &placed.item else {
                        continue;
                    };
                    let wrapped = WrappedText::new(
                        text,
                        self.config.chars_per_line,
                        self.config.line_height,
                    );
                    slide.boxes.push(TextBox {
                        role: Role::Point,
                        rect: Rect::new(inches(1.0), cursor, inches(12.0), placed.height),
                        lines: wrapped.lines,
                        style: self.theme.style(Role::Point).clone(),
                    });
                    cursor += placed.height;
                }
                slides.push(slide);
            }
        }

        if slides.is_empty() {
            log::info!("no sections produced any slides");
        }
        Ok(self.finish(slides))
    }

    /// Build a question deck: one slide per question.
    ///
    /// Blank questions are skipped. The question number badge keeps the
    /// question's position in the input, even across skips.
    pub fn build_questions(&self, questions: &[Question]) -> Result<Deck> {
        self.config.validate()?;

        let mut slides = Vec::new();
        for (index, question) in questions.iter().enumerate() {
            if question.text.trim().is_empty() {
                log::warn!("skipping question {}: empty text", index + 1);
                continue;
            }
            slides.push(self.question_slide(slides.len() + 1, index + 1, question));
        }
        Ok(self.finish(slides))
    }

    fn finish(&self, slides: Vec<Slide>) -> Deck {
        Deck {
            metadata: self.metadata.clone(),
            created: Local::now(),
            slides,
        }
    }

    fn new_slide(&self, number: usize) -> Slide {
        Slide {
            number,
            background: self.theme.background,
            nav: NavBar::build(&self.metadata, &self.theme),
            title: None,
            boxes: Vec::new(),
        }
    }

    fn question_slide(&self, slide_number: usize, question_number: usize, question: &Question) -> Slide {
        let config = &self.config;
        let mut slide = self.new_slide(slide_number);

        // Number badge to the left of the question box.
        slide.boxes.push(TextBox {
            role: Role::QuestionNumber,
            rect: Rect::new(inches(6.3), inches(1.3), inches(0.7), inches(0.9)),
            lines: vec![format!("{}.", question_number)],
            style: self.theme.style(Role::QuestionNumber).clone(),
        });

        // Question box sized from its wrapped text; long texts step the font
        // size down instead of growing the box past the slide.
        let base_style = self.theme.style(Role::Question);
        let question_style = base_style.at_size(scaled_size(
            &question.text,
            base_style.font_size,
            QUESTION_MIN_FONT,
        ));
        let wrapped = WrappedText::new(&question.text, config.chars_per_line, config.line_height);
        let mut lines = wrapped.lines;
        let mut text_height = wrapped.height;
        for subpoint in &question.subpoints {
            let wrapped = WrappedText::new(subpoint, config.chars_per_line, config.line_height);
            text_height += wrapped.height;
            lines.extend(wrapped.lines);
        }
        let question_rect = Rect::new(
            inches(7.5),
            inches(1.0),
            inches(6.3),
            text_height + config.item_padding,
        );
        slide.boxes.push(TextBox {
            role: Role::Question,
            rect: question_rect,
            lines,
            style: question_style,
        });

        // Options box: one inch under the question, pulled up to vertically
        // center in the content area when the question is short.
        let mut option_lines = Vec::new();
        let mut options_height = 0.0f32;
        for option in &question.options {
            let wrapped = WrappedText::new(option, config.chars_per_line, config.line_height);
            options_height += wrapped.height + config.option_gap;
            option_lines.extend(wrapped.lines);
        }
        if !option_lines.is_empty() {
            let content_middle = (SLIDE_HEIGHT - inches(1.0)) / 2.0;
            let options_top = (question_rect.bottom() + inches(1.0))
                .max(content_middle - options_height / 2.0);
            slide.boxes.push(TextBox {
                role: Role::OptionText,
                rect: Rect::new(
                    question_rect.left(),
                    options_top,
                    question_rect.width,
                    options_height + inches(0.5),
                ),
                lines: option_lines,
                style: self.theme.style(Role::OptionText).clone(),
            });
        }

        slide
    }
}

impl Default for DeckBuilder {
    fn default() -> Self {
        Self::new()
    }
}
