//! Navigation bar layout.
//!
//! Every slide carries the same three-segment bar across its top: deck title
//! on the left, topic in the middle, presenter credit on the right, plus a
//! logo slot at the far left. Segment rectangles overlap horizontally;
//! stacking order is the renderer's concern.

use crate::geometry::{inches, Rect};
use crate::style::{Role, Theme};

use super::builder::DeckMetadata;
use super::TextBox;

/// Height of the navigation bar in points.
pub const NAV_HEIGHT: f32 = 36.0;

/// One styled segment of the navigation bar.
pub type NavSegment = TextBox;

/// The navigation bar of one slide.
#[derive(Debug, Clone)]
pub struct NavBar {
    /// Reserved logo slot at the top-left corner.
    pub logo: Rect,
    /// Deck title segment.
    pub title: NavSegment,
    /// Topic segment.
    pub topic: NavSegment,
    /// Presenter credit segment.
    pub presenter: NavSegment,
}

impl NavBar {
    /// Build the bar for a slide from deck metadata and a theme.
    pub fn build(metadata: &DeckMetadata, theme: &Theme) -> Self {
        let segment = |role: Role, text: &str, x_in: f32, width_in: f32| TextBox {
            role,
            rect: Rect::new(inches(x_in), 0.0, inches(width_in), NAV_HEIGHT),
            lines: vec![text.to_string()],
            style: theme.style(role).clone(),
        };

        Self {
            logo: Rect::new(0.0, 0.0, inches(1.0), NAV_HEIGHT),
            title: segment(Role::NavTitle, &metadata.title, 1.0, 8.0),
            topic: segment(Role::NavTopic, &metadata.topic, 5.0, 6.0),
            presenter: segment(
                Role::NavPresenter,
                &format!("BY: {}", metadata.presenter),
                10.0,
                4.0,
            ),
        }
    }
}
