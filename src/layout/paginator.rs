//! Distribution of content items across fixed-capacity pages.
//!
//! A page is opened when none exists or the current one cannot take the next
//! item, filled while capacity lasts, and closed for good once the paginator
//! moves on. Items are placed whole; an item taller than a full empty page is
//! placed anyway and the page overflows, unless
//! [`LayoutConfig::split_oversized`](crate::config::LayoutConfig) opts into
//! splitting it across pages.

use std::collections::VecDeque;

use crate::config::LayoutConfig;
use crate::elements::Item;

use super::measure::{estimate_text_height, split_to_fit};

/// An item placed on a page, with the height charged for it.
#[derive(Debug, Clone)]
pub struct PlacedItem {
    /// The placed content item.
    pub item: Item,
    /// Charged height in points, including per-item padding.
    pub height: f32,
}

/// One unit of output capacity; maps downstream to one rendered slide.
#[derive(Debug, Clone)]
pub struct Page {
    items: Vec<PlacedItem>,
    capacity: f32,
    used: f32,
}

impl Page {
    fn new(capacity: f32) -> Self {
        Self {
            items: Vec::new(),
            capacity,
            used: 0.0,
        }
    }

    fn place(&mut self, item: Item, height: f32) {
        self.items.push(PlacedItem { item, height });
        self.used += height;
    }

    /// Items placed on this page, in order.
    pub fn items(&self) -> &[PlacedItem] {
        &self.items
    }

    /// Full capacity the page was opened with.
    pub fn capacity(&self) -> f32 {
        self.capacity
    }

    /// Remaining capacity.
    ///
    /// Negative only for a page holding a single item taller than the full
    /// capacity (the documented place-anyway policy).
    pub fn remaining(&self) -> f32 {
        self.capacity - self.used
    }

    /// Whether nothing has been placed on this page.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Estimated height of one item, excluding per-item padding.
///
/// A point charges its estimated wrapped-text height. A question charges its
/// text, each subpoint, and each option plus the configured option gap.
pub fn item_height(item: &Item, config: &LayoutConfig) -> f32 {
    match item {
        Item::Point(text) => estimate_text_height(text, config),
        Item::Question(question) => {
            let mut height = estimate_text_height(&question.text, config);
            for subpoint in &question.subpoints {
                height += estimate_text_height(subpoint, config);
            }
            for option in &question.options {
                height += estimate_text_height(option, config) + config.option_gap;
            }
            height
        }
    }
}

/// Distribute `items` across pages of `config.box_capacity` points each.
///
/// Pure and deterministic; no state survives the call. Empty input yields an
/// empty vec — never a degenerate empty page.
///
/// # Examples
///
/// ```
/// use deck_forge::config::LayoutConfig;
/// use deck_forge::elements::Item;
/// use deck_forge::layout::paginate;
///
/// let config = LayoutConfig::new()
///     .with_chars_per_line(50)
///     .with_line_height(2.0)
///     .with_box_capacity(5.0)
///     .with_item_padding(0.0);
/// let items = vec![Item::Point("a".into()), Item::Point("b".into())];
/// let pages = paginate(&items, &config);
/// assert_eq!(pages.len(), 1);
/// assert_eq!(pages[0].remaining(), 1.0);
/// ```
pub fn paginate(items: &[Item], config: &LayoutConfig) -> Vec<Page> {
    let mut pages: Vec<Page> = Vec::new();
    let mut current: Option<Page> = None;
    let mut queue: VecDeque<Item> = items.iter().cloned().collect();

    while let Some(item) = queue.pop_front() {
        let height = item_height(&item, config) + config.item_padding;

        if config.split_oversized && height > config.box_capacity {
            if let Some((fitted, overflow)) = split_oversized_point(&item, config) {
                queue.push_front(Item::Point(overflow));
                queue.push_front(Item::Point(fitted));
                continue;
            }
        }

        let mut page = match current.take() {
            Some(open) if open.is_empty() || open.remaining() >= height => open,
            Some(full) => {
                log::debug!(
                    "page full ({:.1} pt left, item needs {:.1} pt), opening page {}",
                    full.remaining(),
                    height,
                    pages.len() + 2
                );
                pages.push(full);
                Page::new(config.box_capacity)
            }
            None => Page::new(config.box_capacity),
        };
        page.place(item, height);
        current = Some(page);
    }

    if let Some(page) = current {
        if !page.is_empty() {
            pages.push(page);
        }
    }
    pages
}

/// Split an oversized point at the full-page budget.
///
/// Returns `None` when the item is not a point, or when the split degenerates
/// (nothing fits one page, or everything does) — those fall back to the
/// place-anyway policy.
fn split_oversized_point(item: &Item, config: &LayoutConfig) -> Option<(String, String)> {
    let Item::Point(text) = item else {
        return None;
    };
    let budget = config.box_capacity - config.item_padding;
    let (fitted, overflow) = split_to_fit(text, budget, config);
    if fitted.is_empty() || overflow.is_empty() {
        return None;
    }
    Some((fitted, overflow))
}
