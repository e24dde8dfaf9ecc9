//! # Best-Seller Carousel
//!
//! Partitions the eligible products into fixed-size slides and tracks
//! which slide is visible.
//!
//! ## Slide Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  8 eligible products, ItemsPerPage::Three → ceil(8 / 3) = 3 slides      │
//! │                                                                         │
//! │   slide 0          slide 1          slide 2                             │
//! │  ┌──┬──┬──┐       ┌──┬──┬──┐       ┌──┬──┐                             │
//! │  │p0│p1│p2│       │p3│p4│p5│       │p6│p7│                             │
//! │  └──┴──┴──┘       └──┴──┴──┘       └──┴──┘                             │
//! │                                                                         │
//! │  Navigation is a ring: next() on slide 2 → slide 0,                     │
//! │                        prev() on slide 0 → slide 2                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - `current < total_slides()` whenever there is at least one slide
//! - `current == 0` when there are no slides
//! - Changing the tier reclamps `current` onto the last existing slide

use std::ops::Range;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::types::{ItemsPerPage, Product};
use crate::BEST_SELLER_LIMIT;

/// Products eligible for the best-seller carousel: in stock, first
/// [`BEST_SELLER_LIMIT`] in catalog order.
///
/// ## Example
/// ```rust
/// use storefront_core::carousel::best_sellers;
/// use storefront_core::catalog::dummy_products;
///
/// let eligible = best_sellers(&dummy_products());
/// assert_eq!(eligible.len(), 8);
/// assert!(eligible.iter().all(|p| p.in_stock));
/// ```
pub fn best_sellers(products: &[Product]) -> Vec<Product> {
    products
        .iter()
        .filter(|p| p.in_stock)
        .take(BEST_SELLER_LIMIT)
        .cloned()
        .collect()
}

/// Number of slides needed for `eligible` products.
#[inline]
pub fn total_slides(eligible: usize, per_page: ItemsPerPage) -> usize {
    eligible.div_ceil(per_page.count())
}

/// Index range of the products on slide `index`, clipped to `eligible`.
pub fn slide_range(index: usize, per_page: ItemsPerPage, eligible: usize) -> Range<usize> {
    let start = (index * per_page.count()).min(eligible);
    let end = ((index + 1) * per_page.count()).min(eligible);
    start..end
}

// =============================================================================
// Carousel State
// =============================================================================

/// Slide index and tier for one carousel instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CarouselState {
    current: usize,
    items_per_page: ItemsPerPage,
    eligible: usize,
}

impl CarouselState {
    /// Starts on slide 0.
    pub fn new(eligible: usize, items_per_page: ItemsPerPage) -> Self {
        CarouselState {
            current: 0,
            items_per_page,
            eligible,
        }
    }

    #[inline]
    pub fn current(&self) -> usize {
        self.current
    }

    #[inline]
    pub fn items_per_page(&self) -> ItemsPerPage {
        self.items_per_page
    }

    #[inline]
    pub fn eligible(&self) -> usize {
        self.eligible
    }

    #[inline]
    pub fn total_slides(&self) -> usize {
        total_slides(self.eligible, self.items_per_page)
    }

    /// Nothing to render.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.eligible == 0
    }

    /// Advances one slide, wrapping to 0 after the last. No-op without slides.
    pub fn next(&mut self) {
        let total = self.total_slides();
        if total > 0 {
            self.current = (self.current + 1) % total;
        }
    }

    /// Retreats one slide, wrapping to the last below 0. No-op without slides.
    pub fn prev(&mut self) {
        let total = self.total_slides();
        if total > 0 {
            self.current = (self.current + total - 1) % total;
        }
    }

    /// Jumps to `index`.
    ///
    /// ## Errors
    /// `SlideOutOfRange` unless `index < total_slides()`; the current slide
    /// is left unchanged.
    pub fn go_to(&mut self, index: usize) -> CoreResult<()> {
        let total = self.total_slides();
        if index >= total {
            return Err(CoreError::SlideOutOfRange { index, total });
        }
        self.current = index;
        Ok(())
    }

    /// Applies a new tier. Returns true when the tier actually changed.
    pub fn set_items_per_page(&mut self, items_per_page: ItemsPerPage) -> bool {
        if self.items_per_page == items_per_page {
            return false;
        }
        self.items_per_page = items_per_page;
        self.reclamp();
        true
    }

    /// Applies a new eligible count (catalog reload).
    pub fn set_eligible(&mut self, eligible: usize) {
        self.eligible = eligible;
        self.reclamp();
    }

    fn reclamp(&mut self) {
        self.current = self.current.min(self.total_slides().saturating_sub(1));
    }

    /// Builds the render projection over `eligible`.
    ///
    /// Returns `None` when there is nothing to show, so the widget renders
    /// no heading, slides or controls.
    pub fn view(&self, eligible: &[Product]) -> Option<CarouselView> {
        if eligible.is_empty() {
            return None;
        }

        let total = total_slides(eligible.len(), self.items_per_page);
        let slides = (0..total)
            .map(|index| Slide {
                index,
                products: eligible[slide_range(index, self.items_per_page, eligible.len())].to_vec(),
            })
            .collect();

        Some(CarouselView {
            slides,
            current: self.current,
            total_slides: total,
            offset_percent: self.current * 100,
            item_width_percent: self.items_per_page.item_width_percent(),
            show_controls: total > 1,
            indicators: (0..total).map(|i| i == self.current).collect(),
        })
    }
}

// =============================================================================
// Render Projection
// =============================================================================

/// One page of products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Slide {
    pub index: usize,
    pub products: Vec<Product>,
}

/// Everything the presentation layer needs to draw the carousel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CarouselView {
    pub slides: Vec<Slide>,
    pub current: usize,
    pub total_slides: usize,
    /// Horizontal translation of the slide strip (`translateX(-N%)`).
    pub offset_percent: usize,
    /// Width of one product card within a slide.
    pub item_width_percent: f64,
    /// Arrows and indicator dots only appear with more than one slide.
    pub show_controls: bool,
    /// One dot per slide; `true` marks the active one.
    pub indicators: Vec<bool>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::dummy_products;

    fn eligible() -> Vec<Product> {
        best_sellers(&dummy_products())
    }

    #[test]
    fn test_best_sellers_filters_and_caps() {
        let products = dummy_products();
        let picked = best_sellers(&products);

        assert_eq!(picked.len(), BEST_SELLER_LIMIT);
        assert!(picked.iter().all(|p| p.in_stock));

        let expected: Vec<_> = products.iter().filter(|p| p.in_stock).take(8).collect();
        for (a, b) in picked.iter().zip(expected) {
            assert_eq!(a.id, b.id);
        }
    }

    #[test]
    fn test_best_sellers_all_out_of_stock() {
        let mut products = dummy_products();
        products.iter_mut().for_each(|p| p.in_stock = false);
        assert!(best_sellers(&products).is_empty());
    }

    #[test]
    fn test_four_per_page_ring() {
        let mut carousel = CarouselState::new(8, ItemsPerPage::Four);
        assert_eq!(carousel.total_slides(), 2);

        carousel.next();
        assert_eq!(carousel.current(), 1);
        carousel.next();
        assert_eq!(carousel.current(), 0);
    }

    #[test]
    fn test_prev_wraps_to_last() {
        let mut carousel = CarouselState::new(8, ItemsPerPage::Three);
        carousel.prev();
        assert_eq!(carousel.current(), 2);
        carousel.prev();
        assert_eq!(carousel.current(), 1);
    }

    #[test]
    fn test_three_per_page_last_slide_short() {
        let products = eligible();
        let carousel = CarouselState::new(products.len(), ItemsPerPage::Three);
        let view = carousel.view(&products).unwrap();

        assert_eq!(view.total_slides, 3);
        assert_eq!(view.slides[0].products.len(), 3);
        assert_eq!(view.slides[2].products.len(), 2);
        assert_eq!(view.slides[2].products[1].id, products[7].id);
    }

    #[test]
    fn test_empty_renders_nothing() {
        let mut carousel = CarouselState::new(0, ItemsPerPage::Four);
        assert!(carousel.is_empty());
        assert_eq!(carousel.total_slides(), 0);
        assert!(carousel.view(&[]).is_none());

        carousel.next();
        carousel.prev();
        assert_eq!(carousel.current(), 0);
        assert!(carousel.go_to(0).is_err());
    }

    #[test]
    fn test_go_to() {
        let mut carousel = CarouselState::new(8, ItemsPerPage::Two);
        carousel.go_to(3).unwrap();
        assert_eq!(carousel.current(), 3);

        let err = carousel.go_to(4).unwrap_err();
        assert_eq!(err, CoreError::SlideOutOfRange { index: 4, total: 4 });
        assert_eq!(carousel.current(), 3);
    }

    #[test]
    fn test_tier_change_reclamps() {
        let mut carousel = CarouselState::new(8, ItemsPerPage::Two);
        carousel.go_to(3).unwrap();

        assert!(carousel.set_items_per_page(ItemsPerPage::Four));
        assert_eq!(carousel.total_slides(), 2);
        assert_eq!(carousel.current(), 1);

        // Same tier again is not a change
        assert!(!carousel.set_items_per_page(ItemsPerPage::Four));
    }

    #[test]
    fn test_view_controls_and_indicators() {
        let products = eligible();
        let mut carousel = CarouselState::new(products.len(), ItemsPerPage::Four);
        carousel.next();

        let view = carousel.view(&products).unwrap();
        assert!(view.show_controls);
        assert_eq!(view.indicators, vec![false, true]);
        assert_eq!(view.offset_percent, 100);
        assert_eq!(view.item_width_percent, 25.0);

        // A single slide hides arrows and dots
        let single = CarouselState::new(3, ItemsPerPage::Four);
        let view = single.view(&products[..3]).unwrap();
        assert_eq!(view.total_slides, 1);
        assert!(!view.show_controls);
    }

    #[test]
    fn test_slide_range() {
        assert_eq!(slide_range(0, ItemsPerPage::Three, 8), 0..3);
        assert_eq!(slide_range(2, ItemsPerPage::Three, 8), 6..8);
        assert_eq!(slide_range(5, ItemsPerPage::Three, 8), 8..8);
    }
}
