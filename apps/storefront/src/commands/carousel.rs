//! # Carousel Commands
//!
//! Arrow, indicator and resize handlers for the best-seller widget.
//! Every command returns the fresh render projection.

use serde::Serialize;
use storefront_core::{CarouselView, ItemsPerPage, ViewportWidth};
use tracing::debug;

use crate::error::ApiError;
use crate::state::Viewport;
use crate::widgets::BestSeller;

/// Carousel response; `view` is null when nothing should be drawn.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselResponse {
    pub viewport_width: ViewportWidth,
    pub items_per_page: ItemsPerPage,
    pub view: Option<CarouselView>,
}

impl CarouselResponse {
    fn new(widget: &BestSeller, viewport: &Viewport) -> Self {
        CarouselResponse {
            viewport_width: viewport.width(),
            items_per_page: widget.items_per_page(),
            view: widget.view(),
        }
    }
}

pub fn get_carousel(widget: &BestSeller, viewport: &Viewport) -> CarouselResponse {
    CarouselResponse::new(widget, viewport)
}

pub fn next_slide(widget: &mut BestSeller, viewport: &Viewport) -> CarouselResponse {
    widget.next();
    debug!(current = widget.state().current(), "next_slide command");
    CarouselResponse::new(widget, viewport)
}

pub fn prev_slide(widget: &mut BestSeller, viewport: &Viewport) -> CarouselResponse {
    widget.prev();
    debug!(current = widget.state().current(), "prev_slide command");
    CarouselResponse::new(widget, viewport)
}

/// Jumps to a slide.
///
/// ## Returns
/// `CAROUSEL_ERROR` for indices without a rendered indicator
pub fn go_to_slide(
    widget: &mut BestSeller,
    viewport: &Viewport,
    index: usize,
) -> Result<CarouselResponse, ApiError> {
    debug!(index, "go_to_slide command");
    widget.go_to(index)?;
    Ok(CarouselResponse::new(widget, viewport))
}

/// Publishes a viewport resize and lets the widget react to it.
pub fn resize(widget: &mut BestSeller, viewport: &Viewport, width: u32) -> CarouselResponse {
    viewport.resize(ViewportWidth(width));
    widget.sync_viewport();
    CarouselResponse::new(widget, viewport)
}
