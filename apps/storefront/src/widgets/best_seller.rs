//! # Best-Seller Widget
//!
//! The carousel controller as mounted on the home page.
//!
//! ## Lifecycle
//! ```text
//! mount(session, viewport)
//!   ├── snapshot session.best_sellers()     (≤ 8 in-stock products)
//!   ├── subscribe to viewport               (released on drop)
//!   └── CarouselState at slide 0, tier from current width
//!
//! on resize event ──► sync_viewport() ──► tier change? reclamp slide
//! on click        ──► next() / prev() / go_to(i)
//! on render       ──► view()  (None = draw nothing)
//!
//! unmount / drop  ──► subscription released
//! ```

use storefront_core::{CarouselState, CarouselView, CoreResult, ItemsPerPage, Product};
use tracing::debug;

use crate::state::{SessionState, Viewport, ViewportSubscription};

/// Best-seller carousel bound to a viewport subscription.
#[derive(Debug)]
pub struct BestSeller {
    products: Vec<Product>,
    carousel: CarouselState,
    viewport: ViewportSubscription,
}

impl BestSeller {
    /// Mounts the widget: reads the eligible products and the current
    /// viewport width, and starts listening for resizes.
    pub fn mount(session: &SessionState, viewport: &Viewport) -> Self {
        let products = session.best_sellers();
        let subscription = viewport.subscribe();
        let per_page = subscription.current().items_per_page();
        let carousel = CarouselState::new(products.len(), per_page);

        debug!(
            eligible = products.len(),
            ?per_page,
            slides = carousel.total_slides(),
            "BestSeller mounted"
        );

        BestSeller {
            products,
            carousel,
            viewport: subscription,
        }
    }

    /// Applies a pending viewport change. Returns true if the tier changed.
    pub fn sync_viewport(&mut self) -> bool {
        let Some(width) = self.viewport.take_change() else {
            return false;
        };
        let changed = self.carousel.set_items_per_page(width.items_per_page());
        if changed {
            debug!(
                width = width.0,
                per_page = ?self.carousel.items_per_page(),
                current = self.carousel.current(),
                "BestSeller tier changed"
            );
        }
        changed
    }

    /// Re-reads the eligible products after a catalog reload.
    pub fn refresh(&mut self, session: &SessionState) {
        self.products = session.best_sellers();
        self.carousel.set_eligible(self.products.len());
    }

    pub fn next(&mut self) {
        self.carousel.next();
    }

    pub fn prev(&mut self) {
        self.carousel.prev();
    }

    /// Jumps to an indicator dot.
    pub fn go_to(&mut self, index: usize) -> CoreResult<()> {
        self.carousel.go_to(index)
    }

    pub fn state(&self) -> &CarouselState {
        &self.carousel
    }

    pub fn items_per_page(&self) -> ItemsPerPage {
        self.carousel.items_per_page()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Render projection; `None` when there are no eligible products.
    pub fn view(&self) -> Option<CarouselView> {
        self.carousel.view(&self.products)
    }

    /// Tears the widget down, releasing the viewport subscription.
    pub fn unmount(self) {
        debug!("BestSeller unmounted");
    }
}
