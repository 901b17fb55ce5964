//! Sheet packing
//!
//! Tiles equally-sized item images onto fixed-size pages. Layout is planned
//! first (see [`crate::layout`]) and then each page is rendered by pasting
//! items onto a blank canvas.

use image::{Rgba, RgbaImage, imageops};
use std::sync::Arc;

use crate::constants::DEFAULT_BACKGROUND;
use crate::layout::{GridLayout, PagePlan, Placement, create_grid_layout, plan_pages};
use crate::types::*;

/// A rendered page
#[derive(Debug, Clone)]
pub struct Page {
    /// 1-based page number, used for naming only
    pub number: usize,
    /// Where each item landed on this page, in slot order
    pub placements: Vec<Placement>,
    /// The composed page, exactly the page canvas size
    pub image: Arc<RgbaImage>,
}

impl Page {
    /// Number of items on this page
    pub fn item_count(&self) -> usize {
        self.placements.len()
    }
}

/// Pack items onto white pages.
///
/// See [`pack_with_background`].
pub fn pack(items: &[RgbaImage], geometry: &Geometry) -> Vec<Page> {
    pack_with_background(items, geometry, opaque(DEFAULT_BACKGROUND))
}

/// Pack items onto pages filled with `background`.
///
/// The grid is computed from the first item's size; all items are expected
/// to share it. Mixed sizes are logged and packed anyway, which can leave
/// gaps or overlaps; call [`ensure_uniform`] first to reject them.
///
/// An empty item slice produces no pages.
pub fn pack_with_background(
    items: &[RgbaImage],
    geometry: &Geometry,
    background: Rgba<u8>,
) -> Vec<Page> {
    let Some(grid) = grid_for(items, geometry) else {
        return Vec::new();
    };

    if let Err(err) = ensure_uniform(items) {
        tracing::warn!("{err}; packing with the first item's size");
    }

    let plans = plan_pages(items.len(), &grid);
    tracing::debug!(
        items = items.len(),
        per_page = grid.per_page(),
        pages = plans.len(),
        "packing items"
    );

    plans
        .into_iter()
        .map(|plan| render_page(plan, items, geometry, background))
        .collect()
}

/// Grid for a batch, from its first item. `None` for an empty batch.
pub fn grid_for(items: &[RgbaImage], geometry: &Geometry) -> Option<GridLayout> {
    let first = items.first()?;
    Some(create_grid_layout(geometry, first.width(), first.height()))
}

/// Compose one planned page.
///
/// Items that extend past the canvas are clipped.
pub fn render_page(
    plan: PagePlan,
    items: &[RgbaImage],
    geometry: &Geometry,
    background: Rgba<u8>,
) -> Page {
    let mut image = RgbaImage::from_pixel(geometry.page_width, geometry.page_height, background);

    for placement in &plan.placements {
        let item = &items[placement.item_index];
        imageops::replace(&mut image, item, placement.x as i64, placement.y as i64);
    }

    Page {
        number: plan.number,
        placements: plan.placements,
        image: Arc::new(image),
    }
}

/// Check that every item has the first item's dimensions.
pub fn ensure_uniform(items: &[RgbaImage]) -> Result<()> {
    let Some(first) = items.first() else {
        return Ok(());
    };
    let expected = first.dimensions();

    for (index, item) in items.iter().enumerate().skip(1) {
        let found = item.dimensions();
        if found != expected {
            return Err(SheetError::MixedSizes {
                expected,
                found,
                index,
            });
        }
    }
    Ok(())
}

pub(crate) fn opaque([r, g, b]: [u8; 3]) -> Rgba<u8> {
    Rgba([r, g, b, 255])
}
