//! Grid layout calculation
//!
//! This module works out how many equally-sized items fit across and down a
//! page once the margin and the inter-item padding are taken into account.

use crate::types::Geometry;

use super::GridLayout;

// =============================================================================
// Grid Creation
// =============================================================================

/// Create the item grid for a page.
///
/// # Arguments
/// * `geometry` - Page size, margin and padding in pixels
/// * `item_width` - Width of a representative item in pixels
/// * `item_height` - Height of a representative item in pixels
///
/// Both dimensions are clamped to at least 1 so packing always makes
/// progress, even when a single item is larger than the usable area.
pub fn create_grid_layout(geometry: &Geometry, item_width: u32, item_height: u32) -> GridLayout {
    let cols = fit_count(
        geometry.page_width,
        geometry.margin,
        geometry.padding,
        item_width,
    );
    let rows = fit_count(
        geometry.page_height,
        geometry.margin,
        geometry.padding,
        item_height,
    );

    tracing::debug!(
        cols,
        rows,
        item_width,
        item_height,
        "computed grid for {}x{} page",
        geometry.page_width,
        geometry.page_height
    );

    GridLayout {
        cols,
        rows,
        item_width,
        item_height,
        margin: geometry.margin,
        padding: geometry.padding,
    }
}

/// `floor((extent - 2*margin + padding) / (item + padding))`, at least 1.
fn fit_count(extent: u32, margin: u32, padding: u32, item: u32) -> usize {
    let step = item as i64 + padding as i64;
    if step <= 0 {
        return 1;
    }
    let usable = extent as i64 - 2 * margin as i64 + padding as i64;
    usable.div_euclid(step).max(1) as usize
}

// =============================================================================
// Tests
// =============================================================================
