use crate::layout::create_grid_layout;
use crate::types::*;

/// Calculate statistics for a packing run without rendering anything.
///
/// `item_size` is the (width, height) every item shares.
pub fn calculate_statistics(
    item_count: usize,
    item_size: (u32, u32),
    geometry: &Geometry,
) -> SheetStatistics {
    let (item_width, item_height) = item_size;
    let grid = create_grid_layout(geometry, item_width, item_height);
    let per_page = grid.per_page();
    let pages = grid.page_count(item_count);

    let last_page_items = match item_count % per_page {
        0 if pages > 0 => per_page,
        0 => 0,
        rem => rem,
    };
    let empty_slots = if pages > 0 {
        per_page - last_page_items
    } else {
        0
    };

    SheetStatistics {
        items: item_count,
        cols: grid.cols,
        rows: grid.rows,
        per_page,
        pages,
        last_page_items,
        empty_slots,
    }
}
