//! Page planning
//!
//! Splits an ordered run of items into pages and assigns every item a slot.
//! Items fill the first free slot of the current page row by row; a new
//! page starts once `per_page` slots are used.

use super::{GridLayout, PagePlan, Placement};

/// Assign `count` items to pages and slots.
///
/// Returns one plan per page in page order. An empty run yields no pages.
pub fn plan_pages(count: usize, grid: &GridLayout) -> Vec<PagePlan> {
    let per_page = grid.per_page();

    (0..grid.page_count(count))
        .map(|page_index| {
            let start = page_index * per_page;
            let end = (start + per_page).min(count);

            let placements = (start..end)
                .enumerate()
                .map(|(slot, item_index)| {
                    let (x, y) = grid.slot_origin(slot);
                    Placement {
                        item_index,
                        slot,
                        position: grid.slot_position(slot),
                        x,
                        y,
                    }
                })
                .collect();

            PagePlan {
                number: page_index + 1,
                placements,
            }
        })
        .collect()
}
