//! Layout data types for sheet packing
//!
//! These types represent the layout decisions made before any pixels are
//! touched, so they can be inspected and tested on their own.

/// Position within the grid (row, column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPosition {
    /// Row index (0 = top row)
    pub row: usize,
    /// Column index (0 = leftmost column)
    pub col: usize,
}

impl GridPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Uniform item grid for one page size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    /// Number of columns, at least 1
    pub cols: usize,
    /// Number of rows, at least 1
    pub rows: usize,
    /// Width of every item in pixels
    pub item_width: u32,
    /// Height of every item in pixels
    pub item_height: u32,
    /// Border around the grid in pixels
    pub margin: u32,
    /// Gap between items in pixels
    pub padding: u32,
}

impl GridLayout {
    /// Slots per page
    pub fn per_page(&self) -> usize {
        self.cols * self.rows
    }

    /// Number of pages needed for `count` items
    pub fn page_count(&self, count: usize) -> usize {
        count.div_ceil(self.per_page())
    }

    /// Row-major grid position of a slot
    pub fn slot_position(&self, slot: usize) -> GridPosition {
        GridPosition::new(slot / self.cols, slot % self.cols)
    }

    /// Top-left pixel of a slot
    pub fn slot_origin(&self, slot: usize) -> (u64, u64) {
        let pos = self.slot_position(slot);
        let x = self.margin as u64 + pos.col as u64 * (self.item_width as u64 + self.padding as u64);
        let y =
            self.margin as u64 + pos.row as u64 * (self.item_height as u64 + self.padding as u64);
        (x, y)
    }
}

/// One item assigned to a slot on a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Index of the item in the input sequence
    pub item_index: usize,
    /// Slot index within the page (0..per_page)
    pub slot: usize,
    /// Grid cell of the slot
    pub position: GridPosition,
    /// Left edge in pixels
    pub x: u64,
    /// Top edge in pixels
    pub y: u64,
}

/// Layout of a single page, before rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagePlan {
    /// 1-based page number
    pub number: usize,
    pub placements: Vec<Placement>,
}

impl PagePlan {
    /// Range of input item indices on this page
    pub fn item_range(&self) -> std::ops::Range<usize> {
        match (self.placements.first(), self.placements.last()) {
            (Some(first), Some(last)) => first.item_index..last.item_index + 1,
            _ => 0..0,
        }
    }
}
