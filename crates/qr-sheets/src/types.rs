use thiserror::Error;

use crate::constants::MM_PER_INCH;

#[derive(Error, Debug)]
pub enum SheetError {
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("PDF error: {0}")]
    Pdf(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("Output name {0:?} is used more than once")]
    DuplicateName(String),
    #[error("Item {index} is {found:?}, expected {expected:?} like the first item")]
    MixedSizes {
        expected: (u32, u32),
        found: (u32, u32),
        index: usize,
    },
}

pub type Result<T> = std::result::Result<T, SheetError>;

/// Paper orientation
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Portrait: height > width (default for most paper sizes)
    #[default]
    Portrait,
    /// Landscape: width > height
    Landscape,
}

/// Standard paper sizes
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaperSize {
    A3,
    A4,
    A5,
    Letter,
    Legal,
    Tabloid,
    Custom { width_mm: f32, height_mm: f32 },
}

impl PaperSize {
    /// Get base dimensions (always portrait: width < height for standard sizes)
    pub fn dimensions_mm(self) -> (f32, f32) {
        match self {
            PaperSize::A3 => (297.0, 420.0),
            PaperSize::A4 => (210.0, 297.0),
            PaperSize::A5 => (148.0, 210.0),
            PaperSize::Letter => (215.9, 279.4),
            PaperSize::Legal => (215.9, 355.6),
            PaperSize::Tabloid => (279.4, 431.8),
            PaperSize::Custom {
                width_mm,
                height_mm,
            } => (width_mm, height_mm),
        }
    }

    /// Get dimensions with orientation applied
    pub fn dimensions_with_orientation(self, orientation: Orientation) -> (f32, f32) {
        let (w, h) = self.dimensions_mm();
        match orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }

    /// Raster size of the sheet at `dpi`, rounded to whole pixels.
    ///
    /// A4 portrait at 300 DPI is 2480 × 3508.
    pub fn dimensions_px(self, orientation: Orientation, dpi: u32) -> (u32, u32) {
        let (w_mm, h_mm) = self.dimensions_with_orientation(orientation);
        (mm_to_px(w_mm, dpi), mm_to_px(h_mm, dpi))
    }
}

fn mm_to_px(mm: f32, dpi: u32) -> u32 {
    let px = (mm as f64 / MM_PER_INCH * dpi as f64).round();
    if px <= 0.0 { 0 } else { px as u32 }
}

/// Page canvas size plus the spacing rules of the item grid, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Geometry {
    pub page_width: u32,
    pub page_height: u32,
    /// Blank border on all four edges, outside the grid
    pub margin: u32,
    /// Gap between adjacent items
    pub padding: u32,
}

impl Geometry {
    pub fn new(page_width: u32, page_height: u32, margin: u32, padding: u32) -> Self {
        Self {
            page_width,
            page_height,
            margin,
            padding,
        }
    }
}

/// Statistics about a packing run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetStatistics {
    /// Total number of items
    pub items: usize,
    /// Grid columns per page
    pub cols: usize,
    /// Grid rows per page
    pub rows: usize,
    /// Slots per page (`cols * rows`)
    pub per_page: usize,
    /// Number of pages produced
    pub pages: usize,
    /// Items on the final page (0 when there are no pages)
    pub last_page_items: usize,
    /// Unused slots on the final page
    pub empty_slots: usize,
}
