//! Shared constants for sheet packing
//!
//! Defaults reproduce the print setup the label sheets were designed for:
//! A4 portrait rasterised at 300 DPI with a 10 px border and gutter.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Millimetres per inch
pub const MM_PER_INCH: f64 = 25.4;

// =============================================================================
// Default Geometry
// =============================================================================

/// Default raster resolution of a sheet
pub const DEFAULT_DPI: u32 = 300;

/// Default page width in pixels (A4 at 300 DPI)
pub const DEFAULT_PAGE_WIDTH_PX: u32 = 2480;

/// Default page height in pixels (A4 at 300 DPI)
pub const DEFAULT_PAGE_HEIGHT_PX: u32 = 3508;

/// Default border around the grid (pixels)
pub const DEFAULT_MARGIN_PX: u32 = 10;

/// Default gap between items (pixels)
pub const DEFAULT_PADDING_PX: u32 = 10;

/// Default page fill
pub const DEFAULT_BACKGROUND: [u8; 3] = [255, 255, 255];

/// Largest page side accepted (pixels); A3 at 1200 DPI fits
pub const MAX_PAGE_SIDE_PX: u32 = 20_000;

// =============================================================================
// Output Naming
// =============================================================================

/// File name for a 1-based page number
pub fn page_file_name(number: usize) -> String {
    format!("page_{number:03}.png")
}
