use image::Rgba;

use crate::constants::*;
use crate::pack::opaque;
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Page setup for a packing run
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SheetOptions {
    // Paper
    pub paper: PaperSize,
    pub orientation: Orientation,
    pub dpi: u32,

    // Spacing, in pixels at `dpi`
    pub margin_px: u32,
    pub padding_px: u32,

    // Page fill
    pub background: [u8; 3],
}

impl Default for SheetOptions {
    fn default() -> Self {
        Self {
            paper: PaperSize::A4,
            orientation: Orientation::Portrait,
            dpi: DEFAULT_DPI,
            margin_px: DEFAULT_MARGIN_PX,
            padding_px: DEFAULT_PADDING_PX,
            background: DEFAULT_BACKGROUND,
        }
    }
}

impl SheetOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| SheetError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| SheetError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Pixel geometry of one page
    pub fn geometry(&self) -> Geometry {
        let (page_width, page_height) = self.paper.dimensions_px(self.orientation, self.dpi);
        Geometry::new(page_width, page_height, self.margin_px, self.padding_px)
    }

    /// Page fill as an opaque pixel
    pub fn background_color(&self) -> Rgba<u8> {
        opaque(self.background)
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if self.dpi == 0 {
            return Err(SheetError::Config("DPI must be greater than zero".to_string()));
        }

        let (w_mm, h_mm) = self.paper.dimensions_mm();
        if !(w_mm > 0.0 && h_mm > 0.0) {
            return Err(SheetError::Config(format!(
                "Paper dimensions must be positive, got {} x {} mm",
                w_mm, h_mm
            )));
        }

        let geometry = self.geometry();
        if geometry.page_width == 0 || geometry.page_height == 0 {
            return Err(SheetError::Config(format!(
                "Page is empty at {} DPI",
                self.dpi
            )));
        }
        if geometry.page_width > MAX_PAGE_SIDE_PX || geometry.page_height > MAX_PAGE_SIDE_PX {
            return Err(SheetError::Config(format!(
                "Page of {} x {} px at {} DPI exceeds the {} px limit",
                geometry.page_width, geometry.page_height, self.dpi, MAX_PAGE_SIDE_PX
            )));
        }

        Ok(())
    }
}
