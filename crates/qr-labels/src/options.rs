use crate::types::{LabelError, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// QR error correction level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ErrorCorrection {
    /// ~7% recovery
    Low,
    /// ~15% recovery
    #[default]
    Medium,
    /// ~25% recovery
    Quartile,
    /// ~30% recovery
    High,
}

impl ErrorCorrection {
    pub fn ec_level(self) -> qrcode::EcLevel {
        match self {
            ErrorCorrection::Low => qrcode::EcLevel::L,
            ErrorCorrection::Medium => qrcode::EcLevel::M,
            ErrorCorrection::Quartile => qrcode::EcLevel::Q,
            ErrorCorrection::High => qrcode::EcLevel::H,
        }
    }
}

/// How label text is formatted and rendered
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LabelOptions {
    // Text
    pub prefix: String,
    /// Minimum digit count; numbers are zero-padded to it
    pub digits: usize,

    // QR code
    /// Pixels per module
    pub box_size: u32,
    /// Quiet zone width in modules
    pub border: u32,
    pub error_correction: ErrorCorrection,

    // Caption, in pixels
    pub font_size: f32,
    /// Extra height added below the caption and QR code
    pub caption_gap: u32,
    /// Caption distance from the top edge
    pub caption_top: u32,
    /// Space between caption and QR code
    pub caption_spacing: u32,
}

impl Default for LabelOptions {
    fn default() -> Self {
        Self {
            prefix: "DU".to_string(),
            digits: 4,
            box_size: 15,
            border: 2,
            error_correction: ErrorCorrection::Medium,
            font_size: 40.0,
            caption_gap: 20,
            caption_top: 10,
            caption_spacing: 5,
        }
    }
}

impl LabelOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| LabelError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| LabelError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if self.box_size == 0 {
            return Err(LabelError::Config(
                "Box size must be at least 1 pixel".to_string(),
            ));
        }

        if !(self.font_size > 0.0) {
            return Err(LabelError::Config(format!(
                "Font size must be positive, got {}",
                self.font_size
            )));
        }

        // The QR code is placed caption_top + caption_spacing below the
        // caption; that offset has to fit inside the extra height.
        if self.caption_top + self.caption_spacing > self.caption_gap {
            return Err(LabelError::Config(format!(
                "Caption top ({}) plus spacing ({}) exceeds caption gap ({})",
                self.caption_top, self.caption_spacing, self.caption_gap
            )));
        }

        Ok(())
    }
}
