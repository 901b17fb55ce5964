//! Caption font loading.

use ab_glyph::FontVec;
use std::path::Path;

use crate::types::{LabelError, Result};

/// DejaVu Sans, used when no caption font is given
const BUILTIN_FONT: &[u8] = include_bytes!("../fonts/DejaVuSans.ttf");

/// Load a TTF/OTF font from disk
pub async fn load_font(path: impl AsRef<Path>) -> Result<FontVec> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path).await?;
    FontVec::try_from_vec(bytes).map_err(|_| {
        LabelError::Font(format!(
            "failed to parse font data (TTF/OTF): {}",
            path.display()
        ))
    })
}

/// The caption font bundled with the crate
pub fn builtin_font() -> Result<FontVec> {
    FontVec::try_from_vec(BUILTIN_FONT.to_vec())
        .map_err(|_| LabelError::Font("failed to parse built-in font".to_string()))
}
