//! Captioned label composition.
//!
//! A label is the QR code for its text with the text printed centred above
//! it on a white card:
//!
//! ```text
//! +-----------------+  <- caption_top
//! |     DU0001      |
//! |                 |  <- caption_spacing
//! |  [ QR code ]    |
//! |                 |
//! +-----------------+  height = qr + caption + caption_gap
//! ```

use ab_glyph::{Font, FontVec, PxScale, ScaleFont};
use image::{Rgba, RgbaImage, imageops};
use imageproc::drawing::{draw_text_mut, text_size};
use std::collections::HashSet;

use crate::options::LabelOptions;
use crate::qr::render_qr;
use crate::types::{Label, Result};

const TEXT_COLOR: Rgba<u8> = Rgba([0, 0, 0, 255]);
const CARD_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Height of a caption line: the font's full ascent to descent, so every
/// label in a batch gets the same height whatever its text.
fn caption_height(font: &FontVec, scale: PxScale) -> u32 {
    let scaled = font.as_scaled(scale);
    (scaled.ascent() - scaled.descent()).ceil() as u32
}

/// Render one label
pub fn render_label(text: &str, font: &FontVec, options: &LabelOptions) -> Result<Label> {
    options.validate()?;

    let qr = render_qr(text, options)?;
    let (qr_width, qr_height) = qr.dimensions();
    let scale = PxScale::from(options.font_size);

    let text_h = caption_height(font, scale);
    let total_height = qr_height + text_h + options.caption_gap;
    let mut image = RgbaImage::from_pixel(qr_width, total_height, CARD_COLOR);

    let (text_w, _) = text_size(scale, font, text);
    let text_x = qr_width.saturating_sub(text_w) / 2;
    draw_text_mut(
        &mut image,
        TEXT_COLOR,
        text_x as i32,
        options.caption_top as i32,
        scale,
        font,
        text,
    );

    let qr_y = options.caption_top + text_h + options.caption_spacing;
    imageops::replace(&mut image, &qr, 0, qr_y as i64);

    Ok(Label {
        text: text.to_string(),
        image,
    })
}

/// Render labels for every text, in order.
pub fn generate_labels(
    texts: &[String],
    font: &FontVec,
    options: &LabelOptions,
) -> Result<Vec<Label>> {
    let labels = texts
        .iter()
        .map(|text| render_label(text, font, options))
        .collect::<Result<Vec<_>>>()?;

    tracing::info!(count = labels.len(), "generated labels");
    Ok(labels)
}

/// File name for a label inside an archive or output directory.
///
/// Non-alphanumeric characters become `_` and leading/trailing `_` are
/// dropped. A text with nothing left falls back to `qr_<text>`.
pub fn archive_name(text: &str) -> String {
    let safe: String = text
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect();
    let safe = safe.trim_matches('_');

    if safe.is_empty() {
        format!("qr_{text}.png")
    } else {
        format!("{safe}.png")
    }
}

/// Archive names for a batch, one per text and all distinct.
///
/// Repeated names get a copy number: `DU0001.png`, `DU0001_2.png`, ...
pub fn archive_names<'a>(texts: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut used = HashSet::new();

    texts
        .into_iter()
        .map(|text| {
            let base = archive_name(text);
            let stem = base.strip_suffix(".png").unwrap_or(&base);

            let mut name = base.clone();
            let mut copy = 1;
            while !used.insert(name.clone()) {
                copy += 1;
                name = format!("{stem}_{copy}.png");
            }
            name
        })
        .collect()
}
