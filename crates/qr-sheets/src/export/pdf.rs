use image::RgbImage;
use image::buffer::ConvertBuffer;
use printpdf::{
    Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, RawImage, RawImageData, RawImageFormat,
    XObjectTransform,
};

use crate::SheetOptions;
use crate::pack::Page;
use crate::types::{Result, SheetError};

/// Build a PDF with one sheet per page.
///
/// Each page raster is placed at the sheet's DPI from the bottom-left
/// corner, so a page rendered from `options` covers the whole sheet.
pub fn build_pdf(pages: &[Page], options: &SheetOptions) -> Result<Vec<u8>> {
    options.validate()?;
    if pages.is_empty() {
        return Err(SheetError::Pdf("No pages to write".to_string()));
    }

    let mut doc = PdfDocument::new("QR Sheets");
    let (width_mm, height_mm) = options
        .paper
        .dimensions_with_orientation(options.orientation);

    for page in pages {
        let rgb: RgbImage = page.image.convert();
        let raw = RawImage {
            width: rgb.width() as usize,
            height: rgb.height() as usize,
            pixels: RawImageData::U8(rgb.into_raw()),
            data_format: RawImageFormat::RGB8,
            tag: Vec::new(),
        };
        let image_id = doc.add_image(&raw);

        let ops = vec![Op::UseXobject {
            id: image_id,
            transform: XObjectTransform {
                dpi: Some(options.dpi as f32),
                ..Default::default()
            },
        }];

        doc.pages.push(PdfPage::new(Mm(width_mm), Mm(height_mm), ops));
    }

    let mut warnings = Vec::new();
    let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);
    if !warnings.is_empty() {
        tracing::debug!(count = warnings.len(), "PDF writer reported warnings");
    }

    Ok(bytes)
}
