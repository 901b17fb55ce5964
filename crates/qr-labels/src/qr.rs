//! QR code rendering for labels.

use image::{Rgba, RgbaImage};
use qrcode::{Color, QrCode};

use crate::options::LabelOptions;
use crate::types::Result;

const DARK: Rgba<u8> = Rgba([0, 0, 0, 255]);
const LIGHT: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Render `data` as a QR code.
///
/// Each module is `box_size` pixels square and the code is surrounded by
/// `border` light modules, so the image is
/// `(modules + 2 * border) * box_size` pixels on each side.
pub fn render_qr(data: &str, options: &LabelOptions) -> Result<RgbaImage> {
    let code =
        QrCode::with_error_correction_level(data.as_bytes(), options.error_correction.ec_level())?;
    let modules = code.to_colors();
    let module_count = code.width() as u32;

    let scale = options.box_size.max(1);
    let offset = options.border * scale;
    let img_size = (module_count + 2 * options.border) * scale;

    let mut img = RgbaImage::from_pixel(img_size, img_size, LIGHT);

    for (i, color) in modules.iter().enumerate() {
        if *color != Color::Dark {
            continue;
        }
        let x = (i as u32) % module_count;
        let y = (i as u32) / module_count;

        for dx in 0..scale {
            for dy in 0..scale {
                img.put_pixel(offset + x * scale + dx, offset + y * scale + dy, DARK);
            }
        }
    }

    Ok(img)
}
