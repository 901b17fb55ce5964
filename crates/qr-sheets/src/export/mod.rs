//! Output encoders for pages and items
//!
//! - PNG bytes for a single image
//! - ZIP archives of named PNGs
//! - Print-ready PDF with one sheet per page

mod archive;
mod pdf;
mod png;

pub use archive::build_zip;
pub use pdf::build_pdf;
pub use png::encode_png;
