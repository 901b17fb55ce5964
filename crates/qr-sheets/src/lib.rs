//! Packs equally-sized item images onto fixed-size print sheets.
//!
//! ```ignore
//! let options = qr_sheets::SheetOptions::default();
//! let pages = qr_sheets::pack(&items, &options.geometry());
//! qr_sheets::save_pages(&pages, "out").await?;
//! ```

pub mod constants;
pub mod export;
pub mod io;
pub mod layout;
mod options;
mod pack;
mod stats;
mod types;

pub use image;
pub use io::{
    load_item, load_items, save_images, save_pages, save_pages_zip, save_pdf, save_zip,
};
pub use options::*;
pub use pack::*;
pub use stats::calculate_statistics;
pub use types::*;
