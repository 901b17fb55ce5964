//! Bulk generation of captioned QR code labels.
//!
//! Numbers come from a range or an explicit list, are formatted into label
//! text such as `DU0001`, and each text is rendered as a QR code with the
//! text printed above it.

mod font;
mod input;
mod label;
mod options;
mod qr;
mod types;

pub use font::{builtin_font, load_font};
pub use input::{format_label, label_texts, load_number_list, parse_number_list};
pub use label::{archive_name, archive_names, generate_labels, render_label};
pub use options::*;
pub use qr::render_qr;
pub use types::*;

pub use ab_glyph::FontVec;
