//! Layout calculation modules for sheet packing
//!
//! This module handles all the geometric calculations for packing items:
//! - Grid layout (how many columns and rows fit on a page)
//! - Page planning (which item lands in which slot of which page)

mod grid;
mod plan;
mod types;

pub use grid::*;
pub use plan::*;
pub use types::*;
