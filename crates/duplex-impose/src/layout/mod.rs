//! Layout calculation modules for imposition
//!
//! This module handles all the geometric calculations, none of which
//! touch a PDF:
//! - Batch planning (which source page goes on which sheet and slot)
//! - Content placement (slot centers, offsets, gutter, scaling)
//! - Registration guide positions

mod batch;
mod guide;
mod placement;
mod types;

pub use batch::*;
pub use guide::*;
pub use placement::*;
pub use types::*;
