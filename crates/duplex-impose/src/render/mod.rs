//! PDF rendering modules for imposition
//!
//! This module handles all PDF-specific operations:
//! - Embedding source pages as Form XObjects
//! - Building output sheets from layouts
//! - Drawing registration guides

mod guides;
mod sheet;
mod xobject;

pub use guides::{GuideResources, guide_operations};
pub use sheet::{render_sheet, xobject_name};
pub use xobject::{EmbeddedPage, copy_object_deep, create_page_xobject, embed_pages, page_size};
