//! Layout data types for imposition
//!
//! These types represent the intermediate layout calculations between
//! batch planning and PDF rendering. All lengths are in points.

use crate::types::{SheetSide, Slot};
use crate::units::Pt;

/// Width and height in points
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn from_pt(width: Pt, height: Pt) -> Self {
        Self::new(width.value(), height.value())
    }

    /// Both dimensions multiplied by `factor`
    pub fn scaled(self, factor: f32) -> Self {
        Self::new(self.width * factor, self.height * factor)
    }
}

/// A source page as seen by the layout code
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourcePage {
    /// Position in the source document (0-based)
    pub index: usize,
    /// Intrinsic size in points
    pub size: Size,
}

/// A rectangular area in points
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X position (left edge)
    pub x: f32,
    /// Y position (bottom edge)
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Center x coordinate
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Center y coordinate
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }
}

/// Final placement of a source page on an output sheet
#[derive(Debug, Clone, PartialEq)]
pub struct PagePlacement {
    /// Index of the source page
    pub source_page: usize,
    /// Slot the page was placed into
    pub slot: Slot,
    /// Draw rectangle after scaling and offsets
    pub rect: Rect,
    /// Scale factor applied to the source page
    pub scale: f32,
}

/// Registration guide for one sheet
#[derive(Debug, Clone, PartialEq)]
pub struct GuideMarks {
    /// X position of the dashed vertical line
    pub line_x: f32,
    /// Side label drawn near the bottom-left corner
    pub label: &'static str,
}

/// Everything needed to render one output sheet
#[derive(Debug, Clone, PartialEq)]
pub struct SheetLayout {
    /// Front or back of the physical sheet
    pub side: SheetSide,
    /// Batch this sheet was generated from
    pub batch: usize,
    /// Placements in drawing order
    pub placements: Vec<PagePlacement>,
    /// Registration guide, when enabled
    pub guide: Option<GuideMarks>,
}

impl SheetLayout {
    /// Source page drawn into `slot`, if any
    pub fn page_in(&self, slot: Slot) -> Option<usize> {
        self.placements
            .iter()
            .find(|p| p.slot == slot)
            .map(|p| p.source_page)
    }
}
