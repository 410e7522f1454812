//! Shared constants for duplex imposition
//!
//! This module centralizes magic numbers used throughout the
//! imposition process.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm).
///
/// Kept as the fixed five-decimal factor so every offset converts the same
/// way on every sheet.
pub const POINTS_PER_MM: f32 = 2.83465;

// =============================================================================
// Paper
// =============================================================================

/// Source pages consumed per batch (two fronts, two backs)
pub const PAGES_PER_BATCH: usize = 4;

/// Guard against cyclic `/Parent` chains when resolving inherited attributes
pub const MAX_PAGE_TREE_DEPTH: usize = 32;

// =============================================================================
// Registration Guides
// =============================================================================

/// Stroke width of the center guide line (points)
pub const GUIDE_LINE_WIDTH: f32 = 1.0;

/// Gray level of the center guide line
pub const GUIDE_LINE_GRAY: f32 = 0.7;

/// Stroke opacity of the center guide line
pub const GUIDE_LINE_OPACITY: f32 = 0.5;

/// Dash pattern of the center guide line: 5pt dash, 5pt gap
pub const GUIDE_DASH_PATTERN: [f32; 2] = [5.0, 5.0];

/// Font size of the side label (points)
pub const GUIDE_LABEL_FONT_SIZE: f32 = 8.0;

/// Gray level of the side label
pub const GUIDE_LABEL_GRAY: f32 = 0.5;

/// Position of the side label from the bottom-left corner (points)
pub const GUIDE_LABEL_POSITION: (f32, f32) = (10.0, 10.0);

/// Label drawn on front sheets
pub const FRONT_LABEL: &str = "FRENTE";

/// Label drawn on back sheets
pub const BACK_LABEL: &str = "DORSO";

// =============================================================================
// Resource Names
// =============================================================================

/// Resource name of the guide label font
pub const GUIDE_FONT_NAME: &str = "F1";

/// Resource name of the guide line graphics state
pub const GUIDE_GSTATE_NAME: &str = "GS0";
