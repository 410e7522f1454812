//! Registration guide geometry
//!
//! Each sheet gets a dashed vertical line at the sheet center, shifted by
//! the same horizontal offset its pages receive, plus a side label.

use crate::constants::{BACK_LABEL, FRONT_LABEL};
use crate::settings::ImpositionSettings;
use crate::types::SheetSide;

use super::{GuideMarks, Size};

/// X position of the center guide for a sheet side
pub fn guide_line_x(side: SheetSide, sheet: Size, settings: &ImpositionSettings) -> f32 {
    sheet.width / 2.0 + settings.horizontal_offset(side).to_pt().value()
}

/// Label printed on a sheet side
pub fn side_label(side: SheetSide) -> &'static str {
    match side {
        SheetSide::Front => FRONT_LABEL,
        SheetSide::Back => BACK_LABEL,
    }
}

pub fn guide_for(side: SheetSide, sheet: Size, settings: &ImpositionSettings) -> GuideMarks {
    GuideMarks {
        line_x: guide_line_x(side, sheet, settings),
        label: side_label(side),
    }
}
