//! Page placement within a slot
//!
//! This module handles calculating where a source page is drawn on an
//! output sheet, accounting for:
//! - Slot center (left or right half of the sheet)
//! - Uniform scaling
//! - Global x/y offsets
//! - Duplex correction on back sheets
//! - Gutter spacing away from the centerline
//!
//! Nothing here is clipped or bounds-checked: extreme offsets simply place
//! pages off the sheet.

use crate::settings::ImpositionSettings;
use crate::types::{Orientation, PaperSize, SheetSide, Slot};
use crate::units::Pt;

use super::guide::guide_for;
use super::{PagePlacement, Rect, SheetLayout, SheetPlan, Size, SourcePage, plan_sheets};

/// Size of every output sheet (A3 landscape) in points
pub fn output_sheet_size() -> Size {
    let (width, height) = PaperSize::A3.dimensions_with_orientation(Orientation::Landscape);
    Size::from_pt(width.to_pt(), height.to_pt())
}

/// Center point of a slot on a sheet
pub fn slot_center(sheet: Size, slot: Slot) -> (f32, f32) {
    let half_width = sheet.width / 2.0;
    let center_x = match slot {
        Slot::Left => half_width / 2.0,
        Slot::Right => half_width + half_width / 2.0,
    };
    (center_x, sheet.height / 2.0)
}

/// Horizontal shift that pushes a slot away from the centerline by half the gutter
fn gutter_shift(gutter: Pt, slot: Slot) -> Pt {
    match slot {
        Slot::Left => -gutter.half(),
        Slot::Right => gutter.half(),
    }
}

/// Calculate the draw rectangle for a page of `page_size` in `slot`.
///
/// # Arguments
/// * `sheet` - Output sheet size in points
/// * `page_size` - Intrinsic size of the source page in points
/// * `slot` - Left or right half
/// * `settings` - Calibration settings (lengths in mm)
/// * `side` - Back sheets also receive the duplex correction
pub fn slot_rect(
    sheet: Size,
    page_size: Size,
    slot: Slot,
    settings: &ImpositionSettings,
    side: SheetSide,
) -> Rect {
    let (center_x, center_y) = slot_center(sheet, slot);
    let placed = page_size.scaled(settings.scale);

    let x_offset = settings.horizontal_offset(side).to_pt();
    let y_offset = settings.y_offset().to_pt();
    let shift = gutter_shift(settings.gutter().to_pt(), slot);

    let x = center_x - placed.width / 2.0 + x_offset.value() + shift.value();
    let y = center_y - placed.height / 2.0 + y_offset.value();

    Rect::new(x, y, placed.width, placed.height)
}

/// Place a source page into a slot. An absent page produces no placement.
pub fn place_page(
    sheet: Size,
    source: Option<SourcePage>,
    slot: Slot,
    settings: &ImpositionSettings,
    side: SheetSide,
) -> Option<PagePlacement> {
    let source = source?;
    Some(PagePlacement {
        source_page: source.index,
        slot,
        rect: slot_rect(sheet, source.size, slot, settings, side),
        scale: settings.scale,
    })
}

/// Resolve a sheet plan into concrete placements and guides.
///
/// `page_sizes` is indexed by source page; pages missing from it are
/// treated as absent.
pub fn layout_sheet(
    plan: &SheetPlan,
    page_sizes: &[Size],
    sheet: Size,
    settings: &ImpositionSettings,
) -> SheetLayout {
    let placements = plan
        .slots()
        .into_iter()
        .filter_map(|(slot, page)| {
            let source = page.index().and_then(|index| {
                page_sizes
                    .get(index)
                    .map(|&size| SourcePage { index, size })
            });
            place_page(sheet, source, slot, settings, plan.side)
        })
        .collect();

    let guide = settings
        .draw_center_line
        .then(|| guide_for(plan.side, sheet, settings));

    SheetLayout {
        side: plan.side,
        batch: plan.batch,
        placements,
        guide,
    }
}

/// Lay out every output sheet for a document whose pages have `page_sizes`
pub fn layout_sheets(
    page_sizes: &[Size],
    sheet: Size,
    settings: &ImpositionSettings,
) -> Vec<SheetLayout> {
    plan_sheets(page_sizes.len())
        .iter()
        .map(|plan| layout_sheet(plan, page_sizes, sheet, settings))
        .collect()
}
