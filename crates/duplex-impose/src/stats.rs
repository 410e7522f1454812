use crate::layout::{batches, plan_sheets};
use crate::types::*;
use lopdf::Document;

/// Calculate statistics for imposing `source_pages` pages.
///
/// Counts come from the same sheet plan the renderer uses.
pub fn calculate_statistics(source_pages: usize) -> ImpositionStatistics {
    let plan = plan_sheets(source_pages);

    let back_sheets = plan.iter().filter(|sheet| sheet.side.is_back()).count();
    let front_sheets = plan.len() - back_sheets;
    let empty_slots = plan
        .iter()
        .flat_map(|sheet| [sheet.left, sheet.right])
        .filter(|page| !page.is_present())
        .count();

    ImpositionStatistics {
        source_pages,
        batches: batches(source_pages).count(),
        front_sheets,
        back_sheets,
        output_pages: plan.len(),
        empty_slots,
    }
}

/// Statistics for an already loaded document
pub fn document_statistics(document: &Document) -> ImpositionStatistics {
    calculate_statistics(document.get_pages().len())
}
