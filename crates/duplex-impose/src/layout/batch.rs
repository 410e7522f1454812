//! Batch planning
//!
//! Source pages are read four at a time in the order
//! front A, back A, front B, back B. Each batch becomes a front sheet
//! (A left, B right) and, when it has any back page, a back sheet with the
//! slots swapped (B's back left, A's back right). After a long-edge flip
//! and a cut down the middle, each back lands behind its own front.

use crate::constants::PAGES_PER_BATCH;
use crate::types::{SheetSide, Slot};

/// One role of a batch: either a source page index or nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchPage {
    Present(usize),
    Absent,
}

impl BatchPage {
    /// Page `index` if it exists in a document of `page_count` pages
    pub fn at(index: usize, page_count: usize) -> Self {
        if index < page_count {
            BatchPage::Present(index)
        } else {
            BatchPage::Absent
        }
    }

    pub fn index(self) -> Option<usize> {
        match self {
            BatchPage::Present(index) => Some(index),
            BatchPage::Absent => None,
        }
    }

    pub fn is_present(self) -> bool {
        matches!(self, BatchPage::Present(_))
    }
}

/// Four consecutive source pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Batch {
    /// Position of this batch in the document
    pub number: usize,
    /// A batch only exists when its first page does
    pub front_a: usize,
    pub back_a: BatchPage,
    pub front_b: BatchPage,
    pub back_b: BatchPage,
}

/// Which pages go where on one output sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetPlan {
    pub side: SheetSide,
    pub batch: usize,
    pub left: BatchPage,
    pub right: BatchPage,
}

impl SheetPlan {
    /// Slots in drawing order, paired with their page
    pub fn slots(&self) -> [(Slot, BatchPage); 2] {
        [(Slot::Left, self.left), (Slot::Right, self.right)]
    }
}

impl Batch {
    pub fn front_sheet(&self) -> SheetPlan {
        SheetPlan {
            side: SheetSide::Front,
            batch: self.number,
            left: BatchPage::Present(self.front_a),
            right: self.front_b,
        }
    }

    /// Back sheet, swapped relative to the front. `None` when the batch has
    /// no back pages at all.
    pub fn back_sheet(&self) -> Option<SheetPlan> {
        match (self.back_a, self.back_b) {
            (BatchPage::Absent, BatchPage::Absent) => None,
            (back_a, back_b) => Some(SheetPlan {
                side: SheetSide::Back,
                batch: self.number,
                left: back_b,
                right: back_a,
            }),
        }
    }
}

/// Split `page_count` pages into batches of four
pub fn batches(page_count: usize) -> impl Iterator<Item = Batch> {
    (0..page_count)
        .step_by(PAGES_PER_BATCH)
        .enumerate()
        .map(move |(number, start)| Batch {
            number,
            front_a: start,
            back_a: BatchPage::at(start + 1, page_count),
            front_b: BatchPage::at(start + 2, page_count),
            back_b: BatchPage::at(start + 3, page_count),
        })
}

/// Output sheets in generation order: front then back, batch by batch
pub fn plan_sheets(page_count: usize) -> Vec<SheetPlan> {
    batches(page_count)
        .flat_map(|batch| std::iter::once(batch.front_sheet()).chain(batch.back_sheet()))
        .collect()
}
