use crate::units::Mm;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImposeError {
    #[error("Failed to load source document: {0}")]
    DocumentLoad(String),
    #[error("Source document is password-protected")]
    Encrypted,
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

impl ImposeError {
    /// Message suitable for showing to the person who picked the file
    pub fn user_message(&self) -> String {
        match self {
            ImposeError::DocumentLoad(_) | ImposeError::Encrypted => {
                "Error processing the file. Make sure it is not password-protected.".to_string()
            }
            other => other.to_string(),
        }
    }

    /// Whether this error came from reading the source document
    pub fn is_load_error(&self) -> bool {
        matches!(self, ImposeError::DocumentLoad(_) | ImposeError::Encrypted)
    }
}

pub type Result<T> = std::result::Result<T, ImposeError>;

/// Paper orientation
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Orientation {
    /// Portrait: height > width
    #[default]
    Portrait,
    /// Landscape: width > height
    Landscape,
}

/// The two paper sizes this tool works with
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaperSize {
    /// Output sheet, used in landscape
    A3,
    /// Source page, and the fallback when a page has no MediaBox
    A4,
}

impl PaperSize {
    /// Get base dimensions (always portrait)
    pub fn dimensions_mm(self) -> (Mm, Mm) {
        match self {
            PaperSize::A3 => (Mm(297.0), Mm(420.0)),
            PaperSize::A4 => (Mm(210.0), Mm(297.0)),
        }
    }

    /// Get dimensions with orientation applied
    pub fn dimensions_with_orientation(self, orientation: Orientation) -> (Mm, Mm) {
        let (w, h) = self.dimensions_mm();
        match orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }
}

/// Which physical side of the printed sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetSide {
    /// Printed first in duplex
    Front,
    /// Printed on the reverse; receives duplex correction
    Back,
}

impl SheetSide {
    pub fn is_back(self) -> bool {
        self == SheetSide::Back
    }
}

/// Half of an output sheet that a source page is drawn into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Centered at 1/4 of the sheet width
    Left,
    /// Centered at 3/4 of the sheet width
    Right,
}

/// Statistics about the imposition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImpositionStatistics {
    /// Total number of source pages
    pub source_pages: usize,
    /// Number of 4-page batches (the last one may be partial)
    pub batches: usize,
    /// Front sheets emitted (one per batch)
    pub front_sheets: usize,
    /// Back sheets emitted (batches with a 2nd or 4th page)
    pub back_sheets: usize,
    /// Output page count
    pub output_pages: usize,
    /// Slots left empty on emitted sheets
    pub empty_slots: usize,
}
