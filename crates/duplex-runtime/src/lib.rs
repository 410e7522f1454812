use std::path::PathBuf;

mod advice;
mod worker;

pub use advice::{AdviceError, PrintingAdvisor, advice_prompt, advisor_instructions};
pub use worker::{spawn_worker, worker_task};

// Re-export types from the engine
pub use duplex_impose::{ImpositionSettings, ImpositionStatistics};

/// Commands sent from UI to worker
#[derive(Debug)]
pub enum PdfCommand {
    ImposeLoad {
        input_path: PathBuf,
    },
    /// Re-impose the loaded document. When several are queued only the
    /// newest one runs.
    ImposeProcess {
        request: RequestId,
        settings: ImpositionSettings,
    },
    ImposeSave {
        output_path: PathBuf,
    },
    ImposeCalculateStats,
    Advise {
        query: String,
        /// Extra free text for the advisor; may be empty
        context: String,
        settings: ImpositionSettings,
    },
}

/// Updates sent from worker to UI
#[derive(Debug, Clone)]
pub enum PdfUpdate {
    ImposeLoaded {
        page_count: usize,
    },
    ImposeComplete {
        request: RequestId,
        pdf_bytes: Vec<u8>,
        sheet_count: usize,
    },
    ImposeSaved {
        path: PathBuf,
    },
    ImposeStatsCalculated {
        stats: ImpositionStatistics,
    },
    AdviceReady {
        text: String,
    },
    Error {
        message: String,
    },
}

/// Identifies one imposition request. Later requests compare greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestId(pub u64);

impl RequestId {
    pub fn next(self) -> Self {
        RequestId(self.0 + 1)
    }
}
