pub mod constants;
pub mod impose;
pub mod layout;
pub mod render;
mod preview;
mod settings;
mod stats;
mod types;
mod units;

pub use impose::{
    impose, impose_async, impose_document, load_pdf, load_pdf_bytes, save_pdf, save_to_bytes,
};
pub use preview::generate_preview;
pub use settings::ImpositionSettings;
pub use stats::{calculate_statistics, document_statistics};
pub use types::*;
pub use units::{Mm, Pt};
