use crate::constants::PAGES_PER_BATCH;
use crate::impose::impose_pages;
use crate::settings::ImpositionSettings;
use crate::types::*;
use lopdf::{Document, ObjectId};

/// Generate a calibration preview of the imposition.
///
/// Only the first `max_batches` batches are imposed, which is enough to
/// print a test sheet and measure front/back misregistration before
/// printing the whole document.
pub async fn generate_preview(
    document: &Document,
    settings: &ImpositionSettings,
    max_batches: usize,
) -> Result<Document> {
    if max_batches == 0 {
        return Err(ImposeError::Config(
            "Preview needs at least one batch".to_string(),
        ));
    }

    let document = document.clone();
    let settings = *settings;

    tokio::task::spawn_blocking(move || {
        let page_ids = limit_document_pages(&document, max_batches * PAGES_PER_BATCH);
        impose_pages(&document, &page_ids, &settings)
    })
    .await?
}

fn limit_document_pages(document: &Document, max_pages: usize) -> Vec<ObjectId> {
    document
        .get_pages()
        .values()
        .copied()
        .take(max_pages)
        .collect()
}
