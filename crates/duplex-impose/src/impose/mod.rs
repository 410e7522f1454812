//! Duplex imposition - two A4 pages per A3 sheet
//!
//! This module orchestrates the imposition process:
//! 1. Load the source document and embed its pages
//! 2. Plan sheets batch by batch (front, then swapped back)
//! 3. Place pages with offsets, gutter and duplex correction
//! 4. Render sheets with optional registration guides

mod io;

pub use io::{ensure_unencrypted, load_pdf, load_pdf_bytes, save_pdf, save_to_bytes};

use crate::layout::{Size, layout_sheets, output_sheet_size};
use crate::render::{GuideResources, embed_pages, render_sheet};
use crate::settings::ImpositionSettings;
use crate::types::*;
use lopdf::{Dictionary, Document, Object, ObjectId};

/// Impose raw PDF bytes and return the output PDF bytes.
///
/// Fails with [`ImposeError::DocumentLoad`] or [`ImposeError::Encrypted`]
/// before any output exists when the source cannot be read.
pub fn impose(source: &[u8], settings: &ImpositionSettings) -> Result<Vec<u8>> {
    let document = load_pdf_bytes(source)?;
    let mut output = impose_document(&document, settings)?;
    save_to_bytes(&mut output)
}

/// [`impose`] on the blocking thread pool
pub async fn impose_async(source: Vec<u8>, settings: ImpositionSettings) -> Result<Vec<u8>> {
    tokio::task::spawn_blocking(move || impose(&source, &settings)).await?
}

/// Impose an already loaded document
pub fn impose_document(source: &Document, settings: &ImpositionSettings) -> Result<Document> {
    let page_ids: Vec<ObjectId> = source.get_pages().values().copied().collect();
    impose_pages(source, &page_ids, settings)
}

/// Impose the given pages of `source`, in order
pub(crate) fn impose_pages(
    source: &Document,
    page_ids: &[ObjectId],
    settings: &ImpositionSettings,
) -> Result<Document> {
    let sheet = output_sheet_size();

    let mut output = Document::with_version("1.7");
    let pages_tree_id = output.new_object_id();

    let embedded = embed_pages(&mut output, source, page_ids)?;
    let page_sizes: Vec<Size> = embedded.iter().map(|page| page.size).collect();
    let layouts = layout_sheets(&page_sizes, sheet, settings);

    log::info!(
        "imposing {} source pages onto {} sheets",
        page_ids.len(),
        layouts.len()
    );

    let guide_resources = settings
        .draw_center_line
        .then(|| GuideResources::create(&mut output));

    let mut page_refs = Vec::with_capacity(layouts.len());
    for layout in &layouts {
        log::debug!(
            "batch {} {:?} sheet: {} pages",
            layout.batch,
            layout.side,
            layout.placements.len()
        );
        let page_id = render_sheet(
            &mut output,
            &embedded,
            layout,
            sheet,
            pages_tree_id,
            guide_resources.as_ref(),
        )?;
        page_refs.push(Object::Reference(page_id));
    }

    finish_page_tree(&mut output, pages_tree_id, page_refs);
    Ok(output)
}

/// Create the pages tree and catalog
fn finish_page_tree(output: &mut Document, pages_tree_id: ObjectId, page_refs: Vec<Object>) {
    let count = page_refs.len() as i64;
    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(page_refs)),
        ("Count", Object::Integer(count)),
    ]);
    output
        .objects
        .insert(pages_tree_id, Object::Dictionary(pages_dict));

    let catalog_id = output.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_tree_id)),
    ]));

    output.trailer.set("Root", catalog_id);
}
