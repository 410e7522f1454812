//! Document I/O operations for imposition

use crate::types::*;
use lopdf::Document;
use std::path::Path;

/// Parse source bytes, rejecting malformed and password-protected documents
pub fn load_pdf_bytes(bytes: &[u8]) -> Result<Document> {
    let doc = Document::load_mem(bytes).map_err(classify_load_error)?;
    ensure_unencrypted(&doc)?;
    Ok(doc)
}

/// Load a single PDF document
pub async fn load_pdf(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::fs::read(&path).await?;
    let doc = tokio::task::spawn_blocking(move || load_pdf_bytes(&bytes)).await??;
    log::debug!(
        "loaded {} ({} pages)",
        path.display(),
        doc.get_pages().len()
    );
    Ok(doc)
}

/// Serialize a document to bytes
pub fn save_to_bytes(doc: &mut Document) -> Result<Vec<u8>> {
    let mut writer = Vec::new();
    doc.save_to(&mut writer)?;
    Ok(writer)
}

/// Save the imposed document
pub async fn save_pdf(mut doc: Document, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::task::spawn_blocking(move || save_to_bytes(&mut doc)).await??;
    tokio::fs::write(&path, bytes).await?;
    Ok(())
}

/// Fail if the document is encrypted in any way.
///
/// lopdf decrypts documents with an empty user password on load and drops
/// `/Encrypt` from the trailer; those are still rejected through the
/// recorded encryption state.
pub fn ensure_unencrypted(doc: &Document) -> Result<()> {
    if doc.encryption_state.is_some() || doc.trailer.has(b"Encrypt") {
        return Err(ImposeError::Encrypted);
    }
    Ok(())
}

fn classify_load_error(err: lopdf::Error) -> ImposeError {
    let message = err.to_string();
    let lower = message.to_lowercase();
    if lower.contains("encrypt") || lower.contains("password") || lower.contains("decrypt") {
        ImposeError::Encrypted
    } else {
        ImposeError::DocumentLoad(message)
    }
}
