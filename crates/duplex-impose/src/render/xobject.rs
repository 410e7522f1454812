//! Embedding source pages as Form XObjects
//!
//! Every source page is copied into the output document once, as a Form
//! XObject, and then drawn onto output sheets with a transformation.

use crate::constants::MAX_PAGE_TREE_DEPTH;
use crate::layout::Size;
use crate::types::{PaperSize, Result};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::collections::HashMap;

/// A source page copied into the output document
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmbeddedPage {
    /// The Form XObject in the output document
    pub xobject_id: ObjectId,
    /// Intrinsic page size in points
    pub size: Size,
}

// =============================================================================
// XObject Creation
// =============================================================================

/// Embed every page of `page_ids` into `output`, in order.
///
/// Resources shared between pages (fonts, images) are copied once.
pub fn embed_pages(
    output: &mut Document,
    source: &Document,
    page_ids: &[ObjectId],
) -> Result<Vec<EmbeddedPage>> {
    let mut cache = HashMap::new();
    page_ids
        .iter()
        .map(|&page_id| {
            let xobject_id = create_page_xobject(output, source, page_id, &mut cache)?;
            let size = page_size(source, page_id)?;
            Ok(EmbeddedPage { xobject_id, size })
        })
        .collect()
}

/// Create a Form XObject from a source page.
///
/// The XObject's matrix moves the page's MediaBox origin to (0, 0), so
/// drawing it at (x, y) puts the page's lower-left corner at (x, y).
///
/// # Arguments
/// * `output` - The output document to add the XObject to
/// * `source` - The source document containing the page
/// * `page_id` - The object ID of the source page
/// * `cache` - Cache to avoid copying the same object multiple times
pub fn create_page_xobject(
    output: &mut Document,
    source: &Document,
    page_id: ObjectId,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<ObjectId> {
    let page_dict = source.get_dictionary(page_id)?;
    let [llx, lly, urx, ury] = media_box(source, page_id);

    let content_data = get_page_content(source, page_dict)?;

    let mut xobject_dict = Dictionary::new();
    xobject_dict.set("Type", Object::Name(b"XObject".to_vec()));
    xobject_dict.set("Subtype", Object::Name(b"Form".to_vec()));
    xobject_dict.set("FormType", Object::Integer(1));
    xobject_dict.set(
        "BBox",
        Object::Array(vec![
            Object::Real(llx),
            Object::Real(lly),
            Object::Real(urx),
            Object::Real(ury),
        ]),
    );
    xobject_dict.set(
        "Matrix",
        Object::Array(vec![
            Object::Integer(1),
            Object::Integer(0),
            Object::Integer(0),
            Object::Integer(1),
            Object::Real(-llx),
            Object::Real(-lly),
        ]),
    );

    if let Some(resources) = inherited_attribute(source, page_id, b"Resources") {
        xobject_dict.set(
            "Resources",
            copy_object_deep(output, source, &resources, cache)?,
        );
    }

    Ok(output.add_object(Stream::new(xobject_dict, content_data)))
}

// =============================================================================
// Page Attributes
// =============================================================================

/// Look up a page attribute, following `/Parent` links for inherited ones
fn inherited_attribute(doc: &Document, page_id: ObjectId, key: &[u8]) -> Option<Object> {
    let mut current = doc.get_dictionary(page_id).ok()?;
    for _ in 0..MAX_PAGE_TREE_DEPTH {
        if let Ok(value) = current.get(key) {
            return Some(value.clone());
        }
        let parent_id = current.get(b"Parent").and_then(Object::as_reference).ok()?;
        current = doc.get_dictionary(parent_id).ok()?;
    }
    None
}

/// Resolve a direct object or a reference to one
fn resolve<'a>(doc: &'a Document, obj: &'a Object) -> Option<&'a Object> {
    match obj {
        Object::Reference(id) => doc.get_object(*id).ok(),
        other => Some(other),
    }
}

/// Page MediaBox as [llx, lly, urx, ury], falling back to A4 portrait
fn media_box(doc: &Document, page_id: ObjectId) -> [f32; 4] {
    let (default_w, default_h) = PaperSize::A4.dimensions_mm();
    let fallback = [0.0, 0.0, default_w.to_pt().value(), default_h.to_pt().value()];

    let Some(obj) = inherited_attribute(doc, page_id, b"MediaBox") else {
        return fallback;
    };
    let Some(Object::Array(values)) = resolve(doc, &obj) else {
        return fallback;
    };
    if values.len() != 4 {
        return fallback;
    }

    let mut rect = [0.0; 4];
    for (slot, value) in rect.iter_mut().zip(values) {
        match resolve(doc, value).and_then(|v| v.as_float().ok()) {
            Some(number) => *slot = number,
            None => return fallback,
        }
    }

    // MediaBox corners may be given in any order
    [
        rect[0].min(rect[2]),
        rect[1].min(rect[3]),
        rect[0].max(rect[2]),
        rect[1].max(rect[3]),
    ]
}

/// Get source page size in points
pub fn page_size(doc: &Document, page_id: ObjectId) -> Result<Size> {
    // Surface a missing page object as an error rather than a default size
    doc.get_dictionary(page_id)?;
    let [llx, lly, urx, ury] = media_box(doc, page_id);
    Ok(Size::new(urx - llx, ury - lly))
}

// =============================================================================
// Page Content Extraction
// =============================================================================

/// Get the content stream data from a page.
fn get_page_content(doc: &Document, page_dict: &Dictionary) -> Result<Vec<u8>> {
    let contents = match page_dict.get(b"Contents") {
        Ok(c) => c,
        Err(_) => return Ok(Vec::new()), // No content = blank page
    };

    match contents {
        Object::Reference(id) => match doc.get_object(*id)? {
            // Contents may point at an array of stream references
            Object::Array(arr) => get_concatenated_content_streams(doc, arr),
            _ => get_single_content_stream(doc, *id),
        },
        Object::Array(arr) => get_concatenated_content_streams(doc, arr),
        _ => Ok(Vec::new()),
    }
}

fn stream_data(stream: &Stream) -> Vec<u8> {
    stream
        .decompressed_content()
        .unwrap_or_else(|_| stream.content.clone())
}

/// Get content from a single content stream reference
fn get_single_content_stream(doc: &Document, id: ObjectId) -> Result<Vec<u8>> {
    if let Ok(stream) = doc.get_object(id)?.as_stream() {
        Ok(stream_data(stream))
    } else {
        Ok(Vec::new())
    }
}

/// Concatenate multiple content streams
fn get_concatenated_content_streams(doc: &Document, refs: &[Object]) -> Result<Vec<u8>> {
    let mut result = Vec::new();

    for obj in refs {
        if let Object::Reference(id) = obj {
            if let Ok(stream) = doc.get_object(*id)?.as_stream() {
                result.extend_from_slice(&stream_data(stream));
                result.push(b'\n');
            }
        }
    }

    Ok(result)
}

// =============================================================================
// Deep Copy
// =============================================================================

/// Deep copy an object from source to output document, following references.
///
/// Uses a cache to avoid copying the same object multiple times.
pub fn copy_object_deep(
    output: &mut Document,
    source: &Document,
    obj: &Object,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<Object> {
    match obj {
        Object::Reference(id) => {
            if let Some(&new_id) = cache.get(id) {
                return Ok(Object::Reference(new_id));
            }

            // Reserve the id first so self-referencing structures terminate
            let new_id = output.new_object_id();
            cache.insert(*id, new_id);

            let referenced = source.get_object(*id)?;
            let copied = copy_object_deep(output, source, referenced, cache)?;
            output.objects.insert(new_id, copied);

            Ok(Object::Reference(new_id))
        }
        Object::Dictionary(dict) => {
            let mut new_dict = Dictionary::new();
            for (key, value) in dict.iter() {
                new_dict.set(key.clone(), copy_object_deep(output, source, value, cache)?);
            }
            Ok(Object::Dictionary(new_dict))
        }
        Object::Array(arr) => {
            let new_arr: Result<Vec<_>> = arr
                .iter()
                .map(|item| copy_object_deep(output, source, item, cache))
                .collect();
            Ok(Object::Array(new_arr?))
        }
        Object::Stream(stream) => {
            let mut new_dict = Dictionary::new();
            for (key, value) in stream.dict.iter() {
                new_dict.set(key.clone(), copy_object_deep(output, source, value, cache)?);
            }
            Ok(Object::Stream(Stream {
                dict: new_dict,
                content: stream.content.clone(),
                allows_compression: stream.allows_compression,
                start_position: None,
            }))
        }
        _ => Ok(obj.clone()),
    }
}
