//! Output sheet rendering
//!
//! Turns a [`SheetLayout`] into a page of the output document: one
//! `Do` per placed source page, then the registration guide.

use crate::layout::{PagePlacement, SheetLayout, Size};
use crate::types::Result;
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

use super::guides::{GuideResources, guide_operations};
use super::xobject::EmbeddedPage;

/// Resource name of a source page's XObject
pub fn xobject_name(source_page: usize) -> String {
    format!("P{}", source_page)
}

/// Render one output sheet and return its page object ID.
///
/// The page is not yet linked into a Kids array; the caller does that.
pub fn render_sheet(
    output: &mut Document,
    embedded: &[EmbeddedPage],
    layout: &SheetLayout,
    sheet: Size,
    parent_pages_id: ObjectId,
    guide_resources: Option<&GuideResources>,
) -> Result<ObjectId> {
    let mut page_dict = Dictionary::new();
    page_dict.set("Type", Object::Name(b"Page".to_vec()));
    page_dict.set("Parent", Object::Reference(parent_pages_id));
    page_dict.set(
        "MediaBox",
        Object::Array(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(sheet.width),
            Object::Real(sheet.height),
        ]),
    );

    let mut operations = Vec::new();
    let mut xobjects = Dictionary::new();

    for placement in &layout.placements {
        let Some(page) = embedded.get(placement.source_page) else {
            log::warn!(
                "skipping placement of missing source page {}",
                placement.source_page
            );
            continue;
        };
        let name = xobject_name(placement.source_page);
        xobjects.set(name.as_bytes(), Object::Reference(page.xobject_id));
        operations.extend(placement_operations(&name, placement));
    }

    let mut resources = Dictionary::new();
    resources.set("XObject", Object::Dictionary(xobjects));

    if let Some(guide) = &layout.guide {
        match guide_resources {
            Some(shared) => {
                shared.register(&mut resources);
                operations.extend(guide_operations(guide, sheet.height));
            }
            None => log::warn!("guide requested without guide resources; not drawn"),
        }
    }

    let content = Content { operations }.encode()?;
    let content_id = output.add_object(Stream::new(Dictionary::new(), content));

    page_dict.set("Contents", Object::Reference(content_id));
    page_dict.set("Resources", Object::Dictionary(resources));

    Ok(output.add_object(page_dict))
}

/// `q s 0 0 s x y cm /Pn Do Q`
fn placement_operations(name: &str, placement: &PagePlacement) -> Vec<Operation> {
    let rect = &placement.rect;
    let scale = placement.scale;
    vec![
        Operation::new("q", vec![]),
        Operation::new(
            "cm",
            vec![
                Object::Real(scale),
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(scale),
                Object::Real(rect.x),
                Object::Real(rect.y),
            ],
        ),
        Operation::new("Do", vec![Object::Name(name.as_bytes().to_vec())]),
        Operation::new("Q", vec![]),
    ]
}
