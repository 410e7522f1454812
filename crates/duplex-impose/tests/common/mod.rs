#![allow(dead_code)]

use lopdf::content::Content;
use lopdf::{
    Dictionary, Document, EncryptionState, EncryptionVersion, Object, ObjectId, Permissions,
    Stream,
};

/// A4 portrait in whole points, as most producers write it
pub const A4_WIDTH_PT: i64 = 595;
pub const A4_HEIGHT_PT: i64 = 842;

pub fn a4_media_box() -> Object {
    Object::Array(vec![
        Object::Integer(0),
        Object::Integer(0),
        Object::Integer(A4_WIDTH_PT),
        Object::Integer(A4_HEIGHT_PT),
    ])
}

/// Content of source page `index`, recognizable after embedding
pub fn page_marker(index: usize) -> String {
    format!("% source page {}\n", index)
}

/// Build a document whose pages each carry their own MediaBox
pub fn create_test_pdf(num_pages: usize) -> Document {
    create_test_pdf_with_box(num_pages, a4_media_box())
}

pub fn create_test_pdf_with_box(num_pages: usize, media_box: Object) -> Document {
    let mut doc = Document::with_version("1.7");

    // Create page tree root ID
    let pages_id = doc.new_object_id();

    let mut kids = Vec::new();
    for index in 0..num_pages {
        let content_id = doc.add_object(Stream::new(
            Dictionary::new(),
            page_marker(index).into_bytes(),
        ));

        let page_id = doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(pages_id)),
            ("MediaBox", media_box.clone()),
            ("Resources", Object::Dictionary(Dictionary::new())),
            ("Contents", Object::Reference(content_id)),
        ]));
        kids.push(Object::Reference(page_id));
    }

    finish(&mut doc, pages_id, kids, None);
    doc
}

/// Build a document whose MediaBox lives only on the Pages node
pub fn create_inherited_box_pdf(num_pages: usize, media_box: Object) -> Document {
    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let mut kids = Vec::new();
    for index in 0..num_pages {
        let content_id = doc.add_object(Stream::new(
            Dictionary::new(),
            page_marker(index).into_bytes(),
        ));
        let page_id = doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(pages_id)),
            ("Contents", Object::Reference(content_id)),
        ]));
        kids.push(Object::Reference(page_id));
    }

    finish(&mut doc, pages_id, kids, Some(media_box));
    doc
}

fn finish(doc: &mut Document, pages_id: ObjectId, kids: Vec<Object>, media_box: Option<Object>) {
    let count = kids.len() as i64;
    let mut pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(kids)),
        ("Count", Object::Integer(count)),
    ]);
    if let Some(media_box) = media_box {
        pages_dict.set("MediaBox", media_box);
    }
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));

    doc.trailer.set("Root", catalog_id);
}

pub fn to_bytes(mut doc: Document) -> Vec<u8> {
    let mut writer = Vec::new();
    doc.save_to(&mut writer).unwrap();
    writer
}

pub fn test_pdf_bytes(num_pages: usize) -> Vec<u8> {
    to_bytes(create_test_pdf(num_pages))
}

/// Serialized test document protected with RC4 128-bit encryption.
///
/// An empty `user_password` gives a document anyone can open but that is
/// still owner-password protected.
pub fn encrypted_pdf_bytes(num_pages: usize, user_password: &str) -> Vec<u8> {
    let mut doc = create_test_pdf(num_pages);
    let file_id = Object::string_literal(b"duplex-test-file-id".to_vec());
    doc.trailer
        .set("ID", Object::Array(vec![file_id.clone(), file_id]));

    let state = EncryptionState::try_from(EncryptionVersion::V2 {
        document: &doc,
        owner_password: "owner",
        user_password,
        key_length: 128,
        permissions: Permissions::all(),
    })
    .unwrap();
    doc.encrypt(&state).unwrap();

    to_bytes(doc)
}

/// A source page drawn on an output sheet
#[derive(Debug, Clone, PartialEq)]
pub struct DrawnPage {
    pub name: String,
    pub x: f32,
    pub y: f32,
    pub scale: f32,
}

/// What one output sheet draws, recovered from its content stream
#[derive(Debug, Clone, Default)]
pub struct SheetContent {
    pub drawn: Vec<DrawnPage>,
    pub strokes: usize,
    pub line_xs: Vec<f32>,
    pub labels: Vec<String>,
    pub raw: Vec<u8>,
}

impl SheetContent {
    pub fn names(&self) -> Vec<&str> {
        self.drawn.iter().map(|d| d.name.as_str()).collect()
    }

    pub fn find(&self, name: &str) -> &DrawnPage {
        self.drawn
            .iter()
            .find(|d| d.name == name)
            .unwrap_or_else(|| panic!("{} not drawn on sheet", name))
    }
}

pub fn page_ids(doc: &Document) -> Vec<ObjectId> {
    doc.get_pages().values().copied().collect()
}

pub fn sheet_content(doc: &Document, page_id: ObjectId) -> SheetContent {
    let raw = doc.get_page_content(page_id).unwrap();
    let content = Content::decode(&raw).unwrap();

    let mut sheet = SheetContent {
        raw,
        ..Default::default()
    };
    let mut matrix = [1.0f32, 0.0, 0.0, 1.0, 0.0, 0.0];

    for op in &content.operations {
        match op.operator.as_str() {
            "cm" => {
                for (slot, operand) in matrix.iter_mut().zip(&op.operands) {
                    *slot = operand.as_float().unwrap();
                }
            }
            "Do" => {
                let name = op.operands[0].as_name().unwrap();
                sheet.drawn.push(DrawnPage {
                    name: String::from_utf8(name.to_vec()).unwrap(),
                    x: matrix[4],
                    y: matrix[5],
                    scale: matrix[0],
                });
            }
            "l" => sheet.line_xs.push(op.operands[0].as_float().unwrap()),
            "S" => sheet.strokes += 1,
            "Tj" => {
                let text = op.operands[0].as_str().unwrap();
                sheet.labels.push(String::from_utf8(text.to_vec()).unwrap());
            }
            _ => {}
        }
    }

    sheet
}

pub fn all_sheets(doc: &Document) -> Vec<SheetContent> {
    page_ids(doc)
        .into_iter()
        .map(|id| sheet_content(doc, id))
        .collect()
}

pub fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 0.01,
        "expected {}, got {}",
        expected,
        actual
    );
}
