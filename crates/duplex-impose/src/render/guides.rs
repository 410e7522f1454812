//! Registration guide rendering
//!
//! Produces content stream operations for the dashed center line and the
//! side label, plus the shared font and graphics state they use.

use crate::constants::{
    GUIDE_DASH_PATTERN, GUIDE_FONT_NAME, GUIDE_GSTATE_NAME, GUIDE_LABEL_FONT_SIZE,
    GUIDE_LABEL_GRAY, GUIDE_LABEL_POSITION, GUIDE_LINE_GRAY, GUIDE_LINE_OPACITY, GUIDE_LINE_WIDTH,
};
use crate::layout::GuideMarks;
use lopdf::content::Operation;
use lopdf::{Dictionary, Document, Object, ObjectId};

/// Font and graphics state objects shared by every sheet's guides
#[derive(Debug, Clone, Copy)]
pub struct GuideResources {
    pub font_id: ObjectId,
    pub gstate_id: ObjectId,
}

impl GuideResources {
    /// Add the label font and the translucent stroke state to `output`
    pub fn create(output: &mut Document) -> Self {
        let mut font_dict = Dictionary::new();
        font_dict.set("Type", Object::Name(b"Font".to_vec()));
        font_dict.set("Subtype", Object::Name(b"Type1".to_vec()));
        font_dict.set("BaseFont", Object::Name(b"Helvetica".to_vec()));
        let font_id = output.add_object(font_dict);

        let mut gstate_dict = Dictionary::new();
        gstate_dict.set("Type", Object::Name(b"ExtGState".to_vec()));
        gstate_dict.set("CA", Object::Real(GUIDE_LINE_OPACITY));
        let gstate_id = output.add_object(gstate_dict);

        Self { font_id, gstate_id }
    }

    /// Register both objects in a page's resource dictionary
    pub fn register(&self, resources: &mut Dictionary) {
        let mut fonts = Dictionary::new();
        fonts.set(GUIDE_FONT_NAME, Object::Reference(self.font_id));
        resources.set("Font", Object::Dictionary(fonts));

        let mut gstates = Dictionary::new();
        gstates.set(GUIDE_GSTATE_NAME, Object::Reference(self.gstate_id));
        resources.set("ExtGState", Object::Dictionary(gstates));
    }
}

/// Operations drawing one guide line spanning `sheet_height` and its label
pub fn guide_operations(guide: &GuideMarks, sheet_height: f32) -> Vec<Operation> {
    let mut ops = center_line(guide.line_x, sheet_height);
    ops.extend(side_label(guide.label));
    ops
}

fn center_line(x: f32, sheet_height: f32) -> Vec<Operation> {
    let dash: Vec<Object> = GUIDE_DASH_PATTERN
        .iter()
        .map(|&len| Object::Real(len))
        .collect();

    vec![
        Operation::new("q", vec![]),
        Operation::new("gs", vec![Object::Name(GUIDE_GSTATE_NAME.as_bytes().to_vec())]),
        Operation::new("G", vec![Object::Real(GUIDE_LINE_GRAY)]),
        Operation::new("w", vec![Object::Real(GUIDE_LINE_WIDTH)]),
        Operation::new("d", vec![Object::Array(dash), Object::Integer(0)]),
        Operation::new("m", vec![Object::Real(x), Object::Integer(0)]),
        Operation::new("l", vec![Object::Real(x), Object::Real(sheet_height)]),
        Operation::new("S", vec![]),
        Operation::new("Q", vec![]),
    ]
}

fn side_label(text: &str) -> Vec<Operation> {
    let (x, y) = GUIDE_LABEL_POSITION;
    vec![
        Operation::new("q", vec![]),
        Operation::new("g", vec![Object::Real(GUIDE_LABEL_GRAY)]),
        Operation::new("BT", vec![]),
        Operation::new(
            "Tf",
            vec![
                Object::Name(GUIDE_FONT_NAME.as_bytes().to_vec()),
                Object::Real(GUIDE_LABEL_FONT_SIZE),
            ],
        ),
        Operation::new("Td", vec![Object::Real(x), Object::Real(y)]),
        Operation::new("Tj", vec![Object::string_literal(text)]),
        Operation::new("ET", vec![]),
        Operation::new("Q", vec![]),
    ]
}
