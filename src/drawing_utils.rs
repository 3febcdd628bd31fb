//! Shared drawing utilities for PDF content operations

use crate::layout::Rect;
use crate::style::Color;
use lopdf::{Object, content::Operation};

/// Set the non-stroking (fill) color
pub fn set_fill_color(color: Color) -> Operation {
    Operation::new("rg", vec![color.r.into(), color.g.into(), color.b.into()])
}

/// Append a rectangle to the current path
pub fn rectangle(rect: Rect) -> Operation {
    Operation::new(
        "re",
        vec![
            rect.x.into(),
            rect.y.into(),
            rect.width.into(),
            rect.height.into(),
        ],
    )
}

/// Fill the current path with the nonzero winding rule
pub fn fill() -> Operation {
    Operation::new("f", vec![])
}

/// Draw filled rectangles sharing one color, as a single path
pub fn fill_rectangles(rects: impl IntoIterator<Item = Rect>, color: Color) -> Vec<Operation> {
    let mut operations = vec![set_fill_color(color)];
    let start = operations.len();
    operations.extend(rects.into_iter().map(rectangle));
    if operations.len() == start {
        return Vec::new();
    }
    operations.push(fill());
    operations
}

/// Show one line of already encoded text with its baseline at `(x, y)`
pub fn show_text(font_name: &str, font_size: f32, x: f32, y: f32, encoded: Vec<u8>) -> Vec<Operation> {
    vec![
        Operation::new("BT", vec![]),
        Operation::new(
            "Tf",
            vec![Object::Name(font_name.as_bytes().to_vec()), font_size.into()],
        ),
        Operation::new("Td", vec![x.into(), y.into()]),
        Operation::new(
            "Tj",
            vec![Object::String(encoded, lopdf::StringFormat::Literal)],
        ),
        Operation::new("ET", vec![]),
    ]
}
