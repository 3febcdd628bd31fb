//! PDF drawing operations for label elements
//!
//! Every element is drawn into a rectangle given in inner-area coordinates;
//! the margins are added here, when the operations are generated.

use crate::Result;
use crate::document::LABEL_FONT;
use crate::drawing_utils::{fill_rectangles, set_fill_color, show_text};
use crate::font::{FontMetrics, encode_win_ansi};
use crate::layout::Rect;
use crate::style::{Color, TextStyle};
use crate::symbol::{LinearSymbol, MatrixSymbol, Symbol};
use crate::text::layout_text_box;
use crate::units::Margins;
use lopdf::{
    Document, ObjectId,
    content::{Content, Operation},
};
use tracing::{debug, trace};

/// Collects content operations for one page, offset by the page margins
#[derive(Debug)]
pub struct LabelCanvas {
    origin: (f32, f32),
    font_name: String,
    operations: Vec<Operation>,
}

impl LabelCanvas {
    pub fn new(margins: Margins) -> Self {
        Self {
            origin: (margins.horizontal, margins.vertical),
            font_name: LABEL_FONT.to_string(),
            operations: Vec::new(),
        }
    }

    /// Draw text with the font registered under `name` in the page resources
    pub fn with_font_name<S: Into<String>>(mut self, name: S) -> Self {
        self.font_name = name.into();
        self
    }

    fn to_page(&self, rect: Rect) -> Rect {
        rect.translate(self.origin.0, self.origin.1)
    }

    /// Place a linear barcode filling `rect`.
    ///
    /// Bars are exactly one x-dimension per module with no bleed and no
    /// quiet zone, and span the full band height.
    pub fn barcode(&mut self, symbol: &LinearSymbol, rect: Rect) {
        let xdim = symbol.x_dimension(rect.width);
        let rect = self.to_page(rect);
        trace!("Barcode with {} modules, x-dimension {}", symbol.module_count(), xdim);

        let bars = symbol.bars().into_iter().map(|(start, len)| Rect {
            x: rect.x + start as f32 * xdim,
            y: rect.y,
            width: len as f32 * xdim,
            height: rect.height,
        });
        self.operations.extend(fill_rectangles(bars, Color::black()));
    }

    /// Place a QR symbol in the top-left of `rect`, one x-dimension per module.
    ///
    /// With a square band the symbol fills it exactly.
    pub fn qr_code(&mut self, symbol: &MatrixSymbol, rect: Rect) {
        let xdim = symbol.x_dimension(rect.width);
        let rect = self.to_page(rect);
        let top = rect.top();
        trace!("QR symbol with {} modules, x-dimension {}", symbol.module_count(), xdim);

        let modules = (0..symbol.module_count()).flat_map(|row| {
            let y = top - (row + 1) as f32 * xdim;
            symbol
                .row_runs(row)
                .into_iter()
                .map(move |(start, len)| Rect {
                    x: rect.x + start as f32 * xdim,
                    y,
                    width: len as f32 * xdim,
                    height: xdim,
                })
        });
        self.operations.extend(fill_rectangles(modules, Color::black()));
    }

    /// Place `text` in `rect`, wrapped and aligned per `style`
    pub fn text_box(
        &mut self,
        text: &str,
        rect: Rect,
        style: &TextStyle,
        metrics: &dyn FontMetrics,
    ) -> Result<()> {
        let rect = self.to_page(rect);
        let lines = layout_text_box(text, rect, style, metrics);
        trace!("Text box {:?} with {} lines", text, lines.len());

        if lines.is_empty() {
            return Ok(());
        }

        self.operations.push(set_fill_color(style.color));
        for line in lines {
            let encoded = encode_win_ansi(&line.text)?;
            self.operations.extend(show_text(
                &self.font_name,
                style.font_size,
                line.x,
                line.baseline,
                encoded,
            ));
        }
        Ok(())
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn into_operations(self) -> Vec<Operation> {
        self.operations
    }
}

/// Append operations to a page's content
pub fn add_operations_to_page(
    doc: &mut Document,
    page_id: ObjectId,
    operations: Vec<Operation>,
) -> Result<()> {
    debug!(
        "Adding {} operations to page {:?}",
        operations.len(),
        page_id
    );

    let content = Content { operations };
    let content_bytes = content.encode()?;
    doc.add_page_contents(page_id, content_bytes)?;

    Ok(())
}
