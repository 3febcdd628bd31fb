//! Label composition: draws the four bands in their fixed order

use crate::Result;
use crate::document::{LABEL_FONT, new_label_document, serialize};
use crate::drawing::{LabelCanvas, add_operations_to_page};
use crate::font::{FontMetrics, StandardFont};
use crate::label::{Label, LabelRequest};
use crate::layout::Band;
use crate::symbol::{LinearSymbol, MatrixSymbol};
use lopdf::{Document, ObjectId};
use tracing::{debug, instrument};

/// Renders labels into standalone PDF documents.
///
/// A composer holds no per-label state, so one instance can render any
/// number of labels, including from several threads.
#[derive(Default)]
pub struct LabelComposer {
    metrics: Option<Box<dyn FontMetrics>>,
}

impl LabelComposer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Measure text with `metrics` instead of the built-in font tables
    pub fn with_font_metrics(mut self, metrics: Box<dyn FontMetrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Render a label to PDF bytes
    #[instrument(skip(self, label), fields(address = %label.request().address))]
    pub fn render(&self, label: &Label) -> Result<Vec<u8>> {
        let font = StandardFont::from_family(&label.request().style.font_family)?;
        let (mut doc, page_id) = new_label_document(label.page(), font);

        self.draw(&mut doc, page_id, label, font, LABEL_FONT)?;

        serialize(doc, label.request().style.compress)
    }

    /// Validate a request and render it
    pub fn render_request(&self, request: LabelRequest) -> Result<Vec<u8>> {
        let label = Label::new(request)?;
        self.render(&label)
    }

    /// Draw the label onto an existing page.
    ///
    /// The page resources must already bind `font_name` to `font`.
    pub fn draw(
        &self,
        doc: &mut Document,
        page_id: ObjectId,
        label: &Label,
        font: StandardFont,
        font_name: &str,
    ) -> Result<()> {
        let request = label.request();
        let layout = label.layout();
        let metrics: &dyn FontMetrics = match &self.metrics {
            Some(metrics) => metrics.as_ref(),
            None => &font,
        };
        let mut canvas = LabelCanvas::new(label.margins()).with_font_name(font_name);

        debug!("Drawing barcode band");
        let barcode = LinearSymbol::code128(&request.address)?;
        canvas.barcode(&barcode, layout.rect(Band::Barcode));

        debug!("Drawing address band");
        canvas.text_box(
            &request.address,
            layout.rect(Band::Address),
            &request.style.address_text(),
            metrics,
        )?;

        debug!("Drawing QR code band");
        let qr = MatrixSymbol::qr_medium(&request.url)?;
        canvas.qr_code(&qr, layout.rect(Band::QrCode));

        if let Some(footer) = request.footer_text() {
            debug!("Drawing footer band");
            canvas.text_box(
                footer,
                layout.rect(Band::Footer),
                &request.style.footer_text(),
                metrics,
            )?;
        }

        add_operations_to_page(doc, page_id, canvas.into_operations())
    }
}

/// Render a single label request with the default composer
pub fn render(request: LabelRequest) -> Result<Vec<u8>> {
    LabelComposer::new().render_request(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LabelError;
    use crate::units::PageSpec;

    fn request() -> LabelRequest {
        LabelRequest::new("00:11:22:33:44:55", "http://mgmt.ffhb.de/#/n/001122334455")
    }

    #[test]
    fn test_render_produces_pdf() {
        let bytes = render(request().with_footer("Freifunk Bremen")).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 500);
    }

    #[test]
    fn test_invalid_geometry_fails_before_rendering() {
        let result = render(request().with_page(PageSpec::new(50.0, 50.0)));
        assert!(matches!(result, Err(LabelError::InvalidGeometry(_))));
    }

    #[test]
    fn test_unknown_font_family() {
        let result = render(request().with_font_family("Wingdings"));
        assert!(matches!(result, Err(LabelError::ConfigError(_))));
    }

    #[test]
    fn test_barcode_encoding_failure_propagates() {
        let result = render(LabelRequest::new("\u{4f60}\u{597d}", "http://example.org"));
        assert!(matches!(result, Err(LabelError::BarcodeEncoding(_))));
    }

    #[test]
    fn test_custom_metrics_are_used() {
        struct Wide;
        impl FontMetrics for Wide {
            fn char_width(&self, _ch: char, font_size: f32) -> f32 {
                font_size
            }
        }

        let composer = LabelComposer::new().with_font_metrics(Box::new(Wide));
        assert!(composer.render_request(request()).is_ok());
    }
}
