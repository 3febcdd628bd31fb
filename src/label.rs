//! Label requests and validated labels

use crate::Result;
use crate::layout::{LabelLayout, compute_layout};
use crate::style::LabelStyle;
use crate::units::{MarginSpec, Margins, PageSize, PageSpec};
use tracing::{debug, trace};

/// Page orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    /// Landscape iff the page is wider than it is tall
    pub fn of(page: PageSize) -> Self {
        if page.width > page.height {
            Self::Landscape
        } else {
            Self::Portrait
        }
    }

    /// Turn `page` so that it has this orientation
    pub fn apply(self, page: PageSize) -> PageSize {
        if Self::of(page) == self || page.width == page.height {
            page
        } else {
            page.swapped()
        }
    }
}

/// Everything needed to render one label
#[derive(Debug, Clone, PartialEq)]
pub struct LabelRequest {
    /// Hardware address encoded in the barcode and printed as text
    pub address: String,
    /// Management URL encoded in the QR code
    pub url: String,
    pub footer: Option<String>,
    pub page: PageSpec,
    pub margin: MarginSpec,
    /// Explicit orientation; `None` keeps the page as given
    pub orientation: Option<Orientation>,
    pub style: LabelStyle,
}

impl LabelRequest {
    /// Create a request with the default page, margins and style
    pub fn new<A: Into<String>, U: Into<String>>(address: A, url: U) -> Self {
        Self {
            address: address.into(),
            url: url.into(),
            footer: None,
            page: PageSpec::default(),
            margin: MarginSpec::default(),
            orientation: None,
            style: LabelStyle::default(),
        }
    }

    /// Set the footer text; an empty string means no footer
    pub fn with_footer<S: Into<String>>(mut self, footer: S) -> Self {
        let footer = footer.into();
        self.footer = (!footer.is_empty()).then_some(footer);
        self
    }

    pub fn with_page(mut self, page: PageSpec) -> Self {
        self.page = page;
        self
    }

    pub fn with_margin(mut self, margin: MarginSpec) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }

    pub fn with_style(mut self, style: LabelStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_font_size(mut self, size: f32) -> Self {
        self.style.font_size = size;
        self
    }

    pub fn with_font_family<S: Into<String>>(mut self, family: S) -> Self {
        self.style.font_family = family.into();
        self
    }

    /// Footer text, if there is any to draw
    pub fn footer_text(&self) -> Option<&str> {
        self.footer.as_deref().filter(|f| !f.is_empty())
    }
}

/// A validated label with its geometry computed once
#[derive(Debug, Clone)]
pub struct Label {
    request: LabelRequest,
    page: PageSize,
    margins: Margins,
    layout: LabelLayout,
}

impl Label {
    /// Convert units, apply orientation and compute the layout.
    ///
    /// Fails before anything is drawn when the page, margins or style cannot
    /// be laid out, or when the margins leave no room for the bands.
    pub fn new(request: LabelRequest) -> Result<Self> {
        request.page.validate()?;
        request.margin.validate()?;
        request.style.validate()?;

        let mut page = request.page.to_points();
        if let Some(orientation) = request.orientation {
            page = orientation.apply(page);
        }
        let margins = request.margin.to_points();
        debug!(
            "Label {} on {}x{}pt page ({:?})",
            request.address,
            page.width,
            page.height,
            Orientation::of(page)
        );

        let layout = compute_layout(
            page,
            margins,
            request.footer_text().is_some(),
            request.style.barcode_height,
            request.style.footer_height,
        );
        layout.validate()?;
        trace!("Label layout: {:?}", layout);

        Ok(Self {
            request,
            page,
            margins,
            layout,
        })
    }

    pub fn request(&self) -> &LabelRequest {
        &self.request
    }

    /// Final page size in points
    pub fn page(&self) -> PageSize {
        self.page
    }

    pub fn margins(&self) -> Margins {
        self.margins
    }

    pub fn layout(&self) -> &LabelLayout {
        &self.layout
    }

    pub fn orientation(&self) -> Orientation {
        Orientation::of(self.page)
    }
}

impl TryFrom<LabelRequest> for Label {
    type Error = crate::error::LabelError;

    fn try_from(request: LabelRequest) -> Result<Self> {
        Self::new(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LabelError;
    use crate::layout::Band;

    fn request() -> LabelRequest {
        LabelRequest::new("00:11:22:33:44:55", "http://mgmt.ffhb.de/#/n/001122334455")
    }

    #[test]
    fn test_default_label_geometry() {
        let label = Label::new(request()).unwrap();

        assert_eq!(label.page(), PageSize::new(420.0, 595.0));
        assert_eq!(label.margins(), Margins::new(85.0, 71.0));
        assert_eq!(label.orientation(), Orientation::Portrait);
        assert_eq!(label.layout().band(Band::Address).height, 138.0);
    }

    #[test]
    fn test_empty_footer_counts_as_absent() {
        let req = request().with_footer("");
        assert_eq!(req.footer, None);

        let label = Label::new(request().with_footer("Freifunk Bremen")).unwrap();
        assert_eq!(label.layout().band(Band::Footer).height, 24.0);
        assert_eq!(label.layout().band(Band::Address).height, 114.0);
    }

    #[test]
    fn test_small_page_rejected_before_drawing() {
        let result = Label::new(request().with_page(PageSpec::new(50.0, 50.0)));
        assert!(matches!(result, Err(LabelError::InvalidGeometry(_))));
    }

    #[test]
    fn test_non_positive_page_rejected() {
        let result = Label::new(request().with_page(PageSpec::new(0.0, 210.0)));
        assert!(matches!(result, Err(LabelError::InvalidGeometry(_))));
    }

    #[test]
    fn test_orientation_applied_before_layout() {
        let label = Label::new(
            request()
                .with_page(PageSpec::new(210.0, 148.0))
                .with_orientation(Orientation::Portrait),
        )
        .unwrap();
        assert_eq!(label.page(), PageSize::new(420.0, 595.0));
        assert_eq!(label.layout().inner.width, 250.0);

        let landscape = Label::new(request().with_orientation(Orientation::Landscape));
        // The square QR band does not fit a landscape A5 page
        assert!(matches!(landscape, Err(LabelError::InvalidGeometry(_))));
    }

    #[test]
    fn test_orientation_of_page() {
        assert_eq!(Orientation::of(PageSize::new(595.0, 420.0)), Orientation::Landscape);
        assert_eq!(Orientation::of(PageSize::new(420.0, 420.0)), Orientation::Portrait);
        assert_eq!(
            Orientation::Landscape.apply(PageSize::new(420.0, 595.0)),
            PageSize::new(595.0, 420.0)
        );
    }

    #[test]
    fn test_custom_barcode_height() {
        let style = LabelStyle {
            barcode_height: 60.0,
            ..LabelStyle::default()
        };
        let label = Label::new(request().with_style(style)).unwrap();
        assert_eq!(label.layout().band(Band::Barcode).height, 60.0);
        assert_eq!(label.layout().band(Band::Address).height, 143.0);
    }

    #[test]
    fn test_negative_barcode_height_rejected() {
        let style = LabelStyle {
            barcode_height: -10.0,
            ..LabelStyle::default()
        };
        let result = Label::new(request().with_style(style));
        assert!(matches!(result, Err(LabelError::InvalidGeometry(_))));
    }

    #[test]
    fn test_nan_margin_rejected() {
        let result = Label::new(request().with_margin(MarginSpec::new(f32::NAN, 25.0)));
        assert!(matches!(result, Err(LabelError::InvalidGeometry(_))));
    }

    #[test]
    fn test_negative_font_size_rejected() {
        let result = Label::new(request().with_footer("Hello").with_font_size(-9.0));
        assert!(matches!(result, Err(LabelError::ConfigError(_))));
    }
}
