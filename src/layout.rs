//! Layout calculation for labels
//!
//! The printable inner area is split into four horizontal bands stacked
//! top to bottom: barcode, address, QR code, footer. Offsets are measured
//! from the bottom of the inner area, so the footer always sits at zero and
//! every other band starts where the one below it ends.

use crate::Result;
use crate::error::LabelError;
use crate::units::{Margins, PageSize};
use tracing::{debug, trace};

/// The visual element a band is reserved for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Band {
    Barcode,
    Address,
    QrCode,
    Footer,
}

impl Band {
    /// Bands in drawing order, top of the page first
    pub const TOP_DOWN: [Band; 4] = [Band::Barcode, Band::Address, Band::QrCode, Band::Footer];

    fn index(self) -> usize {
        match self {
            Band::Barcode => 0,
            Band::Address => 1,
            Band::QrCode => 2,
            Band::Footer => 3,
        }
    }
}

/// Printable area left after subtracting the margins, in points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InnerArea {
    pub width: f32,
    pub height: f32,
}

/// Axis-aligned rectangle with a bottom-left origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    /// The same rectangle moved by `(dx, dy)`
    pub fn translate(&self, dx: f32, dy: f32) -> Rect {
        Rect {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }
}

/// One horizontal band of the inner area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementBand {
    pub band: Band,
    pub height: f32,
    pub y_offset: f32,
}

impl ElementBand {
    /// Upper edge of the band
    pub fn top(&self) -> f32 {
        self.y_offset + self.height
    }
}

/// Calculated layout information for a label
#[derive(Debug, Clone, PartialEq)]
pub struct LabelLayout {
    pub inner: InnerArea,
    bands: [ElementBand; 4],
}

impl LabelLayout {
    pub fn band(&self, band: Band) -> &ElementBand {
        &self.bands[band.index()]
    }

    /// Bands top to bottom
    pub fn bands(&self) -> &[ElementBand; 4] {
        &self.bands
    }

    /// Rectangle of a band relative to the inner-area origin.
    ///
    /// Bands always span the full inner width starting at x = 0.
    pub fn rect(&self, band: Band) -> Rect {
        let b = self.band(band);
        Rect {
            x: 0.0,
            y: b.y_offset,
            width: self.inner.width,
            height: b.height,
        }
    }

    /// Sum of all band heights
    pub fn total_height(&self) -> f32 {
        self.bands.iter().map(|b| b.height).sum()
    }

    /// Reject layouts that cannot be drawn.
    ///
    /// The calculation itself never clamps, so an oversized margin shows up
    /// here as a non-positive inner dimension or a negative address band.
    /// NaN dimensions fail as well.
    pub fn validate(&self) -> Result<()> {
        if !(self.inner.width > 0.0 && self.inner.height > 0.0) {
            return Err(LabelError::InvalidGeometry(format!(
                "margins leave no printable area ({}x{}pt)",
                self.inner.width, self.inner.height
            )));
        }

        let address = self.band(Band::Address);
        if address.height.is_nan() || address.height < 0.0 {
            return Err(LabelError::InvalidGeometry(format!(
                "inner height {}pt is too small for the fixed bands, address band would be {}pt",
                self.inner.height, address.height
            )));
        }

        Ok(())
    }
}

/// Calculate the inner area and band stack for a page.
///
/// `page` must already reflect the final orientation. The QR band is square
/// (its height is the inner width) and the address band absorbs whatever
/// vertical space the fixed bands leave over, which may be negative.
pub fn compute_layout(
    page: PageSize,
    margins: Margins,
    has_footer: bool,
    barcode_height: f32,
    footer_height: f32,
) -> LabelLayout {
    let inner = InnerArea {
        width: page.width - 2.0 * margins.horizontal,
        height: page.height - 2.0 * margins.vertical,
    };

    debug!(
        "Computing layout for {}x{}pt inner area (footer: {})",
        inner.width, inner.height, has_footer
    );

    let qr_height = inner.width;
    let footer_height = if has_footer { footer_height } else { 0.0 };
    let address_height = inner.height - barcode_height - qr_height - footer_height;

    let footer = ElementBand {
        band: Band::Footer,
        height: footer_height,
        y_offset: 0.0,
    };
    let qr_code = ElementBand {
        band: Band::QrCode,
        height: qr_height,
        y_offset: footer.top(),
    };
    let address = ElementBand {
        band: Band::Address,
        height: address_height,
        y_offset: qr_code.top(),
    };
    let barcode = ElementBand {
        band: Band::Barcode,
        height: barcode_height,
        y_offset: address.top(),
    };

    let layout = LabelLayout {
        inner,
        bands: [barcode, address, qr_code, footer],
    };

    trace!("Calculated bands: {:?}", layout.bands);
    layout
}
