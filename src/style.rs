//! Styling structures for labels and text boxes

use crate::Result;
use crate::constants::*;
use crate::error::LabelError;

/// RGB color representation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    /// Create a new RGB color (values should be 0.0-1.0)
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
        }
    }

    pub fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

/// Text alignment options
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Vertical alignment options
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum VerticalAlignment {
    #[default]
    Top,
    Middle,
    Bottom,
}

/// How a text box places its lines
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font_size: f32,
    pub alignment: Alignment,
    pub vertical_alignment: VerticalAlignment,
    pub color: Color,
}

impl TextStyle {
    pub fn new(font_size: f32) -> Self {
        Self {
            font_size,
            alignment: Alignment::default(),
            vertical_alignment: VerticalAlignment::default(),
            color: Color::black(),
        }
    }

    pub fn aligned(mut self, alignment: Alignment, vertical_alignment: VerticalAlignment) -> Self {
        self.alignment = alignment;
        self.vertical_alignment = vertical_alignment;
        self
    }
}

/// Styling for a whole label
#[derive(Debug, Clone, PartialEq)]
pub struct LabelStyle {
    /// Base font size, used for the footer
    pub font_size: f32,
    /// Standard PDF font family name
    pub font_family: String,
    /// Height of the barcode band in points
    pub barcode_height: f32,
    /// Height of the footer band in points when a footer is present
    pub footer_height: f32,
    /// Font size of the human-readable address
    pub address_font_size: f32,
    /// Compress content streams when serializing
    pub compress: bool,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            barcode_height: BARCODE_BAND_HEIGHT,
            footer_height: FOOTER_BAND_HEIGHT,
            address_font_size: ADDRESS_FONT_SIZE,
            compress: true,
        }
    }
}

impl LabelStyle {
    /// Text style of the centered address band
    pub fn address_text(&self) -> TextStyle {
        TextStyle::new(self.address_font_size)
            .aligned(Alignment::Center, VerticalAlignment::Middle)
    }

    /// Text style of the footer band
    pub fn footer_text(&self) -> TextStyle {
        TextStyle::new(self.font_size).aligned(Alignment::Right, VerticalAlignment::Bottom)
    }

    /// Band heights and font sizes must be finite and positive
    pub fn validate(&self) -> Result<()> {
        for (what, height) in [
            ("barcode band height", self.barcode_height),
            ("footer band height", self.footer_height),
        ] {
            if !is_positive(height) {
                return Err(LabelError::InvalidGeometry(format!(
                    "{what} must be positive, got {height}"
                )));
            }
        }

        for (what, size) in [
            ("font size", self.font_size),
            ("address font size", self.address_font_size),
        ] {
            if !is_positive(size) {
                return Err(LabelError::ConfigError(format!(
                    "{what} must be positive, got {size}"
                )));
            }
        }

        Ok(())
    }
}

fn is_positive(v: f32) -> bool {
    v.is_finite() && v > 0.0
}
