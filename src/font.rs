//! Standard PDF fonts, text measurement and encoding

use crate::Result;
use crate::constants::DEFAULT_CHAR_WIDTH_RATIO;
use crate::error::LabelError;

/// Trait for measuring text dimensions.
///
/// Implement this trait to centre and wrap text with the real advance widths
/// of the font a label is set in.
pub trait FontMetrics: Send + Sync {
    /// Width of a single character in points at the given font size
    fn char_width(&self, ch: char, font_size: f32) -> f32;

    /// Total width of a string in points at the given font size
    fn text_width(&self, text: &str, font_size: f32) -> f32 {
        text.chars().map(|ch| self.char_width(ch, font_size)).sum()
    }
}

/// Fixed ratio estimate used when no better metrics are known
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicMetrics;

impl FontMetrics for HeuristicMetrics {
    fn char_width(&self, _ch: char, font_size: f32) -> f32 {
        font_size * DEFAULT_CHAR_WIDTH_RATIO
    }
}

/// Helvetica advance widths for ASCII 32..=126, in 1/1000 em
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0'..'9'
    278, 278, 584, 584, 584, 556, 1015, // ':'..'@'
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, // 'A'..'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'N'..'Z'
    278, 278, 278, 469, 556, 333, // '['..'`'
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, // 'a'..'m'
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // 'n'..'z'
    334, 260, 334, 584, // '{'..'~'
];

/// One of the PDF standard Type1 fonts usable with WinAnsi encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
    HelveticaBoldOblique,
    Courier,
    CourierBold,
    CourierOblique,
    CourierBoldOblique,
    TimesRoman,
    TimesBold,
    TimesItalic,
    TimesBoldItalic,
}

impl StandardFont {
    /// Resolve a font family name, ignoring case
    pub fn from_family(family: &str) -> Result<Self> {
        let font = match family.trim().to_ascii_lowercase().as_str() {
            "helvetica" | "arial" => Self::Helvetica,
            "helvetica-bold" => Self::HelveticaBold,
            "helvetica-oblique" => Self::HelveticaOblique,
            "helvetica-boldoblique" => Self::HelveticaBoldOblique,
            "courier" => Self::Courier,
            "courier-bold" => Self::CourierBold,
            "courier-oblique" => Self::CourierOblique,
            "courier-boldoblique" => Self::CourierBoldOblique,
            "times" | "times-roman" => Self::TimesRoman,
            "times-bold" => Self::TimesBold,
            "times-italic" => Self::TimesItalic,
            "times-bolditalic" => Self::TimesBoldItalic,
            _ => {
                return Err(LabelError::ConfigError(format!(
                    "unsupported font family {family:?}"
                )));
            }
        };
        Ok(font)
    }

    /// `BaseFont` name written into the font dictionary
    pub fn base_font(&self) -> &'static str {
        match self {
            Self::Helvetica => "Helvetica",
            Self::HelveticaBold => "Helvetica-Bold",
            Self::HelveticaOblique => "Helvetica-Oblique",
            Self::HelveticaBoldOblique => "Helvetica-BoldOblique",
            Self::Courier => "Courier",
            Self::CourierBold => "Courier-Bold",
            Self::CourierOblique => "Courier-Oblique",
            Self::CourierBoldOblique => "Courier-BoldOblique",
            Self::TimesRoman => "Times-Roman",
            Self::TimesBold => "Times-Bold",
            Self::TimesItalic => "Times-Italic",
            Self::TimesBoldItalic => "Times-BoldItalic",
        }
    }

    fn is_courier(&self) -> bool {
        matches!(
            self,
            Self::Courier | Self::CourierBold | Self::CourierOblique | Self::CourierBoldOblique
        )
    }
}

impl FontMetrics for StandardFont {
    fn char_width(&self, ch: char, font_size: f32) -> f32 {
        if self.is_courier() {
            return font_size * 0.6;
        }
        match self {
            Self::Helvetica | Self::HelveticaOblique => {
                let code = ch as u32;
                if (32..=126).contains(&code) {
                    HELVETICA_WIDTHS[(code - 32) as usize] as f32 / 1000.0 * font_size
                } else {
                    font_size * DEFAULT_CHAR_WIDTH_RATIO
                }
            }
            _ => font_size * DEFAULT_CHAR_WIDTH_RATIO,
        }
    }
}

/// Encode text for a `Tj` operator using WinAnsiEncoding.
///
/// Only printable ASCII and the Latin-1 supplement map one-to-one onto
/// WinAnsi codes; anything else cannot be shown with a standard font.
pub fn encode_win_ansi(text: &str) -> Result<Vec<u8>> {
    text.chars()
        .map(|ch| match ch as u32 {
            code @ (0x20..=0x7E | 0xA0..=0xFF) => Ok(code as u8),
            _ => Err(LabelError::TextError(format!(
                "character {ch:?} in {text:?} is not available in WinAnsiEncoding"
            ))),
        })
        .collect()
}

/// TrueType font metrics using ttf-parser for accurate glyph measurement.
///
/// The label is still set in a standard font. Use this with a
/// metric-compatible face (e.g. Liberation Sans for Helvetica) when the
/// built-in tables are not precise enough.
///
/// The face is parsed once; advances are kept for the WinAnsi repertoire,
/// the only characters a label can show.
#[cfg(feature = "ttf-parser")]
#[derive(Debug, Clone)]
pub struct TtfFontMetrics {
    /// Advance width in em per WinAnsi character
    advances: std::collections::HashMap<char, f32>,
}

#[cfg(feature = "ttf-parser")]
impl TtfFontMetrics {
    /// Create new font metrics from raw TTF/TTC font data.
    pub fn new(font_data: Vec<u8>) -> crate::Result<Self> {
        let face = ttf_parser::Face::parse(&font_data, 0)
            .map_err(|e| LabelError::TextError(format!("Failed to parse font: {e}")))?;
        let units_per_em = face.units_per_em() as f32;

        let advances = (0x20u8..=0x7E)
            .chain(0xA0..=0xFF)
            .map(char::from)
            .filter_map(|ch| {
                let advance = face.glyph_hor_advance(face.glyph_index(ch)?)?;
                Some((ch, advance as f32 / units_per_em))
            })
            .collect();

        Ok(Self { advances })
    }

    /// Read and parse a font file
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> crate::Result<Self> {
        Self::new(std::fs::read(path)?)
    }
}

#[cfg(feature = "ttf-parser")]
impl FontMetrics for TtfFontMetrics {
    fn char_width(&self, ch: char, font_size: f32) -> f32 {
        self.advances
            .get(&ch)
            .map_or(font_size * DEFAULT_CHAR_WIDTH_RATIO, |em| em * font_size)
    }
}
