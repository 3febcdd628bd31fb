//! Constants for label dimensions and common values

/// Points per millimetre, taken from the ISO A4 long edge (841.89pt / 297mm)
pub const PT_PER_MM: f32 = 841.89 / 297.0;

/// Default page width in millimetres (A5 portrait)
pub const DEFAULT_PAGE_WIDTH_MM: f32 = 148.0;

/// Default page height in millimetres (A5 portrait)
pub const DEFAULT_PAGE_HEIGHT_MM: f32 = 210.0;

/// Default left/right margin in millimetres
pub const DEFAULT_MARGIN_HORIZONTAL_MM: f32 = 30.0;

/// Default top/bottom margin in millimetres
pub const DEFAULT_MARGIN_VERTICAL_MM: f32 = 25.0;

/// Height of the barcode band in points.
///
/// Earlier label layouts used 60pt; 65pt is the current default and
/// `LabelStyle::barcode_height` overrides it.
pub const BARCODE_BAND_HEIGHT: f32 = 65.0;

/// Height of the footer band in points when a footer is present
pub const FOOTER_BAND_HEIGHT: f32 = 24.0;

/// Font size of the human-readable address, independent of the base font size
pub const ADDRESS_FONT_SIZE: f32 = 30.0;

/// Default base font size in points
pub const DEFAULT_FONT_SIZE: f32 = 9.0;

/// Default font family
pub const DEFAULT_FONT_FAMILY: &str = "Helvetica";

/// Default character width ratio for text estimation
/// (average character width as a fraction of font size)
pub const DEFAULT_CHAR_WIDTH_RATIO: f32 = 0.5;

/// Default line height multiplier
pub const DEFAULT_LINE_HEIGHT_MULTIPLIER: f32 = 1.2;

/// Placeholder substituted by the colon-free address in URL templates
pub const ADDRESS_PLACEHOLDER: &str = "{address}";

/// Default management URL template
pub const DEFAULT_URL_TEMPLATE: &str = "http://mgmt.ffhb.de/#/n/{address}";

/// Default external tool used to concatenate generated PDFs
pub const DEFAULT_MERGE_TOOL: &str = "pdfunite";
