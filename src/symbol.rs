//! Barcode and QR symbols as module grids
//!
//! Encoding itself is delegated to `barcoders` (Code 128) and `qrcode`.
//! This module only exposes what drawing needs: how many modules wide a
//! symbol is and which of them are dark.

use crate::Result;
use crate::error::LabelError;
use barcoders::sym::code128::Code128;
use qrcode::{EcLevel, QrCode};
use tracing::trace;

/// Selects Code 128 character set B, which covers printable ASCII
const CODE128_SET_B: char = '\u{0181}';

/// Common interface of encoded symbols
pub trait Symbol {
    /// Number of modules across the symbol
    fn module_count(&self) -> usize;

    /// Module width that makes the symbol exactly fill `available_width`
    fn x_dimension(&self, available_width: f32) -> f32 {
        available_width / self.module_count() as f32
    }
}

/// A one-dimensional symbol: a single row of bars and spaces
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSymbol {
    modules: Vec<bool>,
}

impl LinearSymbol {
    /// Encode `payload` as Code 128 (set B)
    pub fn code128(payload: &str) -> Result<Self> {
        let barcode = Code128::new(format!("{CODE128_SET_B}{payload}")).map_err(|e| {
            LabelError::BarcodeEncoding(format!("cannot encode {payload:?} as Code 128: {e:?}"))
        })?;
        let modules: Vec<bool> = barcode.encode().into_iter().map(|m| m == 1).collect();
        trace!("Encoded {:?} into {} Code 128 modules", payload, modules.len());
        Ok(Self { modules })
    }

    pub fn from_modules(modules: Vec<bool>) -> Self {
        Self { modules }
    }

    /// Runs of adjacent bars as `(first module, length)`
    pub fn bars(&self) -> Vec<(usize, usize)> {
        dark_runs(self.modules.iter().copied())
    }
}

impl Symbol for LinearSymbol {
    fn module_count(&self) -> usize {
        self.modules.len()
    }
}

/// A square two-dimensional symbol, row 0 at the top
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixSymbol {
    width: usize,
    modules: Vec<bool>,
}

impl MatrixSymbol {
    /// Encode `payload` as a QR code at the given error-correction level
    pub fn qr(payload: &str, level: EcLevel) -> Result<Self> {
        let code = QrCode::with_error_correction_level(payload.as_bytes(), level)?;
        let width = code.width();
        let modules = code
            .to_colors()
            .into_iter()
            .map(|c| c == qrcode::Color::Dark)
            .collect();
        trace!("Encoded QR symbol {}x{} modules at {:?}", width, width, level);
        Ok(Self { width, modules })
    }

    /// Encode at error-correction level M
    pub fn qr_medium(payload: &str) -> Result<Self> {
        Self::qr(payload, EcLevel::M)
    }

    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.width && self.modules[y * self.width + x]
    }

    /// Runs of adjacent dark modules in one row as `(first module, length)`
    pub fn row_runs(&self, y: usize) -> Vec<(usize, usize)> {
        dark_runs((0..self.width).map(|x| self.is_dark(x, y)))
    }
}

impl Symbol for MatrixSymbol {
    fn module_count(&self) -> usize {
        self.width
    }
}

fn dark_runs(modules: impl Iterator<Item = bool>) -> Vec<(usize, usize)> {
    let mut runs = Vec::new();
    let mut start = None;
    let mut count = 0;

    for (idx, dark) in modules.enumerate() {
        match (dark, start) {
            (true, None) => start = Some(idx),
            (false, Some(s)) => {
                runs.push((s, idx - s));
                start = None;
            }
            _ => {}
        }
        count = idx + 1;
    }
    if let Some(s) = start {
        runs.push((s, count - s));
    }

    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code128_starts_and_ends_with_a_bar() {
        let symbol = LinearSymbol::code128("00:11:22:33:44:55").unwrap();
        // start + 17 data + checksum at 11 modules each, plus a 13 module stop
        assert!(symbol.module_count() >= 11 * 19 + 13);

        let bars = symbol.bars();
        assert_eq!(bars.first().map(|b| b.0), Some(0));
        let (last_start, last_len) = *bars.last().unwrap();
        assert_eq!(last_start + last_len, symbol.module_count());
    }

    #[test]
    fn test_code128_rejects_non_ascii() {
        let result = LinearSymbol::code128("caf\u{00e9}\u{4f60}");
        assert!(matches!(result, Err(LabelError::BarcodeEncoding(_))));
    }

    #[test]
    fn test_x_dimension_fills_width() {
        let symbol = LinearSymbol::from_modules(vec![true; 50]);
        assert_eq!(symbol.x_dimension(250.0), 5.0);
    }

    #[test]
    fn test_bar_runs() {
        let symbol = LinearSymbol::from_modules(vec![true, true, false, true, false, false, true]);
        assert_eq!(symbol.bars(), vec![(0, 2), (3, 1), (6, 1)]);
    }

    #[test]
    fn test_qr_symbol_is_square_with_finder_corner() {
        let symbol = MatrixSymbol::qr_medium("http://mgmt.ffhb.de/#/n/001122334455").unwrap();
        let n = symbol.module_count();
        assert_eq!((n - 17) % 4, 0, "QR widths are 17 + 4 * version");

        // Top-left finder pattern starts with a 7 module dark row
        assert_eq!(symbol.row_runs(0).first(), Some(&(0, 7)));
        assert!(symbol.is_dark(0, 0));
        assert!(!symbol.is_dark(n, 0));
    }

    #[test]
    fn test_qr_medium_uses_level_m() {
        let url = "http://mgmt.ffhb.de/#/n/001122334455";
        let symbol = MatrixSymbol::qr_medium(url).unwrap();

        let medium = QrCode::with_error_correction_level(url, EcLevel::M).unwrap();
        assert_eq!(symbol.module_count(), medium.width());
        let expected: Vec<bool> = medium
            .to_colors()
            .into_iter()
            .map(|c| c == qrcode::Color::Dark)
            .collect();
        assert_eq!(symbol.modules, expected);

        // Level H needs a larger version for this URL
        let high = QrCode::with_error_correction_level(url, EcLevel::H).unwrap();
        assert!(high.width() > symbol.module_count());
    }

    #[test]
    fn test_qr_payload_too_large() {
        let payload = "x".repeat(8000);
        assert!(matches!(
            MatrixSymbol::qr_medium(&payload),
            Err(LabelError::QrEncoding(_))
        ));
    }
}
