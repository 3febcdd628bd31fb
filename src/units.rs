//! Millimetre to point conversion and the physical page/margin specs

use crate::Result;
use crate::constants::*;
use crate::error::LabelError;

/// Convert a physical length in millimetres to whole points.
///
/// Rounding keeps label dimensions reproducible between renders. Only apply
/// this to physical quantities; converting a value that is already in points
/// scales it a second time.
pub fn to_points(mm: f32) -> f32 {
    (mm * PT_PER_MM).round()
}

/// Page size in points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width: f32,
    pub height: f32,
}

impl PageSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// The same page with width and height exchanged
    pub fn swapped(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }
}

/// Symmetric margins in points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    /// Applied to both the left and right edge
    pub horizontal: f32,
    /// Applied to both the top and bottom edge
    pub vertical: f32,
}

impl Margins {
    pub fn new(horizontal: f32, vertical: f32) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

/// Page dimensions in millimetres
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSpec {
    pub width: f32,
    pub height: f32,
}

impl PageSpec {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Parse `<width>x<height>` in millimetres, e.g. `148x210`
    pub fn parse(s: &str) -> Result<Self> {
        let (width, height) = parse_pair(s, "page size")?;
        let page = Self::new(width, height);
        page.validate()?;
        Ok(page)
    }

    /// Both dimensions must be finite and positive
    pub fn validate(&self) -> Result<()> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !(valid(self.width) && valid(self.height)) {
            return Err(LabelError::InvalidGeometry(format!(
                "page size must be positive, got {}x{}mm",
                self.width, self.height
            )));
        }
        Ok(())
    }

    pub fn to_points(&self) -> PageSize {
        PageSize::new(to_points(self.width), to_points(self.height))
    }
}

impl Default for PageSpec {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_WIDTH_MM, DEFAULT_PAGE_HEIGHT_MM)
    }
}

/// Margins in millimetres, applied symmetrically on each axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarginSpec {
    pub horizontal: f32,
    pub vertical: f32,
}

impl MarginSpec {
    pub fn new(horizontal: f32, vertical: f32) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Parse `<horizontal>x<vertical>` in millimetres, e.g. `30x25`
    pub fn parse(s: &str) -> Result<Self> {
        let (horizontal, vertical) = parse_pair(s, "margin")?;
        let margin = Self::new(horizontal, vertical);
        margin.validate()?;
        Ok(margin)
    }

    /// Both margins must be finite and not negative
    pub fn validate(&self) -> Result<()> {
        let valid = |v: f32| v.is_finite() && v >= 0.0;
        if !(valid(self.horizontal) && valid(self.vertical)) {
            return Err(LabelError::InvalidGeometry(format!(
                "margins must be finite and not negative, got {}x{}mm",
                self.horizontal, self.vertical
            )));
        }
        Ok(())
    }

    pub fn to_points(&self) -> Margins {
        Margins::new(to_points(self.horizontal), to_points(self.vertical))
    }
}

impl Default for MarginSpec {
    fn default() -> Self {
        Self::new(DEFAULT_MARGIN_HORIZONTAL_MM, DEFAULT_MARGIN_VERTICAL_MM)
    }
}

fn parse_pair(s: &str, what: &str) -> Result<(f32, f32)> {
    let (a, b) = s
        .trim()
        .split_once(['x', 'X'])
        .ok_or_else(|| LabelError::ConfigError(format!("{what} must look like AxB, got {s:?}")))?;

    let parse = |v: &str| {
        v.trim()
            .parse::<f32>()
            .ok()
            .filter(|n| n.is_finite())
            .ok_or_else(|| LabelError::ConfigError(format!("invalid {what} value {v:?}")))
    };

    Ok((parse(a)?, parse(b)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a5_page_converts_to_whole_points() {
        let page = PageSpec::new(148.0, 210.0).to_points();
        // 419.53pt and 595.27pt before rounding
        assert_eq!(page, PageSize::new(420.0, 595.0));
    }

    #[test]
    fn test_default_margins() {
        let margins = MarginSpec::default().to_points();
        assert_eq!(margins, Margins::new(85.0, 71.0));
    }

    #[test]
    fn test_a4_long_edge_is_exact() {
        assert_eq!(to_points(297.0), 842.0);
        assert_eq!(to_points(0.0), 0.0);
    }

    #[test]
    fn test_parse_page_spec() {
        assert_eq!(PageSpec::parse("148x210").unwrap(), PageSpec::new(148.0, 210.0));
        assert_eq!(PageSpec::parse(" 62.5X100 ").unwrap(), PageSpec::new(62.5, 100.0));
        assert!(PageSpec::parse("148").is_err());
        assert!(PageSpec::parse("ax210").is_err());
        assert!(PageSpec::parse("0x210").is_err());
    }

    #[test]
    fn test_parse_margin_spec() {
        assert_eq!(MarginSpec::parse("30x25").unwrap(), MarginSpec::new(30.0, 25.0));
        assert_eq!(MarginSpec::parse("0x0").unwrap(), MarginSpec::new(0.0, 0.0));
        assert!(MarginSpec::parse("-1x25").is_err());
        assert!(MarginSpec::parse("30;25").is_err());
    }

    #[test]
    fn test_margin_spec_rejects_negative_and_nan() {
        assert!(MarginSpec::new(30.0, 25.0).validate().is_ok());
        assert!(matches!(
            MarginSpec::new(-1.0, 25.0).validate(),
            Err(LabelError::InvalidGeometry(_))
        ));
        assert!(MarginSpec::new(f32::NAN, 25.0).validate().is_err());
        assert!(PageSpec::new(f32::INFINITY, 210.0).validate().is_err());
    }

    #[test]
    fn test_swapped_page() {
        let page = PageSize::new(420.0, 595.0).swapped();
        assert_eq!(page, PageSize::new(595.0, 420.0));
    }
}
