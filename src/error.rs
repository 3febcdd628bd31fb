//! Error types for the device-label library

use thiserror::Error;

/// Result type alias using LabelError
pub type Result<T> = std::result::Result<T, LabelError>;

/// Errors that can occur when building or rendering labels
#[derive(Debug, Error)]
pub enum LabelError {
    /// Error from the underlying lopdf library
    #[error("PDF operation failed: {0}")]
    PdfError(#[from] lopdf::Error),

    /// Page and margins leave no room for the label elements
    #[error("Invalid label geometry: {0}")]
    InvalidGeometry(String),

    /// Payload rejected by the Code 128 encoder
    #[error("Barcode encoding failed: {0}")]
    BarcodeEncoding(String),

    /// Payload rejected by the QR encoder
    #[error("QR code encoding failed: {0}")]
    QrEncoding(#[from] qrcode::types::QrError),

    /// Text cannot be shown with the selected standard font
    #[error("Text rendering failed: {0}")]
    TextError(String),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// External merge tool reported a failure
    #[error("PDF merge failed: {0}")]
    MergeError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
