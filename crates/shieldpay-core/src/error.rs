//! Error types for the shieldpay-core library.

use thiserror::Error;

/// Main error type for the shieldpay library.
#[derive(Error, Debug)]
pub enum ShieldpayError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised while turning uploaded bytes into text.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The underlying parser panicked on malformed input.
    #[error("PDF parser panicked: {0}")]
    Panicked(String),
}

/// Errors raised while receiving an upload.
#[derive(Error, Debug)]
pub enum UploadError {
    /// The request carried no part with the expected field name.
    #[error("no file uploaded under field '{field}'")]
    MissingFile { field: String },

    /// The multipart body could not be read.
    #[error("unreadable upload: {0}")]
    Malformed(String),

    /// The body exceeded the configured upload limit.
    #[error("upload too large: {0}")]
    TooLarge(String),
}

/// Result type for the shieldpay library.
pub type Result<T> = std::result::Result<T, ShieldpayError>;
