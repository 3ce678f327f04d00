//! PDF text extraction.

#[cfg(feature = "native")]
mod extractor;

#[cfg(feature = "native")]
pub use extractor::PdfExtractor;

use crate::error::PdfError;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Turns an uploaded document into flattened text.
///
/// Implementations must be stateless across calls: the same bytes always
/// produce the same text.
pub trait TextExtractor: Send + Sync {
    /// Extract the full text of the document, pages in document order.
    ///
    /// A document without a text layer yields an empty (or whitespace-only)
    /// string rather than an error.
    fn extract_text(&self, data: &[u8]) -> Result<String>;
}
