//! PDF text extraction using lopdf and pdf-extract.

use std::borrow::Cow;
use std::panic::{self, AssertUnwindSafe};

use lopdf::Document;
use tracing::{debug, trace};

use super::{Result, TextExtractor};
use crate::error::PdfError;
use crate::models::config::PdfConfig;

/// Text extractor backed by lopdf (loading, decryption) and pdf-extract
/// (text flattening).
#[derive(Debug, Clone, Default)]
pub struct PdfExtractor {
    config: PdfConfig,
}

impl PdfExtractor {
    /// Create a new PDF extractor with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor with explicit settings.
    pub fn with_config(config: PdfConfig) -> Self {
        Self { config }
    }

    /// Load the document and return bytes pdf-extract can read.
    ///
    /// Encrypted documents are decrypted with the empty password when allowed
    /// and re-serialized; everything else is passed through untouched.
    fn prepare<'a>(&self, data: &'a [u8]) -> Result<(Cow<'a, [u8]>, usize)> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        let bytes = if doc.is_encrypted() {
            if !self.config.decrypt_empty_password || doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");

            let mut decrypted = Vec::new();
            doc.save_to(&mut decrypted)
                .map_err(|e| PdfError::Parse(format!("failed to save decrypted PDF: {}", e)))?;
            Cow::Owned(decrypted)
        } else {
            Cow::Borrowed(data)
        };

        Ok((bytes, doc.get_pages().len()))
    }
}

impl TextExtractor for PdfExtractor {
    fn extract_text(&self, data: &[u8]) -> Result<String> {
        let (bytes, page_count) = self.prepare(data)?;

        if page_count == 0 {
            debug!("PDF has no pages, returning empty text");
            return Ok(String::new());
        }

        let text = extract_guarded(&bytes)?;
        debug!("Extracted {} chars from {} pages", text.len(), page_count);
        Ok(text)
    }
}

/// Run pdf-extract, turning its panics on malformed input into errors.
fn extract_guarded(data: &[u8]) -> Result<String> {
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem(data)
    }));

    match result {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(PdfError::TextExtraction(e.to_string())),
        Err(payload) => {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            trace!("pdf-extract panicked: {}", message);
            Err(PdfError::Panicked(message))
        }
    }
}
