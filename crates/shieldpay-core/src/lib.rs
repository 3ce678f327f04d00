//! Core library for the ShieldPay invoice extractor.
//!
//! This crate provides:
//! - PDF text extraction (lopdf + pdf-extract)
//! - Regex heuristics for candidate invoice fields (emails, amounts, IBAN-like codes)
//! - The pipeline tying both together for a single uploaded document

pub mod error;
pub mod models;
pub mod pdf;
pub mod pipeline;
pub mod scan;

#[cfg(all(feature = "native", any(test, feature = "test-util")))]
pub mod testing;

pub use error::{PdfError, Result, ShieldpayError, UploadError};
pub use models::{CandidateFieldSet, ExtractionReport, ShieldpayConfig, UploadedFile};
pub use pdf::TextExtractor;
#[cfg(feature = "native")]
pub use pdf::PdfExtractor;
pub use pipeline::ExtractionPipeline;
pub use scan::{scan_fields, FieldScanner};
