//! Data models for the extraction pipeline.

pub mod config;
pub mod fields;
pub mod upload;

pub use config::{PdfConfig, ServerConfig, ShieldpayConfig};
pub use fields::{CandidateFieldSet, ExtractionReport};
pub use upload::{UploadedFile, UPLOAD_FIELD};
