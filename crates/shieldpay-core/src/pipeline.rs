//! Upload → text → candidate fields.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use tracing::debug;

use crate::models::fields::ExtractionReport;
use crate::models::upload::UploadedFile;
use crate::pdf::{Result, TextExtractor};
use crate::scan::scan_fields;

/// Runs text extraction followed by the field heuristics.
///
/// Holds no per-request state, so one instance can be shared by every
/// request handler.
#[derive(Clone)]
pub struct ExtractionPipeline {
    extractor: Arc<dyn TextExtractor>,
}

impl ExtractionPipeline {
    /// Create a pipeline around a text extractor.
    pub fn new(extractor: Arc<dyn TextExtractor>) -> Self {
        Self { extractor }
    }

    /// Extract text from the upload and scan it.
    ///
    /// The returned `text` is exactly what the extractor produced.
    pub fn process(&self, upload: &UploadedFile) -> Result<ExtractionReport> {
        let start = Instant::now();

        let text = self.extractor.extract_text(&upload.buffer)?;
        let fields = scan_fields(&text);

        debug!(
            "Processed {} bytes from field '{}': {} chars, {} emails, {} amounts, {} ibans in {}ms",
            upload.len(),
            upload.field_name,
            text.len(),
            fields.emails.len(),
            fields.amounts.len(),
            fields.ibans.len(),
            start.elapsed().as_millis()
        );

        Ok(ExtractionReport { text, fields })
    }

    /// Read a document from disk and process it.
    pub fn process_path(&self, path: &Path) -> crate::Result<ExtractionReport> {
        let upload = UploadedFile::from_bytes(std::fs::read(path)?);
        Ok(self.process(&upload)?)
    }
}

#[cfg(feature = "native")]
impl ExtractionPipeline {
    /// Pipeline backed by [`crate::pdf::PdfExtractor`].
    pub fn pdf(config: crate::models::config::PdfConfig) -> Self {
        Self::new(Arc::new(crate::pdf::PdfExtractor::with_config(config)))
    }
}

#[cfg(feature = "native")]
impl Default for ExtractionPipeline {
    fn default() -> Self {
        Self::pdf(Default::default())
    }
}

impl std::fmt::Debug for ExtractionPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtractionPipeline").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{PdfError, ShieldpayError};
    use pretty_assertions::assert_eq;

    struct FixedText(&'static str);

    impl TextExtractor for FixedText {
        fn extract_text(&self, _data: &[u8]) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    struct Failing;

    impl TextExtractor for Failing {
        fn extract_text(&self, _data: &[u8]) -> Result<String> {
            Err(PdfError::Parse("bad header".to_string()))
        }
    }

    #[test]
    fn test_text_passes_through_verbatim() {
        let raw = "  Invoice\n\n\tTotal: 1,234.56  \n";
        let pipeline = ExtractionPipeline::new(Arc::new(FixedText(raw)));

        let report = pipeline.process(&UploadedFile::from_bytes(vec![1, 2, 3])).unwrap();
        assert_eq!(report.text, raw);
        assert_eq!(report.fields.amounts, vec!["1.234.56"]);
    }

    #[test]
    fn test_extractor_failure_propagates() {
        let pipeline = ExtractionPipeline::new(Arc::new(Failing));
        let err = pipeline.process(&UploadedFile::from_bytes(vec![])).unwrap_err();
        assert!(matches!(err, PdfError::Parse(_)));
    }

    #[test]
    fn test_process_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("invoice.pdf");
        std::fs::write(&path, b"ignored").unwrap();

        let pipeline = ExtractionPipeline::new(Arc::new(FixedText("Total 12,50")));
        let report = pipeline.process_path(&path).unwrap();
        assert_eq!(report.fields.amounts, vec!["12.50"]);

        let err = pipeline.process_path(&dir.path().join("missing.pdf")).unwrap_err();
        assert!(matches!(err, ShieldpayError::Io(_)));
    }

    #[test]
    fn test_process_path_wraps_extraction_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.pdf");
        std::fs::write(&path, b"not a pdf").unwrap();

        let err = ExtractionPipeline::new(Arc::new(Failing))
            .process_path(&path)
            .unwrap_err();
        assert!(matches!(err, ShieldpayError::Pdf(PdfError::Parse(_))));
    }

    #[cfg(feature = "native")]
    #[test]
    fn test_real_pdf_end_to_end() {
        let pdf = crate::testing::text_pdf(&[
            "Seller: billing@acme.example",
            "Amount due: 1,234.56",
            "IBAN: DE89370400440532013000",
        ]);

        let report = ExtractionPipeline::default()
            .process(&UploadedFile::from_bytes(pdf))
            .unwrap();

        assert_eq!(report.fields.emails, vec!["billing@acme.example"]);
        assert_eq!(report.fields.amounts, vec!["1.234.56"]);
        assert_eq!(report.fields.ibans, vec!["DE89370400440532013000"]);
    }
}
