//! Typed upload handed from the HTTP boundary to the core.

/// Form field the endpoint reads the document from.
pub const UPLOAD_FIELD: &str = "file";

/// A single uploaded file, buffered fully in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    /// Raw bytes of the upload.
    pub buffer: Vec<u8>,
    /// Form field the bytes arrived under.
    pub field_name: String,
}

impl UploadedFile {
    /// Create an upload received under `field_name`.
    pub fn new(buffer: impl Into<Vec<u8>>, field_name: impl Into<String>) -> Self {
        Self {
            buffer: buffer.into(),
            field_name: field_name.into(),
        }
    }

    /// Create an upload under the standard `file` field.
    pub fn from_bytes(buffer: impl Into<Vec<u8>>) -> Self {
        Self::new(buffer, UPLOAD_FIELD)
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}
