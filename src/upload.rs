//! Uploaded file handed over by a host surface.

use std::io::Read;
use std::path::Path;

use crate::PipelineError;

/// Media type that passes the accept filter regardless of file name.
pub const CSV_MEDIA_TYPE: &str = "text/csv";

/// A user-submitted file: raw bytes plus a name and optional media type hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    /// File name as reported by the host (browser or CLI path).
    pub name: String,
    /// Media type hint, when the host provides one.
    pub media_type: Option<String>,
    /// File contents.
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            media_type: None,
            bytes: bytes.into(),
        }
    }

    pub fn with_media_type(mut self, media_type: impl Into<String>) -> Self {
        let media_type = media_type.into();
        self.media_type = if media_type.is_empty() {
            None
        } else {
            Some(media_type)
        };
        self
    }

    /// Read a whole stream into an uploaded file.
    ///
    /// At most `limit + 1` bytes are buffered; a longer stream is rejected
    /// with [`PipelineError::TooLarge`] without reading the rest.
    pub fn read_from(
        name: impl Into<String>,
        reader: impl Read,
        limit: usize,
    ) -> Result<Self, PipelineError> {
        let mut bytes = Vec::new();
        reader
            .take((limit as u64).saturating_add(1))
            .read_to_end(&mut bytes)?;
        if bytes.len() > limit {
            return Err(PipelineError::TooLarge { limit });
        }
        Ok(Self::new(name, bytes))
    }

    /// Lower-cased extension of the file name, without the dot.
    pub fn extension(&self) -> Option<String> {
        Path::new(&self.name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
    }

    /// Whether the file passes a host's accept filter.
    ///
    /// Matches the extension case-insensitively against `accepted`, or
    /// accepts outright when the media type is `text/csv`.
    pub fn is_accepted(&self, accepted: &[&str]) -> bool {
        if self
            .media_type
            .as_deref()
            .is_some_and(|mt| mt.eq_ignore_ascii_case(CSV_MEDIA_TYPE))
        {
            return true;
        }
        match self.extension() {
            Some(ext) => accepted
                .iter()
                .any(|a| a.trim_start_matches('.').eq_ignore_ascii_case(&ext)),
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
