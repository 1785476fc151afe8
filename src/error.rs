//! Error types for the upload pipeline.

use thiserror::Error;

/// Any failure between receiving an uploaded file and handing a table to
/// the presentation surface.
///
/// The pipeline never classifies these further for the user: every variant
/// is stringified into an [`ErrorReport`](crate::ErrorReport).
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Reading the uploaded stream failed.
    #[error("failed to read uploaded file: {0}")]
    Io(#[from] std::io::Error),

    /// The upload is not valid UTF-8. `offset` counts from the first byte
    /// of the upload, including any byte-order mark.
    #[error("invalid UTF-8 sequence at byte offset {offset}")]
    Encoding { offset: usize },

    /// The CSV reader rejected the content (e.g. a field-count mismatch).
    #[error("{0}")]
    Csv(#[from] csv::Error),

    /// A data row does not have the header's width.
    #[error("row {row} has {found} fields, but the header has {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// The upload exceeds the configured size limit.
    #[error("file exceeds the {limit} byte upload limit")]
    TooLarge { limit: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding_message() {
        let err = PipelineError::Encoding { offset: 2 };
        assert_eq!(err.to_string(), "invalid UTF-8 sequence at byte offset 2");
    }

    #[test]
    fn test_too_large_message() {
        let err = PipelineError::TooLarge { limit: 4 };
        assert_eq!(err.to_string(), "file exceeds the 4 byte upload limit");
    }

    #[test]
    fn test_row_width_message() {
        let err = PipelineError::RowWidth {
            row: 0,
            expected: 2,
            found: 1,
        };
        assert_eq!(err.to_string(), "row 0 has 1 fields, but the header has 2");
    }

    #[test]
    fn test_io_message() {
        let err = PipelineError::from(std::io::Error::other("disk gone"));
        assert_eq!(err.to_string(), "failed to read uploaded file: disk gone");
    }
}
