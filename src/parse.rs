//! CSV to [`Table`] parsing.
//!
//! The first record is the header. Every data record must have exactly the
//! header's field count; ragged rows are an error rather than being padded
//! or truncated. Blank lines are skipped.

use csv::{ReaderBuilder, Trim};

use crate::{PipelineError, Table};

/// Default upload size limit (200 MiB).
pub const DEFAULT_MAX_BYTES: usize = 200 * 1024 * 1024;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Options for [`parse_csv`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Field delimiter (default: comma).
    pub delimiter: u8,
    /// Trim surrounding whitespace from headers and fields.
    pub trim: bool,
    /// Largest accepted input, in bytes.
    pub max_bytes: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim: false,
            max_bytes: DEFAULT_MAX_BYTES,
        }
    }
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    pub fn with_max_bytes(mut self, max_bytes: usize) -> Self {
        self.max_bytes = max_bytes;
        self
    }
}

/// Parse CSV bytes into a table.
///
/// Empty or whitespace-only input yields a table with no columns and no
/// rows.
pub fn parse_csv(bytes: &[u8], options: &ParseOptions) -> Result<Table, PipelineError> {
    if bytes.len() > options.max_bytes {
        return Err(PipelineError::TooLarge {
            limit: options.max_bytes,
        });
    }

    let (body, skipped) = match bytes.strip_prefix(UTF8_BOM) {
        Some(rest) => (rest, UTF8_BOM.len()),
        None => (bytes, 0),
    };
    let text = std::str::from_utf8(body).map_err(|e| PipelineError::Encoding {
        offset: skipped + e.valid_up_to(),
    })?;
    if text.trim().is_empty() {
        return Ok(Table::default());
    }

    let mut reader = ReaderBuilder::new()
        .delimiter(options.delimiter)
        .trim(if options.trim { Trim::All } else { Trim::None })
        .has_headers(true)
        .flexible(false)
        .from_reader(text.as_bytes());

    let header: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut rows: Vec<Vec<String>> = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    let table = Table::new(header, rows)?;
    tracing::debug!(
        rows = table.row_count(),
        columns = table.column_count(),
        "parsed csv"
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Result<Table, PipelineError> {
        parse_csv(input.as_bytes(), &ParseOptions::default())
    }

    #[test]
    fn test_parse_titles() {
        let table = parse("name,year\nMoana,2016\nEncanto,2021\n").unwrap();
        assert_eq!(table.columns(), &["name", "year"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows()[0].get("name"), Some("Moana"));
        assert_eq!(table.rows()[0].get("year"), Some("2016"));
        assert_eq!(table.rows()[1].get("name"), Some("Encanto"));
        assert_eq!(table.rows()[1].get("year"), Some("2021"));
    }

    #[test]
    fn test_extra_field_is_error() {
        let err = parse("a,b\n1,2,3\n").unwrap_err();
        assert!(matches!(err, PipelineError::Csv(_)));
        let msg = err.to_string();
        assert!(
            msg.contains("found record with 3 fields, but the previous record has 2 fields"),
            "Got: {msg}"
        );
    }

    #[test]
    fn test_missing_field_is_error() {
        let err = parse("a,b,c\n1,2\n").unwrap_err();
        assert!(matches!(err, PipelineError::Csv(_)));
    }

    #[test]
    fn test_empty_input_is_empty_table() {
        let table = parse("").unwrap();
        assert_eq!(table.column_count(), 0);
        assert_eq!(table.row_count(), 0);
    }

    #[test]
    fn test_whitespace_only_input() {
        for input in [" ", "\n\n", "  \r\n\t\n"] {
            assert_eq!(parse(input).unwrap(), Table::default(), "input {input:?}");
        }
    }

    #[test]
    fn test_header_only() {
        let table = parse("title,type\n").unwrap();
        assert_eq!(table.columns(), &["title", "type"]);
        assert!(table.is_empty());
    }

    #[test]
    fn test_no_trailing_newline() {
        let table = parse("a,b\n1,2").unwrap();
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.rows()[0].get("b"), Some("2"));
    }

    #[test]
    fn test_blank_lines_skipped() {
        let table = parse("a,b\n\n1,2\n\n3,4\n").unwrap();
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn test_quoted_fields() {
        let table = parse("title,cast\n\"Frozen\",\"Bell, Menzel\"\n").unwrap();
        assert_eq!(table.rows()[0].get("cast"), Some("Bell, Menzel"));
    }

    #[test]
    fn test_crlf_line_endings() {
        let table = parse("a,b\r\n1,2\r\n").unwrap();
        assert_eq!(table.rows()[0].get("b"), Some("2"));
    }

    #[test]
    fn test_bom_stripped() {
        let mut bytes = UTF8_BOM.to_vec();
        bytes.extend_from_slice(b"name\nBolt\n");
        let table = parse_csv(&bytes, &ParseOptions::default()).unwrap();
        assert_eq!(table.columns(), &["name"]);
    }

    #[test]
    fn test_invalid_utf8_is_error() {
        let bytes = [b'a', b'\n', 0xc3, 0x28, b'\n'];
        let err = parse_csv(&bytes, &ParseOptions::default()).unwrap_err();
        assert!(matches!(err, PipelineError::Encoding { offset: 2 }));
    }

    #[test]
    fn test_offset_after_bom_counts_bom() {
        let mut bytes = UTF8_BOM.to_vec();
        bytes.extend_from_slice(b"a,b\n");
        bytes.push(0xff);
        let err = parse_csv(&bytes, &ParseOptions::default()).unwrap_err();
        assert!(matches!(err, PipelineError::Encoding { offset: 7 }));
    }

    #[test]
    fn test_binary_blob_is_error() {
        let bytes = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0xff];
        assert!(parse_csv(&bytes, &ParseOptions::default()).is_err());
    }

    #[test]
    fn test_too_large() {
        let options = ParseOptions::default().with_max_bytes(4);
        let err = parse_csv(b"a,b\n1,2\n", &options).unwrap_err();
        assert!(matches!(err, PipelineError::TooLarge { limit: 4 }));
    }

    #[test]
    fn test_custom_delimiter() {
        let options = ParseOptions::new().with_delimiter(b';');
        let table = parse_csv(b"a;b\n1;2\n", &options).unwrap();
        assert_eq!(table.columns(), &["a", "b"]);
    }

    #[test]
    fn test_trim() {
        let options = ParseOptions::new().with_trim(true);
        let table = parse_csv(b" a , b \n 1 , 2 \n", &options).unwrap();
        assert_eq!(table.columns(), &["a", "b"]);
        assert_eq!(table.rows()[0].get("a"), Some("1"));
    }

    #[test]
    fn test_same_input_same_table() {
        let input = "name,year\nMoana,2016\n";
        assert_eq!(parse(input).unwrap(), parse(input).unwrap());
    }
}
