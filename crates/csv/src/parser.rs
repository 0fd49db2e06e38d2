//! CSV parser implementation.

use csv::ReaderBuilder;
use csvtext_core::{decode_bytes, Error, Result, Row, TabularDocument};
use std::io::Read;

/// Byte order mark some editors write at the start of UTF-8 files.
const UTF8_BOM: char = '\u{feff}';

/// Parser for comma-delimited text.
///
/// Every line is treated as data (there is no header row) and rows may have
/// different field counts. Quoting follows the usual conventions: fields may
/// be wrapped in `"`, a doubled `""` inside a quoted field is a literal
/// quote, and quoted fields may contain commas and line breaks.
///
/// A blank line is kept as a row with no fields. A leading UTF-8 byte order
/// mark is removed before parsing.
pub struct CsvParser;

impl CsvParser {
    /// Create a new CSV parser.
    pub fn new() -> Self {
        Self
    }

    /// Read everything from `reader` and parse it.
    ///
    /// Only I/O errors are returned; decoding and parsing never fail.
    pub fn parse<R: Read>(&self, mut reader: R, filename: &str) -> Result<TabularDocument> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Ok(self.parse_bytes(&bytes, filename))
    }

    /// Decode and parse raw bytes.
    ///
    /// Records the CSV reader rejects are logged and skipped.
    pub fn parse_bytes(&self, bytes: &[u8], filename: &str) -> TabularDocument {
        let decoded = decode_bytes(bytes);
        let mut document = TabularDocument::new(filename, decoded.encoding);

        log::debug!(
            "Parsing {} bytes as CSV ({})",
            bytes.len(),
            decoded.encoding
        );

        let text: &str = &decoded.text;
        let text = text.strip_prefix(UTF8_BOM).unwrap_or(text);

        for span in RecordSpans::new(text) {
            match span {
                RecordSpan::Blank => {
                    let number = document.row_count() + 1;
                    document.add_row(Row::new(number));
                }
                RecordSpan::Record(record) => self.parse_record(record, &mut document),
            }
        }

        log::debug!("Parsed {} rows", document.row_count());

        document
    }

    /// Split the fields of one record and append it to `document`.
    fn parse_record(&self, record: &str, document: &mut TabularDocument) {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(record.as_bytes());

        for result in reader.records() {
            match result.map_err(|e| Error::CsvError(e.to_string())) {
                Ok(fields) => {
                    let number = document.row_count() + 1;
                    document.add_row(Row::from_fields(number, fields.iter()));
                }
                Err(e) => {
                    log::warn!("Skipping unparseable CSV record (continuing): {}", e);
                }
            }
        }
    }
}

impl Default for CsvParser {
    fn default() -> Self {
        Self::new()
    }
}

/// One physical record of CSV text.
#[derive(Debug, PartialEq, Eq)]
enum RecordSpan<'a> {
    /// An empty line.
    Blank,
    /// The text of a record, without its line terminator.
    Record(&'a str),
}

/// Where the scanner is within the current field.
#[derive(Debug, Clone, Copy)]
enum ScanState {
    FieldStart,
    Unquoted,
    Quoted,
    QuoteInQuoted,
}

/// Iterator over the records of CSV text.
///
/// `\r`, `\n` and `\r\n` end a record unless they sit inside a quoted field.
/// A quote only opens a quoted field at the start of a field; anywhere else
/// in an unquoted field it is an ordinary character.
struct RecordSpans<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> RecordSpans<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }
}

impl<'a> Iterator for RecordSpans<'a> {
    type Item = RecordSpan<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.text[self.pos..];
        if rest.is_empty() {
            return None;
        }

        let bytes = rest.as_bytes();
        let mut end = bytes.len();
        let mut consumed = bytes.len();
        let mut state = ScanState::FieldStart;

        for (i, &b) in bytes.iter().enumerate() {
            state = match (state, b) {
                (ScanState::Quoted, b'"') => ScanState::QuoteInQuoted,
                (ScanState::Quoted, _) => ScanState::Quoted,
                (ScanState::QuoteInQuoted, b'"') => ScanState::Quoted,
                (_, b'\r') | (_, b'\n') => {
                    end = i;
                    consumed = if b == b'\r' && bytes.get(i + 1) == Some(&b'\n') {
                        i + 2
                    } else {
                        i + 1
                    };
                    break;
                }
                (_, b',') => ScanState::FieldStart,
                (ScanState::FieldStart, b'"') => ScanState::Quoted,
                _ => ScanState::Unquoted,
            };
        }

        // Terminators are ASCII, so both offsets fall on char boundaries.
        let record = &rest[..end];
        self.pos += consumed;

        if record.is_empty() {
            Some(RecordSpan::Blank)
        } else {
            Some(RecordSpan::Record(record))
        }
    }
}
