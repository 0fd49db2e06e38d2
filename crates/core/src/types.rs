//! Domain types for representing parsed tabular content.

use serde::{Deserialize, Serialize};

/// A parsed CSV document: rows in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabularDocument {
    /// Original filename (without path).
    pub filename: String,

    /// Encoding the source bytes were decoded with.
    pub encoding: SourceEncoding,

    /// Rows in input order.
    pub rows: Vec<Row>,
}

impl TabularDocument {
    /// Create an empty document with the given filename and encoding.
    pub fn new(filename: impl Into<String>, encoding: SourceEncoding) -> Self {
        Self {
            filename: filename.into(),
            encoding,
            rows: Vec::new(),
        }
    }

    /// Add a row to the document.
    pub fn add_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Widest row in the document, or 0 when there are no rows.
    pub fn max_field_count(&self) -> usize {
        self.rows.iter().map(Row::len).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// The encoding a byte sequence was decoded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceEncoding {
    /// Input was valid UTF-8.
    #[serde(rename = "utf-8")]
    Utf8,
    /// Input was not valid UTF-8 and was read byte-for-byte as ISO-8859-1.
    #[serde(rename = "latin-1")]
    Latin1,
}

impl SourceEncoding {
    /// Conventional label for this encoding.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Latin1 => "latin-1",
        }
    }
}

impl std::fmt::Display for SourceEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A single parsed row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    /// 1-based row number.
    pub number: usize,

    /// Field values in column order.
    pub fields: Vec<String>,
}

impl Row {
    /// Create an empty row with the given number.
    pub fn new(number: usize) -> Self {
        Self {
            number,
            fields: Vec::new(),
        }
    }

    /// Create a row from already-parsed fields.
    pub fn from_fields<I, S>(number: usize, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            number,
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Join the fields with `separator`.
    pub fn joined(&self, separator: &str) -> String {
        self.fields.join(separator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_from_fields() {
        let row = Row::from_fields(1, ["a", "b", "c"]);
        assert_eq!(row.number, 1);
        assert_eq!(row.fields, vec!["a", "b", "c"]);
        assert_eq!(row.len(), 3);
    }

    #[test]
    fn test_row_joined() {
        assert_eq!(Row::from_fields(2, ["x", "y"]).joined("\t"), "x\ty");
        assert_eq!(Row::new(3).joined("\t"), "");
        assert!(Row::new(3).is_empty());
    }

    #[test]
    fn test_max_field_count() {
        let mut doc = TabularDocument::new("data.csv", SourceEncoding::Utf8);
        assert_eq!(doc.max_field_count(), 0);
        assert!(doc.is_empty());

        doc.add_row(Row::from_fields(1, ["a"]));
        doc.add_row(Row::from_fields(2, ["a", "b", "c"]));
        doc.add_row(Row::from_fields(3, ["a", "b"]));

        assert_eq!(doc.row_count(), 3);
        assert_eq!(doc.max_field_count(), 3);
    }

    #[test]
    fn test_encoding_names() {
        assert_eq!(SourceEncoding::Utf8.name(), "utf-8");
        assert_eq!(SourceEncoding::Latin1.to_string(), "latin-1");
    }
}
