//! Tab-separated text output.
//!
//! Each row becomes one line with its fields joined by tabs; rows are
//! joined by newlines.

use crate::types::Row;

/// Formatter for tab-separated plain-text output.
#[derive(Debug, Clone, Default)]
pub struct TabFormatter;

impl TabFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Format rows as tab-separated lines joined by `\n`.
    ///
    /// No trailing newline is added. Field contents are written as-is, so a
    /// field that contained a tab or newline in the source keeps it.
    ///
    /// # Example output
    /// ```text
    /// name	qty
    /// apples	3
    /// ```
    pub fn format(&self, rows: &[Row]) -> String {
        rows.iter()
            .map(|row| row.joined("\t"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Format and add a trailing newline, for writing to files.
    pub fn format_with_newline(&self, rows: &[Row]) -> String {
        let formatted = self.format(rows);
        if formatted.is_empty() {
            formatted
        } else {
            format!("{}\n", formatted)
        }
    }
}

const SIZE_UNITS: &[&str] = &["Bytes", "KB", "MB", "GB", "TB"];

/// Format a byte count for display, e.g. `1536` -> `"1.5 KB"`.
///
/// Uses 1024 as the unit step and trims trailing zeros from the fraction.
pub fn format_file_size(bytes: u64, decimals: usize) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut exponent = 0;
    while value >= 1024.0 && exponent < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        exponent += 1;
    }

    let mut rendered = format!("{:.*}", decimals, value);
    if rendered.contains('.') {
        rendered = rendered
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string();
    }

    format!("{} {}", rendered, SIZE_UNITS[exponent])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(data: &[&[&str]]) -> Vec<Row> {
        data.iter()
            .enumerate()
            .map(|(i, fields)| Row::from_fields(i + 1, fields.iter().copied()))
            .collect()
    }

    #[test]
    fn test_format_empty() {
        let formatter = TabFormatter::new();
        assert_eq!(formatter.format(&[]), "");
        assert_eq!(formatter.format_with_newline(&[]), "");
    }

    #[test]
    fn test_format_single_row() {
        let formatter = TabFormatter::new();
        assert_eq!(formatter.format(&rows(&[&["a", "b", "c"]])), "a\tb\tc");
    }

    #[test]
    fn test_format_multiple_rows() {
        let formatter = TabFormatter::new();
        let input = rows(&[&["a", "b"], &["c", "d"]]);
        assert_eq!(formatter.format(&input), "a\tb\nc\td");
    }

    #[test]
    fn test_format_ragged_rows() {
        let formatter = TabFormatter::new();
        let input = rows(&[&["one"], &["a", "b", "c"], &[""]]);
        assert_eq!(formatter.format(&input), "one\na\tb\tc\n");
    }

    #[test]
    fn test_format_with_trailing_newline() {
        let formatter = TabFormatter::new();
        let result = formatter.format_with_newline(&rows(&[&["x", "y"]]));
        assert_eq!(result, "x\ty\n");
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0, 2), "0 Bytes");
        assert_eq!(format_file_size(512, 2), "512 Bytes");
        assert_eq!(format_file_size(1024, 2), "1 KB");
        assert_eq!(format_file_size(1536, 2), "1.5 KB");
        assert_eq!(format_file_size(1_048_576, 2), "1 MB");
        assert_eq!(format_file_size(1234567, 2), "1.18 MB");
        assert_eq!(format_file_size(1536, 0), "2 KB");
    }
}
