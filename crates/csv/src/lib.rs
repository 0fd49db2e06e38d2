//! CSV parser backend for plain-text extraction.
//!
//! Decodes raw bytes (UTF-8, falling back to Latin-1), parses them as
//! comma-delimited rows, and flattens the rows into tab-separated text.

pub mod parser;

pub use parser::CsvParser;

use csvtext_core::TabFormatter;

/// Extract tab-separated plain text from raw CSV bytes.
///
/// Fields are joined with `\t` and rows with `\n`, with no trailing newline.
/// This never fails: bytes that are not valid UTF-8 are decoded as Latin-1.
///
/// ```
/// assert_eq!(csvtext_csv::extract_text_from_csv(b"a,\"b,c\",d\n"), "a\tb,c\td");
/// ```
pub fn extract_text_from_csv(bytes: &[u8]) -> String {
    let document = CsvParser::new().parse_bytes(bytes, "");
    TabFormatter::new().format(&document.rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(extract_text_from_csv(b""), "");
    }

    #[test]
    fn test_single_row() {
        assert_eq!(extract_text_from_csv(b"a,b,c\n"), "a\tb\tc");
    }

    #[test]
    fn test_multiple_rows() {
        assert_eq!(extract_text_from_csv(b"a,b\nc,d\n"), "a\tb\nc\td");
    }

    #[test]
    fn test_embedded_comma_stays_in_field() {
        assert_eq!(extract_text_from_csv(b"a,\"b,c\",d\n"), "a\tb,c\td");
    }

    #[test]
    fn test_no_delimiters_keeps_lines() {
        let input = "first line\nsecond line\nthird line";
        assert_eq!(extract_text_from_csv(input.as_bytes()), input);
    }

    #[test]
    fn test_embedded_newline_stays_in_field() {
        assert_eq!(
            extract_text_from_csv(b"id,note\n1,\"two\nlines\"\n"),
            "id\tnote\n1\ttwo\nlines"
        );
    }

    #[test]
    fn test_invalid_utf8_still_returns_text() {
        assert_eq!(extract_text_from_csv(b"caf\xe9,1\n"), "café\t1");
        assert_eq!(extract_text_from_csv(&[0xff, 0xfe, b',', 0x80]), "\u{ff}\u{fe}\t\u{80}");
    }

    #[test]
    fn test_blank_lines_are_kept() {
        assert_eq!(extract_text_from_csv(b"a\n\nb\n"), "a\n\nb");
        assert_eq!(extract_text_from_csv(b"a\n\n"), "a\n");
        assert_eq!(extract_text_from_csv(b"x,y\r\n\r\n1,2\r\n"), "x\ty\n\n1\t2");
    }

    #[test]
    fn test_leading_bom_is_dropped() {
        assert_eq!(extract_text_from_csv(b"\xef\xbb\xbfa,b\n"), "a\tb");
    }

    #[test]
    fn test_no_trailing_newline_needed() {
        assert_eq!(extract_text_from_csv(b"a,b"), "a\tb");
    }
}
