//! WASM-compatible wrapper for CSV text extraction.
//!
//! This crate exposes the text extraction functionality to JavaScript
//! for use in Cloudflare Workers.

use csvtext_core::TabFormatter;
use csvtext_csv::CsvParser;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    // Set up better panic messages in the console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Result of extracting a CSV document.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Original filename.
    pub filename: String,
    /// Encoding the bytes were decoded with ("utf-8" or "latin-1").
    pub encoding: String,
    /// Number of rows parsed.
    pub row_count: usize,
    /// Widest row, in fields.
    pub max_field_count: usize,
    /// Tab-separated text, one line per row.
    pub text: String,
}

/// Extract tab-separated text from raw CSV bytes.
///
/// Never throws: invalid UTF-8 is decoded as Latin-1.
#[wasm_bindgen]
pub fn extract_text(data: &[u8]) -> String {
    csvtext_csv::extract_text_from_csv(data)
}

/// Extract a CSV file along with details about how it was read.
///
/// # Arguments
/// * `data` - The raw bytes of the CSV file
/// * `filename` - The original filename, echoed back in the result
///
/// # Returns
/// A JavaScript object with the extraction result, or throws on serialization failure.
#[wasm_bindgen]
pub fn extract_document(data: &[u8], filename: &str) -> Result<JsValue, JsValue> {
    let result = extract_document_impl(data, filename);

    serde_wasm_bindgen::to_value(&result)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

fn extract_document_impl(data: &[u8], filename: &str) -> ExtractionResult {
    let document = CsvParser::new().parse_bytes(data, filename);
    let text = TabFormatter::new().format(&document.rows);

    ExtractionResult {
        filename: document.filename.clone(),
        encoding: document.encoding.name().to_string(),
        row_count: document.row_count(),
        max_field_count: document.max_field_count(),
        text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_document_utf8() {
        let result = extract_document_impl(b"name,qty\napples,3\npears\n", "fruit.csv");

        assert_eq!(result.filename, "fruit.csv");
        assert_eq!(result.encoding, "utf-8");
        assert_eq!(result.row_count, 3);
        assert_eq!(result.max_field_count, 2);
        assert_eq!(result.text, "name\tqty\napples\t3\npears");
    }

    #[test]
    fn test_extract_document_latin1() {
        let result = extract_document_impl(b"na\xefve,1\n", "words.csv");

        assert_eq!(result.encoding, "latin-1");
        assert_eq!(result.text, "naïve\t1");
    }

    #[test]
    fn test_extract_text_empty() {
        assert_eq!(extract_text(b""), "");
    }
}
