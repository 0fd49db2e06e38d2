//! Core domain types, byte decoding, and tab-separated formatting
//! for CSV text extraction.

pub mod decode;
pub mod error;
pub mod format;
pub mod types;

pub use decode::{decode_bytes, decode_latin1, DecodedText};
pub use error::{Error, Result};
pub use format::{format_file_size, TabFormatter};
pub use types::{Row, SourceEncoding, TabularDocument};
