//! # delimit-core
//!
//! Core data model shared by the delimit parser and serializer.
//!
//! This crate provides:
//! - [`CsvOptions`] - Per-call configuration (delimiter, header mode, typing, ...)
//! - [`FieldValue`] - A single field, either text or a coerced number/boolean
//! - [`Row`], [`Record`] and [`Table`] - Rows, header-keyed records, and the union of both
//! - [`CsvError`] - Structured, non-panicking error values
//! - [`ParseResult`] and [`UnparseResult`] - The `{ result, errors }` envelopes
//!
//! ## Example
//!
//! ```rust
//! use delimit_core::{CsvOptions, FieldValue, Record};
//!
//! let options = CsvOptions::default().with_header(true);
//! assert_eq!(options.delimiter, ',');
//!
//! let mut record = Record::new();
//! record.insert("name", "Alice");
//! record.insert("age", 30);
//! assert_eq!(record.get("age"), Some(&FieldValue::Number(30.0)));
//! ```

pub mod error;
pub mod field;
pub mod options;
pub mod record;
pub mod result;
pub mod table;

pub use error::{CsvError, ErrorCode, ErrorType, ParseError, UnparseError};
pub use field::FieldValue;
pub use options::CsvOptions;
pub use record::{Record, Row};
pub use result::{ParseResult, UnparseResult};
pub use table::Table;

/// Default field delimiter
pub const DEFAULT_DELIMITER: char = ',';

/// Default line separator
pub const DEFAULT_NEWLINE: &str = "\n";

/// Quote character used for both tokenizing and escaping
pub const QUOTE: char = '"';
