//! # delimit
//!
//! Convert between delimited text (CSV-like) and structured in-memory tables,
//! in both directions.
//!
//! ## Features
//!
//! - Quote-aware tokenizing with `""` escapes
//! - Optional header mode producing field-name keyed records
//! - Optional dynamic typing of numbers and booleans
//! - Row width validation reported alongside the result
//! - Serialization of rows or records with CSV quoting
//!
//! Errors never abort with `Err` or a panic; each call returns a
//! `{ result, errors }` envelope to inspect.
//!
//! ## Example
//!
//! ```rust
//! use delimit::prelude::*;
//!
//! let parsed = parse("a,b\nc,d,e", &CsvOptions::default());
//! assert_eq!(parsed.result.as_ref().map(Table::len), Some(2));
//! assert_eq!(parsed.errors()[0].code, ErrorCode::RowLengthMismatch);
//!
//! let table = Table::Rows(vec![vec!["a,b".into(), 1.into()]]);
//! assert_eq!(unparse(&table, &CsvOptions::default()).result.as_deref(), Some("\"a,b\",1"));
//! ```

pub mod prelude;

// Transforms
pub use delimit_csv::{
    escape_field, parse, parse_value, table_from_value, typing, unparse, unparse_value,
    CsvReader, CsvWriter,
};

// Data model
pub use delimit_core::{
    CsvError, CsvOptions, ErrorCode, ErrorType, FieldValue, ParseError, ParseResult, Record,
    Row, Table, UnparseError, UnparseResult,
};
