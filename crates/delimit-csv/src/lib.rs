//! # delimit-csv
//!
//! Delimited-text (CSV-like) parser and serializer.
//!
//! Both directions are pure, synchronous transforms over in-memory strings:
//! - [`parse`] tokenizes text into rows (or header-keyed records)
//! - [`unparse`] escapes and joins rows or records back into text
//!
//! Neither call fails with `Err`; problems are reported inside the returned
//! envelope. See [`ParseResult`] and [`UnparseResult`].
//!
//! ## Example
//!
//! ```rust
//! use delimit_csv::{parse, unparse, CsvOptions, FieldValue};
//!
//! let options = CsvOptions::default().with_header(true).with_dynamic_typing(true);
//! let parsed = parse("name,age\nAlice,30", &options);
//! let table = parsed.result.unwrap();
//! let record = &table.records().unwrap()[0];
//! assert_eq!(record.get("age"), Some(&FieldValue::Number(30.0)));
//!
//! let text = unparse(&table, &options).result.unwrap();
//! assert_eq!(text, "name,age\nAlice,30");
//! ```

mod reader;
pub mod typing;
pub mod value;
mod writer;

pub use reader::CsvReader;
pub use value::{parse_value, table_from_value, unparse_value};
pub use writer::{escape_field, CsvWriter};

pub use delimit_core::{
    CsvError, CsvOptions, ErrorCode, ErrorType, FieldValue, ParseError, ParseResult, Record,
    Row, Table, UnparseError, UnparseResult,
};

/// Parse delimited text into rows, or records in header mode
pub fn parse(input: &str, options: &CsvOptions) -> ParseResult {
    CsvReader::parse(input, options)
}

/// Serialize rows or records into delimited text
pub fn unparse(table: &Table, options: &CsvOptions) -> UnparseResult {
    CsvWriter::unparse(table, options)
}
