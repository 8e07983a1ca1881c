//! Error types for delimit
//!
//! Errors are returned as data inside the result envelopes, never raised.
//! Each carries a coarse [`ErrorType`], a stable [`ErrorCode`], a human
//! message, and the zero-based source line where applicable.

use std::fmt;

use thiserror::Error;

/// Coarse error category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorType {
    /// Malformed parser input
    ParseError,
    /// Quote left open at end of line
    Quotes,
    /// Row width differs from the expected width
    FieldMismatch,
    /// Malformed serializer input
    UnparseError,
}

impl ErrorType {
    /// Wire name of the category
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::ParseError => "ParseError",
            ErrorType::Quotes => "Quotes",
            ErrorType::FieldMismatch => "FieldMismatch",
            ErrorType::UnparseError => "UnparseError",
        }
    }
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable machine-readable error identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Input has the wrong shape for the call (fatal)
    InvalidInput,
    /// A quoted field was never closed (fatal)
    UnmatchedQuotes,
    /// Row field count differs from the expected count (non-fatal)
    RowLengthMismatch,
    /// A row-mode element is not a sequence (fatal)
    InvalidRow,
    /// A record-mode element is not a record (fatal)
    MixedShapes,
}

impl ErrorCode {
    /// Wire name of the code
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidInput => "INVALID_INPUT",
            ErrorCode::UnmatchedQuotes => "UNMATCHED_QUOTES",
            ErrorCode::RowLengthMismatch => "ROW_LENGTH_MISMATCH",
            ErrorCode::InvalidRow => "INVALID_ROW",
            ErrorCode::MixedShapes => "MIXED_SHAPES",
        }
    }

    /// Whether an error with this code aborts the whole call
    pub fn is_fatal(&self) -> bool {
        !matches!(self, ErrorCode::RowLengthMismatch)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A structured parse or serialize error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}/{code}: {message}")]
pub struct CsvError {
    /// Coarse category
    pub kind: ErrorType,
    /// Stable identifier
    pub code: ErrorCode,
    /// Human-readable description
    pub message: String,
    /// Zero-based source line (parse) or element index (serialize)
    pub row: Option<usize>,
}

/// Error produced by a parse call
pub type ParseError = CsvError;

/// Error produced by a serialize call
pub type UnparseError = CsvError;

impl CsvError {
    /// Create an error without a row reference
    pub fn new<S: Into<String>>(kind: ErrorType, code: ErrorCode, message: S) -> Self {
        Self {
            kind,
            code,
            message: message.into(),
            row: None,
        }
    }

    /// Attach a row reference
    pub fn at_row(mut self, row: usize) -> Self {
        self.row = Some(row);
        self
    }

    /// Parser input is not text
    pub fn parse_invalid_input() -> Self {
        Self::new(
            ErrorType::ParseError,
            ErrorCode::InvalidInput,
            "Input must be a string",
        )
    }

    /// Serializer input is not a sequence
    pub fn unparse_invalid_input() -> Self {
        Self::new(
            ErrorType::UnparseError,
            ErrorCode::InvalidInput,
            "Input must be an array of arrays or array of objects",
        )
    }

    /// Quote still open at the end of line `row` (zero-based)
    pub fn unmatched_quotes(row: usize) -> Self {
        Self::new(
            ErrorType::Quotes,
            ErrorCode::UnmatchedQuotes,
            format!("Unmatched quote at row {}", row + 1),
        )
        .at_row(row)
    }

    /// Line `row` (zero-based) has `actual` fields instead of `expected`
    pub fn row_length_mismatch(row: usize, actual: usize, expected: usize) -> Self {
        Self::new(
            ErrorType::FieldMismatch,
            ErrorCode::RowLengthMismatch,
            format!(
                "Row {} has {} fields, expected {}",
                row + 1,
                actual,
                expected
            ),
        )
        .at_row(row)
    }

    /// Element `index` of a row-mode input is not a sequence
    pub fn invalid_row(index: usize) -> Self {
        Self::new(
            ErrorType::UnparseError,
            ErrorCode::InvalidRow,
            "Each row must be an array or all rows must be objects",
        )
        .at_row(index)
    }

    /// Element `index` of a record-mode input is not a record
    pub fn mixed_shapes(index: usize) -> Self {
        Self::new(
            ErrorType::UnparseError,
            ErrorCode::MixedShapes,
            format!(
                "Element {} is not an object; all rows must be objects when the first is",
                index
            ),
        )
        .at_row(index)
    }

    /// Whether this error aborts the whole call
    pub fn is_fatal(&self) -> bool {
        self.code.is_fatal()
    }
}

#[cfg(feature = "serde")]
mod ser {
    use super::{CsvError, ErrorCode, ErrorType};
    use serde::ser::{Serialize, SerializeStruct, Serializer};

    impl Serialize for ErrorType {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(self.as_str())
        }
    }

    impl Serialize for ErrorCode {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(self.as_str())
        }
    }

    impl Serialize for CsvError {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let len = if self.row.is_some() { 4 } else { 3 };
            let mut state = serializer.serialize_struct("CsvError", len)?;
            state.serialize_field("type", &self.kind)?;
            state.serialize_field("code", &self.code)?;
            state.serialize_field("message", &self.message)?;
            match self.row {
                Some(row) => state.serialize_field("row", &row)?,
                None => state.skip_field("row")?,
            }
            state.end()
        }
    }
}
