//! Result envelopes returned by parse and serialize calls

use crate::error::CsvError;
use crate::table::Table;

/// Outcome of a parse call.
///
/// `result` is `None` only after a fatal error, in which case `errors`
/// holds exactly that error. `errors` is `None` when nothing was reported.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParseResult {
    pub result: Option<Table>,
    pub errors: Option<Vec<CsvError>>,
}

impl ParseResult {
    /// Successful parse, with any non-fatal errors collected along the way
    pub fn new(table: Table, errors: Vec<CsvError>) -> Self {
        Self {
            result: Some(table),
            errors: non_empty(errors),
        }
    }

    /// Aborted parse
    pub fn fatal(error: CsvError) -> Self {
        Self {
            result: None,
            errors: Some(vec![error]),
        }
    }

    /// Whether the call was aborted
    pub fn is_fatal(&self) -> bool {
        self.result.is_none()
    }

    /// Reported errors, empty when there were none
    pub fn errors(&self) -> &[CsvError] {
        self.errors.as_deref().unwrap_or_default()
    }
}

/// Outcome of a serialize call
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct UnparseResult {
    pub result: Option<String>,
    pub errors: Option<Vec<CsvError>>,
}

impl UnparseResult {
    /// Successful serialization
    pub fn new(text: String) -> Self {
        Self {
            result: Some(text),
            errors: None,
        }
    }

    /// Aborted serialization
    pub fn fatal(error: CsvError) -> Self {
        Self {
            result: None,
            errors: Some(vec![error]),
        }
    }

    /// Whether the call was aborted
    pub fn is_fatal(&self) -> bool {
        self.result.is_none()
    }

    /// Reported errors, empty when there were none
    pub fn errors(&self) -> &[CsvError] {
        self.errors.as_deref().unwrap_or_default()
    }
}

fn non_empty(errors: Vec<CsvError>) -> Option<Vec<CsvError>> {
    if errors.is_empty() {
        None
    } else {
        Some(errors)
    }
}
