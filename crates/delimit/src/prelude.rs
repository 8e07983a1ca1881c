//! Prelude module - common imports for delimit users
//!
//! ```rust
//! use delimit::prelude::*;
//! ```

pub use crate::{
    parse, unparse, CsvError, CsvOptions, ErrorCode, ErrorType, FieldValue, ParseResult,
    Record, Row, Table, UnparseResult,
};
