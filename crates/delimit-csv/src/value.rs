//! Dynamic (JSON) boundary
//!
//! These entry points accept untyped JSON values, check their shape, and
//! hand off to the typed parser and serializer. Shape problems are fatal.

use delimit_core::{CsvError, CsvOptions, FieldValue, ParseResult, Record, Row, Table, UnparseResult};
use serde_json::{Map, Value};
use tracing::warn;

use crate::{reader::CsvReader, writer::CsvWriter};

/// Parse a JSON value, which must be a string
pub fn parse_value(input: &Value, options: &CsvOptions) -> ParseResult {
    match input.as_str() {
        Some(text) => CsvReader::parse(text, options),
        None => {
            warn!("parse input is not a string");
            ParseResult::fatal(CsvError::parse_invalid_input())
        }
    }
}

/// Serialize a JSON array of arrays or array of objects
pub fn unparse_value(input: &Value, options: &CsvOptions) -> UnparseResult {
    match table_from_value(input) {
        Ok(table) => CsvWriter::unparse(&table, options),
        Err(e) => {
            warn!(code = %e.code, row = ?e.row, "rejected serialize input");
            UnparseResult::fatal(e)
        }
    }
}

/// Decide the shape of a JSON array and convert it to a [`Table`].
///
/// An object as first element selects record mode, and every element must
/// then be an object. Anything else selects row mode, where every element
/// must be an array.
pub fn table_from_value(input: &Value) -> Result<Table, CsvError> {
    let items = input
        .as_array()
        .ok_or_else(CsvError::unparse_invalid_input)?;

    match items.first() {
        Some(Value::Object(_)) => items
            .iter()
            .enumerate()
            .map(|(i, item)| match item {
                Value::Object(map) => Ok(record_from_map(map)),
                _ => Err(CsvError::mixed_shapes(i)),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Table::Records),
        _ => items
            .iter()
            .enumerate()
            .map(|(i, item)| match item {
                Value::Array(values) => Ok(values.iter().map(field_from_value).collect::<Row>()),
                _ => Err(CsvError::invalid_row(i)),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Table::Rows),
    }
}

fn record_from_map(map: &Map<String, Value>) -> Record {
    map.iter()
        .map(|(k, v)| (k.as_str(), field_from_value(v)))
        .collect()
}

/// Nested arrays and objects become their compact JSON text
fn field_from_value(value: &Value) -> FieldValue {
    match value {
        Value::Null => FieldValue::Null,
        Value::Bool(b) => FieldValue::Boolean(*b),
        Value::Number(n) => n
            .as_f64()
            .map_or_else(|| FieldValue::Text(n.to_string()), FieldValue::Number),
        Value::String(s) => FieldValue::text(s.as_str()),
        Value::Array(_) | Value::Object(_) => FieldValue::Text(value.to_string()),
    }
}
