//! Delimited-text serializer

use delimit_core::{CsvOptions, FieldValue, Table, UnparseResult, QUOTE};
use tracing::debug;

/// Delimited-text writer
pub struct CsvWriter;

impl CsvWriter {
    /// Serialize a table into delimited text.
    ///
    /// Records emit a header line first; the first record's key order
    /// defines the columns, and a record missing a column gets an empty
    /// field. Trailing whitespace, including the last newline, is trimmed.
    pub fn unparse(table: &Table, options: &CsvOptions) -> UnparseResult {
        debug!(
            rows = table.len(),
            records = table.is_records(),
            "serializing delimited text"
        );

        let mut output = String::new();
        match table {
            Table::Records(records) => {
                let columns = table.columns();
                Self::write_line(
                    &mut output,
                    columns.iter().map(|name| escape_text(name, options)),
                    options,
                );
                for record in records {
                    let fields = columns.iter().map(|name| match record.get(name) {
                        Some(value) => escape_field(value, options),
                        None => String::new(),
                    });
                    Self::write_line(&mut output, fields, options);
                }
            }
            Table::Rows(rows) => {
                for row in rows {
                    let fields = row.iter().map(|value| escape_field(value, options));
                    Self::write_line(&mut output, fields, options);
                }
            }
        }

        output.truncate(output.trim_end().len());
        UnparseResult::new(output)
    }

    fn write_line<I>(output: &mut String, fields: I, options: &CsvOptions)
    where
        I: Iterator<Item = String>,
    {
        for (i, field) in fields.enumerate() {
            if i > 0 {
                output.push(options.delimiter);
            }
            output.push_str(&field);
        }
        output.push_str(&options.newline);
    }
}

/// Escape one field for output.
///
/// Null becomes empty text. Text containing the delimiter, a quote, or the
/// newline token is wrapped in quotes with inner quotes doubled.
pub fn escape_field(value: &FieldValue, options: &CsvOptions) -> String {
    match value {
        FieldValue::Text(s) => escape_text(s, options),
        other => escape_text(&other.to_string(), options),
    }
}

fn escape_text(text: &str, options: &CsvOptions) -> String {
    let needs_quotes = text.contains(options.delimiter)
        || text.contains(QUOTE)
        || (!options.newline.is_empty() && text.contains(options.newline.as_str()));

    if needs_quotes {
        format!("\"{}\"", text.replace('"', "\"\""))
    } else {
        text.to_string()
    }
}
