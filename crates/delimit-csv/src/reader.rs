//! Delimited-text parser

use delimit_core::{CsvError, CsvOptions, FieldValue, ParseResult, Record, Row, Table, QUOTE};
use tracing::{debug, warn};

use crate::typing;

/// Tokenizer mode within a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Unquoted,
    Quoted,
}

/// Delimited-text reader
pub struct CsvReader;

impl CsvReader {
    /// Parse text into rows, or records when `options.header` is set.
    ///
    /// Row width mismatches are reported but the row is kept. A quote left
    /// open at the end of a line aborts the whole parse: the result is `None`
    /// and the only error is the unmatched quote.
    pub fn parse(input: &str, options: &CsvOptions) -> ParseResult {
        let lines = Self::split_lines(input, &options.newline);
        debug!(
            lines = lines.len(),
            header = options.header,
            dynamic_typing = options.dynamic_typing,
            "parsing delimited text"
        );

        let mut header: Option<Vec<String>> = None;
        let mut expected_len: Option<usize> = None;
        let mut rows: Vec<Row> = Vec::new();
        let mut records: Vec<Record> = Vec::new();
        let mut errors = Vec::new();

        for (row_idx, line) in lines.into_iter().enumerate() {
            if options.skip_empty_lines && line.trim().is_empty() {
                continue;
            }

            let Some(fields) = Self::tokenize_line(line, options.delimiter) else {
                warn!(row = row_idx, "unmatched quote, aborting parse");
                return ParseResult::fatal(CsvError::unmatched_quotes(row_idx));
            };

            // Header names go through the same typing as data, then back to text
            if options.header && header.is_none() {
                expected_len = Some(fields.len());
                header = Some(
                    fields
                        .into_iter()
                        .map(|field| Self::field_value(field, options).to_string())
                        .collect(),
                );
                continue;
            }

            let expected = *expected_len.get_or_insert(fields.len());
            if fields.len() != expected {
                debug!(
                    row = row_idx,
                    actual = fields.len(),
                    expected,
                    "row length mismatch"
                );
                errors.push(CsvError::row_length_mismatch(row_idx, fields.len(), expected));
            }

            let row: Row = fields
                .into_iter()
                .map(|field| Self::field_value(field, options))
                .collect();

            match &header {
                Some(names) => records.push(Record::from_row(names, row)),
                None => rows.push(row),
            }
        }

        let table = if options.header {
            Table::Records(records)
        } else {
            Table::Rows(rows)
        };
        debug!(rows = table.len(), errors = errors.len(), "parsed delimited text");

        ParseResult::new(table, errors)
    }

    /// Split on the literal newline token. An empty token does not split.
    fn split_lines<'a>(input: &'a str, newline: &str) -> Vec<&'a str> {
        if newline.is_empty() {
            vec![input]
        } else {
            input.split(newline).collect()
        }
    }

    /// Split one line into raw field texts.
    ///
    /// Returns `None` if the line ends inside a quoted section.
    fn tokenize_line(line: &str, delimiter: char) -> Option<Vec<String>> {
        let mut fields = Vec::new();
        let mut field = String::new();
        let mut mode = Mode::Unquoted;
        let mut chars = line.chars().peekable();

        while let Some(ch) = chars.next() {
            match mode {
                Mode::Quoted if ch == QUOTE => {
                    // "" inside quotes is a literal quote
                    if chars.peek() == Some(&QUOTE) {
                        chars.next();
                        field.push(QUOTE);
                    } else {
                        mode = Mode::Unquoted;
                    }
                }
                Mode::Quoted => field.push(ch),
                Mode::Unquoted if ch == QUOTE => mode = Mode::Quoted,
                Mode::Unquoted if ch == delimiter => fields.push(std::mem::take(&mut field)),
                Mode::Unquoted => field.push(ch),
            }
        }

        if mode == Mode::Quoted {
            return None;
        }
        fields.push(field);
        Some(fields)
    }

    fn field_value(field: String, options: &CsvOptions) -> FieldValue {
        if options.dynamic_typing {
            typing::coerce(field)
        } else {
            FieldValue::Text(field)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tokens(line: &str) -> Option<Vec<String>> {
        CsvReader::tokenize_line(line, ',')
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_tokenize_plain() {
        assert_eq!(tokens("a,b,c"), Some(strings(&["a", "b", "c"])));
        assert_eq!(tokens(""), Some(strings(&[""])));
        assert_eq!(tokens(",,"), Some(strings(&["", "", ""])));
    }

    #[test]
    fn test_tokenize_quoted() {
        assert_eq!(tokens(r#""a,b",c"#), Some(strings(&["a,b", "c"])));
        assert_eq!(
            tokens(r#""He said ""hi""""#),
            Some(strings(&[r#"He said "hi""#]))
        );
        assert_eq!(tokens(r#""""#), Some(strings(&[""])));
    }

    #[test]
    fn test_tokenize_quotes_mid_field() {
        // Quotes toggle mode wherever they appear and are not emitted
        assert_eq!(tokens(r#"a"b,c"d"#), Some(strings(&["ab,cd"])));
        assert_eq!(tokens(r#"a""b"#), Some(strings(&["ab"])));
    }

    #[test]
    fn test_tokenize_unmatched_quote() {
        assert_eq!(tokens(r#"a,"b"#), None);
        assert_eq!(tokens(r#""a"""#), None);
    }

    #[test]
    fn test_tokenize_custom_delimiter() {
        assert_eq!(
            CsvReader::tokenize_line("a;b,c;", ';'),
            Some(strings(&["a", "b,c", ""]))
        );
        assert_eq!(
            CsvReader::tokenize_line("x\ty", '\t'),
            Some(strings(&["x", "y"]))
        );
    }

    #[test]
    fn test_tokenize_multibyte() {
        assert_eq!(
            CsvReader::tokenize_line("é|\"ü|ß\"|日本", '|'),
            Some(strings(&["é", "ü|ß", "日本"]))
        );
    }

    #[test]
    fn test_split_lines() {
        assert_eq!(CsvReader::split_lines("a\r\nb", "\r\n"), vec!["a", "b"]);
        assert_eq!(CsvReader::split_lines("a\r\nb", "\n"), vec!["a\r", "b"]);
        assert_eq!(CsvReader::split_lines("", "\n"), vec![""]);
    }

    #[test]
    fn test_header_names_are_typed_then_stringified() {
        let options = CsvOptions::default()
            .with_header(true)
            .with_dynamic_typing(true);
        let parsed = CsvReader::parse("1.0,TRUE,name\n1,2,x", &options);
        let table = parsed.result.unwrap();
        let record = &table.records().unwrap()[0];
        assert_eq!(record.keys().collect::<Vec<_>>(), vec!["1", "true", "name"]);
        assert_eq!(record.get("1"), Some(&FieldValue::Number(1.0)));
        assert_eq!(record.get("true"), Some(&FieldValue::Number(2.0)));
        assert_eq!(record.get("name"), Some(&FieldValue::text("x")));
    }

    #[test]
    fn test_header_names_kept_verbatim_without_typing() {
        let options = CsvOptions::default().with_header(true);
        let parsed = CsvReader::parse("1.0,TRUE\n1,2", &options);
        let table = parsed.result.unwrap();
        assert_eq!(table.columns(), vec!["1.0", "TRUE"]);
    }

    #[test]
    fn test_empty_newline_does_not_split_into_characters() {
        let parsed = CsvReader::parse("ab,c\nd", &CsvOptions::default().with_newline(""));
        assert_eq!(
            parsed.result,
            Some(Table::Rows(vec![vec![FieldValue::text("ab"), FieldValue::text("c\nd")]]))
        );
        assert!(parsed.errors.is_none());
    }
}
