//! End-to-end parser tests

use delimit_csv::{parse, CsvOptions, ErrorCode, ErrorType, FieldValue, Record, Row, Table};
use pretty_assertions::assert_eq;

fn text_rows(rows: &[&[&str]]) -> Table {
    Table::Rows(
        rows.iter()
            .map(|row| row.iter().map(|s| FieldValue::text(*s)).collect::<Row>())
            .collect(),
    )
}

/// Width mismatch is reported but the row is kept
#[test]
fn test_row_length_mismatch_keeps_row() {
    let result = parse("a,b\nc,d,e", &CsvOptions::default().with_skip_empty_lines(false));

    assert_eq!(result.result, Some(text_rows(&[&["a", "b"], &["c", "d", "e"]])));
    let errors = result.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, ErrorType::FieldMismatch);
    assert_eq!(errors[0].code, ErrorCode::RowLengthMismatch);
    assert_eq!(errors[0].row, Some(1));
    assert_eq!(errors[0].message, "Row 2 has 3 fields, expected 2");
}

/// Mismatches do not stop later rows from being parsed or checked
#[test]
fn test_multiple_mismatches_collected_in_order() {
    let result = parse("a,b\nc\nd,e\nf,g,h", &CsvOptions::default());

    assert_eq!(result.result.as_ref().map(Table::len), Some(4));
    let rows: Vec<_> = result.errors().iter().map(|e| e.row).collect();
    assert_eq!(rows, vec![Some(1), Some(3)]);
}

#[test]
fn test_header_with_dynamic_typing() {
    let options = CsvOptions::default()
        .with_header(true)
        .with_dynamic_typing(true);
    let result = parse("name,age\nAlice,30", &options);

    let mut expected = Record::new();
    expected.insert("name", "Alice");
    expected.insert("age", 30);
    assert_eq!(result.result, Some(Table::Records(vec![expected])));
    assert!(result.errors.is_none());
}

/// In header mode, missing positions bind to empty text and extra fields are dropped
#[test]
fn test_header_mode_short_and_long_rows() {
    let options = CsvOptions::default().with_header(true);
    let result = parse("a,b\n1\n2,3,4", &options);

    let table = result.result.unwrap();
    let records = table.records().unwrap();
    assert_eq!(records[0].get("a"), Some(&FieldValue::text("1")));
    assert_eq!(records[0].get("b"), Some(&FieldValue::empty()));
    assert_eq!(records[1].len(), 2);

    let errors = result.errors.unwrap();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].message, "Row 2 has 1 fields, expected 2");
    assert_eq!(errors[1].message, "Row 3 has 3 fields, expected 2");
}

#[test]
fn test_header_only_yields_no_records() {
    let result = parse("a,b", &CsvOptions::default().with_header(true));
    assert_eq!(result.result, Some(Table::Records(Vec::new())));
    assert!(result.errors.is_none());
}

#[test]
fn test_unmatched_quote_is_fatal() {
    let result = parse("a,\"b", &CsvOptions::default());

    assert!(result.result.is_none());
    let errors = result.errors.unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, ErrorType::Quotes);
    assert_eq!(errors[0].code, ErrorCode::UnmatchedQuotes);
    assert_eq!(errors[0].row, Some(0));
    assert_eq!(errors[0].message, "Unmatched quote at row 1");
}

/// Earlier rows and earlier non-fatal errors are discarded on an unmatched quote
#[test]
fn test_unmatched_quote_discards_everything() {
    let result = parse("a,b\nc,d,e\nf,\"g\nh,i", &CsvOptions::default());

    assert!(result.is_fatal());
    assert_eq!(result.errors().len(), 1);
    assert_eq!(result.errors()[0].code, ErrorCode::UnmatchedQuotes);
    assert_eq!(result.errors()[0].row, Some(2));
}

/// Quoted fields do not span lines
#[test]
fn test_quoted_newline_is_not_supported() {
    let result = parse("\"a\nb\"", &CsvOptions::default());
    assert!(result.is_fatal());
    assert_eq!(result.errors()[0].row, Some(0));
}

#[test]
fn test_quoted_fields() {
    let result = parse(
        "\"a,b\",\"He said \"\"hi\"\"\",\"\"",
        &CsvOptions::default(),
    );
    assert_eq!(
        result.result,
        Some(text_rows(&[&["a,b", "He said \"hi\"", ""]]))
    );
}

#[test]
fn test_skip_empty_lines() {
    let options = CsvOptions::default().with_skip_empty_lines(true);
    let result = parse("a,b\n\n   \nc,d\n", &options);
    assert_eq!(result.result, Some(text_rows(&[&["a", "b"], &["c", "d"]])));
    assert!(result.errors.is_none());
}

/// Without skipping, blank lines are single empty-field rows
#[test]
fn test_empty_lines_kept_by_default() {
    let result = parse("a,b\n", &CsvOptions::default());
    assert_eq!(result.result, Some(text_rows(&[&["a", "b"], &[""]])));
    assert_eq!(result.errors().len(), 1);
    assert_eq!(result.errors()[0].row, Some(1));
}

/// Skipped lines still count toward row numbers in errors
#[test]
fn test_skipped_lines_count_in_row_numbers() {
    let options = CsvOptions::default().with_skip_empty_lines(true);
    let result = parse("a,b\n\nc", &options);
    assert_eq!(result.errors()[0].row, Some(2));
    assert_eq!(result.errors()[0].message, "Row 3 has 1 fields, expected 2");
}

/// The header is the first produced row, after skipped blank lines
#[test]
fn test_header_after_leading_blank_lines() {
    let options = CsvOptions::default()
        .with_header(true)
        .with_skip_empty_lines(true);
    let result = parse("\n\nx,y\n1,2", &options);

    let table = result.result.unwrap();
    assert_eq!(table.columns(), vec!["x", "y"]);
    assert_eq!(table.len(), 1);
}

#[test]
fn test_custom_delimiter_and_newline() {
    let options = CsvOptions::default()
        .with_delimiter(';')
        .with_newline("\r\n");
    let result = parse("a;b,c\r\n1;2", &options);
    assert_eq!(result.result, Some(text_rows(&[&["a", "b,c"], &["1", "2"]])));
}

#[test]
fn test_dynamic_typing_rows() {
    let options = CsvOptions::default().with_dynamic_typing(true);
    let result = parse("1,-2.5,TRUE,false,,abc,1e2", &options);
    assert_eq!(
        result.result,
        Some(Table::Rows(vec![vec![
            FieldValue::Number(1.0),
            FieldValue::Number(-2.5),
            FieldValue::Boolean(true),
            FieldValue::Boolean(false),
            FieldValue::empty(),
            FieldValue::text("abc"),
            FieldValue::Number(100.0),
        ]]))
    );
}

/// Quoting does not protect a field from coercion
#[test]
fn test_dynamic_typing_applies_to_quoted_fields() {
    let options = CsvOptions::default().with_dynamic_typing(true);
    let result = parse("\"42\"", &options);
    assert_eq!(
        result.result,
        Some(Table::Rows(vec![vec![FieldValue::Number(42.0)]]))
    );
}

#[test]
fn test_empty_input() {
    let result = parse("", &CsvOptions::default());
    assert_eq!(result.result, Some(text_rows(&[&[""]])));

    let result = parse("", &CsvOptions::default().with_skip_empty_lines(true));
    assert_eq!(result.result, Some(Table::Rows(Vec::new())));
}
