//! Tabular data: either plain rows or header-keyed records

use crate::record::{Record, Row};

/// An ordered sequence of rows, or of records sharing one header.
///
/// This is the output of a parse (records in header mode, rows otherwise)
/// and the typed input of a serialize call.
#[derive(Debug, Clone, PartialEq)]
pub enum Table {
    /// Ordered field sequences
    Rows(Vec<Row>),
    /// Header-keyed records
    Records(Vec<Record>),
}

impl Table {
    /// Number of data rows or records
    pub fn len(&self) -> usize {
        match self {
            Table::Rows(rows) => rows.len(),
            Table::Records(records) => records.len(),
        }
    }

    /// Check if the table holds no data
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether this table holds records
    pub fn is_records(&self) -> bool {
        matches!(self, Table::Records(_))
    }

    /// Borrow the rows, if this is a row table
    pub fn rows(&self) -> Option<&[Row]> {
        match self {
            Table::Rows(rows) => Some(rows),
            Table::Records(_) => None,
        }
    }

    /// Borrow the records, if this is a record table
    pub fn records(&self) -> Option<&[Record]> {
        match self {
            Table::Records(records) => Some(records),
            Table::Rows(_) => None,
        }
    }

    /// Column names for a record table, taken from the first record.
    ///
    /// Returns an empty list for row tables and empty record tables.
    pub fn columns(&self) -> Vec<&str> {
        match self {
            Table::Records(records) => records
                .first()
                .map(|r| r.keys().collect())
                .unwrap_or_default(),
            Table::Rows(_) => Vec::new(),
        }
    }
}

impl From<Vec<Row>> for Table {
    fn from(rows: Vec<Row>) -> Self {
        Table::Rows(rows)
    }
}

impl From<Vec<Record>> for Table {
    fn from(records: Vec<Record>) -> Self {
        Table::Records(records)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Table {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::Serialize;

        match self {
            Table::Rows(rows) => rows.serialize(serializer),
            Table::Records(records) => records.serialize(serializer),
        }
    }
}
