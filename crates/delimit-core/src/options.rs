//! Parse and serialize options

use crate::{DEFAULT_DELIMITER, DEFAULT_NEWLINE};

/// Options shared by parsing and serializing.
///
/// Options are passed explicitly per call. When deserialized (with the
/// `serde` feature), keys are camelCase and any key left out falls back to
/// its default.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct CsvOptions {
    /// Field delimiter (default: comma)
    pub delimiter: char,
    /// Treat the first produced row as field names (default: false)
    pub header: bool,
    /// Coerce unambiguous numbers and booleans (default: false)
    pub dynamic_typing: bool,
    /// Drop lines that are empty after trimming whitespace (default: false)
    pub skip_empty_lines: bool,
    /// Literal line separator (default: `\n`)
    pub newline: String,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            header: false,
            dynamic_typing: false,
            skip_empty_lines: false,
            newline: DEFAULT_NEWLINE.to_string(),
        }
    }
}

impl CsvOptions {
    /// Create options with all defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field delimiter
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set header mode
    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    /// Set dynamic typing
    pub fn with_dynamic_typing(mut self, dynamic_typing: bool) -> Self {
        self.dynamic_typing = dynamic_typing;
        self
    }

    /// Set whether blank lines are skipped
    pub fn with_skip_empty_lines(mut self, skip_empty_lines: bool) -> Self {
        self.skip_empty_lines = skip_empty_lines;
        self
    }

    /// Set the line separator
    pub fn with_newline<S: Into<String>>(mut self, newline: S) -> Self {
        self.newline = newline.into();
        self
    }
}
