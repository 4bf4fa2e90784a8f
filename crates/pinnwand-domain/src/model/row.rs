//! Row - One tabular record inside a report
//!
//! Row is a Value Object: a fixed-width, ordered list of text cells.
//! It has no setters; once built it only hands out its cells.

use crate::error::ReportError;

/// A single table row of a report
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
    columns: Vec<String>,
}

impl Row {
    /// Create a row from its cells, in column order
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Read the cell at `index` (0-based)
    pub fn column_at(&self, index: usize) -> Result<&str, ReportError> {
        self.columns
            .get(index)
            .map(String::as_str)
            .ok_or(ReportError::ColumnOutOfRange {
                index,
                len: self.columns.len(),
            })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }
}

impl<S: Into<String>> FromIterator<S> for Row {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::new(iter)
    }
}
