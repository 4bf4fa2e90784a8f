//! Report errors
//!
//! Every failure in the report core is synchronous and final for the
//! current call. Nothing here is retried.

use thiserror::Error;

use crate::model::variant::ReportKind;

/// Errors raised while building or rendering reports
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    /// A row column was addressed outside `[0, len)`
    #[error("Column index {index} out of range for row with {len} columns")]
    ColumnOutOfRange { index: usize, len: usize },

    /// A sub-report was addressed outside `[0, len)`
    #[error("Sub-report index {index} out of range for composite with {len} sub-reports")]
    SubReportOutOfRange { index: usize, len: usize },

    /// The writer has no `process_*` operation for this report kind
    #[error("Report writer '{writer}' does not support '{kind}' reports")]
    UnsupportedVariant {
        writer: &'static str,
        kind: ReportKind,
    },
}

impl ReportError {
    /// True for both index errors (row columns and sub-reports)
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            ReportError::ColumnOutOfRange { .. } | ReportError::SubReportOutOfRange { .. }
        )
    }
}
