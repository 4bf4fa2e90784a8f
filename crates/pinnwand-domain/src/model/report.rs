//! Report & CompositeReport - The nodes of the report tree
//!
//! A Report carries the framing every variant shares (title, creation
//! time, optional header and imprint) plus its table rows. A
//! CompositeReport adds an ordered list of sub-reports and owns them by
//! containment: there is no arena and no back-reference to the parent.
//!
//! Both are populated by the generator and then only read. Writers get
//! `&` references, so a render pass cannot mutate the tree.

use core::ops::{Deref, DerefMut};

use chrono::NaiveDateTime;

use super::row::Row;
use super::variant::ReportVariant;
use crate::error::ReportError;

/// Base data of every report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    title: String,
    created: NaiveDateTime,
    header_data: Option<String>,
    imprint: Option<String>,
    rows: Vec<Row>,
}

impl Report {
    /// Create an empty report with title and creation time
    pub fn new(title: impl Into<String>, created: NaiveDateTime) -> Self {
        Self {
            title: title.into(),
            created,
            header_data: None,
            imprint: None,
            rows: Vec::new(),
        }
    }

    /// Builder: set the header text printed below the title
    pub fn with_header_data(mut self, header_data: impl Into<String>) -> Self {
        self.header_data = Some(header_data.into());
        self
    }

    /// Builder: set the imprint printed at the end
    pub fn with_imprint(mut self, imprint: impl Into<String>) -> Self {
        self.imprint = Some(imprint.into());
        self
    }

    /// Builder: append a row
    pub fn with_row(mut self, row: Row) -> Self {
        self.rows.push(row);
        self
    }

    pub fn add_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn set_imprint(&mut self, imprint: Option<String>) {
        self.imprint = imprint;
    }

    // ========== Getters ==========

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn created(&self) -> NaiveDateTime {
        self.created
    }

    /// Header text; `None` means the line is omitted
    pub fn header_data(&self) -> Option<&str> {
        self.header_data.as_deref()
    }

    /// Imprint text; `None` means the line is omitted
    pub fn imprint(&self) -> Option<&str> {
        self.imprint.as_deref()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }
}

/// A report made of sub-reports
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeReport {
    base: Report,
    sub_reports: Vec<ReportVariant>,
}

impl CompositeReport {
    pub fn new(base: Report) -> Self {
        Self {
            base,
            sub_reports: Vec::new(),
        }
    }

    /// Append a sub-report at the end
    pub fn add_sub_report(&mut self, report: impl Into<ReportVariant>) {
        self.sub_reports.push(report.into());
    }

    /// Remove the first sub-report equal to `report`; no-op if absent
    pub fn remove_sub_report(&mut self, report: &ReportVariant) {
        if let Some(pos) = self.sub_reports.iter().position(|r| r == report) {
            self.sub_reports.remove(pos);
        }
    }

    pub fn num_sub_reports(&self) -> usize {
        self.sub_reports.len()
    }

    /// Sub-report at `index`; runs from `0` to `num_sub_reports() - 1`
    pub fn sub_report_at(&self, index: usize) -> Result<&ReportVariant, ReportError> {
        self.sub_reports
            .get(index)
            .ok_or(ReportError::SubReportOutOfRange {
                index,
                len: self.sub_reports.len(),
            })
    }

    pub fn sub_reports(&self) -> &[ReportVariant] {
        &self.sub_reports
    }

    pub fn base(&self) -> &Report {
        &self.base
    }
}

impl Deref for CompositeReport {
    type Target = Report;

    fn deref(&self) -> &Report {
        &self.base
    }
}

impl DerefMut for CompositeReport {
    fn deref_mut(&mut self) -> &mut Report {
        &mut self.base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::variant::MessagesOfUserReport;
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn leaf(title: &str) -> ReportVariant {
        MessagesOfUserReport::new(Report::new(title, day(1))).into()
    }

    #[test]
    fn test_report_builder() {
        let report = Report::new("Messages", day(1))
            .with_imprint("end")
            .with_row(Row::new(["a", "b"]))
            .with_row(Row::new(["c", "d"]));

        assert_eq!(report.title(), "Messages");
        assert_eq!(report.created(), day(1));
        assert_eq!(report.header_data(), None);
        assert_eq!(report.imprint(), Some("end"));
        assert_eq!(report.num_rows(), 2);
        assert_eq!(report.rows()[1].column_at(0).unwrap(), "c");
    }

    #[test]
    fn test_sub_reports_keep_insertion_order() {
        let mut composite = CompositeReport::new(Report::new("All", day(2)));
        composite.add_sub_report(leaf("first"));
        composite.add_sub_report(leaf("second"));
        composite.add_sub_report(leaf("third"));

        assert_eq!(composite.num_sub_reports(), 3);
        let titles: Vec<_> = (0..composite.num_sub_reports())
            .map(|i| composite.sub_report_at(i).unwrap().base().title().to_string())
            .collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_sub_report_out_of_range() {
        let mut composite = CompositeReport::new(Report::new("All", day(2)));
        assert_eq!(
            composite.sub_report_at(0).unwrap_err(),
            ReportError::SubReportOutOfRange { index: 0, len: 0 }
        );

        composite.add_sub_report(leaf("only"));
        assert!(composite.sub_report_at(1).unwrap_err().is_out_of_range());
    }

    #[test]
    fn test_add_then_remove_restores_count() {
        let mut composite = CompositeReport::new(Report::new("All", day(2)));
        composite.add_sub_report(leaf("keep"));
        let before = composite.num_sub_reports();

        let extra = leaf("extra");
        composite.add_sub_report(extra.clone());
        composite.remove_sub_report(&extra);

        assert_eq!(composite.num_sub_reports(), before);
        assert_eq!(composite.sub_report_at(0).unwrap().base().title(), "keep");
    }

    #[test]
    fn test_remove_only_first_occurrence() {
        let mut composite = CompositeReport::new(Report::new("All", day(2)));
        let dup = leaf("dup");
        composite.add_sub_report(dup.clone());
        composite.add_sub_report(leaf("middle"));
        composite.add_sub_report(dup.clone());

        composite.remove_sub_report(&dup);
        assert_eq!(composite.num_sub_reports(), 2);
        assert_eq!(composite.sub_report_at(0).unwrap().base().title(), "middle");

        // Absent element: no-op
        composite.remove_sub_report(&leaf("missing"));
        assert_eq!(composite.num_sub_reports(), 2);
    }

    #[test]
    fn test_composite_derefs_to_base() {
        let composite = CompositeReport::new(
            Report::new("All", day(3)).with_header_data("Alle Nutzer"),
        );

        assert_eq!(composite.title(), "All");
        assert_eq!(composite.header_data(), Some("Alle Nutzer"));
        assert_eq!(composite.num_rows(), 0);
    }
}
