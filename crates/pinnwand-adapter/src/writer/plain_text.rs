//! PlainTextReportWriter - Reports as plain text
//!
//! Layout of a flat report:
//!
//! ```text
//! *** <title> ***
//!
//! <header>                 (omitted if absent)
//! Erstellt am: <created>
//!
//! <cell>\t ; \t<cell>\t ; \t
//! ...
//!
//! <imprint>                (omitted if absent)
//! ```
//!
//! Composite reports print the same framing, but instead of rows they
//! print each sub-report in turn, separated by blank lines.

use std::mem;

use pinnwand_domain::error::ReportError;
use pinnwand_domain::model::report::{CompositeReport, Report};
use pinnwand_domain::model::variant::{
    AllUsersActivityReport, MessagesOfUserReport, SubscribersOfUserReport,
    SubscriptionsOfUserReport, UserActivityReport,
};
use pinnwand_domain::writer::ReportWriter;

use super::{checked_date_format, format_created, DEFAULT_DATE_FORMAT};

/// Default trailer: a horizontal rule
pub const DEFAULT_TRAILER: &str = "___________________________________________";

const COLUMN_SEPARATOR: &str = "\t ; \t";
const SUB_REPORT_SEPARATOR: &str = "\n\n\n\n\n";

/// Writer producing plain text
#[derive(Debug, Clone)]
pub struct PlainTextReportWriter {
    report_text: String,
    date_format: String,
    trailer: String,
}

impl Default for PlainTextReportWriter {
    fn default() -> Self {
        Self {
            report_text: String::new(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            trailer: DEFAULT_TRAILER.to_string(),
        }
    }
}

impl PlainTextReportWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: strftime pattern for the creation date
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = checked_date_format(format.into());
        self
    }

    /// Builder: text appended after every report
    pub fn with_trailer(mut self, trailer: impl Into<String>) -> Self {
        self.trailer = trailer.into();
        self
    }

    /// Title, header and creation date
    fn append_framing(&self, result: &mut String, report: &Report) {
        result.push_str(&format!("*** {} ***\n\n", report.title()));

        if let Some(header) = report.header_data() {
            result.push_str(header);
            result.push('\n');
        }

        result.push_str(&format!(
            "Erstellt am: {}\n\n",
            format_created(report.created(), &self.date_format)
        ));
    }

    fn append_imprint(result: &mut String, report: &Report) {
        if let Some(imprint) = report.imprint() {
            result.push_str(imprint);
            result.push('\n');
        }
    }

    fn process_flat(&mut self, report: &Report) {
        self.reset_report_text();

        let mut result = String::new();
        self.append_framing(&mut result, report);

        for row in report.rows() {
            for cell in row.columns() {
                result.push_str(cell);
                result.push_str(COLUMN_SEPARATOR);
            }
            result.push('\n');
        }
        result.push('\n');

        Self::append_imprint(&mut result, report);
        self.report_text = result;
    }

    fn process_composite(&mut self, report: &CompositeReport) -> Result<(), ReportError> {
        self.reset_report_text();

        let mut result = String::new();
        self.append_framing(&mut result, report);

        for sub_report in report.sub_reports() {
            self.process(sub_report)?;

            // Take the child's body out so the next sibling starts empty
            result.push_str(&mem::take(&mut self.report_text));
            result.push_str(SUB_REPORT_SEPARATOR);
        }

        Self::append_imprint(&mut result, report);
        self.report_text = result;
        Ok(())
    }
}

impl ReportWriter for PlainTextReportWriter {
    fn name(&self) -> &'static str {
        "plain-text"
    }

    fn header(&self) -> String {
        String::new()
    }

    fn trailer(&self) -> String {
        self.trailer.clone()
    }

    fn body(&self) -> &str {
        &self.report_text
    }

    fn reset_report_text(&mut self) {
        self.report_text.clear();
    }

    fn process_subscriptions_of_user(
        &mut self,
        report: &SubscriptionsOfUserReport,
    ) -> Result<(), ReportError> {
        self.process_flat(report);
        Ok(())
    }

    fn process_messages_of_user(
        &mut self,
        report: &MessagesOfUserReport,
    ) -> Result<(), ReportError> {
        self.process_flat(report);
        Ok(())
    }

    fn process_subscribers_of_user(
        &mut self,
        report: &SubscribersOfUserReport,
    ) -> Result<(), ReportError> {
        self.process_flat(report);
        Ok(())
    }

    fn process_user_activity(&mut self, report: &UserActivityReport) -> Result<(), ReportError> {
        self.process_composite(report)
    }

    fn process_all_users_activity(
        &mut self,
        report: &AllUsersActivityReport,
    ) -> Result<(), ReportError> {
        self.process_composite(report)
    }
}
