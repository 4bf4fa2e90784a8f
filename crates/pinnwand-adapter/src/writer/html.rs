//! HtmlReportWriter - Reports as an HTML page
//!
//! Renders the same report tree as the plain-text writer, but as HTML
//! markup. The first row of a table is printed as heading cells.
//! The all-users export is a plain-text-only report; this writer leaves
//! `process_all_users_activity` at its failing default.

use std::mem;

use pinnwand_domain::error::ReportError;
use pinnwand_domain::model::report::{CompositeReport, Report};
use pinnwand_domain::model::variant::{
    MessagesOfUserReport, SubscribersOfUserReport, SubscriptionsOfUserReport, UserActivityReport,
};
use pinnwand_domain::writer::ReportWriter;

use super::{checked_date_format, format_created, DEFAULT_DATE_FORMAT};

/// Escape text for use inside HTML elements and attributes
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Writer producing HTML
#[derive(Debug, Clone)]
pub struct HtmlReportWriter {
    report_text: String,
    date_format: String,
}

impl Default for HtmlReportWriter {
    fn default() -> Self {
        Self {
            report_text: String::new(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl HtmlReportWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: strftime pattern for the creation date
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = checked_date_format(format.into());
        self
    }

    fn append_framing(&self, result: &mut String, report: &Report) {
        result.push_str(&format!("<h2>{}</h2>\n", escape_html(report.title())));

        if let Some(header) = report.header_data() {
            result.push_str(&format!("<p>{}</p>\n", escape_html(header)));
        }

        result.push_str(&format!(
            "<p>Erstellt am: {}</p>\n",
            escape_html(&format_created(report.created(), &self.date_format))
        ));
    }

    fn append_imprint(result: &mut String, report: &Report) {
        if let Some(imprint) = report.imprint() {
            result.push_str(&format!("<p><em>{}</em></p>\n", escape_html(imprint)));
        }
    }

    fn process_flat(&mut self, report: &Report) {
        self.reset_report_text();

        let mut result = String::new();
        self.append_framing(&mut result, report);

        if !report.rows().is_empty() {
            result.push_str("<table>\n");
            for (i, row) in report.rows().iter().enumerate() {
                let tag = if i == 0 { "th" } else { "td" };
                result.push_str("<tr>");
                for cell in row.columns() {
                    result.push_str(&format!("<{tag}>{}</{tag}>", escape_html(cell)));
                }
                result.push_str("</tr>\n");
            }
            result.push_str("</table>\n");
        }

        Self::append_imprint(&mut result, report);
        self.report_text = result;
    }

    fn process_composite(&mut self, report: &CompositeReport) -> Result<(), ReportError> {
        self.reset_report_text();

        let mut result = String::new();
        self.append_framing(&mut result, report);

        for sub_report in report.sub_reports() {
            self.process(sub_report)?;

            result.push_str("<div class=\"sub-report\">\n");
            result.push_str(&mem::take(&mut self.report_text));
            result.push_str("</div>\n");
        }

        Self::append_imprint(&mut result, report);
        self.report_text = result;
        Ok(())
    }
}

impl ReportWriter for HtmlReportWriter {
    fn name(&self) -> &'static str {
        "html"
    }

    fn header(&self) -> String {
        "<html><head><meta charset=\"utf-8\"><title></title></head><body>\n".to_string()
    }

    fn trailer(&self) -> String {
        "</body></html>\n".to_string()
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
}
