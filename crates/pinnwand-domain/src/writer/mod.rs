//! ReportWriter - The renderer contract
//!
//! A writer turns a report tree into text. It supports a fixed set of
//! report variants, one `process_*` method each. The provided
//! [`ReportWriter::process`] dispatches on the variant tag; every
//! `process_*` it does not override fails with
//! [`ReportError::UnsupportedVariant`].
//!
//! ```text
//! process(&ReportVariant)
//!   ├── SubscriptionsOfUser → process_subscriptions_of_user()
//!   ├── MessagesOfUser      → process_messages_of_user()
//!   ├── SubscribersOfUser   → process_subscribers_of_user()
//!   ├── UserActivity        → process_user_activity()      (recurses)
//!   └── AllUsersActivity    → process_all_users_activity() (recurses)
//! ```
//!
//! ## Accumulation buffer
//!
//! Each writer owns one body buffer. Every `process_*` resets it first and
//! writes it only once its own text is complete, so a previous render can
//! never leak into the next one and a failed render leaves it empty.
//! `&mut self` keeps a writer to one render at a time.

use tracing::debug;

use crate::error::ReportError;
use crate::model::variant::{
    AllUsersActivityReport, MessagesOfUserReport, ReportKind, ReportVariant,
    SubscribersOfUserReport, SubscriptionsOfUserReport, UserActivityReport,
};

/// Renderer contract, one `process_*` per report variant
pub trait ReportWriter {
    /// Short writer name for errors and logs
    fn name(&self) -> &'static str;

    /// Prefix of the final text; may be empty
    fn header(&self) -> String;

    /// Suffix of the final text; may be empty
    fn trailer(&self) -> String;

    /// The accumulated body of the last render
    fn body(&self) -> &str;

    /// Clear the accumulated body
    fn reset_report_text(&mut self);

    fn process_subscriptions_of_user(
        &mut self,
        _report: &SubscriptionsOfUserReport,
    ) -> Result<(), ReportError> {
        Err(self.unsupported(ReportKind::SubscriptionsOfUser))
    }

    fn process_messages_of_user(
        &mut self,
        _report: &MessagesOfUserReport,
    ) -> Result<(), ReportError> {
        Err(self.unsupported(ReportKind::MessagesOfUser))
    }

    fn process_subscribers_of_user(
        &mut self,
        _report: &SubscribersOfUserReport,
    ) -> Result<(), ReportError> {
        Err(self.unsupported(ReportKind::SubscribersOfUser))
    }

    fn process_user_activity(&mut self, _report: &UserActivityReport) -> Result<(), ReportError> {
        Err(self.unsupported(ReportKind::UserActivity))
    }

    fn process_all_users_activity(
        &mut self,
        _report: &AllUsersActivityReport,
    ) -> Result<(), ReportError> {
        Err(self.unsupported(ReportKind::AllUsersActivity))
    }

    /// Render any report by dispatching on its variant
    fn process(&mut self, report: &ReportVariant) -> Result<(), ReportError> {
        debug!(
            writer = self.name(),
            kind = %report.kind(),
            title = report.base().title(),
            "Processing report"
        );

        match report {
            ReportVariant::SubscriptionsOfUser(r) => self.process_subscriptions_of_user(r),
            ReportVariant::MessagesOfUser(r) => self.process_messages_of_user(r),
            ReportVariant::SubscribersOfUser(r) => self.process_subscribers_of_user(r),
            ReportVariant::UserActivity(r) => self.process_user_activity(r),
            ReportVariant::AllUsersActivity(r) => self.process_all_users_activity(r),
        }
    }

    /// `header() + body + trailer()`
    fn report_text(&self) -> String {
        format!("{}{}{}", self.header(), self.body(), self.trailer())
    }

    /// Build the dispatch error and clear the buffer
    fn unsupported(&mut self, kind: ReportKind) -> ReportError {
        self.reset_report_text();
        ReportError::UnsupportedVariant {
            writer: self.name(),
            kind,
        }
    }
}

/// Render `report` with `writer` and return the complete text
pub fn render<W>(report: &ReportVariant, writer: &mut W) -> Result<String, ReportError>
where
    W: ReportWriter + ?Sized,
{
    writer.process(report)?;
    Ok(writer.report_text())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::report::{CompositeReport, Report};
    use chrono::NaiveDate;

    /// Writer that only knows message reports
    #[derive(Default)]
    struct TitleWriter {
        report_text: String,
    }

    impl ReportWriter for TitleWriter {
        fn name(&self) -> &'static str {
            "title"
        }

        fn header(&self) -> String {
            "<".to_string()
        }

        fn trailer(&self) -> String {
            ">".to_string()
        }

        fn body(&self) -> &str {
            &self.report_text
        }

        fn reset_report_text(&mut self) {
            self.report_text.clear();
        }

        fn process_messages_of_user(
            &mut self,
            report: &MessagesOfUserReport,
        ) -> Result<(), ReportError> {
            self.reset_report_text();
            self.report_text = report.title().to_string();
            Ok(())
        }
    }

    fn created() -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn messages(title: &str) -> ReportVariant {
        MessagesOfUserReport::new(Report::new(title, created())).into()
    }

    #[test]
    fn test_report_text_before_process() {
        let writer = TitleWriter::default();
        assert_eq!(writer.report_text(), "<>");
    }

    #[test]
    fn test_dispatch_to_supported_variant() {
        let mut writer = TitleWriter::default();
        let text = render(&messages("Nachrichten"), &mut writer).unwrap();

        assert_eq!(text, "<Nachrichten>");
        assert_eq!(writer.body(), "Nachrichten");
    }

    #[test]
    fn test_unsupported_variant_fails_and_clears() {
        let mut writer = TitleWriter::default();
        render(&messages("alt"), &mut writer).unwrap();

        let base = CompositeReport::new(Report::new("Aktivität", created()));
        let activity: ReportVariant = UserActivityReport::new(base).into();
        let err = render(&activity, &mut writer).unwrap_err();

        assert_eq!(
            err,
            ReportError::UnsupportedVariant {
                writer: "title",
                kind: ReportKind::UserActivity,
            }
        );
        // No leftover text from the previous render
        assert_eq!(writer.body(), "");
        assert_eq!(writer.report_text(), "<>");
    }

    #[test]
    fn test_render_through_trait_object() {
        let mut writer: Box<dyn ReportWriter> = Box::new(TitleWriter::default());
        let text = render(&messages("dyn"), writer.as_mut()).unwrap();
        assert_eq!(text, "<dyn>");
    }
}
