//! ReportGenerator - Builds reports from collaborator records
//!
//! The generator is the only place that knows which records go into
//! which report. Every report it returns is complete: title, header,
//! creation time, imprint and rows are set before a writer ever sees it.
//!
//! Row layout: the first row of every flat report holds the column
//! headings, followed by one row per record in id order.
//!
//! The imprint goes on the outermost report only; nested sub-reports
//! carry none, so a rendered tree prints it once.

use std::collections::BTreeMap;

use chrono::{Local, NaiveDateTime};
use pinnwand_domain::model::record::{fields, FieldValue, Record, RecordId, RecordKind};
use pinnwand_domain::model::report::{CompositeReport, Report};
use pinnwand_domain::model::row::Row;
use pinnwand_domain::model::variant::{
    AllUsersActivityReport, MessagesOfUserReport, SubscribersOfUserReport,
    SubscriptionsOfUserReport, UserActivityReport,
};
use pinnwand_domain::repository::record_source::{RecordFilter, RecordSource};
use tracing::{debug, info};

use crate::error::GeneratorError;

/// Format of timestamps inside table cells
const CELL_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

type Users = BTreeMap<RecordId, Record>;

/// Assembles report variants from a [`RecordSource`]
#[derive(Debug, Clone)]
pub struct ReportGenerator<S> {
    source: S,
    imprint: Option<String>,
    fixed_time: Option<NaiveDateTime>,
}

impl<S: RecordSource> ReportGenerator<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            imprint: None,
            fixed_time: None,
        }
    }

    /// Builder: imprint attached to every returned report
    pub fn with_imprint(mut self, imprint: impl Into<String>) -> Self {
        self.imprint = Some(imprint.into());
        self
    }

    /// Builder: stamp reports with this time instead of the current one
    pub fn with_fixed_time(mut self, time: NaiveDateTime) -> Self {
        self.fixed_time = Some(time);
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    // ========== Flat reports ==========

    /// Every subscription `user_id` holds
    pub fn create_subscriptions_of_user_report(
        &self,
        user_id: RecordId,
    ) -> Result<SubscriptionsOfUserReport, GeneratorError> {
        let users = self.load_users()?;
        let mut report = self.subscriptions_of_user(&users, user_id)?;
        self.stamp_imprint(&mut report);
        Ok(report)
    }

    /// Every message `user_id` posted
    pub fn create_messages_of_user_report(
        &self,
        user_id: RecordId,
    ) -> Result<MessagesOfUserReport, GeneratorError> {
        let users = self.load_users()?;
        let mut report = self.messages_of_user(&users, user_id)?;
        self.stamp_imprint(&mut report);
        Ok(report)
    }

    /// Every user subscribed to `user_id`
    pub fn create_subscribers_of_user_report(
        &self,
        user_id: RecordId,
    ) -> Result<SubscribersOfUserReport, GeneratorError> {
        let users = self.load_users()?;
        let mut report = self.subscribers_of_user(&users, user_id)?;
        self.stamp_imprint(&mut report);
        Ok(report)
    }

    // ========== Composite reports ==========

    /// Messages, subscriptions and subscribers of `user_id`
    pub fn create_user_activity_report(
        &self,
        user_id: RecordId,
    ) -> Result<UserActivityReport, GeneratorError> {
        let users = self.load_users()?;
        let mut report = self.user_activity(&users, user_id)?;
        self.stamp_imprint(&mut report);
        Ok(report)
    }

    /// One activity report per user, in id order
    pub fn create_all_users_activity_report(
        &self,
    ) -> Result<AllUsersActivityReport, GeneratorError> {
        let users = self.load_users()?;

        let base = self
            .base_report("Aktivität aller Nutzer")
            .with_header_data(format!("{} Nutzer", users.len()));
        let mut report = AllUsersActivityReport::new(CompositeReport::new(base));

        for id in users.keys() {
            report.add_sub_report(self.user_activity(&users, *id)?);
        }
        self.stamp_imprint(&mut report);

        info!(users = users.len(), "Created all-users activity report");
        Ok(report)
    }

    // ========== Assembly ==========

    fn subscriptions_of_user(
        &self,
        users: &Users,
        user_id: RecordId,
    ) -> Result<SubscriptionsOfUserReport, GeneratorError> {
        let user = lookup(users, user_id)?;
        let subscriptions =
            self.fetch_by_ref(RecordKind::Subscription, fields::SUBSCRIBER_ID, user_id)?;

        let mut report = self
            .base_report(format!("Abonnements von {}", handle(user)?))
            .with_header_data(user_line(user)?)
            .with_row(Row::new(["Abo-ID", "Abonnierter Nutzer", "Abonniert seit"]));

        for subscription in &subscriptions {
            let target_id =
                reference(subscription, RecordKind::Subscription, fields::TARGET_USER_ID)?;
            let target = lookup(users, target_id)?;
            report.add_row(Row::new([
                id_cell(subscription),
                handle(target)?,
                timestamp_cell(subscription, RecordKind::Subscription)?,
            ]));
        }

        debug!(%user_id, rows = subscriptions.len(), "Created subscriptions report");
        Ok(SubscriptionsOfUserReport::new(report))
    }

    fn messages_of_user(
        &self,
        users: &Users,
        user_id: RecordId,
    ) -> Result<MessagesOfUserReport, GeneratorError> {
        let user = lookup(users, user_id)?;
        let messages = self.fetch_by_ref(RecordKind::Message, fields::AUTHOR_ID, user_id)?;

        let mut report = self
            .base_report(format!("Nachrichten von {}", handle(user)?))
            .with_header_data(user_line(user)?)
            .with_row(Row::new(["Nachricht-ID", "Text", "Verfasst am"]));

        for message in &messages {
            let text = message
                .text(fields::TEXT)
                .ok_or_else(|| missing(message, RecordKind::Message, fields::TEXT))?;
            report.add_row(Row::new([
                id_cell(message),
                text.to_string(),
                timestamp_cell(message, RecordKind::Message)?,
            ]));
        }

        debug!(%user_id, rows = messages.len(), "Created messages report");
        Ok(MessagesOfUserReport::new(report))
    }

    fn subscribers_of_user(
        &self,
        users: &Users,
        user_id: RecordId,
    ) -> Result<SubscribersOfUserReport, GeneratorError> {
        let user = lookup(users, user_id)?;
        let subscriptions =
            self.fetch_by_ref(RecordKind::Subscription, fields::TARGET_USER_ID, user_id)?;

        let mut report = self
            .base_report(format!("Abonnenten von {}", handle(user)?))
            .with_header_data(user_line(user)?)
            .with_row(Row::new(["Abo-ID", "Abonnent", "Abonniert seit"]));

        for subscription in &subscriptions {
            let subscriber_id =
                reference(subscription, RecordKind::Subscription, fields::SUBSCRIBER_ID)?;
            let subscriber = lookup(users, subscriber_id)?;
            report.add_row(Row::new([
                id_cell(subscription),
                handle(subscriber)?,
                timestamp_cell(subscription, RecordKind::Subscription)?,
            ]));
        }

        debug!(%user_id, rows = subscriptions.len(), "Created subscribers report");
        Ok(SubscribersOfUserReport::new(report))
    }

    fn user_activity(
        &self,
        users: &Users,
        user_id: RecordId,
    ) -> Result<UserActivityReport, GeneratorError> {
        let user = lookup(users, user_id)?;

        let base = self
            .base_report(format!("Aktivität von {}", handle(user)?))
            .with_header_data(user_line(user)?);
        let mut report = UserActivityReport::new(CompositeReport::new(base));

        report.add_sub_report(self.messages_of_user(users, user_id)?);
        report.add_sub_report(self.subscriptions_of_user(users, user_id)?);
        report.add_sub_report(self.subscribers_of_user(users, user_id)?);

        debug!(%user_id, "Created user activity report");
        Ok(report)
    }

    fn base_report(&self, title: impl Into<String>) -> Report {
        Report::new(title, self.now())
    }

    fn stamp_imprint(&self, report: &mut Report) {
        report.set_imprint(self.imprint.clone());
    }

    fn now(&self) -> NaiveDateTime {
        self.fixed_time
            .unwrap_or_else(|| Local::now().naive_local())
    }

    fn load_users(&self) -> Result<Users, GeneratorError> {
        let records = self
            .source
            .fetch_records_for(RecordKind::User, &RecordFilter::All)?;

        Ok(records
            .into_iter()
            .filter_map(|r| r.id().map(|id| (id, r)))
            .collect())
    }

    fn fetch_by_ref(
        &self,
        kind: RecordKind,
        field: &str,
        id: RecordId,
    ) -> Result<Vec<Record>, GeneratorError> {
        let filter = RecordFilter::field_equals(field, FieldValue::Id(id));
        Ok(self.source.fetch_records_for(kind, &filter)?)
    }
}

fn lookup(users: &Users, id: RecordId) -> Result<&Record, GeneratorError> {
    users.get(&id).ok_or(GeneratorError::UnknownUser { id })
}

fn missing(record: &Record, kind: RecordKind, field: &'static str) -> GeneratorError {
    GeneratorError::MissingField {
        kind,
        id: record.id().map_or_else(|| "?".to_string(), |id| id.to_string()),
        field,
    }
}

fn reference(
    record: &Record,
    kind: RecordKind,
    field: &'static str,
) -> Result<RecordId, GeneratorError> {
    record
        .reference(field)
        .ok_or_else(|| missing(record, kind, field))
}

/// `@nickname`
fn handle(user: &Record) -> Result<String, GeneratorError> {
    user.text(fields::NICKNAME)
        .map(|nick| format!("@{}", nick))
        .ok_or_else(|| missing(user, RecordKind::User, fields::NICKNAME))
}

/// `Nutzer: Max Mustermann (@max), max@example.org`; name and mail optional
fn user_line(user: &Record) -> Result<String, GeneratorError> {
    let handle = handle(user)?;

    let name = [fields::FIRST_NAME, fields::LAST_NAME]
        .iter()
        .filter_map(|f| user.text(f))
        .collect::<Vec<_>>()
        .join(" ");

    let mut line = if name.is_empty() {
        format!("Nutzer: {}", handle)
    } else {
        format!("Nutzer: {} ({})", name, handle)
    };

    if let Some(email) = user.text(fields::EMAIL) {
        line.push_str(", ");
        line.push_str(email);
    }

    Ok(line)
}

fn id_cell(record: &Record) -> String {
    record.id().map(|id| id.to_string()).unwrap_or_default()
}

fn timestamp_cell(record: &Record, kind: RecordKind) -> Result<String, GeneratorError> {
    record
        .timestamp(fields::CREATED)
        .map(|ts| ts.format(CELL_TIMESTAMP_FORMAT).to_string())
        .ok_or_else(|| missing(record, kind, fields::CREATED))
}
