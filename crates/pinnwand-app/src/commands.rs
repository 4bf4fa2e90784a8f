//! pinnwand subcommands

use anyhow::Context;
use clap::{Args, ValueEnum};
use pinnwand_adapter::{HtmlReportWriter, InMemoryRecordStore, PlainTextReportWriter};
use pinnwand_domain::model::record::{fields, RecordId};
use pinnwand_domain::{render, RecordMapper, ReportVariant, ReportWriter};
use pinnwand_usecase::ReportGenerator;
use shared::{AppConfig, OutputFormat, PinnwandError};
use tracing::info;

/// Which report to create
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportChoice {
    /// Subscriptions a user holds
    Subscriptions,
    /// Messages a user posted
    Messages,
    /// Users subscribed to a user
    Subscribers,
    /// Messages, subscriptions and subscribers of a user
    Activity,
    /// Activity of every user
    All,
}

#[derive(Debug, Args)]
pub struct ReportCommand {
    /// Report to create
    #[arg(value_enum)]
    pub kind: ReportChoice,

    /// User id (required for every report except `all`)
    #[arg(short, long)]
    pub user: Option<u64>,

    /// Output format (defaults to the configured one)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,
}

impl ReportCommand {
    /// Build and render the report
    pub fn run(&self, config: &AppConfig, store: InMemoryRecordStore) -> anyhow::Result<String> {
        let mut generator = ReportGenerator::new(store);
        if let Some(imprint) = &config.imprint {
            generator = generator.with_imprint(imprint.clone());
        }

        let report = self.generate(&generator)?;

        let format = self.format.unwrap_or(config.default_format);
        let mut writer: Box<dyn ReportWriter> = match format {
            OutputFormat::Plain => Box::new(
                PlainTextReportWriter::new()
                    .with_date_format(config.date_format.clone())
                    .with_trailer(config.trailer.clone()),
            ),
            OutputFormat::Html => {
                Box::new(HtmlReportWriter::new().with_date_format(config.date_format.clone()))
            }
        };

        let text = render(&report, writer.as_mut())
            .with_context(|| format!("failed to render {} report", report.kind()))?;

        info!(kind = %report.kind(), writer = writer.name(), bytes = text.len(), "Rendered report");
        Ok(text)
    }

    fn generate(
        &self,
        generator: &ReportGenerator<InMemoryRecordStore>,
    ) -> shared::Result<ReportVariant> {
        let report: ReportVariant = match self.kind {
            ReportChoice::Subscriptions => generator
                .create_subscriptions_of_user_report(self.user_id()?)?
                .into(),
            ReportChoice::Messages => generator
                .create_messages_of_user_report(self.user_id()?)?
                .into(),
            ReportChoice::Subscribers => generator
                .create_subscribers_of_user_report(self.user_id()?)?
                .into(),
            ReportChoice::Activity => generator
                .create_user_activity_report(self.user_id()?)?
                .into(),
            ReportChoice::All => generator.create_all_users_activity_report()?.into(),
        };
        Ok(report)
    }

    fn user_id(&self) -> shared::Result<RecordId> {
        self.user
            .map(RecordId::new)
            .ok_or_else(|| PinnwandError::Usage("--user is required for this report".to_string()))
    }
}

/// `id  @nickname` per user
pub fn list_users(store: &InMemoryRecordStore) -> anyhow::Result<String> {
    let mut out = String::new();
    for user in store.users().find_all()? {
        let id = user.id().map(|id| id.to_string()).unwrap_or_default();
        let nickname = user.text(fields::NICKNAME).unwrap_or("?");
        out.push_str(&format!("{:>4}  @{}\n", id, nickname));
    }
    Ok(out)
}
