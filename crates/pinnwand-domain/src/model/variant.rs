//! Report variants - The concrete report types
//!
//! Each variant is its own type, wrapping either a flat [`Report`] or a
//! [`CompositeReport`]. Writers recognise a report by its variant tag,
//! not by its shape: two composites with identical structure can still be
//! rendered differently.

use core::fmt;
use core::ops::{Deref, DerefMut};

use super::report::{CompositeReport, Report};

/// Tag of a concrete report type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    /// All subscriptions a user holds (flat)
    SubscriptionsOfUser,
    /// All messages a user posted (flat)
    MessagesOfUser,
    /// All users subscribed to a user (flat)
    SubscribersOfUser,
    /// Messages, subscriptions and subscribers of one user (composite)
    UserActivity,
    /// One activity report per user (composite of composites)
    AllUsersActivity,
}

impl ReportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::SubscriptionsOfUser => "subscriptions-of-user",
            ReportKind::MessagesOfUser => "messages-of-user",
            ReportKind::SubscribersOfUser => "subscribers-of-user",
            ReportKind::UserActivity => "user-activity",
            ReportKind::AllUsersActivity => "all-users-activity",
        }
    }

    /// Whether reports of this kind carry sub-reports
    pub fn is_composite(&self) -> bool {
        matches!(self, ReportKind::UserActivity | ReportKind::AllUsersActivity)
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declares a variant newtype over `Report` or `CompositeReport`
macro_rules! report_variant {
    ($(#[$meta:meta])* $name:ident($inner:ty) => $kind:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name($inner);

        impl $name {
            pub fn new(inner: $inner) -> Self {
                Self(inner)
            }

            pub fn kind(&self) -> ReportKind {
                ReportKind::$kind
            }

            pub fn into_inner(self) -> $inner {
                self.0
            }
        }

        impl Deref for $name {
            type Target = $inner;

            fn deref(&self) -> &$inner {
                &self.0
            }
        }

        impl DerefMut for $name {
            fn deref_mut(&mut self) -> &mut $inner {
                &mut self.0
            }
        }

        impl From<$name> for ReportVariant {
            fn from(report: $name) -> Self {
                ReportVariant::$kind(report)
            }
        }
    };
}

report_variant! {
    /// All subscriptions of one user
    SubscriptionsOfUserReport(Report) => SubscriptionsOfUser
}

report_variant! {
    /// All messages of one user
    MessagesOfUserReport(Report) => MessagesOfUser
}

report_variant! {
    /// All subscribers of one user
    SubscribersOfUserReport(Report) => SubscribersOfUser
}

report_variant! {
    /// Everything one user did, as a set of flat sub-reports
    UserActivityReport(CompositeReport) => UserActivity
}

report_variant! {
    /// One [`UserActivityReport`] per user
    AllUsersActivityReport(CompositeReport) => AllUsersActivity
}

/// Any concrete report, tagged by its kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportVariant {
    SubscriptionsOfUser(SubscriptionsOfUserReport),
    MessagesOfUser(MessagesOfUserReport),
    SubscribersOfUser(SubscribersOfUserReport),
    UserActivity(UserActivityReport),
    AllUsersActivity(AllUsersActivityReport),
}

impl ReportVariant {
    pub fn kind(&self) -> ReportKind {
        match self {
            ReportVariant::SubscriptionsOfUser(r) => r.kind(),
            ReportVariant::MessagesOfUser(r) => r.kind(),
            ReportVariant::SubscribersOfUser(r) => r.kind(),
            ReportVariant::UserActivity(r) => r.kind(),
            ReportVariant::AllUsersActivity(r) => r.kind(),
        }
    }

    /// The shared framing data of the report
    pub fn base(&self) -> &Report {
        match self {
            ReportVariant::SubscriptionsOfUser(r) => &**r,
            ReportVariant::MessagesOfUser(r) => &**r,
            ReportVariant::SubscribersOfUser(r) => &**r,
            ReportVariant::UserActivity(r) => r.base(),
            ReportVariant::AllUsersActivity(r) => r.base(),
        }
    }

    /// The composite part, if this variant has sub-reports
    pub fn as_composite(&self) -> Option<&CompositeReport> {
        match self {
            ReportVariant::UserActivity(r) => Some(&**r),
            ReportVariant::AllUsersActivity(r) => Some(&**r),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::row::Row;
    use chrono::NaiveDate;

    fn created() -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_kind_tags() {
        let flat: ReportVariant =
            SubscriptionsOfUserReport::new(Report::new("Abos", created())).into();
        assert_eq!(flat.kind(), ReportKind::SubscriptionsOfUser);
        assert!(flat.as_composite().is_none());

        let composite: ReportVariant =
            UserActivityReport::new(CompositeReport::new(Report::new("Aktivität", created())))
                .into();
        assert_eq!(composite.kind(), ReportKind::UserActivity);
        assert!(composite.as_composite().is_some());
        assert!(composite.kind().is_composite());
    }

    #[test]
    fn test_same_shape_different_variant() {
        let base = Report::new("Gleich", created()).with_row(Row::new(["1"]));
        let messages: ReportVariant = MessagesOfUserReport::new(base.clone()).into();
        let subscribers: ReportVariant = SubscribersOfUserReport::new(base).into();

        assert_eq!(messages.base(), subscribers.base());
        assert_ne!(messages, subscribers);
    }

    #[test]
    fn test_newtype_derefs_through_composite() {
        let mut activity =
            UserActivityReport::new(CompositeReport::new(Report::new("Aktivität", created())));
        activity.add_sub_report(MessagesOfUserReport::new(Report::new("Nachrichten", created())));

        assert_eq!(activity.title(), "Aktivität");
        assert_eq!(activity.num_sub_reports(), 1);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ReportKind::MessagesOfUser.to_string(), "messages-of-user");
        assert_eq!(ReportKind::AllUsersActivity.as_str(), "all-users-activity");
    }
}
