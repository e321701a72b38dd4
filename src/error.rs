use crate::field::Field;
use thiserror::Error;

/// Crate specific Errors implementation.
#[derive(Debug, Error, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CronError {
    /// Crontab line has less than five space separated fields.
    #[error("a cron expression must have at least 5 entries (and a command): {0}")]
    MalformedLine(String),
    /// One of the schedule fields contains an invalid sub-expression.
    #[error("invalid expression for {0}: {1}")]
    InvalidField(Field, String),
    /// Empty (zero) record can't be rendered into a crontab.
    #[error("cron record is empty")]
    EmptyRecord,
    /// Crontab comment, user or command would break the crontab line structure.
    #[error("invalid crontab entry: {0:?}")]
    InvalidEntry(String),
}
