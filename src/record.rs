use crate::{field::Field, CronError, Result};
use std::{fmt::Display, str::FromStr};
use tracing::debug;

/// Validated crontab schedule: five fields of the crontab line.
///
/// Each field keeps the original literal string, so formatting the record gives back exactly
/// what was parsed. The only way to get a non-empty record is to parse it, see [`CronRecord::new`].
///
/// [`CronRecord::default()`] is a _zero_ record: it never represents a valid schedule
/// and renders into an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String"))]
#[cfg_attr(feature = "serde", serde(into = "String"))]
pub struct CronRecord {
    minute: String,
    hour: String,
    day_of_month: String,
    month: String,
    day_of_week: String,
}

impl CronRecord {
    /// Parses and validates provided crontab `line` and constructs [`CronRecord`] instance.
    ///
    /// The line is split by single spaces, and only the first five elements are considered,
    /// the rest (usually a user and a command) is ignored.
    /// Fields are validated in the order they appear, and the first invalid field is reported.
    ///
    /// Alternative way to construct [`CronRecord`] is to use one of `try_from` or `from_str` methods.
    ///
    /// Returns [`CronError`] in a case provided line has less than five fields or one of them is invalid.
    pub fn new(line: impl AsRef<str>) -> Result<Self> {
        let line = line.as_ref();
        let elements: Vec<&str> = line.split(' ').collect();

        if elements.len() < Field::ALL.len() {
            debug!(line, "cron line has less than 5 fields");
            return Err(CronError::MalformedLine(line.to_owned()));
        }

        for (field, value) in Field::ALL.into_iter().zip(elements.iter()) {
            if !field.is_valid(value) {
                debug!(line, %field, value, "invalid cron field");
                return Err(CronError::InvalidField(field, (*value).to_owned()));
            }
        }

        Ok(Self {
            minute: elements[0].to_owned(),
            hour: elements[1].to_owned(),
            day_of_month: elements[2].to_owned(),
            month: elements[3].to_owned(),
            day_of_week: elements[4].to_owned(),
        })
    }

    /// Alias of [`CronRecord::new`].
    #[inline]
    pub fn parse(line: impl AsRef<str>) -> Result<Self> {
        Self::new(line)
    }

    /// Returns a line that can be added to a crontab.
    ///
    /// If `user` is empty, the line has user crontab format: `<schedule> <cmd>`,
    /// otherwise it's a system-wide crontab line: `<schedule> <user> <cmd>`.
    ///
    /// Zero record is rendered into an empty string, which means "nothing to emit".
    pub fn format(&self, user: &str, cmd: &str) -> String {
        if self.is_zero() {
            return String::new();
        }

        if user.is_empty() {
            format!("{self} {cmd}")
        } else {
            format!("{self} {user} {cmd}")
        }
    }

    /// Returns `true` if the record is non-zero and its formatted line can be parsed back.
    pub fn is_valid(&self) -> bool {
        !self.is_zero() && Self::new(self.format("root", "cmd")).is_ok()
    }

    /// Returns `true` if any of the fields is empty.
    pub fn is_zero(&self) -> bool {
        Field::ALL.into_iter().any(|field| self.get(field).is_empty())
    }

    /// Returns literal value of the specified field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Minute => &self.minute,
            Field::Hour => &self.hour,
            Field::DayOfMonth => &self.day_of_month,
            Field::Month => &self.month,
            Field::DayOfWeek => &self.day_of_week,
        }
    }

    /// Minutes field.
    #[inline]
    pub fn minute(&self) -> &str {
        &self.minute
    }

    /// Hours field.
    #[inline]
    pub fn hour(&self) -> &str {
        &self.hour
    }

    /// Days of month field.
    #[inline]
    pub fn day_of_month(&self) -> &str {
        &self.day_of_month
    }

    /// Months field.
    #[inline]
    pub fn month(&self) -> &str {
        &self.month
    }

    /// Days of week field.
    #[inline]
    pub fn day_of_week(&self) -> &str {
        &self.day_of_week
    }
}

impl From<CronRecord> for String {
    fn from(value: CronRecord) -> Self {
        value.to_string()
    }
}

impl From<&CronRecord> for String {
    fn from(value: &CronRecord) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for CronRecord {
    type Error = CronError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&String> for CronRecord {
    type Error = CronError;

    fn try_from(value: &String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for CronRecord {
    type Error = CronError;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl FromStr for CronRecord {
    type Err = CronError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl Display for CronRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            return Ok(());
        }

        write!(
            f,
            "{} {} {} {} {}",
            self.minute, self.hour, self.day_of_month, self.month, self.day_of_week
        )
    }
}
