use crate::{CronError, CronRecord, Result};
use std::fmt::Display;
use tracing::debug;

/// Single line of the crontab.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CrontabEntry {
    record: CronRecord,
    user: String,
    command: String,
}

impl CrontabEntry {
    /// Schedule of the entry.
    pub fn record(&self) -> &CronRecord {
        &self.record
    }

    /// User to run the command as, empty for a user crontab.
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Command to run.
    pub fn command(&self) -> &str {
        &self.command
    }
}

impl Display for CrontabEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.record.format(&self.user, &self.command))
    }
}

/// In-memory crontab: optional comment header followed by the list of entries.
///
/// Rendered content is ready to be written into a user crontab
/// or into a file of the system-wide crontab directory (like `/etc/cron.d`),
/// writing itself is up to the caller.
///
/// ```rust
/// use crontab_lite::{CronRecord, Crontab, Result};
///
/// fn crontab() -> Result<()> {
///     let mut crontab = Crontab::new("nightly jobs")?;
///     crontab.add(CronRecord::new("0 3 * * *")?, "root", "/usr/local/bin/backup")?;
///     crontab.add(CronRecord::new("*/15 * * * *")?, "www", "/usr/local/bin/refresh")?;
///
///     assert_eq!(
///         crontab.render(),
///         "#nightly jobs\n0 3 * * * root /usr/local/bin/backup\n*/15 * * * * www /usr/local/bin/refresh\n"
///     );
///
///     Ok(())
/// }
/// # crontab().unwrap();
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Crontab {
    comment: String,
    entries: Vec<CrontabEntry>,
}

impl Crontab {
    /// Creates an empty crontab with the comment header, empty comment means no header.
    ///
    /// Returns [`CronError::InvalidEntry`] if the comment contains a line break.
    pub fn new(comment: impl Into<String>) -> Result<Self> {
        let comment = comment.into();
        if has_line_break(&comment) {
            debug!(%comment, "crontab comment contains line break");
            return Err(CronError::InvalidEntry(comment));
        }

        Ok(Self {
            comment,
            entries: Vec::new(),
        })
    }

    /// Appends new entry to the crontab.
    ///
    /// Returns [`CronError::EmptyRecord`] if `record` is zero,
    /// and [`CronError::InvalidEntry`] if `user` contains whitespaces or `command` contains a line break,
    /// so each entry is always rendered into exactly one line.
    pub fn add(&mut self, record: CronRecord, user: impl Into<String>, command: impl Into<String>) -> Result<()> {
        if record.is_zero() {
            return Err(CronError::EmptyRecord);
        }

        let user = user.into();
        if user.chars().any(char::is_whitespace) {
            debug!(%user, "crontab user contains whitespace");
            return Err(CronError::InvalidEntry(user));
        }

        let command = command.into();
        if has_line_break(&command) {
            debug!(%command, "crontab command contains line break");
            return Err(CronError::InvalidEntry(command));
        }

        let entry = CrontabEntry { record, user, command };
        debug!(entry = %entry, "crontab entry added");
        self.entries.push(entry);

        Ok(())
    }

    /// Comment header.
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// List of the entries in order of addition.
    pub fn entries(&self) -> &[CrontabEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Renders crontab content, each line is terminated by a newline.
    #[inline]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl Display for Crontab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.comment.is_empty() {
            writeln!(f, "#{}", self.comment)?;
        }

        for entry in &self.entries {
            writeln!(f, "{entry}")?;
        }

        Ok(())
    }
}

fn has_line_break(input: &str) -> bool {
    input.contains(|c: char| c == '\n' || c == '\r')
}
