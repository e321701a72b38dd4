//! Lightweight crontab expression classifier, validator and line formatter.
#![deny(unsafe_code, warnings, missing_docs)]

//! This is a tiny crate, intended to:
//! - validate traditional 5-fields crontab schedule expressions;
//! - keep validated schedules as immutable records;
//! - render records back into user or system-wide crontab lines.
//!
//! _This is not a cron jobs scheduler, runner or installer._ It doesn't calculate upcoming events,
//! doesn't write crontab files and doesn't invoke the `crontab` command.
//!
//! ## Crontab line format
//!
//! Crontab line has five schedule fields separated by single spaces: minutes, hours, days of month,
//! months and days of week. Everything after the fifth field (user and/or command) isn't validated.
//!
//! The table below describes valid values and patterns of each field:
//!
//! | Field        | Allowed values    | Allowed patterns                                    |
//! |--------------|-------------------|-----------------------------------------------------|
//! | Minutes      | 0-59              | `*`, `,`, `a-b`, `*/n` or `a-b/n`, n in 2,3,4,5,6,10,12,15,20,30 |
//! | Hours        | 0-59              | `*`, `,`, `a-b`, `*/n` or `a-b/n`, n in 2,3,4,6,8,12 |
//! | Day of Month | 1-31              | `*`, `,`, `a-b`                                     |
//! | Month        | 1-12 or JAN-DEC   | `*`, `,`, `a-b`, `*/n`, `a-b/n` or `JAN-JUN/n`, n in 2,3,4,6 |
//! | Day of Week  | 0-7 or SUN-SAT    | `*`, `,`, `a-b`, `MON-FRI`                          |
//!
//! Names are case-insensitive and may be full (`monday`, `january`) or abbreviated (`mon`, `jan`).
//! Range bounds should be of the same kind, and the left bound should be strictly less than the right one.
//!
//! Some combinations are intentionally strict:
//! - hours accept values up to `59`, like minutes do;
//! - a single day of week name (`mon`) isn't accepted, while a range of names (`mon-fri`) is;
//! - a range of month names (`jan-mar`) is accepted only with a step (`jan-mar/2`).
//!
//! ## How to use
//!
//! The central entity of the crate is a [`CronRecord`] structure with a few basic methods:
//! - [new()](CronRecord::new): constructor to parse and validate provided crontab line;
//! - [format()](CronRecord::format): renders the record into a crontab line with an optional user and a command;
//! - [is_valid()](CronRecord::is_valid): checks that the record survives a format-parse round trip.
//!
//! ```rust
//! use crontab_lite::{CronRecord, Result};
//!
//! fn format() -> Result<()> {
//!     let record = CronRecord::new("*/15 9-17 * * mon-fri echo hi")?;
//!
//!     assert_eq!(record.to_string(), "*/15 9-17 * * mon-fri");
//!     assert_eq!(record.format("", "echo hi"), "*/15 9-17 * * mon-fri echo hi");
//!     assert_eq!(record.format("root", "echo hi"), "*/15 9-17 * * mon-fri root echo hi");
//!
//!     Ok(())
//! }
//! # format().unwrap();
//! ```
//!
//! Single sub-expressions may be classified with [`classify`] to find out their syntactic [`Category`].
//!
//! # Feature flags
//! * `serde`: adds [`Serialize`](https://docs.rs/serde/latest/serde/trait.Serialize.html) and [`Deserialize`](https://docs.rs/serde/latest/serde/trait.Deserialize.html) trait implementation for [`CronRecord`] and [`Field`].

/// Crontab body renderer.
pub mod crontab;
/// Crate specific Error implementation.
pub mod error;
/// Sub-expressions classifier.
pub mod expression;
/// Schedule fields and their validation rules.
pub mod field;
/// Validated crontab schedule record.
pub mod record;
mod utils;

// Re-export of public entities.
pub use crontab::{Crontab, CrontabEntry};
pub use error::CronError;
pub use expression::{classify, is_field_valid, Category, NameField, StepField};
pub use field::Field;
pub use record::CronRecord;

/// Convenient alias for `Result`.
pub type Result<T, E = CronError> = std::result::Result<T, E>;
