use crate::expression::{self, Category, NameField, StepField};
use std::fmt::Display;

pub(crate) type FieldValueType = i64;

/// Kind of the crontab schedule field.
///
/// Field kind defines valid numeric bounds of the field values, whether mnemonic names are allowed
/// and which kinds of sub-expressions are acceptable in the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Field {
    /// Minutes, the first field.
    Minute = 0,
    /// Hours, the second field.
    Hour = 1,
    /// Days of month, the third field.
    DayOfMonth = 2,
    /// Months, the fourth field.
    Month = 3,
    /// Days of week, the fifth field.
    DayOfWeek = 4,
}

impl Field {
    /// All fields in the order they appear in the crontab line.
    pub const ALL: [Field; 5] = [
        Field::Minute,
        Field::Hour,
        Field::DayOfMonth,
        Field::Month,
        Field::DayOfWeek,
    ];

    const MINUTE_STEPS: [&str; 10] = ["2", "3", "4", "5", "6", "10", "12", "15", "20", "30"];
    const HOUR_STEPS: [&str; 6] = ["2", "3", "4", "6", "8", "12"];
    const MONTH_STEPS: [&str; 4] = ["2", "3", "4", "6"];

    /// Inclusive bounds of the numeric field value.
    ///
    /// Hours share the minutes bound, so `24..=59` are accepted as hours.
    pub(crate) fn min_max(&self) -> (FieldValueType, FieldValueType) {
        match self {
            Self::Minute => (0, 59),
            Self::Hour => (0, 59),
            Self::DayOfMonth => (1, 31),
            Self::Month => (1, 12),
            Self::DayOfWeek => (0, 7),
        }
    }

    /// Divisors allowed on the right side of the `/` step expression.
    pub(crate) fn step_divisors(&self) -> &'static [&'static str] {
        match self {
            Self::Minute => &Self::MINUTE_STEPS,
            Self::Hour => &Self::HOUR_STEPS,
            Self::Month => &Self::MONTH_STEPS,
            Self::DayOfMonth | Self::DayOfWeek => &[],
        }
    }

    /// Returns `true` if the sub-expression category is acceptable in this field.
    pub fn accepts(&self, category: &Category) -> bool {
        match self {
            Self::Minute => matches!(
                category,
                Category::Star
                    | Category::Step(StepField::Minute)
                    | Category::Value(Field::Minute)
                    | Category::Range(Field::Minute)
            ),
            Self::Hour => matches!(
                category,
                Category::Star
                    | Category::Step(StepField::Hour)
                    | Category::Value(Field::Hour)
                    | Category::Range(Field::Hour)
            ),
            Self::DayOfMonth => matches!(
                category,
                Category::Star | Category::Value(Field::DayOfMonth) | Category::Range(Field::DayOfMonth)
            ),
            Self::Month => matches!(
                category,
                Category::Star
                    | Category::Step(StepField::Month)
                    | Category::Value(Field::Month)
                    | Category::Name(NameField::Month)
                    | Category::Range(Field::Month)
            ),
            Self::DayOfWeek => matches!(
                category,
                Category::Star
                    | Category::Value(Field::DayOfWeek)
                    | Category::Range(Field::DayOfWeek)
                    | Category::NameRange(NameField::Week)
            ),
        }
    }

    /// Validates the whole field value, which may be a comma separated list of sub-expressions.
    ///
    /// Every sub-expression should be classified into one of the categories acceptable in the field.
    pub fn is_valid(&self, input: &str) -> bool {
        input
            .split(',')
            .all(|item| self.accepts(&expression::classify(item, *self)))
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Minute => "minutes",
            Self::Hour => "hour",
            Self::DayOfMonth => "day-of-the-month",
            Self::Month => "month",
            Self::DayOfWeek => "day-of-the-week",
        };
        write!(f, "{name}")
    }
}
