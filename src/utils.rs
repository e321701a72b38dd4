/// Common utility functions.
use crate::field::FieldValueType;
use chrono::{Month, Weekday};
use std::num::ParseIntError;

const DAYS_OF_WEEK: [(&str, Weekday); 14] = [
    ("sunday", Weekday::Sun),
    ("monday", Weekday::Mon),
    ("tuesday", Weekday::Tue),
    ("wednesday", Weekday::Wed),
    ("thursday", Weekday::Thu),
    ("friday", Weekday::Fri),
    ("saturday", Weekday::Sat),
    ("sun", Weekday::Sun),
    ("mon", Weekday::Mon),
    ("tue", Weekday::Tue),
    ("wed", Weekday::Wed),
    ("thu", Weekday::Thu),
    ("fri", Weekday::Fri),
    ("sat", Weekday::Sat),
];

// "may" is both the full name and the abbreviation.
const MONTHS: [(&str, Month); 23] = [
    ("january", Month::January),
    ("february", Month::February),
    ("march", Month::March),
    ("april", Month::April),
    ("may", Month::May),
    ("june", Month::June),
    ("july", Month::July),
    ("august", Month::August),
    ("september", Month::September),
    ("october", Month::October),
    ("november", Month::November),
    ("december", Month::December),
    ("jan", Month::January),
    ("feb", Month::February),
    ("mar", Month::March),
    ("apr", Month::April),
    ("jun", Month::June),
    ("jul", Month::July),
    ("aug", Month::August),
    ("sep", Month::September),
    ("oct", Month::October),
    ("nov", Month::November),
    ("dec", Month::December),
];

/// Converts string into signed number with bounds validation.
///
/// Returns an error if the string isn't a base-10 number at all,
/// and `Ok(None)` if it's a number outside of the bounds.
pub(crate) fn parse_digital_value(
    input: &str,
    min: FieldValueType,
    max: FieldValueType,
) -> Result<Option<FieldValueType>, ParseIntError> {
    let value = input.parse::<FieldValueType>()?;
    if value < min || value > max {
        Ok(None)
    } else {
        Ok(Some(value))
    }
}

/// Looks up day of week by its full or abbreviated English name, case-insensitively.
pub(crate) fn weekday_by_name(input: &str) -> Option<Weekday> {
    let input = input.to_lowercase();
    DAYS_OF_WEEK
        .iter()
        .find(|(name, _)| *name == input)
        .map(|(_, weekday)| *weekday)
}

/// Looks up month by its full or abbreviated English name, case-insensitively.
pub(crate) fn month_by_name(input: &str) -> Option<Month> {
    let input = input.to_lowercase();
    MONTHS.iter().find(|(name, _)| *name == input).map(|(_, month)| *month)
}

/// Ordinal of the named day of week, Sunday is `0`.
pub(crate) fn weekday_ordinal(input: &str) -> Option<FieldValueType> {
    weekday_by_name(input).map(|weekday| weekday.num_days_from_sunday() as FieldValueType)
}

/// Ordinal of the named month, January is `1`.
pub(crate) fn month_ordinal(input: &str) -> Option<FieldValueType> {
    month_by_name(input).map(|month| month.number_from_month() as FieldValueType)
}
