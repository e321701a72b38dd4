use crate::{
    field::{Field, FieldValueType},
    utils,
};

/// Fields which allow `/` step expressions over a star or a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StepField {
    /// `*/15`, `0-30/5`
    Minute,
    /// `*/6`, `0-12/4`
    Hour,
    /// `*/3`, `1-12/2`, `jan-jun/2`
    Month,
}

/// Fields which allow mnemonic names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NameField {
    /// `jan`..`dec`, `january`..`december`
    Month,
    /// `sun`..`sat`, `sunday`..`saturday`
    Week,
}

impl NameField {
    /// Returns ordinal of the name (case-insensitive): `sun` is `0`, `jan` is `1`.
    pub fn ordinal(&self, name: &str) -> Option<i64> {
        match self {
            Self::Month => utils::month_ordinal(name),
            Self::Week => utils::weekday_ordinal(name),
        }
    }
}

/// Syntactic category of a single (not comma separated) sub-expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// Doesn't belong to any category.
    Unknown,
    /// `*`
    Star,
    /// Star with a step which isn't a valid value of the field, like `*/99` for minutes.
    StarStep,
    /// Star or range with an allow-listed step divisor.
    Step(StepField),
    /// Integer outside of the field bounds.
    Digit,
    /// Integer within the field bounds.
    Value(Field),
    /// Month or day of week name.
    Name(NameField),
    /// Two values of the same field, left is strictly less than right.
    Range(Field),
    /// Two names of the same field, left is strictly less than right.
    NameRange(NameField),
}

/// Classifies single sub-expression according to the field kind.
///
/// Classification is pure: the same input always yields the same category,
/// and failure is reported as [`Category::Unknown`] rather than an error.
pub fn classify(input: &str, field: Field) -> Category {
    if input == "*" {
        return Category::Star;
    }

    if input.contains('/') {
        return classify_step(input, field);
    }

    if input.contains('-') {
        return classify_range(input, field);
    }

    if field == Field::DayOfWeek && NameField::Week.ordinal(input).is_some() {
        return Category::Name(NameField::Week);
    }

    if field == Field::Month && NameField::Month.ordinal(input).is_some() {
        return Category::Name(NameField::Month);
    }

    let (min, max) = field.min_max();
    match utils::parse_digital_value(input, min, max) {
        Ok(Some(_)) => Category::Value(field),
        Ok(None) => Category::Digit,
        Err(_) => Category::Unknown,
    }
}

/// Validates comma separated list of sub-expressions against the field rules.
#[inline]
pub fn is_field_valid(input: &str, field: Field) -> bool {
    field.is_valid(input)
}

fn classify_step(input: &str, field: Field) -> Category {
    let Some((base, divisor)) = split_pair(input, '/') else {
        return Category::Unknown;
    };

    let base_category = classify(base, field);
    let divisor_category = classify(divisor, field);

    if base_category == Category::Star && divisor_category == Category::Digit {
        return Category::StarStep;
    }

    let step_field = match field {
        Field::Minute => StepField::Minute,
        Field::Hour => StepField::Hour,
        Field::Month => StepField::Month,
        Field::DayOfMonth | Field::DayOfWeek => return Category::Unknown,
    };

    let valid_base = match base_category {
        Category::Star => true,
        Category::Range(f) => f == field,
        Category::NameRange(NameField::Month) => field == Field::Month,
        _ => false,
    };
    let valid_divisor = matches!(divisor_category, Category::Value(f) if f == field)
        || divisor_category == Category::Digit;

    if valid_base && valid_divisor && field.step_divisors().iter().any(|d| *d == divisor) {
        Category::Step(step_field)
    } else {
        Category::Unknown
    }
}

fn classify_range(input: &str, field: Field) -> Category {
    let Some((start, end)) = split_pair(input, '-') else {
        return Category::Unknown;
    };

    match (classify(start, field), classify(end, field)) {
        (Category::Value(left), Category::Value(right)) if left == right => {
            // Both sides are already known to be bounded numbers.
            match (start.parse::<FieldValueType>(), end.parse::<FieldValueType>()) {
                (Ok(start), Ok(end)) if start < end => Category::Range(left),
                _ => Category::Unknown,
            }
        }
        (Category::Name(left), Category::Name(right)) if left == right => {
            match (left.ordinal(start), left.ordinal(end)) {
                (Some(start), Some(end)) if start < end => Category::NameRange(left),
                _ => Category::Unknown,
            }
        }
        _ => Category::Unknown,
    }
}

/// Splits input into exactly two parts by the separator.
fn split_pair(input: &str, separator: char) -> Option<(&str, &str)> {
    let mut parts = input.split(separator);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(left), Some(right), None) => Some((left, right)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Field::Minute)]
    #[case(Field::Hour)]
    #[case(Field::DayOfMonth)]
    #[case(Field::Month)]
    #[case(Field::DayOfWeek)]
    fn test_star_for_every_field(#[case] field: Field) {
        assert_eq!(classify("*", field), Category::Star);
    }

    #[test]
    fn test_every_minute_value() {
        for value in 0..=59 {
            let input = value.to_string();
            assert_eq!(classify(&input, Field::Minute), Category::Value(Field::Minute));
            assert!(is_field_valid(&input, Field::Minute), "input = {input}");
        }
        for value in [60, 61, 99, 100, 1000, i64::MAX] {
            let input = value.to_string();
            assert_eq!(classify(&input, Field::Minute), Category::Digit);
            assert!(!is_field_valid(&input, Field::Minute), "input = {input}");
        }
    }

    #[rstest]
    // Numbers
    #[case("0", Field::Minute, Category::Value(Field::Minute))]
    #[case("60", Field::Minute, Category::Digit)]
    #[case("23", Field::Hour, Category::Value(Field::Hour))]
    #[case("59", Field::Hour, Category::Value(Field::Hour))]
    #[case("60", Field::Hour, Category::Digit)]
    #[case("0", Field::DayOfMonth, Category::Digit)]
    #[case("1", Field::DayOfMonth, Category::Value(Field::DayOfMonth))]
    #[case("31", Field::DayOfMonth, Category::Value(Field::DayOfMonth))]
    #[case("32", Field::DayOfMonth, Category::Digit)]
    #[case("0", Field::Month, Category::Digit)]
    #[case("12", Field::Month, Category::Value(Field::Month))]
    #[case("13", Field::Month, Category::Digit)]
    #[case("0", Field::DayOfWeek, Category::Value(Field::DayOfWeek))]
    #[case("7", Field::DayOfWeek, Category::Value(Field::DayOfWeek))]
    #[case("8", Field::DayOfWeek, Category::Digit)]
    // Garbage
    #[case("", Field::Minute, Category::Unknown)]
    #[case("", Field::DayOfWeek, Category::Unknown)]
    #[case("abc", Field::Minute, Category::Unknown)]
    #[case("1.5", Field::Minute, Category::Unknown)]
    #[case("?", Field::DayOfMonth, Category::Unknown)]
    #[case("L", Field::DayOfMonth, Category::Unknown)]
    #[case("1#2", Field::DayOfWeek, Category::Unknown)]
    #[case("-1", Field::Minute, Category::Unknown)]
    // Names
    #[case("MON", Field::DayOfWeek, Category::Name(NameField::Week))]
    #[case("monday", Field::DayOfWeek, Category::Name(NameField::Week))]
    #[case("Sun", Field::DayOfWeek, Category::Name(NameField::Week))]
    #[case("mon", Field::Month, Category::Unknown)]
    #[case("jan", Field::Month, Category::Name(NameField::Month))]
    #[case("SEPTEMBER", Field::Month, Category::Name(NameField::Month))]
    #[case("jan", Field::DayOfWeek, Category::Unknown)]
    #[case("jan", Field::Minute, Category::Unknown)]
    // Ranges
    #[case("5-10", Field::Minute, Category::Range(Field::Minute))]
    #[case("5-5", Field::Minute, Category::Unknown)]
    #[case("10-5", Field::Minute, Category::Unknown)]
    #[case("0-59", Field::Minute, Category::Range(Field::Minute))]
    #[case("0-60", Field::Minute, Category::Unknown)]
    #[case("1-2-3", Field::Minute, Category::Unknown)]
    #[case("5-", Field::Minute, Category::Unknown)]
    #[case("9-17", Field::Hour, Category::Range(Field::Hour))]
    #[case("1-31", Field::DayOfMonth, Category::Range(Field::DayOfMonth))]
    #[case("0-31", Field::DayOfMonth, Category::Unknown)]
    #[case("1-12", Field::Month, Category::Range(Field::Month))]
    #[case("1-7", Field::DayOfWeek, Category::Range(Field::DayOfWeek))]
    #[case("05-10", Field::Minute, Category::Range(Field::Minute))]
    #[case("jan-dec", Field::Month, Category::NameRange(NameField::Month))]
    #[case("JAN-Mar", Field::Month, Category::NameRange(NameField::Month))]
    #[case("mar-jan", Field::Month, Category::Unknown)]
    #[case("may-may", Field::Month, Category::Unknown)]
    #[case("jan-3", Field::Month, Category::Unknown)]
    #[case("mon-fri", Field::DayOfWeek, Category::NameRange(NameField::Week))]
    #[case("MON-FRI", Field::DayOfWeek, Category::NameRange(NameField::Week))]
    #[case("sunday-monday", Field::DayOfWeek, Category::NameRange(NameField::Week))]
    #[case("fri-mon", Field::DayOfWeek, Category::Unknown)]
    #[case("mon-fri", Field::Month, Category::Unknown)]
    // Steps
    #[case("*/5", Field::Minute, Category::Step(StepField::Minute))]
    #[case("*/7", Field::Minute, Category::Unknown)]
    #[case("*/60", Field::Minute, Category::StarStep)]
    #[case("*/0", Field::Minute, Category::Unknown)]
    #[case("0-30/15", Field::Minute, Category::Step(StepField::Minute))]
    #[case("30-0/15", Field::Minute, Category::Unknown)]
    #[case("5/5", Field::Minute, Category::Unknown)]
    #[case("*/5/5", Field::Minute, Category::Unknown)]
    #[case("*/", Field::Minute, Category::Unknown)]
    #[case("/5", Field::Minute, Category::Unknown)]
    #[case("*/8", Field::Hour, Category::Step(StepField::Hour))]
    #[case("*/5", Field::Hour, Category::Unknown)]
    #[case("8-20/4", Field::Hour, Category::Step(StepField::Hour))]
    #[case("*/70", Field::Hour, Category::StarStep)]
    #[case("*/3", Field::Month, Category::Step(StepField::Month))]
    #[case("*/5", Field::Month, Category::Unknown)]
    #[case("*/13", Field::Month, Category::StarStep)]
    #[case("1-6/2", Field::Month, Category::Step(StepField::Month))]
    #[case("jan-jun/2", Field::Month, Category::Step(StepField::Month))]
    #[case("jan/2", Field::Month, Category::Unknown)]
    #[case("*/2", Field::DayOfMonth, Category::Unknown)]
    #[case("*/32", Field::DayOfMonth, Category::StarStep)]
    #[case("*/2", Field::DayOfWeek, Category::Unknown)]
    fn test_classify(#[case] input: &str, #[case] field: Field, #[case] expected: Category) {
        assert_eq!(classify(input, field), expected, "input = {input}, field = {field:?}");
    }

    #[rstest]
    #[case(NameField::Week, "mon", Some(1))]
    #[case(NameField::Week, "MON", Some(1))]
    #[case(NameField::Week, "sunday", Some(0))]
    #[case(NameField::Week, "Sat", Some(6))]
    #[case(NameField::Week, "jan", None)]
    #[case(NameField::Month, "jan", Some(1))]
    #[case(NameField::Month, "December", Some(12))]
    #[case(NameField::Month, "sun", None)]
    fn test_name_ordinal(#[case] kind: NameField, #[case] name: &str, #[case] expected: Option<i64>) {
        assert_eq!(kind.ordinal(name), expected);
    }

    #[rstest]
    #[case("*/15", [
        Category::Step(StepField::Minute),
        Category::Unknown,
        Category::Unknown,
        Category::StarStep,
        Category::StarStep,
    ])]
    #[case("mon-fri", [
        Category::Unknown,
        Category::Unknown,
        Category::Unknown,
        Category::Unknown,
        Category::NameRange(NameField::Week),
    ])]
    #[case("12", [
        Category::Value(Field::Minute),
        Category::Value(Field::Hour),
        Category::Value(Field::DayOfMonth),
        Category::Value(Field::Month),
        Category::Digit,
    ])]
    #[case("45", [
        Category::Value(Field::Minute),
        Category::Value(Field::Hour),
        Category::Digit,
        Category::Digit,
        Category::Digit,
    ])]
    #[case("jan-jun/2", [
        Category::Unknown,
        Category::Unknown,
        Category::Unknown,
        Category::Step(StepField::Month),
        Category::Unknown,
    ])]
    #[case("1-5", [
        Category::Range(Field::Minute),
        Category::Range(Field::Hour),
        Category::Range(Field::DayOfMonth),
        Category::Range(Field::Month),
        Category::Range(Field::DayOfWeek),
    ])]
    #[case("garbage", [Category::Unknown; 5])]
    fn test_classify_across_fields(#[case] input: &str, #[case] expected: [Category; 5]) {
        for (field, expected) in Field::ALL.into_iter().zip(expected) {
            assert_eq!(classify(input, field), expected, "input = {input}, field = {field:?}");
        }
    }

    #[test]
    fn test_star_step_is_never_accepted() {
        for field in Field::ALL {
            assert!(!field.accepts(&Category::StarStep), "field = {field:?}");
            assert!(!field.accepts(&Category::Digit), "field = {field:?}");
            assert!(!field.accepts(&Category::Unknown), "field = {field:?}");
        }
    }

    #[rstest]
    #[case("a-b", Some(("a", "b")))]
    #[case("a-b-c", None)]
    #[case("a", None)]
    #[case("-", Some(("", "")))]
    #[case("10-20", Some(("10", "20")))]
    fn test_split_pair(#[case] input: &str, #[case] expected: Option<(&str, &str)>) {
        assert_eq!(split_pair(input, '-'), expected);
    }
}
