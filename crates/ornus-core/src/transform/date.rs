//! API timestamp reformatting.
//!
//! Timestamps arrive as `"Fri Apr 25 10:43:41 +0000 2014"` and are stored
//! as `year-month-day` with an unpadded month and the day token as given.

use crate::error::{TransformError, TransformResult};

/// Default separator between year, month and day.
pub const DEFAULT_SEPARATOR: &str = "-";

/// English month abbreviations, January first.
pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Map a month abbreviation to its 1-based number.
pub fn month_number(abbreviation: &str) -> Option<usize> {
    MONTH_ABBREVIATIONS
        .iter()
        .position(|m| *m == abbreviation)
        .map(|index| index + 1)
}

/// Reformat `Weekday Month Day Time Offset Year` into `Year<sep>Month<sep>Day`.
pub fn format(date: &str, separator: &str) -> TransformResult<String> {
    let tokens: Vec<&str> = date.split_whitespace().collect();
    let [_, month, day, _, _, year] = tokens.as_slice() else {
        return Err(TransformError::malformed_date(
            date,
            format!("expected 6 tokens, found {}", tokens.len()),
        ));
    };

    let month = month_number(month).ok_or_else(|| {
        TransformError::malformed_date(date, format!("unknown month {:?}", month))
    })?;

    Ok([*year, month.to_string().as_str(), *day].join(separator))
}

/// [`format`] with the `-` separator.
pub fn format_default(date: &str) -> TransformResult<String> {
    format(date, DEFAULT_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_default_separator() {
        assert_eq!(
            format_default("Fri Apr 25 10:43:41 +0000 2014").unwrap(),
            "2014-4-25"
        );
    }

    #[test]
    fn test_format_custom_separator() {
        assert_eq!(
            format("Mon Jan 1 00:00:00 +0000 2020", "/").unwrap(),
            "2020/1/1"
        );
    }

    #[test]
    fn test_day_passes_through_unpadded() {
        assert_eq!(
            format_default("Tue Dec 05 23:59:59 +0000 2023").unwrap(),
            "2023-12-05"
        );
    }

    #[test]
    fn test_every_month_maps() {
        for (index, month) in MONTH_ABBREVIATIONS.iter().enumerate() {
            let input = format!("Sun {} 3 12:00:00 +0000 2019", month);
            assert_eq!(
                format_default(&input).unwrap(),
                format!("2019-{}-3", index + 1)
            );
        }
    }

    #[test]
    fn test_wrong_token_count() {
        for input in ["Apr 25 2014", "", "Fri Apr 25 10:43:41 +0000 2014 extra"] {
            assert!(matches!(
                format_default(input),
                Err(TransformError::MalformedDate { .. })
            ));
        }
    }

    #[test]
    fn test_unknown_month() {
        for input in [
            "Fri April 25 10:43:41 +0000 2014",
            "Fri apr 25 10:43:41 +0000 2014",
        ] {
            assert!(matches!(
                format_default(input),
                Err(TransformError::MalformedDate { .. })
            ));
        }
    }
}
