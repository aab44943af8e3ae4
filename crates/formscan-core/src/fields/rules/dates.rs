//! Date detection: a lenient day-first parse gated by a strict literal whitelist.

use chrono::NaiveDate;
use tracing::trace;

use super::patterns::{DATE_FILLER, DATE_TOKEN};
use crate::models::types::DateFormat;

/// Detect a whitelisted date literal.
///
/// Text that parses as a date but matches none of the literal formats is
/// not a date for classification purposes.
pub fn detect_date_format(text: &str) -> Option<DateFormat> {
    let parsed = parse_lenient(text)?;

    let format = whitelisted_format(text);
    if format.is_none() {
        trace!("{:?} parses as {} but matches no date format", text, parsed);
    }
    format
}

/// First whitelisted format that reproduces `text` exactly.
pub fn whitelisted_format(text: &str) -> Option<DateFormat> {
    DateFormat::ALL.into_iter().find(|format| {
        NaiveDate::parse_from_str(text, format.as_str())
            .map(|date| date.format(format.as_str()).to_string() == text)
            .unwrap_or(false)
    })
}

/// Generic date parse biased towards day-first ordering.
///
/// Accepts three numeric parts (`25.12.2023`, `2023-12-25`, `12/25/23`) or a
/// month name with a day and/or year (`25 Dec 2023`, `December 2023`).
pub fn parse_lenient(text: &str) -> Option<NaiveDate> {
    let mut numbers: Vec<&str> = Vec::new();
    let mut month_name = None;
    let mut last_end = 0;

    for token in DATE_TOKEN.find_iter(text) {
        if !DATE_FILLER.is_match(&text[last_end..token.start()]) {
            return None;
        }
        last_end = token.end();

        let word = token.as_str();
        if word.starts_with(|c: char| c.is_ascii_digit()) {
            numbers.push(word);
        } else if let Some(month) = month_from_name(word) {
            if month_name.replace(month).is_some() {
                return None;
            }
        } else if !is_ordinal_suffix(word) {
            return None;
        }
    }
    if !DATE_FILLER.is_match(&text[last_end..]) {
        return None;
    }

    let values: Vec<u32> = numbers
        .iter()
        .map(|n| n.parse().ok())
        .collect::<Option<Vec<_>>>()?;

    match (month_name, values.as_slice()) {
        (Some(month), [single]) if numbers[0].len() == 4 => NaiveDate::from_ymd_opt(*single as i32, month, 1),
        (Some(month), [day]) => NaiveDate::from_ymd_opt(2000, month, *day),
        (Some(month), [a, b]) => {
            if numbers[0].len() == 4 || *a > 31 {
                NaiveDate::from_ymd_opt(parse_year(numbers[0]), month, *b)
            } else {
                NaiveDate::from_ymd_opt(parse_year(numbers[1]), month, *a)
            }
        }
        (None, [a, b, c]) => {
            if numbers[0].len() == 4 || *a > 31 {
                let year = parse_year(numbers[0]);
                NaiveDate::from_ymd_opt(year, *b, *c).or_else(|| NaiveDate::from_ymd_opt(year, *c, *b))
            } else {
                let year = parse_year(numbers[2]);
                NaiveDate::from_ymd_opt(year, *b, *a).or_else(|| NaiveDate::from_ymd_opt(year, *a, *b))
            }
        }
        _ => None,
    }
}

fn parse_year(s: &str) -> i32 {
    let year: i32 = s.parse().unwrap_or(0);
    if s.len() <= 2 {
        // Two-digit year: assume 2000s for 00-50, 1900s for 51-99
        if year <= 50 { 2000 + year } else { 1900 + year }
    } else {
        year
    }
}

fn month_from_name(word: &str) -> Option<u32> {
    const MONTHS: [&str; 12] = [
        "january", "february", "march", "april", "may", "june", "july", "august", "september",
        "october", "november", "december",
    ];

    let word = word.to_ascii_lowercase();
    if word.len() < 3 {
        return None;
    }
    MONTHS
        .iter()
        .position(|m| m.starts_with(word.as_str()))
        .map(|idx| idx as u32 + 1)
}

fn is_ordinal_suffix(word: &str) -> bool {
    matches!(word.to_ascii_lowercase().as_str(), "st" | "nd" | "rd" | "th")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn test_lenient_day_first() {
        assert_eq!(parse_lenient("25.12.2023"), date(2023, 12, 25));
        assert_eq!(parse_lenient("01.02.2023"), date(2023, 2, 1));
        assert_eq!(parse_lenient("12.25.2023"), date(2023, 12, 25));
        assert_eq!(parse_lenient("1/2/23"), date(2023, 2, 1));
    }

    #[test]
    fn test_lenient_year_first() {
        assert_eq!(parse_lenient("2023-12-25"), date(2023, 12, 25));
        assert_eq!(parse_lenient("2023.25.12"), date(2023, 12, 25));
    }

    #[test]
    fn test_lenient_month_names() {
        assert_eq!(parse_lenient("25 Dec 2023"), date(2023, 12, 25));
        assert_eq!(parse_lenient("December 25th, 2023"), date(2023, 12, 25));
        assert_eq!(parse_lenient("Sept 2023"), date(2023, 9, 1));
    }

    #[test]
    fn test_lenient_rejects_non_dates() {
        assert_eq!(parse_lenient("P101"), None);
        assert_eq!(parse_lenient("SERVICES LLC"), None);
        assert_eq!(parse_lenient("31.31.2023"), None);
        assert_eq!(parse_lenient("12:30"), None);
        assert_eq!(parse_lenient(""), None);
    }

    #[test]
    fn test_whitelist_order() {
        assert_eq!(whitelisted_format("25.12.2023"), Some(DateFormat::DayMonthYear));
        // Ambiguous text takes the first matching format
        assert_eq!(whitelisted_format("01.02.2023"), Some(DateFormat::DayMonthYear));
        assert_eq!(whitelisted_format("12.25.2023"), Some(DateFormat::MonthDayYear));
        assert_eq!(whitelisted_format("2023.12.25"), Some(DateFormat::YearMonthDay));
        assert_eq!(whitelisted_format("2023.25.12"), Some(DateFormat::YearDayMonth));
    }

    #[test]
    fn test_date_like_but_not_whitelisted() {
        assert_eq!(detect_date_format("2023-12-25"), None);
        assert_eq!(detect_date_format("25 Dec 2023"), None);
        // Unpadded parts do not reproduce the literal
        assert_eq!(detect_date_format("5.1.2023"), None);
    }
}
