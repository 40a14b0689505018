//! Publication date resolution
//!
//! A `<PubDate>` is either structured (`Year`, then `Month` and optional
//! `Day`, or a `Season`) or a free-text `MedlineDate` such as
//! `1998 Dec-1999 Jan` or `2000 Spring`. The functions here read the
//! structured parts first and fall back to picking apart the MedlineDate.

use pubmed_parser::pubmed::PubDate;

use crate::non_empty;

/// Upper-case month abbreviations in calendar order
pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

const MONTH_NAMES: [&str; 12] = [
    "JANUARY",
    "FEBRUARY",
    "MARCH",
    "APRIL",
    "MAY",
    "JUNE",
    "JULY",
    "AUGUST",
    "SEPTEMBER",
    "OCTOBER",
    "NOVEMBER",
    "DECEMBER",
];

pub fn month_abbreviations() -> &'static [&'static str] {
    &MONTH_ABBREVIATIONS
}

/// Human-readable form of a `<PubDate>`
///
/// The MedlineDate verbatim when present; otherwise the present parts in
/// document order (Year, Season, Month, Day) separated by single spaces.
pub fn format_pub_date(pub_date: &PubDate) -> String {
    if let Some(medline_date) = non_empty(pub_date.medline_date.as_deref()) {
        return medline_date.to_string();
    }

    [
        &pub_date.year,
        &pub_date.season,
        &pub_date.month,
        &pub_date.day,
    ]
    .into_iter()
    .filter_map(|part| non_empty(part.as_deref()))
    .collect::<Vec<_>>()
    .join(" ")
}

/// Publication year
///
/// From a MedlineDate only the leading number is used, and only when it
/// lies strictly between 1900 and 2050.
pub fn year(pub_date: &PubDate) -> Option<i32> {
    if let Some(year) = non_empty(pub_date.year.as_deref()) {
        return year.parse().ok();
    }

    let first = medline_tokens(pub_date).next()?;
    let year: i32 = leading_digits(first).parse().ok()?;
    (1900 < year && year < 2050).then_some(year)
}

/// Publication month, 1-based
pub fn month(pub_date: &PubDate) -> Option<u32> {
    if let Some(month) = non_empty(pub_date.month.as_deref()) {
        return month_number(month);
    }
    medline_tokens(pub_date).nth(1).and_then(month_number)
}

/// Publication day of month; zero and out-of-range values are absent
pub fn day(pub_date: &PubDate) -> Option<u32> {
    let day: u32 = match non_empty(pub_date.day.as_deref()) {
        Some(day) => day.parse().ok()?,
        None => {
            let token = medline_tokens(pub_date).nth(2)?;
            let until_range = token.split('-').next().unwrap_or(token);
            until_range.trim().parse().ok()?
        }
    };
    (1..=31).contains(&day).then_some(day)
}

/// `YYYY-MM-DD`, with month and day defaulting to `01`
///
/// A day past the end of its month (e.g., Feb 31) also falls back to `01`.
pub fn xsd_date(pub_date: &PubDate) -> Option<String> {
    let year = year(pub_date)?;
    let month = month(pub_date).unwrap_or(1);
    let day = day(pub_date)
        .filter(|&d| d <= days_in_month(year, month))
        .unwrap_or(1);
    Some(format!("{year:04}-{month:02}-{day:02}"))
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if year % 4 == 0 && (year % 100 != 0 || year % 400 == 0) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

fn medline_tokens(pub_date: &PubDate) -> impl Iterator<Item = &str> {
    non_empty(pub_date.medline_date.as_deref())
        .into_iter()
        .flat_map(str::split_whitespace)
}

fn leading_digits(token: &str) -> &str {
    let end = token
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(token.len());
    &token[..end]
}

/// `Feb`, `FEBRUARY`, `Feb-Mar` and `02` all resolve to 2
///
/// Only the part before a `-` range separator is read, and it must be a
/// three-letter abbreviation or a full month name.
fn month_number(token: &str) -> Option<u32> {
    let token = token.trim();
    let digits = leading_digits(token);
    if !digits.is_empty() {
        let number: u32 = digits.parse().ok()?;
        return (1..=12).contains(&number).then_some(number);
    }

    let word = token
        .split('-')
        .next()
        .unwrap_or(token)
        .trim()
        .to_ascii_uppercase();
    MONTH_ABBREVIATIONS
        .iter()
        .zip(MONTH_NAMES)
        .position(|(abbreviation, name)| word == *abbreviation || word == name)
        .map(|index| index as u32 + 1)
}
