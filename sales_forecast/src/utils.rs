//! Utility functions for the sales_forecast crate

use crate::error::{ForecastError, Result};
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

const MILLIS_PER_WEEK: i64 = 1000 * 60 * 60 * 24 * 7;

/// Format a number with two decimals
pub fn format_number(value: f64) -> String {
    format!("{:.2}", value)
}

/// Parse a user-supplied SMA period, rejecting values below `min`
pub fn parse_period(input: &str, min: usize) -> Result<usize> {
    let period: usize = input.trim().parse()?;
    if period < min.max(1) {
        return Err(ForecastError::InvalidParameter(format!(
            "Period must be at least {}, got {}",
            min.max(1),
            period
        )));
    }
    Ok(period)
}

/// Business-calendar week number of a moment.
///
/// Weeks are counted in whole seven-day blocks from January 1st at midnight,
/// rounded up, so the first instant after midnight is already week 1.
pub fn current_week(now: NaiveDateTime) -> u32 {
    let start = NaiveDate::from_ymd_opt(now.year(), 1, 1).and_then(|d| d.and_hms_opt(0, 0, 0));

    let Some(start) = start else {
        return 1;
    };

    let elapsed = (now - start).num_milliseconds();
    let week = (elapsed + MILLIS_PER_WEEK - 1).div_euclid(MILLIS_PER_WEEK);
    week.max(1) as u32
}

/// Compare display names the way a person would sort them.
///
/// Base letters compare first, ignoring accents and case. Accents break
/// ties next (unaccented first), then case (lowercase first).
pub fn compare_names(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| accented_letters(a).cmp(accented_letters(b)))
        .then_with(|| b.cmp(a))
}

fn base_letters(name: &str) -> impl Iterator<Item = char> + '_ {
    accented_letters(name).filter(|c| !is_combining_mark(*c))
}

fn accented_letters(name: &str) -> impl Iterator<Item = char> + '_ {
    name.nfd().flat_map(char::to_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn at(date: (i32, u32, u32), time: (u32, u32, u32)) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(date.0, date.1, date.2)
            .unwrap()
            .and_time(NaiveTime::from_hms_opt(time.0, time.1, time.2).unwrap())
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(89.666666), "89.67");
        assert_eq!(format_number(0.0), "0.00");
    }

    #[test]
    fn test_current_week_boundaries() {
        assert_eq!(current_week(at((2025, 1, 1), (0, 0, 0))), 1);
        assert_eq!(current_week(at((2025, 1, 1), (12, 0, 0))), 1);
        assert_eq!(current_week(at((2025, 1, 8), (0, 0, 0))), 1);
        assert_eq!(current_week(at((2025, 1, 8), (0, 0, 1))), 2);
        assert_eq!(current_week(at((2025, 12, 31), (23, 0, 0))), 53);
    }

    #[test]
    fn test_compare_names_ignores_case() {
        assert_eq!(compare_names("apple", "Banana"), Ordering::Less);
        assert_eq!(compare_names("Cat", "bat"), Ordering::Greater);
        assert_eq!(compare_names("same", "same"), Ordering::Equal);
    }

    #[test]
    fn test_compare_names_lowercase_first_on_tie() {
        assert_eq!(compare_names("a", "A"), Ordering::Less);
    }

    #[test]
    fn test_compare_names_ignores_accents() {
        let mut names = vec!["Fudge", "Éclair", "Eclair", "éclair"];
        names.sort_by(|a, b| compare_names(a, b));

        assert_eq!(names, vec!["Eclair", "éclair", "Éclair", "Fudge"]);
        assert_eq!(compare_names("Ñame", "Nuez"), Ordering::Less);
    }
}
