// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar-day values.
//!
//! A [`Date`] remembers the [`DateFormat`] it was built from. The tag matters
//! for two things:
//!
//! - **Comparison.** A [`DateFormat::YM`] date stands for its whole month and
//!   compares as the closed span `[first day, last day]`; every other date is
//!   a single Julian day.
//! - **Formatting.** [`Date::get`] renders any of the textual forms, and the
//!   ISO form drops the day of a month-only date.
//!
//! # Literal forms
//!
//! | Literal | Meaning | Tag |
//! |---------|---------|-----|
//! | `yyyy/mm/dd` | year, month, day | `YMD` |
//! | `yyyy/ddd` | year, day-of-year | `YD` |
//! | `yyyy-mm-dd` | ISO 8601 calendar date | `YMD` |
//! | `yyyy-mm` | a whole month | `YM` |
//! | `yyyy` | January 1st | `YMD` |
//! | `yyyy.fraction` | decimal year | `Decimal` |

use crate::calendar::{
    days_in_month, days_in_year, days_to_month_day, julian_day, month_day_to_days,
    SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE,
};
use crate::context::EvalContext;
use crate::error::{Error, Result};
use crate::value::{format_significant, CalendarValue};
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════════════════════════════════════
// DateFormat
// ═══════════════════════════════════════════════════════════════════════════

/// Source or target textual form of a date.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DateFormat {
    /// `yyyy/mm/dd`
    YMD,
    /// `yyyy/ddd`
    YD,
    /// `yyyy-mm`: a whole month.
    YM,
    /// `yyyy.fraction`
    Decimal,
    /// `yyyy-mm-dd`, or `yyyy-mm` for a month-only date.
    Iso8601,
    /// Not resolved. Never carried by a constructed [`Date`].
    Unknown,
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DateFormat::YMD => "ymd",
            DateFormat::YD => "yd",
            DateFormat::YM => "ym",
            DateFormat::Decimal => "decimal",
            DateFormat::Iso8601 => "iso8601",
            DateFormat::Unknown => "unknown",
        };
        f.write_str(label)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Date
// ═══════════════════════════════════════════════════════════════════════════

/// A resolved calendar day.
///
/// Invariants, checked by every constructor: `year > 0`, `1 <= month <= 12`,
/// `1 <= day <= days_in_month(year, month)`, and the format is not
/// [`DateFormat::Unknown`]. The derived `==` is structural; use the
/// [`CalendarValue`] methods for calendar comparisons.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Date {
    julian_day: i64,
    year: i32,
    month: i32,
    day: i32,
    day_of_year: i32,
    format: DateFormat,
}

impl Date {
    // ── constructors ──────────────────────────────────────────────────

    /// Build from year, month and day; tagged [`DateFormat::YMD`].
    ///
    /// ```
    /// use datesel::Date;
    ///
    /// assert!(Date::from_ymd(2000, 2, 29).is_ok());
    /// assert!(Date::from_ymd(1900, 2, 29).is_err());
    /// ```
    pub fn from_ymd(year: i32, month: i32, day: i32) -> Result<Self> {
        Self::with_format(year, month, day, DateFormat::YMD)
    }

    /// Build from year and day-of-year; tagged [`DateFormat::YD`].
    ///
    /// ```
    /// use datesel::Date;
    ///
    /// let date = Date::from_yd(2013, 45).unwrap();
    /// assert_eq!((date.month(), date.day()), (2, 14));
    /// ```
    pub fn from_yd(year: i32, day_of_year: i32) -> Result<Self> {
        if year <= 0 {
            return Err(Error::MalformedDate(format!(
                "year {year} is not positive"
            )));
        }
        if day_of_year < 1 || day_of_year > days_in_year(year) {
            return Err(Error::MalformedDate(format!(
                "day {day_of_year} is outside year {year}"
            )));
        }
        let (month, day) = days_to_month_day(year, day_of_year);
        Self::with_format(year, month, day, DateFormat::YD)
    }

    /// Build from year, month and day with an explicit tag.
    ///
    /// Passing [`DateFormat::YM`] yields a month-only date.
    pub fn with_format(year: i32, month: i32, day: i32, format: DateFormat) -> Result<Self> {
        if format == DateFormat::Unknown {
            return Err(Error::MalformedDate(
                "a date needs a resolved format".to_string(),
            ));
        }
        if year <= 0 {
            return Err(Error::MalformedDate(format!(
                "year {year} is not positive"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::MalformedDate(format!("month {month} is out of range")));
        }
        if day < 1 || day > days_in_month(year, month) {
            return Err(Error::MalformedDate(format!(
                "{year}-{month:02} has no day {day}"
            )));
        }
        Ok(Self {
            julian_day: julian_day(year, month, day),
            year,
            month,
            day,
            day_of_year: month_day_to_days(year, month, day),
            format,
        })
    }

    /// Parse any of the literal forms listed in the [module docs](self).
    ///
    /// The form is picked from the separators, in this order: `.` (decimal
    /// year), `/`, `-`, then a bare four-digit year.
    ///
    /// ```
    /// use datesel::{Date, DateFormat};
    ///
    /// let date = Date::parse("2013/1/1").unwrap();
    /// assert_eq!((date.year(), date.month(), date.day()), (2013, 1, 1));
    /// assert_eq!(date.format(), DateFormat::YMD);
    ///
    /// assert_eq!(Date::parse("2020-03").unwrap().format(), DateFormat::YM);
    /// assert!(Date::parse("March 2020").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        let text = input.trim();
        if text.contains('.') {
            let parts = resolve_decimal_year(text)?;
            let (month, day) = days_to_month_day(parts.year, parts.day_of_year);
            Self::with_format(parts.year, month, day, DateFormat::Decimal)
        } else if text.contains('/') {
            Self::parse_slashed(text)
        } else if text.contains('-') {
            Self::parse_iso8601(text)
        } else if text.len() == 4 && text.bytes().all(|b| b.is_ascii_digit()) {
            Self::from_ymd(parse_component(text, text)?, 1, 1)
        } else {
            Err(Error::MalformedDate(format!(
                "'{text}' is not a recognised date; expected yyyy/mm/dd, yyyy/ddd, \
                 yyyy-mm-dd, yyyy-mm, yyyy or yyyy.fraction"
            )))
        }
    }

    fn parse_slashed(text: &str) -> Result<Self> {
        let fields: Vec<&str> = text.split('/').collect();
        match fields.as_slice() {
            [year, month, day] => Self::from_ymd(
                parse_component(year, text)?,
                parse_component(month, text)?,
                parse_component(day, text)?,
            ),
            // A yyyy/ddd literal carries the day-of-year where the month would be.
            [year, day_of_year] => Self::from_yd(
                parse_component(year, text)?,
                parse_component(day_of_year, text)?,
            ),
            _ => Err(Error::MalformedDate(format!(
                "'{text}' is not yyyy/mm/dd or yyyy/ddd"
            ))),
        }
    }

    fn parse_iso8601(text: &str) -> Result<Self> {
        let fields: Vec<&str> = text.split('-').collect();
        match fields.as_slice() {
            [year, month, day] => Self::from_ymd(
                parse_component(year, text)?,
                parse_component(month, text)?,
                parse_component(day, text)?,
            ),
            [year, month] => Self::with_format(
                parse_component(year, text)?,
                parse_component(month, text)?,
                1,
                DateFormat::YM,
            ),
            _ => Err(Error::MalformedDate(format!(
                "'{text}' is not yyyy-mm-dd or yyyy-mm"
            ))),
        }
    }

    // ── accessors ─────────────────────────────────────────────────────

    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    pub const fn month(&self) -> i32 {
        self.month
    }

    #[inline]
    pub const fn day(&self) -> i32 {
        self.day
    }

    /// 1-based day of the year.
    #[inline]
    pub const fn day_of_year(&self) -> i32 {
        self.day_of_year
    }

    /// Julian day number of this day (of the first day, for a month-only
    /// date parsed from `yyyy-mm`).
    #[inline]
    pub const fn julian_day(&self) -> i64 {
        self.julian_day
    }

    /// Format this date was built from.
    #[inline]
    pub const fn format(&self) -> DateFormat {
        self.format
    }

    /// 0 = Sunday, …, 6 = Saturday.
    #[inline]
    pub const fn day_of_week(&self) -> i32 {
        crate::calendar::day_of_week(self.julian_day)
    }

    /// Closed Julian-day span this value stands for in comparisons.
    pub fn span(&self) -> (i64, i64) {
        match self.format {
            DateFormat::YM => (
                julian_day(self.year, self.month, 1),
                julian_day(self.year, self.month, days_in_month(self.year, self.month)),
            ),
            DateFormat::YMD
            | DateFormat::YD
            | DateFormat::Decimal
            | DateFormat::Iso8601
            | DateFormat::Unknown => (self.julian_day, self.julian_day),
        }
    }

    /// Elapsed fraction of the year at the start of this day.
    pub fn year_fraction(&self) -> f64 {
        (self.day_of_year - 1) as f64 / days_in_year(self.year) as f64
    }

    /// `year + year_fraction()`.
    pub fn decimal_year(&self) -> f64 {
        self.year as f64 + self.year_fraction()
    }

    // ── formatting ────────────────────────────────────────────────────

    /// Render in `format`.
    ///
    /// ```
    /// use datesel::{Date, DateFormat};
    ///
    /// let date = Date::from_ymd(2013, 2, 14).unwrap();
    /// assert_eq!(date.get(DateFormat::YMD).unwrap(), "2013/2/14");
    /// assert_eq!(date.get(DateFormat::YD).unwrap(), "2013/45");
    /// assert_eq!(date.get(DateFormat::Iso8601).unwrap(), "2013-02-14");
    /// ```
    pub fn get(&self, format: DateFormat) -> Result<String> {
        self.render(format).ok_or_else(|| {
            Error::MalformedDate(format!("no textual form for the {format} format"))
        })
    }

    fn render(&self, format: DateFormat) -> Option<String> {
        let text = match format {
            DateFormat::YD => format!("{}/{}", self.year, self.day_of_year),
            DateFormat::YMD => format!("{}/{}/{}", self.year, self.month, self.day),
            DateFormat::YM => format!("{}-{:02}", self.year, self.month),
            DateFormat::Iso8601 => match self.format {
                DateFormat::YM => format!("{}-{:02}", self.year, self.month),
                _ => format!("{}-{:02}-{:02}", self.year, self.month, self.day),
            },
            DateFormat::Decimal => format_significant(self.decimal_year(), 14),
            DateFormat::Unknown => return None,
        };
        Some(text)
    }

    /// The form this date naturally prints in.
    fn natural_format(&self) -> DateFormat {
        match self.format {
            DateFormat::YD => DateFormat::YD,
            DateFormat::YM | DateFormat::Iso8601 => DateFormat::Iso8601,
            DateFormat::YMD | DateFormat::Decimal | DateFormat::Unknown => DateFormat::YMD,
        }
    }

    // ── chrono helpers ────────────────────────────────────────────────

    /// Convert to a `chrono::NaiveDate`.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month as u32, self.day as u32)
    }

    /// POSIX timestamp of 00:00:01 UTC on this day.
    pub fn unix_time(&self) -> Option<i64> {
        self.to_naive_date()?
            .and_hms_opt(0, 0, 1)
            .map(|datetime| datetime.and_utc().timestamp())
    }
}

impl TryFrom<NaiveDate> for Date {
    type Error = Error;

    fn try_from(date: NaiveDate) -> Result<Self> {
        use chrono::Datelike;
        Self::from_ymd(date.year(), date.month() as i32, date.day() as i32)
    }
}

impl FromStr for Date {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        Date::parse(input)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.render(self.natural_format()) {
            Some(text) => f.write_str(&text),
            None => Err(fmt::Error),
        }
    }
}

// ── Comparison ────────────────────────────────────────────────────────────
//
// Both operands are closed Julian-day spans. A span `a` is "equal" to `b`
// when they intersect, "less" when `a` ends before `b` starts, and
// "greater" when `a` starts after `b` ends.

impl CalendarValue for Date {
    const KIND: &'static str = "date";

    fn parse(input: &str) -> Result<Self> {
        input.parse()
    }

    #[inline]
    fn eq_in(&self, other: &Self, _ctx: &EvalContext) -> bool {
        let (a, b) = (self.span(), other.span());
        a.0 <= b.1 && b.0 <= a.1
    }

    #[inline]
    fn lt_in(&self, other: &Self, _ctx: &EvalContext) -> bool {
        self.span().1 < other.span().0
    }

    #[inline]
    fn gt_in(&self, other: &Self, _ctx: &EvalContext) -> bool {
        self.span().0 > other.span().1
    }

    #[inline]
    fn le_in(&self, other: &Self, _ctx: &EvalContext) -> bool {
        self.span().0 <= other.span().1
    }

    #[inline]
    fn ge_in(&self, other: &Self, _ctx: &EvalContext) -> bool {
        self.span().1 >= other.span().0
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Decimal-year resolution
// ═══════════════════════════════════════════════════════════════════════════

/// Calendar components recovered from a `yyyy.fraction` literal.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct YearFraction {
    pub year: i32,
    pub day_of_year: i32,
    pub hours: i32,
    pub minutes: i32,
    pub seconds: i32,
}

/// Split a decimal year into day, hour, minute and whole second.
///
/// The fraction is spread over `days_in_year × 86 400` seconds, the second
/// is rounded to the nearest integer, and any resulting overflow is carried
/// once through minute, hour, day and year.
pub(crate) fn resolve_decimal_year(text: &str) -> Result<YearFraction> {
    let value: f64 = text
        .trim()
        .parse()
        .map_err(|_| Error::MalformedDate(format!("'{text}' is not a decimal year")))?;
    if !value.is_finite() || value < 1.0 || value >= i32::MAX as f64 {
        return Err(Error::MalformedDate(format!(
            "decimal year {text} is out of range"
        )));
    }

    let mut year = value.trunc() as i32;
    let fraction = value - year as f64;
    let seconds_in_year = days_in_year(year) as f64 * SECONDS_PER_DAY;

    let day_real = seconds_in_year * fraction / SECONDS_PER_DAY + 1.0;
    let mut day_of_year = day_real as i32;

    let hour_real = (day_real - day_of_year as f64) * SECONDS_PER_DAY / SECONDS_PER_HOUR;
    let mut hours = hour_real as i32;

    let minute_real = (hour_real - hours as f64) * SECONDS_PER_HOUR / SECONDS_PER_MINUTE;
    let mut minutes = minute_real as i32;

    let second_real = (minute_real - minutes as f64) * SECONDS_PER_MINUTE;
    let mut seconds = second_real as i32;
    if second_real - seconds as f64 >= 0.5 {
        seconds += 1;
    }

    if seconds == 60 {
        seconds = 0;
        minutes += 1;
        if minutes == 60 {
            minutes = 0;
            hours += 1;
            if hours == 24 {
                hours = 0;
                day_of_year += 1;
                if day_of_year == days_in_year(year) + 1 {
                    day_of_year = 1;
                    year += 1;
                }
            }
        }
    }

    Ok(YearFraction {
        year,
        day_of_year,
        hours,
        minutes,
        seconds,
    })
}

fn parse_component(field: &str, whole: &str) -> Result<i32> {
    let field = field.trim();
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::MalformedDate(format!(
            "'{field}' in '{whole}' is not a number"
        )));
    }
    field
        .parse()
        .map_err(|_| Error::MalformedDate(format!("'{field}' in '{whole}' is too large")))
}
