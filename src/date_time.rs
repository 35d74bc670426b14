// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Composite date-and-time values.
//!
//! - [`DateTime`]: a [`Date`] paired with a [`Time`], ordered date first.
//! - [`DecimalYear`]: the same pair, rendered as `year + fraction_of_year`.
//!
//! Both accept the combined literal `date:time` (split at the first `:`) or
//! a decimal year `yyyy.fraction`.

use crate::calendar::{days_in_year, days_to_month_day};
use crate::context::EvalContext;
use crate::date::{resolve_decimal_year, Date, DateFormat};
use crate::error::Result;
use crate::time::Time;
use crate::value::{format_significant, CalendarValue};
use qtty::{Day, Days, Seconds};
use std::fmt;
use std::str::FromStr;

// ═══════════════════════════════════════════════════════════════════════════
// DateTime
// ═══════════════════════════════════════════════════════════════════════════

/// A calendar day and a time of day.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DateTime {
    date: Date,
    time: Time,
}

impl DateTime {
    #[inline]
    pub const fn new(date: Date, time: Time) -> Self {
        Self { date, time }
    }

    /// Build from calendar components.
    pub fn from_ymd_hms(
        year: i32,
        month: i32,
        day: i32,
        hours: i32,
        minutes: i32,
        seconds: f64,
    ) -> Result<Self> {
        Ok(Self::new(
            Date::from_ymd(year, month, day)?,
            Time::new(hours, minutes, seconds)?,
        ))
    }

    /// Build from a year, a day-of-year and a time of day.
    pub fn from_yd_hms(
        year: i32,
        day_of_year: i32,
        hours: i32,
        minutes: i32,
        seconds: f64,
    ) -> Result<Self> {
        Ok(Self::new(
            Date::from_yd(year, day_of_year)?,
            Time::new(hours, minutes, seconds)?,
        ))
    }

    /// Parse `date:time`, `date` (midnight) or `yyyy.fraction`.
    ///
    /// ```
    /// use datesel::DateTime;
    ///
    /// let dt = DateTime::parse("2013/2/14:10:30:00").unwrap();
    /// assert_eq!(dt.date().day_of_year(), 45);
    /// assert_eq!(dt.time().hours(), 10);
    ///
    /// let noon = DateTime::parse("2010.5").unwrap();
    /// assert_eq!(noon.to_string(), "2010/7/2:12:00:00");
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        let text = input.trim();
        if text.contains('.') && !text.contains(':') {
            let parts = resolve_decimal_year(text)?;
            let (month, day) = days_to_month_day(parts.year, parts.day_of_year);
            let date = Date::with_format(parts.year, month, day, DateFormat::Decimal)?;
            let time = Time::new(parts.hours, parts.minutes, parts.seconds as f64)?;
            return Ok(Self::new(date, time));
        }
        match text.split_once(':') {
            Some((date, time)) => Ok(Self::new(Date::parse(date)?, Time::parse(time)?)),
            None => Ok(Self::new(Date::parse(text)?, Time::MIDNIGHT)),
        }
    }

    #[inline]
    pub const fn date(&self) -> &Date {
        &self.date
    }

    #[inline]
    pub const fn time(&self) -> &Time {
        &self.time
    }

    /// Julian day number plus the elapsed fraction of the day.
    ///
    /// ```
    /// use datesel::DateTime;
    /// use qtty::Days;
    ///
    /// let dt = DateTime::from_ymd_hms(2000, 1, 1, 6, 0, 0.0).unwrap();
    /// assert!((dt.julian_day() - Days::new(2_451_545.25)).abs() < Days::new(1e-9));
    /// ```
    pub fn julian_day(&self) -> Days {
        Days::new(self.date.julian_day() as f64)
            + Seconds::new(self.time.seconds_since_midnight()).to::<Day>()
    }

    /// `year + (day_of_year - 1 + time.fraction()) / days_in_year`.
    pub fn decimal_year(&self) -> f64 {
        let year = self.date.year();
        let elapsed = (self.date.day_of_year() - 1) as f64 + self.time.fraction();
        year as f64 + elapsed / days_in_year(year) as f64
    }

    /// Render as `date:time` with the date in `format`, or as a decimal year
    /// for [`DateFormat::Decimal`].
    ///
    /// ```
    /// use datesel::{DateFormat, DateTime};
    ///
    /// let dt = DateTime::from_ymd_hms(2013, 2, 14, 9, 5, 0.0).unwrap();
    /// assert_eq!(dt.get(DateFormat::YMD, false).unwrap(), "2013/2/14:09:05:00");
    /// assert_eq!(dt.get(DateFormat::YD, true).unwrap(), "2013/45:09:05:00 GMT");
    /// ```
    pub fn get(&self, format: DateFormat, gmt: bool) -> Result<String> {
        match format {
            DateFormat::Decimal => Ok(format_significant(self.decimal_year(), 14)),
            _ => Ok(format!("{}:{}", self.date.get(format)?, self.time.get(gmt))),
        }
    }

    /// POSIX timestamp, treating the value as UTC.
    pub fn unix_time(&self) -> Option<i64> {
        let date = self.date.to_naive_date()?;
        let time = self.time.to_naive_time()?;
        Some(date.and_time(time).and_utc().timestamp())
    }
}

impl FromStr for DateTime {
    type Err = crate::Error;

    fn from_str(input: &str) -> Result<Self> {
        DateTime::parse(input)
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.date, self.time)
    }
}

impl CalendarValue for DateTime {
    const KIND: &'static str = "date-time";

    fn parse(input: &str) -> Result<Self> {
        input.parse()
    }

    #[inline]
    fn eq_in(&self, other: &Self, ctx: &EvalContext) -> bool {
        self.date.eq_in(&other.date, ctx) && self.time.eq_in(&other.time, ctx)
    }

    #[inline]
    fn lt_in(&self, other: &Self, ctx: &EvalContext) -> bool {
        self.date.lt_in(&other.date, ctx)
            || (self.date.eq_in(&other.date, ctx) && self.time.lt_in(&other.time, ctx))
    }

    #[inline]
    fn gt_in(&self, other: &Self, ctx: &EvalContext) -> bool {
        self.date.gt_in(&other.date, ctx)
            || (self.date.eq_in(&other.date, ctx) && self.time.gt_in(&other.time, ctx))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// DecimalYear
// ═══════════════════════════════════════════════════════════════════════════

/// A [`DateTime`] whose textual form is a decimal year.
///
/// ```
/// use datesel::DecimalYear;
///
/// let value = DecimalYear::parse("2010.5").unwrap();
/// assert_eq!(value.get(), "2010.5");
/// assert_eq!(value.fraction(), 0.5);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DecimalYear(DateTime);

impl DecimalYear {
    #[inline]
    pub const fn new(date: Date, time: Time) -> Self {
        Self(DateTime::new(date, time))
    }

    pub fn parse(input: &str) -> Result<Self> {
        DateTime::parse(input).map(Self)
    }

    #[inline]
    pub const fn date(&self) -> &Date {
        self.0.date()
    }

    #[inline]
    pub const fn time(&self) -> &Time {
        self.0.time()
    }

    /// Elapsed fraction of the year, in `[0, 1)`.
    pub fn fraction(&self) -> f64 {
        let date = self.0.date();
        ((date.day_of_year() - 1) as f64 + self.0.time().fraction())
            / days_in_year(date.year()) as f64
    }

    /// `year + fraction()` with up to 14 significant digits.
    pub fn get(&self) -> String {
        format_significant(self.0.date().year() as f64 + self.fraction(), 14)
    }

    #[inline]
    pub const fn into_date_time(self) -> DateTime {
        self.0
    }
}

impl From<DateTime> for DecimalYear {
    fn from(value: DateTime) -> Self {
        Self(value)
    }
}

impl FromStr for DecimalYear {
    type Err = crate::Error;

    fn from_str(input: &str) -> Result<Self> {
        DecimalYear::parse(input)
    }
}

impl fmt::Display for DecimalYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.get())
    }
}

impl CalendarValue for DecimalYear {
    const KIND: &'static str = "decimal year";

    fn parse(input: &str) -> Result<Self> {
        input.parse()
    }

    #[inline]
    fn eq_in(&self, other: &Self, ctx: &EvalContext) -> bool {
        self.0.eq_in(&other.0, ctx)
    }

    #[inline]
    fn lt_in(&self, other: &Self, ctx: &EvalContext) -> bool {
        self.0.lt_in(&other.0, ctx)
    }

    #[inline]
    fn gt_in(&self, other: &Self, ctx: &EvalContext) -> bool {
        self.0.gt_in(&other.0, ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn ctx() -> EvalContext {
        EvalContext::default()
    }

    #[test]
    fn test_parse_combined() {
        let dt = DateTime::parse("2013-02-14:23:59:59 GMT").unwrap();
        assert_eq!((dt.date().month(), dt.date().day()), (2, 14));
        assert_eq!(dt.time().seconds(), 59.0);
        assert!(dt.time().is_gmt());

        let dt = DateTime::parse("2013/045:06").unwrap();
        assert_eq!(dt.date().format(), DateFormat::YD);
        assert_eq!(dt.time().hours(), 6);
    }

    #[test]
    fn test_parse_date_only_is_midnight() {
        let dt = DateTime::parse("1998/3/4").unwrap();
        assert_eq!(*dt.time(), Time::MIDNIGHT);
    }

    #[test]
    fn test_parse_fractional() {
        let dt = DateTime::parse("2010.5").unwrap();
        assert_eq!(dt.date().format(), DateFormat::Decimal);
        assert_eq!(dt.date().day_of_year(), 183);
        assert_eq!((dt.time().hours(), dt.time().minutes()), (12, 0));
        assert_eq!(dt.time().seconds(), 0.0);
    }

    #[test]
    fn test_parse_errors_propagate() {
        assert!(matches!(
            DateTime::parse("2013/2/30:10:00"),
            Err(Error::MalformedDate(_))
        ));
        assert!(matches!(
            DateTime::parse("2013/2/3:25:00"),
            Err(Error::MalformedTime(_))
        ));
    }

    #[test]
    fn test_julian_day_adds_day_fraction() {
        let dt = DateTime::from_ymd_hms(2000, 1, 1, 12, 0, 0.0).unwrap();
        assert!((dt.julian_day() - Days::new(2_451_545.5)).abs() < Days::new(1e-9));
    }

    #[test]
    fn test_lexicographic_ordering() {
        let morning = DateTime::parse("2010/6/1:08:00").unwrap();
        let evening = DateTime::parse("2010/6/1:20:00").unwrap();
        let next_morning = DateTime::parse("2010/6/2:01:00").unwrap();

        assert!(morning.lt_in(&evening, &ctx()));
        assert!(evening.lt_in(&next_morning, &ctx()));
        assert!(next_morning.gt_in(&morning, &ctx()));
        assert!(morning.le_in(&morning, &ctx()));
        assert!(!evening.le_in(&morning, &ctx()));
    }

    #[test]
    fn test_month_only_date_composes() {
        let month_noon = DateTime::parse("2020-03:12:00").unwrap();
        let inside = DateTime::parse("2020/3/20:12:00").unwrap();
        let inside_later = DateTime::parse("2020/3/20:18:00").unwrap();
        assert!(inside.eq_in(&month_noon, &ctx()));
        assert!(!inside_later.eq_in(&month_noon, &ctx()));
        assert!(inside_later.gt_in(&month_noon, &ctx()));
    }

    #[test]
    fn test_get_variants() {
        let dt = DateTime::from_yd_hms(2010, 183, 12, 0, 0.0).unwrap();
        assert_eq!(dt.get(DateFormat::Decimal, false).unwrap(), "2010.5");
        assert_eq!(dt.get(DateFormat::YMD, false).unwrap(), "2010/7/2:12:00:00");
        assert_eq!(dt.get(DateFormat::Iso8601, true).unwrap(), "2010-07-02:12:00:00 GMT");
        assert!(dt.get(DateFormat::Unknown, false).is_err());
    }

    #[test]
    fn test_unix_time() {
        let dt = DateTime::from_ymd_hms(1970, 1, 2, 0, 0, 10.0).unwrap();
        assert_eq!(dt.unix_time(), Some(86_410));
    }

    #[test]
    fn test_decimal_year_wraps_date_time() {
        let dt = DateTime::from_ymd_hms(2013, 1, 1, 0, 0, 0.0).unwrap();
        let decimal = DecimalYear::from(dt);
        assert_eq!(decimal.fraction(), 0.0);
        assert_eq!(decimal.get(), "2013");
        assert_eq!(decimal.to_string(), "2013");
        assert_eq!(decimal.into_date_time(), dt);

        let later = DecimalYear::parse("2013.25").unwrap();
        assert!(later.gt_in(&decimal, &ctx()));
        assert!(decimal.lt_in(&later, &ctx()));
    }
}
