// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Times of day.
//!
//! A [`Time`] is hours, minutes and (fractional) seconds past midnight plus a
//! GMT flag. Equality is tolerant: two times are equal when their
//! seconds-since-midnight differ by at most the [`EvalContext`] epsilon.
//! Strict ordering is not widened by the tolerance.

use crate::calendar::{SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use crate::context::EvalContext;
use crate::error::{Error, Result};
use crate::value::{format_significant, CalendarValue};
use chrono::NaiveTime;
use std::fmt;
use std::str::FromStr;

/// A wall-clock time of day.
///
/// Invariants: `0 <= hours <= 23`, `0 <= minutes <= 59`,
/// `0 <= seconds < 60`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Time {
    hours: i32,
    minutes: i32,
    seconds: f64,
    gmt: bool,
}

impl Time {
    /// Midnight, local time.
    pub const MIDNIGHT: Time = Time {
        hours: 0,
        minutes: 0,
        seconds: 0.0,
        gmt: false,
    };

    /// Build a local time.
    ///
    /// ```
    /// use datesel::Time;
    ///
    /// let t = Time::new(23, 59, 59.0).unwrap();
    /// assert_eq!(t.seconds_since_midnight(), 86_399.0);
    /// assert!(Time::new(24, 0, 0.0).is_err());
    /// ```
    pub fn new(hours: i32, minutes: i32, seconds: f64) -> Result<Self> {
        Self::with_gmt(hours, minutes, seconds, false)
    }

    /// Build a time with an explicit GMT flag.
    pub fn with_gmt(hours: i32, minutes: i32, seconds: f64, gmt: bool) -> Result<Self> {
        if !(0..=23).contains(&hours) {
            return Err(Error::MalformedTime(format!("hour {hours} is out of range")));
        }
        if !(0..=59).contains(&minutes) {
            return Err(Error::MalformedTime(format!(
                "minute {minutes} is out of range"
            )));
        }
        if !(0.0..60.0).contains(&seconds) {
            return Err(Error::MalformedTime(format!(
                "second {seconds} is out of range"
            )));
        }
        Ok(Self {
            hours,
            minutes,
            seconds,
            gmt,
        })
    }

    /// Parse `hh`, `hh:mm` or `hh:mm:ss[.ffffff]`, optionally followed by a
    /// `GMT` or `UTC` token in any case.
    ///
    /// ```
    /// use datesel::Time;
    ///
    /// let t = Time::parse("10:30:15.5 gmt").unwrap();
    /// assert_eq!((t.hours(), t.minutes(), t.seconds()), (10, 30, 15.5));
    /// assert!(t.is_gmt());
    ///
    /// assert!(Time::parse("23:59:60").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        let mut tokens = input.split_whitespace();
        let clock = tokens
            .next()
            .ok_or_else(|| Error::MalformedTime("empty time".to_string()))?;
        let gmt = match tokens.next() {
            None => false,
            Some(zone) if zone.eq_ignore_ascii_case("gmt") || zone.eq_ignore_ascii_case("utc") => {
                true
            }
            Some(zone) => {
                return Err(Error::MalformedTime(format!(
                    "unknown zone '{zone}' in '{input}'; only GMT or UTC is accepted"
                )))
            }
        };
        if tokens.next().is_some() {
            return Err(Error::MalformedTime(format!(
                "trailing text after the zone in '{input}'"
            )));
        }

        let fields: Vec<&str> = clock.split(':').collect();
        let (hours, minutes, seconds) = match fields.as_slice() {
            [h] => (parse_whole(h, input)?, 0, 0.0),
            [h, m] => (parse_whole(h, input)?, parse_whole(m, input)?, 0.0),
            [h, m, s] => (
                parse_whole(h, input)?,
                parse_whole(m, input)?,
                parse_seconds(s, input)?,
            ),
            _ => {
                return Err(Error::MalformedTime(format!(
                    "'{input}' has too many ':' separators"
                )))
            }
        };
        Self::with_gmt(hours, minutes, seconds, gmt)
    }

    // ── accessors ─────────────────────────────────────────────────────

    #[inline]
    pub const fn hours(&self) -> i32 {
        self.hours
    }

    #[inline]
    pub const fn minutes(&self) -> i32 {
        self.minutes
    }

    #[inline]
    pub const fn seconds(&self) -> f64 {
        self.seconds
    }

    #[inline]
    pub const fn is_gmt(&self) -> bool {
        self.gmt
    }

    #[inline]
    pub fn seconds_since_midnight(&self) -> f64 {
        self.hours as f64 * SECONDS_PER_HOUR + self.minutes as f64 * SECONDS_PER_MINUTE + self.seconds
    }

    /// Elapsed fraction of the day, in `[0, 1)`.
    #[inline]
    pub fn fraction(&self) -> f64 {
        self.seconds_since_midnight() / SECONDS_PER_DAY
    }

    /// Convert to a `chrono::NaiveTime`, keeping nanosecond precision.
    pub fn to_naive_time(&self) -> Option<NaiveTime> {
        let whole = self.seconds.trunc();
        let nanos = ((self.seconds - whole) * 1e9).round().min(999_999_999.0);
        NaiveTime::from_hms_nano_opt(
            self.hours as u32,
            self.minutes as u32,
            whole as u32,
            nanos as u32,
        )
    }

    // ── formatting ────────────────────────────────────────────────────

    /// Render as `hh:mm:ss`, with ` GMT` appended when `gmt` is set.
    ///
    /// Seconds keep up to six significant digits and their whole part is
    /// padded to two digits. Seconds that would round to 60 print as
    /// `59.9999`.
    ///
    /// ```
    /// use datesel::Time;
    ///
    /// let t = Time::new(7, 5, 3.0).unwrap();
    /// assert_eq!(t.get(false), "07:05:03");
    /// assert_eq!(t.get(true), "07:05:03 GMT");
    /// assert_eq!(Time::new(7, 5, 3.25).unwrap().get(false), "07:05:03.25");
    /// ```
    pub fn get(&self, gmt: bool) -> String {
        let seconds = match format_significant(self.seconds, 6) {
            // Below 1e-5 the text switches to exponent notation.
            text if text.contains('e') => "00".to_string(),
            text if text.parse::<f64>().is_ok_and(|s| s >= 60.0) => "59.9999".to_string(),
            text if text.find('.').unwrap_or(text.len()) < 2 => format!("0{text}"),
            text => text,
        };
        let mut text = format!("{:02}:{:02}:{}", self.hours, self.minutes, seconds);
        if gmt {
            text.push_str(" GMT");
        }
        text
    }

    // ── comparison ────────────────────────────────────────────────────

    /// `true` when the two times are within `ctx.epsilon()` seconds.
    #[inline]
    pub fn eq_within(&self, other: &Self, ctx: &EvalContext) -> bool {
        (self.seconds_since_midnight() - other.seconds_since_midnight()).abs() <= ctx.epsilon()
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::MIDNIGHT
    }
}

impl FromStr for Time {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        Time::parse(input)
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.get(self.gmt))
    }
}

impl CalendarValue for Time {
    const KIND: &'static str = "time";

    fn parse(input: &str) -> Result<Self> {
        input.parse()
    }

    #[inline]
    fn eq_in(&self, other: &Self, ctx: &EvalContext) -> bool {
        self.eq_within(other, ctx)
    }

    #[inline]
    fn lt_in(&self, other: &Self, _ctx: &EvalContext) -> bool {
        self.seconds_since_midnight() < other.seconds_since_midnight()
    }

    #[inline]
    fn gt_in(&self, other: &Self, _ctx: &EvalContext) -> bool {
        self.seconds_since_midnight() > other.seconds_since_midnight()
    }
}

fn parse_whole(field: &str, whole: &str) -> Result<i32> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::MalformedTime(format!(
            "'{field}' in '{whole}' is not a whole number"
        )));
    }
    field
        .parse()
        .map_err(|_| Error::MalformedTime(format!("'{field}' in '{whole}' is too large")))
}

fn parse_seconds(field: &str, whole: &str) -> Result<f64> {
    let numeric = !field.is_empty()
        && field.bytes().all(|b| b.is_ascii_digit() || b == b'.')
        && field.bytes().filter(|&b| b == b'.').count() <= 1;
    if !numeric {
        return Err(Error::MalformedTime(format!(
            "'{field}' in '{whole}' is not a number of seconds"
        )));
    }
    field
        .parse()
        .map_err(|_| Error::MalformedTime(format!("'{field}' in '{whole}' is not a number")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_clock() {
        let t = Time::parse("23:59:59").unwrap();
        assert_eq!((t.hours(), t.minutes(), t.seconds()), (23, 59, 59.0));
        assert!(!t.is_gmt());
    }

    #[test]
    fn test_parse_partial_clock() {
        let t = Time::parse("7").unwrap();
        assert_eq!((t.hours(), t.minutes(), t.seconds()), (7, 0, 0.0));
        let t = Time::parse("07:45").unwrap();
        assert_eq!((t.hours(), t.minutes(), t.seconds()), (7, 45, 0.0));
    }

    #[test]
    fn test_parse_zone_token() {
        assert!(Time::parse("12:00:00 GMT").unwrap().is_gmt());
        assert!(Time::parse("12:00:00 utc").unwrap().is_gmt());
        assert!(Time::parse("12:00:00 Gmt").unwrap().is_gmt());
        assert!(Time::parse("12:00:00 PST").is_err());
        assert!(Time::parse("12:00:00 GMT extra").is_err());
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        for bad in ["23:59:60", "24:00:00", "12:60", "-1:00", "", "1:2:3:4", "aa:bb", "12:30:1e1"] {
            assert!(
                matches!(Time::parse(bad), Err(Error::MalformedTime(_))),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn test_epsilon_equality() {
        let a = Time::new(10, 30, 15.0000001).unwrap();
        let b = Time::new(10, 30, 15.0).unwrap();
        assert!(a.eq_in(&b, &EvalContext::default()));
        assert!(!a.eq_in(&b, &EvalContext::with_epsilon(1e-9)));
        assert!(a.ne_in(&b, &EvalContext::with_epsilon(1e-9)));
    }

    #[test]
    fn test_strict_ordering_is_not_widened() {
        let ctx = EvalContext::default();
        let a = Time::new(10, 30, 15.0000001).unwrap();
        let b = Time::new(10, 30, 15.0).unwrap();
        // Equal within tolerance, yet still strictly greater.
        assert!(a.gt_in(&b, &ctx));
        assert!(b.lt_in(&a, &ctx));
        assert!(a.le_in(&b, &ctx));
        assert!(a.ge_in(&b, &ctx));
    }

    #[test]
    fn test_get_padding() {
        assert_eq!(Time::new(0, 0, 0.0).unwrap().get(false), "00:00:00");
        assert_eq!(Time::new(9, 5, 7.5).unwrap().get(true), "09:05:07.5 GMT");
        assert_eq!(Time::new(23, 59, 59.1234567).unwrap().get(false), "23:59:59.1235");
        assert_eq!(Time::parse("12:00:00 UTC").unwrap().to_string(), "12:00:00 GMT");
        assert_eq!(Time::new(0, 0, 0.25).unwrap().get(false), "00:00:00.25");
        assert_eq!(Time::new(0, 0, 0.000001).unwrap().get(false), "00:00:00");
    }

    #[test]
    fn test_get_never_prints_sixty_seconds() {
        let t = Time::new(23, 59, 59.9999999).unwrap();
        assert_eq!(t.get(false), "23:59:59.9999");
        let reparsed = Time::parse(&t.get(false)).unwrap();
        assert!((reparsed.seconds() - 59.9999).abs() < 1e-9);
    }

    #[test]
    fn test_fraction_and_chrono() {
        let noon = Time::new(12, 0, 0.0).unwrap();
        assert_eq!(noon.fraction(), 0.5);
        assert_eq!(noon.to_naive_time(), NaiveTime::from_hms_opt(12, 0, 0));
        assert_eq!(Time::default(), Time::MIDNIGHT);
    }
}
