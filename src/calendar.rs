// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Proleptic Gregorian calendar kernel.
//!
//! Pure integer functions used by every value type of the crate:
//!
//! | Function | Result |
//! |----------|--------|
//! | [`is_leap`] | leap-year test |
//! | [`days_in_year`] | 365 or 366 |
//! | [`days_in_month`] | 28..=31 |
//! | [`julian_day`] | Julian day number at noon of a calendar day |
//! | [`month_day_to_days`] | day-of-year of a month/day pair |
//! | [`days_to_month_day`] | month/day pair of a day-of-year |
//! | [`day_of_week`] | 0 = Sunday .. 6 = Saturday |
//!
//! None of these validate their inputs: range checks belong to the value
//! types ([`Date`](crate::Date), [`Time`](crate::Time)). Out-of-range
//! arguments yield meaningless (but non-panicking) results.

/// Seconds in one minute.
pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// Seconds in one hour.
pub const SECONDS_PER_HOUR: f64 = 3_600.0;

/// Seconds in one civil day (leap seconds are ignored).
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Cumulative day counts at the start of each month of a common year.
const DAYS_BEFORE_MONTH: [i32; 13] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334, 365];

/// Returns whether `year` is a Gregorian leap year.
///
/// ```
/// use datesel::calendar::is_leap;
///
/// assert!(is_leap(2000));
/// assert!(!is_leap(1900));
/// assert!(is_leap(2004));
/// ```
#[inline]
pub const fn is_leap(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in `year`.
#[inline]
pub const fn days_in_year(year: i32) -> i32 {
    if is_leap(year) {
        366
    } else {
        365
    }
}

/// Number of days in `month` (1-based) of `year`.
pub const fn days_in_month(year: i32, month: i32) -> i32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Julian day number of the Gregorian calendar day `year-month-day`.
///
/// Fliegel & Van Flandern (1968) integer form; strictly increasing with the
/// calendar date, with 2000-01-01 at JD 2 451 545.
#[inline]
pub const fn julian_day(year: i32, month: i32, day: i32) -> i64 {
    let (y, m, d) = (year as i64, month as i64, day as i64);
    let a = (m - 14) / 12;
    (1461 * (y + 4800 + a)) / 4 + (367 * (m - 2 - 12 * a)) / 12
        - (3 * ((y + 4900 + a) / 100)) / 4
        + d
        - 32075
}

/// Day-of-year (1-based) of `month`/`day` in `year`.
#[inline]
pub const fn month_day_to_days(year: i32, month: i32, day: i32) -> i32 {
    let index = if month < 1 {
        0
    } else if month > 12 {
        12
    } else {
        (month - 1) as usize
    };
    let leap_shift = if month > 2 && is_leap(year) { 1 } else { 0 };
    DAYS_BEFORE_MONTH[index] + leap_shift + day
}

/// Inverse of [`month_day_to_days`]: the `(month, day)` holding
/// `day_of_year` in `year`.
pub const fn days_to_month_day(year: i32, day_of_year: i32) -> (i32, i32) {
    let mut month = 1;
    let mut remaining = day_of_year;
    while month < 12 {
        let length = days_in_month(year, month);
        if remaining <= length {
            break;
        }
        remaining -= length;
        month += 1;
    }
    (month, remaining)
}

/// Day of the week of a Julian day number: 0 = Sunday, …, 6 = Saturday.
#[inline]
pub const fn day_of_week(julian_day: i64) -> i32 {
    (julian_day + 1).rem_euclid(7) as i32
}
