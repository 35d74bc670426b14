// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Closed intervals over calendar values.
//!
//! This module provides:
//! - [`Interval<V>`]: generic closed interval `[start, end]` over any
//!   [`CalendarValue`]
//! - [`DateRange`] / [`TimeRange`]: aliases for the common value types

use crate::context::EvalContext;
use crate::date::Date;
use crate::error::Result;
use crate::time::Time;
use crate::value::CalendarValue;
use std::fmt;

/// Represents the closed interval `[start, end]` between two calendar values.
///
/// Membership and overlap are decided with the value type's own comparison
/// operators, so a month-only [`Date`] endpoint widens the interval to its
/// whole month and [`Time`] endpoints honour the context's tolerance.
///
/// # Examples
///
/// ```
/// use datesel::{Date, EvalContext, Interval};
///
/// let ctx = EvalContext::default();
/// let year = Interval::new(
///     Date::parse("2010/1/1").unwrap(),
///     Date::parse("2010/12/31").unwrap(),
/// );
/// assert!(year.contains(&Date::parse("2010-06-15").unwrap(), &ctx));
/// assert!(!year.contains(&Date::parse("2011").unwrap(), &ctx));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval<V: CalendarValue> {
    pub start: V,
    pub end: V,
}

/// Interval of calendar days.
pub type DateRange = Interval<Date>;

/// Interval of times of day.
pub type TimeRange = Interval<Time>;

impl<V: CalendarValue> Interval<V> {
    /// Creates a new interval between two values. No ordering is enforced;
    /// an interval whose start is after its end contains nothing.
    pub fn new(start: V, end: V) -> Self {
        Interval { start, end }
    }

    /// Parses both endpoints from caller literals.
    ///
    /// ```
    /// use datesel::{Interval, Time};
    ///
    /// let shift = Interval::<Time>::parse("08:00", "17:30").unwrap();
    /// assert_eq!(shift.start.hours(), 8);
    /// assert!(Interval::<Time>::parse("08:00", "25:00").is_err());
    /// ```
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Ok(Self::new(V::parse(start)?, V::parse(end)?))
    }

    /// `start <= value <= end`.
    #[inline]
    pub fn contains(&self, value: &V, ctx: &EvalContext) -> bool {
        self.start.le_in(value, ctx) && value.le_in(&self.end, ctx)
    }

    /// Whether the two closed intervals share at least one value.
    ///
    /// Intervals that only touch at an endpoint intersect, and so does an
    /// interval nested inside the other.
    ///
    /// ```
    /// use datesel::{Date, DateRange, EvalContext};
    ///
    /// let ctx = EvalContext::default();
    /// let record = DateRange::parse("2010/1/1", "2010/12/31").unwrap();
    /// let touching = DateRange::parse("2010/12/31", "2011/1/1").unwrap();
    /// let later = DateRange::parse("2011/1/1", "2011/6/1").unwrap();
    ///
    /// assert!(record.intersects(&touching, &ctx));
    /// assert!(!record.intersects(&later, &ctx));
    /// ```
    pub fn intersects(&self, other: &Self, ctx: &EvalContext) -> bool {
        other.contains(&self.start, ctx)
            || other.contains(&self.end, ctx)
            || (self.start.le_in(&other.start, ctx) && self.end.ge_in(&other.end, ctx))
    }

    /// Returns the overlapping sub-interval between `self` and `other`.
    ///
    /// Both intervals are closed: if one ends exactly where the other
    /// starts, the intersection is that single value.
    pub fn intersection(&self, other: &Self, ctx: &EvalContext) -> Option<Self> {
        let start = if self.start.ge_in(&other.start, ctx) {
            self.start.clone()
        } else {
            other.start.clone()
        };
        let end = if self.end.le_in(&other.end, ctx) {
            self.end.clone()
        } else {
            other.end.clone()
        };

        if start.le_in(&end, ctx) {
            Some(Self::new(start, end))
        } else {
            None
        }
    }
}

// Display implementation
impl<V: CalendarValue> fmt::Display for Interval<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}
