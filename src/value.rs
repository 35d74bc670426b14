// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The [`CalendarValue`] trait shared by every comparable value type.

use crate::context::EvalContext;
use crate::error::Result;
use std::fmt;

// ═══════════════════════════════════════════════════════════════════════════
// CalendarValue trait
// ═══════════════════════════════════════════════════════════════════════════

/// A value that can be parsed from a caller literal and ordered against
/// another value of the same type.
///
/// Comparisons take an [`EvalContext`] because some of them are
/// tolerance-based (times of day). They are *not* required to form a total
/// order: a month-only [`Date`](crate::Date) is equal to every day of its
/// month, so equality is not transitive.
///
/// Only [`eq_in`](Self::eq_in), [`lt_in`](Self::lt_in) and
/// [`gt_in`](Self::gt_in) are required; the inclusive forms default to
/// `a < b ∨ a == b` and `a > b ∨ a == b`.
pub trait CalendarValue: Clone + fmt::Debug + fmt::Display + Sized {
    /// Human-readable kind used in log lines and error messages.
    const KIND: &'static str;

    /// Parse a caller-supplied literal.
    fn parse(input: &str) -> Result<Self>;

    /// `self == other`.
    fn eq_in(&self, other: &Self, ctx: &EvalContext) -> bool;

    /// `self < other`.
    fn lt_in(&self, other: &Self, ctx: &EvalContext) -> bool;

    /// `self > other`.
    fn gt_in(&self, other: &Self, ctx: &EvalContext) -> bool;

    /// `self != other`.
    #[inline]
    fn ne_in(&self, other: &Self, ctx: &EvalContext) -> bool {
        !self.eq_in(other, ctx)
    }

    /// `self <= other`.
    #[inline]
    fn le_in(&self, other: &Self, ctx: &EvalContext) -> bool {
        self.lt_in(other, ctx) || self.eq_in(other, ctx)
    }

    /// `self >= other`.
    #[inline]
    fn ge_in(&self, other: &Self, ctx: &EvalContext) -> bool {
        self.gt_in(other, ctx) || self.eq_in(other, ctx)
    }
}

// ── Number formatting ─────────────────────────────────────────────────────

/// Formats `value` with at most `digits` significant digits, dropping
/// trailing zeros. Switches to exponent notation for very small or very
/// large magnitudes, like C's `%g`.
pub(crate) fn format_significant(value: f64, digits: usize) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }
    let digits = digits.max(1);
    let exponent = value.abs().log10().floor() as i32;
    if exponent < -5 || exponent >= digits as i32 {
        let text = format!("{:.*e}", digits - 1, value);
        return match text.split_once('e') {
            Some((mantissa, exp)) => format!("{}e{}", trim_fraction(mantissa), exp),
            None => text,
        };
    }
    let decimals = (digits as i32 - 1 - exponent).max(0) as usize;
    trim_fraction(&format!("{:.*}", decimals, value)).to_string()
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}
