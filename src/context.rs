// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Request-scoped comparison settings.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Settings an evaluator carries for one request and hands to every
/// comparison.
///
/// Currently this holds the tolerance, in seconds, within which two times
/// of day are considered equal. Two requests may run with different
/// tolerances side by side; nothing here is process-wide.
///
/// ```
/// use datesel::{EvalContext, Time};
///
/// let a = Time::new(10, 30, 15.0000001).unwrap();
/// let b = Time::new(10, 30, 15.0).unwrap();
///
/// assert!(a.eq_within(&b, &EvalContext::default()));
/// assert!(!a.eq_within(&b, &EvalContext::with_epsilon(1e-9)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EvalContext {
    epsilon: f64,
}

impl EvalContext {
    /// Default equality tolerance for times of day, in seconds.
    pub const DEFAULT_EPSILON: f64 = 1.0e-6;

    /// A context with the default tolerance.
    pub const fn new() -> Self {
        Self {
            epsilon: Self::DEFAULT_EPSILON,
        }
    }

    /// A context with an explicit tolerance. Negative values are folded to
    /// their magnitude.
    pub fn with_epsilon(epsilon: f64) -> Self {
        Self {
            epsilon: epsilon.abs(),
        }
    }

    /// Equality tolerance for times of day, in seconds.
    #[inline]
    pub const fn epsilon(&self) -> f64 {
        self.epsilon
    }

    pub fn set_epsilon(&mut self, epsilon: f64) {
        self.epsilon = epsilon.abs();
    }
}

impl Default for EvalContext {
    fn default() -> Self {
        Self::new()
    }
}
