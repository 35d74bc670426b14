// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Date Selection Module
//!
//! Calendar values and record-selection functions for earth-science sequence
//! datasets whose dates and times are spread over several numeric fields.
//!
//! # Core types
//!
//! - [`Date`]: a calendar day tagged with its [`DateFormat`]; a month-only
//!   date stands for its whole month.
//! - [`Time`]: a time of day with a GMT flag and tolerant equality.
//! - [`DateTime`] and [`DecimalYear`]: a date paired with a time.
//! - [`Interval<V>`]: a closed interval over any [`CalendarValue`].
//! - [`EvalContext`]: per-request comparison settings.
//!
//! # Records and datasets
//!
//! - [`DateFactory`], [`TimeFactory`], [`DateTimeFactory`]: read a dataset's
//!   field bindings once and build the value of the current record on
//!   demand, through the [`RecordReader`] and [`AttributeReader`]
//!   collaborators.
//! - [`compare`], [`range_overlap`], [`project`]: the generic selection and
//!   projection bodies.
//! - [`FunctionRegistry`] and [`install`]: the named functions a query
//!   evaluator calls.
//!
//! # Accepted literals
//!
//! | Kind | Forms |
//! |------|-------|
//! | date | `yyyy/mm/dd`, `yyyy/ddd`, `yyyy-mm-dd`, `yyyy-mm`, `yyyy`, `yyyy.fraction` |
//! | time | `hh`, `hh:mm`, `hh:mm:ss[.ffffff]`, each optionally followed by `GMT` or `UTC` |
//! | date-time | `date:time`, `date`, `yyyy.fraction` |

pub mod calendar;
mod context;
mod date;
mod date_time;
mod error;
mod factory;
mod functions;
mod period;
mod predicate;
mod registry;
mod time;
mod value;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use context::EvalContext;
pub use date::{Date, DateFormat};
pub use date_time::{DateTime, DecimalYear};
pub use error::{Error, Result};
pub use factory::{
    AttributeReader, DateBinding, DateFactory, DateTimeFactory, DayBinding, DecimalYearFactory,
    RecordReader, Role, Scalar, TimeBinding, TimeFactory, ValueFactory, DEFAULT_MONTH_DAY,
};
pub use functions::install;
pub use period::{DateRange, Interval, TimeRange};
pub use predicate::{compare, project, range_overlap};
pub use registry::{
    Arity, Clause, Evaluator, FunctionInfo, FunctionKind, FunctionRegistry, PredicateFn,
    ProjectionFn, RecordScope, FUNCTION_VERSION,
};
pub use time::Time;
pub use value::CalendarValue;
