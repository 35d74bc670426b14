// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Selection and projection bodies.
//!
//! These are the generic operations every registered function reduces to:
//! [`compare`] (equality or inclusive range against the current value),
//! [`range_overlap`] (does the record's `[start, end]` meet a query range)
//! and [`project`] (render the current value for a synthesized column).

use crate::context::EvalContext;
use crate::error::{Error, Result};
use crate::factory::{RecordReader, ValueFactory};
use crate::period::Interval;
use crate::value::CalendarValue;
use tracing::debug;

/// Compare the current value against one or two literals.
///
/// - one argument: `literal == current`
/// - two arguments: `first <= current <= second`
///
/// Any other argument count is an [`Error::Arity`] naming `name`.
///
/// ```
/// use std::collections::HashMap;
/// use datesel::{compare, DateFactory, EvalContext, Role, Scalar};
///
/// let mut attrs: HashMap<String, HashMap<String, String>> = HashMap::new();
/// attrs.entry("DODS_Date".into()).or_default().extend([
///     ("year_variable".to_string(), "year".to_string()),
///     ("year_day_variable".to_string(), "doy".to_string()),
/// ]);
/// let factory = DateFactory::new(&attrs, Role::Plain).unwrap();
/// let record: HashMap<String, Scalar> =
///     [("year".to_string(), Scalar::Int(2013)), ("doy".to_string(), Scalar::Int(45))].into();
///
/// let ctx = EvalContext::default();
/// assert!(compare("date", &factory, &["2013/2/14"], &record, &ctx).unwrap());
/// assert!(compare("date", &factory, &["2013/1/1", "2013-03"], &record, &ctx).unwrap());
/// assert!(compare("date", &factory, &[] as &[&str], &record, &ctx).is_err());
/// ```
pub fn compare<F, S>(
    name: &str,
    factory: &F,
    args: &[S],
    record: &dyn RecordReader,
    ctx: &EvalContext,
) -> Result<bool>
where
    F: ValueFactory,
    S: AsRef<str>,
{
    match args {
        [literal] => {
            let literal = F::Value::parse(literal.as_ref())?;
            let current = factory.current(record)?;
            let result = literal.eq_in(&current, ctx);
            debug!(function = name, %literal, %current, result, "equality test");
            Ok(result)
        }
        [first, second] => {
            let range = Interval::<F::Value>::parse(first.as_ref(), second.as_ref())?;
            let current = factory.current(record)?;
            let result = range.contains(&current, ctx);
            debug!(function = name, %range, %current, result, "range test");
            Ok(result)
        }
        _ => Err(arity(name, 1, 2, args.len())),
    }
}

/// Test whether the record's `[start, end]` interval meets the query range
/// `[args[0], args[1]]`. Both intervals are closed, so touching endpoints
/// count as overlap.
pub fn range_overlap<S, E, A>(
    name: &str,
    start: &S,
    end: &E,
    args: &[A],
    record: &dyn RecordReader,
    ctx: &EvalContext,
) -> Result<bool>
where
    S: ValueFactory,
    E: ValueFactory<Value = S::Value>,
    A: AsRef<str>,
{
    let [low, high] = args else {
        return Err(arity(name, 2, 2, args.len()));
    };
    let query = Interval::<S::Value>::parse(low.as_ref(), high.as_ref())?;
    let extent = Interval::new(start.current(record)?, end.current(record)?);
    let result = extent.intersects(&query, ctx);
    debug!(function = name, %query, %extent, result, "overlap test");
    Ok(result)
}

/// Render the current value with `render`, for a synthesized column.
pub fn project<F, R>(factory: &F, record: &dyn RecordReader, render: R) -> Result<String>
where
    F: ValueFactory,
    R: Fn(&F::Value) -> Result<String>,
{
    let current = factory.current(record)?;
    render(&current)
}

fn arity(name: &str, min: usize, max: usize, actual: usize) -> Error {
    Error::Arity {
        name: name.to_string(),
        min,
        max,
        actual,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::{DateBinding, DateFactory, DayBinding, Role, Scalar, TimeBinding, TimeFactory};
    use crate::DateFormat;
    use std::collections::HashMap;

    fn ymd_factory(role: Role, prefix: &str) -> DateFactory {
        DateFactory::from_binding(
            role,
            DateBinding {
                year: format!("{prefix}y"),
                year_base: 0,
                day: DayBinding::Ymd {
                    month: format!("{prefix}m"),
                    day: format!("{prefix}d"),
                },
            },
        )
    }

    fn span_record() -> HashMap<String, Scalar> {
        [
            ("sy", 2010),
            ("sm", 1),
            ("sd", 1),
            ("ey", 2010),
            ("em", 12),
            ("ed", 31),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), Scalar::Int(v)))
        .collect()
    }

    fn ctx() -> EvalContext {
        EvalContext::default()
    }

    #[test]
    fn test_compare_arity() {
        let factory = ymd_factory(Role::Start, "s");
        let record = span_record();
        for args in [vec![], vec!["2010/1/1"; 3]] {
            let err = compare("start_date", &factory, &args, &record, &ctx()).unwrap_err();
            assert_eq!(
                err,
                Error::Arity {
                    name: "start_date".into(),
                    min: 1,
                    max: 2,
                    actual: args.len()
                }
            );
        }
    }

    #[test]
    fn test_compare_equality_and_range() {
        let factory = ymd_factory(Role::Start, "s");
        let record = span_record();
        assert!(compare("start_date", &factory, &["2010/001"], &record, &ctx()).unwrap());
        assert!(!compare("start_date", &factory, &["2010/1/2"], &record, &ctx()).unwrap());
        assert!(compare("start_date", &factory, &["2010-01"], &record, &ctx()).unwrap());
        assert!(compare("start_date", &factory, &["2009/12/31", "2010/1/1"], &record, &ctx()).unwrap());
        assert!(!compare("start_date", &factory, &["2010/1/2", "2010/2/1"], &record, &ctx()).unwrap());
    }

    #[test]
    fn test_compare_rejects_bad_literal() {
        let factory = ymd_factory(Role::Plain, "s");
        let err = compare("date", &factory, &["yesterday"], &span_record(), &ctx()).unwrap_err();
        assert!(matches!(err, Error::MalformedDate(_)));
    }

    #[test]
    fn test_range_overlap_cases() {
        let start = ymd_factory(Role::Start, "s");
        let end = ymd_factory(Role::End, "e");
        let record = span_record();
        let overlap = |lo: &str, hi: &str| {
            range_overlap("date_range", &start, &end, &[lo, hi], &record, &ctx()).unwrap()
        };
        assert!(overlap("2010/6/1", "2011/1/1"));
        assert!(!overlap("2011/1/1", "2011/6/1"));
        assert!(overlap("2010/12/31", "2011/1/1"));
        assert!(overlap("2010/3/1", "2010/3/2"));
        assert!(overlap("2000/1/1", "2020/1/1"));
    }

    #[test]
    fn test_range_overlap_needs_two_arguments() {
        let start = ymd_factory(Role::Start, "s");
        let end = ymd_factory(Role::End, "e");
        let err = range_overlap("date_range", &start, &end, &["2010/1/1"], &span_record(), &ctx())
            .unwrap_err();
        assert_eq!(
            err,
            Error::Arity {
                name: "date_range".into(),
                min: 2,
                max: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_time_compare_uses_context_tolerance() {
        let factory = TimeFactory::from_binding(
            Role::Plain,
            TimeBinding {
                hours: "h".into(),
                minutes: Some("m".into()),
                seconds: Some("s".into()),
                gmt: false,
            },
        );
        let record: HashMap<String, Scalar> = [
            ("h".to_string(), Scalar::Int(10)),
            ("m".to_string(), Scalar::Int(30)),
            ("s".to_string(), Scalar::Float(15.0000001)),
        ]
        .into();
        assert!(compare("time", &factory, &["10:30:15"], &record, &ctx()).unwrap());
        let strict = EvalContext::with_epsilon(1e-9);
        assert!(!compare("time", &factory, &["10:30:15"], &record, &strict).unwrap());
    }

    #[test]
    fn test_project_renders_current() {
        let factory = ymd_factory(Role::End, "e");
        let text = project(&factory, &span_record(), |date| date.get(DateFormat::YD)).unwrap();
        assert_eq!(text, "2010/365");
    }
}
