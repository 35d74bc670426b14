// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Field-binding factories.
//!
//! A dataset declares, through attributes, which record fields carry the
//! year, month, day, day-of-year, hours, minutes and seconds of its records.
//! This module reads that schema once ([`DateBinding`], [`TimeBinding`]) and
//! then assembles one calendar value per record ([`ValueFactory::current`]).
//!
//! Each value type exists in three [`Role`]s (plain, start, end) that differ
//! only in the attribute container they read:
//!
//! | Role | Date container | Time container |
//! |------|----------------|----------------|
//! | [`Role::Plain`] | `DODS_Date` | `DODS_Time` |
//! | [`Role::Start`] | `DODS_StartDate` | `DODS_StartTime` |
//! | [`Role::End`] | `DODS_EndDate` | `DODS_EndTime` |

use crate::date::{Date, DateFormat};
use crate::date_time::{DateTime, DecimalYear};
use crate::error::{Error, Result};
use crate::time::Time;
use crate::value::CalendarValue;
use std::collections::HashMap;
use std::fmt;
use tracing::trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════════════════════════════════════
// Collaborators
// ═══════════════════════════════════════════════════════════════════════════

/// A field value as handed over by the record reader.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Int(i64),
    Float(f64),
    /// Any non-numeric field; reading it as a date component fails.
    Text(String),
}

impl Scalar {
    fn as_int(&self, field: &str) -> Result<i64> {
        match self {
            Scalar::Int(value) => Ok(*value),
            Scalar::Float(value) if value.is_finite() => Ok(value.trunc() as i64),
            Scalar::Float(_) | Scalar::Text(_) => Err(Error::NotNumeric {
                field: field.to_string(),
            }),
        }
    }

    fn as_float(&self, field: &str) -> Result<f64> {
        match self {
            Scalar::Int(value) => Ok(*value as f64),
            Scalar::Float(value) => Ok(*value),
            Scalar::Text(_) => Err(Error::NotNumeric {
                field: field.to_string(),
            }),
        }
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Int(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Int(value.into())
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Float(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

/// Reads named fields of the record currently under evaluation.
pub trait RecordReader {
    /// Value of `field` in the current record.
    fn read_scalar(&self, field: &str) -> Result<Scalar>;
}

impl RecordReader for HashMap<String, Scalar> {
    fn read_scalar(&self, field: &str) -> Result<Scalar> {
        self.get(field).cloned().ok_or_else(|| Error::UnknownField {
            field: field.to_string(),
        })
    }
}

/// Reads dataset attributes, grouped in named containers.
pub trait AttributeReader {
    fn attribute(&self, container: &str, key: &str) -> Option<String>;
}

impl AttributeReader for HashMap<String, HashMap<String, String>> {
    fn attribute(&self, container: &str, key: &str) -> Option<String> {
        self.get(container)?.get(key).cloned()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Role
// ═══════════════════════════════════════════════════════════════════════════

/// Which of a record's date/time bindings a factory reads.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Role {
    Plain,
    Start,
    End,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Plain, Role::Start, Role::End];

    /// Attribute container holding the date binding.
    pub const fn date_container(self) -> &'static str {
        match self {
            Role::Plain => "DODS_Date",
            Role::Start => "DODS_StartDate",
            Role::End => "DODS_EndDate",
        }
    }

    /// Attribute container holding the time binding.
    pub const fn time_container(self) -> &'static str {
        match self {
            Role::Plain => "DODS_Time",
            Role::Start => "DODS_StartTime",
            Role::End => "DODS_EndTime",
        }
    }

    /// `""`, `"start_"` or `"end_"`: prefix of the predicate names.
    pub const fn predicate_prefix(self) -> &'static str {
        match self {
            Role::Plain => "",
            Role::Start => "start_",
            Role::End => "end_",
        }
    }

    /// `""`, `"Start"` or `"End"`: infix of the projection names.
    pub const fn projection_infix(self) -> &'static str {
        match self {
            Role::Plain => "",
            Role::Start => "Start",
            Role::End => "End",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Role::Plain => "plain",
            Role::Start => "start",
            Role::End => "end",
        };
        f.write_str(label)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Bindings
// ═══════════════════════════════════════════════════════════════════════════

/// Day-of-month used for month-only bindings when the schema gives none.
pub const DEFAULT_MONTH_DAY: i32 = 15;

/// How the sub-year part of a date is stored in the record.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "lowercase"))]
pub enum DayBinding {
    /// Separate month and day-of-month fields.
    Ymd { month: String, day: String },
    /// A single day-of-year field.
    Yd { day_of_year: String },
    /// Only a month field; the day is `month_day`.
    Ym { month: String, month_day: i32 },
}

/// Where the date components of a record live.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DateBinding {
    pub year: String,
    /// Added to every year read from the record.
    pub year_base: i32,
    pub day: DayBinding,
}

impl DateBinding {
    /// Read the binding from `container`.
    ///
    /// `year_variable` is required. Exactly one of `day_variable` (with
    /// `month_variable`) and `year_day_variable` may be present; with neither,
    /// `month_variable` alone makes a month-only binding.
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use datesel::{DateBinding, DateFormat};
    ///
    /// let mut attrs: HashMap<String, HashMap<String, String>> = HashMap::new();
    /// attrs.entry("DODS_Date".into()).or_default().extend([
    ///     ("year_variable".to_string(), "yr".to_string()),
    ///     ("year_day_variable".to_string(), "doy".to_string()),
    /// ]);
    /// let binding = DateBinding::from_attributes(&attrs, "DODS_Date").unwrap();
    /// assert_eq!(binding.format(), DateFormat::YD);
    /// ```
    pub fn from_attributes(attrs: &dyn AttributeReader, container: &str) -> Result<Self> {
        let year = attrs
            .attribute(container, "year_variable")
            .ok_or_else(|| Error::config(container, "no year_variable attribute"))?;
        let year_base = match attrs.attribute(container, "year_base") {
            Some(text) => text.trim().parse().map_err(|_| {
                Error::config(container, format!("year_base '{text}' is not an integer"))
            })?,
            None => 0,
        };
        let month = attrs.attribute(container, "month_variable");
        let day = attrs.attribute(container, "day_variable");
        let day_of_year = attrs.attribute(container, "year_day_variable");

        let day = match (day, day_of_year) {
            (Some(_), Some(_)) => {
                return Err(Error::config(
                    container,
                    "both day_variable and year_day_variable are set",
                ))
            }
            (Some(day), None) => DayBinding::Ymd {
                month: month.ok_or_else(|| {
                    Error::config(container, "day_variable needs a month_variable")
                })?,
                day,
            },
            (None, Some(day_of_year)) => DayBinding::Yd { day_of_year },
            (None, None) => {
                let month = month.ok_or_else(|| {
                    Error::config(
                        container,
                        "no month_variable, day_variable or year_day_variable attribute",
                    )
                })?;
                let month_day = match attrs.attribute(container, "month_day") {
                    Some(text) => parse_month_day(container, &text)?,
                    None => DEFAULT_MONTH_DAY,
                };
                DayBinding::Ym { month, month_day }
            }
        };

        Ok(Self {
            year,
            year_base,
            day,
        })
    }

    /// Format of the dates this binding produces.
    pub const fn format(&self) -> DateFormat {
        match self.day {
            DayBinding::Ymd { .. } => DateFormat::YMD,
            DayBinding::Yd { .. } => DateFormat::YD,
            DayBinding::Ym { .. } => DateFormat::YM,
        }
    }

    /// Assemble the date stored in `record`.
    pub fn read(&self, record: &dyn RecordReader) -> Result<Date> {
        let raw_year = read_int(record, &self.year)?;
        let year = raw_year.checked_add(self.year_base).ok_or_else(|| {
            Error::MalformedDate(format!("year {raw_year} + {} overflows", self.year_base))
        })?;
        match &self.day {
            DayBinding::Ymd { month, day } => {
                Date::from_ymd(year, read_int(record, month)?, read_int(record, day)?)
            }
            DayBinding::Yd { day_of_year } => Date::from_yd(year, read_int(record, day_of_year)?),
            DayBinding::Ym { month, month_day } => {
                let month = read_int(record, month)?;
                // Short months take their last day instead of the default.
                let day = (*month_day).min(crate::calendar::days_in_month(year, month).max(1));
                Date::with_format(year, month, day, DateFormat::YM)
            }
        }
    }
}

fn parse_month_day(container: &str, text: &str) -> Result<i32> {
    match text.trim().parse::<i32>() {
        Ok(day) if (1..=31).contains(&day) => Ok(day),
        _ => Err(Error::config(
            container,
            format!("month_day '{text}' is not a day of the month"),
        )),
    }
}

/// Where the time-of-day components of a record live.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimeBinding {
    pub hours: String,
    /// Read as 0 when the dataset has no minutes field.
    pub minutes: Option<String>,
    /// Read as 0 when the dataset has no seconds field.
    pub seconds: Option<String>,
    /// Whether the stored times are GMT.
    pub gmt: bool,
}

impl TimeBinding {
    /// Read the binding from `container`. Only `hours_variable` is
    /// required; `minutes_variable` and `seconds_variable` are optional.
    /// `gmt_time` accepts `true`/`yes`/`1` in any case.
    pub fn from_attributes(attrs: &dyn AttributeReader, container: &str) -> Result<Self> {
        let hours = attrs
            .attribute(container, "hours_variable")
            .ok_or_else(|| Error::config(container, "no hours_variable attribute"))?;
        let gmt = attrs
            .attribute(container, "gmt_time")
            .map(|flag| {
                let flag = flag.trim();
                flag.eq_ignore_ascii_case("true") || flag.eq_ignore_ascii_case("yes") || flag == "1"
            })
            .unwrap_or(false);
        Ok(Self {
            hours,
            minutes: attrs.attribute(container, "minutes_variable"),
            seconds: attrs.attribute(container, "seconds_variable"),
            gmt,
        })
    }

    /// Assemble the time stored in `record`.
    pub fn read(&self, record: &dyn RecordReader) -> Result<Time> {
        let minutes = match &self.minutes {
            Some(field) => read_int(record, field)?,
            None => 0,
        };
        let seconds = match &self.seconds {
            Some(field) => record.read_scalar(field)?.as_float(field)?,
            None => 0.0,
        };
        Time::with_gmt(read_int(record, &self.hours)?, minutes, seconds, self.gmt)
    }
}

fn read_int(record: &dyn RecordReader, field: &str) -> Result<i32> {
    let value = record.read_scalar(field)?.as_int(field)?;
    i32::try_from(value).map_err(|_| Error::NotNumeric {
        field: field.to_string(),
    })
}

// ═══════════════════════════════════════════════════════════════════════════
// Factories
// ═══════════════════════════════════════════════════════════════════════════

/// Builds the "current" value of one kind from the record under evaluation.
///
/// Factories hold only their binding; every call re-reads the record.
pub trait ValueFactory {
    type Value: CalendarValue;

    fn current(&self, record: &dyn RecordReader) -> Result<Self::Value>;
}

/// Current date of a record for one [`Role`].
#[derive(Debug, Clone, PartialEq)]
pub struct DateFactory {
    role: Role,
    binding: DateBinding,
}

impl DateFactory {
    /// Read the date binding of `role` from the dataset attributes.
    pub fn new(attrs: &dyn AttributeReader, role: Role) -> Result<Self> {
        let binding = DateBinding::from_attributes(attrs, role.date_container())?;
        Ok(Self::from_binding(role, binding))
    }

    pub const fn from_binding(role: Role, binding: DateBinding) -> Self {
        Self { role, binding }
    }

    #[inline]
    pub const fn role(&self) -> Role {
        self.role
    }

    #[inline]
    pub const fn binding(&self) -> &DateBinding {
        &self.binding
    }
}

impl ValueFactory for DateFactory {
    type Value = Date;

    fn current(&self, record: &dyn RecordReader) -> Result<Date> {
        let date = self.binding.read(record)?;
        trace!(role = %self.role, %date, "read current date");
        Ok(date)
    }
}

/// Current time of day of a record for one [`Role`].
#[derive(Debug, Clone, PartialEq)]
pub struct TimeFactory {
    role: Role,
    binding: TimeBinding,
}

impl TimeFactory {
    /// Read the time binding of `role` from the dataset attributes.
    pub fn new(attrs: &dyn AttributeReader, role: Role) -> Result<Self> {
        let binding = TimeBinding::from_attributes(attrs, role.time_container())?;
        Ok(Self::from_binding(role, binding))
    }

    pub const fn from_binding(role: Role, binding: TimeBinding) -> Self {
        Self { role, binding }
    }

    #[inline]
    pub const fn role(&self) -> Role {
        self.role
    }

    #[inline]
    pub const fn binding(&self) -> &TimeBinding {
        &self.binding
    }
}

impl ValueFactory for TimeFactory {
    type Value = Time;

    fn current(&self, record: &dyn RecordReader) -> Result<Time> {
        let time = self.binding.read(record)?;
        trace!(role = %self.role, %time, "read current time");
        Ok(time)
    }
}

/// Current date and time of a record, composed from the date and time
/// factories of the same [`Role`].
#[derive(Debug, Clone, PartialEq)]
pub struct DateTimeFactory {
    date: DateFactory,
    time: TimeFactory,
}

impl DateTimeFactory {
    pub fn new(attrs: &dyn AttributeReader, role: Role) -> Result<Self> {
        Ok(Self::from_parts(
            DateFactory::new(attrs, role)?,
            TimeFactory::new(attrs, role)?,
        ))
    }

    pub const fn from_parts(date: DateFactory, time: TimeFactory) -> Self {
        Self { date, time }
    }

    #[inline]
    pub const fn role(&self) -> Role {
        self.date.role()
    }
}

impl ValueFactory for DateTimeFactory {
    type Value = DateTime;

    fn current(&self, record: &dyn RecordReader) -> Result<DateTime> {
        Ok(DateTime::new(
            self.date.current(record)?,
            self.time.current(record)?,
        ))
    }
}

/// [`DateTimeFactory`] whose values render as decimal years.
#[derive(Debug, Clone, PartialEq)]
pub struct DecimalYearFactory(DateTimeFactory);

impl DecimalYearFactory {
    pub fn new(attrs: &dyn AttributeReader, role: Role) -> Result<Self> {
        DateTimeFactory::new(attrs, role).map(Self)
    }
}

impl From<DateTimeFactory> for DecimalYearFactory {
    fn from(factory: DateTimeFactory) -> Self {
        Self(factory)
    }
}

impl ValueFactory for DecimalYearFactory {
    type Value = DecimalYear;

    fn current(&self, record: &dyn RecordReader) -> Result<DecimalYear> {
        self.0.current(record).map(DecimalYear::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Attrs = HashMap<String, HashMap<String, String>>;
    type Record = HashMap<String, Scalar>;

    fn attrs(entries: &[(&str, &[(&str, &str)])]) -> Attrs {
        entries
            .iter()
            .map(|(container, pairs)| {
                let pairs = pairs
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect();
                (container.to_string(), pairs)
            })
            .collect()
    }

    fn record(fields: &[(&str, Scalar)]) -> Record {
        fields
            .iter()
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect()
    }

    #[test]
    fn test_role_containers() {
        assert_eq!(Role::Plain.date_container(), "DODS_Date");
        assert_eq!(Role::Start.time_container(), "DODS_StartTime");
        assert_eq!(Role::End.date_container(), "DODS_EndDate");
        assert_eq!(Role::End.predicate_prefix(), "end_");
        assert_eq!(Role::Start.projection_infix(), "Start");
    }

    #[test]
    fn test_binding_states() {
        let ymd = attrs(&[(
            "DODS_Date",
            &[("year_variable", "y"), ("month_variable", "m"), ("day_variable", "d")],
        )]);
        let yd = attrs(&[("DODS_Date", &[("year_variable", "y"), ("year_day_variable", "j")])]);
        let ym = attrs(&[("DODS_Date", &[("year_variable", "y"), ("month_variable", "m")])]);

        let binding = DateBinding::from_attributes(&ymd, "DODS_Date").unwrap();
        assert_eq!(binding.format(), DateFormat::YMD);
        assert_eq!(
            DateBinding::from_attributes(&yd, "DODS_Date").unwrap().format(),
            DateFormat::YD
        );
        let binding = DateBinding::from_attributes(&ym, "DODS_Date").unwrap();
        assert_eq!(
            binding.day,
            DayBinding::Ym {
                month: "m".into(),
                month_day: DEFAULT_MONTH_DAY
            }
        );
    }

    #[test]
    fn test_binding_config_errors() {
        let both = attrs(&[(
            "DODS_Date",
            &[
                ("year_variable", "y"),
                ("month_variable", "m"),
                ("day_variable", "d"),
                ("year_day_variable", "j"),
            ],
        )]);
        let err = DateBinding::from_attributes(&both, "DODS_Date").unwrap_err();
        assert!(err.is_config());

        let missing = attrs(&[]);
        assert!(DateBinding::from_attributes(&missing, "DODS_Date")
            .unwrap_err()
            .is_config());

        let bad_base = attrs(&[(
            "DODS_Date",
            &[("year_variable", "y"), ("year_day_variable", "j"), ("year_base", "abc")],
        )]);
        assert!(DateBinding::from_attributes(&bad_base, "DODS_Date")
            .unwrap_err()
            .is_config());

        let bad_month_day = attrs(&[(
            "DODS_Date",
            &[("year_variable", "y"), ("month_variable", "m"), ("month_day", "40")],
        )]);
        assert!(DateBinding::from_attributes(&bad_month_day, "DODS_Date")
            .unwrap_err()
            .is_config());
    }

    #[test]
    fn test_date_factory_applies_year_base() {
        let schema = attrs(&[(
            "DODS_StartDate",
            &[("year_variable", "yy"), ("year_day_variable", "doy"), ("year_base", "1900")],
        )]);
        let factory = DateFactory::new(&schema, Role::Start).unwrap();
        let row = record(&[("yy", Scalar::Int(98)), ("doy", Scalar::Int(45))]);
        let date = factory.current(&row).unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (1998, 2, 14));
        assert_eq!(date.format(), DateFormat::YD);
    }

    #[test]
    fn test_month_only_factory() {
        let schema = attrs(&[(
            "DODS_Date",
            &[("year_variable", "y"), ("month_variable", "m"), ("month_day", "30")],
        )]);
        let factory = DateFactory::new(&schema, Role::Plain).unwrap();

        let march = factory
            .current(&record(&[("y", Scalar::Int(2020)), ("m", Scalar::Int(3))]))
            .unwrap();
        assert_eq!((march.day(), march.format()), (30, DateFormat::YM));

        let february = factory
            .current(&record(&[("y", Scalar::Int(2021)), ("m", Scalar::Int(2))]))
            .unwrap();
        assert_eq!(february.day(), 28);
    }

    #[test]
    fn test_record_read_errors() {
        let schema = attrs(&[(
            "DODS_Date",
            &[("year_variable", "y"), ("month_variable", "m"), ("day_variable", "d")],
        )]);
        let factory = DateFactory::new(&schema, Role::Plain).unwrap();

        let text = record(&[("y", "1998".into()), ("m", Scalar::Int(1)), ("d", Scalar::Int(1))]);
        assert_eq!(
            factory.current(&text),
            Err(Error::NotNumeric { field: "y".into() })
        );

        let missing = record(&[("y", Scalar::Int(1998)), ("m", Scalar::Int(1))]);
        assert_eq!(
            factory.current(&missing),
            Err(Error::UnknownField { field: "d".into() })
        );

        let invalid = record(&[("y", Scalar::Int(1998)), ("m", Scalar::Int(2)), ("d", Scalar::Int(30))]);
        assert!(matches!(factory.current(&invalid), Err(Error::MalformedDate(_))));
    }

    #[test]
    fn test_time_factory_reads_fractional_seconds() {
        let schema = attrs(&[(
            "DODS_Time",
            &[
                ("hours_variable", "h"),
                ("minutes_variable", "min"),
                ("seconds_variable", "s"),
                ("gmt_time", "TRUE"),
            ],
        )]);
        let factory = TimeFactory::new(&schema, Role::Plain).unwrap();
        let row = record(&[
            ("h", Scalar::Int(6)),
            ("min", Scalar::Float(30.0)),
            ("s", Scalar::Float(12.5)),
        ]);
        let time = factory.current(&row).unwrap();
        assert_eq!((time.hours(), time.minutes(), time.seconds()), (6, 30, 12.5));
        assert!(time.is_gmt());

        let no_hours = attrs(&[("DODS_Time", &[("minutes_variable", "min")])]);
        assert!(TimeFactory::new(&no_hours, Role::Plain).unwrap_err().is_config());
    }

    #[test]
    fn test_time_factory_without_seconds_field() {
        let schema = attrs(&[(
            "DODS_StartTime",
            &[("hours_variable", "h"), ("minutes_variable", "min")],
        )]);
        let factory = TimeFactory::new(&schema, Role::Start).unwrap();
        assert_eq!(factory.binding().seconds, None);

        let row = record(&[("h", Scalar::Int(14)), ("min", Scalar::Int(45))]);
        let time = factory.current(&row).unwrap();
        assert_eq!((time.hours(), time.minutes(), time.seconds()), (14, 45, 0.0));
        assert_eq!(time.get(false), "14:45:00");

        let hours_only = attrs(&[("DODS_Time", &[("hours_variable", "h")])]);
        let factory = TimeFactory::new(&hours_only, Role::Plain).unwrap();
        assert_eq!(factory.current(&row).unwrap(), Time::new(14, 0, 0.0).unwrap());
    }

    #[test]
    fn test_date_time_factory_composes_roles() {
        let schema = attrs(&[
            ("DODS_EndDate", &[("year_variable", "y"), ("year_day_variable", "j")]),
            (
                "DODS_EndTime",
                &[("hours_variable", "h"), ("minutes_variable", "m"), ("seconds_variable", "s")],
            ),
        ]);
        let factory = DateTimeFactory::new(&schema, Role::End).unwrap();
        assert_eq!(factory.role(), Role::End);
        assert!(DateTimeFactory::new(&schema, Role::Plain).is_err());

        let row = record(&[
            ("y", Scalar::Int(2010)),
            ("j", Scalar::Int(183)),
            ("h", Scalar::Int(12)),
            ("m", Scalar::Int(0)),
            ("s", Scalar::Int(0)),
        ]);
        let value = factory.current(&row).unwrap();
        assert_eq!(value.date().month(), 7);

        let decimal = DecimalYearFactory::from(factory).current(&row).unwrap();
        assert_eq!(decimal.get(), "2010.5");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_binding_serde_roundtrip() {
        let binding = DateBinding {
            year: "yr".into(),
            year_base: 1900,
            day: DayBinding::Yd {
                day_of_year: "doy".into(),
            },
        };
        let json = serde_json::to_string(&binding).unwrap();
        assert!(json.contains(r#""kind":"yd""#));
        let back: DateBinding = serde_json::from_str(&json).unwrap();
        assert_eq!(back, binding);
    }
}
