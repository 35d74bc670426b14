// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The date/time function catalogue.
//!
//! [`install`] reads a dataset's field bindings and registers, per [`Role`]:
//!
//! | Binding present | Selection | Projection |
//! |-----------------|-----------|------------|
//! | date | `date`, `start_date`, `end_date` | `DODS_Date`, `DODS_StartDate`, `DODS_EndDate`, `DODS_JDate` |
//! | start + end date | `date_range` | |
//! | time | `time`, `start_time`, `end_time` | `DODS_Time`, `DODS_StartTime`, `DODS_EndTime` |
//! | date + time | `date_time`, `start_date_time`, `end_date_time` | `DODS_Date_Time`, …, `DODS_Decimal_Year`, … |
//!
//! A group whose binding is missing or invalid is skipped; the others are
//! still installed.

use crate::date::DateFormat;
use crate::error::Result;
use crate::factory::{
    AttributeReader, DateFactory, DateTimeFactory, DecimalYearFactory, Role, TimeFactory,
    ValueFactory,
};
use crate::predicate::{compare, project, range_overlap};
use crate::registry::{
    Arity, Clause, Evaluator, FunctionInfo, FunctionRegistry, PredicateFn, RecordScope,
};
use std::sync::Arc;
use tracing::{info, warn};

/// Register every date/time function the dataset's attributes support.
/// Returns the number of functions registered.
///
/// ```
/// use std::collections::HashMap;
/// use datesel::{install, FunctionRegistry};
///
/// let mut attrs: HashMap<String, HashMap<String, String>> = HashMap::new();
/// attrs.entry("DODS_Date".into()).or_default().extend([
///     ("year_variable".to_string(), "year".to_string()),
///     ("year_day_variable".to_string(), "doy".to_string()),
/// ]);
///
/// let mut registry = FunctionRegistry::new();
/// let installed = install(&mut registry, &attrs);
/// assert_eq!(installed, 3);
/// assert!(registry.contains("date"));
/// assert!(registry.contains("DODS_JDate"));
/// assert!(!registry.contains("time"));
/// ```
pub fn install(registry: &mut FunctionRegistry, attrs: &dyn AttributeReader) -> usize {
    let before = registry.len();
    let mut start_end = (None, None);

    for role in Role::ALL {
        let date = DateFactory::new(attrs, role);
        let time = TimeFactory::new(attrs, role);

        match &date {
            Ok(factory) => {
                install_date(registry, factory);
                match role {
                    Role::Start => start_end.0 = Some(factory.clone()),
                    Role::End => start_end.1 = Some(factory.clone()),
                    Role::Plain => {}
                }
            }
            Err(error) => warn!(%role, %error, "date functions disabled"),
        }

        match &time {
            Ok(factory) => install_time(registry, factory),
            Err(error) => warn!(%role, %error, "time functions disabled"),
        }

        if let (Ok(date), Ok(time)) = (date, time) {
            install_date_time(registry, DateTimeFactory::from_parts(date, time));
        }
    }

    match start_end {
        (Some(start), Some(end)) => install_date_range(registry, start, end),
        _ => warn!("date_range disabled: needs both start and end date bindings"),
    }

    let installed = registry.len() - before;
    info!(installed, total = registry.len(), "installed date/time functions");
    installed
}

fn install_date(registry: &mut FunctionRegistry, factory: &DateFactory) {
    let role = factory.role();
    let name = format!("{}date", role.predicate_prefix());
    let description = match role {
        Role::Plain => {
            "Compares the current record's date to one date, or tests whether it falls in \
             an inclusive date range when given two."
        }
        Role::Start => {
            "Compares the current record's start date to one date, or tests whether it \
             falls in an inclusive date range when given two."
        }
        Role::End => {
            "Compares the current record's end date to one date, or tests whether it falls \
             in an inclusive date range when given two."
        }
    };
    let usage = format!("{name}(date[, end_date])");
    register_compare(registry, &name, description, &usage, factory.clone());

    let column = format!("DODS_{}Date", role.projection_infix());
    register_column(
        registry,
        &column,
        &format!("Adds a string column named {column} holding the yyyy/mm/dd date."),
        factory.clone(),
        |date| date.get(DateFormat::YMD),
    );
    if role == Role::Plain {
        register_column(
            registry,
            "DODS_JDate",
            "Adds a string column named DODS_JDate holding the yyyy/ddd date.",
            factory.clone(),
            |date| date.get(DateFormat::YD),
        );
    }
}

fn install_date_range(registry: &mut FunctionRegistry, start: DateFactory, end: DateFactory) {
    let info = FunctionInfo::new("date_range", Arity::exactly(2))
        .with_description(
            "Tests whether the record's [start date, end date] interval overlaps the \
             inclusive range given by the two arguments.",
        )
        .with_usage("date_range(start_date, end_date)");
    registry.register_predicate(info, move |args, scope| {
        range_overlap(
            "date_range",
            &start,
            &end,
            args,
            scope.record(),
            scope.context(),
        )
    });
}

fn install_time(registry: &mut FunctionRegistry, factory: &TimeFactory) {
    let role = factory.role();
    let name = format!("{}time", role.predicate_prefix());
    register_compare(
        registry,
        &name,
        "Compares the current record's time of day to one time, or tests whether it \
         falls in an inclusive time range when given two.",
        &format!("{name}(time[, end_time])"),
        factory.clone(),
    );

    let column = format!("DODS_{}Time", role.projection_infix());
    register_column(
        registry,
        &column,
        &format!("Adds a string column named {column} holding the hh:mm:ss time."),
        factory.clone(),
        |time| Ok(time.get(time.is_gmt())),
    );
}

fn install_date_time(registry: &mut FunctionRegistry, factory: DateTimeFactory) {
    let role = factory.role();
    let name = format!("{}date_time", role.predicate_prefix());
    register_compare(
        registry,
        &name,
        "Compares the current record's date and time to one date/time, or tests whether \
         it falls in an inclusive date/time range when given two.",
        &format!("{name}(date_time[, end_date_time])"),
        factory.clone(),
    );

    let column = format!("DODS_{}Date_Time", role.projection_infix());
    register_column(
        registry,
        &column,
        &format!("Adds a string column named {column} holding the date:time value."),
        factory.clone(),
        |value| value.get(DateFormat::YMD, value.time().is_gmt()),
    );

    let column = format!("DODS_{}Decimal_Year", role.projection_infix());
    register_column(
        registry,
        &column,
        &format!("Adds a string column named {column} holding the decimal year."),
        DecimalYearFactory::from(factory),
        |value| Ok(value.get()),
    );
}

// ── Shared registration shapes ────────────────────────────────────────────

fn register_compare<F>(
    registry: &mut FunctionRegistry,
    name: &str,
    description: &str,
    usage: &str,
    factory: F,
) where
    F: ValueFactory + Send + Sync + 'static,
{
    let info = FunctionInfo::new(name, Arity::new(1, 2))
        .with_description(description)
        .with_usage(usage);
    let function = name.to_string();
    registry.register_predicate(info, move |args, scope| {
        compare(&function, &factory, args, scope.record(), scope.context())
    });
}

/// Register the projection `column` and its per-record companion, which
/// renders the current value with `render` into that column.
///
/// The companion always keeps the record. When the value cannot be built
/// the column is left unset for that record.
fn register_column<F, R>(
    registry: &mut FunctionRegistry,
    column: &str,
    description: &str,
    factory: F,
    render: R,
) where
    F: ValueFactory + Send + Sync + 'static,
    R: Fn(&F::Value) -> Result<String> + Send + Sync + 'static,
{
    let field = column.to_string();
    let fill: PredicateFn = Arc::new(move |_args: &[String], scope: &mut dyn RecordScope| -> Result<bool> {
        match project(&factory, scope.record(), &render) {
            Ok(text) => scope.write_output(&field, text)?,
            Err(error) => warn!(field = field.as_str(), %error, "projection skipped for record"),
        }
        Ok(true)
    });

    let info = FunctionInfo::new(column, Arity::new(0, 1))
        .with_description(description)
        .with_usage(format!("{column}([parent])"));
    let field = column.to_string();
    registry.register_projection(info, move |args, evaluator: &mut dyn Evaluator| {
        evaluator.add_output_field(&field, args.first().map(String::as_str))?;
        evaluator.append_clause(Clause::new(field.clone(), Arc::clone(&fill), Vec::new()));
        Ok(())
    });
}
