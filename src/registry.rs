// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Name-keyed function registry and the evaluator-facing interfaces.
//!
//! A query evaluator looks functions up by name. Two kinds exist:
//!
//! - **Selection** functions ([`PredicateFn`]) run once per record and
//!   return whether the record is kept.
//! - **Projection** functions ([`ProjectionFn`]) run once per query. They
//!   add an output column through [`Evaluator::add_output_field`] and append
//!   a zero-argument [`Clause`] that fills that column for every record.

use crate::context::EvalContext;
use crate::error::{Error, Result};
use crate::factory::RecordReader;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Version string of every function this crate registers.
pub const FUNCTION_VERSION: &str = "1.0";

// ═══════════════════════════════════════════════════════════════════════════
// Evaluator interfaces
// ═══════════════════════════════════════════════════════════════════════════

/// What a selection function sees of the record under evaluation.
pub trait RecordScope {
    fn record(&self) -> &dyn RecordReader;

    fn context(&self) -> &EvalContext;

    /// Store `value` in the synthesized column `field` of this record.
    fn write_output(&mut self, field: &str, value: String) -> Result<()>;
}

/// Query-compilation hooks used by projection functions.
pub trait Evaluator {
    /// Add a string column named `name`, inside `parent` when given.
    fn add_output_field(&mut self, name: &str, parent: Option<&str>) -> Result<()>;

    /// Schedule `clause` to run for every record.
    fn append_clause(&mut self, clause: Clause);
}

/// Selection function body.
pub type PredicateFn = Arc<dyn Fn(&[String], &mut dyn RecordScope) -> Result<bool> + Send + Sync>;

/// Projection function body.
pub type ProjectionFn = Arc<dyn Fn(&[String], &mut dyn Evaluator) -> Result<()> + Send + Sync>;

/// A selection function bound to its arguments, ready to run per record.
#[derive(Clone)]
pub struct Clause {
    name: String,
    predicate: PredicateFn,
    args: Vec<String>,
}

impl Clause {
    pub fn new(name: impl Into<String>, predicate: PredicateFn, args: Vec<String>) -> Self {
        Self {
            name: name.into(),
            predicate,
            args,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn evaluate(&self, scope: &mut dyn RecordScope) -> Result<bool> {
        (self.predicate)(self.args.as_slice(), scope)
    }
}

impl fmt::Debug for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Clause")
            .field("name", &self.name)
            .field("args", &self.args)
            .finish_non_exhaustive()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Metadata
// ═══════════════════════════════════════════════════════════════════════════

/// Inclusive bounds on the number of arguments a function accepts.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Arity {
    pub min: usize,
    pub max: usize,
}

impl Arity {
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    pub const fn exactly(count: usize) -> Self {
        Self::new(count, count)
    }

    #[inline]
    pub const fn accepts(&self, count: usize) -> bool {
        self.min <= count && count <= self.max
    }

    /// [`Error::Arity`] unless `actual` is within bounds.
    pub fn check(&self, name: &str, actual: usize) -> Result<()> {
        if self.accepts(actual) {
            Ok(())
        } else {
            Err(Error::Arity {
                name: name.to_string(),
                min: self.min,
                max: self.max,
                actual,
            })
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FunctionKind {
    Selection,
    Projection,
}

/// Descriptive data published alongside each function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionInfo {
    pub name: String,
    pub version: String,
    pub description: String,
    pub usage: String,
    pub arity: Arity,
}

impl FunctionInfo {
    pub fn new(name: impl Into<String>, arity: Arity) -> Self {
        let name = name.into();
        Self {
            usage: format!("{name}(...)"),
            name,
            version: FUNCTION_VERSION.to_string(),
            description: String::new(),
            arity,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = usage.into();
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Registry
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
enum Body {
    Selection(PredicateFn),
    Projection(ProjectionFn),
}

#[derive(Clone)]
struct Entry {
    info: FunctionInfo,
    body: Body,
}

impl Entry {
    fn kind(&self) -> FunctionKind {
        match self.body {
            Body::Selection(_) => FunctionKind::Selection,
            Body::Projection(_) => FunctionKind::Projection,
        }
    }
}

/// Registry of selection and projection functions, keyed by name.
///
/// Registering a name twice replaces the earlier function.
///
/// ```
/// use datesel::{Arity, FunctionInfo, FunctionKind, FunctionRegistry};
///
/// let mut registry = FunctionRegistry::new();
/// registry.register_predicate(FunctionInfo::new("always", Arity::exactly(0)), |_args, _scope| Ok(true));
///
/// assert!(registry.contains("always"));
/// assert_eq!(registry.kind("always"), Some(FunctionKind::Selection));
/// assert_eq!(registry.info("always").unwrap().version, "1.0");
/// ```
#[derive(Clone, Default)]
pub struct FunctionRegistry {
    functions: HashMap<String, Entry>,
}

impl fmt::Debug for FunctionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionRegistry")
            .field("function_names", &self.function_names())
            .finish()
    }
}

impl FunctionRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a selection function.
    pub fn register_predicate<F>(&mut self, info: FunctionInfo, function: F)
    where
        F: Fn(&[String], &mut dyn RecordScope) -> Result<bool> + Send + Sync + 'static,
    {
        self.insert(info, Body::Selection(Arc::new(function)));
    }

    /// Register a projection function.
    pub fn register_projection<F>(&mut self, info: FunctionInfo, function: F)
    where
        F: Fn(&[String], &mut dyn Evaluator) -> Result<()> + Send + Sync + 'static,
    {
        self.insert(info, Body::Projection(Arc::new(function)));
    }

    fn insert(&mut self, info: FunctionInfo, body: Body) {
        self.functions
            .insert(info.name.clone(), Entry { info, body });
    }

    /// Check if a function exists
    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    pub fn info(&self, name: &str) -> Option<&FunctionInfo> {
        self.functions.get(name).map(|entry| &entry.info)
    }

    pub fn kind(&self, name: &str) -> Option<FunctionKind> {
        self.functions.get(name).map(Entry::kind)
    }

    /// All registered function names, sorted.
    pub fn function_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.functions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// The selection function `name` with its arguments bound, after an
    /// arity check.
    pub fn clause(&self, name: &str, args: Vec<String>) -> Result<Clause> {
        let entry = self.lookup(name, FunctionKind::Selection)?;
        entry.info.arity.check(name, args.len())?;
        match &entry.body {
            Body::Selection(predicate) => Ok(Clause::new(name, Arc::clone(predicate), args)),
            Body::Projection(_) => Err(Error::UnknownFunction(name.to_string())),
        }
    }

    /// Run the selection function `name` against the record in `scope`.
    pub fn call_predicate(
        &self,
        name: &str,
        args: &[String],
        scope: &mut dyn RecordScope,
    ) -> Result<bool> {
        let entry = self.lookup(name, FunctionKind::Selection)?;
        entry.info.arity.check(name, args.len())?;
        match &entry.body {
            Body::Selection(predicate) => predicate(args, scope),
            Body::Projection(_) => Err(Error::UnknownFunction(name.to_string())),
        }
    }

    /// Run the projection function `name` against the query in `evaluator`.
    pub fn call_projection(
        &self,
        name: &str,
        args: &[String],
        evaluator: &mut dyn Evaluator,
    ) -> Result<()> {
        let entry = self.lookup(name, FunctionKind::Projection)?;
        entry.info.arity.check(name, args.len())?;
        match &entry.body {
            Body::Projection(projection) => projection(args, evaluator),
            Body::Selection(_) => Err(Error::UnknownFunction(name.to_string())),
        }
    }

    fn lookup(&self, name: &str, kind: FunctionKind) -> Result<&Entry> {
        self.functions
            .get(name)
            .filter(|entry| entry.kind() == kind)
            .ok_or_else(|| Error::UnknownFunction(name.to_string()))
    }
}
