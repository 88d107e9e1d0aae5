// SPDX-FileCopyrightText: 2023 Jonathan Haigh <jonathanhaigh@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Comparing a `Duration` against one duration or a sequence of them.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::duration::Duration;
use crate::error::{Error, Result};

/// How a relation is applied to a sequence of durations.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum CompareMode {
    /// The relation must hold against every element.
    #[default]
    All,
    /// The relation must hold against at least one element.
    Any,
}

impl FromStr for CompareMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else if s.eq_ignore_ascii_case("any") {
            Ok(Self::Any)
        } else {
            Err(Error::UnknownCompareMode { mode: s.to_owned() })
        }
    }
}

/// A relational operator between two durations.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Relation {
    Equal,
    Less,
    LessOrEqual,
    Greater,
    GreaterOrEqual,
}

impl Relation {
    /// Check whether `lhs <relation> rhs`.
    pub fn holds(&self, lhs: &Duration, rhs: &Duration) -> bool {
        match self {
            Self::Equal => lhs == rhs,
            Self::Less => lhs < rhs,
            Self::LessOrEqual => lhs <= rhs,
            Self::Greater => lhs > rhs,
            Self::GreaterOrEqual => lhs >= rhs,
        }
    }
}

/// The kind of a loosely typed `Value`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValueKind {
    Duration,
    Int,
    Float,
    Str,
    Bool,
}

impl ValueKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Duration => "duration",
            Self::Int => "int",
            Self::Float => "float",
            Self::Str => "str",
            Self::Bool => "bool",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A loosely typed value, e.g. from a deserializer or scripting layer, that may or may not be a
/// duration.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Duration(Duration),
    Int(i64),
    Float(f64),
    Str(String),
    Bool(bool),
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Duration(_) => ValueKind::Duration,
            Self::Int(_) => ValueKind::Int,
            Self::Float(_) => ValueKind::Float,
            Self::Str(_) => ValueKind::Str,
            Self::Bool(_) => ValueKind::Bool,
        }
    }
}

impl From<Duration> for Value {
    fn from(d: Duration) -> Self {
        Self::Duration(d)
    }
}

/// The right hand side of a comparison.
#[derive(Clone, Copy, Debug)]
pub enum Operand<'a> {
    /// A single duration. The comparison mode is irrelevant.
    Single(&'a Duration),
    /// A sequence of durations.
    Sequence(&'a [Duration]),
    /// A sequence of loosely typed values, all of which must be durations.
    Values(&'a [Value]),
}

impl<'a> From<&'a Duration> for Operand<'a> {
    fn from(d: &'a Duration) -> Self {
        Self::Single(d)
    }
}

impl<'a> From<&'a [Duration]> for Operand<'a> {
    fn from(ds: &'a [Duration]) -> Self {
        Self::Sequence(ds)
    }
}

impl<'a, const N: usize> From<&'a [Duration; N]> for Operand<'a> {
    fn from(ds: &'a [Duration; N]) -> Self {
        Self::Sequence(ds)
    }
}

impl<'a> From<&'a Vec<Duration>> for Operand<'a> {
    fn from(ds: &'a Vec<Duration>) -> Self {
        Self::Sequence(ds)
    }
}

impl<'a> From<&'a [Value]> for Operand<'a> {
    fn from(vs: &'a [Value]) -> Self {
        Self::Values(vs)
    }
}

impl<'a> From<&'a Vec<Value>> for Operand<'a> {
    fn from(vs: &'a Vec<Value>) -> Self {
        Self::Values(vs)
    }
}

/// Extract the durations from a sequence of values.
///
/// # Returns
/// - An `Error::HeterogeneousSequence` for the first element that isn't a duration.
fn durations(values: &[Value]) -> Result<Vec<Duration>> {
    values
        .iter()
        .enumerate()
        .map(|(index, v)| match v {
            Value::Duration(d) => Ok(*d),
            other => Err(Error::HeterogeneousSequence {
                index,
                kind: other.kind(),
            }),
        })
        .collect()
}

impl Duration {
    /// Three-way comparison of second counts.
    pub fn compare_to(&self, other: &Duration) -> Ordering {
        self.cmp(other)
    }

    /// Apply `relation` between this duration and `operand`.
    ///
    /// An empty sequence never satisfies a relation, in either mode.
    pub fn compare<'a>(
        &self,
        relation: Relation,
        operand: impl Into<Operand<'a>>,
        mode: CompareMode,
    ) -> Result<bool> {
        match operand.into() {
            Operand::Single(other) => Ok(relation.holds(self, other)),
            Operand::Sequence(others) => Ok(self.compare_sequence(relation, others, mode)),
            Operand::Values(values) => {
                let others = durations(values)?;
                Ok(self.compare_sequence(relation, &others, mode))
            }
        }
    }

    fn compare_sequence(&self, relation: Relation, others: &[Duration], mode: CompareMode) -> bool {
        if others.is_empty() {
            return false;
        }
        match mode {
            CompareMode::All => others.iter().all(|o| relation.holds(self, o)),
            CompareMode::Any => others.iter().any(|o| relation.holds(self, o)),
        }
    }

    pub fn equals<'a>(&self, operand: impl Into<Operand<'a>>, mode: CompareMode) -> Result<bool> {
        self.compare(Relation::Equal, operand, mode)
    }

    pub fn less_than<'a>(
        &self,
        operand: impl Into<Operand<'a>>,
        mode: CompareMode,
    ) -> Result<bool> {
        self.compare(Relation::Less, operand, mode)
    }

    pub fn less_than_or_equal<'a>(
        &self,
        operand: impl Into<Operand<'a>>,
        mode: CompareMode,
    ) -> Result<bool> {
        self.compare(Relation::LessOrEqual, operand, mode)
    }

    pub fn greater_than<'a>(
        &self,
        operand: impl Into<Operand<'a>>,
        mode: CompareMode,
    ) -> Result<bool> {
        self.compare(Relation::Greater, operand, mode)
    }

    pub fn greater_than_or_equal<'a>(
        &self,
        operand: impl Into<Operand<'a>>,
        mode: CompareMode,
    ) -> Result<bool> {
        self.compare(Relation::GreaterOrEqual, operand, mode)
    }

    /// Check whether the duration lies between `min` and `max`.
    ///
    /// The bounds are included if `inclusive` is true and excluded otherwise.
    pub fn is_between(&self, min: &Duration, max: &Duration, inclusive: bool) -> bool {
        if inclusive {
            self >= min && self <= max
        } else {
            self > min && self < max
        }
    }
}
