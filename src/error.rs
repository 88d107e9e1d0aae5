// SPDX-FileCopyrightText: 2023 Jonathan Haigh <jonathanhaigh@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Error types.
use miette::{Diagnostic, SourceSpan};
use thiserror::Error as ThisError;

use crate::compare::ValueKind;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    InvalidIso8601,
    NegativeResult,
    DivisionByZero,
    HeterogeneousSequence,
    UnknownCompareMode,
}

/// Type of error returned by fallible `Duration` operations.
///
/// Every operation either succeeds with a new value or fails with one of these; operands are
/// never modified.
#[derive(Clone, Debug, Diagnostic, ThisError, PartialEq)]
#[must_use]
pub enum Error {
    /// A string that is not an acceptable ISO 8601 duration.
    #[error("invalid ISO 8601 duration {input:?}")]
    #[diagnostic(help("expected P[n]Y[n]M[n]DT[n]H[n]M[n]S with at least one component"))]
    InvalidIso8601 {
        input: String,

        #[label("not a valid duration")]
        span: SourceSpan,
    },

    /// A strict subtraction or decrement that would go below zero.
    #[error("cannot {operation} {operand} from {duration}: result would be negative")]
    #[diagnostic()]
    NegativeResult {
        operation: &'static str,
        operand: String,
        duration: String,
    },

    /// Division by a zero divisor.
    #[error("cannot divide {duration} by zero")]
    #[diagnostic()]
    DivisionByZero { duration: String },

    /// A comparison sequence containing something other than a duration.
    #[error("comparison sequences must contain only durations: element {index} is {kind}")]
    #[diagnostic()]
    HeterogeneousSequence { index: usize, kind: ValueKind },

    /// A comparison mode flag other than `all` or `any`.
    #[error("unknown comparison mode {mode:?}: expecting all or any")]
    #[diagnostic()]
    UnknownCompareMode { mode: String },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidIso8601 { .. } => ErrorKind::InvalidIso8601,
            Error::NegativeResult { .. } => ErrorKind::NegativeResult,
            Error::DivisionByZero { .. } => ErrorKind::DivisionByZero,
            Error::HeterogeneousSequence { .. } => ErrorKind::HeterogeneousSequence,
            Error::UnknownCompareMode { .. } => ErrorKind::UnknownCompareMode,
        }
    }

    pub(crate) fn invalid_iso8601(input: &str) -> Self {
        Error::InvalidIso8601 {
            input: input.to_owned(),
            span: (0, input.len()).into(),
        }
    }
}

/// A value or an `Error`
pub type Result<T> = std::result::Result<T, Error>;
