// SPDX-FileCopyrightText: 2023 Jonathan Haigh <jonathanhaigh@gmail.com>
//
// SPDX-License-Identifier: MIT

//! A non-negative, second-resolution duration type with ISO 8601 parsing and generation,
//! strict and saturating arithmetic, and comparisons against sequences of durations.

pub mod arith;
pub mod cli;
pub mod compare;
pub mod duration;
pub mod error;
pub mod format;
pub mod interval;
pub mod iso8601;
pub mod units;

pub use arith::Factor;
pub use compare::{CompareMode, Operand, Relation, Value, ValueKind};
pub use duration::{Components, Duration};
pub use error::{Error, ErrorKind, Result};
pub use format::{Component, Export};
pub use interval::CalendarInterval;
pub use units::Unit;
