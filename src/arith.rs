// SPDX-FileCopyrightText: 2023 Jonathan Haigh <jonathanhaigh@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Arithmetic on `Duration`s.
//!
//! Operations come in two flavours: saturating ones that clamp a would-be negative result to zero,
//! and strict ones that fail with `Error::NegativeResult` instead. Adding always saturates at the
//! largest representable duration rather than wrapping.

use crate::duration::{clamp_seconds, Duration};
use crate::error::{Error, Result};
use crate::units::Unit;

/// A multiplication or division factor: either an integer or a real number.
///
/// Results are truncated to whole seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Factor {
    Int(i64),
    Real(f64),
}

impl From<i64> for Factor {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for Factor {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<u32> for Factor {
    fn from(v: u32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<f64> for Factor {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<f32> for Factor {
    fn from(v: f32) -> Self {
        Self::Real(f64::from(v))
    }
}

impl Factor {
    fn is_zero(&self) -> bool {
        match self {
            Self::Int(v) => *v == 0,
            Self::Real(v) => *v == 0.0,
        }
    }
}

impl Duration {
    fn seconds_i128(&self) -> i128 {
        i128::from(self.to_seconds())
    }

    /// Offset by `delta` seconds, clamping into range.
    fn offset(&self, delta: i128) -> Self {
        Self::from_total_seconds(clamp_seconds(self.seconds_i128() + delta))
    }

    /// Offset by `delta` seconds, failing if the result would be negative.
    fn strict_offset(&self, delta: i128, operation: &'static str, operand: String) -> Result<Self> {
        if self.seconds_i128() + delta < 0 {
            return Err(Error::NegativeResult {
                operation,
                operand,
                duration: self.to_iso8601(),
            });
        }
        Ok(self.offset(delta))
    }

    fn unit_delta(unit: Unit, amount: i64) -> i128 {
        i128::from(amount) * i128::from(unit.seconds())
    }

    pub fn add(&self, other: &Duration) -> Self {
        Self::from_total_seconds(self.to_seconds().saturating_add(other.to_seconds()))
    }

    /// Subtract `other`, clamping to zero if it is the larger of the two.
    pub fn subtract(&self, other: &Duration) -> Self {
        Self::from_total_seconds(self.to_seconds().saturating_sub(other.to_seconds()))
    }

    /// Subtract `other`, failing if it is the larger of the two.
    pub fn strict_subtract(&self, other: &Duration) -> Result<Self> {
        self.strict_offset(-other.seconds_i128(), "subtract", other.to_iso8601())
    }

    /// Add `amount` units. A negative `amount` can reduce the duration but never below zero.
    pub fn add_unit(&self, unit: Unit, amount: i64) -> Self {
        self.offset(Self::unit_delta(unit, amount))
    }

    pub fn add_years(&self, years: i64) -> Self {
        self.add_unit(Unit::Year, years)
    }

    pub fn add_months(&self, months: i64) -> Self {
        self.add_unit(Unit::Month, months)
    }

    pub fn add_weeks(&self, weeks: i64) -> Self {
        self.add_unit(Unit::Week, weeks)
    }

    pub fn add_days(&self, days: i64) -> Self {
        self.add_unit(Unit::Day, days)
    }

    pub fn add_hours(&self, hours: i64) -> Self {
        self.add_unit(Unit::Hour, hours)
    }

    pub fn add_minutes(&self, minutes: i64) -> Self {
        self.add_unit(Unit::Minute, minutes)
    }

    pub fn add_seconds(&self, seconds: i64) -> Self {
        self.add_unit(Unit::Second, seconds)
    }

    /// Subtract `amount` units, failing if the result would be negative.
    ///
    /// Unlike [`Duration::add_unit`], this never clamps.
    pub fn subtract_unit(&self, unit: Unit, amount: i64) -> Result<Self> {
        self.strict_offset(
            -Self::unit_delta(unit, amount),
            "subtract",
            format!("{} {}", amount, unit),
        )
    }

    pub fn subtract_years(&self, years: i64) -> Result<Self> {
        self.subtract_unit(Unit::Year, years)
    }

    pub fn subtract_months(&self, months: i64) -> Result<Self> {
        self.subtract_unit(Unit::Month, months)
    }

    pub fn subtract_weeks(&self, weeks: i64) -> Result<Self> {
        self.subtract_unit(Unit::Week, weeks)
    }

    pub fn subtract_days(&self, days: i64) -> Result<Self> {
        self.subtract_unit(Unit::Day, days)
    }

    pub fn subtract_hours(&self, hours: i64) -> Result<Self> {
        self.subtract_unit(Unit::Hour, hours)
    }

    pub fn subtract_minutes(&self, minutes: i64) -> Result<Self> {
        self.subtract_unit(Unit::Minute, minutes)
    }

    pub fn subtract_seconds(&self, seconds: i64) -> Result<Self> {
        self.subtract_unit(Unit::Second, seconds)
    }

    /// Multiply by `factor`, truncating to whole seconds. Negative products become zero.
    pub fn multiply(&self, factor: impl Into<Factor>) -> Self {
        match factor.into() {
            Factor::Int(n) => {
                Self::from_total_seconds(clamp_seconds(self.seconds_i128() * i128::from(n)))
            }
            // `as` saturates, and maps NaN to zero.
            Factor::Real(f) => Self::from_total_seconds((self.to_seconds() as f64 * f) as u64),
        }
    }

    /// Divide by `divisor`, truncating to whole seconds. Negative quotients become zero.
    ///
    /// # Returns
    /// - An `Error::DivisionByZero` if `divisor` is zero.
    pub fn divide(&self, divisor: impl Into<Factor>) -> Result<Self> {
        let divisor = divisor.into();
        if divisor.is_zero() {
            return Err(Error::DivisionByZero {
                duration: self.to_iso8601(),
            });
        }
        Ok(match divisor {
            Factor::Int(n) => {
                Self::from_total_seconds(clamp_seconds(self.seconds_i128() / i128::from(n)))
            }
            Factor::Real(f) => Self::from_total_seconds((self.to_seconds() as f64 / f) as u64),
        })
    }

    pub fn increment(&self) -> Self {
        self.increment_by(1)
    }

    pub fn increment_by(&self, seconds: i64) -> Self {
        self.add_seconds(seconds)
    }

    pub fn increment_by_duration(&self, other: &Duration) -> Self {
        self.add(other)
    }

    /// Remove one second, failing on a zero duration.
    pub fn decrement(&self) -> Result<Self> {
        self.decrement_by(1)
    }

    /// Remove `seconds` seconds, failing if the result would be negative.
    pub fn decrement_by(&self, seconds: i64) -> Result<Self> {
        self.strict_offset(
            -i128::from(seconds),
            "decrement",
            format!("{} {}", seconds, Unit::Second),
        )
    }

    /// Remove `other`, failing if the result would be negative.
    pub fn decrement_by_duration(&self, other: &Duration) -> Result<Self> {
        self.strict_offset(-other.seconds_i128(), "decrement", other.to_iso8601())
    }

    pub fn safe_decrement(&self) -> Self {
        self.safe_decrement_by(1)
    }

    /// Remove `seconds` seconds, clamping to zero.
    pub fn safe_decrement_by(&self, seconds: i64) -> Self {
        self.offset(-i128::from(seconds))
    }

    pub fn safe_decrement_by_duration(&self, other: &Duration) -> Self {
        self.subtract(other)
    }
}
