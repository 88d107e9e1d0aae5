// SPDX-FileCopyrightText: 2023 Jonathan Haigh <jonathanhaigh@gmail.com>
//
// SPDX-License-Identifier: MIT

//! The `Duration` value type and its decomposition into calendar-like components.

use std::time::{self, SystemTime};

use serde::Serialize;

use crate::units::{self, Unit};

/// A non-negative span of time, stored as a whole number of seconds.
///
/// `Duration` is immutable: every operation returns a new value. Years, months, days, hours,
/// minutes and seconds are derived from the second count on demand using the fixed unit lengths
/// in [`crate::units`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[must_use]
pub struct Duration {
    total_seconds: u64,
}

/// The calendar-like components of a `Duration`.
///
/// Produced by cascading floor division: years first, then months, days, hours and minutes, with
/// whatever is left over in `seconds`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Components {
    pub years: u64,
    pub months: u64,
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

/// Clamp a wide intermediate result into the range a `Duration` can hold.
///
/// Negative values become zero; values above `u64::MAX` saturate.
pub(crate) fn clamp_seconds(value: i128) -> u64 {
    if value <= 0 {
        0
    } else {
        u64::try_from(value).unwrap_or(u64::MAX)
    }
}

impl Duration {
    pub const ZERO: Duration = Duration { total_seconds: 0 };

    /// Create a duration from a second count. Negative counts are clamped to zero.
    pub fn new(seconds: i64) -> Self {
        Self::from_unit(Unit::Second, seconds)
    }

    pub const fn from_total_seconds(seconds: u64) -> Self {
        Self {
            total_seconds: seconds,
        }
    }

    /// Create a duration of `amount` units, clamping negative amounts to zero.
    pub fn from_unit(unit: Unit, amount: i64) -> Self {
        Self::from_total_seconds(clamp_seconds(
            i128::from(amount) * i128::from(unit.seconds()),
        ))
    }

    pub fn from_seconds(seconds: i64) -> Self {
        Self::from_unit(Unit::Second, seconds)
    }

    pub fn from_minutes(minutes: i64) -> Self {
        Self::from_unit(Unit::Minute, minutes)
    }

    pub fn from_hours(hours: i64) -> Self {
        Self::from_unit(Unit::Hour, hours)
    }

    pub fn from_days(days: i64) -> Self {
        Self::from_unit(Unit::Day, days)
    }

    pub fn from_weeks(weeks: i64) -> Self {
        Self::from_unit(Unit::Week, weeks)
    }

    pub fn from_months(months: i64) -> Self {
        Self::from_unit(Unit::Month, months)
    }

    pub fn from_years(years: i64) -> Self {
        Self::from_unit(Unit::Year, years)
    }

    /// Create the duration elapsed from `start` to `end`.
    ///
    /// If `end` is before `start` the result is zero rather than an error: a reversed interval
    /// is treated as empty.
    pub fn between(start: SystemTime, end: SystemTime) -> Self {
        match end.duration_since(start) {
            Ok(elapsed) => Self::from(elapsed),
            Err(_) => Self::ZERO,
        }
    }

    /// Get the number of whole `unit`s in the duration (truncated).
    pub const fn to_unit(&self, unit: Unit) -> u64 {
        self.total_seconds / unit.seconds()
    }

    pub const fn to_seconds(&self) -> u64 {
        self.total_seconds
    }

    pub const fn to_minutes(&self) -> u64 {
        self.to_unit(Unit::Minute)
    }

    pub const fn to_hours(&self) -> u64 {
        self.to_unit(Unit::Hour)
    }

    pub const fn to_days(&self) -> u64 {
        self.to_unit(Unit::Day)
    }

    pub const fn to_weeks(&self) -> u64 {
        self.to_unit(Unit::Week)
    }

    pub const fn to_months(&self) -> u64 {
        self.to_unit(Unit::Month)
    }

    pub const fn to_years(&self) -> u64 {
        self.to_unit(Unit::Year)
    }

    pub const fn is_zero(&self) -> bool {
        self.total_seconds == 0
    }

    /// Decompose the duration into years, months, days, hours, minutes and seconds.
    pub const fn components(&self) -> Components {
        let mut rem = self.total_seconds;
        let years = rem / units::YEAR;
        rem %= units::YEAR;
        let months = rem / units::MONTH;
        rem %= units::MONTH;
        let days = rem / units::DAY;
        rem %= units::DAY;
        let hours = rem / units::HOUR;
        rem %= units::HOUR;
        let minutes = rem / units::MINUTE;
        rem %= units::MINUTE;

        Components {
            years,
            months,
            days,
            hours,
            minutes,
            seconds: rem,
        }
    }

    pub const fn years(&self) -> u64 {
        self.components().years
    }

    pub const fn months(&self) -> u64 {
        self.components().months
    }

    pub const fn days(&self) -> u64 {
        self.components().days
    }

    pub const fn hours(&self) -> u64 {
        self.components().hours
    }

    pub const fn minutes(&self) -> u64 {
        self.components().minutes
    }

    /// Get the seconds left over after whole minutes are removed.
    ///
    /// Use [`Duration::to_seconds`] for the total.
    pub const fn seconds(&self) -> u64 {
        self.components().seconds
    }
}

impl From<u64> for Duration {
    fn from(seconds: u64) -> Self {
        Self::from_total_seconds(seconds)
    }
}

/// Sub-second precision is truncated.
impl From<time::Duration> for Duration {
    fn from(d: time::Duration) -> Self {
        Self::from_total_seconds(d.as_secs())
    }
}

impl From<Duration> for time::Duration {
    fn from(d: Duration) -> Self {
        time::Duration::from_secs(d.total_seconds)
    }
}
