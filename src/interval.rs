// SPDX-FileCopyrightText: 2023 Jonathan Haigh <jonathanhaigh@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Adapter to and from a calendar-interval structure with one field per unit.

use serde::{Deserialize, Serialize};

use crate::duration::{clamp_seconds, Duration};
use crate::units::Unit;

/// A span of time expressed as separate calendar-like fields.
///
/// Fields may be negative or exceed their natural range (e.g. 90 minutes); they are simply
/// summed using the fixed unit lengths when converted to a `Duration`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct CalendarInterval {
    pub years: i64,
    pub months: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,

    /// The total length in seconds when known.
    ///
    /// Set by [`Duration::to_calendar_interval`]; ignored by
    /// [`Duration::from_calendar_interval`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_seconds: Option<u64>,
}

impl Duration {
    /// Sum each field of `interval` times its unit length. A negative total becomes zero.
    pub fn from_calendar_interval(interval: &CalendarInterval) -> Self {
        let total: i128 = [
            (interval.years, Unit::Year),
            (interval.months, Unit::Month),
            (interval.days, Unit::Day),
            (interval.hours, Unit::Hour),
            (interval.minutes, Unit::Minute),
            (interval.seconds, Unit::Second),
        ]
        .iter()
        .map(|(amount, unit)| i128::from(*amount) * i128::from(unit.seconds()))
        .sum();
        Self::from_total_seconds(clamp_seconds(total))
    }

    /// Build a `CalendarInterval` from the decomposed components.
    ///
    /// A component only fails to fit an `i64` for durations longer than `i64::MAX` seconds; such
    /// components saturate.
    pub fn to_calendar_interval(&self) -> CalendarInterval {
        let c = self.components();
        let field = |v: u64| i64::try_from(v).unwrap_or(i64::MAX);
        CalendarInterval {
            years: field(c.years),
            months: field(c.months),
            days: field(c.days),
            hours: field(c.hours),
            minutes: field(c.minutes),
            seconds: field(c.seconds),
            total_seconds: Some(self.to_seconds()),
        }
    }
}

impl From<&CalendarInterval> for Duration {
    fn from(interval: &CalendarInterval) -> Self {
        Duration::from_calendar_interval(interval)
    }
}

impl From<&Duration> for CalendarInterval {
    fn from(d: &Duration) -> Self {
        d.to_calendar_interval()
    }
}
