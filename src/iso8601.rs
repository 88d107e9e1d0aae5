// SPDX-FileCopyrightText: 2023 Jonathan Haigh <jonathanhaigh@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Validating, parsing and generating ISO 8601 duration strings (`P[n]Y[n]M[n]DT[n]H[n]M[n]S`).
use std::fmt;
use std::str::FromStr;

use fancy_regex::{Captures, Regex};
use once_cell::sync::Lazy;

use crate::duration::{clamp_seconds, Duration};
use crate::error::{Error, Result};
use crate::units::Unit;

/// Capture group index and unit for each component, in the order they appear in the grammar.
const GROUPS: [(usize, Unit); 6] = [
    (1, Unit::Year),
    (2, Unit::Month),
    (3, Unit::Day),
    (4, Unit::Hour),
    (5, Unit::Minute),
    (6, Unit::Second),
];

/// Match a duration string against the grammar.
///
/// # Panics
/// - If the regex can't be compiled or executed.
fn captures(input: &str) -> Option<Captures<'_>> {
    static ISO8601_REGEX: Lazy<Regex> = Lazy::new(|| {
        match Regex::new(
            r"^P(?:([0-9]+)Y)?(?:([0-9]+)M)?(?:([0-9]+)D)?(?:T(?:([0-9]+)H)?(?:([0-9]+)M)?(?:([0-9]+)S)?)?$",
        ) {
            Ok(r) => r,
            Err(e) => panic!("failed to compile ISO 8601 duration regex: {}", e),
        }
    });

    match ISO8601_REGEX.captures(input) {
        Ok(c) => c,
        Err(e) => panic!("failed to run ISO 8601 duration regex: {}", e),
    }
}

/// Check whether a string is an acceptable ISO 8601 duration.
///
/// As well as matching the grammar, a `T` must be followed by at least one time component and
/// the string must contain at least one component, so `"P"`, `"PT"` and `"P1DT"` are rejected.
pub fn validate(input: &str) -> bool {
    if input == "P" || input == "PT" {
        return false;
    }
    captures(input).is_some() && !input.ends_with('T')
}

/// Parse an ISO 8601 duration string.
///
/// Absent components count as zero. Components too large to represent saturate the result at
/// the largest representable duration.
///
/// # Returns
/// - The parsed `Duration` on success.
/// - An `Error::InvalidIso8601` naming `input` if it fails [`validate`].
pub fn parse(input: &str) -> Result<Duration> {
    if !validate(input) {
        return Err(Error::invalid_iso8601(input));
    }
    let Some(caps) = captures(input) else {
        return Err(Error::invalid_iso8601(input));
    };

    let total = GROUPS
        .iter()
        .filter_map(|(group, unit)| {
            caps.get(*group).map(|m| {
                // The grammar only admits ASCII digits, so parsing can only fail on overflow.
                let amount = m.as_str().parse::<u64>().unwrap_or(u64::MAX);
                i128::from(amount) * i128::from(unit.seconds())
            })
        })
        .fold(0i128, i128::saturating_add);

    Ok(Duration::from_total_seconds(clamp_seconds(total)))
}

/// Generate the ISO 8601 form of a duration.
///
/// Zero components are omitted and numbers are not padded. A zero duration is `"PT0S"`.
pub fn generate(duration: &Duration) -> String {
    let c = duration.components();
    let mut s = String::from("P");

    for (amount, designator) in [(c.years, 'Y'), (c.months, 'M'), (c.days, 'D')] {
        if amount > 0 {
            s.push_str(&format!("{}{}", amount, designator));
        }
    }

    if c.hours > 0 || c.minutes > 0 || c.seconds > 0 {
        s.push('T');
        for (amount, designator) in [(c.hours, 'H'), (c.minutes, 'M'), (c.seconds, 'S')] {
            if amount > 0 {
                s.push_str(&format!("{}{}", amount, designator));
            }
        }
    }

    if s.len() == 1 {
        return "PT0S".to_owned();
    }
    s
}

impl Duration {
    /// See [`validate`].
    pub fn validate(input: &str) -> bool {
        validate(input)
    }

    /// See [`parse`].
    pub fn from_iso8601(input: &str) -> Result<Self> {
        parse(input)
    }

    /// See [`generate`].
    pub fn to_iso8601(&self) -> String {
        generate(self)
    }
}

impl FromStr for Duration {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", generate(self))
    }
}
