// SPDX-FileCopyrightText: 2023 Jonathan Haigh <jonathanhaigh@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Rendering a `Duration` as text and as structured data.

use std::collections::BTreeMap;
use std::fmt;

use phf::phf_map;
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::duration::{Components, Duration};

/// A decomposed component of a duration.
///
/// Ordered from largest to smallest so that maps keyed by `Component` iterate in that order.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Component {
    Years,
    Months,
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl Component {
    const ALL: [Component; 6] = [
        Self::Years,
        Self::Months,
        Self::Days,
        Self::Hours,
        Self::Minutes,
        Self::Seconds,
    ];

    fn of(&self, c: &Components) -> u64 {
        match self {
            Self::Years => c.years,
            Self::Months => c.months,
            Self::Days => c.days,
            Self::Hours => c.hours,
            Self::Minutes => c.minutes,
            Self::Seconds => c.seconds,
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Placeholder {
    Padded(Component),
    TotalSeconds,
}

/// Placeholders recognised by [`Duration::format`], keyed by the character after `%`.
static PLACEHOLDERS: phf::Map<char, Placeholder> = phf_map! {
    'Y' => Placeholder::Padded(Component::Years),
    'M' => Placeholder::Padded(Component::Months),
    'D' => Placeholder::Padded(Component::Days),
    'H' => Placeholder::Padded(Component::Hours),
    'I' => Placeholder::Padded(Component::Minutes),
    'S' => Placeholder::Padded(Component::Seconds),
    'T' => Placeholder::TotalSeconds,
};

/// The structured form of a duration handed to serializers.
///
/// Unlike [`Duration::to_array`], every component is present, zero or not.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Export {
    pub seconds: u64,
    pub iso8601: String,
    pub components: Components,
}

impl Duration {
    /// Get the non-zero components, or just `seconds: 0` for a zero duration.
    pub fn to_array(&self) -> BTreeMap<Component, u64> {
        let c = self.components();
        let mut map: BTreeMap<Component, u64> = Component::ALL
            .iter()
            .map(|comp| (*comp, comp.of(&c)))
            .filter(|(_, v)| *v > 0)
            .collect();
        if map.is_empty() {
            map.insert(Component::Seconds, 0);
        }
        map
    }

    /// Substitute placeholders in `template`.
    ///
    /// `%Y`, `%M`, `%D`, `%H`, `%I` and `%S` become the years, months, days, hours, minutes and
    /// left over seconds, zero-padded to two digits. `%T` becomes the unpadded total second count.
    /// Everything else is copied unchanged; there is no escape for a literal placeholder.
    pub fn format(&self, template: &str) -> String {
        let c = self.components();
        let mut out = String::with_capacity(template.len());
        let mut chars = template.chars().peekable();

        while let Some(ch) = chars.next() {
            if ch == '%' {
                if let Some(p) = chars.peek().and_then(|next| PLACEHOLDERS.get(next)) {
                    match p {
                        Placeholder::Padded(comp) => out.push_str(&format!("{:02}", comp.of(&c))),
                        Placeholder::TotalSeconds => out.push_str(&self.to_seconds().to_string()),
                    }
                    chars.next();
                    continue;
                }
            }
            out.push(ch);
        }
        out
    }

    /// Render as colon separated, zero-padded fields, e.g. `"01:30:00"`.
    ///
    /// Minutes and seconds are always shown; larger units are shown from the largest non-zero one
    /// downwards.
    pub fn to_human_readable(&self) -> String {
        let c = self.components();
        let fields = Component::ALL.map(|comp| comp.of(&c));
        let first = fields
            .iter()
            .position(|v| *v > 0)
            .unwrap_or(fields.len())
            .min(Component::ALL.len() - 2);
        itertools::join(fields[first..].iter().map(|v| format!("{:02}", v)), ":")
    }

    pub fn export(&self) -> Export {
        Export {
            seconds: self.to_seconds(),
            iso8601: self.to_iso8601(),
            components: self.components(),
        }
    }
}

impl Serialize for Duration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.export().serialize(serializer)
    }
}

struct DurationVisitor;

impl<'de> Visitor<'de> for DurationVisitor {
    type Value = Duration;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "an ISO 8601 duration string, a number of seconds or a map with a seconds field"
        )
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Duration, E> {
        Duration::from_iso8601(v).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Duration, E> {
        Ok(Duration::from(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Duration, E> {
        Ok(Duration::new(v))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Duration, A::Error> {
        let mut seconds = None;
        while let Some(key) = map.next_key::<String>()? {
            if key == "seconds" {
                if seconds.is_some() {
                    return Err(de::Error::duplicate_field("seconds"));
                }
                seconds = Some(map.next_value::<u64>()?);
            } else {
                map.next_value::<de::IgnoredAny>()?;
            }
        }
        seconds
            .map(Duration::from)
            .ok_or_else(|| de::Error::missing_field("seconds"))
    }
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DurationVisitor)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    fn d(seconds: u64) -> Duration {
        Duration::from(seconds)
    }

    #[test]
    fn test_to_array_zero() {
        assert_eq!(
            d(0).to_array(),
            BTreeMap::from([(Component::Seconds, 0)])
        );
    }

    #[test]
    fn test_to_array_omits_zeroes() {
        assert_eq!(
            d(5_400).to_array(),
            BTreeMap::from([(Component::Hours, 1), (Component::Minutes, 30)])
        );
        assert_eq!(
            serde_json::to_value(d(37_090_998).to_array()).unwrap(),
            json!({
                "years": 1,
                "months": 2,
                "days": 3,
                "hours": 4,
                "minutes": 5,
                "seconds": 6,
            })
        );
    }

    #[rstest]
    #[case::all_fields(37_090_998, "%Y-%M-%D %H:%I:%S", "01-02-03 04:05:06")]
    #[case::total(5_400, "%T seconds", "5400 seconds")]
    #[case::zero(0, "%H:%I:%S", "00:00:00")]
    #[case::no_placeholders(60, "plain text", "plain text")]
    #[case::unknown_placeholder(60, "%X %I", "%X 01")]
    #[case::trailing_percent(60, "%I%", "01%")]
    #[case::double_percent(60, "%%I", "%01")]
    #[case::repeated(3_661, "%H%H", "0101")]
    #[case::wide_value(200 * 31_557_600, "%Y", "200")]
    fn test_format(#[case] seconds: u64, #[case] template: &str, #[case] expected: &str) {
        assert_eq!(d(seconds).format(template), expected);
    }

    #[rstest]
    #[case::zero(0, "00:00")]
    #[case::seconds(30, "00:30")]
    #[case::ninety_seconds(90, "01:30")]
    #[case::ninety_minutes(5_400, "01:30:00")]
    #[case::day(86_400, "01:00:00:00")]
    #[case::month(2_629_746, "01:00:00:00:00")]
    #[case::year(31_557_600, "01:00:00:00:00:00")]
    #[case::full(37_090_998, "01:02:03:04:05:06")]
    fn test_to_human_readable(#[case] seconds: u64, #[case] expected: &str) {
        assert_eq!(d(seconds).to_human_readable(), expected);
    }

    #[test]
    fn test_serialize_export_shape() {
        assert_eq!(
            serde_json::to_value(d(5_400)).unwrap(),
            json!({
                "seconds": 5400,
                "iso8601": "PT1H30M",
                "components": {
                    "years": 0,
                    "months": 0,
                    "days": 0,
                    "hours": 1,
                    "minutes": 30,
                    "seconds": 0,
                },
            })
        );
    }

    #[rstest]
    #[case::iso(json!("PT1H30M"), 5_400)]
    #[case::seconds(json!(90), 90)]
    #[case::negative_seconds(json!(-90), 0)]
    #[case::export(json!({"seconds": 60, "iso8601": "PT1M"}), 60)]
    fn test_deserialize(#[case] value: serde_json::Value, #[case] expected: u64) {
        assert_eq!(
            serde_json::from_value::<Duration>(value).unwrap(),
            d(expected)
        );
    }

    #[rstest]
    #[case::bad_iso(json!("P"))]
    #[case::missing_seconds(json!({"iso8601": "PT1M"}))]
    #[case::float(json!(1.5))]
    fn test_deserialize_invalid(#[case] value: serde_json::Value) {
        assert!(serde_json::from_value::<Duration>(value).is_err());
    }

    #[test]
    fn test_serialize_then_deserialize() {
        let original = d(123_456_789);
        let json = serde_json::to_string(&original).unwrap();
        assert_eq!(serde_json::from_str::<Duration>(&json).unwrap(), original);
    }
}
