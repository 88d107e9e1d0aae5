// SPDX-FileCopyrightText: 2023 Jonathan Haigh <jonathanhaigh@gmail.com>
//
// SPDX-License-Identifier: MIT

use std::collections::BTreeMap;

use pretty_assertions::assert_eq;
use serde_json::json;

use isodur::{CalendarInterval, Component, Duration};

#[test]
fn test_ninety_minutes() {
    let d = Duration::new(5_400);
    assert_eq!(d.to_iso8601(), "PT1H30M");
    assert_eq!(d.to_human_readable(), "01:30:00");
    assert_eq!(d.to_string(), "PT1H30M");
}

#[test]
fn test_zero_to_array() {
    assert_eq!(
        Duration::new(0).to_array(),
        BTreeMap::from([(Component::Seconds, 0)])
    );
    assert_eq!(
        serde_json::to_value(Duration::new(0).to_array()).unwrap(),
        json!({"seconds": 0})
    );
}

#[test]
fn test_ninety_seconds_human_readable() {
    assert_eq!(Duration::new(90).to_human_readable(), "01:30");
}

#[test]
fn test_format_template() {
    let d = Duration::from_iso8601("P1DT2H3M4S").unwrap();
    assert_eq!(d.format("%D days %H:%I:%S"), "01 days 02:03:04");
    assert_eq!(d.format("total %T"), "total 93784");
}

#[test]
fn test_export_keeps_zero_components() {
    assert_eq!(
        serde_json::to_value(Duration::from_days(2)).unwrap(),
        json!({
            "seconds": 172800,
            "iso8601": "P2D",
            "components": {
                "years": 0,
                "months": 0,
                "days": 2,
                "hours": 0,
                "minutes": 0,
                "seconds": 0,
            },
        })
    );
}

#[test]
fn test_calendar_interval_adapter() {
    let d = Duration::from_iso8601("P1Y2M3DT4H5M6S").unwrap();
    let interval = d.to_calendar_interval();
    assert_eq!(
        interval,
        CalendarInterval {
            years: 1,
            months: 2,
            days: 3,
            hours: 4,
            minutes: 5,
            seconds: 6,
            total_seconds: Some(37_090_998),
        }
    );
    assert_eq!(Duration::from_calendar_interval(&interval), d);
}
