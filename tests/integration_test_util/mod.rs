// SPDX-FileCopyrightText: 2023 Jonathan Haigh <jonathanhaigh@gmail.com>
//
// SPDX-License-Identifier: MIT

use pretty_assertions::assert_eq;

use isodur::error::{ErrorKind, Result};
use isodur::Duration;

// Rust doesn't seem to see that this function is actually used.
#[allow(dead_code)]
pub fn test_parse_ok(input: &str, expected_seconds: u64) {
    assert_eq!(
        Duration::from_iso8601(input).unwrap().to_seconds(),
        expected_seconds
    );
}

// Rust doesn't seem to see that this macro is actually used.
#[allow(unused_macros)]
macro_rules! test_simple_parse_ok {
    ($name:ident, $($case_name:ident, $input:expr, $expected:expr;)*) => {
        // Put the test function in a new module to avoid "use" statements polluting the caller's
        // namespace
        mod $name {
            use rstest::rstest;
            #[rstest]
            $(#[case::$case_name($input, $expected)])*
            fn test_parse_ok(#[case] input: &str, #[case] expected: u64) {
                $crate::integration_test_util::test_parse_ok(input, expected);
            }
        }
    }
}
#[allow(unused_imports)]
pub(crate) use test_simple_parse_ok;

// Rust doesn't seem to see that this function is actually used.
#[allow(dead_code)]
pub fn test_err<T: std::fmt::Debug>(result: Result<T>, kind: ErrorKind) {
    assert_eq!(result.unwrap_err().kind(), kind);
}

// Rust doesn't seem to see that this macro is actually used.
#[allow(unused_macros)]
macro_rules! test_simple_err {
    ($name:ident, $($case_name:ident, $op:expr, $expected:ident;)*) => {
        // Put the test functions in a new module to avoid "use" statements polluting the
        // caller's namespace
        mod $name {
            #[allow(unused_imports)]
            use isodur::{CompareMode, Duration, Value};
            use isodur::error::ErrorKind;
            $(
                #[test]
                fn $case_name() {
                    $crate::integration_test_util::test_err($op, ErrorKind::$expected);
                }
            )*
        }
    }
}

#[allow(unused_imports)]
pub(crate) use test_simple_err;
