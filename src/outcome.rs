// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Classification of terminal test statuses into statistics buckets.

use std::{convert::Infallible, str::FromStr};

use derive_more::with_trait::Display;

/// Terminal status of a test, as decided by the host runner.
///
/// Numeric codes follow the conventional runner ordering (see
/// [`Status::from_code()`]), while names are matched case-insensitively.
#[derive(Clone, Copy, Debug, Default, Display, Eq, Hash, PartialEq)]
pub enum Status {
    /// Test passed.
    #[default]
    #[display("passed")]
    Passed,

    /// Assertion failed.
    #[display("failure")]
    Failure,

    /// Test errored unexpectedly.
    #[display("error")]
    Error,

    /// Test is marked as not implemented yet.
    #[display("incomplete")]
    Incomplete,

    /// Test was skipped.
    #[display("skipped")]
    Skipped,

    /// Test was considered risky (e.g. it performed no assertions).
    #[display("risky")]
    Risky,

    /// Test passed with a warning.
    #[display("warning")]
    Warning,

    /// Status the runner reported, but this crate doesn't know.
    #[display("unknown")]
    Unknown,
}

impl Status {
    /// All the [`Status`]es, in their numeric code order.
    pub const ALL: [Self; 8] = [
        Self::Unknown,
        Self::Passed,
        Self::Skipped,
        Self::Incomplete,
        Self::Failure,
        Self::Error,
        Self::Risky,
        Self::Warning,
    ];

    /// Maps a numeric status code onto a [`Status`].
    ///
    /// Codes are `-1` unknown, `0` passed, `1` skipped, `2` incomplete,
    /// `3` failure, `4` error, `5` risky and `6` warning. Anything else is
    /// [`Status::Unknown`].
    #[must_use]
    pub const fn from_code(code: i64) -> Self {
        match code {
            0 => Self::Passed,
            1 => Self::Skipped,
            2 => Self::Incomplete,
            3 => Self::Failure,
            4 => Self::Error,
            5 => Self::Risky,
            6 => Self::Warning,
            _ => Self::Unknown,
        }
    }

    /// Parses a status name, never failing: unrecognized names become
    /// [`Status::Unknown`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "passed" | "pass" | "tests" | "ok" => Self::Passed,
            "failure" | "failed" | "failures" => Self::Failure,
            "error" | "errors" => Self::Error,
            "incomplete" | "incompletes" => Self::Incomplete,
            "skipped" | "skip" | "skips" => Self::Skipped,
            "risky" => Self::Risky,
            "warning" | "warnings" => Self::Warning,
            _ => Self::Unknown,
        }
    }

    /// Returns the [`Bucket`] a test with this [`Status`] is counted in.
    #[must_use]
    pub const fn bucket(self) -> Bucket {
        classify(self)
    }
}

impl FromStr for Status {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

/// One of the six mutually exclusive outcome categories a finished test is
/// counted in.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum Bucket {
    /// Tests landing in no other bucket.
    #[display("tests")]
    Tests,

    /// Failed assertions.
    #[display("failures")]
    Failures,

    /// Unexpected errors.
    #[display("errors")]
    Errors,

    /// Incomplete tests.
    #[display("incompletes")]
    Incompletes,

    /// Skipped tests.
    #[display("skips")]
    Skips,

    /// Risky tests.
    #[display("risky")]
    Risky,
}

impl Bucket {
    /// All the [`Bucket`]s, in the order summaries print them.
    pub const ALL: [Self; 6] = [
        Self::Tests,
        Self::Failures,
        Self::Errors,
        Self::Incompletes,
        Self::Skips,
        Self::Risky,
    ];

    /// Label of this [`Bucket`] in a run summary line.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Tests => "Tests",
            Self::Failures => "Failures",
            Self::Errors => "Errors",
            Self::Incompletes => "Incomplete",
            Self::Skips => "Skipped",
            Self::Risky => "Risky",
        }
    }

    /// Indicates whether tests in this [`Bucket`] turn a run into a `KO` one.
    #[must_use]
    pub const fn is_failing(self) -> bool {
        matches!(self, Self::Failures | Self::Errors)
    }
}

/// Classifies the given [`Status`] into its [`Bucket`].
///
/// Warnings are not a bucket on their own: a test finishing with a warning is
/// counted as a regular one.
#[must_use]
pub const fn classify(status: Status) -> Bucket {
    match status {
        Status::Failure => Bucket::Failures,
        Status::Error => Bucket::Errors,
        Status::Incomplete => Bucket::Incompletes,
        Status::Skipped => Bucket::Skips,
        Status::Risky => Bucket::Risky,
        Status::Passed | Status::Warning | Status::Unknown => Bucket::Tests,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_every_status() {
        assert_eq!(classify(Status::Failure), Bucket::Failures);
        assert_eq!(classify(Status::Error), Bucket::Errors);
        assert_eq!(classify(Status::Incomplete), Bucket::Incompletes);
        assert_eq!(classify(Status::Skipped), Bucket::Skips);
        assert_eq!(classify(Status::Risky), Bucket::Risky);
        assert_eq!(classify(Status::Passed), Bucket::Tests);
        assert_eq!(classify(Status::Warning), Bucket::Tests);
        assert_eq!(classify(Status::Unknown), Bucket::Tests);
    }

    #[test]
    fn names_are_case_insensitive() {
        assert_eq!(Status::from_name("FAILURE"), Status::Failure);
        assert_eq!(Status::from_name("Skipped"), Status::Skipped);
        assert_eq!(Status::from_name(" risky "), Status::Risky);
        assert_eq!("Error".parse::<Status>(), Ok(Status::Error));
    }

    #[test]
    fn unrecognized_statuses_degrade_to_tests() {
        assert_eq!(Status::from_name("exploded"), Status::Unknown);
        assert_eq!(Status::from_name("").bucket(), Bucket::Tests);
        assert_eq!(Status::from_code(42).bucket(), Bucket::Tests);
    }

    #[test]
    fn numeric_codes_roundtrip_with_all() {
        for (code, status) in (-1..).zip(Status::ALL) {
            assert_eq!(Status::from_code(code), status);
        }
    }

    #[test]
    fn only_failures_and_errors_are_failing() {
        let failing: Vec<_> =
            Bucket::ALL.into_iter().filter(|b| b.is_failing()).collect();
        assert_eq!(failing, [Bucket::Failures, Bucket::Errors]);
    }

    #[test]
    fn labels_match_summary_wording() {
        assert_eq!(Bucket::Incompletes.label(), "Incomplete");
        assert_eq!(Bucket::Skips.label(), "Skipped");
        assert_eq!(Bucket::Skips.to_string(), "skips");
    }
}
