// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Final summary of a run.

use std::fmt;

use derive_more::with_trait::Display;
use itertools::Itertools as _;

use crate::{outcome::Bucket, stats::SuiteRecord};

/// Overall verdict of a run.
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum Verdict {
    /// No failed or errored tests.
    #[display("OK")]
    Ok,

    /// At least one failed or errored test.
    #[display("KO")]
    Ko,
}

impl Verdict {
    /// Indicates whether this is a [`Verdict::Ok`].
    #[must_use]
    pub const fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }
}

/// Counters of a whole run, rendered as a single summary line, e.g.
/// `Results KO. Tests: 5, Assertions: 9, Failures: 1, Skipped: 2`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Summary {
    /// Number of finished tests.
    pub tests: usize,

    /// Number of assertions performed during the run.
    pub assertions: usize,

    /// Number of failed tests.
    pub failures: usize,

    /// Number of errored tests.
    pub errors: usize,

    /// Number of incomplete tests.
    pub incompletes: usize,

    /// Number of skipped tests.
    pub skips: usize,

    /// Number of risky tests.
    pub risky: usize,
}

impl Summary {
    /// Builds a [`Summary`] from the top-level [`SuiteRecord`] of a run and
    /// the run-wide number of `assertions`.
    #[must_use]
    pub const fn new(top_level: &SuiteRecord, assertions: usize) -> Self {
        Self {
            tests: top_level.total(),
            assertions,
            failures: top_level.failures,
            errors: top_level.errors,
            incompletes: top_level.incompletes,
            skips: top_level.skips,
            risky: top_level.risky,
        }
    }

    /// Returns the [`Verdict`] of the run.
    #[must_use]
    pub const fn verdict(&self) -> Verdict {
        if self.errors + self.failures > 0 {
            Verdict::Ko
        } else {
            Verdict::Ok
        }
    }

    /// Returns the count of the given [`Bucket`], with [`Bucket::Tests`]
    /// standing for all the finished tests.
    #[must_use]
    pub const fn count(&self, bucket: Bucket) -> usize {
        match bucket {
            Bucket::Tests => self.tests,
            Bucket::Failures => self.failures,
            Bucket::Errors => self.errors,
            Bucket::Incompletes => self.incompletes,
            Bucket::Skips => self.skips,
            Bucket::Risky => self.risky,
        }
    }

    /// Formats the counters part of the summary line: tests and assertions
    /// always, other buckets only when non-zero.
    #[must_use]
    pub fn counters(&self) -> String {
        let tests = format!("Tests: {}", self.tests);
        let assertions = format!("Assertions: {}", self.assertions);
        let optional = Bucket::ALL
            .into_iter()
            .skip(1)
            .filter(|&b| self.count(b) > 0)
            .map(|b| format!("{}: {}", b.label(), self.count(b)));

        [tests, assertions].into_iter().chain(optional).join(", ")
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Results {}. {}", self.verdict(), self.counters())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(tests: usize, assertions: usize) -> Summary {
        Summary {
            tests,
            assertions,
            failures: 0,
            errors: 0,
            incompletes: 0,
            skips: 0,
            risky: 0,
        }
    }

    #[test]
    fn omits_zero_buckets() {
        assert_eq!(
            summary(3, 5).to_string(),
            "Results OK. Tests: 3, Assertions: 5",
        );
    }

    #[test]
    fn always_prints_tests_and_assertions() {
        assert_eq!(
            summary(0, 0).to_string(),
            "Results OK. Tests: 0, Assertions: 0",
        );
    }

    #[test]
    fn prints_buckets_in_fixed_order() {
        let s = Summary {
            failures: 1,
            errors: 2,
            incompletes: 3,
            skips: 4,
            risky: 5,
            ..summary(15, 7)
        };
        assert_eq!(
            s.to_string(),
            "Results KO. Tests: 15, Assertions: 7, Failures: 1, Errors: 2, \
             Incomplete: 3, Skipped: 4, Risky: 5",
        );
    }

    #[test]
    fn non_failing_buckets_keep_ok_verdict() {
        let s = Summary { skips: 2, risky: 1, ..summary(4, 1) };
        assert_eq!(s.verdict(), Verdict::Ok);
        assert_eq!(
            s.to_string(),
            "Results OK. Tests: 4, Assertions: 1, Skipped: 2, Risky: 1",
        );
    }

    #[test]
    fn errors_alone_make_ko() {
        let s = Summary { errors: 1, ..summary(1, 0) };
        assert_eq!(s.verdict(), Verdict::Ko);
        assert!(!s.verdict().is_ok());
    }

    #[test]
    fn built_from_top_level_record() {
        let mut record = SuiteRecord::new();
        record.record(Bucket::Tests, 2);
        record.record(Bucket::Skips, 0);
        record.record(Bucket::Failures, 1);

        let s = Summary::new(&record, 3);
        assert_eq!(s.tests, 3);
        assert_eq!(s.skips, 1);
        assert_eq!(s.verdict(), Verdict::Ko);
        assert_eq!(
            s.to_string(),
            "Results KO. Tests: 3, Assertions: 3, Failures: 1, Skipped: 1",
        );
    }
}
