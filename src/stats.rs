// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Per-suite statistics collected during a run.

use derive_more::with_trait::Deref;
use linked_hash_map::LinkedHashMap;
use serde::Serialize;

use crate::outcome::Bucket;

/// Counters of a single suite.
///
/// Every finished test attributed to the suite increments exactly one bucket
/// counter, so [`SuiteRecord::total()`] is the number of tests attributed to
/// it.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct SuiteRecord {
    /// Number of tests landing in no other bucket (passed ones, mostly).
    pub tests: usize,

    /// Number of assertions performed by the attributed tests.
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

impl SuiteRecord {
    /// Creates a new [`SuiteRecord`] with all counts set to zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tests: 0,
            assertions: 0,
            failures: 0,
            errors: 0,
            incompletes: 0,
            skips: 0,
            risky: 0,
        }
    }

    /// Records a finished test counted in the given [`Bucket`].
    pub fn record(&mut self, bucket: Bucket, assertions: usize) {
        *self.bucket_mut(bucket) += 1;
        self.assertions += assertions;
    }

    /// Returns the count of the given [`Bucket`].
    #[must_use]
    pub const fn get(&self, bucket: Bucket) -> usize {
        match bucket {
            Bucket::Tests => self.tests,
            Bucket::Failures => self.failures,
            Bucket::Errors => self.errors,
            Bucket::Incompletes => self.incompletes,
            Bucket::Skips => self.skips,
            Bucket::Risky => self.risky,
        }
    }

    fn bucket_mut(&mut self, bucket: Bucket) -> &mut usize {
        match bucket {
            Bucket::Tests => &mut self.tests,
            Bucket::Failures => &mut self.failures,
            Bucket::Errors => &mut self.errors,
            Bucket::Incompletes => &mut self.incompletes,
            Bucket::Skips => &mut self.skips,
            Bucket::Risky => &mut self.risky,
        }
    }

    /// Returns total number of tests attributed to the suite.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.tests
            + self.failures
            + self.errors
            + self.incompletes
            + self.skips
            + self.risky
    }

    /// Returns `true` if there are any failed or errored tests.
    #[must_use]
    pub const fn has_failures(&self) -> bool {
        self.failures + self.errors > 0
    }
}

/// Statistics table of a run: [`SuiteRecord`]s keyed by suite name, in the
/// order suites have been started.
#[derive(Clone, Debug, Default, Deref)]
pub struct Stats(LinkedHashMap<String, SuiteRecord>);

impl Stats {
    /// Creates a new empty [`Stats`] table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a zeroed [`SuiteRecord`] for the suite with the given `name`.
    ///
    /// A suite name seen before has its record reset in place, keeping its
    /// original position.
    pub fn open(&mut self, name: &str) {
        if let Some(record) = self.0.get_mut(name) {
            *record = SuiteRecord::new();
        } else {
            _ = self.0.insert(name.to_owned(), SuiteRecord::new());
        }
    }

    /// Records a finished test counted in the given [`Bucket`] for the suite
    /// with the given `name`.
    ///
    /// Opens the record if it doesn't exist yet.
    pub fn record(&mut self, name: &str, bucket: Bucket, assertions: usize) {
        if let Some(record) = self.0.get_mut(name) {
            record.record(bucket, assertions);
        } else {
            let mut record = SuiteRecord::new();
            record.record(bucket, assertions);
            _ = self.0.insert(name.to_owned(), record);
        }
    }

    /// Returns the [`SuiteRecord`] of the suite with the given `name`, or a
    /// zeroed one if the suite is unknown.
    #[must_use]
    pub fn record_of(&self, name: &str) -> SuiteRecord {
        self.0.get(name).copied().unwrap_or_default()
    }

    /// Removes all the records.
    pub fn clear(&mut self) {
        self.0.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_all_zero() {
        let record = SuiteRecord::new();
        assert_eq!(record, SuiteRecord::default());
        assert_eq!(record.total(), 0);
        assert!(!record.has_failures());
    }

    #[test]
    fn record_increments_exactly_one_bucket() {
        for bucket in Bucket::ALL {
            let mut record = SuiteRecord::new();
            record.record(bucket, 3);

            assert_eq!(record.total(), 1);
            assert_eq!(record.assertions, 3);
            for other in Bucket::ALL {
                let expected = usize::from(other == bucket);
                assert_eq!(record.get(other), expected, "{other} for {bucket}");
            }
        }
    }

    #[test]
    fn has_failures_detects_failures_and_errors() {
        let mut record = SuiteRecord::new();
        record.record(Bucket::Skips, 0);
        record.record(Bucket::Risky, 0);
        assert!(!record.has_failures());

        record.record(Bucket::Errors, 0);
        assert!(record.has_failures());
    }

    #[test]
    fn table_keeps_start_order() {
        let mut stats = Stats::new();
        stats.open("Root");
        stats.open("Child");
        stats.open("Another");

        let names: Vec<_> = stats.keys().map(String::as_str).collect();
        assert_eq!(names, ["Root", "Child", "Another"]);
    }

    #[test]
    fn reopening_resets_record() {
        let mut stats = Stats::new();
        stats.open("Root");
        stats.record("Root", Bucket::Failures, 2);
        assert_eq!(stats.record_of("Root").failures, 1);

        stats.open("Child");
        stats.open("Root");
        assert_eq!(stats.record_of("Root"), SuiteRecord::new());
        assert_eq!(stats.len(), 2);
        assert_eq!(stats.keys().next().map(String::as_str), Some("Root"));
    }

    #[test]
    fn unknown_suite_reads_as_zeroed() {
        let stats = Stats::new();
        assert_eq!(stats.record_of("Nope"), SuiteRecord::new());
    }

    #[test]
    fn serializes_with_bucket_names() {
        let mut record = SuiteRecord::new();
        record.record(Bucket::Incompletes, 1);

        let json = serde_json::to_value(record).unwrap();
        assert_eq!(json["incompletes"], 1);
        assert_eq!(json["assertions"], 1);
        assert_eq!(json["tests"], 0);
    }
}
