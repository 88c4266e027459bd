// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [`Logger`] passing through only the [`Record`]s its predicates accept.
//!
//! Predicates receive the [`Record`] and the [`Level`] of the [`Filtered`]
//! logger, so the same predicate may be reused on loggers of different
//! levels.

use std::fmt;

use lazy_regex::regex_is_match;
use regex::Regex;

use crate::logger::{Level, Logger, Record};

/// Predicate deciding whether a [`Record`] is forwarded by a [`Filtered`]
/// [`Logger`].
pub type Predicate = Box<dyn Fn(&Record, Level) -> bool>;

/// [`Logger`] wrapper forwarding a [`Record`] only when all of its predicates
/// accept it.
///
/// Without predicates every [`Record`] is forwarded.
pub struct Filtered<L> {
    inner: L,
    level: Level,
    predicates: Vec<Predicate>,
}

impl<L> Filtered<L> {
    /// Wraps the given [`Logger`], considering it being of the given [`Level`].
    #[must_use]
    pub fn new(inner: L, level: Level) -> Self {
        Self { inner, level, predicates: Vec::new() }
    }

    /// Adds the given predicate.
    #[must_use]
    pub fn with(
        mut self,
        predicate: impl Fn(&Record, Level) -> bool + 'static,
    ) -> Self {
        self.predicates.push(Box::new(predicate));
        self
    }

    /// Indicates whether the given [`Record`] passes all the predicates.
    #[must_use]
    pub fn is_handling(&self, record: &Record) -> bool {
        self.predicates.iter().all(|p| p(record, self.level))
    }

    /// Returns the wrapped [`Logger`].
    #[must_use]
    pub const fn inner(&self) -> &L {
        &self.inner
    }

    /// Unwraps the wrapped [`Logger`].
    #[must_use]
    pub fn into_inner(self) -> L {
        self.inner
    }
}

impl<L: fmt::Debug> fmt::Debug for Filtered<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filtered")
            .field("inner", &self.inner)
            .field("level", &self.level)
            .field("predicates", &self.predicates.len())
            .finish()
    }
}

impl<L: Logger> Logger for Filtered<L> {
    fn log(&mut self, record: Record) {
        if self.is_handling(&record) {
            self.inner.log(record);
        }
    }
}

/// Accepts [`Record`]s at or above the [`Filtered`] logger's [`Level`].
pub fn at_least() -> impl Fn(&Record, Level) -> bool {
    |record, level| record.level >= level
}

/// Accepts [`Record`]s whose message matches the given [`Regex`].
pub fn message_matches(re: Regex) -> impl Fn(&Record, Level) -> bool {
    move |record, _| re.is_match(&record.message)
}

/// Accepts [`Record`]s above the [`Filtered`] logger's [`Level`], and suite
/// end [`Record`]s exactly at it.
///
/// Handy for desktop notifications: only suite ends and problems get through.
pub fn escalate_suite_end() -> impl Fn(&Record, Level) -> bool {
    |record, level| {
        record.level > level
            || (record.level == level
                && regex_is_match!(r"^TestSuite(.*)ended\.", &record.message))
    }
}

/// Accepts [`Record`]s above the [`Filtered`] logger's [`Level`], and the
/// final run summary.
pub fn results_or_above() -> impl Fn(&Record, Level) -> bool {
    |record, level| {
        record.level > level || regex_is_match!(r"^Results", &record.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::Memory;

    fn messages(filtered: &Filtered<Memory>) -> Vec<&str> {
        filtered
            .inner()
            .records()
            .iter()
            .map(|r| r.message.as_str())
            .collect()
    }

    #[test]
    fn without_predicates_forwards_everything() {
        let mut filtered = Filtered::new(Memory::new(), Level::Error);
        filtered.log(Record::new(Level::Debug, "anything"));
        assert_eq!(messages(&filtered), ["anything"]);
    }

    #[test]
    fn all_predicates_must_accept() {
        let mut filtered = Filtered::new(Memory::new(), Level::Notice)
            .with(at_least())
            .with(message_matches(Regex::new("^Test").unwrap()));

        filtered.log(Record::new(Level::Info, "Test 'a' started."));
        filtered.log(Record::new(Level::Error, "Error while running test 'b'."));
        filtered.log(Record::new(Level::Error, "Test 'c' failed."));

        assert_eq!(messages(&filtered), ["Test 'c' failed."]);
    }

    #[test]
    fn escalates_only_suite_ends_at_level() {
        let mut filtered = Filtered::new(Memory::new(), Level::Notice)
            .with(escalate_suite_end());

        filtered.log(Record::new(Level::Notice, "TestSuite 'A' started with 1 tests."));
        filtered.log(Record::new(Level::Notice, "TestSuite 'A' ended."));
        filtered.log(Record::new(Level::Info, "TestSuite 'B' ended."));
        filtered.log(Record::new(Level::Warning, "Test 'x' is risky."));

        assert_eq!(
            messages(&filtered),
            ["TestSuite 'A' ended.", "Test 'x' is risky."],
        );
    }

    #[test]
    fn results_pass_regardless_of_level() {
        let mut filtered = Filtered::new(Memory::new(), Level::Notice)
            .with(results_or_above());

        filtered.log(Record::new(Level::Notice, "Results OK. Tests: 1, Assertions: 1"));
        filtered.log(Record::new(Level::Notice, "TestSuite 'A' ended."));
        filtered.log(Record::new(Level::Error, "Test 'c' failed."));

        assert_eq!(
            messages(&filtered),
            ["Results OK. Tests: 1, Assertions: 1", "Test 'c' failed."],
        );
        assert!(filtered.is_handling(&Record::new(Level::Alert, "x")));
        assert_eq!(filtered.into_inner().records().len(), 2);
    }
}
