// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Key occurrences in the lifecycle of a test run.
//!
//! The top-level enum here is [`Event`]. Each of its variants carries the
//! descriptor of the suite or test it's about, and a sub-event indicating the
//! precise stage of execution.

use crate::outcome::Status;

/// Top-level event of a test run, as delivered by the host runner.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Event {
    /// [`Suite`] event.
    Suite(Suite, SuiteEvent),

    /// [`Test`] event.
    Test(Test, TestEvent),
}

impl Event {
    /// Constructs a [`SuiteEvent::Started`] event.
    #[must_use]
    pub fn suite_started(name: impl Into<String>, test_count: usize) -> Self {
        Self::Suite(Suite::new(name, test_count), SuiteEvent::Started)
    }

    /// Constructs a [`SuiteEvent::Finished`] event.
    #[must_use]
    pub fn suite_finished(name: impl Into<String>) -> Self {
        Self::Suite(Suite::new(name, 0), SuiteEvent::Finished)
    }

    /// Constructs a [`TestEvent::Started`] event.
    #[must_use]
    pub fn test_started(test: impl Into<Test>) -> Self {
        Self::Test(test.into(), TestEvent::Started)
    }

    /// Constructs a [`TestEvent::Finished`] event.
    #[must_use]
    pub fn test_finished(test: impl Into<Test>, outcome: Outcome) -> Self {
        Self::Test(test.into(), TestEvent::Finished(outcome))
    }

    /// Constructs a terminal-outcome event of the given [`FaultKind`].
    #[must_use]
    pub fn test_fault(
        test: impl Into<Test>,
        kind: FaultKind,
        fault: Fault,
    ) -> Self {
        Self::Test(test.into(), TestEvent::Fault(kind, fault))
    }
}

/// Descriptor of a test suite.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Suite {
    /// Name of the suite. Not guaranteed to be unique across a run.
    pub name: String,

    /// Number of tests the suite declares, as known at its start.
    pub test_count: usize,
}

impl Suite {
    /// Creates a new [`Suite`] descriptor.
    #[must_use]
    pub fn new(name: impl Into<String>, test_count: usize) -> Self {
        Self { name: name.into(), test_count }
    }
}

/// Event specific to a particular [`Suite`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SuiteEvent {
    /// [`Suite`] execution being started.
    Started,

    /// [`Suite`] execution being finished.
    Finished,
}

/// Descriptor of a single test.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Test {
    /// Name of the test, stable across runs.
    pub name: String,

    /// Human-readable description, usually the fully qualified test path.
    pub description: Option<String>,
}

impl Test {
    /// Creates a new [`Test`] descriptor without a description.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), description: None }
    }

    /// Attaches the given `description` to this [`Test`].
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns the description of this [`Test`], falling back to its name.
    #[must_use]
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or(&self.name)
    }
}

impl From<&str> for Test {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Test {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

/// Event specific to a particular [`Test`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TestEvent {
    /// [`Test`] execution being started.
    Started,

    /// [`Test`] reported a terminal outcome other than passing.
    ///
    /// Always followed by a [`TestEvent::Finished`] of the same [`Test`].
    Fault(FaultKind, Fault),

    /// [`Test`] execution being finished.
    Finished(Outcome),
}

/// Kind of a non-passing terminal outcome.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum FaultKind {
    /// An assertion failed.
    Failure,

    /// An unexpected error occurred.
    Error,

    /// A warning was raised.
    Warning,

    /// The test is incomplete.
    Incomplete,

    /// The test was skipped.
    Skipped,

    /// The test is risky.
    Risky,
}

impl FaultKind {
    /// All the [`FaultKind`]s.
    pub const ALL: [Self; 6] = [
        Self::Failure,
        Self::Error,
        Self::Warning,
        Self::Incomplete,
        Self::Skipped,
        Self::Risky,
    ];

    /// Returns the [`Status`] a test reporting this [`FaultKind`] finishes
    /// with.
    #[must_use]
    pub const fn status(self) -> Status {
        match self {
            Self::Failure => Status::Failure,
            Self::Error => Status::Error,
            Self::Warning => Status::Warning,
            Self::Incomplete => Status::Incomplete,
            Self::Skipped => Status::Skipped,
            Self::Risky => Status::Risky,
        }
    }
}

/// Reason of a non-passing terminal outcome.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Fault {
    /// Human-readable reason, if any.
    pub reason: Option<String>,

    /// Pre-filtered stack trace, if any.
    pub trace: Option<String>,
}

impl Fault {
    /// Creates a new [`Fault`] with the given `reason`.
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: Some(reason.into()), trace: None }
    }

    /// Attaches the given stack `trace` to this [`Fault`].
    #[must_use]
    pub fn with_trace(mut self, trace: impl Into<String>) -> Self {
        self.trace = Some(trace.into());
        self
    }
}

/// Outcome of a finished [`Test`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Outcome {
    /// Terminal [`Status`] of the test.
    pub status: Status,

    /// Number of assertions performed, if the runner tracks them.
    pub assertions: Option<usize>,

    /// Output the test produced, if captured.
    pub output: Option<String>,
}

impl Outcome {
    /// Creates a new [`Outcome`] with the given [`Status`].
    #[must_use]
    pub fn new(status: Status) -> Self {
        Self { status, ..Self::default() }
    }

    /// Creates a [`Status::Passed`] [`Outcome`] with the given number of
    /// `assertions`.
    #[must_use]
    pub fn passed(assertions: usize) -> Self {
        Self::new(Status::Passed).with_assertions(assertions)
    }

    /// Sets the number of `assertions` of this [`Outcome`].
    #[must_use]
    pub fn with_assertions(mut self, assertions: usize) -> Self {
        self.assertions = Some(assertions);
        self
    }

    /// Sets the captured `output` of this [`Outcome`].
    #[must_use]
    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = Some(output.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn description_falls_back_to_name() {
        let test = Test::new("testPass");
        assert_eq!(test.description(), "testPass");

        let test = test.with_description("Suite::testPass");
        assert_eq!(test.description(), "Suite::testPass");
    }

    #[test]
    fn fault_kinds_map_to_statuses() {
        let statuses: Vec<_> =
            FaultKind::ALL.into_iter().map(FaultKind::status).collect();
        assert_eq!(
            statuses,
            [
                Status::Failure,
                Status::Error,
                Status::Warning,
                Status::Incomplete,
                Status::Skipped,
                Status::Risky,
            ],
        );
    }

    #[test]
    fn constructors_build_expected_events() {
        assert_eq!(
            Event::suite_started("Root", 3),
            Event::Suite(
                Suite { name: "Root".into(), test_count: 3 },
                SuiteEvent::Started,
            ),
        );
        assert_eq!(
            Event::test_finished("t", Outcome::passed(2)),
            Event::Test(
                Test::new("t"),
                TestEvent::Finished(Outcome {
                    status: Status::Passed,
                    assertions: Some(2),
                    output: None,
                }),
            ),
        );
    }
}
