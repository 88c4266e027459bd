// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! JSON-lines event source, feeding recorded runs into an [`EventSink`].
//!
//! Every non-blank line holds a single JSON object tagged by its `event`
//! field:
//!
//! ```json
//! {"event":"startSuite","name":"Root","count":2}
//! {"event":"startTest","name":"testOne"}
//! {"event":"failure","name":"testOne","reason":"1 != 2"}
//! {"event":"endTest","name":"testOne","status":"failure","assertions":1}
//! {"event":"endSuite","name":"Root"}
//! ```
//!
//! A test's `status` may be given either by name or by its numeric code (see
//! [`Status::from_code()`]). A missing `status` means the test passed.

use std::io::BufRead;

use serde::{Deserialize, Serialize};

use crate::{
    error::{ReplayError, Result},
    event::{Event, Fault, FaultKind, Outcome, Test},
    listener::EventSink,
    outcome::Status,
};

/// Single line of a JSON-lines event stream.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum Line {
    /// Suite started.
    StartSuite {
        /// Name of the suite.
        name: String,

        /// Number of tests the suite declares.
        #[serde(default)]
        count: usize,
    },

    /// Suite ended.
    EndSuite {
        /// Name of the suite.
        name: String,
    },

    /// Test started.
    StartTest(TestLine),

    /// Test ended.
    EndTest {
        /// Name of the test.
        name: String,

        /// Human-readable description of the test.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,

        /// Terminal status of the test.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        status: Option<StatusLine>,

        /// Number of assertions performed.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        assertions: Option<usize>,

        /// Captured output of the test.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        output: Option<String>,
    },

    /// Assertion failed.
    Failure(FaultLine),

    /// Unexpected error occurred.
    Error(FaultLine),

    /// Warning raised.
    Warning(FaultLine),

    /// Test is incomplete.
    Incomplete(FaultLine),

    /// Test is risky.
    Risky(FaultLine),

    /// Test was skipped.
    Skipped(FaultLine),
}

/// Test identity inside a [`Line`].
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct TestLine {
    /// Name of the test.
    pub name: String,

    /// Human-readable description of the test.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<TestLine> for Test {
    fn from(line: TestLine) -> Self {
        Self { name: line.name, description: line.description }
    }
}

/// Fault report inside a [`Line`].
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct FaultLine {
    /// Name of the test.
    pub name: String,

    /// Human-readable description of the test.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Reason of the fault.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    /// Stack trace of the fault.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace: Option<String>,
}

impl FaultLine {
    fn into_event(self, kind: FaultKind) -> Event {
        let test = Test { name: self.name, description: self.description };
        let fault = Fault { reason: self.reason, trace: self.trace };
        Event::test_fault(test, kind, fault)
    }
}

/// Test status given either by its numeric code or by its name.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StatusLine {
    /// Numeric status code.
    Code(i64),

    /// Status name.
    Name(String),
}

impl From<StatusLine> for Status {
    fn from(line: StatusLine) -> Self {
        match line {
            StatusLine::Code(code) => Self::from_code(code),
            StatusLine::Name(name) => Self::from_name(&name),
        }
    }
}

impl From<Line> for Event {
    fn from(line: Line) -> Self {
        match line {
            Line::StartSuite { name, count } => Self::suite_started(name, count),
            Line::EndSuite { name } => Self::suite_finished(name),
            Line::StartTest(test) => Self::test_started(test),
            Line::EndTest { name, description, status, assertions, output } => {
                let test = Test { name, description };
                let outcome = Outcome {
                    status: status.map(Status::from).unwrap_or_default(),
                    assertions,
                    output,
                };
                Self::test_finished(test, outcome)
            }
            Line::Failure(f) => f.into_event(FaultKind::Failure),
            Line::Error(f) => f.into_event(FaultKind::Error),
            Line::Warning(f) => f.into_event(FaultKind::Warning),
            Line::Incomplete(f) => f.into_event(FaultKind::Incomplete),
            Line::Risky(f) => f.into_event(FaultKind::Risky),
            Line::Skipped(f) => f.into_event(FaultKind::Skipped),
        }
    }
}

/// Parses a single `line` of a JSON-lines stream into an [`Event`].
///
/// # Errors
///
/// With [`ReplayError::Decode`] if the `line` isn't a valid [`Line`].
pub fn parse(
    line: &str,
    number: usize,
) -> std::result::Result<Event, ReplayError> {
    serde_json::from_str::<Line>(line)
        .map(Event::from)
        .map_err(|source| ReplayError::Decode { line: number, source })
}

/// Reads [`Event`]s from the given JSON-lines `input` and feeds them into the
/// `sink`, returning the number of handled [`Event`]s.
///
/// Blank lines are skipped.
///
/// # Errors
///
/// - With [`Error::Replay`] if reading or decoding the `input` fails.
/// - With any error the `sink` returns.
///
/// [`Error::Replay`]: crate::Error::Replay
pub fn replay<R, S>(input: R, sink: &mut S) -> Result<usize>
where
    R: BufRead,
    S: EventSink + ?Sized,
{
    let mut handled = 0;
    for (i, line) in input.lines().enumerate() {
        let line = line.map_err(ReplayError::from)?;
        if line.trim().is_empty() {
            continue;
        }
        let event = parse(&line, i + 1)?;
        tracing::trace!(line = i + 1, ?event, "replaying");
        sink.handle(event)?;
        handled += 1;
    }
    Ok(handled)
}
