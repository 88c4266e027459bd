// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Projection of run events into log [`Record`]s.
//!
//! Field names of the produced contexts are stable, so downstream log
//! consumers may rely on them: every [`Record`] carries `operation` and either
//! `testName` with `testDescription`, or `suiteName` with `testCount`.

use derive_more::with_trait::Display;
use serde_json::Value;

use crate::{
    event::{Fault, FaultKind, Outcome, Suite, Test},
    logger::{Level, Record},
    stats::SuiteRecord,
    summary::Summary,
};

/// Kind of a projected event, recorded as the `operation` context field.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum Operation {
    /// Suite started.
    #[display("startTestSuite")]
    StartTestSuite,

    /// Suite ended.
    #[display("endTestSuite")]
    EndTestSuite,

    /// Test started.
    #[display("startTest")]
    StartTest,

    /// Test ended.
    #[display("endTest")]
    EndTest,

    /// Test failed.
    #[display("addFailure")]
    AddFailure,

    /// Test errored.
    #[display("addError")]
    AddError,

    /// Test raised a warning.
    #[display("addWarning")]
    AddWarning,

    /// Test is incomplete.
    #[display("addIncompleteTest")]
    AddIncompleteTest,

    /// Test is risky.
    #[display("addRiskyTest")]
    AddRiskyTest,

    /// Test was skipped.
    #[display("addSkippedTest")]
    AddSkippedTest,

    /// Final run summary.
    #[display("printFooter")]
    PrintFooter,
}

impl From<FaultKind> for Operation {
    fn from(kind: FaultKind) -> Self {
        match kind {
            FaultKind::Failure => Self::AddFailure,
            FaultKind::Error => Self::AddError,
            FaultKind::Warning => Self::AddWarning,
            FaultKind::Incomplete => Self::AddIncompleteTest,
            FaultKind::Risky => Self::AddRiskyTest,
            FaultKind::Skipped => Self::AddSkippedTest,
        }
    }
}

fn record(level: Level, operation: Operation, message: String) -> Record {
    Record::new(level, message).with("operation", operation.to_string())
}

fn test_record(
    level: Level,
    operation: Operation,
    message: String,
    test: &Test,
) -> Record {
    record(level, operation, message)
        .with("testName", test.name.as_str())
        .with("testDescription", test.description())
}

fn with_counters(record: Record, counters: &SuiteRecord) -> Record {
    record
        .with("testCount", counters.total())
        .with("assertionCount", counters.assertions)
        .with("failureCount", counters.failures)
        .with("errorCount", counters.errors)
        .with("incompleteCount", counters.incompletes)
        .with("skipCount", counters.skips)
        .with("riskyCount", counters.risky)
}

/// Projects a started [`Suite`].
#[must_use]
pub fn suite_started(suite: &Suite) -> Record {
    record(
        Level::Notice,
        Operation::StartTestSuite,
        format!(
            "TestSuite '{}' started with {} tests.",
            suite.name, suite.test_count,
        ),
    )
    .with("suiteName", suite.name.as_str())
    .with("testCount", suite.test_count)
}

/// Projects a finished suite along with its own counters.
#[must_use]
pub fn suite_finished(name: &str, counters: &SuiteRecord) -> Record {
    let record = record(
        Level::Notice,
        Operation::EndTestSuite,
        format!("TestSuite '{name}' ended."),
    )
    .with("suiteName", name);
    with_counters(record, counters)
}

/// Projects a started [`Test`].
#[must_use]
pub fn test_started(test: &Test) -> Record {
    test_record(
        Level::Info,
        Operation::StartTest,
        format!("Test '{}' started.", test.name),
        test,
    )
}

/// Projects a finished [`Test`].
///
/// `assertionCount` is only present when the [`Outcome`] knows it, and
/// `output` only when the test's output was captured.
#[must_use]
pub fn test_finished(test: &Test, outcome: &Outcome) -> Record {
    let mut record = test_record(
        Level::Info,
        Operation::EndTest,
        format!("Test '{}' ended.", test.name),
        test,
    );
    if let Some(count) = outcome.assertions {
        record = record.with("assertionCount", count);
    }
    if let Some(output) = &outcome.output {
        record = record.with("output", output.as_str());
    }
    record
}

/// Projects a non-passing terminal outcome of a [`Test`].
#[must_use]
pub fn test_fault(test: &Test, kind: FaultKind, fault: &Fault) -> Record {
    let name = &test.name;
    let (level, message) = match kind {
        FaultKind::Failure => (Level::Error, format!("Test '{name}' failed.")),
        FaultKind::Error => {
            (Level::Error, format!("Error while running test '{name}'."))
        }
        FaultKind::Warning => {
            (Level::Warning, format!("Warning while running test '{name}'."))
        }
        FaultKind::Incomplete => {
            (Level::Warning, format!("Test '{name}' is incomplete."))
        }
        FaultKind::Risky => (Level::Warning, format!("Test '{name}' is risky.")),
        FaultKind::Skipped => {
            (Level::Warning, format!("Test '{name}' has been skipped."))
        }
    };
    test_record(level, kind.into(), message, test)
        .with("reason", fault.reason.clone().map_or(Value::Null, Value::from))
        .with("trace", fault.trace.clone().map_or(Value::Null, Value::from))
}

/// Projects the final [`Summary`] of a run.
#[must_use]
pub fn summary(summary: &Summary) -> Record {
    record(Level::Notice, Operation::PrintFooter, summary.to_string())
        .with("status", summary.verdict().to_string())
        .with("testCount", summary.tests)
        .with("assertionCount", summary.assertions)
        .with("failureCount", summary.failures)
        .with("errorCount", summary.errors)
        .with("incompleteCount", summary.incompletes)
        .with("skipCount", summary.skips)
        .with("riskyCount", summary.risky)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::outcome::{Bucket, Status};

    #[test]
    fn suite_start_carries_declared_count() {
        let record = suite_started(&Suite::new("Root", 4));

        assert_eq!(record.level, Level::Notice);
        assert_eq!(record.message, "TestSuite 'Root' started with 4 tests.");
        assert_eq!(record.context["operation"], json!("startTestSuite"));
        assert_eq!(record.context["suiteName"], json!("Root"));
        assert_eq!(record.context["testCount"], json!(4));
    }

    #[test]
    fn suite_end_carries_own_counters() {
        let mut counters = SuiteRecord::new();
        counters.record(Bucket::Tests, 2);
        counters.record(Bucket::Skips, 0);

        let record = suite_finished("Child", &counters);

        assert_eq!(record.message, "TestSuite 'Child' ended.");
        assert_eq!(record.context["operation"], json!("endTestSuite"));
        assert_eq!(record.context["testCount"], json!(2));
        assert_eq!(record.context["assertionCount"], json!(2));
        assert_eq!(record.context["skipCount"], json!(1));
        assert_eq!(record.context["failureCount"], json!(0));
    }

    #[test]
    fn test_records_carry_name_and_description() {
        let test = Test::new("testPass").with_description("Suite::testPass");
        let record = test_started(&test);

        assert_eq!(record.level, Level::Info);
        assert_eq!(record.message, "Test 'testPass' started.");
        assert_eq!(record.context["testName"], json!("testPass"));
        assert_eq!(record.context["testDescription"], json!("Suite::testPass"));
    }

    #[test]
    fn assertion_count_only_when_known() {
        let test = Test::new("t");

        let known = test_finished(&test, &Outcome::passed(3).with_output("hi"));
        assert_eq!(known.context["assertionCount"], json!(3));
        assert_eq!(known.context["output"], json!("hi"));

        let unknown = test_finished(&test, &Outcome::new(Status::Passed));
        assert!(!unknown.context.contains_key("assertionCount"));
        assert!(!unknown.context.contains_key("output"));
    }

    #[test]
    fn faults_use_matching_levels_and_messages() {
        let test = Test::new("t");
        let fault = Fault::new("boom").with_trace("at line 3");

        let expected = [
            (FaultKind::Failure, Level::Error, "Test 't' failed.", "addFailure"),
            (
                FaultKind::Error,
                Level::Error,
                "Error while running test 't'.",
                "addError",
            ),
            (
                FaultKind::Warning,
                Level::Warning,
                "Warning while running test 't'.",
                "addWarning",
            ),
            (
                FaultKind::Incomplete,
                Level::Warning,
                "Test 't' is incomplete.",
                "addIncompleteTest",
            ),
            (FaultKind::Risky, Level::Warning, "Test 't' is risky.", "addRiskyTest"),
            (
                FaultKind::Skipped,
                Level::Warning,
                "Test 't' has been skipped.",
                "addSkippedTest",
            ),
        ];
        for (kind, level, message, operation) in expected {
            let record = test_fault(&test, kind, &fault);
            assert_eq!(record.level, level, "{kind:?}");
            assert_eq!(record.message, message);
            assert_eq!(record.operation(), Some(operation));
            assert_eq!(record.context["reason"], json!("boom"));
            assert_eq!(record.context["trace"], json!("at line 3"));
        }
    }

    #[test]
    fn missing_reason_is_null() {
        let record = test_fault(&Test::new("t"), FaultKind::Risky, &Fault::default());
        assert_eq!(record.context["reason"], Value::Null);
        assert_eq!(record.context["trace"], Value::Null);
    }

    #[test]
    fn summary_carries_status_and_counts() {
        let mut top = SuiteRecord::new();
        top.record(Bucket::Tests, 4);
        top.record(Bucket::Failures, 1);

        let record = summary(&Summary::new(&top, 5));

        assert_eq!(record.level, Level::Notice);
        assert_eq!(
            record.message,
            "Results KO. Tests: 2, Assertions: 5, Failures: 1",
        );
        assert_eq!(record.context["operation"], json!("printFooter"));
        assert_eq!(record.context["status"], json!("KO"));
        assert_eq!(record.context["testCount"], json!(2));
        assert_eq!(record.context["assertionCount"], json!(5));
        assert_eq!(record.context["failureCount"], json!(1));
    }
}
