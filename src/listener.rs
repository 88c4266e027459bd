// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Stateful core: attributing test outcomes to suites and projecting events
//! into log records.

use crate::{
    error::Result,
    event::{Event, Fault, FaultKind, Outcome, Suite, SuiteEvent, Test, TestEvent},
    logger::{Logger, Record},
    outcome::classify,
    projector,
    stats::{Stats, SuiteRecord},
    summary::{Summary, Verdict},
    tracker::SuiteStack,
};

/// Consumer of run [`Event`]s.
///
/// Events are expected in a properly nested, depth-first order: every suite
/// start is matched by exactly one suite end, and every test is finished
/// inside its enclosing suite.
pub trait EventSink {
    /// Handles the given [`Event`] to completion.
    ///
    /// # Errors
    ///
    /// With [`Error::EmptyRun`] if the [`Event`] requires an active suite, but
    /// there is none.
    ///
    /// [`Error::EmptyRun`]: crate::Error::EmptyRun
    fn handle(&mut self, event: Event) -> Result<()>;

    /// Handles all the given [`Event`]s in order, stopping at the first
    /// error.
    ///
    /// # Errors
    ///
    /// See [`EventSink::handle()`].
    fn handle_all<I>(&mut self, events: I) -> Result<()>
    where
        I: IntoIterator<Item = Event>,
        Self: Sized,
    {
        events.into_iter().try_for_each(|ev| self.handle(ev))
    }
}

/// Possible states of a [`Listener`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum State {
    /// No suite is active: either nothing has started yet, or the outermost
    /// suite of the run has ended.
    #[default]
    Idle,

    /// At least one suite is active.
    InRun,
}

/// Record processor applied to every [`Record`] before it reaches the
/// [`Logger`].
pub type Processor = Box<dyn Fn(&mut Record)>;

/// Test run listener accumulating per-suite statistics and projecting every
/// [`Event`] into a [`Record`] of its [`Logger`].
///
/// A finished test is always counted in the top-level suite of the run, so
/// its record holds run-wide totals. When the test runs inside a nested suite,
/// it's additionally counted in the innermost active one, unless that suite
/// shares the top-level suite's name. The [`Summary`] is built from separate
/// run-wide counters, so a suite reusing the top-level name can't affect it.
///
/// Once the outermost suite ends, the final [`Summary`] is logged and the
/// [`Listener`] becomes [`State::Idle`] again. Starting another suite then
/// begins a new run, forgetting the previous one.
pub struct Listener<L> {
    /// [`Logger`] the [`Record`]s are handed to.
    logger: L,

    /// [`Processor`]s applied to every [`Record`], in order.
    processors: Vec<Processor>,

    /// Nesting of the run's suites.
    suites: SuiteStack,

    /// Per-suite counters of the run.
    stats: Stats,

    /// Run-wide counters, independent of suite names.
    totals: SuiteRecord,

    /// Current [`State`].
    state: State,

    /// [`Summary`] of the last completed run.
    summary: Option<Summary>,
}

impl<L: std::fmt::Debug> std::fmt::Debug for Listener<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listener")
            .field("logger", &self.logger)
            .field("processors", &self.processors.len())
            .field("suites", &self.suites)
            .field("stats", &self.stats)
            .field("totals", &self.totals)
            .field("state", &self.state)
            .field("summary", &self.summary)
            .finish()
    }
}

impl<L: Logger> EventSink for Listener<L> {
    fn handle(&mut self, event: Event) -> Result<()> {
        match event {
            Event::Suite(suite, SuiteEvent::Started) => {
                self.suite_started(&suite);
                Ok(())
            }
            Event::Suite(suite, SuiteEvent::Finished) => {
                self.suite_finished(&suite.name)
            }
            Event::Test(test, TestEvent::Started) => {
                self.emit(projector::test_started(&test));
                Ok(())
            }
            Event::Test(test, TestEvent::Fault(kind, fault)) => {
                self.test_fault(&test, kind, &fault);
                Ok(())
            }
            Event::Test(test, TestEvent::Finished(outcome)) => {
                self.test_finished(&test, &outcome)
            }
        }
    }
}

impl<L> From<L> for Listener<L> {
    fn from(logger: L) -> Self {
        Self {
            logger,
            processors: Vec::new(),
            suites: SuiteStack::new(),
            stats: Stats::new(),
            totals: SuiteRecord::new(),
            state: State::Idle,
            summary: None,
        }
    }
}

impl<L> Listener<L> {
    /// Creates a new [`Listener`] logging into the given [`Logger`].
    #[must_use]
    pub fn new(logger: L) -> Self {
        Self::from(logger)
    }

    /// Adds a [`Processor`] altering every [`Record`] before it's logged.
    #[must_use]
    pub fn with_processor(
        mut self,
        processor: impl Fn(&mut Record) + 'static,
    ) -> Self {
        self.processors.push(Box::new(processor));
        self
    }

    /// Returns the [`Logger`] of this [`Listener`].
    #[must_use]
    pub const fn logger(&self) -> &L {
        &self.logger
    }

    /// Returns the mutable [`Logger`] of this [`Listener`].
    #[must_use]
    pub fn logger_mut(&mut self) -> &mut L {
        &mut self.logger
    }

    /// Unwraps the [`Logger`] of this [`Listener`].
    #[must_use]
    pub fn into_logger(self) -> L {
        self.logger
    }

    /// Returns the per-suite [`Stats`] of the current (or last) run.
    #[must_use]
    pub const fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Returns the current [`State`].
    #[must_use]
    pub const fn state(&self) -> State {
        self.state
    }

    /// Returns the [`SuiteStack`] of the current (or last) run.
    #[must_use]
    pub const fn suites(&self) -> &SuiteStack {
        &self.suites
    }

    /// Returns the current nesting depth.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.suites.depth()
    }

    /// Returns the run-wide number of assertions so far.
    #[must_use]
    pub const fn assertions(&self) -> usize {
        self.totals.assertions
    }

    /// Returns the run-wide counters of the current (or last) run.
    #[must_use]
    pub const fn totals(&self) -> &SuiteRecord {
        &self.totals
    }

    /// Returns the [`Verdict`] of the last run, if it has completed.
    ///
    /// [`None`] while a run is in progress, even if an earlier run has
    /// completed.
    #[must_use]
    pub fn verdict(&self) -> Option<Verdict> {
        match self.state {
            State::InRun => None,
            State::Idle => self.summary.as_ref().map(Summary::verdict),
        }
    }

    /// Returns the [`Summary`] of the last completed run, if any.
    #[must_use]
    pub const fn summary(&self) -> Option<&Summary> {
        self.summary.as_ref()
    }
}

impl<L: Logger> Listener<L> {
    fn emit(&mut self, mut record: Record) {
        for processor in &self.processors {
            processor(&mut record);
        }
        self.logger.log(record);
    }

    fn suite_started(&mut self, suite: &Suite) {
        if self.suites.is_complete() {
            tracing::debug!(
                suites = self.suites.started(),
                "previous run complete, starting a new one",
            );
            self.suites.reset();
            self.stats.clear();
            self.totals = SuiteRecord::new();
        }

        let reuses_top_level = self.state == State::InRun
            && self.suites.top_level().is_ok_and(|top| top == suite.name);
        if reuses_top_level {
            tracing::debug!(
                suite = %suite.name,
                "nested suite reuses the top-level name, keeping its record",
            );
        } else {
            self.stats.open(&suite.name);
        }

        self.suites.start(suite.name.as_str());
        self.state = State::InRun;
        tracing::trace!(
            suite = %suite.name,
            depth = self.suites.depth(),
            "suite started",
        );

        self.emit(projector::suite_started(suite));
    }

    fn test_finished(&mut self, test: &Test, outcome: &Outcome) -> Result<()> {
        let top_level = self.suites.top_level()?.to_owned();
        let innermost = self.suites.innermost()?.to_owned();

        let bucket = classify(outcome.status);
        let assertions = outcome.assertions.unwrap_or_default();

        if self.suites.depth() > 1 && innermost != top_level {
            self.stats.record(&innermost, bucket, assertions);
        }
        self.stats.record(&top_level, bucket, assertions);
        self.totals.record(bucket, assertions);

        self.emit(projector::test_finished(test, outcome));
        Ok(())
    }

    fn test_fault(&mut self, test: &Test, kind: FaultKind, fault: &Fault) {
        self.emit(projector::test_fault(test, kind, fault));
    }

    fn suite_finished(&mut self, name: &str) -> Result<()> {
        let innermost = self.suites.innermost()?;
        if innermost != name {
            tracing::warn!(
                expected = %innermost,
                actual = %name,
                "suite ended out of order",
            );
        }
        let is_outermost = self.suites.finish()?;
        tracing::trace!(
            suite = %name,
            depth = self.suites.depth(),
            "suite finished",
        );

        let counters = self.stats.record_of(name);
        self.emit(projector::suite_finished(name, &counters));

        if is_outermost {
            let summary = Summary::new(&self.totals, self.totals.assertions);
            tracing::debug!(%summary, "run complete");

            self.emit(projector::summary(&summary));
            self.summary = Some(summary);
            self.state = State::Idle;
        }
        Ok(())
    }
}
