// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Tracking of started and ended suites of a run.

use crate::error::{Error, Result};

/// Tracker of suite nesting during a single run.
///
/// Keeps an append-only history of started suite names (in start order) along
/// with the number of suite ends seen, so `ended <= started` holds at all
/// times and their difference is the current nesting depth. Additionally, it
/// keeps a LIFO of the suites still active, so the innermost suite is always
/// the deepest one that hasn't ended yet, even when sibling suites follow one
/// another.
#[derive(Clone, Debug, Default)]
pub struct SuiteStack {
    /// Names of all the started suites, in start order.
    history: Vec<String>,

    /// Indices into `history` of the suites not ended yet.
    active: Vec<usize>,

    /// Number of suite ends seen.
    ended: usize,
}

impl SuiteStack {
    /// Creates a new empty [`SuiteStack`].
    #[must_use]
    pub const fn new() -> Self {
        Self { history: Vec::new(), active: Vec::new(), ended: 0 }
    }

    /// Records a start of the suite with the given `name`.
    pub fn start(&mut self, name: impl Into<String>) {
        self.active.push(self.history.len());
        self.history.push(name.into());
    }

    /// Records an end of the innermost active suite.
    ///
    /// Returns `true` if this end completes the run, i.e. the outermost suite
    /// has ended.
    ///
    /// # Errors
    ///
    /// With [`Error::EmptyRun`] if there is no active suite to end.
    pub fn finish(&mut self) -> Result<bool> {
        _ = self.active.pop().ok_or(Error::EmptyRun)?;
        self.ended += 1;
        Ok(self.is_complete())
    }

    /// Returns the current nesting depth.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.history.len() - self.ended
    }

    /// Returns the number of suites started so far.
    #[must_use]
    pub fn started(&self) -> usize {
        self.history.len()
    }

    /// Returns the number of suites ended so far.
    #[must_use]
    pub const fn ended(&self) -> usize {
        self.ended
    }

    /// Indicates whether no suite has been started yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Indicates whether at least one suite has been started, and all of them
    /// have ended.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.history.is_empty() && self.ended == self.history.len()
    }

    /// Returns the name of the first (outermost) suite of the run.
    ///
    /// # Errors
    ///
    /// With [`Error::EmptyRun`] if no suite has been started.
    pub fn top_level(&self) -> Result<&str> {
        self.history.first().map(String::as_str).ok_or(Error::EmptyRun)
    }

    /// Returns the name of the deepest suite that hasn't ended yet.
    ///
    /// # Errors
    ///
    /// With [`Error::EmptyRun`] if there is no active suite.
    pub fn innermost(&self) -> Result<&str> {
        self.active
            .last()
            .map(|&idx| self.history[idx].as_str())
            .ok_or(Error::EmptyRun)
    }

    /// Returns names of all the started suites, in start order.
    pub fn history(&self) -> impl Iterator<Item = &str> {
        self.history.iter().map(String::as_str)
    }

    /// Forgets everything, so a new run may be tracked.
    pub fn reset(&mut self) {
        self.history.clear();
        self.active.clear();
        self.ended = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_stack_has_no_suites() {
        let stack = SuiteStack::new();
        assert_eq!(stack.depth(), 0);
        assert!(stack.is_empty());
        assert!(!stack.is_complete());
        assert!(stack.top_level().unwrap_err().is_empty_run());
        assert!(stack.innermost().unwrap_err().is_empty_run());
    }

    #[test]
    fn nesting_tracks_depth_and_names() {
        let mut stack = SuiteStack::new();
        stack.start("Root");
        stack.start("Child");
        stack.start("Leaf");

        assert_eq!(stack.depth(), 3);
        assert_eq!(stack.top_level().unwrap(), "Root");
        assert_eq!(stack.innermost().unwrap(), "Leaf");

        assert!(!stack.finish().unwrap());
        assert_eq!(stack.innermost().unwrap(), "Child");
        assert!(!stack.finish().unwrap());
        assert_eq!(stack.innermost().unwrap(), "Root");
        assert!(stack.finish().unwrap());

        assert_eq!(stack.depth(), 0);
        assert_eq!(stack.ended(), stack.started());
        assert!(stack.is_complete());
        assert_eq!(stack.top_level().unwrap(), "Root");
    }

    #[test]
    fn sibling_suites_do_not_shadow_parent() {
        let mut stack = SuiteStack::new();
        stack.start("Root");
        stack.start("First");
        _ = stack.finish().unwrap();
        stack.start("Second");
        _ = stack.finish().unwrap();

        assert_eq!(stack.innermost().unwrap(), "Root");
        assert_eq!(stack.depth(), 1);
        assert_eq!(
            stack.history().collect::<Vec<_>>(),
            ["Root", "First", "Second"],
        );
    }

    #[test]
    fn finishing_without_active_suite_fails() {
        let mut stack = SuiteStack::new();
        assert!(stack.finish().unwrap_err().is_empty_run());

        stack.start("Root");
        assert!(stack.finish().unwrap());
        assert!(stack.finish().unwrap_err().is_empty_run());
        assert_eq!(stack.ended(), 1);
    }

    #[test]
    fn reset_forgets_everything() {
        let mut stack = SuiteStack::new();
        stack.start("Root");
        _ = stack.finish().unwrap();
        stack.reset();

        assert!(stack.is_empty());
        assert_eq!(stack.ended(), 0);
    }
}
