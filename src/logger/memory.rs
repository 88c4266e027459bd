// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! In-memory [`Logger`].

use crate::logger::{Level, Logger, Record};

/// [`Logger`] keeping every [`Record`] in memory, in delivery order.
///
/// Useful for inspecting the output of a [`Listener`] in tests.
///
/// [`Listener`]: crate::Listener
#[derive(Clone, Debug, Default)]
pub struct Memory {
    records: Vec<Record>,
}

impl Memory {
    /// Creates a new empty [`Memory`] [`Logger`].
    #[must_use]
    pub const fn new() -> Self {
        Self { records: Vec::new() }
    }

    /// Returns all the [`Record`]s logged so far.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Takes all the [`Record`]s logged so far, leaving this [`Logger`] empty.
    pub fn take(&mut self) -> Vec<Record> {
        std::mem::take(&mut self.records)
    }

    /// Indicates whether a [`Record`] of the given [`Level`] has been logged
    /// with a message containing `needle`.
    #[must_use]
    pub fn has_record_that_contains(&self, needle: &str, level: Level) -> bool {
        self.records
            .iter()
            .any(|r| r.level == level && r.message.contains(needle))
    }

    /// Returns the [`Record`]s having the given `operation` context field.
    pub fn with_operation<'s>(
        &'s self,
        operation: &'s str,
    ) -> impl Iterator<Item = &'s Record> + 's {
        self.records
            .iter()
            .filter(move |r| r.operation() == Some(operation))
    }

    /// Returns the last logged [`Record`], if any.
    #[must_use]
    pub fn last(&self) -> Option<&Record> {
        self.records.last()
    }
}

impl Logger for Memory {
    fn log(&mut self, record: Record) {
        self.records.push(record);
    }
}
