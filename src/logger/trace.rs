// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [`tracing`] integration.

use serde_json::Value;

use crate::logger::{Level, Logger, Record};

/// [`Logger`] forwarding [`Record`]s as [`tracing`] events.
///
/// [`tracing`] has no notice severity, so [`Level::Notice`] records become
/// `INFO` events marked with a `notice = true` field, and everything above
/// [`Level::Error`] becomes an `ERROR` event. The `operation` context field is
/// recorded on its own, while the whole context is recorded as JSON.
#[derive(Clone, Copy, Debug, Default)]
pub struct Tracing;

impl Tracing {
    /// Creates a new [`Tracing`] [`Logger`].
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Returns the [`tracing::Level`] the given [`Level`] is emitted at.
    #[must_use]
    pub const fn level_of(level: Level) -> tracing::Level {
        match level {
            Level::Debug => tracing::Level::DEBUG,
            Level::Info | Level::Notice => tracing::Level::INFO,
            Level::Warning => tracing::Level::WARN,
            Level::Error
            | Level::Critical
            | Level::Alert
            | Level::Emergency => tracing::Level::ERROR,
        }
    }
}

impl Logger for Tracing {
    fn log(&mut self, record: Record) {
        let operation =
            record.operation().map(str::to_owned).unwrap_or_default();
        let context = Value::Object(record.context).to_string();
        let message = record.message;

        match record.level {
            Level::Debug => tracing::debug!(
                target: "suite_logbook",
                operation = %operation, context = %context, "{message}"
            ),
            Level::Info => tracing::info!(
                target: "suite_logbook",
                operation = %operation, context = %context, "{message}"
            ),
            Level::Notice => tracing::info!(
                target: "suite_logbook",
                notice = true,
                operation = %operation,
                context = %context,
                "{message}"
            ),
            Level::Warning => tracing::warn!(
                target: "suite_logbook",
                operation = %operation, context = %context, "{message}"
            ),
            Level::Error
            | Level::Critical
            | Level::Alert
            | Level::Emergency => tracing::error!(
                target: "suite_logbook",
                severity = %record.level,
                operation = %operation,
                context = %context,
                "{message}"
            ),
        }
    }
}
