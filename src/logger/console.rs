// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [`Logger`] printing to a terminal.

use std::{borrow::Cow, io, time::SystemTime};

use console::{Style, Term};

use crate::{
    config::{Coloring, Config},
    logger::{Level, Logger, Record},
};

/// [`Style`]s for terminal output.
#[derive(Clone, Debug)]
pub struct Styles {
    /// [`Style`] for rendering successful summaries.
    pub ok: Style,

    /// [`Style`] for rendering warnings.
    pub warn: Style,

    /// [`Style`] for rendering errors and failed summaries.
    pub err: Style,

    /// [`Style`] for rendering __bold__.
    pub bold: Style,

    /// Indicates whether the output should be colored.
    pub is_present: bool,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            ok: Style::new().green(),
            warn: Style::new().yellow(),
            err: Style::new().red(),
            bold: Style::new().bold(),
            is_present: console::colors_enabled(),
        }
    }
}

impl Styles {
    /// Creates new [`Styles`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies the given [`Coloring`] policy to these [`Styles`].
    pub fn apply_coloring(&mut self, coloring: Coloring) {
        self.is_present = coloring.enabled();
        if matches!(coloring, Coloring::Always) {
            self.ok = self.ok.clone().force_styling(true);
            self.warn = self.warn.clone().force_styling(true);
            self.err = self.err.clone().force_styling(true);
            self.bold = self.bold.clone().force_styling(true);
        }
    }

    /// If coloring is enabled, colors `input` with the given [`Style`] or
    /// leaves it "as is" otherwise.
    #[must_use]
    pub fn paint<'a>(
        &self,
        style: &Style,
        input: impl Into<Cow<'a, str>>,
    ) -> Cow<'a, str> {
        if self.is_present {
            style.apply_to(input.into()).to_string().into()
        } else {
            input.into()
        }
    }

    /// Styles the given `message` of a [`Record`].
    ///
    /// Run summaries are painted by their status, other records by their
    /// [`Level`].
    #[must_use]
    pub fn record<'a>(&self, record: &Record, message: String) -> Cow<'a, str> {
        if record.operation() == Some("printFooter") {
            let status = record.context.get("status").and_then(|s| s.as_str());
            let style = if status == Some("OK") { &self.ok } else { &self.err };
            return self.paint(&self.bold, self.paint(style, message));
        }
        match record.level {
            Level::Debug | Level::Info => message.into(),
            Level::Notice => self.paint(&self.bold, message),
            Level::Warning => self.paint(&self.warn, message),
            Level::Error
            | Level::Critical
            | Level::Alert
            | Level::Emergency => self.paint(&self.err, message),
        }
    }
}

/// [`Logger`] printing `<channel> - <message>` lines, skipping [`Record`]s
/// below its minimal [`Level`].
///
/// Placeholders like `{suiteName}` in messages are interpolated from the
/// [`Record`]'s context.
#[derive(Debug)]
pub struct Console<Out: io::Write = Term> {
    output: Out,
    channel: String,
    level: Level,
    timestamps: bool,
    styles: Styles,
}

impl Console {
    /// Creates a new [`Console`] [`Logger`] printing to [`Term::stdout()`].
    #[must_use]
    pub fn stdout(config: Config) -> Self {
        Self::new(Term::stdout(), config)
    }
}

impl<Out: io::Write> Console<Out> {
    /// Creates a new [`Console`] [`Logger`] printing to the given `output`.
    #[must_use]
    pub fn new(output: Out, config: Config) -> Self {
        let mut styles = Styles::new();
        styles.apply_coloring(config.coloring);
        Self {
            output,
            channel: config.channel,
            level: config.level,
            timestamps: config.timestamps,
            styles,
        }
    }

    /// Returns the minimal [`Level`] of the printed [`Record`]s.
    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    /// Returns the underlying output.
    #[must_use]
    pub fn into_inner(self) -> Out {
        self.output
    }

    /// Formats the given [`Record`] into an output line, without a trailing
    /// newline.
    #[must_use]
    pub fn format(&self, record: &Record) -> String {
        let message = self.styles.record(record, record.interpolate());
        if self.timestamps {
            let now = humantime::format_rfc3339_seconds(SystemTime::now());
            format!("[{now}] {} - {message}", self.channel)
        } else {
            format!("{} - {message}", self.channel)
        }
    }
}

impl<Out: io::Write> Logger for Console<Out> {
    fn log(&mut self, record: Record) {
        if record.level < self.level {
            return;
        }
        let line = self.format(&record);
        if let Err(e) = writeln!(self.output, "{line}") {
            tracing::debug!(error = %e, "failed to write log record to console");
        }
    }
}
