// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Log records handed over to a [`Logger`].
//!
//! [`Logger`]: super::Logger

use std::str::FromStr;

use derive_more::with_trait::{Display, Error};
use lazy_regex::regex_replace_all;
use serde_json::Value;

/// Structured context of a [`Record`].
pub type Context = serde_json::Map<String, Value>;

/// Severity of a [`Record`], ordered the RFC 5424 way.
#[derive(
    Clone, Copy, Debug, Default, Display, Eq, Hash, Ord, PartialEq, PartialOrd,
)]
#[repr(u16)]
pub enum Level {
    /// Detailed debug information.
    #[display("DEBUG")]
    Debug = 100,

    /// Interesting events.
    #[display("INFO")]
    Info = 200,

    /// Normal but significant events.
    #[default]
    #[display("NOTICE")]
    Notice = 250,

    /// Exceptional occurrences that are not errors.
    #[display("WARNING")]
    Warning = 300,

    /// Runtime errors.
    #[display("ERROR")]
    Error = 400,

    /// Critical conditions.
    #[display("CRITICAL")]
    Critical = 500,

    /// Action must be taken immediately.
    #[display("ALERT")]
    Alert = 550,

    /// System is unusable.
    #[display("EMERGENCY")]
    Emergency = 600,
}

impl Level {
    /// All the [`Level`]s, from the least to the most severe.
    pub const ALL: [Self; 8] = [
        Self::Debug,
        Self::Info,
        Self::Notice,
        Self::Warning,
        Self::Error,
        Self::Critical,
        Self::Alert,
        Self::Emergency,
    ];

    /// Returns the numeric code of this [`Level`].
    #[must_use]
    pub const fn code(self) -> u16 {
        self as u16
    }

    /// Returns the [`Level`] having the given numeric `code`, if any.
    #[must_use]
    pub fn from_code(code: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.code() == code)
    }
}

/// Error of parsing an unknown [`Level`] name.
#[derive(Clone, Debug, Display, Error, Eq, PartialEq)]
#[display(
    "unknown log level `{_0}`, possible values: debug, info, notice, \
     warning, error, critical, alert, emergency"
)]
pub struct ParseLevelError(#[error(not(source))] String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|l| l.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseLevelError(s.to_owned()))
    }
}

/// Single log record: a severity [`Level`], a message and its structured
/// [`Context`].
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    /// Severity of this [`Record`].
    pub level: Level,

    /// Human-readable message.
    pub message: String,

    /// Structured context, keyed by field name.
    pub context: Context,
}

impl Record {
    /// Creates a new [`Record`] with an empty [`Context`].
    #[must_use]
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self { level, message: message.into(), context: Context::new() }
    }

    /// Adds the given `key`/`value` pair to the [`Context`] of this
    /// [`Record`].
    #[must_use]
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        _ = self.context.insert(key.to_owned(), value.into());
        self
    }

    /// Returns the `operation` field of the [`Context`], if any.
    #[must_use]
    pub fn operation(&self) -> Option<&str> {
        self.context.get("operation").and_then(Value::as_str)
    }

    /// Returns the message with `{key}` placeholders replaced by the matching
    /// [`Context`] values.
    ///
    /// Strings are inserted as is, other values in their JSON form.
    /// Placeholders without a matching key are left untouched. Substituted
    /// values are never interpolated again.
    #[must_use]
    pub fn interpolate(&self) -> String {
        regex_replace_all!(
            r"\{([A-Za-z0-9_.]+)\}",
            &self.message,
            |placeholder: &str, key: &str| match self.context.get(key) {
                Some(Value::String(s)) => s.clone(),
                Some(v) => v.to_string(),
                None => placeholder.to_owned(),
            },
        )
        .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn levels_follow_rfc5424_codes() {
        let codes: Vec<_> = Level::ALL.into_iter().map(Level::code).collect();
        assert_eq!(codes, [100, 200, 250, 300, 400, 500, 550, 600]);
        assert!(Level::Notice > Level::Info);
        assert!(Level::Warning < Level::Error);
        assert_eq!(Level::from_code(250), Some(Level::Notice));
        assert_eq!(Level::from_code(251), None);
    }

    #[test]
    fn parses_level_names_case_insensitively() {
        assert_eq!("notice".parse(), Ok(Level::Notice));
        assert_eq!("WARNING".parse(), Ok(Level::Warning));
        assert_eq!(" Debug ".parse(), Ok(Level::Debug));

        let err = "loud".parse::<Level>().unwrap_err();
        assert!(err.to_string().contains("unknown log level `loud`"));
    }

    #[test]
    fn interpolates_placeholders() {
        let record = Record::new(
            Level::Info,
            "Suite {suiteName} has {testCount} tests {missing}",
        )
        .with("suiteName", "Root")
        .with("testCount", 3);

        assert_eq!(record.interpolate(), "Suite Root has 3 tests {missing}");
    }

    #[test]
    fn substituted_values_are_not_expanded_again() {
        let record =
            Record::new(Level::Info, "Suite {suiteName} has {testCount}")
                .with("suiteName", "{testCount}")
                .with("testCount", 3);

        assert_eq!(record.interpolate(), "Suite {testCount} has 3");
    }

    #[test]
    fn exposes_operation() {
        let record = Record::new(Level::Info, "x").with("operation", "startTest");
        assert_eq!(record.operation(), Some("startTest"));
        assert_eq!(Record::new(Level::Info, "x").operation(), None);
        assert_eq!(record.context["operation"], json!("startTest"));
    }
}
