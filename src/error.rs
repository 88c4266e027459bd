// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Error types of this crate.

use std::io;

use derive_more::with_trait::{Display, Error as StdError};

/// Top-level error of a [`Listener`].
///
/// Test outcomes are never errors: a failing or unrecognized test status is
/// ordinary data. Errors only signal a host integration misuse or a broken
/// event source.
///
/// [`Listener`]: crate::Listener
#[derive(Debug, Display, StdError)]
pub enum Error {
    /// A suite was queried (by a finished test or suite) while no suite of the
    /// run is active.
    #[display("No test suite has been started in this run")]
    EmptyRun,

    /// Events couldn't be read from a replay source.
    #[display("Replay failed: {_0}")]
    Replay(ReplayError),
}

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Indicates whether this is an [`Error::EmptyRun`].
    #[must_use]
    pub const fn is_empty_run(&self) -> bool {
        matches!(self, Self::EmptyRun)
    }
}

impl From<ReplayError> for Error {
    fn from(err: ReplayError) -> Self {
        Self::Replay(err)
    }
}

/// Errors of reading a JSON-lines event stream.
#[derive(Debug, Display, StdError)]
pub enum ReplayError {
    /// Reading the input failed.
    #[display("I/O error: {_0}")]
    Io(io::Error),

    /// A line isn't a valid event.
    #[display("Malformed event at line {line}: {source}")]
    Decode {
        /// 1-based number of the offending line.
        line: usize,

        /// Underlying decoding error.
        source: serde_json::Error,
    },
}

impl From<io::Error> for ReplayError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn empty_run_display() {
        let err = Error::EmptyRun;
        assert!(err.is_empty_run());
        assert_eq!(
            err.to_string(),
            "No test suite has been started in this run",
        );
        assert!(err.source().is_none());
    }

    #[test]
    fn replay_error_keeps_source_chain() {
        let io_err = io::Error::new(io::ErrorKind::Other, "disk gone");
        let err: Error = ReplayError::from(io_err).into();

        assert!(!err.is_empty_run());
        assert!(err.to_string().contains("Replay failed: I/O error"));

        let source = err.source().expect("replay error has a source");
        assert!(source.to_string().contains("disk gone"));
    }

    #[test]
    fn decode_error_mentions_line() {
        let json_err = serde_json::from_str::<u8>("nope").unwrap_err();
        let err = ReplayError::Decode { line: 7, source: json_err };
        assert!(err.to_string().starts_with("Malformed event at line 7"));
        assert!(err.source().is_some());
    }
}
