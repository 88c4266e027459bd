// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Test run listener projecting the lifecycle events of a nested test run into
//! structured log records.
//!
//! A host test runner feeds [`Event`]s into a [`Listener`], which keeps track
//! of the active suites, accumulates per-suite [`Stats`] and hands a
//! [`Record`] for every [`Event`] to its [`Logger`]. Once the outermost suite
//! ends, a final [`Summary`] line is logged.
//!
//! ```rust
//! use suite_logbook::{
//!     logger::Memory, Event, EventSink as _, Level, Listener, Outcome, Status,
//! };
//!
//! let mut listener = Listener::new(Memory::new());
//! listener.handle_all([
//!     Event::suite_started("Root", 2),
//!     Event::test_finished("testOne", Outcome::passed(3)),
//!     Event::test_finished("testTwo", Outcome::new(Status::Skipped)),
//!     Event::suite_finished("Root"),
//! ])?;
//!
//! let summary = listener.logger().last().unwrap();
//! assert_eq!(summary.level, Level::Notice);
//! assert_eq!(
//!     summary.message,
//!     "Results OK. Tests: 2, Assertions: 3, Skipped: 1",
//! );
//! # Ok::<_, suite_logbook::Error>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod cli;
pub mod config;
pub mod error;
pub mod event;
pub mod listener;
pub mod logger;
pub mod outcome;
pub mod projector;
pub mod replay;
pub mod stats;
pub mod summary;
pub mod tracker;

#[doc(inline)]
pub use self::{
    config::{Coloring, Config},
    error::{Error, ReplayError, Result},
    event::{Event, Fault, FaultKind, Outcome, Suite, Test},
    listener::{EventSink, Listener, State},
    logger::{Level, Logger, Record, Tracing},
    outcome::{classify, Bucket, Status},
    replay::replay,
    stats::{Stats, SuiteRecord},
    summary::{Summary, Verdict},
    tracker::SuiteStack,
};
