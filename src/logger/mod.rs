// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Logging collaborators a [`Listener`] projects its events into.
//!
//! The [`Logger`] trait is the only thing a [`Listener`] requires. This module
//! also provides ready-made [`Logger`]s:
//! - [`Memory`] keeps all the [`Record`]s for later inspection;
//! - [`Console`] prints them to a terminal (or any [`io::Write`]);
//! - [`Tracing`] forwards them as [`tracing`] events;
//! - [`Filtered`] passes only the [`Record`]s accepted by its predicates;
//! - [`Fanout`] hands every [`Record`] to several [`Logger`]s.
//!
//! [`io::Write`]: std::io::Write
//! [`Listener`]: crate::Listener

mod console;
mod fanout;
pub mod filter;
mod memory;
mod record;
mod trace;

pub use self::{
    console::{Console, Styles},
    fanout::Fanout,
    filter::Filtered,
    memory::Memory,
    record::{Context, Level, ParseLevelError, Record},
    trace::Tracing,
};

/// Sink of [`Record`]s.
///
/// Delivery is fire-and-forget: a [`Logger`] failing to output a [`Record`]
/// deals with it on its own, and may silently drop it.
pub trait Logger {
    /// Outputs the given [`Record`].
    fn log(&mut self, record: Record);

    /// Outputs an [`Level::Info`] message with the given `context`.
    fn info(&mut self, message: impl Into<String>, context: Context)
    where
        Self: Sized,
    {
        self.log(Record { level: Level::Info, message: message.into(), context });
    }

    /// Outputs a [`Level::Notice`] message with the given `context`.
    fn notice(&mut self, message: impl Into<String>, context: Context)
    where
        Self: Sized,
    {
        self.log(Record {
            level: Level::Notice,
            message: message.into(),
            context,
        });
    }

    /// Outputs a [`Level::Warning`] message with the given `context`.
    fn warning(&mut self, message: impl Into<String>, context: Context)
    where
        Self: Sized,
    {
        self.log(Record {
            level: Level::Warning,
            message: message.into(),
            context,
        });
    }

    /// Outputs an [`Level::Error`] message with the given `context`.
    fn error(&mut self, message: impl Into<String>, context: Context)
    where
        Self: Sized,
    {
        self.log(Record { level: Level::Error, message: message.into(), context });
    }
}

impl<L: Logger + ?Sized> Logger for &mut L {
    fn log(&mut self, record: Record) {
        (**self).log(record);
    }
}

impl<L: Logger + ?Sized> Logger for Box<L> {
    fn log(&mut self, record: Record) {
        (**self).log(record);
    }
}
