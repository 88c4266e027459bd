// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [`Logger`] handing every [`Record`] to several others.

use crate::logger::{Logger, Record};

/// [`Logger`] forwarding each [`Record`] to all of its [`Logger`]s, in the
/// order they were added.
#[derive(Default)]
pub struct Fanout {
    loggers: Vec<Box<dyn Logger>>,
}

impl Fanout {
    /// Creates a new [`Fanout`] without any [`Logger`]s.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the given [`Logger`] to this [`Fanout`].
    #[must_use]
    pub fn with(mut self, logger: impl Logger + 'static) -> Self {
        self.push(logger);
        self
    }

    /// Adds the given [`Logger`] to this [`Fanout`].
    pub fn push(&mut self, logger: impl Logger + 'static) {
        self.loggers.push(Box::new(logger));
    }

    /// Returns the number of [`Logger`]s of this [`Fanout`].
    #[must_use]
    pub fn len(&self) -> usize {
        self.loggers.len()
    }

    /// Indicates whether this [`Fanout`] has no [`Logger`]s.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.loggers.is_empty()
    }
}

impl std::fmt::Debug for Fanout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fanout")
            .field("loggers", &self.loggers.len())
            .finish()
    }
}

impl Logger for Fanout {
    fn log(&mut self, record: Record) {
        if let Some((last, rest)) = self.loggers.split_last_mut() {
            for logger in rest {
                logger.log(record.clone());
            }
            last.log(record);
        }
    }
}
