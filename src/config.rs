// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Configuration of the provided [`Logger`]s.
//!
//! [`Logger`]: crate::Logger

use std::str::FromStr;

use smart_default::SmartDefault;

use crate::logger::Level;

/// Possible policies of a [`console`] output coloring.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Coloring {
    /// Letting [`console::colors_enabled()`] to decide, whether output should
    /// be colored.
    Auto,

    /// Forcing of a colored output.
    Always,

    /// Forcing of a non-colored output.
    Never,
}

impl Coloring {
    /// Resolves this [`Coloring`] policy into whether colors should be used.
    #[must_use]
    pub fn enabled(self) -> bool {
        match self {
            Self::Auto => console::colors_enabled(),
            Self::Always => true,
            Self::Never => false,
        }
    }
}

impl FromStr for Coloring {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            _ => Err("possible options: auto, always, never"),
        }
    }
}

/// Configuration of a [`Console`] [`Logger`].
///
/// Initialized once and passed by value afterwards, so nothing about the
/// output format is shared globally.
///
/// [`Console`]: crate::logger::Console
/// [`Logger`]: crate::Logger
#[derive(Clone, Debug, Eq, PartialEq, SmartDefault)]
pub struct Config {
    /// Channel name prefixing every output line.
    #[default("suite-logbook".to_owned())]
    pub channel: String,

    /// Minimal [`Level`] of the output records.
    #[default(Level::Notice)]
    pub level: Level,

    /// Whether to prefix every output line with an RFC 3339 UTC timestamp.
    pub timestamps: bool,

    /// Coloring policy of the output.
    #[default(Coloring::Auto)]
    pub coloring: Coloring,
}

impl Config {
    /// Creates a new default [`Config`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the channel name.
    #[must_use]
    pub fn channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = channel.into();
        self
    }

    /// Sets the minimal [`Level`] of the output records.
    #[must_use]
    pub const fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Enables or disables timestamps.
    #[must_use]
    pub const fn timestamps(mut self, enabled: bool) -> Self {
        self.timestamps = enabled;
        self
    }

    /// Sets the [`Coloring`] policy.
    #[must_use]
    pub const fn coloring(mut self, coloring: Coloring) -> Self {
        self.coloring = coloring;
        self
    }
}
