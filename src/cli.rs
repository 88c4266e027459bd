// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! CLI options selecting the verbosity and the look of a [`Console`] output.
//!
//! [`Verbosity`] is a [`clap::Args`], so it may be flattened into any
//! [`clap::Parser`] of a host test runner:
//!
//! ```rust
//! use clap::Parser;
//! use suite_logbook::cli;
//!
//! #[derive(Parser)]
//! struct Opts {
//!     #[command(flatten)]
//!     verbosity: cli::Verbosity,
//! }
//!
//! let opts = Opts::parse_from(["runner", "-v"]);
//! assert_eq!(opts.verbosity.level(), suite_logbook::Level::Info);
//! ```
//!
//! [`Console`]: crate::logger::Console

use smart_default::SmartDefault;

use crate::{
    config::{Coloring, Config},
    logger::Level,
};

/// CLI options of a [`Console`] logger.
///
/// [`Console`]: crate::logger::Console
#[derive(Clone, Debug, SmartDefault, clap::Args)]
#[group(skip)]
pub struct Verbosity {
    /// Increases verbosity of an output.
    ///
    /// `-v` additionally outputs test starts and ends, `-vv` outputs
    /// everything.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Outputs everything, same as `-vv`.
    #[arg(long, global = true)]
    pub debug: bool,

    /// Coloring policy for a console output.
    #[arg(
        long,
        value_name = "auto|always|never",
        default_value = "auto",
        global = true
    )]
    #[default(Coloring::Auto)]
    pub color: Coloring,

    /// Prefixes every output line with an RFC 3339 timestamp.
    #[arg(long, global = true)]
    pub timestamps: bool,

    /// Channel name prefixing every output line.
    #[arg(long, value_name = "name", global = true)]
    pub channel: Option<String>,
}

impl Verbosity {
    /// Returns the minimal [`Level`] of the output records.
    #[must_use]
    pub fn level(&self) -> Level {
        if self.debug || self.verbose > 1 {
            Level::Debug
        } else if self.verbose == 1 {
            Level::Info
        } else {
            Level::Notice
        }
    }

    /// Builds a [`Config`] out of these options.
    #[must_use]
    pub fn config(&self) -> Config {
        let mut config = Config::new()
            .level(self.level())
            .timestamps(self.timestamps)
            .coloring(self.color);
        if let Some(channel) = &self.channel {
            config = config.channel(channel.as_str());
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Debug, Parser)]
    struct Opts {
        #[command(flatten)]
        verbosity: Verbosity,
    }

    fn parse(args: &[&str]) -> Verbosity {
        let args = std::iter::once("runner").chain(args.iter().copied());
        Opts::try_parse_from(args).expect("valid args").verbosity
    }

    #[test]
    fn default_is_notice() {
        let v = parse(&[]);
        assert_eq!(v.level(), Level::Notice);
        assert_eq!(v.config(), Config::default());
    }

    #[test]
    fn verbose_flags() {
        assert_eq!(parse(&["-v"]).level(), Level::Info);
        assert_eq!(parse(&["--verbose"]).level(), Level::Info);
        assert_eq!(parse(&["-vv"]).level(), Level::Debug);
        assert_eq!(parse(&["--debug"]).level(), Level::Debug);
    }

    #[test]
    fn builds_config() {
        let config =
            parse(&["--color", "never", "--timestamps", "--channel", "ci"])
                .config();
        assert_eq!(config.coloring, Coloring::Never);
        assert!(config.timestamps);
        assert_eq!(config.channel, "ci");
    }

    #[test]
    fn rejects_unknown_coloring() {
        let res = Opts::try_parse_from(["runner", "--color", "sometimes"]);
        assert!(res.is_err());
    }
}
