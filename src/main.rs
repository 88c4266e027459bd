// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Replays a recorded JSON-lines test run through a [`Listener`].

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use suite_logbook::{
    cli, logger::Console, replay, Listener, Logger, Tracing, Verdict,
};
use tracing_subscriber::{
    filter::LevelFilter, layer::SubscriberExt as _, util::SubscriberInitExt as _,
    Layer as _,
};

/// Replays a recorded test run, logging every event and the final summary.
///
/// Exits with `1` if the run failed, `2` if the input couldn't be replayed,
/// and `3` if the input ended before the outermost suite did.
#[derive(Debug, Parser)]
#[command(name = "suite-logbook", version, about)]
struct Opts {
    /// JSON-lines file to replay. Reads STDIN if omitted or `-`.
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Routes log records through `tracing` instead of a plain console.
    #[arg(long)]
    tracing: bool,

    #[command(flatten)]
    verbosity: cli::Verbosity,
}

impl Opts {
    fn open(&self) -> io::Result<Box<dyn BufRead>> {
        Ok(match self.input.as_deref() {
            Some(path) if path.as_os_str() != "-" => {
                Box::new(BufReader::new(File::open(path)?))
            }
            _ => Box::new(io::stdin().lock()),
        })
    }

    fn logger(&self) -> Box<dyn Logger> {
        if self.tracing {
            let filter =
                LevelFilter::from_level(Tracing::level_of(self.verbosity.level()));
            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(io::stderr)
                        .with_filter(filter),
                )
                .init();
            Box::new(Tracing::new())
        } else {
            Box::new(Console::stdout(self.verbosity.config()))
        }
    }
}

fn main() -> ExitCode {
    let opts = Opts::parse();

    let input = match opts.open() {
        Ok(input) => input,
        Err(e) => {
            eprintln!("Failed to open input: {e}");
            return ExitCode::from(2);
        }
    };

    let mut listener = Listener::new(opts.logger());
    if let Err(e) = replay(input, &mut listener) {
        eprintln!("{e}");
        return ExitCode::from(2);
    }

    match listener.verdict() {
        Some(Verdict::Ok) => ExitCode::SUCCESS,
        Some(Verdict::Ko) => ExitCode::FAILURE,
        None => {
            eprintln!(
                "Test run hasn't completed: {} suite(s) still active",
                listener.depth(),
            );
            ExitCode::from(3)
        }
    }
}
