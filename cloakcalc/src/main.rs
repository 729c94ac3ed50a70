// Copyright (C) 2024-2025 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    //clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

#[macro_use]
extern crate tracing;

use std::process;

use anyhow::{Context, Result};
use cloakcalc::{gui, replay};
use cloakcalc_common::{args::Args, config::Config};
use cloakcalc_engine::{PatternMatcher, Session};
use tracing::Level;
use tracing_subscriber::{
    filter::Directive, fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

fn quiet(target: &str) -> Option<Directive> {
    format!("{target}=off").parse().ok()
}

fn init_logging() {
    // use env for filtering
    // example
    // RUST_LOG=none,cloakcalc=debug cargo run

    let env_filter = ["winit", "wgpu", "eframe", "egui"]
        .into_iter()
        .filter_map(quiet)
        .fold(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
            EnvFilter::add_directive,
        );

    let subscriber = tracing_subscriber::registry().with(env_filter);
    let fmt_layer = fmt::layer()
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact();
    subscriber.with(fmt_layer).init();
}

fn run(args: &Args) -> Result<()> {
    let config = Config::load(args.config.as_deref()).context("could not load the configuration")?;

    let Some(sequence) = args.replay.as_deref() else {
        return gui::run(&config, args.show_hint).context("failed to run calculator");
    };

    let matcher = PatternMatcher::from_config(&config.patterns)
        .context("the configured key patterns are invalid")?;
    replay::run(Session::new(matcher), sequence, &mut std::io::stdout())
        .with_context(|| format!("could not replay {sequence:?}"))
}

fn main() {
    init_logging();

    trace!("Starting cloakcalc");

    let args = Args::parse(std::env::args()).unwrap_or_else(|_| {
        process::exit(1);
    });

    if let Err(e) = run(&args) {
        error!("{e:#}");
        process::exit(1);
    }
}
