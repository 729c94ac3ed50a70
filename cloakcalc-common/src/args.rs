// Copyright (C) 2024-2025 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

#[derive(Parser, Debug, Default, Clone, PartialEq, Eq)]
#[command(name = "cloakcalc", version, about = "A four-function calculator")]
pub struct Args {
    /// Path to a TOML configuration file. Defaults to the platform config directory.
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
    /// Run the given key sequence without opening a window and print the result.
    #[arg(long = "replay")]
    pub replay: Option<String>,
    /// Show the hint line under the keypad.
    #[arg(long = "show-hint")]
    pub show_hint: bool,
}

impl Args {
    /// Parse the command line.
    ///
    /// # Errors
    /// Will return an error if an argument is unknown or missing its value.
    pub fn parse<It: Iterator<Item = String>>(args: It) -> Result<Self> {
        match <Self as Parser>::try_parse_from(args) {
            Ok(args) => Ok(args),
            Err(e) => {
                // help and version land here too, so let clap print them
                let _ = e.print();
                Err(anyhow::anyhow!("failed to parse arguments: {}", e.kind()))
            }
        }
    }
}
