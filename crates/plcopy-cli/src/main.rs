// Dweve plcopy - Property list playlist copier
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! plcopy command line interface

use clap::Parser;
use plcopy_cli::cli::Commands;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// plcopy - copy iTunes playlists to removable media
///
/// # Examples
///
/// ```bash
/// # Copy a playlist to a USB stick, limiting names for the Audi RNS-E
/// plcopy copy --list "Road Trip" --dest /media/usb --rnse
///
/// # List the playlists of a specific library
/// plcopy playlists --library "iTunes Music Library.xml"
/// ```
#[derive(Parser)]
#[command(name = "plcopy")]
#[command(author, version, about = "plcopy - copy iTunes playlists to removable media", long_about = None)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
