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

//! Command-line definitions for `plcopy`.

use crate::commands;
use crate::copy::CopyOptions;
use crate::error::CliError;
use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Library location relative to the user's home directory.
pub const DEFAULT_LIBRARY: &str = "Music/iTunes/iTunes Music Library.xml";

/// Where to find the iTunes library.
#[derive(Args, Debug, Clone)]
pub struct LibraryArgs {
    /// Path to the iTunes XML library
    /// [default: ~/Music/iTunes/iTunes Music Library.xml]
    #[arg(long, value_name = "FILE", env = "PLCOPY_LIBRARY")]
    pub library: Option<PathBuf>,
}

impl LibraryArgs {
    /// The library path given on the command line, or the default under the
    /// home directory.
    pub fn resolve(&self) -> Result<PathBuf, CliError> {
        if let Some(path) = &self.library {
            return Ok(path.clone());
        }
        std::env::var_os("HOME")
            .or_else(|| std::env::var_os("USERPROFILE"))
            .map(|home| PathBuf::from(home).join(DEFAULT_LIBRARY))
            .ok_or(CliError::NoLibrary)
    }
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Copy a playlist and its tracks to a destination folder
    ///
    /// Tracks go into an `M` folder under the destination, next to an M3U
    /// playlist for the whole list and, unless disabled, one per album.
    Copy {
        /// Playlist to copy (case-sensitive)
        #[arg(short, long, value_name = "NAME")]
        list: String,

        /// Destination folder
        #[arg(short, long, value_name = "DIR")]
        dest: PathBuf,

        #[command(flatten)]
        library: LibraryArgs,

        /// Respect Audi RNS-E file name limits
        #[arg(long)]
        rnse: bool,

        /// Do not write per-album playlists
        #[arg(long)]
        no_albums: bool,
    },

    /// List the playlists in the library
    Playlists {
        #[command(flatten)]
        library: LibraryArgs,
    },

    /// Show the tracks of a playlist and where they would be copied
    Show {
        /// Playlist to show (case-sensitive)
        #[arg(short, long, value_name = "NAME")]
        list: String,

        #[command(flatten)]
        library: LibraryArgs,

        /// Show names as limited for the Audi RNS-E
        #[arg(long)]
        rnse: bool,
    },
}

impl Commands {
    /// Execute the command.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Copy {
                list,
                dest,
                library,
                rnse,
                no_albums,
            } => {
                let options = CopyOptions {
                    limit_names: rnse,
                    album_playlists: !no_albums,
                };
                commands::copy(&library.resolve()?, &list, &dest, options)
            }
            Commands::Playlists { library } => commands::playlists(&library.resolve()?),
            Commands::Show {
                list,
                library,
                rnse,
            } => commands::show(&library.resolve()?, &list, rnse),
        }
    }
}
