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

//! Copy command - transfer a playlist to a destination folder

use super::load_playlist;
use crate::copy::{copy_playlist, CopyOptions};
use crate::error::CliError;
use colored::Colorize;
use std::path::Path;

/// Copy the playlist `list` from `library` into `dest`.
///
/// Prints the library, list and destination, then one `Copying:` line per
/// track as it is copied.
///
/// # Errors
///
/// Returns `Err` if the library cannot be read or parsed, no playlist is
/// called `list`, or any file cannot be copied.
pub fn copy(library: &Path, list: &str, dest: &Path, options: CopyOptions) -> Result<(), CliError> {
    println!("Loading library: {}", library.display());
    println!("Copying list: {}", list);
    println!("Destination: {}", dest.display());

    let playlist = load_playlist(library, list)?;
    let summary = copy_playlist(&playlist, dest, options, |track| {
        println!("Copying: {}", track.name);
    })?;

    println!(
        "{} {} tracks ({} bytes), {} playlists written",
        "✓".green().bold(),
        summary.tracks_copied,
        summary.bytes_copied,
        summary.playlists_written
    );
    Ok(())
}
