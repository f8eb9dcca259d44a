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

//! Show command - print a playlist's file tracks without copying

use super::{format_duration, load_playlist};
use crate::error::CliError;
use std::path::Path;

/// Print each file track of `list` with the name it would be copied under.
pub fn show(library: &Path, list: &str, rnse: bool) -> Result<(), CliError> {
    let playlist = load_playlist(library, list)?;

    println!("Playlist: {} [{}]", playlist.name, playlist.persistent_key);
    for track in &playlist.tracks {
        let filename = if rnse {
            track.trimmed_filename()
        } else {
            track.full_filename()
        };
        println!(
            "  {}-{:02}  {} - {}  ({})",
            track.disc_number,
            track.track_number,
            track.artist,
            track.name,
            format_duration(track.duration)
        );
        println!("         -> M/{}", filename);
    }
    println!("{} file tracks", playlist.tracks.len());
    Ok(())
}
