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

//! Copy a playlist's tracks to a destination folder with M3U playlists.
//!
//! Layout of the destination:
//!
//! ```text
//! <dest>/
//! ├── <playlist>.M3U
//! ├── <album> - <artist>.M3U     (one per album, optional)
//! └── M/
//!     └── <artist>; <track>.<ext>
//! ```

use crate::filename::{clean_filename, PLAYLIST_NAME_LIMIT};
use crate::library::{Playlist, Track};
use indexmap::IndexMap;
use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Tracks are copied in blocks of this size.
pub const COPY_BLOCK_SIZE: usize = 2 * 1024 * 1024;

/// Folder under the destination holding the copied tracks.
pub const MEDIA_DIR: &str = "M";

const M3U_NEWLINE: &str = "\r\n";

/// Options for [`copy_playlist`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyOptions {
    /// Keep playlist and track file names within the car stereo limits.
    pub limit_names: bool,
    /// Write one extra playlist per album found in the playlist.
    pub album_playlists: bool,
}

impl Default for CopyOptions {
    fn default() -> Self {
        Self {
            limit_names: false,
            album_playlists: true,
        }
    }
}

/// Copy failures.
#[derive(Error, Debug)]
pub enum CopyError {
    #[error("Destination location doesn't exist: {}", .path.display())]
    NoDestination {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create playlist file for: {name}")]
    CreatePlaylist {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to open: {}", .path.display())]
    OpenSource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create: {}", .path.display())]
    CreateDestination {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Counters reported after a copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopySummary {
    pub tracks_copied: usize,
    pub bytes_copied: u64,
    pub playlists_written: usize,
}

/// Copy every track of `playlist` into `dest` and write its playlists.
///
/// `on_track` is called before each track is copied. With album playlists
/// enabled, tracks are copied while the album playlists are written and the
/// full playlist only references them.
pub fn copy_playlist<F>(
    playlist: &Playlist,
    dest: &Path,
    options: CopyOptions,
    on_track: F,
) -> Result<CopySummary, CopyError>
where
    F: FnMut(&Track),
{
    fs::create_dir_all(dest.join(MEDIA_DIR)).map_err(|source| CopyError::NoDestination {
        path: dest.to_path_buf(),
        source,
    })?;

    let mut copier = Copier {
        dest,
        limit_names: options.limit_names,
        on_track,
        buffer: vec![0; COPY_BLOCK_SIZE],
        summary: CopySummary::default(),
    };

    if options.album_playlists {
        for (album, tracks) in group_by_album(&playlist.tracks) {
            copier.save_playlist(&album, &tracks, true)?;
        }
    }

    let all: Vec<&Track> = playlist.tracks.iter().collect();
    copier.save_playlist(&playlist.name, &all, !options.album_playlists)?;

    info!(
        playlist = %playlist.name,
        tracks = copier.summary.tracks_copied,
        bytes = copier.summary.bytes_copied,
        "playlist copied"
    );
    Ok(copier.summary)
}

/// Group tracks by album playlist name in first-seen order, each group
/// sorted by disc then track number.
pub fn group_by_album(tracks: &[Track]) -> IndexMap<String, Vec<&Track>> {
    let mut albums: IndexMap<String, Vec<&Track>> = IndexMap::new();
    for track in tracks {
        albums.entry(track.playlist_name()).or_default().push(track);
    }
    for group in albums.values_mut() {
        group.sort_by_key(|t| (t.disc_number, t.track_number));
    }
    albums
}

/// File name of the M3U playlist called `name`.
pub fn playlist_filename(name: &str, limit_names: bool) -> String {
    let limit = if limit_names {
        PLAYLIST_NAME_LIMIT
    } else {
        usize::MAX
    };
    format!("{}.M3U", clean_filename(name, limit))
}

struct Copier<'a, F> {
    dest: &'a Path,
    limit_names: bool,
    on_track: F,
    buffer: Vec<u8>,
    summary: CopySummary,
}

impl<F: FnMut(&Track)> Copier<'_, F> {
    fn save_playlist(
        &mut self,
        name: &str,
        tracks: &[&Track],
        copy_files: bool,
    ) -> Result<(), CopyError> {
        let path = self.dest.join(playlist_filename(name, self.limit_names));
        debug!(path = %path.display(), tracks = tracks.len(), copy_files, "writing playlist");

        let failed = |source| CopyError::CreatePlaylist {
            name: name.to_string(),
            source,
        };
        let mut writer = BufWriter::new(File::create(&path).map_err(failed)?);
        write!(writer, "#EXTM3U{}", M3U_NEWLINE).map_err(failed)?;

        for &track in tracks {
            let filename = if self.limit_names {
                track.trimmed_filename()
            } else {
                track.full_filename()
            };

            if copy_files {
                (self.on_track)(track);
                let target = self.dest.join(MEDIA_DIR).join(&filename);
                let bytes = self.copy_file(&track.source_path, &target)?;
                self.summary.tracks_copied += 1;
                self.summary.bytes_copied += bytes;
            }

            let entry = format!(
                "{nl}#EXTINF:{},{} - {}{nl}{}/{}{nl}",
                track.duration,
                track.artist,
                track.name,
                MEDIA_DIR,
                filename,
                nl = M3U_NEWLINE
            );
            writer.write_all(ascii(&entry).as_bytes()).map_err(failed)?;
        }

        writer.flush().map_err(failed)?;
        self.summary.playlists_written += 1;
        Ok(())
    }

    fn copy_file(&mut self, source: &Path, target: &Path) -> Result<u64, CopyError> {
        let open_failed = |err| CopyError::OpenSource {
            path: source.to_path_buf(),
            source: err,
        };
        let create_failed = |err| CopyError::CreateDestination {
            path: target.to_path_buf(),
            source: err,
        };

        let mut input = File::open(source).map_err(open_failed)?;
        let mut output = File::create(target).map_err(create_failed)?;

        let mut copied = 0u64;
        loop {
            let read = input.read(&mut self.buffer).map_err(open_failed)?;
            if read == 0 {
                break;
            }
            output.write_all(&self.buffer[..read]).map_err(create_failed)?;
            copied += read as u64;
        }
        output.flush().map_err(create_failed)?;

        debug!(source = %source.display(), bytes = copied, "copied track");
        Ok(copied)
    }
}

/// M3U files are written as ASCII; anything else becomes `?`.
fn ascii(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_ascii() { c } else { '?' })
        .collect()
}
