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

//! Playlist and track records extracted from an iTunes library.
//!
//! An iTunes library is a property list whose root holds a `Tracks`
//! dictionary keyed by track ID and a `Playlists` array. Each playlist lists
//! its items as dictionaries carrying a `Track ID`.

use crate::filename::{clean_filename, PREFIX_CHARS, TRACK_NAME_LIMIT};
use plist_core::{LookupError, PropertyTree, Value};
use plist_xml::PlistError;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, trace};
use url::Url;

pub const DEFAULT_ARTIST: &str = "Unknown Artist";
pub const DEFAULT_ALBUM: &str = "Unknown Album";

/// Result type for library operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

/// Errors raised while reading playlists out of a library.
#[derive(Error, Debug)]
pub enum LibraryError {
    /// The library file could not be read or parsed.
    #[error(transparent)]
    Plist(#[from] PlistError),

    /// A required entry is missing or has the wrong type.
    #[error("malformed library entry: {0}")]
    Lookup(#[from] LookupError),

    /// A playlist references a track that is not in `Tracks`.
    #[error("playlist references unknown track {track_id}")]
    UnknownTrack { track_id: i64 },

    /// A file track whose `Location` is not a local file URL.
    #[error("unsupported track location '{location}'")]
    UnsupportedLocation { location: String },
}

/// A single file track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub source_path: PathBuf,
    pub size: i64,
    pub name: String,
    pub artist: String,
    pub album: String,
    pub compilation: bool,
    pub disc_number: i64,
    pub track_number: i64,
    /// Duration in milliseconds.
    pub duration: i64,
}

impl Track {
    /// Read a track from its `Tracks` entry.
    fn from_entry(entry: &PropertyTree) -> LibraryResult<Self> {
        let location = entry.get_str("Location")?;
        Ok(Self {
            source_path: location_to_path(location)?,
            size: entry.get_integer("Size")?,
            name: entry.get_str("Name")?.to_string(),
            artist: string_or(entry, "Artist", DEFAULT_ARTIST),
            album: string_or(entry, "Album", DEFAULT_ALBUM),
            compilation: entry.get_or("Compilation", Value::Bool(false)) == Value::Bool(true),
            disc_number: integer_or(entry, "Disc Number", 1),
            track_number: integer_or(entry, "Track Number", 1),
            duration: integer_or(entry, "Total Time", 0),
        })
    }

    /// Name of the per-album playlist this track belongs to.
    pub fn playlist_name(&self) -> String {
        if self.compilation {
            self.album.clone()
        } else {
            format!("{} - {}", self.album, self.artist)
        }
    }

    /// Extension of the source file including the leading dot, or empty.
    pub fn extension(&self) -> String {
        self.source_path
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default()
    }

    fn file_stem(&self) -> String {
        let prefix = if self.compilation {
            &self.album
        } else {
            &self.artist
        };
        let prefix: String = prefix.chars().take(PREFIX_CHARS).collect();
        format!("{}; {}", prefix, self.name)
    }

    /// Destination file name without length limits.
    pub fn full_filename(&self) -> String {
        clean_filename(&self.file_stem(), usize::MAX) + &self.extension()
    }

    /// Destination file name cut to fit the car stereo limit.
    pub fn trimmed_filename(&self) -> String {
        let ext = self.extension();
        let budget = TRACK_NAME_LIMIT.saturating_sub(ext.chars().count());
        clean_filename(&self.file_stem(), budget) + &ext
    }
}

/// A named playlist with its resolved file tracks in playlist order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    pub name: String,
    pub persistent_key: String,
    pub tracks: Vec<Track>,
}

/// Summary of a playlist entry, without resolving its tracks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistInfo {
    pub name: String,
    pub persistent_key: String,
    pub item_count: usize,
}

/// Load the library at `path` and extract the playlist called `name`.
///
/// Returns `Ok(None)` when no playlist has that name.
pub fn load_playlist(path: impl AsRef<Path>, name: &str) -> LibraryResult<Option<Playlist>> {
    let root = plist_xml::load(path)?;
    find_playlist(&root, name)
}

/// Extract the first playlist called `name` (case-sensitive).
///
/// Only tracks whose `Track Type` is `File` are kept.
pub fn find_playlist(root: &PropertyTree, name: &str) -> LibraryResult<Option<Playlist>> {
    let Some(entry) = root
        .get_list("Playlists")?
        .iter()
        .find(|playlist| playlist.find("Name").and_then(Value::as_str) == Some(name))
    else {
        debug!(name, "playlist not found");
        return Ok(None);
    };

    let mut tracks = Vec::new();
    if entry.contains("Playlist Items") {
        let library = root.get_dict("Tracks")?;
        for item in entry.get_list("Playlist Items")? {
            let track_id = item.get_integer("Track ID")?;
            let track = match library.get_dict(&track_id.to_string()) {
                Ok(track) => track,
                Err(LookupError::KeyNotFound { .. }) => {
                    return Err(LibraryError::UnknownTrack { track_id })
                }
                Err(err) => return Err(err.into()),
            };

            if track.find("Track Type").and_then(Value::as_str) != Some("File") {
                trace!(track_id, "skipping non-file track");
                continue;
            }
            tracks.push(Track::from_entry(track)?);
        }
    }

    debug!(name, tracks = tracks.len(), "resolved playlist");
    Ok(Some(Playlist {
        name: name.to_string(),
        persistent_key: persistent_key(entry),
        tracks,
    }))
}

/// List every playlist in the library in source order.
pub fn list_playlists(root: &PropertyTree) -> LibraryResult<Vec<PlaylistInfo>> {
    root.get_list("Playlists")?
        .iter()
        .map(|entry| {
            let item_count = entry
                .find("Playlist Items")
                .and_then(Value::as_list)
                .map_or(0, |items| items.len());
            Ok(PlaylistInfo {
                name: entry.get_str("Name")?.to_string(),
                persistent_key: persistent_key(entry),
                item_count,
            })
        })
        .collect()
}

/// Convert a `file://` track location into a local path.
///
/// Both `file:///path` and `file://localhost/path` are accepted and
/// percent-escapes are decoded.
pub fn location_to_path(location: &str) -> LibraryResult<PathBuf> {
    let unsupported = || LibraryError::UnsupportedLocation {
        location: location.to_string(),
    };

    let url = Url::parse(location).map_err(|_| unsupported())?;
    if url.scheme() != "file" {
        return Err(unsupported());
    }
    url.to_file_path().map_err(|_| unsupported())
}

fn persistent_key(entry: &PropertyTree) -> String {
    entry
        .find("Playlist Persistent ID")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn string_or(entry: &PropertyTree, key: &str, default: &str) -> String {
    match entry.get_or(key, Value::from(default)) {
        Value::String(s) => s,
        _ => default.to_string(),
    }
}

fn integer_or(entry: &PropertyTree, key: &str, default: i64) -> i64 {
    entry
        .get_or(key, Value::Integer(default))
        .as_integer()
        .unwrap_or(default)
}
