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

//! Builders for iTunes-style library documents.
//!
//! # Example
//!
//! ```rust
//! use plist_test::fixtures::builders::{LibraryBuilder, TrackBuilder};
//!
//! let xml = LibraryBuilder::new()
//!     .track(1, "Intro", "/music/intro.mp3")
//!     .track_with(
//!         TrackBuilder::new(2, "Outro")
//!             .artist("Band")
//!             .album("Record")
//!             .number(1, 2)
//!             .file("/music/outro.mp3"),
//!     )
//!     .playlist("Mix", &[2, 1])
//!     .build();
//! assert!(xml.contains("<key>Playlists</key>"));
//! ```

use super::documents::wrap;
use std::fmt::Write;
use std::path::Path;

/// Builder for a single `Tracks` entry.
#[derive(Debug, Clone)]
pub struct TrackBuilder {
    id: i64,
    name: String,
    artist: Option<String>,
    album: Option<String>,
    compilation: bool,
    disc_number: Option<i64>,
    track_number: Option<i64>,
    total_time: Option<i64>,
    size: Option<i64>,
    track_type: String,
    location: Option<String>,
}

impl TrackBuilder {
    /// A file track with only an ID and a name.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            artist: None,
            album: None,
            compilation: false,
            disc_number: None,
            track_number: None,
            total_time: None,
            size: Some(0),
            track_type: "File".to_string(),
            location: None,
        }
    }

    pub fn artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = Some(artist.into());
        self
    }

    pub fn album(mut self, album: impl Into<String>) -> Self {
        self.album = Some(album.into());
        self
    }

    pub fn compilation(mut self) -> Self {
        self.compilation = true;
        self
    }

    /// Set disc and track number.
    pub fn number(mut self, disc: i64, track: i64) -> Self {
        self.disc_number = Some(disc);
        self.track_number = Some(track);
        self
    }

    /// Duration in milliseconds.
    pub fn total_time(mut self, millis: i64) -> Self {
        self.total_time = Some(millis);
        self
    }

    pub fn size(mut self, bytes: i64) -> Self {
        self.size = Some(bytes);
        self
    }

    /// Drop the `Size` key.
    pub fn without_size(mut self) -> Self {
        self.size = None;
        self
    }

    pub fn track_type(mut self, kind: impl Into<String>) -> Self {
        self.track_type = kind.into();
        self
    }

    /// Point the track at a local file, stored as a `file://localhost` URL.
    pub fn file(mut self, path: impl AsRef<Path>) -> Self {
        self.location = Some(file_url(path.as_ref()));
        self
    }

    /// Store `location` verbatim.
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    fn write_entry(&self, out: &mut String) {
        let _ = writeln!(out, "\t\t<key>{}</key>", self.id);
        out.push_str("\t\t<dict>\n");
        integer(out, "Track ID", self.id);
        string(out, "Name", &self.name);
        if let Some(artist) = &self.artist {
            string(out, "Artist", artist);
        }
        if let Some(album) = &self.album {
            string(out, "Album", album);
        }
        if self.compilation {
            out.push_str("\t\t\t<key>Compilation</key><true/>\n");
        }
        if let Some(disc) = self.disc_number {
            integer(out, "Disc Number", disc);
        }
        if let Some(number) = self.track_number {
            integer(out, "Track Number", number);
        }
        if let Some(size) = self.size {
            integer(out, "Size", size);
        }
        if let Some(time) = self.total_time {
            integer(out, "Total Time", time);
        }
        string(out, "Track Type", &self.track_type);
        if let Some(location) = &self.location {
            string(out, "Location", location);
        }
        out.push_str("\t\t</dict>\n");
    }
}

/// Builder for a whole library document.
#[derive(Debug, Clone, Default)]
pub struct LibraryBuilder {
    tracks: Vec<TrackBuilder>,
    playlists: Vec<(String, Vec<i64>)>,
}

impl LibraryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file track with default metadata.
    pub fn track(self, id: i64, name: &str, path: impl AsRef<Path>) -> Self {
        self.track_with(TrackBuilder::new(id, name).file(path))
    }

    pub fn track_with(mut self, track: TrackBuilder) -> Self {
        self.tracks.push(track);
        self
    }

    /// Add a playlist referencing track IDs in order.
    pub fn playlist(mut self, name: &str, track_ids: &[i64]) -> Self {
        self.playlists.push((name.to_string(), track_ids.to_vec()));
        self
    }

    /// Render the library as an XML property list.
    pub fn build(&self) -> String {
        let mut body = String::new();
        body.push_str("\t<key>Major Version</key><integer>1</integer>\n");
        body.push_str("\t<key>Minor Version</key><integer>1</integer>\n");
        body.push_str("\t<key>Tracks</key>\n\t<dict>\n");
        for track in &self.tracks {
            track.write_entry(&mut body);
        }
        body.push_str("\t</dict>\n");

        body.push_str("\t<key>Playlists</key>\n\t<array>\n");
        for (index, (name, ids)) in self.playlists.iter().enumerate() {
            body.push_str("\t\t<dict>\n");
            string(&mut body, "Name", name);
            let _ = writeln!(
                body,
                "\t\t\t<key>Playlist Persistent ID</key><string>{:016X}</string>",
                0xA000 + index
            );
            body.push_str("\t\t\t<key>Playlist Items</key>\n\t\t\t<array>\n");
            for id in ids {
                let _ = writeln!(
                    body,
                    "\t\t\t\t<dict><key>Track ID</key><integer>{}</integer></dict>",
                    id
                );
            }
            body.push_str("\t\t\t</array>\n\t\t</dict>\n");
        }
        body.push_str("\t</array>");

        wrap(&body)
    }
}

fn string(out: &mut String, key: &str, value: &str) {
    let _ = writeln!(
        out,
        "\t\t\t<key>{}</key><string>{}</string>",
        escape(key),
        escape(value)
    );
}

fn integer(out: &mut String, key: &str, value: i64) {
    let _ = writeln!(out, "\t\t\t<key>{}</key><integer>{}</integer>", key, value);
}

/// Escape XML text content.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Encode a local path the way iTunes writes `Location` values.
pub fn file_url(path: &Path) -> String {
    let mut url = String::from("file://localhost");
    let raw = path.to_string_lossy();
    if !raw.starts_with('/') {
        url.push('/');
    }
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' | b'/' => {
                url.push(byte as char)
            }
            b'\\' => url.push('/'),
            _ => {
                let _ = write!(url, "%{:02X}", byte);
            }
        }
    }
    url
}
