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

//! Well-formed property list documents.

use plist_core::{PropertyTree, Value};

/// XML prologue used by Apple tools, including the remote DTD reference.
pub const PROLOGUE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
"#;

/// Wrap a dictionary body in the prologue and a `<plist>` root.
pub fn wrap(dict_body: &str) -> String {
    format!(
        "{}<plist version=\"1.0\">\n<dict>\n{}\n</dict>\n</plist>\n",
        PROLOGUE, dict_body
    )
}

/// One string entry.
pub fn minimal() -> String {
    wrap("\t<key>Name</key><string>Test</string>")
}

/// Expected tree for [`minimal`].
pub fn minimal_tree() -> PropertyTree {
    std::iter::once(("Name".to_string(), Value::from("Test"))).collect()
}

/// A string and a stored `false`.
pub fn flags() -> String {
    "<plist><dict><key>Name</key><string>Test</string><key>Flag</key><false/></dict></plist>"
        .to_string()
}

/// An `Items` array holding two dictionaries with `Track ID` 1 and 2.
pub fn two_tracks() -> String {
    wrap(
        r#"	<key>Items</key>
	<array>
		<dict>
			<key>Track ID</key><integer>1</integer>
		</dict>
		<dict>
			<key>Track ID</key><integer>2</integer>
		</dict>
	</array>"#,
    )
}

/// Compound values followed by sibling keys at several depths.
pub fn nested_scopes() -> String {
    wrap(
        r#"	<key>Outer</key>
	<dict>
		<key>Inner</key>
		<dict>
			<key>Deep</key><dict><key>Leaf</key><string>bottom</string></dict>
			<key>AfterDeep</key><integer>1</integer>
		</dict>
		<key>AfterInner</key><integer>2</integer>
		<key>List</key>
		<array>
			<dict><key>Nested</key><dict><key>X</key><true/></dict></dict>
			<dict/>
		</array>
		<key>AfterList</key><integer>3</integer>
	</dict>
	<key>AfterOuter</key><string>top</string>"#,
    )
}

/// Every supported element type, including a skipped `<data>` blob.
pub fn every_type() -> String {
    wrap(
        r#"	<key>Yes</key><true/>
	<key>No</key><false/>
	<key>Text</key><string>Rock &amp; Roll &lt;Live&gt;</string>
	<key>Empty</key><string></string>
	<key>Count</key><integer>-12</integer>
	<key>When</key><date>2011-04-24T18:30:05Z</date>
	<key>Blob</key>
	<data>
	AAECAwQFBgcICQoLDA0ODw==
	</data>
	<key>Child</key><dict><key>A</key><integer>1</integer></dict>
	<key>Children</key><array></array>
	<key>Last</key><string>end</string>"#,
    )
}

/// A small iTunes library: four tracks, two playlists, a smart-playlist blob.
pub fn itunes_library() -> String {
    wrap(
        r#"	<key>Major Version</key><integer>1</integer>
	<key>Minor Version</key><integer>1</integer>
	<key>Date</key><date>2011-08-06T17:01:34Z</date>
	<key>Application Version</key><string>10.4.1</string>
	<key>Show Content Ratings</key><true/>
	<key>Music Folder</key><string>file://localhost/Users/dave/Music/iTunes/iTunes%20Media/</string>
	<key>Tracks</key>
	<dict>
		<key>101</key>
		<dict>
			<key>Track ID</key><integer>101</integer>
			<key>Name</key><string>Come Together</string>
			<key>Artist</key><string>The Beatles</string>
			<key>Album</key><string>Abbey Road</string>
			<key>Disc Number</key><integer>1</integer>
			<key>Track Number</key><integer>1</integer>
			<key>Size</key><integer>6239011</integer>
			<key>Total Time</key><integer>259946</integer>
			<key>Date Added</key><date>2010-12-01T09:15:00Z</date>
			<key>Track Type</key><string>File</string>
			<key>Location</key><string>file://localhost/Users/dave/Music/Abbey%20Road/01%20Come%20Together.mp3</string>
		</dict>
		<key>102</key>
		<dict>
			<key>Track ID</key><integer>102</integer>
			<key>Name</key><string>Something</string>
			<key>Artist</key><string>The Beatles</string>
			<key>Album</key><string>Abbey Road</string>
			<key>Track Number</key><integer>2</integer>
			<key>Size</key><integer>4415322</integer>
			<key>Total Time</key><integer>182293</integer>
			<key>Track Type</key><string>File</string>
			<key>Location</key><string>file://localhost/Users/dave/Music/Abbey%20Road/02%20Something.mp3</string>
		</dict>
		<key>103</key>
		<dict>
			<key>Track ID</key><integer>103</integer>
			<key>Name</key><string>Untitled Stream</string>
			<key>Track Type</key><string>URL</string>
			<key>Location</key><string>http://radio.example.com/stream</string>
		</dict>
		<key>104</key>
		<dict>
			<key>Track ID</key><integer>104</integer>
			<key>Name</key><string>Bohemian Rhapsody</string>
			<key>Album</key><string>Greatest Hits</string>
			<key>Compilation</key><true/>
			<key>Size</key><integer>8601223</integer>
			<key>Track Type</key><string>File</string>
			<key>Location</key><string>file://localhost/Users/dave/Music/Greatest%20Hits/Bohemian%20Rhapsody.m4a</string>
		</dict>
	</dict>
	<key>Playlists</key>
	<array>
		<dict>
			<key>Name</key><string>Library</string>
			<key>Master</key><true/>
			<key>Playlist ID</key><integer>200</integer>
			<key>Playlist Persistent ID</key><string>6F2B3C1D0A9E8F71</string>
			<key>Visible</key><false/>
			<key>All Items</key><true/>
			<key>Playlist Items</key>
			<array>
				<dict><key>Track ID</key><integer>101</integer></dict>
				<dict><key>Track ID</key><integer>102</integer></dict>
				<dict><key>Track ID</key><integer>103</integer></dict>
				<dict><key>Track ID</key><integer>104</integer></dict>
			</array>
		</dict>
		<dict>
			<key>Name</key><string>Road Trip</string>
			<key>Playlist ID</key><integer>201</integer>
			<key>Playlist Persistent ID</key><string>0A1B2C3D4E5F6071</string>
			<key>Smart Info</key>
			<data>
			AQEAAwAAAAIAAAAZAAAAAAAAAAcAAAABAAAAAAAAAAAAAAAAAAAAAAAA
			</data>
			<key>All Items</key><true/>
			<key>Playlist Items</key>
			<array>
				<dict><key>Track ID</key><integer>104</integer></dict>
				<dict><key>Track ID</key><integer>103</integer></dict>
				<dict><key>Track ID</key><integer>102</integer></dict>
			</array>
		</dict>
		<dict>
			<key>Name</key><string>Empty Folder</string>
			<key>Playlist ID</key><integer>202</integer>
			<key>Playlist Persistent ID</key><string>FFEEDDCCBBAA9988</string>
			<key>Folder</key><true/>
		</dict>
	</array>
	<key>Library Persistent ID</key><string>1234ABCD5678EF90</string>"#,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_includes_doctype() {
        let xml = wrap("<key>a</key><true/>");
        assert!(xml.starts_with("<?xml"));
        assert!(xml.contains("<!DOCTYPE plist"));
        assert!(xml.contains("<key>a</key><true/>"));
    }

    #[test]
    fn test_minimal_tree() {
        let tree = minimal_tree();
        assert_eq!(tree.get_str("Name"), Ok("Test"));
    }
}
