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

//! Filename sanitization for FAT-formatted media.

/// Maximum characters of a playlist file stem when names are limited.
pub const PLAYLIST_NAME_LIMIT: usize = 28;

/// Maximum characters of a track file name, extension included, when names
/// are limited. The `M/` folder brings the full relative path to 32.
pub const TRACK_NAME_LIMIT: usize = 31;

/// Characters of the artist or album used to prefix track file names.
pub const PREFIX_CHARS: usize = 15;

/// Truncate `name` to `max_chars` characters and replace characters that
/// are not allowed in file names.
///
/// | Input | Output |
/// |---|---|
/// | `:` | `;` |
/// | `’` `"` | `'` |
/// | `<` | `(` |
/// | `>` | `)` |
/// | `\` `/` `*` `?` `\|` | `_` |
///
/// # Examples
///
/// ```
/// use plcopy_cli::filename::clean_filename;
///
/// assert_eq!(clean_filename("AC/DC: Live?", usize::MAX), "AC_DC; Live_");
/// assert_eq!(clean_filename("Abbey Road", 5), "Abbey");
/// ```
pub fn clean_filename(name: &str, max_chars: usize) -> String {
    name.chars().take(max_chars).map(replacement).collect()
}

fn replacement(c: char) -> char {
    match c {
        ':' => ';',
        '\u{2019}' | '"' => '\'',
        '<' => '(',
        '>' => ')',
        '\\' | '/' | '*' | '?' | '|' => '_',
        other => other,
    }
}
