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

//! Document loading: source handling and the `<plist>` handshake.

use crate::cursor::TokenCursor;
use crate::error::{PlistError, PlistResult};
use crate::parser::{parse_dictionary, Tag};
use plist_core::PropertyTree;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use tracing::debug;

/// Configuration for loading a property list.
#[derive(Debug, Clone)]
pub struct LoadConfig {
    /// Buffer size for reading the source (default: 64KB)
    pub buffer_size: usize,
    /// Maximum nesting of compound values (default: 100)
    pub max_depth: usize,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            buffer_size: 65536, // 64KB
            max_depth: 100,
        }
    }
}

/// Load the property list at `path` with the default configuration.
///
/// The file is released before this returns, whether loading succeeds or not.
///
/// # Errors
///
/// Returns an [`ErrorKind::Io`](crate::ErrorKind::Io) error when the file
/// cannot be opened or read, and an
/// [`ErrorKind::Format`](crate::ErrorKind::Format) error when the document is
/// not a well-formed property list.
pub fn load(path: impl AsRef<Path>) -> PlistResult<PropertyTree> {
    load_with_config(path, &LoadConfig::default())
}

/// Load the property list at `path`.
pub fn load_with_config(path: impl AsRef<Path>, config: &LoadConfig) -> PlistResult<PropertyTree> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading property list");

    let file = File::open(path)?;
    let tree = from_reader(file, config)?;

    debug!(path = %path.display(), keys = tree.len(), "loaded property list");
    Ok(tree)
}

/// Parse a property list from any reader.
pub fn from_reader<R: Read>(reader: R, config: &LoadConfig) -> PlistResult<PropertyTree> {
    let buffered = BufReader::with_capacity(config.buffer_size, reader);
    let mut cursor = TokenCursor::new(buffered, config.max_depth);
    parse_document(&mut cursor)
}

/// Parse a property list held in memory.
pub fn from_str(xml: &str) -> PlistResult<PropertyTree> {
    from_reader(xml.as_bytes(), &LoadConfig::default())
}

/// Run the document handshake on a fresh cursor.
///
/// The first element must be `<plist>` and its first child is parsed as the
/// root dictionary. Anything after that child is left unread.
pub fn parse_document<R: BufRead>(cursor: &mut TokenCursor<R>) -> PlistResult<PropertyTree> {
    if !cursor.advance()? {
        return Err(PlistError::MissingRoot { found: None });
    }
    match cursor.at_start() {
        Some(name) if Tag::classify(name) == Some(Tag::Plist) => {}
        other => {
            return Err(PlistError::MissingRoot {
                found: other.map(str::to_string),
            })
        }
    }

    let mut root = cursor.enter()?;
    let pos = root.position();
    if !root.advance()? {
        return Err(PlistError::MissingRootDictionary { pos });
    }

    root.scoped(parse_dictionary)
}
