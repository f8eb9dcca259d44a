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

//! CLI command implementations

mod copy;
mod playlists;
mod show;

pub use copy::copy;
pub use playlists::playlists;
pub use show::show;

use crate::error::CliError;
use crate::library::{find_playlist, Playlist};
use plist_core::PropertyTree;
use std::path::Path;
use tracing::info;

/// Load the library at `path`, classifying failures for display.
fn load_library(path: &Path) -> Result<PropertyTree, CliError> {
    info!(path = %path.display(), "loading library");
    plist_xml::load(path).map_err(|err| CliError::library(path, err.into()))
}

/// Load the library and resolve the playlist called `name`.
fn load_playlist(path: &Path, name: &str) -> Result<Playlist, CliError> {
    let root = load_library(path)?;
    find_playlist(&root, name)
        .map_err(|err| CliError::library(path, err))?
        .ok_or_else(|| CliError::unknown_playlist(name))
}

/// Format milliseconds as `m:ss`.
fn format_duration(millis: i64) -> String {
    let seconds = millis.max(0) / 1000;
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
