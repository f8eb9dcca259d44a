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

//! Playlists command - list the playlists of a library

use super::load_library;
use crate::error::CliError;
use crate::library::list_playlists;
use colored::Colorize;
use std::path::Path;

/// Print every playlist with its item count and persistent ID.
pub fn playlists(library: &Path) -> Result<(), CliError> {
    let root = load_library(library)?;
    let playlists = list_playlists(&root).map_err(|err| CliError::library(library, err))?;

    for playlist in &playlists {
        println!(
            "{}  ({} items)  {}",
            playlist.name.bold(),
            playlist.item_count,
            playlist.persistent_key.dimmed()
        );
    }
    println!("{} playlists", playlists.len());
    Ok(())
}
