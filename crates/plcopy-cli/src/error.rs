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

//! Structured error types for the plcopy CLI.

use crate::copy::CopyError;
use crate::library::LibraryError;
use plist_xml::PlistError;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read iTunes data file '{}': {source}", .path.display())]
    LibraryRead { path: PathBuf, source: PlistError },

    #[error("Failed to parse iTunes data file '{}': {source}", .path.display())]
    LibraryFormat { path: PathBuf, source: PlistError },

    #[error("Invalid iTunes data file '{}': {source}", .path.display())]
    LibraryContent { path: PathBuf, source: LibraryError },

    #[error("No playlist called: {name}")]
    UnknownPlaylist { name: String },

    #[error("No iTunes library given: pass --library or set PLCOPY_LIBRARY")]
    NoLibrary,

    #[error(transparent)]
    Copy(#[from] CopyError),
}

impl CliError {
    /// Classify a library failure for `path`.
    pub fn library(path: &Path, err: LibraryError) -> Self {
        let path = path.to_path_buf();
        match err {
            LibraryError::Plist(source) if source.is_io() => Self::LibraryRead { path, source },
            LibraryError::Plist(source) => Self::LibraryFormat { path, source },
            source => Self::LibraryContent { path, source },
        }
    }

    pub fn unknown_playlist(name: impl Into<String>) -> Self {
        Self::UnknownPlaylist { name: name.into() }
    }
}
