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

//! plcopy: copy an iTunes playlist to removable media.
//!
//! Reads the iTunes XML library with [`plist_xml`], resolves one playlist to
//! its file tracks, copies them into an `M/` folder and writes M3U playlists
//! next to it. Names can be limited to what car stereos such as the Audi
//! RNS-E accept.
//!
//! # Example
//!
//! ```no_run
//! use plcopy_cli::copy::{copy_playlist, CopyOptions};
//! use plcopy_cli::library::load_playlist;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! if let Some(playlist) = load_playlist("iTunes Music Library.xml", "Road Trip")? {
//!     copy_playlist(&playlist, Path::new("/media/usb"), CopyOptions::default(), |track| {
//!         println!("Copying: {}", track.name);
//!     })?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod copy;
pub mod error;
pub mod filename;
pub mod library;

pub use error::CliError;
