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

//! Shared test fixtures for the plcopy property list crates.
//!
//! # Quick Start
//!
//! ```rust
//! use plist_test::fixtures;
//!
//! // Canned documents
//! let xml = fixtures::minimal();
//! let xml = fixtures::itunes_library();
//!
//! // Build a library with real tracks
//! use plist_test::fixtures::builders::LibraryBuilder;
//!
//! let xml = LibraryBuilder::new()
//!     .track(1, "Come Together", "/music/come_together.mp3")
//!     .playlist("Road Trip", &[1])
//!     .build();
//! assert!(xml.contains("Road Trip"));
//!
//! // Malformed inputs for error handling tests
//! for (name, xml) in fixtures::errors::malformed_samples() {
//!     // feed each one to the parser
//! #   let _ = (name, xml);
//! }
//! ```

/// Type alias for a list of fixture functions (name, generator).
pub type FixtureList = Vec<(&'static str, fn() -> String)>;

/// Canonical property list fixtures.
pub mod fixtures;

pub use fixtures::*;
