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

//! Canonical property list fixtures.
//!
//! - **documents**: well-formed documents covering every element type
//! - **errors**: malformed documents, grouped by the failure they trigger
//! - **builders**: iTunes-style library documents assembled from parts

pub mod builders;
mod documents;
pub mod errors;

pub use documents::*;

use crate::FixtureList;

/// Returns all well-formed fixture functions for iteration.
pub fn all() -> FixtureList {
    vec![
        ("minimal", minimal),
        ("flags", flags),
        ("two_tracks", two_tracks),
        ("nested_scopes", nested_scopes),
        ("every_type", every_type),
        ("itunes_library", itunes_library),
    ]
}
