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

//! Error types for property tree lookups.

use thiserror::Error;

/// Result alias for lookups on a [`PropertyTree`](crate::PropertyTree).
pub type LookupResult<T> = Result<T, LookupError>;

/// Errors raised by key lookups.
///
/// These are never produced by the parser itself; they only surface when a
/// consumer asks for a key that is absent or holds a value of another type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The key is not present in the tree.
    #[error("key not found: '{key}'")]
    KeyNotFound { key: String },

    /// The key is present but holds a different kind of value.
    #[error("key '{key}' holds {found}, expected {expected}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        found: &'static str,
    },
}

impl LookupError {
    /// Create a key-not-found error.
    #[inline]
    pub fn key_not_found(key: impl Into<String>) -> Self {
        Self::KeyNotFound { key: key.into() }
    }

    /// Create a type mismatch error.
    #[inline]
    pub fn type_mismatch(
        key: impl Into<String>,
        expected: &'static str,
        found: &'static str,
    ) -> Self {
        Self::TypeMismatch {
            key: key.into(),
            expected,
            found,
        }
    }

    /// The key the failed lookup was for.
    pub fn key(&self) -> &str {
        match self {
            Self::KeyNotFound { key } | Self::TypeMismatch { key, .. } => key,
        }
    }
}
