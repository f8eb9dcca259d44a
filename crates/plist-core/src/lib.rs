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

//! Data model for parsed property list documents.
//!
//! A property list is a tree of dictionaries. Every dictionary is parsed into
//! a [`PropertyTree`], an insertion-ordered mapping from string keys to typed
//! [`Value`]s. Trees are immutable once built; consumers only ever read them.
//!
//! # Lookup
//!
//! ```rust
//! use plist_core::{PropertyTree, Value};
//!
//! let tree: PropertyTree = [
//!     ("Name".to_string(), Value::from("Road Trip")),
//!     ("Visible".to_string(), Value::Bool(false)),
//! ]
//! .into_iter()
//! .collect();
//!
//! assert_eq!(tree.get_str("Name").unwrap(), "Road Trip");
//! assert!(tree.get("Missing").is_err());
//!
//! // Presence wins over the default, even for falsy values.
//! assert_eq!(tree.get_or("Visible", Value::Bool(true)), Value::Bool(false));
//! assert_eq!(tree.get_or("Master", Value::Bool(true)), Value::Bool(true));
//! ```

mod error;
mod tree;
mod value;

pub use error::{LookupError, LookupResult};
pub use tree::PropertyTree;
pub use value::Value;

/// Re-exported so callers can name the timestamp type without a direct chrono dependency.
pub use chrono::{DateTime, Utc};
