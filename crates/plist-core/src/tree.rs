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

//! The property tree produced from one `<dict>` element.

use crate::error::{LookupError, LookupResult};
use crate::value::Value;
use indexmap::IndexMap;

/// A read-only mapping from string keys to [`Value`]s.
///
/// Keys iterate in the order they first appeared in the source document.
/// When a key is repeated the later value replaces the earlier one but keeps
/// its position.
///
/// There are no mutating methods: a tree is assembled once, via
/// [`FromIterator`] or `From<IndexMap<String, Value>>`, and only read after.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyTree {
    entries: IndexMap<String, Value>,
}

impl PropertyTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the tree has no keys.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if `key` is present, whatever its value.
    #[inline]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Exact lookup with no defaulting.
    pub fn get(&self, key: &str) -> LookupResult<&Value> {
        self.entries
            .get(key)
            .ok_or_else(|| LookupError::key_not_found(key))
    }

    /// Lookup that falls back to `default` when `key` is absent.
    ///
    /// Presence is decided by key membership only: a stored `Bool(false)` or
    /// empty string is returned as-is rather than replaced by the default.
    pub fn get_or(&self, key: &str, default: Value) -> Value {
        match self.entries.get(key) {
            Some(value) => value.clone(),
            None => default,
        }
    }

    /// Lookup returning `None` instead of an error when the key is absent.
    #[inline]
    pub fn find(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Keys in document order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Key/value pairs in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Lookup a string value.
    pub fn get_str(&self, key: &str) -> LookupResult<&str> {
        let value = self.get(key)?;
        value
            .as_str()
            .ok_or_else(|| LookupError::type_mismatch(key, "string", value.type_name()))
    }

    /// Lookup an integer value.
    pub fn get_integer(&self, key: &str) -> LookupResult<i64> {
        let value = self.get(key)?;
        value
            .as_integer()
            .ok_or_else(|| LookupError::type_mismatch(key, "integer", value.type_name()))
    }

    /// Lookup a boolean value.
    pub fn get_bool(&self, key: &str) -> LookupResult<bool> {
        let value = self.get(key)?;
        value
            .as_bool()
            .ok_or_else(|| LookupError::type_mismatch(key, "bool", value.type_name()))
    }

    /// Lookup a nested tree.
    pub fn get_dict(&self, key: &str) -> LookupResult<&PropertyTree> {
        let value = self.get(key)?;
        value
            .as_dict()
            .ok_or_else(|| LookupError::type_mismatch(key, "dict", value.type_name()))
    }

    /// Lookup a list of trees.
    pub fn get_list(&self, key: &str) -> LookupResult<&[PropertyTree]> {
        let value = self.get(key)?;
        value
            .as_list()
            .ok_or_else(|| LookupError::type_mismatch(key, "array", value.type_name()))
    }
}

impl From<IndexMap<String, Value>> for PropertyTree {
    fn from(entries: IndexMap<String, Value>) -> Self {
        Self { entries }
    }
}

impl FromIterator<(String, Value)> for PropertyTree {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a PropertyTree {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
