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

//! Value types for property list elements.

use crate::tree::PropertyTree;
use chrono::{DateTime, Utc};

/// A parsed property list value.
///
/// One variant per supported element type. Binary `<data>` elements are
/// recognized by the parser but have no variant here: their content is
/// discarded and the owning key is left out of the tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// `<true/>` or `<false/>`.
    Bool(bool),
    /// `<string>` text, verbatim.
    String(String),
    /// `<integer>` parsed as a base-10 signed 64-bit number.
    Integer(i64),
    /// `<date>` parsed as an absolute UTC timestamp.
    Date(DateTime<Utc>),
    /// Nested `<dict>`.
    Dict(PropertyTree),
    /// `<array>` of dictionaries, in document order.
    List(Vec<PropertyTree>),
}

impl Value {
    /// Name of the variant, as used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::String(_) => "string",
            Self::Integer(_) => "integer",
            Self::Date(_) => "date",
            Self::Dict(_) => "dict",
            Self::List(_) => "array",
        }
    }

    /// Try to get the value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get the value as a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get the value as an integer.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to get the value as a timestamp.
    pub fn as_date(&self) -> Option<&DateTime<Utc>> {
        match self {
            Self::Date(d) => Some(d),
            _ => None,
        }
    }

    /// Try to get the value as a nested tree.
    pub fn as_dict(&self) -> Option<&PropertyTree> {
        match self {
            Self::Dict(tree) => Some(tree),
            _ => None,
        }
    }

    /// Try to get the value as a list of trees.
    pub fn as_list(&self) -> Option<&[PropertyTree]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{}", b),
            Self::String(s) => write!(f, "{}", s),
            Self::Integer(n) => write!(f, "{}", n),
            Self::Date(d) => write!(f, "{}", d.to_rfc3339()),
            Self::Dict(tree) => write!(f, "<dict: {} keys>", tree.len()),
            Self::List(items) => write!(f, "<array: {} items>", items.len()),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(d: DateTime<Utc>) -> Self {
        Self::Date(d)
    }
}

impl From<PropertyTree> for Value {
    fn from(tree: PropertyTree) -> Self {
        Self::Dict(tree)
    }
}

impl From<Vec<PropertyTree>> for Value {
    fn from(items: Vec<PropertyTree>) -> Self {
        Self::List(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_accessors_match_variant() {
        assert_eq!(Value::Bool(true).as_bool(), Some(true));
        assert_eq!(Value::from("x").as_str(), Some("x"));
        assert_eq!(Value::Integer(-7).as_integer(), Some(-7));
        assert!(Value::Dict(PropertyTree::new()).as_dict().is_some());
        assert_eq!(Value::List(vec![]).as_list().map(|l| l.len()), Some(0));
    }

    #[test]
    fn test_accessors_reject_other_variants() {
        assert_eq!(Value::Integer(1).as_bool(), None);
        assert_eq!(Value::Bool(false).as_str(), None);
        assert_eq!(Value::from("1").as_integer(), None);
        assert!(Value::List(vec![]).as_dict().is_none());
        assert!(Value::Dict(PropertyTree::new()).as_list().is_none());
    }

    #[test]
    fn test_type_names() {
        assert_eq!(Value::Bool(true).type_name(), "bool");
        assert_eq!(Value::from("s").type_name(), "string");
        assert_eq!(Value::Integer(0).type_name(), "integer");
        assert_eq!(Value::Dict(PropertyTree::new()).type_name(), "dict");
        assert_eq!(Value::List(vec![]).type_name(), "array");
    }

    #[test]
    fn test_display() {
        let date = Utc.with_ymd_and_hms(2011, 4, 24, 18, 30, 0).unwrap();
        assert_eq!(Value::Date(date).to_string(), "2011-04-24T18:30:00+00:00");
        assert_eq!(Value::Integer(42).to_string(), "42");
        assert_eq!(Value::from("Abbey Road").to_string(), "Abbey Road");
        assert_eq!(
            Value::List(vec![PropertyTree::new(), PropertyTree::new()]).to_string(),
            "<array: 2 items>"
        );
    }
}
