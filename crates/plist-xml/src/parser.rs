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

//! Recursive-descent parsing of property list values.
//!
//! Each function expects the cursor to sit on the opening tag of the element
//! it parses. Compound values are parsed inside a [`scoped`] cursor, so when a
//! function returns the caller's cursor is already past the element.
//!
//! [`scoped`]: crate::cursor::TokenCursor::scoped

use crate::cursor::TokenCursor;
use crate::error::{PlistError, PlistResult};
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use indexmap::IndexMap;
use plist_core::{PropertyTree, Value};
use std::io::BufRead;
use tracing::trace;

/// Element names understood by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Tag {
    Plist,
    Dict,
    Key,
    Array,
    String,
    Integer,
    Date,
    True,
    False,
    Data,
}

const TAGS: [(&str, Tag); 10] = [
    ("plist", Tag::Plist),
    ("dict", Tag::Dict),
    ("key", Tag::Key),
    ("array", Tag::Array),
    ("string", Tag::String),
    ("integer", Tag::Integer),
    ("date", Tag::Date),
    ("true", Tag::True),
    ("false", Tag::False),
    ("data", Tag::Data),
];

impl Tag {
    /// Classify an element name, ignoring ASCII case.
    pub(crate) fn classify(name: &str) -> Option<Tag> {
        TAGS.iter()
            .find(|(tag_name, _)| tag_name.eq_ignore_ascii_case(name))
            .map(|(_, tag)| *tag)
    }
}

fn tag_of<R: BufRead>(cursor: &TokenCursor<R>) -> Option<Tag> {
    cursor.at_start().and_then(Tag::classify)
}

/// Parse the value element the cursor is positioned at.
///
/// Returns `Ok(None)` for `<data>` elements, which are stepped over without
/// producing a value.
pub fn parse_value<R: BufRead>(cursor: &mut TokenCursor<R>) -> PlistResult<Option<Value>> {
    let pos = cursor.position();
    let Some(name) = cursor.at_start().map(str::to_owned) else {
        return Err(PlistError::syntax(pos, "expected a value element"));
    };

    let value = match Tag::classify(&name) {
        Some(Tag::True) => {
            cursor.skip_element()?;
            Value::Bool(true)
        }
        Some(Tag::False) => {
            cursor.skip_element()?;
            Value::Bool(false)
        }
        Some(Tag::String) => Value::String(cursor.read_text()?),
        Some(Tag::Integer) => {
            let text = cursor.read_text()?;
            match text.trim().parse::<i64>() {
                Ok(n) => Value::Integer(n),
                Err(e) => return Err(invalid_scalar(pos, &name, text, e.to_string())),
            }
        }
        Some(Tag::Date) => {
            let text = cursor.read_text()?;
            match parse_date(&text) {
                Some(date) => Value::Date(date),
                None => {
                    return Err(invalid_scalar(
                        pos,
                        &name,
                        text,
                        "expected an ISO 8601 timestamp",
                    ))
                }
            }
        }
        Some(Tag::Dict) => Value::Dict(cursor.scoped(parse_dictionary)?),
        Some(Tag::Array) => Value::List(cursor.scoped(parse_list)?),
        Some(Tag::Data) => {
            trace!(pos, "skipping <data> element");
            cursor.skip_element()?;
            return Ok(None);
        }
        Some(Tag::Plist) | Some(Tag::Key) | None => {
            return Err(PlistError::InvalidType { pos, tag: name });
        }
    };

    Ok(Some(value))
}

fn invalid_scalar(pos: usize, tag: &str, text: String, message: impl Into<String>) -> PlistError {
    PlistError::InvalidScalar {
        pos,
        tag: tag.to_string(),
        text,
        message: message.into(),
    }
}

/// Parse a plist timestamp.
///
/// Accepts RFC 3339 (`2011-04-24T18:30:00Z`, with or without an offset),
/// a bare date-time taken as UTC, and a bare date taken as UTC midnight.
pub(crate) fn parse_date(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();

    if let Ok(date) = DateTime::parse_from_rfc3339(text) {
        return Some(date.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// Dictionary parser states.
enum DictState {
    ExpectKeyOrEnd,
    ExpectValue(String),
    Done,
}

/// Parse a `<dict>` element into a [`PropertyTree`].
///
/// Entries must alternate `<key>` and a value element. A repeated key
/// replaces the earlier value. Keys whose value is a `<data>` element are
/// left out of the tree, including keys that held an earlier value.
pub fn parse_dictionary<R: BufRead>(cursor: &mut TokenCursor<R>) -> PlistResult<PropertyTree> {
    if tag_of(cursor) != Some(Tag::Dict) {
        return Err(PlistError::BadDictionary {
            pos: cursor.position(),
            found: cursor.at_start().unwrap_or_default().to_string(),
        });
    }

    let mut entries = IndexMap::new();
    let mut state = DictState::ExpectKeyOrEnd;

    loop {
        state = match state {
            DictState::ExpectKeyOrEnd => {
                if !cursor.advance()? {
                    DictState::Done
                } else if tag_of(cursor) == Some(Tag::Key) {
                    DictState::ExpectValue(cursor.read_text()?)
                } else {
                    return Err(PlistError::MissingKey {
                        pos: cursor.position(),
                        found: cursor.at_start().unwrap_or_default().to_string(),
                    });
                }
            }
            DictState::ExpectValue(key) => {
                let pos = cursor.position();
                if !cursor.advance()? || tag_of(cursor) == Some(Tag::Key) {
                    return Err(PlistError::MissingValue { pos, key });
                }
                match parse_value(cursor)? {
                    Some(value) => {
                        entries.insert(key, value);
                    }
                    None => {
                        entries.shift_remove(&key);
                    }
                }
                DictState::ExpectKeyOrEnd
            }
            DictState::Done => break,
        };
    }

    Ok(PropertyTree::from(entries))
}

/// Parse an `<array>` element whose children are all `<dict>` elements.
///
/// Children are classified on the same scoped cursor that is being advanced.
/// An empty array yields an empty list.
pub fn parse_list<R: BufRead>(cursor: &mut TokenCursor<R>) -> PlistResult<Vec<PropertyTree>> {
    let mut items = Vec::new();

    while cursor.advance()? {
        if tag_of(cursor) != Some(Tag::Dict) {
            return Err(PlistError::InvalidArrayElement {
                pos: cursor.position(),
                tag: cursor.at_start().unwrap_or_default().to_string(),
            });
        }
        items.push(cursor.scoped(parse_dictionary)?);
    }

    Ok(items)
}
