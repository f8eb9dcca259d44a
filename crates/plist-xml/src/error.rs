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

//! Error types for property list loading.
//!
//! Every failure falls into one of two kinds, reported by [`PlistError::kind`]:
//!
//! - **Format**: the document is readable but violates the property list
//!   grammar (missing `<plist>` root, dangling key, unsupported element, ...).
//! - **Io**: the source could not be opened or read, including input that
//!   ends in the middle of an open element.
//!
//! # Examples
//!
//! ```rust
//! use plist_xml::{from_str, ErrorKind};
//!
//! let err = from_str("<dict></dict>").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Format);
//!
//! let err = plist_xml::load("/nonexistent/library.xml").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Io);
//! ```

use std::fmt;
use std::io;
use thiserror::Error;

/// Result alias for property list loading.
pub type PlistResult<T> = Result<T, PlistError>;

/// Broad classification of a [`PlistError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Structural grammar violation in the document.
    Format,
    /// Failure to open or read the underlying stream.
    Io,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Format => write!(f, "FormatError"),
            Self::Io => write!(f, "IOError"),
        }
    }
}

/// Errors that can occur while loading a property list.
///
/// Positions are byte offsets into the source as reported by the XML reader.
#[derive(Error, Debug)]
pub enum PlistError {
    /// I/O error.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The XML itself is malformed.
    #[error("XML syntax error at position {pos}: {message}")]
    Syntax { pos: usize, message: String },

    /// The first element is not `<plist>`.
    #[error("Badly formed plist, missing opening <plist> element{}", found_suffix(.found))]
    MissingRoot { found: Option<String> },

    /// The `<plist>` element has no child value.
    #[error("Badly formed plist at position {pos}: no top-level dictionary")]
    MissingRootDictionary { pos: usize },

    /// A dictionary scope does not open with `<dict>`.
    #[error("Badly formed dictionary at position {pos}: found <{found}>")]
    BadDictionary { pos: usize, found: String },

    /// A dictionary entry does not start with `<key>`.
    #[error("Missing key at position {pos}: found <{found}>")]
    MissingKey { pos: usize, found: String },

    /// A `<key>` is not followed by a value element.
    #[error("Missing value for key '{key}' at position {pos}")]
    MissingValue { pos: usize, key: String },

    /// An element at a value position has an unsupported tag.
    #[error("Invalid type at position {pos}: <{tag}>")]
    InvalidType { pos: usize, tag: String },

    /// An `<array>` contains something other than `<dict>`.
    #[error("Invalid array at position {pos}: only dictionaries are supported inside arrays, found <{tag}>")]
    InvalidArrayElement { pos: usize, tag: String },

    /// Scalar text could not be converted to the element's type.
    #[error("Invalid <{tag}> value '{text}' at position {pos}: {message}")]
    InvalidScalar {
        pos: usize,
        tag: String,
        text: String,
        message: String,
    },

    /// A scalar element contains a child element.
    #[error("Unexpected <{tag}> inside <{parent}> at position {pos}")]
    UnexpectedElement {
        pos: usize,
        tag: String,
        parent: String,
    },

    /// Nesting exceeds the configured depth.
    #[error("Nesting depth exceeded (max: {max})")]
    DepthLimitExceeded { max: usize },
}

fn found_suffix(found: &Option<String>) -> String {
    match found {
        Some(tag) => format!(" (found <{}>)", tag),
        None => String::new(),
    }
}

impl PlistError {
    /// Create a syntax error.
    #[inline]
    pub fn syntax(pos: usize, message: impl Into<String>) -> Self {
        Self::Syntax {
            pos,
            message: message.into(),
        }
    }

    /// Create the error for input that ends inside an open element.
    pub fn unexpected_eof(pos: usize) -> Self {
        Self::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("document truncated at position {}", pos),
        ))
    }

    /// Convert a reader error, keeping I/O failures in the I/O kind.
    pub fn from_xml(err: quick_xml::Error, pos: usize) -> Self {
        match err {
            quick_xml::Error::Io(io_err) => {
                Self::Io(io::Error::new(io_err.kind(), io_err.to_string()))
            }
            quick_xml::Error::UnexpectedEof(_) => Self::unexpected_eof(pos),
            other => Self::syntax(pos, other.to_string()),
        }
    }

    /// Classify the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Io(_) => ErrorKind::Io,
            _ => ErrorKind::Format,
        }
    }

    /// Returns true for grammar violations.
    #[inline]
    pub fn is_format(&self) -> bool {
        self.kind() == ErrorKind::Format
    }

    /// Returns true for open/read failures.
    #[inline]
    pub fn is_io(&self) -> bool {
        self.kind() == ErrorKind::Io
    }

    /// Get the byte position if available.
    pub fn position(&self) -> Option<usize> {
        match self {
            Self::Syntax { pos, .. }
            | Self::MissingRootDictionary { pos }
            | Self::BadDictionary { pos, .. }
            | Self::MissingKey { pos, .. }
            | Self::MissingValue { pos, .. }
            | Self::InvalidType { pos, .. }
            | Self::InvalidArrayElement { pos, .. }
            | Self::InvalidScalar { pos, .. }
            | Self::UnexpectedElement { pos, .. } => Some(*pos),
            Self::Io(_) | Self::MissingRoot { .. } | Self::DepthLimitExceeded { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_root_display() {
        let err = PlistError::MissingRoot { found: None };
        assert_eq!(
            err.to_string(),
            "Badly formed plist, missing opening <plist> element"
        );

        let err = PlistError::MissingRoot {
            found: Some("dict".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "Badly formed plist, missing opening <plist> element (found <dict>)"
        );
    }

    #[test]
    fn test_missing_value_names_key() {
        let err = PlistError::MissingValue {
            pos: 12,
            key: "Name".to_string(),
        };
        assert_eq!(err.to_string(), "Missing value for key 'Name' at position 12");
        assert_eq!(err.position(), Some(12));
    }

    #[test]
    fn test_invalid_array_element_display() {
        let err = PlistError::InvalidArrayElement {
            pos: 3,
            tag: "string".to_string(),
        };
        assert!(err
            .to_string()
            .contains("only dictionaries are supported inside arrays"));
        assert!(err.to_string().contains("<string>"));
    }

    #[test]
    fn test_kind_classification() {
        assert_eq!(PlistError::unexpected_eof(10).kind(), ErrorKind::Io);
        assert_eq!(PlistError::syntax(0, "bad").kind(), ErrorKind::Format);
        assert_eq!(
            PlistError::DepthLimitExceeded { max: 4 }.kind(),
            ErrorKind::Format
        );
        assert!(PlistError::from(io::Error::from(io::ErrorKind::NotFound)).is_io());
    }

    #[test]
    fn test_unexpected_eof_is_io_unexpected_eof() {
        match PlistError::unexpected_eof(5) {
            PlistError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::UnexpectedEof),
            other => panic!("expected Io, got {:?}", other),
        }
    }

    #[test]
    fn test_error_kind_display() {
        assert_eq!(ErrorKind::Format.to_string(), "FormatError");
        assert_eq!(ErrorKind::Io.to_string(), "IOError");
    }
}
