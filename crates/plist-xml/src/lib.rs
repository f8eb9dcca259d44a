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

//! Streaming XML property list parser.
//!
//! Reads an XML property list as a forward-only stream of opening tags and
//! builds a [`PropertyTree`] without ever holding a DOM of the document.
//!
//! # Features
//!
//! - Single pass over the input with bounded lookahead
//! - Scope-isolated recursion into nested `<dict>` and `<array>` values
//! - Works offline: the `DOCTYPE` is skipped and no DTD is ever fetched
//! - Errors classified as format or I/O failures via [`PlistError::kind`]
//!
//! # Supported elements
//!
//! | Element | Value |
//! |---|---|
//! | `<true/>`, `<false/>` | [`Value::Bool`] |
//! | `<string>` | [`Value::String`] |
//! | `<integer>` | [`Value::Integer`] |
//! | `<date>` | [`Value::Date`] |
//! | `<dict>` | [`Value::Dict`] |
//! | `<array>` of `<dict>` | [`Value::List`] |
//! | `<data>` | skipped, key omitted |
//!
//! # Examples
//!
//! ```rust
//! use plist_xml::from_str;
//! use plist_core::Value;
//!
//! let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
//! <!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
//! <plist version="1.0">
//! <dict>
//!     <key>Name</key><string>Test</string>
//!     <key>Flag</key><false/>
//! </dict>
//! </plist>"#;
//!
//! let tree = from_str(xml)?;
//! assert_eq!(tree.get_str("Name")?, "Test");
//! assert_eq!(tree.get_or("Flag", Value::Bool(true)), Value::Bool(false));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cursor;
mod error;
mod loader;
pub mod parser;

pub use error::{ErrorKind, PlistError, PlistResult};
pub use loader::{from_reader, from_str, load, load_with_config, parse_document, LoadConfig};

/// Re-export core types for convenience.
pub use plist_core::{PropertyTree, Value};
