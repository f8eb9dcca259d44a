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

//! Forward-only token cursor over an XML event stream.
//!
//! The cursor only ever stops on opening tags. Everything else (text between
//! elements, comments, processing instructions, the `DOCTYPE`) is stepped
//! over while advancing.
//!
//! # Scopes
//!
//! A nested parse runs inside a [`Scope`] bounded to a single element. The
//! cursor tracks the current element depth and a *floor*: the depth of the
//! element the innermost scope was entered on. Once the element's close tag
//! drops the depth below the floor, [`TokenCursor::advance`] reports the end
//! of the scope without reading further, so a nested parse can never consume
//! tokens that belong to its parent.
//!
//! [`Scope::finish`] drains whatever the nested parse left unread, up to and
//! including the close tag, and the parent resumes right after the element.
//! Dropping a scope without finishing it abandons the rest of the element.
//!
//! ```rust
//! use plist_xml::cursor::TokenCursor;
//!
//! let xml = "<a><b><c/></b><d/></a>";
//! let mut cursor = TokenCursor::new(xml.as_bytes(), 16);
//!
//! assert!(cursor.advance().unwrap());
//! assert_eq!(cursor.at_start(), Some("a"));
//! assert!(cursor.advance().unwrap());
//! assert_eq!(cursor.at_start(), Some("b"));
//!
//! // Parse <b> in isolation, reading only its first child.
//! cursor
//!     .scoped(|inner| {
//!         assert!(inner.advance()?);
//!         assert_eq!(inner.at_start(), Some("c"));
//!         Ok(())
//!     })
//!     .unwrap();
//!
//! // The parent continues with the sibling of <b>.
//! assert!(cursor.advance().unwrap());
//! assert_eq!(cursor.at_start(), Some("d"));
//! ```

use crate::error::{PlistError, PlistResult};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::BufRead;
use std::ops::{Deref, DerefMut};
use tracing::trace;

/// Forward-only cursor reporting opening tags.
pub struct TokenCursor<R: BufRead> {
    reader: Reader<R>,
    buf: Vec<u8>,
    /// Local name of the opening tag the cursor sits on, if any.
    current: Option<String>,
    /// Number of elements currently open.
    depth: usize,
    /// Depth of the element the innermost scope was entered on.
    floor: usize,
    /// Number of live scopes.
    scopes: usize,
    max_depth: usize,
}

impl<R: BufRead> TokenCursor<R> {
    /// Create a cursor over `source`, allowing at most `max_depth` nested scopes.
    ///
    /// Empty elements are expanded so `<true/>` reads exactly like
    /// `<true></true>`. The reader never resolves external entities or DTDs.
    pub fn new(source: R, max_depth: usize) -> Self {
        let mut reader = Reader::from_reader(source);
        reader.expand_empty_elements(true);
        reader.check_end_names(true);
        reader.trim_text(false);

        Self {
            reader,
            buf: Vec::with_capacity(1024),
            current: None,
            depth: 0,
            floor: 0,
            scopes: 0,
            max_depth,
        }
    }

    /// Tag name of the opening tag the cursor is positioned at.
    ///
    /// Returns `None` once the element has been consumed or the cursor has
    /// moved past it.
    #[inline]
    pub fn at_start(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Byte offset of the reader in the source.
    #[inline]
    pub fn position(&self) -> usize {
        self.reader.buffer_position()
    }

    /// Number of elements currently open.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Move to the next opening tag within the current scope.
    ///
    /// When called while positioned on an opening tag, the cursor descends
    /// into that element's content. Returns `false` at the end of the input
    /// or once the scope's element has been closed.
    pub fn advance(&mut self) -> PlistResult<bool> {
        self.current = None;

        loop {
            if self.depth < self.floor {
                return Ok(false);
            }

            self.buf.clear();
            let event = match self.reader.read_event_into(&mut self.buf) {
                Ok(event) => event,
                Err(err) => return Err(PlistError::from_xml(err, self.reader.buffer_position())),
            };

            match event {
                Event::Start(e) => {
                    let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                    self.depth += 1;
                    self.current = Some(name);
                    return Ok(true);
                }
                Event::End(_) => {
                    self.depth = self.depth.saturating_sub(1);
                }
                Event::Eof => {
                    if self.depth > 0 {
                        return Err(PlistError::unexpected_eof(self.reader.buffer_position()));
                    }
                    return Ok(false);
                }
                _ => {}
            }
        }
    }

    /// Consume the current element and return its text content.
    ///
    /// Entities are unescaped and CDATA sections are included verbatim.
    /// Comments are ignored. A child element is a format error.
    pub fn read_text(&mut self) -> PlistResult<String> {
        let Some(parent) = self.current.take() else {
            return Err(PlistError::syntax(
                self.position(),
                "text requested while not positioned on an element",
            ));
        };

        let mut text = String::new();
        loop {
            self.buf.clear();
            let event = match self.reader.read_event_into(&mut self.buf) {
                Ok(event) => event,
                Err(err) => return Err(PlistError::from_xml(err, self.reader.buffer_position())),
            };

            match event {
                Event::Text(t) => match t.unescape() {
                    Ok(unescaped) => text.push_str(&unescaped),
                    Err(err) => {
                        return Err(PlistError::from_xml(err, self.reader.buffer_position()))
                    }
                },
                Event::CData(c) => text.push_str(&String::from_utf8_lossy(&c)),
                Event::Start(e) => {
                    return Err(PlistError::UnexpectedElement {
                        pos: self.reader.buffer_position(),
                        tag: String::from_utf8_lossy(e.local_name().as_ref()).into_owned(),
                        parent,
                    });
                }
                Event::End(_) => {
                    self.depth = self.depth.saturating_sub(1);
                    return Ok(text);
                }
                Event::Eof => {
                    return Err(PlistError::unexpected_eof(self.reader.buffer_position()));
                }
                _ => {}
            }
        }
    }

    /// Bound the cursor to the element it is positioned at.
    ///
    /// The returned guard dereferences to the cursor. Call [`Scope::finish`]
    /// to resynchronize the parent past the element's close tag.
    pub fn enter(&mut self) -> PlistResult<Scope<'_, R>> {
        let Some(tag) = self.current.as_deref() else {
            return Err(PlistError::syntax(
                self.position(),
                "scope requested while not positioned on an element",
            ));
        };
        if self.scopes >= self.max_depth {
            return Err(PlistError::DepthLimitExceeded {
                max: self.max_depth,
            });
        }
        trace!(tag, depth = self.depth, "entering scope");

        let saved_floor = self.floor;
        self.floor = self.depth;
        self.scopes += 1;

        Ok(Scope {
            cursor: self,
            saved_floor,
        })
    }

    /// Run `parse` inside a scope bounded to the current element.
    ///
    /// On success the cursor is left immediately after the element, however
    /// much of it `parse` consumed. On error the scope is abandoned.
    pub fn scoped<T, F>(&mut self, parse: F) -> PlistResult<T>
    where
        F: FnOnce(&mut TokenCursor<R>) -> PlistResult<T>,
    {
        let mut scope = self.enter()?;
        let value = parse(&mut *scope)?;
        scope.finish()?;
        Ok(value)
    }

    /// Consume the current element, including any children, unread.
    pub fn skip_element(&mut self) -> PlistResult<()> {
        self.scoped(|_| Ok(()))
    }

    /// Read until the innermost scope's element is closed.
    fn drain(&mut self) -> PlistResult<()> {
        self.current = None;

        while self.depth >= self.floor {
            self.buf.clear();
            let event = match self.reader.read_event_into(&mut self.buf) {
                Ok(event) => event,
                Err(err) => return Err(PlistError::from_xml(err, self.reader.buffer_position())),
            };

            match event {
                Event::Start(_) => self.depth += 1,
                Event::End(_) => self.depth = self.depth.saturating_sub(1),
                Event::Eof => {
                    return Err(PlistError::unexpected_eof(self.reader.buffer_position()));
                }
                _ => {}
            }
        }
        Ok(())
    }
}

/// A cursor bounded to one element.
///
/// Created by [`TokenCursor::enter`]. Dereferences to the underlying cursor,
/// so scopes nest: entering from inside a scope bounds the cursor further.
pub struct Scope<'c, R: BufRead> {
    cursor: &'c mut TokenCursor<R>,
    saved_floor: usize,
}

impl<R: BufRead> Scope<'_, R> {
    /// Skip the rest of the element and hand the cursor back to the parent,
    /// positioned just after the element's close tag.
    pub fn finish(self) -> PlistResult<()> {
        self.cursor.drain()
    }
}

impl<R: BufRead> Deref for Scope<'_, R> {
    type Target = TokenCursor<R>;

    fn deref(&self) -> &Self::Target {
        self.cursor
    }
}

impl<R: BufRead> DerefMut for Scope<'_, R> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.cursor
    }
}

impl<R: BufRead> Drop for Scope<'_, R> {
    fn drop(&mut self) {
        self.cursor.floor = self.saved_floor;
        self.cursor.scopes -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn cursor(xml: &str) -> TokenCursor<&[u8]> {
        TokenCursor::new(xml.as_bytes(), 16)
    }

    #[test]
    fn test_advance_skips_text_comments_and_doctype() {
        let xml = r#"<?xml version="1.0"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<!-- comment -->
<plist>
    <dict/>
</plist>"#;
        let mut c = cursor(xml);
        assert!(c.advance().unwrap());
        assert_eq!(c.at_start(), Some("plist"));
        assert!(c.advance().unwrap());
        assert_eq!(c.at_start(), Some("dict"));
        assert!(!c.advance().unwrap());
        assert_eq!(c.at_start(), None);
    }

    #[test]
    fn test_read_text_unescapes_and_consumes_element() {
        let mut c = cursor("<a><s>Rock &amp; Roll</s><t/></a>");
        assert!(c.advance().unwrap());
        assert!(c.advance().unwrap());
        assert_eq!(c.read_text().unwrap(), "Rock & Roll");
        assert_eq!(c.at_start(), None);
        assert!(c.advance().unwrap());
        assert_eq!(c.at_start(), Some("t"));
    }

    #[test]
    fn test_read_text_keeps_whitespace_and_cdata() {
        let mut c = cursor("<s>  padded <![CDATA[<raw>]]></s>");
        assert!(c.advance().unwrap());
        assert_eq!(c.read_text().unwrap(), "  padded <raw>");
    }

    #[test]
    fn test_read_text_of_empty_element() {
        let mut c = cursor("<a><s/><s></s></a>");
        assert!(c.advance().unwrap());
        assert!(c.advance().unwrap());
        assert_eq!(c.read_text().unwrap(), "");
        assert!(c.advance().unwrap());
        assert_eq!(c.read_text().unwrap(), "");
        assert!(!c.advance().unwrap());
    }

    #[test]
    fn test_read_text_rejects_child_element() {
        let mut c = cursor("<string>abc<b/></string>");
        assert!(c.advance().unwrap());
        let err = c.read_text().unwrap_err();
        assert!(matches!(
            err,
            PlistError::UnexpectedElement { ref tag, ref parent, .. } if tag == "b" && parent == "string"
        ));
    }

    #[test]
    fn test_scope_stops_at_element_boundary() {
        let mut c = cursor("<r><x><y/><z/></x><w/></r>");
        assert!(c.advance().unwrap());
        assert!(c.advance().unwrap());
        assert_eq!(c.at_start(), Some("x"));

        let seen = c
            .scoped(|inner| {
                let mut names = Vec::new();
                while inner.advance()? {
                    names.push(inner.at_start().unwrap_or_default().to_string());
                }
                // Exhausted scopes stay exhausted.
                assert!(!inner.advance()?);
                Ok(names)
            })
            .unwrap();

        assert_eq!(seen, vec!["y", "z"]);
        assert!(c.advance().unwrap());
        assert_eq!(c.at_start(), Some("w"));
    }

    #[test]
    fn test_unfinished_scope_is_drained_on_finish() {
        let mut c = cursor("<r><x><y><deep/></y><z/></x><w/></r>");
        assert!(c.advance().unwrap());
        assert!(c.advance().unwrap());

        c.scoped(|inner| {
            assert!(inner.advance()?);
            assert_eq!(inner.at_start(), Some("y"));
            Ok(())
        })
        .unwrap();

        assert_eq!(c.depth(), 1);
        assert!(c.advance().unwrap());
        assert_eq!(c.at_start(), Some("w"));
    }

    #[test]
    fn test_nested_scopes_restore_parent_floor() {
        let mut c = cursor("<r><a><b><c/></b><d/></a><e/></r>");
        assert!(c.advance().unwrap());
        assert!(c.advance().unwrap());

        c.scoped(|a| {
            assert!(a.advance()?);
            assert_eq!(a.at_start(), Some("b"));
            a.scoped(|b| {
                assert!(b.advance()?);
                assert_eq!(b.at_start(), Some("c"));
                assert!(!b.advance()?);
                Ok(())
            })?;
            assert!(a.advance()?);
            assert_eq!(a.at_start(), Some("d"));
            assert!(!a.advance()?);
            Ok(())
        })
        .unwrap();

        assert!(c.advance().unwrap());
        assert_eq!(c.at_start(), Some("e"));
    }

    #[test]
    fn test_skip_element() {
        let mut c = cursor("<r><data>AAAA<x/>BBBB</data><after/></r>");
        assert!(c.advance().unwrap());
        assert!(c.advance().unwrap());
        c.skip_element().unwrap();
        assert!(c.advance().unwrap());
        assert_eq!(c.at_start(), Some("after"));
    }

    #[test]
    fn test_enter_requires_start_tag() {
        let mut c = cursor("<r/>");
        assert!(c.enter().is_err());
    }

    #[test]
    fn test_depth_limit() {
        let mut c = TokenCursor::new("<a><b><c/></b></a>".as_bytes(), 1);
        assert!(c.advance().unwrap());
        let err = c
            .scoped(|a| {
                assert!(a.advance()?);
                a.skip_element()
            })
            .unwrap_err();
        assert!(matches!(err, PlistError::DepthLimitExceeded { max: 1 }));
    }

    #[test]
    fn test_truncated_input_is_io_error() {
        let mut c = cursor("<plist><dict><key>A</key>");
        assert!(c.advance().unwrap());
        let err = c.skip_element().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }

    #[test]
    fn test_mismatched_end_tag_is_format_error() {
        let mut c = cursor("<a><b></a>");
        assert!(c.advance().unwrap());
        let err = c.skip_element().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);
    }
}
