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

//! End-to-end tests for document loading.

use plist_core::{LookupError, PropertyTree, Value};
use plist_test::fixtures;
use plist_xml::{from_str, load, ErrorKind, PlistError};
use std::io::Write;
use tempfile::NamedTempFile;

// ============================================================================
// Helper Functions
// ============================================================================

fn write_temp(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".xml")
        .tempfile()
        .unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

// ============================================================================
// Loading From Disk
// ============================================================================

#[test]
fn test_load_minimal_document() {
    let file = write_temp(&fixtures::minimal());
    let tree = load(file.path()).unwrap();
    assert_eq!(tree.get("Name"), Ok(&Value::String("Test".to_string())));
    assert_eq!(tree.len(), 1);
}

#[test]
fn test_nonexistent_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load(dir.path().join("missing.xml")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
    assert!(err.is_io());
    assert!(!err.is_format());
}

#[test]
fn test_malformed_file_is_format_error() {
    let file = write_temp("<dict><key>a</key><true/></dict>");
    let err = load(file.path()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
    assert!(err.to_string().contains("missing opening <plist> element"));
}

#[test]
fn test_load_full_library() {
    let file = write_temp(&fixtures::itunes_library());
    let tree = load(file.path()).unwrap();

    assert_eq!(tree.get_str("Application Version"), Ok("10.4.1"));
    let tracks = tree.get_dict("Tracks").unwrap();
    assert_eq!(tracks.keys().collect::<Vec<_>>(), vec!["101", "102", "103", "104"]);

    let playlists = tree.get_list("Playlists").unwrap();
    assert_eq!(playlists.len(), 3);
    assert_eq!(playlists[1].get_str("Name"), Ok("Road Trip"));
    assert!(!playlists[1].contains("Smart Info"));
    // the key after the skipped blob is still read
    assert_eq!(playlists[1].get_bool("All Items"), Ok(true));
    assert_eq!(tree.get_str("Library Persistent ID"), Ok("1234ABCD5678EF90"));
}

// ============================================================================
// Lookup Semantics
// ============================================================================

#[test]
fn test_flags_document() {
    let tree = from_str(&fixtures::flags()).unwrap();

    assert_eq!(tree.get_str("Name"), Ok("Test"));
    assert_eq!(tree.get("Flag"), Ok(&Value::Bool(false)));
    assert!(!tree.contains("Missing"));
    assert_eq!(tree.get_or("Missing", Value::Bool(true)), Value::Bool(true));
    assert_eq!(tree.get_or("Flag", Value::Bool(true)), Value::Bool(false));
    assert_eq!(
        tree.get("Missing"),
        Err(LookupError::key_not_found("Missing"))
    );
}

#[test]
fn test_array_of_dicts_in_source_order() {
    let tree = from_str(&fixtures::two_tracks()).unwrap();
    let list = tree.get_list("Items").unwrap();

    assert_eq!(list.len(), 2);
    assert_eq!(list[0].get("Track ID"), Ok(&Value::Integer(1)));
    assert_eq!(list[1].get("Track ID"), Ok(&Value::Integer(2)));
}

#[test]
fn test_every_type() {
    let tree = from_str(&fixtures::every_type()).unwrap();

    assert_eq!(tree.get_bool("Yes"), Ok(true));
    assert_eq!(tree.get_bool("No"), Ok(false));
    assert_eq!(tree.get_str("Text"), Ok("Rock & Roll <Live>"));
    assert_eq!(tree.get_str("Empty"), Ok(""));
    assert_eq!(tree.get_integer("Count"), Ok(-12));
    let when = tree.get("When").unwrap().as_date().unwrap();
    assert_eq!(when.to_rfc3339(), "2011-04-24T18:30:05+00:00");
    assert!(!tree.contains("Blob"));
    assert_eq!(tree.get_dict("Child").unwrap().get_integer("A"), Ok(1));
    assert!(tree.get_list("Children").unwrap().is_empty());
    assert_eq!(tree.get_str("Last"), Ok("end"));
}

#[test]
fn test_cdata_in_string() {
    let tree =
        from_str("<plist><dict><key>s</key><string>a<![CDATA[<b>&]]>c</string></dict></plist>")
            .unwrap();
    assert_eq!(tree.get_str("s"), Ok("a<b>&c"));
}

#[test]
fn test_doctype_with_remote_dtd_parses_offline() {
    // the DTD URL is unreachable on purpose
    let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://invalid.invalid/PropertyList-1.0.dtd">
<plist version="1.0"><dict><key>k</key><integer>5</integer></dict></plist>"#;
    let tree = from_str(xml).unwrap();
    assert_eq!(tree.get_integer("k"), Ok(5));
}

// ============================================================================
// Format Errors
// ============================================================================

#[test]
fn test_string_inside_array_fails_without_partial_list() {
    let xml = r#"<plist><dict><key>Items</key><array>
        <dict><key>Track ID</key><integer>1</integer></dict>
        <string>stray</string>
        <dict><key>Track ID</key><integer>2</integer></dict>
    </array></dict></plist>"#;
    let err = from_str(xml).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
    assert!(matches!(err, PlistError::InvalidArrayElement { ref tag, .. } if tag == "string"));
}

#[test]
fn test_root_value_not_dict_is_badly_formed_dictionary() {
    let err = from_str("<plist><string>x</string></plist>").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
    assert!(err.to_string().contains("Badly formed dictionary"));
}

#[test]
fn test_key_followed_by_key_names_dangling_key() {
    let err = from_str("<plist><dict><key>Lonely</key><key>b</key><true/></dict></plist>")
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
    assert!(matches!(err, PlistError::MissingValue { ref key, .. } if key == "Lonely"));
    assert!(err.to_string().contains("Lonely"));
}

#[test]
fn test_missing_root_is_format_error() {
    let err = from_str("<?xml version=\"1.0\"?><dict/>").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
    assert!(matches!(err, PlistError::MissingRoot { .. }));
}

#[test]
fn test_format_errors_carry_positions() {
    let err = from_str("<plist><dict><key>a</key><real>1</real></dict></plist>").unwrap_err();
    let pos = err.position().unwrap();
    assert!(pos > 0);
    assert!(pos <= "<plist><dict><key>a</key><real>".len());
}

#[test]
fn test_truncated_input_is_io_error() {
    let err = from_str("<plist><dict><key>a</key><string>unfinished").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
    match err {
        PlistError::Io(io) => assert_eq!(io.kind(), std::io::ErrorKind::UnexpectedEof),
        other => panic!("expected Io, got {:?}", other),
    }
}

// ============================================================================
// Idempotence And Scope Isolation
// ============================================================================

#[test]
fn test_parsing_twice_gives_equal_trees() {
    let xml = fixtures::itunes_library();
    let first = from_str(&xml).unwrap();
    let second = from_str(&xml).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_siblings_after_nested_scopes() {
    let tree = from_str(&fixtures::nested_scopes()).unwrap();

    let outer = tree.get_dict("Outer").unwrap();
    let inner = outer.get_dict("Inner").unwrap();
    assert_eq!(
        inner.get_dict("Deep").unwrap().get_str("Leaf"),
        Ok("bottom")
    );
    assert_eq!(inner.get_integer("AfterDeep"), Ok(1));
    assert_eq!(outer.get_integer("AfterInner"), Ok(2));

    let list = outer.get_list("List").unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0].get_dict("Nested").unwrap().get_bool("X"), Ok(true));
    assert!(list[1].is_empty());
    assert_eq!(outer.get_integer("AfterList"), Ok(3));

    assert_eq!(tree.get_str("AfterOuter"), Ok("top"));
    assert_eq!(tree.len(), 2);
}

mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn write_value(out: &mut String, value: &Value) {
        match value {
            Value::Bool(true) => out.push_str("<true/>"),
            Value::Bool(false) => out.push_str("<false/>"),
            Value::String(s) => {
                out.push_str("<string>");
                out.push_str(&plist_test::fixtures::builders::escape(s));
                out.push_str("</string>");
            }
            Value::Integer(i) => out.push_str(&format!("<integer>{}</integer>", i)),
            Value::Date(d) => out.push_str(&format!("<date>{}</date>", d.to_rfc3339())),
            Value::Dict(tree) => write_dict(out, tree),
            Value::List(items) => {
                out.push_str("<array>");
                for item in items {
                    write_dict(out, item);
                }
                out.push_str("</array>");
            }
        }
    }

    fn write_dict(out: &mut String, tree: &PropertyTree) {
        out.push_str("<dict>");
        for (key, value) in tree.iter() {
            out.push_str("<key>");
            out.push_str(&plist_test::fixtures::builders::escape(key));
            out.push_str("</key>");
            write_value(out, value);
        }
        out.push_str("</dict>");
    }

    fn to_document(tree: &PropertyTree) -> String {
        let mut out = String::from("<plist version=\"1.0\">");
        write_dict(&mut out, tree);
        out.push_str("</plist>");
        out
    }

    fn scalar() -> impl Strategy<Value = Value> {
        prop_oneof![
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(Value::Integer),
            "[a-zA-Z0-9 &<>]{0,12}".prop_map(Value::String),
        ]
    }

    fn tree() -> impl Strategy<Value = PropertyTree> {
        let leaf = prop::collection::vec(("[A-Za-z][A-Za-z0-9 ]{0,8}", scalar()), 0..4)
            .prop_map(|entries| entries.into_iter().collect::<PropertyTree>());
        leaf.prop_recursive(4, 48, 4, |inner| {
            prop::collection::vec(
                (
                    "[A-Za-z][A-Za-z0-9 ]{0,8}",
                    prop_oneof![
                        scalar(),
                        inner.clone().prop_map(Value::Dict),
                        prop::collection::vec(inner, 0..3).prop_map(Value::List),
                    ],
                ),
                0..5,
            )
            .prop_map(|entries| entries.into_iter().collect::<PropertyTree>())
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(128))]

        /// Arbitrarily nested compounds never leak tokens into their parent.
        #[test]
        fn prop_nested_documents_parse_exactly(expected in tree()) {
            let parsed = from_str(&to_document(&expected)).unwrap();
            prop_assert_eq!(parsed, expected);
        }

        /// Integers survive surrounding whitespace.
        #[test]
        fn prop_integer_text_is_trimmed(n in any::<i64>(), pad in "[ \t\n]{0,3}") {
            let xml = format!(
                "<plist><dict><key>n</key><integer>{pad}{n}{pad}</integer></dict></plist>"
            );
            let tree = from_str(&xml).unwrap();
            prop_assert_eq!(tree.get_integer("n"), Ok(n));
        }
    }
}
