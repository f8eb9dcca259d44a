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

//! Malformed property lists.

/// Documents that are complete XML but not valid property lists.
///
/// Every sample must fail with a format error.
pub fn malformed_samples() -> Vec<(&'static str, &'static str)> {
    vec![
        ("empty", ""),
        ("wrong_root", "<dict><key>a</key><true/></dict>"),
        ("empty_plist", "<plist></plist>"),
        ("root_not_dict", "<plist><string>x</string></plist>"),
        (
            "value_before_key",
            "<plist><dict><string>x</string></dict></plist>",
        ),
        (
            "key_without_value",
            "<plist><dict><key>a</key></dict></plist>",
        ),
        (
            "two_keys",
            "<plist><dict><key>a</key><key>b</key><true/></dict></plist>",
        ),
        (
            "unknown_value",
            "<plist><dict><key>a</key><real>1.5</real></dict></plist>",
        ),
        (
            "array_of_strings",
            "<plist><dict><key>a</key><array><string>x</string></array></dict></plist>",
        ),
        (
            "bad_integer",
            "<plist><dict><key>a</key><integer>twelve</integer></dict></plist>",
        ),
        (
            "bad_date",
            "<plist><dict><key>a</key><date>yesterday</date></dict></plist>",
        ),
        (
            "element_in_string",
            "<plist><dict><key>a</key><string>x<b/></string></dict></plist>",
        ),
        (
            "mismatched_close",
            "<plist><dict><key>a</key><string>x</integer></dict></plist>",
        ),
    ]
}

/// Documents cut off inside an open element.
///
/// Every sample must fail with an I/O error.
pub fn truncated_samples() -> Vec<(&'static str, &'static str)> {
    vec![
        ("open_plist", "<plist>"),
        ("open_dict", "<plist><dict>"),
        ("after_key", "<plist><dict><key>a</key>"),
        ("inside_string", "<plist><dict><key>a</key><string>abc"),
        (
            "inside_array",
            "<plist><dict><key>a</key><array><dict><key>b</key><true/></dict>",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_names_are_unique() {
        let mut names: Vec<_> = malformed_samples()
            .into_iter()
            .chain(truncated_samples())
            .map(|(n, _)| n)
            .collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
    }
}
