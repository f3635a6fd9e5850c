// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use log::error;
use regex::Regex;

use crate::regexp_cache::InvalidRegexError;

/// Name prefix of the capture group wrapped around each table entry.
const ENTRY_GROUP_PREFIX: &str = "entry";

/// Prefix that matched at the start of a national number, with the label
/// of the table entry it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchedPrefix<'a> {
    pub prefix: &'a str,
    pub label: &'static str,
}

/// An ordered list of `(pattern, label)` pairs compiled into one anchored
/// alternation.
///
/// Table order is the authority: the first listed pattern that matches at
/// the start of the number wins, even when a later one would match more
/// digits.
pub struct PrefixTable {
    /// `None` for an empty table, which never matches.
    regex: Option<Regex>,
    labels: Vec<&'static str>,
    /// Capture group index -> table entry index.
    group_to_entry: Vec<Option<usize>>,
}

impl PrefixTable {
    pub fn new(entries: &[(&str, &'static str)]) -> Result<Self, InvalidRegexError> {
        let labels = entries.iter().map(|(_, label)| *label).collect();
        if entries.is_empty() {
            return Ok(Self { regex: None, labels, group_to_entry: Vec::new() });
        }

        let patterns_len: usize = entries.iter().map(|(pattern, _)| pattern.len() + 16).sum();
        let mut alternation = String::with_capacity(patterns_len + 5);
        alternation.push_str("^(?:");
        for (idx, (pattern, _)) in entries.iter().enumerate() {
            if idx > 0 {
                alternation.push('|');
            }
            alternation.push_str("(?P<");
            alternation.push_str(ENTRY_GROUP_PREFIX);
            alternation.push_str(&idx.to_string());
            alternation.push('>');
            alternation.push_str(pattern);
            alternation.push(')');
        }
        alternation.push(')');

        let regex = Regex::new(&alternation)?;
        let group_to_entry = regex
            .capture_names()
            .map(|name| {
                name.and_then(|name| name.strip_prefix(ENTRY_GROUP_PREFIX))
                    .and_then(|idx| idx.parse().ok())
            })
            .collect();

        Ok(Self { regex: Some(regex), labels, group_to_entry })
    }

    /// Builds a table that ships with the crate. A broken built-in pattern
    /// is a library bug, so it is fatal.
    pub fn compiled_in(table_name: &str, entries: &[(&str, &'static str)]) -> Self {
        match Self::new(entries) {
            Ok(table) => table,
            Err(err) => {
                let err_message = format!("Could not compile built-in prefix table {}: {}", table_name, err);
                error!("{}", err_message);
                panic!("{}", err_message);
            }
        }
    }

    /// Returns the prefix matched by the first table entry that matches at
    /// the start of `national_number`.
    pub fn find<'a>(&self, national_number: &'a str) -> Option<MatchedPrefix<'a>> {
        let captures = self.regex.as_ref()?.captures(national_number)?;

        captures
            .iter()
            .enumerate()
            .skip(1)
            .find_map(|(group_idx, group)| {
                let entry_idx = (*self.group_to_entry.get(group_idx)?)?;
                let group = group?;
                Some(MatchedPrefix {
                    prefix: group.as_str(),
                    label: self.labels[entry_idx],
                })
            })
    }
}
