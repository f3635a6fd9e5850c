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

use std::sync::Arc;

use regex::Regex;

use crate::regexp_cache::{InvalidRegexError, PermutationPatternCache, PermutationPatterns};

use super::helper_constants::{EXPLICIT_COUNTRY_CALLING_CODE, INSIGNIFICANT_CHARS};

pub(super) struct TelexRegExps {
    /// Characters other than digits, `+` and whitespace.
    pub insignificant_chars_pattern: Regex,

    /// Captures the digits after a leading `+` and everything after the
    /// whitespace that ends them.
    pub explicit_country_calling_code_pattern: Regex,

    /// Patterns built from a rule-set's calling code, compiled on first use.
    permutation_patterns: PermutationPatternCache,
}

impl TelexRegExps {
    pub fn new(rule_sets_count: usize) -> Self {
        Self {
            insignificant_chars_pattern: Regex::new(INSIGNIFICANT_CHARS).unwrap(),
            explicit_country_calling_code_pattern: Regex::new(EXPLICIT_COUNTRY_CALLING_CODE).unwrap(),
            permutation_patterns: PermutationPatternCache::with_capacity(rule_sets_count),
        }
    }

    pub fn permutation_patterns(
        &self,
        country_calling_code: &str,
    ) -> Result<Arc<PermutationPatterns>, InvalidRegexError> {
        self.permutation_patterns.patterns_for(country_calling_code)
    }
}
