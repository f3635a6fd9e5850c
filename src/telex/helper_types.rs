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
use std::borrow::Cow;

/// A hypothesized split of a digit string into a calling code and a
/// national number. An empty calling code means the digits were read as a
/// national number only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Candidate<'a> {
    pub country_calling_code: &'a str,
    pub national_number: Cow<'a, str>,
}

impl<'a> Candidate<'a> {
    pub fn new(country_calling_code: &'a str, national_number: &'a str) -> Self {
        Self {
            country_calling_code,
            national_number: Cow::Borrowed(national_number),
        }
    }

    /// Prepends `trunk_code` to the national number of an international
    /// candidate that does not already start with it.
    ///
    /// A national-only candidate is left as-is: with no calling code there
    /// was nothing to omit the trunk code for.
    pub fn with_completed_trunk_code(self, trunk_code: &str) -> Self {
        if self.country_calling_code.is_empty()
            || trunk_code.is_empty()
            || self.national_number.starts_with(trunk_code)
        {
            return self;
        }

        Self {
            national_number: Cow::Owned(fast_cat::concat_str!(trunk_code, &self.national_number)),
            ..self
        }
    }

    /// Digit count of the national number.
    pub fn national_number_length(&self) -> usize {
        // candidates are cut from digit-only strings
        self.national_number.len()
    }
}
