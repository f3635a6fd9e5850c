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

use thiserror::Error;

use crate::regexp_cache::InvalidRegexError;

/// Broken contracts inside the matching pipeline. These are never caused by
/// user input; a rejected input is simply `None`.
#[derive(Debug, PartialEq, Error)]
pub enum InternalLogicError {
    #[error("{0}")]
    InvalidRegex(#[from] InvalidRegexError),

    #[error("The last match-step failed to return a confirmed telephone number for calling code {country_calling_code}")]
    UnconfirmedMatch { country_calling_code: String },
}

/// A rule-set whose configuration cannot be used by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidRuleSetError {
    #[error("Country calling code must be a non-empty string of ASCII digits, got {0:?}")]
    InvalidCountryCallingCode(String),
    #[error("Trunk code of calling code {country_calling_code} must contain only ASCII digits, got {trunk_code:?}")]
    InvalidTrunkCode {
        country_calling_code: String,
        trunk_code: String,
    },
    #[error("Rule-set for calling code {0} accepts no national number length")]
    NoNationalNumberLengths(String),
    #[error("Rule-set for calling code {0} accepts a zero-length national number")]
    ZeroNationalNumberLength(String),
}

impl InternalLogicError {
    /// Turns a broken internal contract into a panic at the public boundary.
    pub fn into_public(self) -> ! {
        log::error!("{}", self);
        match self {
            InternalLogicError::InvalidRegex(err) =>
                panic!("A valid regex is expected for permutations; this indicates a library bug! {}", err),
            InternalLogicError::UnconfirmedMatch { country_calling_code } =>
                panic!("Rule-set for calling code {} reported a match it did not confirm; this indicates a bug in the rule-set!", country_calling_code),
        }
    }
}
