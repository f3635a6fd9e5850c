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
use crate::interfaces::RuleSet;

use super::InvalidRuleSetError;

fn is_ascii_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

/// Checks the parts of a rule-set the pipeline relies on.
pub(super) fn validate_rule_set(rule_set: &dyn RuleSet) -> Result<(), InvalidRuleSetError> {
    let country_calling_code = rule_set.country_calling_code();
    if country_calling_code.is_empty() || !is_ascii_digits(country_calling_code) {
        return Err(InvalidRuleSetError::InvalidCountryCallingCode(
            country_calling_code.to_owned(),
        ));
    }

    let trunk_code = rule_set.trunk_code();
    if !is_ascii_digits(trunk_code) {
        return Err(InvalidRuleSetError::InvalidTrunkCode {
            country_calling_code: country_calling_code.to_owned(),
            trunk_code: trunk_code.to_owned(),
        });
    }

    let lengths = rule_set.national_number_lengths();
    if lengths.is_empty() {
        return Err(InvalidRuleSetError::NoNationalNumberLengths(
            country_calling_code.to_owned(),
        ));
    }
    if lengths.contains(&0) {
        return Err(InvalidRuleSetError::ZeroNationalNumberLength(
            country_calling_code.to_owned(),
        ));
    }

    Ok(())
}
