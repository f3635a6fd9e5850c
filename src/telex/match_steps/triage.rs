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
use log::trace;

use crate::{
    interfaces::{MatchStep, RuleSet},
    string_util::only_digits,
    telex::{InternalLogicError, TelephoneNumber, telex_regexps::TelexRegExps},
};

/// Resolves numbers written with an explicit `+<calling code>` prefix and
/// rejects rule-sets whose calling code differs from it.
///
/// Numbers without such a prefix pass through untouched.
pub(in crate::telex) struct TriageRawInput<'a> {
    reg_exps: &'a TelexRegExps,
}

impl<'a> TriageRawInput<'a> {
    pub fn new(reg_exps: &'a TelexRegExps) -> Self {
        Self { reg_exps }
    }

    /// Calling code and national number digits of an explicitly prefixed
    /// input.
    fn explicit_main_numbers(&self, source: &str) -> Option<(String, String)> {
        let cleaned = self
            .reg_exps
            .insignificant_chars_pattern
            .replace_all(source, " ");
        let captures = self
            .reg_exps
            .explicit_country_calling_code_pattern
            .captures(&cleaned)?;

        let country_calling_code = captures.get(1).map_or("", |m| m.as_str());
        let rest = captures.get(2).map_or("", |m| m.as_str());
        Some((country_calling_code.to_owned(), only_digits(rest)))
    }
}

impl MatchStep for TriageRawInput<'_> {
    type Input = TelephoneNumber;
    type Output = TelephoneNumber;

    fn apply(
        &self,
        rule_set: &dyn RuleSet,
        number: TelephoneNumber,
    ) -> Result<Option<TelephoneNumber>, InternalLogicError> {
        let Some((country_calling_code, national_number)) =
            self.explicit_main_numbers(number.source())
        else {
            return Ok(Some(number));
        };

        // digit strings are compared as-is, "044" is not "44"
        if country_calling_code != rule_set.country_calling_code() {
            trace!(
                "Explicit calling code +{} of '{}' rules out rule-set {}",
                country_calling_code,
                number.source(),
                rule_set.iso_alpha2_country_code()
            );
            return Ok(None);
        }

        Ok(Some(number.with_main_numbers(country_calling_code, national_number)))
    }
}
