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
use regex::Regex;

use crate::{
    interfaces::{MatchStep, RuleSet},
    regex_util::RegexConsume,
    telex::{
        InternalLogicError, TelephoneNumber, helper_types::Candidate,
        telex_regexps::TelexRegExps,
    },
};

/// Enumerates the plausible calling code / national number splits of a
/// number for one rule-set.
///
/// Candidates come out in order of likelihood: international with exit
/// code, international without exit code, national only. Only those with a
/// national number length accepted by the rule-set survive, each pair once.
pub(in crate::telex) struct CreatePermutations<'a> {
    reg_exps: &'a TelexRegExps,
}

fn remainder_after<'a>(regex: &Regex, digits: &'a str) -> Option<&'a str> {
    regex
        .captures_start(digits)
        .and_then(|captures| captures.get(1))
        .map(|remainder| remainder.as_str())
}

impl<'a> CreatePermutations<'a> {
    pub fn new(reg_exps: &'a TelexRegExps) -> Self {
        Self { reg_exps }
    }

    /// Keeps `candidate` when the rule-set accepts the length of its
    /// completed national number.
    fn complete_and_filter<'b>(
        rule_set: &dyn RuleSet,
        candidate: Candidate<'b>,
    ) -> Option<Candidate<'b>> {
        let candidate = candidate.with_completed_trunk_code(rule_set.trunk_code());
        if rule_set.accepts_national_number_length(candidate.national_number_length()) {
            return Some(candidate);
        }

        trace!(
            "Candidate {:?} has a national number length not accepted by rule-set {}",
            candidate,
            rule_set.iso_alpha2_country_code()
        );
        None
    }

    fn raw_candidates<'b>(
        &self,
        rule_set: &'b dyn RuleSet,
        digits: &'b str,
    ) -> Result<[Option<Candidate<'b>>; 3], InternalLogicError> {
        let country_calling_code = rule_set.country_calling_code();
        let patterns = self.reg_exps.permutation_patterns(country_calling_code)?;

        Ok([
            remainder_after(&patterns.expanded_international, digits)
                .map(|remainder| Candidate::new(country_calling_code, remainder)),
            remainder_after(&patterns.portable_international, digits)
                .map(|remainder| Candidate::new(country_calling_code, remainder)),
            Some(Candidate::new("", digits)),
        ])
    }
}

impl MatchStep for CreatePermutations<'_> {
    type Input = TelephoneNumber;
    type Output = Vec<TelephoneNumber>;

    fn apply(
        &self,
        rule_set: &dyn RuleSet,
        number: TelephoneNumber,
    ) -> Result<Option<Vec<TelephoneNumber>>, InternalLogicError> {
        // resolved by triage: only that reading is validated
        if number.has_country_calling_code() {
            let candidate = Candidate::new(number.country_calling_code(), number.national_number());
            let Some(candidate) = Self::complete_and_filter(rule_set, candidate) else {
                return Ok(None);
            };

            let country_calling_code = candidate.country_calling_code.to_owned();
            let national_number = candidate.national_number.into_owned();
            return Ok(Some(vec![number.with_main_numbers(country_calling_code, national_number)]));
        }

        let raw_candidates = self.raw_candidates(rule_set, number.source_digits())?;
        let mut candidates: Vec<Candidate> = Vec::with_capacity(raw_candidates.len());
        for candidate in raw_candidates.into_iter().flatten() {
            let Some(candidate) = Self::complete_and_filter(rule_set, candidate) else {
                continue;
            };
            if !candidates.contains(&candidate) {
                candidates.push(candidate);
            }
        }

        trace!(
            "{} candidate(s) of '{}' left for rule-set {}",
            candidates.len(),
            number.source(),
            rule_set.iso_alpha2_country_code()
        );
        if candidates.is_empty() {
            return Ok(None);
        }

        Ok(Some(
            candidates
                .into_iter()
                .map(|candidate| {
                    number.clone().with_main_numbers(
                        candidate.country_calling_code,
                        candidate.national_number.into_owned(),
                    )
                })
                .collect(),
        ))
    }
}
