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
    telex::{InternalLogicError, TelephoneNumber},
};

/// Hands the candidates to the rule-set's classifier in order and keeps the
/// first one it confirms. Candidate order is the only tie-break.
pub(in crate::telex) struct CalculateTheBestMatch;

impl MatchStep for CalculateTheBestMatch {
    type Input = Vec<TelephoneNumber>;
    type Output = TelephoneNumber;

    fn apply(
        &self,
        rule_set: &dyn RuleSet,
        candidates: Vec<TelephoneNumber>,
    ) -> Result<Option<TelephoneNumber>, InternalLogicError> {
        for candidate in candidates {
            let confirmed = match rule_set.classify_and_format(candidate) {
                Ok(confirmed) => confirmed,
                Err(rejected) => {
                    trace!(
                        "Rule-set {} does not recognise national number {}",
                        rule_set.iso_alpha2_country_code(),
                        rejected.national_number()
                    );
                    continue;
                }
            };

            if !confirmed.is_confirmed()
                || confirmed.country_calling_code() != rule_set.country_calling_code()
            {
                return Err(InternalLogicError::UnconfirmedMatch {
                    country_calling_code: rule_set.country_calling_code().to_owned(),
                });
            }
            return Ok(Some(confirmed));
        }

        Ok(None)
    }
}
