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
use log::{trace, warn};
use strum::IntoEnumIterator;

use super::{
    Country, InternalLogicError, InvalidRuleSetError, TelephoneNumber,
    helper_functions::validate_rule_set,
    match_steps::{CalculateTheBestMatch, CreatePermutations, TriageRawInput},
    telex_regexps::TelexRegExps,
};
use crate::interfaces::{MatchStep, RuleSet};

// Helper type for Result
type Result<T> = std::result::Result<T, InternalLogicError>;

/// Recognises telephone numbers of the installed countries in loosely
/// formatted input.
///
/// Rule-sets are tried in the order they were installed; the first one that
/// confirms the input wins. A `Telex` is immutable once built and can be
/// shared between threads.
pub struct Telex {
    /// Installed numbering plans, in priority order.
    rule_sets: Vec<Box<dyn RuleSet>>,

    /// Patterns shared by every match step.
    reg_exps: TelexRegExps,
}

impl Telex {
    /// Installs every built-in country, in the order of [`Country`].
    pub fn new() -> Self {
        Self::for_countries(&Country::iter().collect::<Vec<_>>())
    }

    /// Installs the built-in rule-sets of `countries`, in the given order.
    pub fn for_countries(countries: &[Country]) -> Self {
        let rule_sets = countries.iter().map(|country| country.rule_set()).collect();
        match Self::with_rule_sets(rule_sets) {
            Ok(telex) => telex,
            Err(err) => {
                let err_message = format!("Built-in rule-set is invalid: {}", err);
                log::error!("{}", err_message);
                panic!("{}", err_message);
            }
        }
    }

    /// Installs custom rule-sets, in the given order.
    pub fn with_rule_sets(
        rule_sets: Vec<Box<dyn RuleSet>>,
    ) -> std::result::Result<Self, InvalidRuleSetError> {
        for rule_set in &rule_sets {
            validate_rule_set(rule_set.as_ref())?;
        }
        if rule_sets.is_empty() {
            warn!("No rule-sets installed, no number will ever match");
        }

        Ok(Self {
            reg_exps: TelexRegExps::new(rule_sets.len()),
            rule_sets,
        })
    }

    pub fn rule_sets(&self) -> &[Box<dyn RuleSet>] {
        &self.rule_sets
    }

    /// Returns the first interpretation of `raw` confirmed by an installed
    /// rule-set, or `None` when no rule-set recognises it.
    pub fn match_number(&self, raw: &str) -> Option<TelephoneNumber> {
        self.match_number_internal(raw)
            .unwrap_or_else(|err| err.into_public())
    }

    /// Matches `raw` against `rule_set` alone, whether it is installed or not.
    ///
    /// A rule-set that [`Telex::with_rule_sets`] would refuse matches nothing.
    pub fn match_number_with(&self, raw: &str, rule_set: &dyn RuleSet) -> Option<TelephoneNumber> {
        if let Err(err) = validate_rule_set(rule_set) {
            warn!("Not matching '{}': {}", raw, err);
            return None;
        }
        self.match_rule_set(raw, rule_set)
            .unwrap_or_else(|err| err.into_public())
    }

    /// The international display form of `raw`, e.g. `"+44 1234 567890"`.
    pub fn format_intl(&self, raw: &str) -> Option<String> {
        self.match_number(raw)
            .and_then(TelephoneNumber::into_formatted)
    }

    pub(crate) fn match_number_internal(&self, raw: &str) -> Result<Option<TelephoneNumber>> {
        for rule_set in &self.rule_sets {
            if let Some(number) = self.match_rule_set(raw, rule_set.as_ref())? {
                return Ok(Some(number));
            }
        }

        trace!("No installed rule-set recognises '{}'", raw);
        Ok(None)
    }

    /// Runs triage, permutations and best-match selection for one rule-set.
    /// Every attempt starts from a fresh number.
    fn match_rule_set(&self, raw: &str, rule_set: &dyn RuleSet) -> Result<Option<TelephoneNumber>> {
        let number = TelephoneNumber::new(raw);

        let Some(number) = TriageRawInput::new(&self.reg_exps).apply(rule_set, number)? else {
            return Ok(None);
        };
        let Some(candidates) = CreatePermutations::new(&self.reg_exps).apply(rule_set, number)? else {
            return Ok(None);
        };
        CalculateTheBestMatch.apply(rule_set, candidates)
    }
}

impl Default for Telex {
    fn default() -> Self {
        Self::new()
    }
}
