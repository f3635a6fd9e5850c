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

use crate::{
    string_util::delete_left,
    telex::{InternalLogicError, PhoneNumberType, TelephoneNumber, helper_constants::PLUS_SIGN},
};

/// Outcome of [`RuleSet::classify_and_format`]: the confirmed number, or the
/// number reset to "no match" when the rule-set does not recognise it.
pub type Classification = Result<TelephoneNumber, TelephoneNumber>;

/// The numbering plan of one country, plugged into the matching pipeline.
///
/// A rule-set is immutable configuration. The pipeline only relies on the
/// calling code, the trunk code and the accepted national number lengths;
/// the classification tables behind [`RuleSet::classify_and_format`] are
/// opaque to it.
pub trait RuleSet: Send + Sync {
    /// ISO 3166-1 alpha-2 code of the country, e.g. `"GB"`.
    fn iso_alpha2_country_code(&self) -> &str;

    /// ITU-T E.164 calling code, e.g. `"44"`. Compared as a digit string,
    /// never as a number.
    fn country_calling_code(&self) -> &str;

    /// Digits dialled before a national number on domestic calls. Empty when
    /// the country has none.
    fn trunk_code(&self) -> &str;

    /// Accepted digit counts of a complete national number, trunk code
    /// included.
    fn national_number_lengths(&self) -> &[usize];

    /// Classifies the national number of `number`, a candidate built for
    /// this rule-set, and renders its international display form.
    ///
    /// Implementations answer with [`RuleSet::confirm_match`] on success and
    /// with [`RuleSet::reject`] otherwise.
    fn classify_and_format(&self, number: TelephoneNumber) -> Classification;

    fn accepts_national_number_length(&self, length: usize) -> bool {
        self.national_number_lengths().contains(&length)
    }

    /// Resets `number` to "no match"; its national number is kept.
    fn reject(&self, number: TelephoneNumber) -> Classification {
        Err(number.reset_to_no_match())
    }

    /// Confirms `number` as a `number_type` number of this country.
    ///
    /// `clusters` is the national number cut into display groups. The trunk
    /// code is removed from the leading cluster only, then the groups are
    /// joined with single spaces after `+<calling code>`.
    fn confirm_match(
        &self,
        number: TelephoneNumber,
        number_type: PhoneNumberType,
        clusters: Vec<String>,
    ) -> Classification {
        let mut clusters = clusters.into_iter();
        let leading = clusters.next().unwrap_or_default();

        let mut national_display = String::with_capacity(number.national_number().len() * 2);
        national_display.push_str(&delete_left(&leading, self.trunk_code()));
        for cluster in clusters {
            national_display.push(' ');
            national_display.push_str(&cluster);
        }

        let country_calling_code = self.country_calling_code();
        let formatted = fast_cat::concat_str!(PLUS_SIGN, country_calling_code, " ", &national_display);
        log::debug!(
            "Rule-set {} confirmed '{}' as {:?}: {}",
            self.iso_alpha2_country_code(),
            number.source(),
            number_type,
            formatted
        );

        Ok(number.confirmed_match(
            self.iso_alpha2_country_code(),
            country_calling_code,
            number_type,
            formatted,
        ))
    }
}

/// One stage of the matching pipeline, run against a single rule-set.
///
/// `Ok(None)` is a rejection: the rule-set cannot explain the input and the
/// driver moves on. `Err` is reserved for broken internal contracts.
pub(crate) trait MatchStep {
    type Input;
    type Output;

    fn apply(
        &self,
        rule_set: &dyn RuleSet,
        input: Self::Input,
    ) -> Result<Option<Self::Output>, InternalLogicError>;
}
