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

use crate::string_util::only_digits;

use super::PhoneNumberType;

/// One interpretation of a raw input string.
///
/// Values are never modified in place: every transition consumes the number
/// and returns the next state, so a pipeline step always holds exactly one
/// live value.
///
/// Empty strings mean "unset" for the code and number fields. The type and
/// the formatted string are only present on a confirmed match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TelephoneNumber {
    /// The raw, source string.
    source: String,
    source_digits: String,
    /// ISO 3166-1 alpha-2 code.
    iso_alpha2_country_code: String,
    /// ITU-T E.164 code.
    country_calling_code: String,
    /// Fully-formed national number, trunk code included.
    national_number: String,
    number_type: Option<PhoneNumberType>,
    formatted: Option<String>,
}

impl TelephoneNumber {
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let source_digits = only_digits(&source);
        Self {
            source,
            source_digits,
            iso_alpha2_country_code: String::new(),
            country_calling_code: String::new(),
            national_number: String::new(),
            number_type: None,
            formatted: None,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// The digits of [`Self::source`].
    pub fn source_digits(&self) -> &str {
        &self.source_digits
    }

    pub fn iso_alpha2_country_code(&self) -> &str {
        &self.iso_alpha2_country_code
    }

    pub fn country_calling_code(&self) -> &str {
        &self.country_calling_code
    }

    pub fn has_country_calling_code(&self) -> bool {
        !self.country_calling_code.is_empty()
    }

    pub fn national_number(&self) -> &str {
        &self.national_number
    }

    pub fn number_type(&self) -> Option<PhoneNumberType> {
        self.number_type
    }

    pub fn formatted(&self) -> Option<&str> {
        self.formatted.as_deref()
    }

    pub fn into_formatted(self) -> Option<String> {
        self.formatted
    }

    /// Whether a rule-set has confirmed this number.
    pub fn is_confirmed(&self) -> bool {
        self.formatted.is_some()
            && self.number_type.is_some()
            && self.has_country_calling_code()
            && !self.national_number.is_empty()
    }

    /// Sets the calling code and the national number together.
    pub fn with_main_numbers(
        self,
        country_calling_code: impl Into<String>,
        national_number: impl Into<String>,
    ) -> Self {
        Self {
            country_calling_code: country_calling_code.into(),
            national_number: national_number.into(),
            ..self
        }
    }

    /// Drops every association with a country. The national number is kept.
    pub fn reset_to_no_match(self) -> Self {
        Self {
            iso_alpha2_country_code: String::new(),
            country_calling_code: String::new(),
            number_type: None,
            formatted: None,
            ..self
        }
    }

    /// Confirms a match: the ISO code, calling code, type and display string
    /// are set all at once.
    pub fn confirmed_match(
        self,
        iso_alpha2_country_code: impl Into<String>,
        country_calling_code: impl Into<String>,
        number_type: PhoneNumberType,
        formatted: impl Into<String>,
    ) -> Self {
        debug_assert!(
            !self.national_number.is_empty(),
            "a match can only be confirmed once the national number is known"
        );
        Self {
            iso_alpha2_country_code: iso_alpha2_country_code.into(),
            country_calling_code: country_calling_code.into(),
            number_type: Some(number_type),
            formatted: Some(formatted.into()),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TelephoneNumber;
    use crate::PhoneNumberType;

    #[test]
    fn new_number_is_unset() {
        let number = TelephoneNumber::new("01234 567890");

        assert_eq!("01234 567890", number.source());
        assert_eq!("01234567890", number.source_digits());
        assert_eq!("", number.iso_alpha2_country_code());
        assert_eq!("", number.country_calling_code());
        assert!(!number.has_country_calling_code());
        assert_eq!("", number.national_number());
        assert_eq!(None, number.number_type());
        assert_eq!(None, number.formatted());
        assert!(!number.is_confirmed());
    }

    #[test]
    fn confirmed_match_associates_number_with_country() {
        let number = TelephoneNumber::new("01234 567890")
            .with_main_numbers("44", "01234567890")
            .confirmed_match("GB", "44", PhoneNumberType::FixedLine, "+44 1234 567890");

        assert_eq!("01234 567890", number.source());
        assert_eq!("GB", number.iso_alpha2_country_code());
        assert_eq!("44", number.country_calling_code());
        assert_eq!("01234567890", number.national_number());
        assert_eq!(Some(PhoneNumberType::FixedLine), number.number_type());
        assert_eq!(Some("+44 1234 567890"), number.formatted());
        assert!(number.is_confirmed());
    }

    #[test]
    fn reset_to_no_match_keeps_source_and_national_number() {
        let number = TelephoneNumber::new("01234 567890")
            .with_main_numbers("44", "01234567890")
            .confirmed_match("GB", "44", PhoneNumberType::FixedLine, "+44 1234 567890")
            .reset_to_no_match();

        assert_eq!("01234 567890", number.source());
        assert_eq!("", number.iso_alpha2_country_code());
        assert_eq!("", number.country_calling_code());
        assert_eq!("01234567890", number.national_number());
        assert_eq!(None, number.number_type());
        assert_eq!(None, number.formatted());
        assert!(!number.is_confirmed());
    }

    #[test]
    fn main_numbers_alone_do_not_confirm() {
        let number = TelephoneNumber::new("+44 1234 567890").with_main_numbers("44", "01234567890");
        assert!(number.has_country_calling_code());
        assert!(!number.is_confirmed());
    }
}
