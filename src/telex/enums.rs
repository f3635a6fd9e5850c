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

use strum::EnumIter;

use crate::{
    i18n::RegionCode,
    interfaces::RuleSet,
    rule_sets::{Denmark, France, Italy, Monaco, Spain, Switzerland, UnitedKingdom},
};

/// Categorizes telephone numbers by the kind of line they reach.
///
/// A number that has not been classified carries no type at all
/// (`Option::None` on [`TelephoneNumber::number_type`]).
///
/// [`TelephoneNumber::number_type`]: super::TelephoneNumber::number_type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneNumberType {
    /// **Fixed-line numbers.**
    /// Traditional landline numbers tied to a geographic area code.
    FixedLine,
    /// **Mobile numbers.**
    /// Numbers assigned to wireless devices.
    Mobile,
    /// **Strictly non-geographic numbers.**
    /// Service numbers such as freephone, shared-cost or premium-rate lines
    /// that are not tied to any area.
    NonGeographic,
}

/// The countries with a built-in rule-set.
///
/// Declaration order is the default match priority: when an input could be
/// read as a number of several countries, the first country listed here that
/// confirms it wins. Fixed-length plans come first, variable-length plans
/// last.
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Country {
    France,
    Switzerland,
    Spain,
    Monaco,
    Denmark,
    UnitedKingdom,
    Italy,
}

impl Country {
    /// ISO 3166-1 alpha-2 code of the country.
    pub fn region_code(self) -> &'static str {
        match self {
            Country::France => RegionCode::fr(),
            Country::Switzerland => RegionCode::ch(),
            Country::Spain => RegionCode::es(),
            Country::Monaco => RegionCode::mc(),
            Country::Denmark => RegionCode::dk(),
            Country::UnitedKingdom => RegionCode::gb(),
            Country::Italy => RegionCode::it(),
        }
    }

    pub fn rule_set(self) -> Box<dyn RuleSet> {
        match self {
            Country::France => Box::new(France),
            Country::Switzerland => Box::new(Switzerland),
            Country::Spain => Box::new(Spain),
            Country::Monaco => Box::new(Monaco),
            Country::Denmark => Box::new(Denmark),
            Country::UnitedKingdom => Box::new(UnitedKingdom),
            Country::Italy => Box::new(Italy),
        }
    }
}
