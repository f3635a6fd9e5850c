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
//! Built-in numbering plans.
//!
//! Every rule-set classifies a national number by testing ordered groups of
//! prefix tables (fixed-line, then mobile, then non-geographic) and renders
//! the country's usual grouping of digits.

mod denmark;
mod france;
mod italy;
mod monaco;
mod spain;
mod switzerland;
mod united_kingdom;

use log::trace;

pub use denmark::Denmark;
pub use france::France;
pub use italy::Italy;
pub use monaco::Monaco;
pub use spain::Spain;
pub use switzerland::Switzerland;
pub use united_kingdom::UnitedKingdom;

use crate::{
    regex_based_matcher::{MatchedPrefix, PrefixTable},
    telex::PhoneNumberType,
};

/// Returns the type of the first group with a table that matches the start
/// of `national_number`, and the matched prefix.
pub(crate) fn classify<'a>(
    national_number: &'a str,
    groups: &[(&PrefixTable, PhoneNumberType)],
) -> Option<(PhoneNumberType, MatchedPrefix<'a>)> {
    groups.iter().find_map(|(table, number_type)| {
        let matched = table.find(national_number)?;
        trace!(
            "National number {} starts with {:?} prefix {} ({})",
            national_number, number_type, matched.prefix, matched.label
        );
        Some((*number_type, matched))
    })
}
