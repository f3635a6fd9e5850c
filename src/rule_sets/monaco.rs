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
    i18n::RegionCode,
    interfaces::{Classification, RuleSet},
    macros::prefix_table,
    string_util::{ChunkWidths, chunk},
    telex::{PhoneNumberType, TelephoneNumber},
};

use super::classify;

prefix_table! {
    static FIXED_LINE_PREFIXES = [
        ("9", "Fixed line"),
    ];
}

prefix_table! {
    static MOBILE_PREFIXES = [
        ("6", "Mobile"),
    ];
}

/// Monaco: `+377`, no trunk code, eight digit national numbers written in
/// pairs as in France.
#[derive(Debug, Clone, Copy, Default)]
pub struct Monaco;

impl RuleSet for Monaco {
    fn iso_alpha2_country_code(&self) -> &str {
        RegionCode::mc()
    }

    fn country_calling_code(&self) -> &str {
        "377"
    }

    fn trunk_code(&self) -> &str {
        ""
    }

    fn national_number_lengths(&self) -> &[usize] {
        &[8]
    }

    fn classify_and_format(&self, number: TelephoneNumber) -> Classification {
        let Some((number_type, _)) = classify(
            number.national_number(),
            &[
                (&*FIXED_LINE_PREFIXES, PhoneNumberType::FixedLine),
                (&*MOBILE_PREFIXES, PhoneNumberType::Mobile),
            ],
        ) else {
            return self.reject(number);
        };

        let clusters = chunk(number.national_number(), ChunkWidths::Uniform(2));
        self.confirm_match(number, number_type, clusters)
    }
}
