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
        ("3[2-68-9]", "Fixed line"),
        ("4[3-9]", "Fixed line"),
        ("5[4-9]", "Fixed line"),
        ("6[2-69]", "Fixed line"),
        ("7[2-9]", "Fixed line"),
        ("82", "Fixed line"),
        ("8[6-9]", "Fixed line"),
        ("9[6-9]", "Fixed line"),
    ];
}

prefix_table! {
    static MOBILE_PREFIXES = [
        ("2[0-9]", "Mobile"),
        ("3[01]", "Mobile"),
        ("4[0-2]", "Mobile"),
        ("4911", "Mobile"),
        ("5[0-5]", "Mobile"),
        ("6[01]", "Mobile"),
        ("71", "Mobile"),
        ("81", "Mobile"),
        ("9[1-3]", "Mobile"),
    ];
}

prefix_table! {
    static NON_GEOGRAPHIC_PREFIXES = [
        ("70", "Non-geographic"),
    ];
}

/// Denmark: `+45`, no trunk code, eight digit national numbers written in
/// pairs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Denmark;

impl RuleSet for Denmark {
    fn iso_alpha2_country_code(&self) -> &str {
        RegionCode::dk()
    }

    fn country_calling_code(&self) -> &str {
        "45"
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
                (&*NON_GEOGRAPHIC_PREFIXES, PhoneNumberType::NonGeographic),
            ],
        ) else {
            return self.reject(number);
        };

        let clusters = chunk(number.national_number(), ChunkWidths::Uniform(2));
        self.confirm_match(number, number_type, clusters)
    }
}
