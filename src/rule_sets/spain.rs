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
    /// Provincial area codes. Spain has no trunk code, so these are the first
    /// three digits of the national number.
    static AREA_CODES = [
        (r"8[1-9]\d", "Geographic expansion"),
        ("981", "A Coruña"),
        ("945", "Alava"),
        ("967", "Albacete"),
        ("96[5-6]", "Alicante"),
        ("950", "Almeria"),
        ("985", "Asturias"),
        ("920", "Ávila"),
        ("924", "Badajoz"),
        ("971", "Baleares"),
        ("93[1-8]", "Barcelona"),
        ("94[46]", "Biscay (Bizkaia/Vizcaya)"),
        ("947", "Burgos"),
        ("927", "Caceres"),
        ("956", "Cadiz"),
        ("942", "Cantabria"),
        ("964", "Castellon"),
        ("957", "Cordoba"),
        ("969", "Cuenca"),
        ("972", "Girona"),
        ("958", "Granada"),
        ("949", "Guadalajara"),
        ("943", "Guipuzcoa"),
        ("959", "Huelva"),
        ("974", "Huesca"),
        ("953", "Jaen"),
        ("941", "La Rioja"),
        ("928", "Las Palmas"),
        ("987", "León"),
        ("973", "Lerida"),
        ("982", "Lugo"),
        ("91[1-8]", "Madrid"),
        ("95[12]", "Málaga"),
        ("968", "Murcia"),
        ("948", "Navarra"),
        ("988", "Orense"),
        ("979", "Palencia"),
        ("986", "Pontevedra"),
        ("923", "Salamanca"),
        ("922", "Santa Cruz de Tenerife"),
        ("921", "Segovia"),
        ("95[45]", "Seville"),
        ("975", "Soria"),
        ("977", "Tarragona"),
        ("925", "Toledo"),
        ("978", "Turuel"),
        ("96[0-3]", "Valencia"),
        ("983", "Valladolid"),
        ("980", "Zamora"),
        ("976", "Zaragoza"),
    ];
}

prefix_table! {
    static MOBILE_PREFIXES = [
        ("(?:6|7[1-9])", "Mobile"),
    ];
}

prefix_table! {
    static NON_GEOGRAPHIC_PREFIXES = [
        (r"70\d", "Personal numbering"),
        (r"80\d", "Freephone and premium rate"),
        (r"90\d", "Freephone and shared cost"),
    ];
}

/// Fixed lines with a two digit area code, written as 2-3-2-2.
const TWO_DIGIT_AREA_CODES: [&str; 5] = ["91", "93", "94", "95", "96"];

/// Spain: `+34`, no trunk code, nine digit national numbers written in
/// threes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Spain;

impl RuleSet for Spain {
    fn iso_alpha2_country_code(&self) -> &str {
        RegionCode::es()
    }

    fn country_calling_code(&self) -> &str {
        "34"
    }

    fn trunk_code(&self) -> &str {
        ""
    }

    fn national_number_lengths(&self) -> &[usize] {
        &[9]
    }

    fn classify_and_format(&self, number: TelephoneNumber) -> Classification {
        let national_number = number.national_number();
        let Some((number_type, _)) = classify(
            national_number,
            &[
                (&*AREA_CODES, PhoneNumberType::FixedLine),
                (&*MOBILE_PREFIXES, PhoneNumberType::Mobile),
                (&*NON_GEOGRAPHIC_PREFIXES, PhoneNumberType::NonGeographic),
            ],
        ) else {
            return self.reject(number);
        };

        let has_two_digit_area_code = number_type == PhoneNumberType::FixedLine
            && TWO_DIGIT_AREA_CODES
                .iter()
                .any(|area_code| national_number.starts_with(area_code));
        let clusters = if has_two_digit_area_code {
            chunk(national_number, ChunkWidths::Explicit(&[2, 3, 2, 2]))
        } else {
            chunk(national_number, ChunkWidths::Uniform(3))
        };
        self.confirm_match(number, number_type, clusters)
    }
}
