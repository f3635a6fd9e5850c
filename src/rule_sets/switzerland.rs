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
    /// Three digit area codes, trunk code included.
    static AREA_CODES = [
        ("062", "Ammerswil (Aarau)"),
        ("041", "Andermatt, Lucerne, Zug"),
        ("081", "Arosa, Davos, Klosters, St. Moritz"),
        ("056", "Baden"),
        ("061", "Basel"),
        ("091", "Bellinzona, Chiasso, Locarno, Lugano"),
        ("031", "Berne"),
        ("032", "Biel (Bienne), La Chaux-de-Fonds, Neuchatel"),
        ("027", "Crans-sur-Sierre, Zermatt"),
        ("026", "Fribourg"),
        ("022", "Geneva"),
        ("024", "Gryon (Yverdon-les-Bains)"),
        ("033", "Gstaad, Interlaken, Lenk im Simmental, Obewil im Simmental, Wengen"),
        ("021", "Lausanne, Montreux, Vevey"),
        ("052", "Schaffhausen, Winterthur"),
        ("071", "St. Gallen"),
        ("043", "Zurich"),
    ];
}

prefix_table! {
    static MOBILE_PREFIXES = [
        ("07[4-9]", "Mobile"),
    ];
}

prefix_table! {
    static NON_GEOGRAPHIC_PREFIXES = [
        ("058", "Corporate networks"),
        ("0800", "Freephone"),
        ("084[0248]", "Shared cost"),
    ];
}

/// Switzerland: `+41`, trunk code `0`, ten digit national numbers written
/// as 3-3-2-2.
#[derive(Debug, Clone, Copy, Default)]
pub struct Switzerland;

impl RuleSet for Switzerland {
    fn iso_alpha2_country_code(&self) -> &str {
        RegionCode::ch()
    }

    fn country_calling_code(&self) -> &str {
        "41"
    }

    fn trunk_code(&self) -> &str {
        "0"
    }

    fn national_number_lengths(&self) -> &[usize] {
        &[10]
    }

    fn classify_and_format(&self, number: TelephoneNumber) -> Classification {
        let Some((number_type, _)) = classify(
            number.national_number(),
            &[
                (&*AREA_CODES, PhoneNumberType::FixedLine),
                (&*MOBILE_PREFIXES, PhoneNumberType::Mobile),
                (&*NON_GEOGRAPHIC_PREFIXES, PhoneNumberType::NonGeographic),
            ],
        ) else {
            return self.reject(number);
        };

        let clusters = chunk(number.national_number(), ChunkWidths::Explicit(&[3, 3, 2, 2]));
        self.confirm_match(number, number_type, clusters)
    }
}
