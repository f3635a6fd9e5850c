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
mod enums;
pub mod errors;
pub(crate) mod helper_constants;
mod helper_functions;
mod helper_types;
mod match_steps;
mod telephone_number;
pub mod telex;
mod telex_regexps;

use std::sync::LazyLock;

pub use enums::{Country, PhoneNumberType};
pub use errors::{InternalLogicError, InvalidRuleSetError};
pub use telephone_number::TelephoneNumber;
pub use self::telex::Telex;

pub static TELEX: LazyLock<Telex> = LazyLock::new(Telex::new);
