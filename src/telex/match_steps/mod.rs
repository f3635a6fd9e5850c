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
//! The stages a raw input goes through for every installed rule-set:
//! triage, then permutations, then the best-match selection.

mod best_match;
mod permutations;
mod triage;

pub(super) use best_match::CalculateTheBestMatch;
pub(super) use permutations::CreatePermutations;
pub(super) use triage::TriageRawInput;
