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

use regex::{Captures, Regex};

/// Matching that only succeeds when the match begins at the first byte of
/// the haystack, whatever anchors the pattern itself carries.
pub trait RegexConsume {
    fn captures_start<'a>(&self, s: &'a str) -> Option<Captures<'a>>;
}

impl RegexConsume for Regex {
    fn captures_start<'a>(&self, s: &'a str) -> Option<Captures<'a>> {
        let captures = self.captures(s)?;
        let full_capture = captures.get(0)?;
        if full_capture.start() != 0 {
            return None
        }

        Some(captures)
    }
}

#[cfg(test)]
mod tests {
    use regex::Regex;

    use super::RegexConsume;

    #[test]
    fn captures_only_at_start() {
        let regex = Regex::new(r"44(\d*)").unwrap();

        let captures = regex.captures_start("441234").unwrap();
        assert_eq!("1234", &captures[1]);

        assert!(regex.captures_start("0441234").is_none());
    }
}
