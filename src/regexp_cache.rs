use std::sync::Arc;

use dashmap::DashMap;
use regex::Regex;
use thiserror::Error;

use crate::telex::helper_constants::EXIT_CODES;

#[derive(Debug, PartialEq, Error)]
#[error("An error occurred while trying to create regex: {0}")]
pub struct InvalidRegexError(#[from] regex::Error);

/// The two ways a calling code can open a number that was typed without
/// `+`. Both capture the rest of the digits in group 1.
#[derive(Debug)]
pub struct PermutationPatterns {
    /// `^(?:0011|011|00)<code>(.*)$`: an international number written with
    /// an exit code, with or without superfluous digits such as a trunk code.
    pub expanded_international: Regex,

    /// `^<code>(.*)`: an international number typed without `+` or exit
    /// code.
    pub portable_international: Regex,
}

impl PermutationPatterns {
    fn compile(country_calling_code: &str) -> Result<Self, InvalidRegexError> {
        let escaped_code = regex::escape(country_calling_code);
        let expanded_international = fast_cat::concat_str!(
            "^(?:",
            &EXIT_CODES.join("|"),
            ")",
            &escaped_code,
            "(.*)$"
        );
        let portable_international = fast_cat::concat_str!("^", &escaped_code, "(.*)");

        Ok(Self {
            expanded_international: Regex::new(&expanded_international)?,
            portable_international: Regex::new(&portable_international)?,
        })
    }
}

/// Permutation patterns keyed by calling code, compiled on first use and
/// shared between threads.
pub struct PermutationPatternCache {
    by_calling_code: DashMap<String, Arc<PermutationPatterns>>,
}

impl PermutationPatternCache {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            by_calling_code: DashMap::with_capacity(capacity),
        }
    }

    pub fn patterns_for(
        &self,
        country_calling_code: &str,
    ) -> Result<Arc<PermutationPatterns>, InvalidRegexError> {
        if let Some(patterns) = self.by_calling_code.get(country_calling_code) {
            return Ok(Arc::clone(&patterns));
        }

        // compiled outside the shard lock; a concurrent first use keeps
        // whichever entry landed first
        let compiled = Arc::new(PermutationPatterns::compile(country_calling_code)?);
        let entry = self
            .by_calling_code
            .entry(country_calling_code.to_owned())
            .or_insert(compiled);
        Ok(Arc::clone(&entry))
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.by_calling_code.len()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::PermutationPatternCache;

    #[test]
    fn compiles_each_calling_code_once() {
        let cache = PermutationPatternCache::with_capacity(2);
        let first = cache.patterns_for("44").unwrap();
        let second = cache.patterns_for("44").unwrap();
        cache.patterns_for("33").unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(2, cache.len());
    }

    #[test]
    fn exit_codes_are_tried_in_order() {
        let cache = PermutationPatternCache::with_capacity(1);
        let regex = &cache.patterns_for("1").unwrap().expanded_international;

        assert_eq!("234", &regex.captures("00111234").unwrap()[1]);
        assert_eq!("234", &regex.captures("0111234").unwrap()[1]);
        assert_eq!("234", &regex.captures("001234").unwrap()[1]);
        assert!(regex.captures("01234").is_none());
    }

    #[test]
    fn portable_pattern_needs_the_code_first() {
        let cache = PermutationPatternCache::with_capacity(1);
        let regex = &cache.patterns_for("44").unwrap().portable_international;

        assert_eq!("1234", &regex.captures("441234").unwrap()[1]);
        assert!(regex.captures("0441234").is_none());
    }

    #[test]
    fn calling_code_is_matched_literally() {
        let cache = PermutationPatternCache::with_capacity(1);
        let patterns = cache.patterns_for("4.").unwrap();

        assert!(patterns.portable_international.captures("441234").is_none());
        assert_eq!("12", &patterns.portable_international.captures("4.12").unwrap()[1]);
    }
}
