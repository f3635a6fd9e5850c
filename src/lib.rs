mod interfaces;
mod regexp_cache;
mod regex_based_matcher;
mod telex;
pub mod i18n;
pub mod rule_sets;
pub(crate) mod regex_util;
pub(crate) mod string_util;

/// Boilerplate that repeats in every rule-set, such as declaring a built-in
/// prefix table, lives in macros so the call site says what it declares.
mod macros;

#[cfg(test)]
mod tests;

pub use interfaces::{Classification, RuleSet};
pub use regexp_cache::InvalidRegexError;
pub use string_util::{ChunkWidths, chunk, delete_left, only_digits};
pub use telex::{
    Country, InternalLogicError, InvalidRuleSetError, PhoneNumberType, TELEX, Telex,
    TelephoneNumber,
};
