pub const PLUS_SIGN: &str = "+";

/// International exit codes, tried in this order. They are stripped only
/// when the rule-set's calling code follows immediately.
///
/// 0011 is dialled from Australia, 011 from the North American numbering
/// plan, 00 is the ITU recommendation.
pub const EXIT_CODES: [&str; 3] = ["0011", "011", "00"];

/// Every character that carries no meaning for triage. Each one becomes a
/// single space so digit groups stay apart.
pub const INSIGNIFICANT_CHARS: &str = r"[^+0-9\s]";

/// An explicit `+<calling code>` followed by whitespace and the rest of the
/// number.
pub const EXPLICIT_COUNTRY_CALLING_CODE: &str = r"^\s*\+\s*([0-9]+)\s+(.*)";
