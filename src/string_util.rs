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

use std::borrow::Cow;

/// Returns only the ASCII digits of the given string, in order.
pub fn only_digits(s: &str) -> String {
    s.chars().filter(char::is_ascii_digit).collect()
}

/// Removes `prefix` once from the start of `s`.
///
/// Returns the original slice borrowed when `s` does not start with
/// `prefix` (an empty prefix never changes anything).
pub fn delete_left<'a>(s: &'a str, prefix: &str) -> Cow<'a, str> {
    s.strip_prefix(prefix).map_or(Cow::Borrowed(s), Cow::Borrowed)
}

/// How [`chunk`] should cut a digit string into display clusters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkWidths<'a> {
    /// Clusters of equal width; one shorter trailing cluster holds whatever
    /// is left over.
    Uniform(usize),
    /// Clusters of the listed widths, in order. If the widths add up to less
    /// than the input length, one final cluster holds the leftover digits.
    Explicit(&'a [usize]),
}

impl From<usize> for ChunkWidths<'_> {
    fn from(width: usize) -> Self {
        ChunkWidths::Uniform(width)
    }
}

impl<'a> From<&'a [usize]> for ChunkWidths<'a> {
    fn from(widths: &'a [usize]) -> Self {
        ChunkWidths::Explicit(widths)
    }
}

impl<'a, const N: usize> From<&'a [usize; N]> for ChunkWidths<'a> {
    fn from(widths: &'a [usize; N]) -> Self {
        ChunkWidths::Explicit(widths)
    }
}

/// Splits `s` into clusters of digits.
///
/// The length the widths are measured against is the number of characters
/// in `s`, but only ASCII digits are consumed and copied into clusters.
/// Other characters are skipped. A cluster is closed lazily, right before
/// the next character is looked at, so an input whose digits land exactly
/// on the last width produces no empty trailing cluster unless trailing
/// non-digit characters follow.
///
/// An empty input yields a single empty cluster.
pub fn chunk<'a>(s: &str, widths: impl Into<ChunkWidths<'a>>) -> Vec<String> {
    let length = s.chars().count();

    let mut pattern: Vec<usize> = match widths.into() {
        // zero-width clusters would never consume anything
        ChunkWidths::Uniform(0) => Vec::new(),
        ChunkWidths::Uniform(width) if width < length => vec![width; length / width],
        ChunkWidths::Uniform(width) => vec![width],
        ChunkWidths::Explicit(widths) => widths.to_vec(),
    };

    let max_length_by_pattern: usize = pattern.iter().sum();
    if max_length_by_pattern < length {
        pattern.push(length - max_length_by_pattern);
    }

    let mut chunks = Vec::with_capacity(pattern.len());
    let mut current_chunk = String::new();
    let mut digits_in_current_chunk = 0;
    let mut pattern_idx = 0;

    for c in s.chars() {
        if pattern.get(pattern_idx) == Some(&digits_in_current_chunk) {
            chunks.push(std::mem::take(&mut current_chunk));
            digits_in_current_chunk = 0;
            pattern_idx += 1;
        }

        if c.is_ascii_digit() {
            current_chunk.push(c);
            digits_in_current_chunk += 1;
        }
    }

    // leftovers
    chunks.push(current_chunk);

    chunks
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::{ChunkWidths, chunk, delete_left, only_digits};

    #[test]
    fn only_digits_keeps_ascii_digits_in_order() {
        assert_eq!("", only_digits(""));
        assert_eq!("1234567890", only_digits("1234567890"));
        assert_eq!("123", only_digits("1a2b3c"));
        assert_eq!("4401234567890", only_digits("+44 (0)1234 567890"));
        // full-width digits are not ASCII digits
        assert_eq!("12", only_digits("1\u{FF13}2"));
    }

    #[test]
    fn delete_left_removes_prefix_once() {
        assert_eq!("", delete_left("", "foo"));
        assert_eq!("", delete_left("foo", "foo"));
        assert_eq!("bar", delete_left("foobar", "foo"));
        assert_eq!("foobar", delete_left("foobar", "bar"));
        assert_eq!("0123", delete_left("00123", "0"));
        assert!(matches!(delete_left("123", ""), Cow::Borrowed("123")));
    }

    #[test]
    fn chunk_uniform_width_appends_shorter_remainder() {
        assert_eq!(vec!["634", "040", "467", "0"], chunk("6340404670", 3));
        assert_eq!(vec!["06", "34", "04", "04", "67"], chunk("0634040467", 2));
        assert_eq!(vec!["644", "450", "285"], chunk("644450285", 3));
    }

    #[test]
    fn chunk_uniform_width_wider_than_input_is_a_single_cluster() {
        assert_eq!(vec!["12"], chunk("12", 3));
        assert_eq!(vec!["123"], chunk("123", 3));
        assert_eq!(vec!["123"], chunk("123", 0));
    }

    #[test]
    fn chunk_explicit_widths() {
        assert_eq!(vec!["027", "771", "24", "58"], chunk("0277712458", &[3, 3, 2, 2]));
        assert_eq!(vec!["91", "720", "67", "10"], chunk("917206710", &[2, 3, 2, 2]));
        assert_eq!(vec!["020", "7223", "1200"], chunk("02072231200", &[3, 4, 4]));
    }

    #[test]
    fn chunk_explicit_widths_collect_leftovers_in_final_cluster() {
        assert_eq!(vec!["01572", "823352"], chunk("01572823352", &[5]));
        assert_eq!(vec!["039", "39421"], chunk("03939421", ChunkWidths::Explicit(&[3])));
    }

    #[test]
    fn chunk_explicit_widths_longer_than_input_leave_last_cluster_short() {
        assert_eq!(vec!["123", "4"], chunk("1234", &[3, 3]));
    }

    #[test]
    fn chunk_exact_consumption_has_no_empty_trailing_cluster() {
        let clusters = chunk("12345678", &[2, 2, 2, 2]);
        assert_eq!(vec!["12", "34", "56", "78"], clusters);
        assert!(clusters.iter().all(|c| !c.is_empty()));
    }

    #[test]
    fn chunk_emits_empty_cluster_for_empty_input() {
        assert_eq!(vec![""], chunk("", 3));
        assert_eq!(vec![""], chunk("", &[2, 2]));
    }

    #[test]
    fn chunk_skips_non_digits_but_counts_them_towards_length() {
        assert_eq!(vec!["12", "34"], chunk("12-34", 2));
        // trailing punctuation after exact consumption yields an empty cluster
        assert_eq!(vec!["12", "34", ""], chunk("1234-", &[2, 2]));
    }

    #[test]
    fn chunk_zero_width_entry_emits_empty_cluster() {
        assert_eq!(vec!["", "12", "3"], chunk("123", &[0, 2]));
    }
}
