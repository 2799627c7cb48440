use std::{cmp::Ordering, fmt};

use smallvec::SmallVec;
use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

/// Whether `c` is a decimal digit in any script (general category `Nd`).
#[inline]
pub fn is_decimal_digit(c: char) -> bool {
    c.is_ascii_digit() || c.general_category() == GeneralCategory::DecimalNumber
}

/// Value of a decimal digit in any script: `'7'`, `'７'` and `'٧'` are all 7.
///
/// `Nd` characters come in contiguous runs of ten ordered 0 to 9, so the value
/// is the offset from the start of the maximal `Nd` run, modulo ten.
pub fn decimal_value(c: char) -> Option<u32> {
    if let Some(d) = c.to_digit(10) {
        return Some(d);
    }
    if !is_decimal_digit(c) {
        return None;
    }

    let code = c as u32;
    let mut start = code;
    while let Some(prev) = start.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        start -= 1;
    }
    Some((code - start) % 10)
}

/// Digit run of a name, kept as ASCII text so runs of any length and any
/// script compare by value.
///
/// Leading zeros are stripped on construction: `"007"`, `"7"` and `"７"` hold
/// the same digits and compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Digits(String);

impl Digits {
    /// Build from a run of decimal digits. Non-digit characters are ignored.
    pub fn new(run: &str) -> Self {
        let ascii: String = run
            .chars()
            .filter_map(decimal_value)
            .filter_map(|d| char::from_digit(d, 10))
            .skip_while(|&c| c == '0')
            .collect();
        if ascii.is_empty() {
            Digits("0".to_owned())
        } else {
            Digits(ascii)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value, if it fits.
    pub fn to_u128(&self) -> Option<u128> {
        self.0.parse().ok()
    }
}

impl Ord for Digits {
    fn cmp(&self, other: &Self) -> Ordering {
        // No leading zeros, so the longer run is the larger number.
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for Digits {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Digits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One element of a [`SortKey`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// A maximal run of decimal digits, compared by numeric value.
    Number(Digits),
    /// Everything between digit runs, lowercased. May be empty.
    Text(String),
}

impl Token {
    fn text(fragment: &str) -> Self {
        Token::Text(fragment.to_lowercase())
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Token::Number(_))
    }
}

impl Ord for Token {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Token::Number(a), Token::Number(b)) => a.cmp(b),
            (Token::Text(a), Token::Text(b)) => a.cmp(b),
            // Keys alternate text/number from a leading text token, so two keys
            // never disagree on type at a shared index. Still total.
            (Token::Number(_), Token::Text(_)) => Ordering::Less,
            (Token::Text(_), Token::Number(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Token {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Natural-order sort key of a name.
///
/// The layout is always `Text, Number, Text, ..., Text`: it starts and ends
/// with a (possibly empty) text token. Keys compare token by token, and a key
/// that is a prefix of another sorts first.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SortKey(SmallVec<[Token; 4]>);

impl SortKey {
    pub fn tokens(&self) -> &[Token] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Split `name` into alternating text and digit runs.
///
/// Boundary text runs are kept even when empty, so `"10"` becomes
/// `["", 10, ""]` and `""` becomes `[""]`.
pub fn natural_sort_key(name: &str) -> SortKey {
    let mut tokens = SmallVec::new();
    let mut rest = name;

    loop {
        let digits_start = rest
            .find(is_decimal_digit)
            .unwrap_or(rest.len());
        let (text, tail) = rest.split_at(digits_start);
        tokens.push(Token::text(text));

        if tail.is_empty() {
            break;
        }

        let digits_end = tail
            .find(|c: char| !is_decimal_digit(c))
            .unwrap_or(tail.len());
        let (digits, tail) = tail.split_at(digits_end);
        tokens.push(Token::Number(Digits::new(digits)));
        rest = tail;
    }

    SortKey(tokens)
}

/// Compare two names in natural order.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    natural_sort_key(a).cmp(&natural_sort_key(b))
}

#[cfg(test)]
#[path = "natural_tests.rs"]
mod tests;
