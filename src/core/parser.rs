use crate::utils::error::{RomanError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// 七個羅馬數字符號與其數值
pub const SYMBOL_TABLE: [(char, u32); 7] = [
    ('I', 1),
    ('V', 5),
    ('X', 10),
    ('L', 50),
    ('C', 100),
    ('D', 500),
    ('M', 1000),
];

// 千位、百位、十位、個位各自一組；空字串另外檢查
static ROMAN_NUMERAL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^M*(C[MD]|D?C*)(X[CL]|L?X*)(I[XV]|V?I*)$")
        .expect("roman numeral pattern must compile")
});

pub fn symbol_value(symbol: char) -> Option<u32> {
    SYMBOL_TABLE
        .iter()
        .find(|(s, _)| *s == symbol)
        .map(|(_, value)| *value)
}

/// 去除前後空白並轉成大寫
///
/// Only ASCII letters are folded, so a non-ASCII letter can never turn into
/// one of the seven symbols.
pub fn normalize(input: &str) -> String {
    input.trim().to_ascii_uppercase()
}

/// Checks an already normalized string against the numeral grammar.
pub fn is_valid_numeral(normalized: &str) -> bool {
    !normalized.is_empty() && ROMAN_NUMERAL_PATTERN.is_match(normalized)
}

/// Converts a Roman numeral to its integer value.
///
/// Surrounding whitespace is ignored and lowercase letters are accepted.
/// On failure the error quotes `input` exactly as given.
///
/// ```rust
/// use roman_numeral::core::parser::to_int;
///
/// assert_eq!(to_int("MCMXCIX").unwrap(), 1999);
/// assert_eq!(to_int(" iv ").unwrap(), 4);
/// assert!(to_int("IIX").is_err());
/// ```
pub fn to_int(input: &str) -> Result<u64> {
    let numeral = normalize(input);
    if !is_valid_numeral(&numeral) {
        tracing::debug!("❌ Rejected <{}>", input);
        return Err(RomanError::invalid_numeral(input));
    }

    let values = numeral
        .chars()
        .map(symbol_value)
        .collect::<Option<Vec<u32>>>()
        .ok_or_else(|| RomanError::invalid_numeral(input))?;

    let mut total: i64 = 0;
    for (i, &current) in values.iter().enumerate() {
        // 最後一個符號跟自己比較，一定是加
        let next = values.get(i + 1).copied().unwrap_or(current);
        let current = i64::from(current);
        total = if i64::from(next) > current {
            total.checked_sub(current)
        } else {
            total.checked_add(current)
        }
        .ok_or_else(|| RomanError::invalid_numeral(input))?;
    }

    let value = u64::try_from(total).map_err(|_| RomanError::invalid_numeral(input))?;
    tracing::debug!("✅ <{}> = {}", input, value);
    Ok(value)
}

/// Object-style entry point for callers that hold a parser value.
#[derive(Debug, Default, Clone, Copy)]
pub struct RomanNumeralParser;

impl RomanNumeralParser {
    pub fn new() -> Self {
        Self
    }

    pub fn to_int(&self, input: &str) -> Result<u64> {
        to_int(input)
    }

    pub fn is_valid(&self, input: &str) -> bool {
        is_valid_numeral(&normalize(input))
    }
}

/// A successfully parsed numeral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct RomanNumeral(u64);

impl RomanNumeral {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl FromStr for RomanNumeral {
    type Err = RomanError;

    fn from_str(s: &str) -> Result<Self> {
        to_int(s).map(RomanNumeral)
    }
}

impl fmt::Display for RomanNumeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<RomanNumeral> for u64 {
    fn from(numeral: RomanNumeral) -> Self {
        numeral.0
    }
}
