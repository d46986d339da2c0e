//! Four-digit game numbers
//!
//! A `Number` is the shape shared by the secret and every accepted guess: exactly four
//! distinct ASCII digits, the first of which is not zero.

use rand::Rng;
use rand::seq::SliceRandom;
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;

/// Number of digits in a secret or a guess
pub const DIGITS: usize = 4;

/// A validated four-digit number with unique digits and no leading zero
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Number {
    text: String,
    digits: [u8; DIGITS],
}

/// A single formatting rule broken by a candidate number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    NonDigit,
    WrongLength(usize),
    LeadingZero,
    RepeatedDigit,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonDigit => write!(f, "Your guess must contain digits only."),
            Self::WrongLength(_) => write!(f, "Your guess must have {DIGITS} digits."),
            Self::LeadingZero => write!(f, "Your guess must not start with 0."),
            Self::RepeatedDigit => write!(f, "Digits must be unique."),
        }
    }
}

/// Error returned when input is not a valid number
///
/// Carries every violated rule, in rule order, not just the first one found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidNumber {
    input: String,
    violations: Vec<Violation>,
}

impl InvalidNumber {
    /// The rejected input
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Every rule the input broke
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }
}

impl fmt::Display for InvalidNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a valid number:", self.input)?;
        for violation in &self.violations {
            write!(f, " {violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for InvalidNumber {}

impl Number {
    /// Validate raw input as a number
    ///
    /// The caller is expected to strip surrounding whitespace first. All four rules are
    /// checked on every call:
    /// 1. only decimal digits (an empty string fails this rule)
    /// 2. exactly four characters
    /// 3. no leading zero
    /// 4. no repeated characters
    ///
    /// # Errors
    /// Returns `InvalidNumber` listing every violated rule.
    ///
    /// # Examples
    /// ```
    /// use bulls_and_cows::core::{Number, Violation};
    ///
    /// let number = Number::parse("1234").unwrap();
    /// assert_eq!(number.text(), "1234");
    ///
    /// let err = Number::parse("0113").unwrap_err();
    /// assert_eq!(err.violations(), &[Violation::LeadingZero, Violation::RepeatedDigit]);
    /// ```
    ///
    /// # Panics
    /// Will not panic - the `expect()` call is guarded by the length and digit checks.
    pub fn parse(input: &str) -> Result<Self, InvalidNumber> {
        let mut violations = Vec::new();

        if input.is_empty() || !input.chars().all(|c| c.is_ascii_digit()) {
            violations.push(Violation::NonDigit);
        }

        let len = input.chars().count();
        if len != DIGITS {
            violations.push(Violation::WrongLength(len));
        }

        if input.starts_with('0') {
            violations.push(Violation::LeadingZero);
        }

        let mut seen = FxHashSet::default();
        if !input.chars().all(|c| seen.insert(c)) {
            violations.push(Violation::RepeatedDigit);
        }

        if !violations.is_empty() {
            return Err(InvalidNumber {
                input: input.to_string(),
                violations,
            });
        }

        // Four ASCII digits at this point, so four bytes
        let digits: [u8; DIGITS] = input
            .as_bytes()
            .try_into()
            .expect("length already validated");

        Ok(Self {
            text: input.to_string(),
            digits,
        })
    }

    /// Generate a random secret
    ///
    /// The first digit is drawn uniformly from 1-9; the other three are drawn without
    /// replacement from the nine remaining digits, in random order.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let first = rng.random_range(b'1'..=b'9');
        let mut pool: Vec<u8> = (b'0'..=b'9').filter(|&d| d != first).collect();
        let (rest, _) = pool.partial_shuffle(rng, DIGITS - 1);

        let mut digits = [first; DIGITS];
        digits[1..].copy_from_slice(rest);

        Self {
            text: digits.iter().map(|&d| char::from(d)).collect(),
            digits,
        }
    }

    /// Get the number as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the digits as ASCII bytes
    #[inline]
    #[must_use]
    pub const fn digits(&self) -> &[u8; DIGITS] {
        &self.digits
    }

    /// Occurrences of each digit
    #[inline]
    pub(crate) fn digit_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &d in &self.digits {
            *counts.entry(d).or_insert(0) += 1;
        }
        counts
    }
}

impl std::str::FromStr for Number {
    type Err = InvalidNumber;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
