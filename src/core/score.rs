//! Bulls and cows scoring
//!
//! A score is the feedback for one guess: bulls are digits in the right position,
//! cows are shared digits in the wrong position.

use super::{DIGITS, Number};

/// Feedback for a guess against the secret
///
/// Invariant: `bulls + cows <= 4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Score {
    bulls: u8,
    cows: u8,
}

impl Score {
    /// Every digit in place
    pub const WIN: Self = Self {
        bulls: DIGITS as u8,
        cows: 0,
    };

    /// Create a score from raw counts
    ///
    /// # Panics
    /// Panics in debug mode if `bulls + cows > 4`
    #[inline]
    #[must_use]
    pub const fn new(bulls: u8, cows: u8) -> Self {
        debug_assert!(bulls as usize + cows as usize <= DIGITS);
        Self { bulls, cows }
    }

    /// Score `guess` against `secret`
    ///
    /// Cows are counted as shared digit occurrences minus bulls, so repeated digits
    /// would be handled the same way even though validated numbers never have them.
    ///
    /// # Examples
    /// ```
    /// use bulls_and_cows::core::{Number, Score};
    ///
    /// let secret = Number::parse("1234").unwrap();
    /// let guess = Number::parse("1243").unwrap();
    /// assert_eq!(Score::calculate(&secret, &guess), Score::new(2, 2));
    /// ```
    #[must_use]
    pub fn calculate(secret: &Number, guess: &Number) -> Self {
        let bulls = secret
            .digits()
            .iter()
            .zip(guess.digits())
            .filter(|(s, g)| s == g)
            .count() as u8;

        let secret_counts = secret.digit_counts();
        let shared: u8 = guess
            .digit_counts()
            .iter()
            .map(|(digit, &count)| count.min(secret_counts.get(digit).copied().unwrap_or(0)))
            .sum();

        Self {
            bulls,
            cows: shared - bulls,
        }
    }

    #[inline]
    #[must_use]
    pub const fn bulls(self) -> u8 {
        self.bulls
    }

    #[inline]
    #[must_use]
    pub const fn cows(self) -> u8 {
        self.cows
    }

    /// Check if the guess found the secret
    #[inline]
    #[must_use]
    pub fn is_win(self) -> bool {
        self == Self::WIN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(secret: &str, guess: &str) -> Score {
        Score::calculate(
            &Number::parse(secret).unwrap(),
            &Number::parse(guess).unwrap(),
        )
    }

    #[test]
    fn exact_match_is_win() {
        let s = score("1234", "1234");
        assert_eq!(s, Score::new(4, 0));
        assert_eq!(s, Score::WIN);
        assert!(s.is_win());
    }

    #[test]
    fn only_four_bulls_is_win() {
        assert!(Score::WIN.is_win());
        assert!(!Score::new(3, 0).is_win());
        assert!(!Score::new(0, 4).is_win());
    }

    #[test]
    fn all_cows() {
        assert_eq!(score("1234", "4321"), Score::new(0, 4));
    }

    #[test]
    fn mixed() {
        let s = score("1234", "1243");
        assert_eq!(s.bulls(), 2);
        assert_eq!(s.cows(), 2);
        assert!(!s.is_win());
    }

    #[test]
    fn nothing_shared() {
        assert_eq!(score("1234", "5678"), Score::default());
    }

    #[test]
    fn scoring_is_symmetric_for_unique_digits() {
        assert_eq!(score("1945", "5491"), score("5491", "1945"));
        assert_eq!(score("1945", "5491"), Score::new(0, 4));
    }

    #[test]
    fn bulls_plus_cows_never_exceed_four() {
        let numbers: Vec<Number> = (1000..10_000)
            .step_by(37)
            .filter_map(|n| Number::parse(&n.to_string()).ok())
            .collect();

        for secret in &numbers {
            for guess in numbers.iter().take(40) {
                let s = Score::calculate(secret, guess);
                assert!(usize::from(s.bulls() + s.cows()) <= DIGITS);
                assert_eq!(s.is_win(), secret == guess);
            }
        }
    }
}
