//! Significant-digit extraction from raw observation tokens
//!
//! Each token is reduced to its significant digits: every non-digit
//! character is dropped (currency symbols, signs, decimal points,
//! separators) and leading zeros are stripped. `"-$0.0230"` becomes `"230"`.

use crate::mode::Mode;

/// Result of running the extractor over a whole dataset
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Digit values in input order, every one inside the mode's domain
    pub values: Vec<u16>,
    /// Tokens that had too few significant digits for the mode
    pub rejected: usize,
}

impl Extraction {
    /// Total number of tokens seen
    pub fn seen(&self) -> usize {
        self.values.len() + self.rejected
    }
}

/// Reduce a token to its significant digits
///
/// Returns an empty string when the token has no non-zero digit.
pub fn significant_digits(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_digit)
        .skip_while(|&c| c == '0')
        .collect()
}

/// Extract the digit value for `mode` from a single token
///
/// Returns `None` when the token has fewer significant digits than the mode
/// requires; such observations are excluded from the analysis.
pub fn extract_digit(raw: &str, mode: Mode) -> Option<u16> {
    let digits = significant_digits(raw);
    let digits = digits.as_bytes();

    if digits.len() < mode.required_digits() {
        return None;
    }

    let value = match mode {
        Mode::FirstDigit => digit_at(digits, 0),
        Mode::SecondDigit => digit_at(digits, 1),
        Mode::ThirdDigit => digit_at(digits, 2),
        Mode::FirstTwoDigits | Mode::FirstThreeDigits => digits[..mode.required_digits()]
            .iter()
            .fold(0u16, |acc, &b| acc * 10 + u16::from(b - b'0')),
    };

    debug_assert!(mode.domain().contains(&value));
    Some(value)
}

fn digit_at(digits: &[u8], index: usize) -> u16 {
    u16::from(digits[index] - b'0')
}

/// Extract digit values from every token, counting rejections
pub fn extract_all<S: AsRef<str>>(tokens: &[S], mode: Mode) -> Extraction {
    let mut extraction = Extraction {
        values: Vec::with_capacity(tokens.len()),
        rejected: 0,
    };

    for token in tokens {
        let token = token.as_ref();
        match extract_digit(token, mode) {
            Some(value) => extraction.values.push(value),
            None => {
                tracing::trace!(token, mode = %mode, "rejected observation");
                extraction.rejected += 1;
            }
        }
    }

    tracing::debug!(
        mode = %mode,
        accepted = extraction.values.len(),
        rejected = extraction.rejected,
        "digit extraction complete"
    );

    extraction
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_significant_digits_strips_noise_and_leading_zeros() {
        assert_eq!(significant_digits("00230"), "230");
        assert_eq!(significant_digits("$1,234.50"), "123450");
        assert_eq!(significant_digits("-0.0071"), "71");
        assert_eq!(significant_digits("abc"), "");
        assert_eq!(significant_digits("0000"), "");
        assert_eq!(significant_digits(""), "");
    }

    #[test]
    fn test_extract_leading_zero_token() {
        assert_eq!(extract_digit("00012345", Mode::FirstDigit), Some(1));
        assert_eq!(extract_digit("00012345", Mode::SecondDigit), Some(2));
        assert_eq!(extract_digit("00012345", Mode::ThirdDigit), Some(3));
        assert_eq!(extract_digit("00012345", Mode::FirstTwoDigits), Some(12));
        assert_eq!(extract_digit("00012345", Mode::FirstThreeDigits), Some(123));
    }

    #[test]
    fn test_extract_rejects_tokens_without_digits() {
        for mode in Mode::ALL {
            assert_eq!(extract_digit("abc", mode), None, "mode {}", mode);
            assert_eq!(extract_digit("000", mode), None, "mode {}", mode);
            assert_eq!(extract_digit("", mode), None, "mode {}", mode);
        }
    }

    #[test]
    fn test_extract_rejects_short_tokens() {
        assert_eq!(extract_digit("5", Mode::ThirdDigit), None);
        assert_eq!(extract_digit("5", Mode::SecondDigit), None);
        assert_eq!(extract_digit("5", Mode::FirstTwoDigits), None);
        assert_eq!(extract_digit("57", Mode::FirstThreeDigits), None);
        assert_eq!(extract_digit("5", Mode::FirstDigit), Some(5));
    }

    #[test]
    fn test_extract_interior_zeros_are_kept() {
        assert_eq!(extract_digit("1.05", Mode::SecondDigit), Some(0));
        assert_eq!(extract_digit("1.05", Mode::ThirdDigit), Some(5));
        assert_eq!(extract_digit("100", Mode::FirstThreeDigits), Some(100));
        assert_eq!(extract_digit("10", Mode::FirstTwoDigits), Some(10));
    }

    #[test]
    fn test_extract_currency_and_signs() {
        assert_eq!(extract_digit("-$4,821.17", Mode::FirstTwoDigits), Some(48));
        assert_eq!(extract_digit("€0.93", Mode::FirstDigit), Some(9));
        assert_eq!(extract_digit("+7e3", Mode::SecondDigit), Some(3));
    }

    #[test]
    fn test_extract_all_counts_rejections() {
        let tokens = ["123", "abc", "4", "0.0", "56"];
        let extraction = extract_all(&tokens, Mode::SecondDigit);
        assert_eq!(extraction.values, vec![2, 6]);
        assert_eq!(extraction.rejected, 3);
        assert_eq!(extraction.seen(), 5);
    }

    #[test]
    fn test_extract_all_accepts_owned_strings() {
        let tokens = vec!["9".to_string(), "81".to_string()];
        let extraction = extract_all(&tokens, Mode::FirstDigit);
        assert_eq!(extraction.values, vec![9, 8]);
        assert_eq!(extraction.rejected, 0);
    }
}
