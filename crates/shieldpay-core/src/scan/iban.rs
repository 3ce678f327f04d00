//! IBAN-like token candidates.
//!
//! The scanner only checks shape: two letters followed by at least ten
//! alphanumerics. Checksum vetting is available separately through
//! [`validate_iban`] and is never applied by the scanner itself.

use super::patterns::IBAN_LIKE;
use super::FieldScanner;

/// IBAN-like token scanner.
#[derive(Debug, Clone, Copy, Default)]
pub struct IbanScanner;

impl FieldScanner for IbanScanner {
    fn field(&self) -> &'static str {
        "ibans"
    }

    fn matches(&self, text: &str) -> Vec<String> {
        IBAN_LIKE
            .find_iter(text)
            .map(|m| m.as_str().trim().to_string())
            .collect()
    }
}

/// Validate an IBAN with the ISO 13616 MOD-97 check.
///
/// Whitespace is ignored and letters are compared case-insensitively.
pub fn validate_iban(candidate: &str) -> bool {
    let iban: Vec<char> = candidate
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect();

    if iban.len() < 5 || iban.len() > 34 {
        return false;
    }
    if !iban[..2].iter().all(|c| c.is_ascii_alphabetic())
        || !iban[2..4].iter().all(|c| c.is_ascii_digit())
    {
        return false;
    }

    // Country code and check digits move to the end; letters count as 10..=35
    let mut remainder: u32 = 0;
    for c in iban[4..].iter().chain(&iban[..4]) {
        let value = match c.to_digit(36) {
            Some(v) => v,
            None => return false,
        };
        remainder = if value < 10 {
            (remainder * 10 + value) % 97
        } else {
            (remainder * 100 + value) % 97
        };
    }

    remainder == 1
}

/// Format an IBAN in groups of 4 characters.
pub fn format_iban(iban: &str) -> String {
    let cleaned: Vec<char> = iban.chars().filter(|c| !c.is_whitespace()).collect();

    cleaned
        .chunks(4)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_overmatches_invalid_codes() {
        assert_eq!(IbanScanner.scan("ref XX1234567890 end"), vec!["XX1234567890"]);
        assert!(!validate_iban("XX1234567890"));
    }

    #[test]
    fn test_minimum_length() {
        assert!(IbanScanner.scan("AB123456789").is_empty());
        assert_eq!(IbanScanner.scan("AB1234567890"), vec!["AB1234567890"]);
    }

    #[test]
    fn test_case_insensitive_without_normalizing() {
        assert_eq!(
            IbanScanner.scan("de89370400440532013000 DE89370400440532013000"),
            vec!["de89370400440532013000", "DE89370400440532013000"]
        );
    }

    #[test]
    fn test_plain_words_match_too() {
        assert_eq!(IbanScanner.scan("Transportation"), vec!["Transportation"]);
    }

    #[test]
    fn test_grouped_iban_not_joined() {
        assert!(IbanScanner.scan("PL61 1090 1014 0000 0712 1981 2874").is_empty());
    }

    #[test]
    fn test_validate_iban() {
        assert!(validate_iban("PL61109010140000071219812874"));
        assert!(validate_iban("PL 61 1090 1014 0000 0712 1981 2874"));
        assert!(validate_iban("DE89370400440532013000"));
        assert!(validate_iban("gb82west12345698765432"));
        assert!(!validate_iban("PL00000000000000000000000000"));
        assert!(!validate_iban("PL123"));
        assert!(!validate_iban("DE89-3704-0044-0532-0130-00"));
    }

    #[test]
    fn test_format_iban() {
        assert_eq!(
            format_iban("PL61109010140000071219812874"),
            "PL61 1090 1014 0000 0712 1981 2874"
        );
    }
}
