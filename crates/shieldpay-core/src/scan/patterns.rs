//! Regex patterns for invoice field heuristics.
//!
//! Classes, digits and word boundaries are ASCII-only (`-u`), so `\d` never
//! matches non-Latin digits and `\b` treats accented letters as non-word.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // local-part@domain.tld, case-insensitive
    pub static ref EMAIL: Regex = Regex::new(
        r"(?i-u)[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}"
    ).unwrap();

    // 1-3 digits, optional ,/. grouped thousands, ,/. and two decimals
    pub static ref AMOUNT: Regex = Regex::new(
        r"(?-u)\b[0-9]{1,3}(?:[,.][0-9]{3})*[,.][0-9]{2}\b"
    ).unwrap();

    // Two letters followed by 10+ alphanumerics, no checksum
    pub static ref IBAN_LIKE: Regex = Regex::new(
        r"(?i-u)\b[A-Z]{2}[0-9A-Z]{10,}\b"
    ).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patterns_compile() {
        assert!(EMAIL.is_match("jan@example.com"));
        assert!(AMOUNT.is_match("12.50"));
        assert!(IBAN_LIKE.is_match("PL61109010140000071219812874"));
    }

    #[test]
    fn test_ascii_digits_only() {
        assert!(!AMOUNT.is_match("١٢.٥٠"));
    }
}
