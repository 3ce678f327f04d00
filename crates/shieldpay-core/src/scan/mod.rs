//! Regex heuristics that surface candidate invoice fields from raw text.
//!
//! Three independent scans run over the full text. Each produces a list of
//! matches with duplicates removed, keeping the order of first occurrence.
//! A substring may land in more than one list.

pub mod amounts;
pub mod emails;
pub mod iban;
pub mod patterns;

pub use amounts::{normalize_amount, AmountScanner};
pub use emails::EmailScanner;
pub use iban::{format_iban, validate_iban, IbanScanner};

use std::collections::HashSet;

use crate::models::fields::CandidateFieldSet;

/// A single heuristic scan over extracted text.
pub trait FieldScanner {
    /// Name of the response field this scanner fills.
    fn field(&self) -> &'static str;

    /// All candidates in match order, duplicates included.
    fn matches(&self, text: &str) -> Vec<String>;

    /// Candidates with duplicates removed, first occurrence kept.
    fn scan(&self, text: &str) -> Vec<String> {
        unique_in_order(self.matches(text))
    }
}

/// Drop repeated values, keeping the first occurrence of each.
pub fn unique_in_order<I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|value| seen.insert(value.clone()))
        .collect()
}

/// Run all three scans over `text`.
pub fn scan_fields(text: &str) -> CandidateFieldSet {
    CandidateFieldSet {
        emails: EmailScanner.scan(text),
        amounts: AmountScanner.scan(text),
        ibans: IbanScanner.scan(text),
    }
}
