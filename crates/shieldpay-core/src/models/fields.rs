//! Candidate field lists and the success payload built from them.

use serde::{Deserialize, Serialize};

/// Heuristically matched candidates found in extracted text.
///
/// Each list is free of duplicates and keeps first-occurrence order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateFieldSet {
    /// Email addresses.
    pub emails: Vec<String>,
    /// Grouped decimal amounts, commas rewritten to periods.
    pub amounts: Vec<String>,
    /// IBAN-like tokens (shape check only).
    pub ibans: Vec<String>,
}

impl CandidateFieldSet {
    /// True when no list holds a candidate.
    pub fn is_empty(&self) -> bool {
        self.emails.is_empty() && self.amounts.is_empty() && self.ibans.is_empty()
    }

    /// Total number of candidates across all lists.
    pub fn len(&self) -> usize {
        self.emails.len() + self.amounts.len() + self.ibans.len()
    }

    /// Iterate `(field, value)` pairs in list order: emails, amounts, ibans.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        let emails = self.emails.iter().map(|v| ("email", v.as_str()));
        let amounts = self.amounts.iter().map(|v| ("amount", v.as_str()));
        let ibans = self.ibans.iter().map(|v| ("iban", v.as_str()));
        emails.chain(amounts).chain(ibans)
    }
}

/// Result of running the pipeline over one document.
///
/// Serializes to `{ "text", "emails", "amounts", "ibans" }` in that order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionReport {
    /// Extracted text, exactly as the extractor produced it.
    pub text: String,

    #[serde(flatten)]
    pub fields: CandidateFieldSet,
}
