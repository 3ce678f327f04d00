//! Monetary amount candidates.
//!
//! Matches grouped decimals such as `1,234.56`, `1.234,56` or `99.00` and
//! rewrites every comma to a period. The rewrite does not interpret the
//! separators: `1.234,56` becomes `1.234.56`. Callers depend on this exact
//! output, so locale-aware parsing is left to the client.

use super::patterns::AMOUNT;
use super::FieldScanner;

/// Amount scanner.
#[derive(Debug, Clone, Copy, Default)]
pub struct AmountScanner;

impl FieldScanner for AmountScanner {
    fn field(&self) -> &'static str {
        "amounts"
    }

    fn matches(&self, text: &str) -> Vec<String> {
        AMOUNT
            .find_iter(text)
            .map(|m| normalize_amount(m.as_str()))
            .collect()
    }
}

/// Replace every comma with a period.
pub fn normalize_amount(raw: &str) -> String {
    raw.replace(',', ".")
}
