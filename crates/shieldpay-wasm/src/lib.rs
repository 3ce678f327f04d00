//! WASM bindings for the ShieldPay field heuristics.
//!
//! Lets the browser client run the same scans as the `/extract` endpoint over
//! text it already has, and vet IBAN-like candidates with a real checksum.

use wasm_bindgen::prelude::*;

use shieldpay_core::scan::{self, FieldScanner};
use shieldpay_core::CandidateFieldSet;

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Scan text for candidate fields.
///
/// Returns `{ emails, amounts, ibans }`, identical to the lists the HTTP
/// endpoint reports for the same text.
#[wasm_bindgen]
pub fn scan_text(text: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&scan::scan_fields(text))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Validate an IBAN (MOD-97 checksum).
#[wasm_bindgen]
pub fn validate_iban(iban: &str) -> bool {
    scan::validate_iban(iban)
}

/// Format IBAN in groups of 4.
#[wasm_bindgen]
pub fn format_iban(iban: &str) -> String {
    scan::format_iban(iban)
}

/// Field scanner for browser use, optionally filtering IBAN-like
/// candidates down to checksum-valid ones.
#[wasm_bindgen]
pub struct CandidateScanner {
    checked_ibans: bool,
}

#[wasm_bindgen]
impl CandidateScanner {
    /// Create a new scanner with the default (unchecked) behaviour.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            checked_ibans: false,
        }
    }

    /// Keep only IBAN candidates that pass the MOD-97 check.
    #[wasm_bindgen]
    pub fn set_checked_ibans(&mut self, checked: bool) {
        self.checked_ibans = checked;
    }

    /// Scan text for candidate fields.
    #[wasm_bindgen]
    pub fn scan(&self, text: &str) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.scan_fields(text))
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Names of the lists `scan` returns, in response order.
    #[wasm_bindgen]
    pub fn fields() -> Vec<String> {
        [
            scan::EmailScanner.field(),
            scan::AmountScanner.field(),
            scan::IbanScanner.field(),
        ]
        .iter()
        .map(|name| name.to_string())
        .collect()
    }
}

impl CandidateScanner {
    fn scan_fields(&self, text: &str) -> CandidateFieldSet {
        let mut fields = scan::scan_fields(text);
        if self.checked_ibans {
            fields.ibans.retain(|candidate| scan::validate_iban(candidate));
        }
        fields
    }
}

impl Default for CandidateScanner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const TEXT: &str = "Pay DE89370400440532013000 or XX1234567890, total 12,00";

    #[test]
    fn test_default_scanner_matches_server() {
        let fields = CandidateScanner::new().scan_fields(TEXT);
        assert_eq!(fields, scan::scan_fields(TEXT));
        assert_eq!(fields.ibans, vec!["DE89370400440532013000", "XX1234567890"]);
    }

    #[test]
    fn test_checked_ibans() {
        let mut scanner = CandidateScanner::new();
        scanner.set_checked_ibans(true);

        let fields = scanner.scan_fields(TEXT);
        assert_eq!(fields.ibans, vec!["DE89370400440532013000"]);
        assert_eq!(fields.amounts, vec!["12.00"]);
    }

    #[test]
    fn test_field_order() {
        assert_eq!(CandidateScanner::fields(), vec!["emails", "amounts", "ibans"]);
    }

    #[test]
    fn test_iban_helpers() {
        assert!(validate_iban("GB82 WEST 1234 5698 7654 32"));
        assert_eq!(format_iban("GB82WEST12345698765432"), "GB82 WEST 1234 5698 7654 32");
    }
}
