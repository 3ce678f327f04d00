//! Email address candidates.

use super::patterns::EMAIL;
use super::FieldScanner;

/// Email scanner.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailScanner;

impl FieldScanner for EmailScanner {
    fn field(&self) -> &'static str {
        "emails"
    }

    fn matches(&self, text: &str) -> Vec<String> {
        EMAIL
            .find_iter(text)
            .map(|m| m.as_str().trim().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_duplicate_collapses() {
        let text = "a@b.com ... a@b.com";
        assert_eq!(EmailScanner.scan(text), vec!["a@b.com"]);
    }

    #[test]
    fn test_case_insensitive_and_preserved() {
        let text = "Contact: Jan.Kowalski+faktury@Firma.PL or jan@firma.pl";
        assert_eq!(
            EmailScanner.scan(text),
            vec!["Jan.Kowalski+faktury@Firma.PL", "jan@firma.pl"]
        );
    }

    #[test]
    fn test_requires_alphabetic_tld() {
        assert!(EmailScanner.scan("user@host.c0").is_empty());
        assert!(EmailScanner.scan("user@host.c").is_empty());
        assert!(EmailScanner.scan("no at sign here.com").is_empty());
    }

    #[test]
    fn test_subdomains_kept_whole() {
        assert_eq!(
            EmailScanner.scan("mail ops@eu.billing.example.org now"),
            vec!["ops@eu.billing.example.org"]
        );
    }

    #[test]
    fn test_non_ascii_local_part_not_matched() {
        // 'ł' sits right before '@' and is outside the local-part class
        assert!(EmailScanner.scan("michał@poczta.pl").is_empty());
        assert_eq!(EmailScanner.scan("łukasz.nowak@poczta.pl"), vec!["ukasz.nowak@poczta.pl"]);
    }
}
