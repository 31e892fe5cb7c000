//! Shared predicate rules for message payload fields
//!
//! Copyright (c) 2026 Courier Team
//! Licensed under the Apache-2.0 license

use regex::Regex;
use url::Url;

/// Template variable placeholder, e.g. `{{avatar}}`
pub(crate) const TEMPLATE_VARIABLE_PATTERN: &str = r"\{\{[^}]+\}\}";

/// Hostnames accepted by the URL shape rule: `localhost` or a dot suffix of
/// at least two letters
pub(crate) const HOSTNAME_PATTERN: &str = r"localhost|\.[a-zA-Z]{2,}$";

/// URL shape rules, with regexes compiled once at construction.
#[derive(Debug)]
pub(crate) struct UrlRules {
    template: Regex,
    hostname: Regex,
}

impl UrlRules {
    pub(crate) fn new() -> Self {
        Self {
            template: Regex::new(TEMPLATE_VARIABLE_PATTERN).expect("Valid regex pattern"),
            hostname: Regex::new(HOSTNAME_PATTERN).expect("Valid regex pattern"),
        }
    }

    /// A value passes the URL rule when it carries a template placeholder
    /// (substituted upstream, so it has no URL shape of its own), or when it
    /// parses as an absolute URL with an accepted hostname.
    pub(crate) fn is_url(&self, value: &str) -> bool {
        if self.template.is_match(value) {
            return true;
        }

        match Url::parse(value) {
            Ok(url) => url
                .host_str()
                .map(|host| self.hostname.is_match(host))
                .unwrap_or(false),
            Err(_) => false,
        }
    }

    /// Image URLs follow the same shape rule as every other URL; no
    /// file-extension restriction is applied.
    pub(crate) fn is_image_url(&self, value: &str) -> bool {
        self.is_url(value)
    }
}

/// Number of Unicode scalar values in a string. Field limits count
/// characters, not bytes.
pub(crate) fn char_count(value: &str) -> usize {
    value.chars().count()
}

/// Check a webhook username override against the platform's reserved names.
///
/// Returns the rejection reason, or `None` when the name is allowed. Matching
/// is case-insensitive; `clyde` and `discord` are rejected anywhere in the
/// name, `everyone` and `here` only as the whole name.
pub(crate) fn username_policy_violation(username: &str) -> Option<&'static str> {
    let lowered = username.to_lowercase();

    if lowered.contains("clyde") || lowered.contains("discord") {
        return Some("Username can't contain 'clyde' or 'discord'");
    }

    if lowered == "everyone" || lowered == "here" {
        return Some("Username can't be 'everyone' or 'here'");
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_rule_accepts_regular_urls() {
        let rules = UrlRules::new();
        assert!(rules.is_url("https://example.com/x.png"));
        assert!(rules.is_url("https://cdn.example.co/a/b?c=d"));
        assert!(rules.is_url("http://localhost:3000/avatar"));
    }

    #[test]
    fn test_url_rule_accepts_template_placeholders() {
        let rules = UrlRules::new();
        assert!(rules.is_url("{{avatar}}"));
        assert!(rules.is_url("https://example/{{user.id}}"));
    }

    #[test]
    fn test_url_rule_rejects_malformed_values() {
        let rules = UrlRules::new();
        assert!(!rules.is_url("not a url"));
        assert!(!rules.is_url("ftp://x"));
        assert!(!rules.is_url("https://nodotsuffix"));
        assert!(!rules.is_url(""));
    }

    #[test]
    fn test_url_rule_checks_hostname_not_scheme() {
        let rules = UrlRules::new();
        // Only the hostname shape is checked; the scheme is not restricted.
        assert!(rules.is_url("ftp://example.com/file"));
    }

    #[test]
    fn test_image_url_rule_matches_url_rule() {
        let rules = UrlRules::new();
        assert!(rules.is_image_url("https://example.com/not-an-image"));
        assert!(rules.is_image_url("{{avatar}}"));
        assert!(!rules.is_image_url("not a url"));
    }

    #[test]
    fn test_username_policy() {
        assert_eq!(username_policy_violation("CoolBot"), None);
        assert_eq!(
            username_policy_violation("Discord Bot"),
            Some("Username can't contain 'clyde' or 'discord'")
        );
        assert_eq!(
            username_policy_violation("xXclydeXx"),
            Some("Username can't contain 'clyde' or 'discord'")
        );
        assert_eq!(
            username_policy_violation("Everyone"),
            Some("Username can't be 'everyone' or 'here'")
        );
        assert_eq!(
            username_policy_violation("here"),
            Some("Username can't be 'everyone' or 'here'")
        );
        // substring only applies to the blocked fragments, not reserved names
        assert_eq!(username_policy_violation("here and there"), None);
    }

    #[test]
    fn test_char_count_is_scalar_values() {
        assert_eq!(char_count("héllo"), 5);
        assert_eq!(char_count(""), 0);
    }
}
