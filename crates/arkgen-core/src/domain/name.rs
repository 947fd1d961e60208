//! Artifact name normalization.
//!
//! A caller supplies a free-form, underscore-delimited name ("custom_button");
//! the engine derives the canonical PascalCase identifier ("CustomButton")
//! used for file names and template parameters.

use std::fmt;

use serde::Serialize;

use crate::domain::error::DomainError;

/// The delimiter that separates words in a raw artifact name.
pub const NAME_DELIMITER: char = '_';

/// A normalized, delimiter-free, capitalized-word identifier.
///
/// Pure function of the raw name; recomputed per invocation, never stored
/// across runs. Invariant: non-empty, contains no delimiter characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CanonicalIdentifier(String);

impl CanonicalIdentifier {
    /// Normalize a raw name into its canonical form.
    ///
    /// Splits on [`NAME_DELIMITER`], uppercases each word's first character,
    /// and concatenates. Interior capitalization the caller supplied is
    /// preserved: `"http_Client"` becomes `"HttpClient"` only in the first
    /// letters; the rest of each word is untouched. Consecutive delimiters
    /// produce empty words, which are skipped.
    ///
    /// # Errors
    ///
    /// `DomainError::InvalidName` when `raw` is empty after trimming,
    /// contains only delimiters, or contains path separators. The
    /// identifier names exactly one file under the output root; a
    /// separator would let it address paths outside it.
    pub fn normalize(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidName {
                name: raw.to_string(),
                reason: "name is empty".into(),
            });
        }
        if trimmed.contains(['/', '\\']) {
            return Err(DomainError::InvalidName {
                name: raw.to_string(),
                reason: "name must not contain path separators".into(),
            });
        }

        let mut out = String::with_capacity(trimmed.len());
        for word in trimmed.split(NAME_DELIMITER) {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    // to_uppercase handles multi-char expansions correctly
                    out.extend(first.to_uppercase());
                    out.push_str(chars.as_str());
                }
                None => continue, // empty word from consecutive delimiters
            }
        }

        if out.is_empty() {
            return Err(DomainError::InvalidName {
                name: raw.to_string(),
                reason: "name contains only delimiters".into(),
            });
        }

        Ok(Self(out))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for CanonicalIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snake_case_becomes_pascal() {
        assert_eq!(
            CanonicalIdentifier::normalize("custom_button").unwrap().as_str(),
            "CustomButton"
        );
        assert_eq!(
            CanonicalIdentifier::normalize("user_detail_page").unwrap().as_str(),
            "UserDetailPage"
        );
    }

    #[test]
    fn single_word_is_capitalized() {
        assert_eq!(CanonicalIdentifier::normalize("user").unwrap().as_str(), "User");
    }

    #[test]
    fn interior_capitalization_is_preserved() {
        assert_eq!(
            CanonicalIdentifier::normalize("http_DNS_cache").unwrap().as_str(),
            "HttpDNSCache"
        );
        assert_eq!(
            CanonicalIdentifier::normalize("myButton").unwrap().as_str(),
            "MyButton"
        );
    }

    #[test]
    fn already_pascal_name_is_unchanged() {
        assert_eq!(CanonicalIdentifier::normalize("MyApp").unwrap().as_str(), "MyApp");
    }

    #[test]
    fn consecutive_delimiters_are_skipped() {
        assert_eq!(
            CanonicalIdentifier::normalize("custom__button").unwrap().as_str(),
            "CustomButton"
        );
        assert_eq!(
            CanonicalIdentifier::normalize("_custom_button_").unwrap().as_str(),
            "CustomButton"
        );
    }

    #[test]
    fn empty_name_is_rejected() {
        assert!(matches!(
            CanonicalIdentifier::normalize(""),
            Err(DomainError::InvalidName { .. })
        ));
        assert!(matches!(
            CanonicalIdentifier::normalize("   "),
            Err(DomainError::InvalidName { .. })
        ));
    }

    #[test]
    fn path_separators_are_rejected() {
        for raw in ["../evil", "a/b", "..\\evil", "components/button"] {
            assert!(
                matches!(
                    CanonicalIdentifier::normalize(raw),
                    Err(DomainError::InvalidName { .. })
                ),
                "raw: {raw}"
            );
        }
    }

    #[test]
    fn delimiter_only_name_is_rejected() {
        assert!(matches!(
            CanonicalIdentifier::normalize("___"),
            Err(DomainError::InvalidName { .. })
        ));
    }

    #[test]
    fn result_contains_no_delimiter_and_starts_uppercase() {
        for raw in ["a", "a_b", "foo_bar_baz", "x__y", "lower_UPPER"] {
            let ident = CanonicalIdentifier::normalize(raw).unwrap();
            assert!(!ident.as_str().contains(NAME_DELIMITER), "raw: {raw}");
            assert!(
                ident.as_str().chars().next().unwrap().is_uppercase(),
                "raw: {raw}"
            );
        }
    }
}
