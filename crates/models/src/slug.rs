use std::fmt;

use crate::errors::ModelError;

/// An entry slug as the Content Store accepts it (letters in either case,
/// digits, `-`, `_`, `.`, `~`).
///
/// Uniqueness is the Content Store's business; this only rejects values that
/// cannot name a single path segment: empty, containing `/`, whitespace or
/// control characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    pub fn parse(raw: &str) -> Result<Self, ModelError> {
        let s = raw.trim();
        if s.is_empty() {
            return Err(ModelError::Validation("slug is empty".into()));
        }
        if s.len() > 200 {
            return Err(ModelError::Validation("slug is too long".into()));
        }
        if s.chars().any(|c| c == '/' || c.is_whitespace() || c.is_control()) {
            return Err(ModelError::Validation(format!("slug {s:?} is not a single path segment")));
        }
        Ok(Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_typical_slugs() {
        assert_eq!(Slug::parse("site-vitrine").unwrap().as_str(), "site-vitrine");
        assert_eq!(Slug::parse(" app_mobile-2024 ").unwrap().as_str(), "app_mobile-2024");
    }

    #[test]
    fn accepts_what_the_store_accepts() {
        for ok in ["Refonte-v2.0", "Site", "dou--ble", "-lead", "v1~beta", "a.b_c"] {
            assert_eq!(Slug::parse(ok).unwrap().as_str(), ok);
        }
    }

    #[test]
    fn rejects_unsafe_slugs() {
        for bad in ["", "   ", "a/b", "../admin", "a b", "tab\there", "nul\u{0}"] {
            assert!(Slug::parse(bad).is_err(), "{bad:?} should be rejected");
        }
    }
}
