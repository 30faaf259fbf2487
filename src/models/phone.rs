//! Phone number model
//!
//! Phone numbers are stored verbatim. No format is enforced and equality is an
//! exact string match.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A phone number attached to a contact
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    pub fn new(number: impl Into<String>) -> Self {
        Self(number.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    /// Check for an exact match against a raw number
    pub fn matches(&self, number: &str) -> bool {
        self.0 == number
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Join phones the way they are shown to users: `111; 222`
pub fn join_phones(phones: &[Phone]) -> String {
    phones
        .iter()
        .map(Phone::value)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_only() {
        let phone = Phone::new("0501234567");
        assert!(phone.matches("0501234567"));
        assert!(!phone.matches("050 123 4567"));
        assert!(!phone.matches("050123456"));
    }

    #[test]
    fn test_join_phones() {
        let phones = vec![Phone::new("111"), Phone::new("222")];
        assert_eq!(join_phones(&phones), "111; 222");
        assert_eq!(join_phones(&[]), "");
    }
}
