//! Identifier types the obfuscator knows how to find and replace.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::obfuscator::ObfuscationError;

/// Categories of sensitive identifiers.
///
/// The set is closed: supporting a new identifier means adding a variant here
/// and a matching entry in the default pattern registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentifierType {
    /// US Social Security Number, `DDD-DD-DDDD`.
    Ssn,
}

impl IdentifierType {
    /// All supported identifier types.
    pub fn all() -> &'static [IdentifierType] {
        &[IdentifierType::Ssn]
    }

    /// Selector names of all supported identifier types, in declaration order.
    pub fn names() -> Vec<&'static str> {
        Self::all().iter().map(|t| t.as_str()).collect()
    }

    /// Canonical selector name.
    pub fn as_str(&self) -> &'static str {
        match self {
            IdentifierType::Ssn => "ssn",
        }
    }
}

impl fmt::Display for IdentifierType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdentifierType {
    type Err = ObfuscationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ObfuscationError::UnsupportedIdentifierType(s.to_string()))
    }
}
