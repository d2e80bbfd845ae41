use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// A symptom label in canonical form: trimmed, lower-cased, non-empty.
///
/// Construction goes through [`Symptom::parse`], so two `Symptom`s compare
/// equal exactly when their canonical forms do.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Symptom(String);

impl Symptom {
    /// Canonicalize a raw label. Returns `None` for blank input.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symptom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Symptom {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for Symptom {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Symptom::parse(&raw).ok_or_else(|| serde::de::Error::custom("symptom label is blank"))
    }
}
