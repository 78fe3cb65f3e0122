use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Aircraft tail number; the primary key of a [`FlightRecord`].
///
/// A `TailNumber` is guaranteed non-empty: the empty string is rejected at
/// construction and at deserialization, so a value of this type is always a
/// usable ledger key.
///
/// [`FlightRecord`]: crate::FlightRecord
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TailNumber(String);

impl TailNumber {
    /// Create a tail number, rejecting the empty string.
    pub fn new(value: impl Into<String>) -> Result<Self, TypeError> {
        let value = value.into();
        if value.is_empty() {
            return Err(TypeError::EmptyTailNumber);
        }
        Ok(Self(value))
    }

    /// The tail number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TailNumber {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TailNumber> for String {
    fn from(tail: TailNumber) -> Self {
        tail.0
    }
}

impl AsRef<str> for TailNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TailNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_non_empty() {
        let tail = TailNumber::new("AC123").unwrap();
        assert_eq!(tail.as_str(), "AC123");
        assert_eq!(tail.to_string(), "AC123");
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(TailNumber::new("").unwrap_err(), TypeError::EmptyTailNumber);
    }

    #[test]
    fn serializes_as_plain_string() {
        let tail = TailNumber::new("AC123").unwrap();
        assert_eq!(serde_json::to_string(&tail).unwrap(), "\"AC123\"");
    }

    #[test]
    fn deserialization_rejects_empty() {
        let result: Result<TailNumber, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }

    #[test]
    fn roundtrips_through_serde() {
        let tail = TailNumber::new("N747BA").unwrap();
        let json = serde_json::to_string(&tail).unwrap();
        let back: TailNumber = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tail);
    }
}
