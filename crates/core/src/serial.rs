//! Strongly-typed serial number identifier.

use serde::{Deserialize, Serialize};

/// Identifier of a stock item.
///
/// Serial numbers are operator-supplied strings, not generated ids. They are
/// the sole identity key of a record and never change once the record exists.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SerialNumber(String);

impl SerialNumber {
    pub fn new(serial: impl Into<String>) -> Self {
        Self(serial.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl core::fmt::Display for SerialNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<String> for SerialNumber {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for SerialNumber {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_raw_serial() {
        let serial = SerialNumber::new("SKU-001");
        assert_eq!(serial.to_string(), "SKU-001");
        assert_eq!(serial.as_str(), "SKU-001");
    }

    #[test]
    fn serializes_as_a_bare_string() {
        let serial = SerialNumber::new("SKU-001");
        let value = serde_json::to_value(&serial).unwrap();
        assert_eq!(value, serde_json::json!("SKU-001"));
    }
}
